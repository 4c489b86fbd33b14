//! GraphQL schema for the booking calendar.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use tidyslot_db::BookingStore;

pub mod resolvers;
pub mod types;

use resolvers::{MutationRoot, QueryRoot};

pub type BookingSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the store available to every resolver.
pub fn build_schema(store: Arc<dyn BookingStore>) -> BookingSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
