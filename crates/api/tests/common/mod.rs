#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{Request, Variables};
use chrono::Utc;
use serde_json::Value;
use tidyslot_api::graphql::{build_schema, BookingSchema};
use tidyslot_core::models::{Days, Week, WeekSchedule};
use tidyslot_db::MemoryBookingStore;
use uuid::Uuid;

pub struct TestContext {
    pub store: Arc<MemoryBookingStore>,
    pub schema: BookingSchema,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryBookingStore::new());
        let schema = build_schema(store.clone());
        Self { store, schema }
    }

    pub async fn execute(&self, query: &str, variables: Value) -> Value {
        execute(&self.schema, query, variables).await
    }
}

/// Runs a GraphQL operation and returns the whole response as JSON.
pub async fn execute(schema: &BookingSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).expect("GraphQL response serializes")
}

pub fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

pub fn assert_no_errors(response: &Value) {
    let errors = response["errors"].as_array().map(Vec::len).unwrap_or(0);
    assert_eq!(errors, 0, "unexpected errors: {}", response["errors"]);
}

pub fn open_schedule(date: &str) -> WeekSchedule {
    let week = Week {
        id: Uuid::new_v4(),
        date: date.to_string(),
        booking_id: None,
        created_at: Utc::now(),
    };
    let days = Days::open(week.id);
    WeekSchedule { week, days }
}

pub const WEEK_FIELDS: &str = r#"
    id
    date
    bookingId
    days {
      id
      monday { ...Slots }
      tuesday { ...Slots }
      wednesday { ...Slots }
      thursday { ...Slots }
      friday { ...Slots }
    }
"#;

pub const SLOT_FRAGMENT: &str = r#"
fragment Slots on WeekdaySlots {
  id
  weekday
  date
  eightTen
  tenTwelve
  twelveTwo
  twoFour
  fourSix
  openSlots
}
"#;

pub fn with_week_fields(operation: &str) -> String {
    format!("{}\n{}", operation.replace("WEEK_FIELDS", WEEK_FIELDS), SLOT_FRAGMENT)
}
