use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use tidyslot_db::BookingStore;
use uuid::Uuid;

use super::types::{BookingObject, SlotValue, WeekObject, WeekdayValue};
use crate::handlers::{booking, week};
use crate::middleware::error_handling::graphql_error;

fn store<'a>(ctx: &'a Context<'_>) -> Result<&'a Arc<dyn BookingStore>> {
    ctx.data::<Arc<dyn BookingStore>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The week for an anchor date, created with every slot open if it does
    /// not exist yet. When several weeks share the date the oldest is returned.
    async fn fetch_week(&self, ctx: &Context<'_>, date: String) -> Result<Option<WeekObject>> {
        let weeks = week::fetch_week(store(ctx)?.as_ref(), &date)
            .await
            .map_err(graphql_error)?;

        Ok(weeks.into_iter().next().map(WeekObject::from))
    }

    /// Every week stored under an anchor date, created if there are none.
    async fn fetch_weeks(&self, ctx: &Context<'_>, date: String) -> Result<Vec<WeekObject>> {
        let weeks = week::fetch_week(store(ctx)?.as_ref(), &date)
            .await
            .map_err(graphql_error)?;

        Ok(weeks.into_iter().map(WeekObject::from).collect())
    }

    async fn week(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<WeekObject>> {
        let week = week::find_week(store(ctx)?.as_ref(), id)
            .await
            .map_err(graphql_error)?;

        Ok(week.map(WeekObject::from))
    }

    async fn weeks(&self, ctx: &Context<'_>, booking_id: Option<Uuid>) -> Result<Vec<WeekObject>> {
        let weeks = week::list_weeks(store(ctx)?.as_ref(), booking_id)
            .await
            .map_err(graphql_error)?;

        Ok(weeks.into_iter().map(WeekObject::from).collect())
    }

    async fn booking(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<BookingObject>> {
        let booking = booking::find_booking(store(ctx)?.as_ref(), id)
            .await
            .map_err(graphql_error)?;

        Ok(booking.map(BookingObject::from))
    }

    async fn bookings(&self, ctx: &Context<'_>) -> Result<Vec<BookingObject>> {
        let bookings = booking::list_bookings(store(ctx)?.as_ref())
            .await
            .map_err(graphql_error)?;

        Ok(bookings.into_iter().map(BookingObject::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_booking(&self, ctx: &Context<'_>) -> Result<BookingObject> {
        let booking = booking::create_booking(store(ctx)?.as_ref())
            .await
            .map_err(graphql_error)?;

        Ok(booking.into())
    }

    /// Deletes a booking. Its weeks are kept and detached.
    async fn delete_booking(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        booking::delete_booking(store(ctx)?.as_ref(), id)
            .await
            .map_err(graphql_error)
    }

    /// Attaches a week to a booking, or detaches it when `bookingId` is null.
    async fn assign_week(
        &self,
        ctx: &Context<'_>,
        week_id: Uuid,
        booking_id: Option<Uuid>,
    ) -> Result<WeekObject> {
        let week = week::assign_week(store(ctx)?.as_ref(), week_id, booking_id)
            .await
            .map_err(graphql_error)?;

        Ok(week.into())
    }

    /// Marks one slot of one weekday booked or open.
    async fn set_slot(
        &self,
        ctx: &Context<'_>,
        week_id: Uuid,
        weekday: WeekdayValue,
        slot: SlotValue,
        booked: bool,
    ) -> Result<WeekObject> {
        let week = week::set_slot(
            store(ctx)?.as_ref(),
            week_id,
            weekday.into(),
            slot.into(),
            booked,
        )
        .await
        .map_err(graphql_error)?;

        Ok(week.into())
    }
}
