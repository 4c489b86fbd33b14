//! GraphQL client for a running Tidyslot server.
//!
//! Issues the `FetchWeek` query and decodes the payload back into a
//! [`WeekSchedule`] so it can be rendered as an availability grid.

use chrono::{DateTime, Utc};
use eyre::{eyre, Result, WrapErr};
use serde::Deserialize;
use serde_json::{json, Value};
use tidyslot_core::models::{DaySlots, Days, SlotSet, Week, WeekSchedule, Weekday};
use uuid::Uuid;

pub const FETCH_WEEK_QUERY: &str = r#"
query FetchWeek($date: String!) {
  fetchWeek(date: $date) {
    id
    date
    bookingId
    createdAt
    days {
      id
      monday { ...Slots }
      tuesday { ...Slots }
      wednesday { ...Slots }
      thursday { ...Slots }
      friday { ...Slots }
    }
  }
}

fragment Slots on WeekdaySlots {
  id
  weekday
  eightTen
  tenTwelve
  twelveTwo
  twoFour
  fourSix
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQLErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FetchWeekData {
    fetch_week: Option<WeekPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekPayload {
    id: Uuid,
    date: String,
    booking_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    days: DaysPayload,
}

#[derive(Debug, Deserialize)]
struct DaysPayload {
    id: Uuid,
    monday: SlotsPayload,
    tuesday: SlotsPayload,
    wednesday: SlotsPayload,
    thursday: SlotsPayload,
    friday: SlotsPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotsPayload {
    id: Uuid,
    weekday: String,
    eight_ten: bool,
    ten_twelve: bool,
    twelve_two: bool,
    two_four: bool,
    four_six: bool,
}

impl SlotsPayload {
    fn into_day_slots(self) -> Result<DaySlots> {
        let weekday = self
            .weekday
            .parse::<Weekday>()
            .wrap_err("Server returned an unknown weekday")?;

        Ok(DaySlots {
            id: self.id,
            weekday,
            slots: SlotSet {
                eight_ten: self.eight_ten,
                ten_twelve: self.ten_twelve,
                twelve_two: self.twelve_two,
                two_four: self.two_four,
                four_six: self.four_six,
            },
        })
    }
}

/// Decodes a `FetchWeek` response body.
pub fn decode_fetch_week(body: Value) -> Result<WeekSchedule> {
    let response: GraphQLResponse<FetchWeekData> =
        serde_json::from_value(body).wrap_err("Malformed GraphQL response")?;

    if let Some(first) = response.errors.first() {
        return Err(eyre!("GraphQL error: {}", first.message));
    }

    let week = response
        .data
        .and_then(|data| data.fetch_week)
        .ok_or_else(|| eyre!("Server returned no week"))?;

    let rows = vec![
        week.days.monday.into_day_slots()?,
        week.days.tuesday.into_day_slots()?,
        week.days.wednesday.into_day_slots()?,
        week.days.thursday.into_day_slots()?,
        week.days.friday.into_day_slots()?,
    ];
    let days = Days::from_rows(week.days.id, week.id, rows)?;

    Ok(WeekSchedule {
        week: Week {
            id: week.id,
            date: week.date,
            booking_id: week.booking_id,
            created_at: week.created_at,
        },
        days,
    })
}

pub struct WeekClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WeekClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/graphql", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_week(&self, date: &str) -> Result<WeekSchedule> {
        tracing::debug!("Fetching week {} from {}", date, self.endpoint);

        let body: Value = self
            .http
            .post(&self.endpoint)
            .json(&json!({
                "operationName": "FetchWeek",
                "query": FETCH_WEEK_QUERY,
                "variables": { "date": date },
            }))
            .send()
            .await
            .wrap_err_with(|| format!("Failed to reach {}", self.endpoint))?
            .error_for_status()?
            .json()
            .await?;

        decode_fetch_week(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidyslot_core::models::Slot;

    fn slots(weekday: &str, booked: bool) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "weekday": weekday,
            "eightTen": booked,
            "tenTwelve": false,
            "twelveTwo": false,
            "twoFour": false,
            "fourSix": false,
        })
    }

    #[test]
    fn test_decode_fetch_week() {
        let week_id = Uuid::new_v4();
        let body = json!({
            "data": {
                "fetchWeek": {
                    "id": week_id,
                    "date": "2021-03-01",
                    "bookingId": null,
                    "createdAt": "2021-02-28T12:00:00Z",
                    "days": {
                        "id": Uuid::new_v4(),
                        "monday": slots("MONDAY", false),
                        "tuesday": slots("TUESDAY", true),
                        "wednesday": slots("WEDNESDAY", false),
                        "thursday": slots("THURSDAY", false),
                        "friday": slots("FRIDAY", false),
                    }
                }
            }
        });

        let schedule = decode_fetch_week(body).unwrap();

        assert_eq!(schedule.week.id, week_id);
        assert_eq!(schedule.days.week_id, week_id);
        assert_eq!(schedule.booked_count(), 1);
        assert!(schedule.is_booked(Weekday::Tuesday, Slot::EightTen));
    }

    #[test]
    fn test_decode_surfaces_graphql_errors() {
        let body = json!({
            "data": null,
            "errors": [{ "message": "Validation error: Anchor date must not be empty" }]
        });

        let err = decode_fetch_week(body).unwrap_err();
        assert!(err.to_string().contains("Anchor date must not be empty"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = WeekClient::new("http://localhost:3000/");
        assert_eq!(client.endpoint(), "http://localhost:3000/graphql");
    }
}
