use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

/// Query string for `GET /api/cars`. Filter fields are exact-match;
/// absent `skip`/`limit` means the full set in insertion order.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CarListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub car_name: Option<String>,
    pub day_rate: Option<f64>,
    pub month_rate: Option<f64>,
    pub image: Option<String>,
}

/// Query string for `GET /api/orders`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub car_id: Option<i64>,
    pub order_date: Option<NaiveDate>,
    pub pickup_date: Option<NaiveDate>,
    pub dropoff_date: Option<NaiveDate>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
}
