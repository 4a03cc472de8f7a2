use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Car {
    pub id: i64,
    pub car_name: String,
    pub day_rate: f64,
    pub month_rate: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub car_id: i64,
    pub order_date: NaiveDate,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
