use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "must be a positive car id"))]
    pub car_id: i64,
    pub order_date: NaiveDate,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub pickup_location: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub dropoff_location: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateOrderRequest {
    #[validate(range(min = 1, message = "must be a positive car id"))]
    pub car_id: Option<i64>,
    pub order_date: Option<NaiveDate>,
    pub pickup_date: Option<NaiveDate>,
    pub dropoff_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub pickup_location: Option<String>,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub dropoff_location: Option<String>,
}
