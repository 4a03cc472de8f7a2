use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub car_name: String,
    #[validate(range(min = 0.0, max = 99_999_999.999_999_99, message = "must be between 0 and 99999999.99999999"))]
    pub day_rate: f64,
    #[validate(range(min = 0.0, max = 99_999_999.999_999_99, message = "must be between 0 and 99999999.99999999"))]
    pub month_rate: f64,
    #[validate(length(min = 1, max = 256, message = "must be between 1 and 256 characters"))]
    pub image: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub car_name: Option<String>,
    #[validate(range(min = 0.0, max = 99_999_999.999_999_99, message = "must be between 0 and 99999999.99999999"))]
    pub day_rate: Option<f64>,
    #[validate(range(min = 0.0, max = 99_999_999.999_999_99, message = "must be between 0 and 99999999.99999999"))]
    pub month_rate: Option<f64>,
    #[validate(length(min = 1, max = 256, message = "must be between 1 and 256 characters"))]
    pub image: Option<String>,
}
