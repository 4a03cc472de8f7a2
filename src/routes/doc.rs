use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{cars as car_dto, orders as order_dto},
    models::{Car, Order},
    response::ApiResponse,
    routes::{cars, health, orders, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        cars::list_cars,
        cars::create_car,
        cars::get_car,
        cars::update_car,
        cars::delete_car,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
    ),
    components(
        schemas(
            Car,
            Order,
            car_dto::CreateCarRequest,
            car_dto::UpdateCarRequest,
            order_dto::CreateOrderRequest,
            order_dto::UpdateOrderRequest,
            params::CarListQuery,
            params::OrderListQuery,
            health::HealthData,
            ApiResponse<Car>,
            ApiResponse<Order>,
            ApiResponse<Vec<Car>>,
            ApiResponse<Vec<Order>>,
            ApiResponse<String>,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Cars", description = "Car endpoints"),
        (name = "Orders", description = "Order (booking) endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
