use axum::{
    Json, Router,
    extract::{Path, Query, State},
};

use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    error::AppResult,
    models::Order,
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_orders))
        .route("/", axum::routing::post(create_order))
        .route("/{id}", axum::routing::get(get_order))
        .route("/{id}", axum::routing::put(update_order))
        .route("/{id}", axum::routing::delete(delete_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(
        ("skip" = Option<u64>, Query, description = "Number of records to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum number of records to return"),
        ("car_id" = Option<i64>, Query, description = "Exact-match filter"),
        ("order_date" = Option<String>, Query, description = "Exact-match filter (YYYY-MM-DD)"),
        ("pickup_date" = Option<String>, Query, description = "Exact-match filter (YYYY-MM-DD)"),
        ("dropoff_date" = Option<String>, Query, description = "Exact-match filter (YYYY-MM-DD)"),
        ("pickup_location" = Option<String>, Query, description = "Exact-match filter"),
        ("dropoff_location" = Option<String>, Query, description = "Exact-match filter"),
    ),
    responses(
        (status = 200, description = "List orders", body = ApiResponse<Vec<Order>>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    Ok(Json(order_service::list_orders(&state, query).await?))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Created order", body = ApiResponse<Order>),
        (status = 422, description = "Validation failed, including unknown car_id"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    Ok(Json(order_service::create_order(&state, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Order>>> {
    Ok(Json(order_service::get_order(&state, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Updated order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Validation failed, including unknown car_id"),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    Ok(Json(order_service::update_order(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Deleted order", body = ApiResponse<String>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<String>>> {
    Ok(Json(order_service::delete_order(&state, id).await?))
}
