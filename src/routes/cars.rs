use axum::{
    Json, Router,
    extract::{Path, Query, State},
};

use crate::{
    dto::cars::{CreateCarRequest, UpdateCarRequest},
    error::AppResult,
    models::Car,
    response::ApiResponse,
    routes::params::CarListQuery,
    services::car_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_cars))
        .route("/", axum::routing::post(create_car))
        .route("/{id}", axum::routing::get(get_car))
        .route("/{id}", axum::routing::put(update_car))
        .route("/{id}", axum::routing::delete(delete_car))
}

#[utoipa::path(
    get,
    path = "/api/cars",
    params(
        ("skip" = Option<u64>, Query, description = "Number of records to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum number of records to return"),
        ("car_name" = Option<String>, Query, description = "Exact-match filter"),
        ("day_rate" = Option<f64>, Query, description = "Exact-match filter"),
        ("month_rate" = Option<f64>, Query, description = "Exact-match filter"),
        ("image" = Option<String>, Query, description = "Exact-match filter"),
    ),
    responses(
        (status = 200, description = "List cars", body = ApiResponse<Vec<Car>>)
    ),
    tag = "Cars"
)]
pub async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<CarListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Car>>>> {
    Ok(Json(car_service::list_cars(&state, query).await?))
}

#[utoipa::path(
    post,
    path = "/api/cars",
    request_body = CreateCarRequest,
    responses(
        (status = 200, description = "Created car", body = ApiResponse<Car>),
        (status = 422, description = "Validation failed"),
    ),
    tag = "Cars"
)]
pub async fn create_car(
    State(state): State<AppState>,
    Json(payload): Json<CreateCarRequest>,
) -> AppResult<Json<ApiResponse<Car>>> {
    Ok(Json(car_service::create_car(&state, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    params(
        ("id" = i64, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Get car", body = ApiResponse<Car>),
        (status = 404, description = "Car not found"),
    ),
    tag = "Cars"
)]
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Car>>> {
    Ok(Json(car_service::get_car(&state, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    params(
        ("id" = i64, Path, description = "Car ID")
    ),
    request_body = UpdateCarRequest,
    responses(
        (status = 200, description = "Updated car", body = ApiResponse<Car>),
        (status = 404, description = "Car not found"),
        (status = 422, description = "Validation failed"),
    ),
    tag = "Cars"
)]
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCarRequest>,
) -> AppResult<Json<ApiResponse<Car>>> {
    Ok(Json(car_service::update_car(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    params(
        ("id" = i64, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Deleted car", body = ApiResponse<String>),
        (status = 404, description = "Car not found"),
    ),
    tag = "Cars"
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<String>>> {
    Ok(Json(car_service::delete_car(&state, id).await?))
}
