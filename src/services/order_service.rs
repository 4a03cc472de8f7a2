use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    entity::orders::{ActiveModel, Column, Entity as Orders, Model as OrderModel},
    entity::Cars,
    error::{AppError, AppResult},
    models::Order,
    response::ApiResponse,
    routes::params::OrderListQuery,
    state::AppState,
};
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use validator::Validate;

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<Vec<Order>>> {
    let mut condition = Condition::all();

    if let Some(car_id) = query.car_id {
        condition = condition.add(Column::CarId.eq(car_id));
    }
    if let Some(order_date) = query.order_date {
        condition = condition.add(Column::OrderDate.eq(order_date));
    }
    if let Some(pickup_date) = query.pickup_date {
        condition = condition.add(Column::PickupDate.eq(pickup_date));
    }
    if let Some(dropoff_date) = query.dropoff_date {
        condition = condition.add(Column::DropoffDate.eq(dropoff_date));
    }
    if let Some(pickup_location) = query.pickup_location {
        condition = condition.add(Column::PickupLocation.eq(pickup_location));
    }
    if let Some(dropoff_location) = query.dropoff_location {
        condition = condition.add(Column::DropoffLocation.eq(dropoff_location));
    }

    let items: Vec<Order> = Orders::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .offset(query.skip)
        .limit(query.limit)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    Ok(ApiResponse::success(items, "Orders retrieved successfully"))
}

pub async fn get_order(state: &AppState, id: i64) -> AppResult<ApiResponse<Order>> {
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(order_from_entity);
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order")),
    };
    Ok(ApiResponse::success(order, "Order retrieved successfully"))
}

pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    payload.validate()?;
    ensure_car_exists(state, payload.car_id).await?;

    let active = ActiveModel {
        id: NotSet,
        car_id: Set(payload.car_id),
        order_date: Set(payload.order_date),
        pickup_date: Set(payload.pickup_date),
        dropoff_date: Set(payload.dropoff_date),
        pickup_location: Set(payload.pickup_location),
        dropoff_location: Set(payload.dropoff_location),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let order = active.insert(&state.orm).await?;
    tracing::info!(order_id = order.id, car_id = order.car_id, "order created");

    Ok(ApiResponse::success(
        order_from_entity(order),
        "Order saved successfully",
    ))
}

pub async fn update_order(
    state: &AppState,
    id: i64,
    payload: UpdateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let existing = Orders::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order")),
    };

    payload.validate()?;
    if let Some(car_id) = payload.car_id {
        ensure_car_exists(state, car_id).await?;
    }

    let mut active: ActiveModel = existing.into();
    if let Some(car_id) = payload.car_id {
        active.car_id = Set(car_id);
    }
    if let Some(order_date) = payload.order_date {
        active.order_date = Set(order_date);
    }
    if let Some(pickup_date) = payload.pickup_date {
        active.pickup_date = Set(pickup_date);
    }
    if let Some(dropoff_date) = payload.dropoff_date {
        active.dropoff_date = Set(dropoff_date);
    }
    if let Some(pickup_location) = payload.pickup_location {
        active.pickup_location = Set(pickup_location);
    }
    if let Some(dropoff_location) = payload.dropoff_location {
        active.dropoff_location = Set(dropoff_location);
    }
    active.updated_at = Set(Utc::now().into());

    let order = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        order_from_entity(order),
        "Order updated successfully",
    ))
}

pub async fn delete_order(state: &AppState, id: i64) -> AppResult<ApiResponse<String>> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Order"));
    }
    tracing::info!(order_id = id, "order deleted");

    Ok(ApiResponse::success(
        "Order deleted successfully".to_string(),
        "Order deleted successfully",
    ))
}

// Input-time existence check; the foreign key backs the window between
// this query and the insert.
async fn ensure_car_exists(state: &AppState, car_id: i64) -> AppResult<()> {
    let exists = Cars::find_by_id(car_id).one(&state.orm).await?.is_some();
    if !exists {
        return Err(AppError::Validation(format!(
            "car_id: no car with id {car_id} exists"
        )));
    }
    Ok(())
}

pub fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        car_id: model.car_id,
        order_date: model.order_date,
        pickup_date: model.pickup_date,
        dropoff_date: model.dropoff_date,
        pickup_location: model.pickup_location,
        dropoff_location: model.dropoff_location,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
