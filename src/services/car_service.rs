use crate::{
    dto::cars::{CreateCarRequest, UpdateCarRequest},
    entity::cars::{ActiveModel, Column, Entity as Cars, Model as CarModel},
    error::{AppError, AppResult},
    models::Car,
    response::ApiResponse,
    routes::params::CarListQuery,
    state::AppState,
};
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use validator::Validate;

pub async fn list_cars(state: &AppState, query: CarListQuery) -> AppResult<ApiResponse<Vec<Car>>> {
    let mut condition = Condition::all();

    if let Some(car_name) = query.car_name {
        condition = condition.add(Column::CarName.eq(car_name));
    }
    if let Some(day_rate) = query.day_rate {
        condition = condition.add(Column::DayRate.eq(day_rate));
    }
    if let Some(month_rate) = query.month_rate {
        condition = condition.add(Column::MonthRate.eq(month_rate));
    }
    if let Some(image) = query.image {
        condition = condition.add(Column::Image.eq(image));
    }

    let items: Vec<Car> = Cars::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .offset(query.skip)
        .limit(query.limit)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(car_from_entity)
        .collect();

    Ok(ApiResponse::success(items, "Cars retrieved successfully"))
}

pub async fn get_car(state: &AppState, id: i64) -> AppResult<ApiResponse<Car>> {
    let car = Cars::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(car_from_entity);
    let car = match car {
        Some(c) => c,
        None => return Err(AppError::NotFound("Car")),
    };
    Ok(ApiResponse::success(car, "Car retrieved successfully"))
}

pub async fn create_car(
    state: &AppState,
    payload: CreateCarRequest,
) -> AppResult<ApiResponse<Car>> {
    payload.validate()?;

    let active = ActiveModel {
        id: NotSet,
        car_name: Set(payload.car_name),
        day_rate: Set(payload.day_rate),
        month_rate: Set(payload.month_rate),
        image: Set(payload.image),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let car = active.insert(&state.orm).await?;
    tracing::info!(car_id = car.id, "car created");

    Ok(ApiResponse::success(
        car_from_entity(car),
        "Car saved successfully",
    ))
}

pub async fn update_car(
    state: &AppState,
    id: i64,
    payload: UpdateCarRequest,
) -> AppResult<ApiResponse<Car>> {
    let existing = Cars::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound("Car")),
    };

    payload.validate()?;

    let mut active: ActiveModel = existing.into();
    if let Some(car_name) = payload.car_name {
        active.car_name = Set(car_name);
    }
    if let Some(day_rate) = payload.day_rate {
        active.day_rate = Set(day_rate);
    }
    if let Some(month_rate) = payload.month_rate {
        active.month_rate = Set(month_rate);
    }
    if let Some(image) = payload.image {
        active.image = Set(image);
    }
    active.updated_at = Set(Utc::now().into());

    let car = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        car_from_entity(car),
        "Car updated successfully",
    ))
}

pub async fn delete_car(state: &AppState, id: i64) -> AppResult<ApiResponse<String>> {
    // orders referencing this car go with it (ON DELETE CASCADE)
    let result = Cars::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Car"));
    }
    tracing::info!(car_id = id, "car deleted");

    Ok(ApiResponse::success(
        "Car deleted successfully".to_string(),
        "Car deleted successfully",
    ))
}

pub fn car_from_entity(model: CarModel) -> Car {
    Car {
        id: model.id,
        car_name: model.car_name,
        day_rate: model.day_rate,
        month_rate: model.month_rate,
        image: model.image,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
