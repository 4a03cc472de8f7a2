use axum_car_rental_api::dto::{
    cars::{CreateCarRequest, UpdateCarRequest},
    orders::{CreateOrderRequest, UpdateOrderRequest},
};
use chrono::NaiveDate;
use validator::Validate;

fn valid_car() -> CreateCarRequest {
    CreateCarRequest {
        car_name: "Avanza".into(),
        day_rate: 150.0,
        month_rate: 3000.0,
        image: "avanza.jpg".into(),
    }
}

fn valid_order() -> CreateOrderRequest {
    CreateOrderRequest {
        car_id: 1,
        order_date: NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
        pickup_date: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
        dropoff_date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
        pickup_location: "Jakarta".into(),
        dropoff_location: "Bandung".into(),
    }
}

#[test]
fn valid_car_passes() {
    assert!(valid_car().validate().is_ok());
}

#[test]
fn car_name_over_50_chars_fails() {
    let mut car = valid_car();
    car.car_name = "x".repeat(51);
    let errors = car.validate().unwrap_err();
    assert!(errors.field_errors().contains_key("car_name"));
}

#[test]
fn empty_car_name_fails() {
    let mut car = valid_car();
    car.car_name = String::new();
    assert!(car.validate().is_err());
}

#[test]
fn negative_day_rate_fails() {
    let mut car = valid_car();
    car.day_rate = -1.0;
    let errors = car.validate().unwrap_err();
    assert!(errors.field_errors().contains_key("day_rate"));
}

#[test]
fn rate_above_upper_bound_fails() {
    let mut car = valid_car();
    car.month_rate = 100_000_000.0;
    assert!(car.validate().is_err());
}

#[test]
fn update_car_validates_only_provided_fields() {
    let update = UpdateCarRequest {
        car_name: None,
        day_rate: None,
        month_rate: None,
        image: None,
    };
    assert!(update.validate().is_ok());

    let update = UpdateCarRequest {
        car_name: Some("x".repeat(51)),
        day_rate: None,
        month_rate: None,
        image: None,
    };
    assert!(update.validate().is_err());
}

#[test]
fn valid_order_passes() {
    assert!(valid_order().validate().is_ok());
}

#[test]
fn order_pickup_location_over_50_chars_fails() {
    let mut order = valid_order();
    order.pickup_location = "y".repeat(51);
    let errors = order.validate().unwrap_err();
    assert!(errors.field_errors().contains_key("pickup_location"));
}

#[test]
fn order_with_non_positive_car_id_fails() {
    let mut order = valid_order();
    order.car_id = 0;
    assert!(order.validate().is_err());
}

#[test]
fn update_order_with_bad_dropoff_location_fails() {
    let update = UpdateOrderRequest {
        car_id: None,
        order_date: None,
        pickup_date: None,
        dropoff_date: None,
        pickup_location: None,
        dropoff_location: Some(String::new()),
    };
    assert!(update.validate().is_err());
}
