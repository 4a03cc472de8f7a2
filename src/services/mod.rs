pub mod car_service;
pub mod order_service;
