use axum_car_rental_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        Cars,
        cars::ActiveModel as CarActive,
        orders::ActiveModel as OrderActive,
    },
};
use chrono::NaiveDate;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    if Cars::find().count(&orm).await? > 0 {
        println!("Cars already present, skipping seed");
        return Ok(());
    }

    seed_cars_and_orders(&orm).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_cars_and_orders(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let cars = vec![
        ("Avanza", 150.0, 3000.0, "avanza.jpg"),
        ("Innova", 220.0, 4400.0, "innova.jpg"),
        ("Brio", 120.0, 2400.0, "brio.jpg"),
        ("Pajero", 400.0, 8000.0, "pajero.jpg"),
    ];

    let mut first_car_id = None;
    for (name, day_rate, month_rate, image) in cars {
        let car = CarActive {
            id: NotSet,
            car_name: Set(name.to_string()),
            day_rate: Set(day_rate),
            month_rate: Set(month_rate),
            image: Set(image.to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(orm)
        .await?;
        first_car_id.get_or_insert(car.id);
        println!("Seeded car {name} (id={})", car.id);
    }

    if let Some(car_id) = first_car_id {
        let order = OrderActive {
            id: NotSet,
            car_id: Set(car_id),
            order_date: Set(NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()),
            pickup_date: Set(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()),
            dropoff_date: Set(NaiveDate::from_ymd_opt(2025, 7, 14).unwrap()),
            pickup_location: Set("Jakarta".to_string()),
            dropoff_location: Set("Bandung".to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(orm)
        .await?;
        println!("Seeded order {} for car {car_id}", order.id);
    }

    Ok(())
}
