#![allow(unused)]

use actix::{Addr, SyncArbiter};
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use services::db_utils::{get_db_pool, AppState, PgActor};
use settings::Settings;

mod schema;
mod services;
mod settings;
mod types;

fn init_pg_db(settings: &Settings) -> Addr<PgActor> {
    let pool = get_db_pool(&settings.database_url, settings.db_pool_size)
        .expect("Failed to initialize the database pool");
    let workers = settings.db_pool_size as usize;

    SyncArbiter::start(workers, move || PgActor(pool.clone()))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .init();

    let settings = Settings::from_env().expect("Invalid configuration");
    let pg_db = init_pg_db(&settings);

    tracing::info!("Starting the booking service on {}", settings.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(AppState { pg_db: pg_db.clone() }))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(services::home_page)
            .service(
                web::scope("/restaurants")
                    .service(services::restaurants_route::fetch_restaurants)
                    .service(services::restaurants_route::fetch_branches),
            )
            .service(
                web::scope("/branches")
                    .service(services::branches_route::fetch_dining_tables),
            )
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
