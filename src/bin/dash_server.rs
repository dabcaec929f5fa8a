// src/bin/dash_server.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;

use invest_dash::config::Config;
use invest_dash::server::{cors_handler, health_check, index, statusinvest_handler, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let state = web::Data::new(AppState::new(config)?);
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_address = format!("0.0.0.0:{}", port);

    println!("🚀 Invest Dash running on http://{}", bind_address);
    println!("📋 Available endpoints:");
    println!("  • GET  /                 - Dashboard");
    println!("  • GET  /api/statusinvest - Indicator lookup (?type=&ticker=)");
    println!("  • GET  /health           - Health check");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .route("/", web::get().to(index))
            .route("/api/statusinvest", web::get().to(statusinvest_handler))
            .route("/health", web::get().to(health_check))
            .default_service(web::to(cors_handler))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
