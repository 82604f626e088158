use actix_web::HttpServer;

use restaurant_food_api::{app, init_pool, run_migrations, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    // set up database connection pool and make sure the tables exist
    let pool = init_pool(&config.database_url, config.pool_size).map_err(std::io::Error::other)?;
    let applied = run_migrations(&pool).map_err(std::io::Error::other)?;
    log::info!(
        "using database {} ({} migration(s) applied)",
        config.database_url,
        applied
    );

    log::info!("starting HTTP server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || app(pool.clone()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
