use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, web, App};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod schema;
pub mod service;

pub use config::Config;
pub use db::{init_pool, run_migrations, DbPool};
pub use error::{ApiError, ConfigError, DbError};
pub use handlers::configure;
pub use query::Repository;

/// Builds the application: routes, the shared pool, request logging and a
/// CORS policy that allows every origin, method and header.
pub fn app(
    pool: DbPool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(pool))
        .wrap(Cors::permissive())
        .wrap(middleware::Logger::default())
        .configure(configure)
}
