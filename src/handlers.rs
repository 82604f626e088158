use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::db::DbPool;
use crate::error::ApiError;
use crate::query::Repository;
use crate::service;

#[derive(Debug, Deserialize)]
pub struct RestaurantSearchParams {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct FoodSearchParams {
    #[serde(rename = "RestaurantName")]
    pub restaurant_name: String,
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationParams {
    pub name: Option<String>,
    pub restaurant_id: Option<i32>,
}

/// Runs `f` on the blocking thread pool with a connection checked out for
/// the duration of the call. The connection goes back to the pool when the
/// closure returns, whether it succeeded or not.
async fn with_repo<T, F>(pool: web::Data<DbPool>, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&mut Repository<'_>) -> Result<T, ApiError> + Send + 'static,
{
    web::block(move || {
        let mut conn = pool.get()?;
        let mut repo = Repository::new(&mut conn);
        f(&mut repo)
    })
    .await?
}

#[get("/restaurant/all")]
async fn list_restaurants(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let restaurants = with_repo(pool, |repo| Ok(repo.list_restaurants()?)).await?;
    Ok(HttpResponse::Ok().json(restaurants))
}

#[get("/food/")]
async fn list_food(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let foods = with_repo(pool, |repo| Ok(repo.list_foods()?)).await?;
    Ok(HttpResponse::Ok().json(foods))
}

#[get("/restaurant/search")]
async fn search_restaurants(
    params: web::Query<RestaurantSearchParams>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let restaurants =
        with_repo(pool, move |repo| service::search_restaurants(repo, &params.query)).await?;
    Ok(HttpResponse::Ok().json(restaurants))
}

#[get("/food/search/")]
async fn search_food(
    params: web::Query<FoodSearchParams>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let foods = with_repo(pool, move |repo| {
        service::search_food(repo, &params.restaurant_name, params.query.as_deref())
    })
    .await?;
    Ok(HttpResponse::Ok().json(foods))
}

#[get("/restaurant/location/")]
async fn restaurant_location(
    params: web::Query<LocationParams>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let location = with_repo(pool, move |repo| {
        service::restaurant_location(repo, params.name.as_deref(), params.restaurant_id)
    })
    .await?;
    Ok(HttpResponse::Ok().json(location))
}

/// Registers every route. The pool itself is supplied by the caller through
/// `App::app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(list_restaurants)
    .service(list_food)
    .service(search_restaurants)
    .service(search_food)
    .service(restaurant_location);
}
