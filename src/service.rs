//! Request-level operations on top of the repository.
//!
//! Each function maps the already-deserialized request parameters onto one
//! or two repository calls and turns empty results into `ApiError`s.

use crate::error::ApiError;
use crate::models::{Food, Restaurant, RestaurantLocation};
use crate::query::Repository;

const NO_RESTAURANTS: &str = "No restaurants found matching the query.";
const RESTAURANT_NOT_FOUND: &str = "Restaurant not found.";
const NO_FOOD: &str = "No food items found matching the criteria.";
const LOCATION_PARAMS_MISSING: &str = "Either 'name' or 'restaurant_id' must be provided.";

pub fn search_restaurants(
    repo: &mut Repository<'_>,
    query: &str,
) -> Result<Vec<Restaurant>, ApiError> {
    if query.is_empty() {
        return Err(ApiError::BadRequest("'query' must not be empty.".to_string()));
    }
    let results = repo.find_restaurants_by_name_prefix(query)?;
    if results.is_empty() {
        log::debug!("no restaurants match prefix {:?}", query);
        return Err(ApiError::NotFound(NO_RESTAURANTS.to_string()));
    }
    Ok(results)
}

/// An empty `query` is treated the same as an absent one.
pub fn search_food(
    repo: &mut Repository<'_>,
    restaurant_name: &str,
    query: Option<&str>,
) -> Result<Vec<Food>, ApiError> {
    let restaurant = repo
        .find_restaurant_by_name(restaurant_name)?
        .ok_or_else(|| ApiError::NotFound(RESTAURANT_NOT_FOUND.to_string()))?;

    let prefix = query.filter(|q| !q.is_empty());
    let foods = repo.find_foods_by_restaurant(&restaurant, prefix)?;
    if foods.is_empty() {
        log::debug!(
            "no food in restaurant {} matches prefix {:?}",
            restaurant.id,
            prefix
        );
        return Err(ApiError::NotFound(NO_FOOD.to_string()));
    }
    Ok(foods)
}

/// Looks a restaurant up by exact name when one is given, otherwise by id.
/// An empty name and an id of 0 both count as absent.
pub fn restaurant_location(
    repo: &mut Repository<'_>,
    name: Option<&str>,
    restaurant_id: Option<i32>,
) -> Result<RestaurantLocation, ApiError> {
    let name = name.filter(|n| !n.is_empty());
    let restaurant_id = restaurant_id.filter(|id| *id != 0);
    let restaurant = match (name, restaurant_id) {
        (Some(name), _) => repo.find_restaurant_by_name(name)?,
        (None, Some(id)) => repo.find_restaurant_by_id(id)?,
        (None, None) => return Err(ApiError::BadRequest(LOCATION_PARAMS_MISSING.to_string())),
    };
    restaurant
        .map(RestaurantLocation::from)
        .ok_or_else(|| ApiError::NotFound(RESTAURANT_NOT_FOUND.to_string()))
}
