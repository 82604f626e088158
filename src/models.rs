use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{food, restaurants};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Restaurant {
    #[serde(rename = "RestaurantID")]
    pub id: i32,
    #[serde(rename = "RestaurantName")]
    pub name: String,
    #[serde(rename = "RestaurantLatitude")]
    pub latitude: f64,
    #[serde(rename = "RestaurantLongitude")]
    pub longitude: f64,
    #[serde(rename = "RestaurantImage")]
    pub image: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image: String,
}

#[derive(
    Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize,
)]
#[diesel(belongs_to(Restaurant))]
#[diesel(table_name = food)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Food {
    #[serde(rename = "FoodID")]
    pub id: i32,
    #[serde(rename = "FoodName")]
    pub name: String,
    /// Price in the smallest currency unit.
    #[serde(rename = "FoodPrice")]
    pub price: i32,
    #[serde(rename = "RestaurantID")]
    pub restaurant_id: i32,
    #[serde(rename = "FoodImage")]
    pub image: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = food)]
pub struct NewFood {
    pub name: String,
    pub price: i32,
    pub restaurant_id: i32,
    pub image: String,
}

/// Coordinates of a single restaurant, as returned by the location lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestaurantLocation {
    pub restaurant_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Restaurant> for RestaurantLocation {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            restaurant_name: restaurant.name,
            latitude: restaurant.latitude,
            longitude: restaurant.longitude,
        }
    }
}
