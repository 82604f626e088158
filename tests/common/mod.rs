#![allow(dead_code)]

use restaurant_food_api::models::{Food, NewFood, NewRestaurant, Restaurant};
use restaurant_food_api::{init_pool, run_migrations, DbPool, Repository};
use tempfile::TempDir;

/// A migrated database in a throwaway directory. Keep the `TempDir` alive for
/// as long as the pool is used.
pub fn test_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let pool = init_pool(path.to_str().unwrap(), 2).unwrap();
    run_migrations(&pool).unwrap();
    (dir, pool)
}

pub fn add_restaurant(pool: &DbPool, name: &str, latitude: f64, longitude: f64) -> Restaurant {
    let mut conn = pool.get().unwrap();
    Repository::new(&mut conn)
        .insert_restaurant(&NewRestaurant {
            name: name.to_string(),
            latitude,
            longitude,
            image: format!("{}.png", name.to_lowercase()),
        })
        .unwrap()
}

pub fn add_food(pool: &DbPool, restaurant: &Restaurant, name: &str, price: i32) -> Food {
    let mut conn = pool.get().unwrap();
    Repository::new(&mut conn)
        .insert_food(&NewFood {
            name: name.to_string(),
            price,
            restaurant_id: restaurant.id,
            image: format!("{}.png", name.to_lowercase()),
        })
        .unwrap()
}
