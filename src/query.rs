use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::models::{Food, NewFood, NewRestaurant, Restaurant};
use crate::schema::{food, restaurants};

const LIKE_ESCAPE: char = '\\';

/// Read access to the restaurant and food tables over a borrowed connection.
///
/// The repository never owns the connection; callers acquire one from the
/// pool for the duration of a request and hand it in.
pub struct Repository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> Repository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub fn list_restaurants(&mut self) -> QueryResult<Vec<Restaurant>> {
        restaurants::table
            .select(Restaurant::as_select())
            .order(restaurants::id)
            .load(self.conn)
    }

    /// Restaurants whose name starts with `prefix`. Matching follows the
    /// storage collation, which for SQLite `LIKE` ignores ASCII case.
    pub fn find_restaurants_by_name_prefix(
        &mut self,
        prefix: &str,
    ) -> QueryResult<Vec<Restaurant>> {
        restaurants::table
            .filter(restaurants::name.like(prefix_pattern(prefix)).escape(LIKE_ESCAPE))
            .select(Restaurant::as_select())
            .order(restaurants::id)
            .load(self.conn)
    }

    /// First restaurant (lowest id) whose name equals `name` exactly.
    pub fn find_restaurant_by_name(&mut self, name: &str) -> QueryResult<Option<Restaurant>> {
        restaurants::table
            .filter(restaurants::name.eq(name))
            .select(Restaurant::as_select())
            .order(restaurants::id)
            .first(self.conn)
            .optional()
    }

    pub fn find_restaurant_by_id(&mut self, restaurant_id: i32) -> QueryResult<Option<Restaurant>> {
        restaurants::table
            .find(restaurant_id)
            .select(Restaurant::as_select())
            .first(self.conn)
            .optional()
    }

    pub fn list_foods(&mut self) -> QueryResult<Vec<Food>> {
        food::table
            .select(Food::as_select())
            .order(food::id)
            .load(self.conn)
    }

    /// Food owned by `restaurant`, optionally narrowed to names starting with
    /// `prefix`.
    pub fn find_foods_by_restaurant(
        &mut self,
        restaurant: &Restaurant,
        prefix: Option<&str>,
    ) -> QueryResult<Vec<Food>> {
        match prefix {
            Some(prefix) => Food::belonging_to(restaurant)
                .filter(food::name.like(prefix_pattern(prefix)).escape(LIKE_ESCAPE))
                .select(Food::as_select())
                .order(food::id)
                .load(self.conn),
            None => Food::belonging_to(restaurant)
                .select(Food::as_select())
                .order(food::id)
                .load(self.conn),
        }
    }

    pub fn insert_restaurant(&mut self, new_restaurant: &NewRestaurant) -> QueryResult<Restaurant> {
        diesel::insert_into(restaurants::table)
            .values(new_restaurant)
            .returning(Restaurant::as_returning())
            .get_result(self.conn)
    }

    /// Fails with a foreign-key violation when the owning restaurant does not
    /// exist.
    pub fn insert_food(&mut self, new_food: &NewFood) -> QueryResult<Food> {
        diesel::insert_into(food::table)
            .values(new_food)
            .returning(Food::as_returning())
            .get_result(self.conn)
    }
}

/// Builds a `LIKE` pattern matching values that start with `prefix` literally.
fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
