diesel::table! {
    #[sql_name = "Restaurants"]
    restaurants (id) {
        #[sql_name = "RestaurantID"]
        id -> Integer,
        #[sql_name = "RestaurantName"]
        name -> Text,
        #[sql_name = "RestaurantLatitude"]
        latitude -> Double,
        #[sql_name = "RestaurantLongitude"]
        longitude -> Double,
        #[sql_name = "RestaurantImage"]
        image -> Text,
    }
}

diesel::table! {
    #[sql_name = "Food"]
    food (id) {
        #[sql_name = "FoodID"]
        id -> Integer,
        #[sql_name = "FoodName"]
        name -> Text,
        #[sql_name = "FoodPrice"]
        price -> Integer,
        #[sql_name = "RestaurantID"]
        restaurant_id -> Integer,
        #[sql_name = "FoodImage"]
        image -> Text,
    }
}

diesel::joinable!(food -> restaurants (restaurant_id));

diesel::allow_tables_to_appear_in_same_query!(food, restaurants);
