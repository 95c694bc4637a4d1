//! Diesel schema definitions for Shipyard server.

diesel::table! {
    ship (id) {
        id -> Int8,
        #[max_length = 50]
        name -> Varchar,
        #[max_length = 50]
        planet -> Varchar,
        #[max_length = 9]
        ship_type -> Varchar,
        prod_date -> Timestamp,
        is_used -> Bool,
        speed -> Float8,
        crew_size -> Int4,
        rating -> Float8,
    }
}
