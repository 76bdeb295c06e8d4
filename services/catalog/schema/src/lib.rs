//! sea-orm entities for the catalog database.

pub mod films;
pub mod films_casts;
pub mod films_genres;
pub mod films_rates;
pub mod followed;
pub mod genres;
pub mod persons;
pub mod persons_types;
pub mod reviews;
pub mod types;
pub mod users;
pub mod users_favorites;
pub mod users_watchlater;
pub mod watchlists;
pub mod watchlists_films;
