pub mod film;
pub mod film_set;
pub mod follow;
pub mod person;
pub mod rating;
pub mod review;
pub mod search;
pub mod user;
pub mod watchlist;

#[cfg(test)]
pub(crate) mod mocks;
