pub mod collections;
pub mod db;
pub mod password;
pub mod search;
