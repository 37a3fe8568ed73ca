pub mod config;
pub mod db;
pub mod routes;
pub mod scan;
pub mod types;
pub mod utils;
