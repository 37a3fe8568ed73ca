pub mod attendance;
pub mod members;
pub mod postgres_service;
pub mod registration;
pub mod settings;
