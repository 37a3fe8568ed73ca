pub mod attendance;
pub mod error;
pub mod registration;
pub mod response;
