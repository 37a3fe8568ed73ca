pub mod attendance;
pub mod registrations;
pub mod settings;
