pub mod debounce;
pub mod sanitize;
