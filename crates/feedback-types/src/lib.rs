pub mod api;
pub mod messages;
pub mod models;
pub mod validation;
