//! Registration forms (resident and quick variants) and their submission.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SignupFormModel;
