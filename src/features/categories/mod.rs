//! Static category lookup table (slug, color, labels) exposed to the form picker.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;

pub use models::Category;
