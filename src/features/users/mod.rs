//! User directory: the collection model behind the admin table and profiles.

pub mod models;
pub mod services;

pub use services::UserCollectionModel;
