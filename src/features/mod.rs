pub mod admin;
pub mod categories;
pub mod map;
pub mod profile;
pub mod reports;
pub mod signup;
pub mod users;
