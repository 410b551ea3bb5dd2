mod user;

pub use user::{NationalId, User};
