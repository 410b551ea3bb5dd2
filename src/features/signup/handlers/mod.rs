mod signup_handler;

pub use signup_handler::*;
