//! Admin dashboard: user and report tables, charts, map, status and verify actions.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AdminService;
