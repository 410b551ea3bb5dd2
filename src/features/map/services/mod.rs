mod map_service;

pub use map_service::{render_marker, MapService, PopupStyle};
