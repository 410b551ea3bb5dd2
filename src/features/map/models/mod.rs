mod marker;

pub use marker::{MapMarker, DRAFT_MARKER_TITLE};
