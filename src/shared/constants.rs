/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// UPLOADS
// =============================================================================

/// Largest photo accepted on a report (10MB, inclusive)
pub const MAX_IMAGE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// MIME prefix every report photo must carry
pub const IMAGE_MIME_PREFIX: &str = "image/";

// =============================================================================
// MAP
// =============================================================================

pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Map center on the reporting page (Cairo)
pub const HOME_MAP_CENTER: (f64, f64) = (30.033333, 31.233334);

/// Map center on the admin dashboard
pub const ADMIN_MAP_CENTER: (f64, f64) = (30.0444, 31.2357);

pub const MARKER_ICON_SIZE: [u32; 2] = [40, 40];

/// Anchor at the tip of the pin
pub const MARKER_ICON_ANCHOR: [i32; 2] = [20, 40];

/// Popup opens above the pin
pub const MARKER_POPUP_ANCHOR: [i32; 2] = [0, -40];

// =============================================================================
// CHARTS
// =============================================================================

/// Palette cycled by series index on the admin charts
pub const CHART_PALETTE: [&str; 10] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A28FD0", "#E27D60", "#85DCB", "#E8A87C",
    "#C38D9E", "#41B3A3",
];
