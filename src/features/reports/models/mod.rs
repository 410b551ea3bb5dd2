mod draft;
mod image;
mod report;
mod tally;

pub use draft::{DraftLocation, ReportDraft, ReportField, ReportImage};
pub use image::{ImageRejection, ImageUpload};
pub use report::{Location, NewReport, Report, ReportId, ReportStatus};
pub use tally::Tally;
