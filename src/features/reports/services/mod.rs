pub mod chart;
pub mod image_encoder;
mod report_collection;
mod report_form;

pub use chart::chart_series;
pub use report_collection::ReportCollectionModel;
pub use report_form::ReportFormModel;
