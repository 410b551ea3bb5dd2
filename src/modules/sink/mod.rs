//! Submission seams: where a valid form snapshot goes once it leaves the model.

mod registration;
mod report;

pub use registration::{
    DirectoryRegistrationSink, LoggingRegistrationSink, RegistrationReceipt, RegistrationSink,
};
pub use report::{ReportSink, StoreReportSink};

use thiserror::Error;

use crate::modules::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Submission target unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for SinkError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(msg) => SinkError::Conflict(msg),
            StoreError::Unavailable(msg) => SinkError::Unavailable(msg),
        }
    }
}
