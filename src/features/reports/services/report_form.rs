//! New-report form: draft editing, photo attachment, validation and submission.
//!
//! The model is the single owner of a [`ReportDraft`]. Every edit clears the
//! error of the field it touches; [`ReportFormModel::validate`] rebuilds the
//! whole error map. Submission goes through a [`ReportSink`] and only resets
//! the draft once the sink has accepted it.

use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::features::categories::models::Category;
use crate::features::map::models::{MapMarker, DRAFT_MARKER_TITLE};
use crate::features::reports::models::{
    DraftLocation, ImageRejection, ImageUpload, Location, Report, ReportDraft, ReportField,
    ReportImage,
};
use crate::features::reports::services::image_encoder::{decode_data_uri, encode_data_uri};
use crate::features::users::models::NationalId;
use crate::modules::sink::ReportSink;
use crate::shared::constants::IMAGE_MIME_PREFIX;
use crate::shared::validation::{FormErrors, FormState, SubmitError};

pub struct ReportFormModel {
    draft: ReportDraft,
    errors: FormErrors<ReportField>,
    state: FormState,
    sink: Arc<dyn ReportSink>,
    max_image_bytes: usize,
}

impl ReportFormModel {
    pub fn new(sink: Arc<dyn ReportSink>, max_image_bytes: usize) -> Self {
        Self {
            draft: ReportDraft::default(),
            errors: FormErrors::new(),
            state: FormState::Editing,
            sink,
            max_image_bytes,
        }
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors<ReportField> {
        &self.errors
    }

    #[cfg(test)]
    pub fn state(&self) -> FormState {
        self.state
    }

    fn touch(&mut self, field: ReportField) {
        self.errors.clear(field);
        self.state = FormState::Editing;
    }

    /// Set a field from its text input.
    ///
    /// `category` takes a slug (empty clears it), `location` takes `"lat,lng"`
    /// (empty clears it) and `images` takes a data URI (empty removes the photo).
    pub fn update_field(&mut self, field: ReportField, value: &str) {
        self.touch(field);
        match field {
            ReportField::Title => self.draft.title = value.to_string(),
            ReportField::Description => self.draft.description = value.to_string(),
            ReportField::Category => self.set_category_slug(value),
            ReportField::Location => match value.split_once(',') {
                Some((lat, lng)) => {
                    self.set_latitude(lat);
                    self.set_longitude(lng);
                }
                None => self.clear_location(),
            },
            ReportField::Images => {
                if value.is_empty() {
                    self.remove_image();
                } else {
                    // Rejection is already recorded under `images`
                    let _ = self.attach_encoded_image(value, None);
                }
            }
        }
    }

    fn set_category_slug(&mut self, slug: &str) {
        if slug.is_empty() {
            self.draft.category = None;
            return;
        }
        match slug.parse::<Category>() {
            Ok(category) => self.draft.category = Some(category),
            Err(_) => {
                tracing::warn!(slug, "Unknown category selected");
                self.draft.category = None;
                self.errors.insert(ReportField::Category, "Unknown category");
            }
        }
    }

    /// Who is filing the report, shown later on their profile
    pub fn set_reporter(&mut self, reporter: Option<NationalId>) {
        self.draft.reporter = reporter;
    }

    /// Map click: both coordinates at once
    pub fn set_location(&mut self, lat: f64, lng: f64) {
        self.touch(ReportField::Location);
        self.draft.location = DraftLocation {
            lat: Some(lat).filter(|v| v.is_finite()),
            lng: Some(lng).filter(|v| v.is_finite()),
        };
    }

    /// Latitude input; text that is not a finite number unsets the latitude only
    pub fn set_latitude(&mut self, value: &str) {
        self.touch(ReportField::Location);
        self.draft.location.lat = parse_coordinate(value);
    }

    /// Longitude input; text that is not a finite number unsets the longitude only
    pub fn set_longitude(&mut self, value: &str) {
        self.touch(ReportField::Location);
        self.draft.location.lng = parse_coordinate(value);
    }

    pub fn clear_location(&mut self) {
        self.touch(ReportField::Location);
        self.draft.location = DraftLocation::default();
    }

    /// Read and encode a picked photo.
    ///
    /// On rejection the message is stored under `images` and any earlier
    /// photo is kept.
    pub async fn attach_image<R>(&mut self, upload: ImageUpload<R>) -> Result<(), ImageRejection>
    where
        R: AsyncRead + Unpin + Send,
    {
        self.state = FormState::Editing;
        match self.read_image(upload).await {
            Ok(image) => {
                tracing::debug!(
                    size_bytes = image.size_bytes,
                    content_type = %image.content_type,
                    "Image attached"
                );
                self.draft.image = Some(image);
                self.errors.clear(ReportField::Images);
                Ok(())
            }
            Err(rejection) => Err(self.reject_image(rejection)),
        }
    }

    async fn read_image<R>(&self, upload: ImageUpload<R>) -> Result<ReportImage, ImageRejection>
    where
        R: AsyncRead + Unpin + Send,
    {
        if !upload.content_type.starts_with(IMAGE_MIME_PREFIX) {
            return Err(ImageRejection::NotAnImage);
        }
        let limit = self.max_image_bytes as u64;
        if upload.declared_size > limit {
            return Err(ImageRejection::TooLarge {
                max_bytes: self.max_image_bytes,
            });
        }

        let mut bytes = Vec::new();
        upload
            .reader
            .take(limit + 1)
            .read_to_end(&mut bytes)
            .await
            .map_err(|e| {
                tracing::warn!("Failed to read image: {}", e);
                ImageRejection::Unreadable
            })?;
        if bytes.len() > self.max_image_bytes {
            return Err(ImageRejection::TooLarge {
                max_bytes: self.max_image_bytes,
            });
        }

        Ok(ReportImage {
            file_name: upload.file_name,
            data_uri: encode_data_uri(&upload.content_type, &bytes),
            content_type: upload.content_type,
            size_bytes: bytes.len(),
        })
    }

    /// Attach a photo that is already a data URI, applying the same checks as
    /// [`Self::attach_image`].
    pub fn attach_encoded_image(
        &mut self,
        data_uri: &str,
        file_name: Option<String>,
    ) -> Result<(), ImageRejection> {
        self.state = FormState::Editing;
        let Some((content_type, bytes)) = decode_data_uri(data_uri) else {
            return Err(self.reject_image(ImageRejection::Unreadable));
        };
        if !content_type.starts_with(IMAGE_MIME_PREFIX) {
            return Err(self.reject_image(ImageRejection::NotAnImage));
        }
        if bytes.len() > self.max_image_bytes {
            return Err(self.reject_image(ImageRejection::TooLarge {
                max_bytes: self.max_image_bytes,
            }));
        }

        self.draft.image = Some(ReportImage {
            file_name,
            content_type,
            size_bytes: bytes.len(),
            data_uri: data_uri.to_string(),
        });
        self.errors.clear(ReportField::Images);
        Ok(())
    }

    fn reject_image(&mut self, rejection: ImageRejection) -> ImageRejection {
        tracing::warn!(reason = %rejection, "Image rejected");
        self.errors.insert(ReportField::Images, rejection.to_string());
        rejection
    }

    pub fn remove_image(&mut self) {
        self.touch(ReportField::Images);
        self.draft.image = None;
    }

    /// Check every field, replacing the stored error map
    pub fn validate(&mut self) -> &FormErrors<ReportField> {
        let mut errors = FormErrors::new();
        for field in ReportField::ALL {
            if let Some(message) = field.validator()(&self.draft) {
                errors.insert(field, message);
            }
        }
        self.errors = errors;
        &self.errors
    }

    /// Validate and hand the draft to the sink.
    ///
    /// The draft is cleared only after the sink accepts it; the reporter is kept.
    pub async fn submit(&mut self) -> Result<Report, SubmitError<ReportField>> {
        self.state = FormState::Validating;
        self.validate();

        let snapshot = match self.draft.snapshot() {
            Some(snapshot) if self.errors.is_empty() => snapshot,
            _ => {
                self.state = FormState::Editing;
                tracing::debug!(fields = self.errors.len(), "Report form has errors");
                return Err(SubmitError::Invalid(self.errors.clone()));
            }
        };

        match self.sink.submit_report(snapshot).await {
            Ok(report) => {
                self.draft = ReportDraft {
                    reporter: self.draft.reporter.take(),
                    ..ReportDraft::default()
                };
                self.state = FormState::Submitted;
                Ok(report)
            }
            Err(e) => {
                tracing::warn!("Report sink failed: {}", e);
                self.state = FormState::Editing;
                Err(SubmitError::Sink(e))
            }
        }
    }

    /// Pin for the location being picked, once both coordinates are set
    pub fn draft_marker(&self) -> Option<MapMarker> {
        let position: Location = self.draft.location.complete()?;
        let title = if self.draft.title.is_empty() {
            DRAFT_MARKER_TITLE.to_string()
        } else {
            self.draft.title.clone()
        };
        Some(MapMarker {
            report_id: None,
            position,
            title,
            category: self.draft.category,
            description: Some(self.draft.description.clone()).filter(|d| !d.is_empty()),
            status: None,
        })
    }
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::sink::{SinkError, StoreReportSink};
    use crate::modules::store::{InMemoryStore, ReportStore};
    use crate::shared::constants::MAX_IMAGE_SIZE_BYTES;
    use async_trait::async_trait;
    use crate::features::reports::models::NewReport;

    fn form_with_store() -> (ReportFormModel, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let sink = Arc::new(StoreReportSink::new(store.clone()));
        (ReportFormModel::new(sink, MAX_IMAGE_SIZE_BYTES), store)
    }

    fn png(bytes: &[u8]) -> ImageUpload<&[u8]> {
        ImageUpload::from_bytes(Some("photo.png".to_string()), "image/png".to_string(), bytes)
    }

    async fn fill_valid(form: &mut ReportFormModel) {
        form.update_field(ReportField::Title, "Pothole");
        form.update_field(ReportField::Category, "road_damage");
        form.update_field(ReportField::Description, "Deep hole near the market");
        form.set_location(30.0444, 31.2357);
        form.attach_image(png(b"\x89PNG")).await.unwrap();
    }

    struct FailingSink;

    #[async_trait]
    impl ReportSink for FailingSink {
        async fn submit_report(&self, _report: NewReport) -> Result<Report, SinkError> {
            Err(SinkError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let (mut form, _) = form_with_store();
        let errors = form.validate();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ReportField::ALL.to_vec());
        assert_eq!(errors.get(ReportField::Title), Some("Title is required"));
        assert_eq!(errors.get(ReportField::Location), Some("Location is required"));
        assert_eq!(errors.get(ReportField::Images), Some("Image is required"));
    }

    #[tokio::test]
    async fn test_missing_fields_are_exactly_reported() {
        let (mut form, _) = form_with_store();
        fill_valid(&mut form).await;
        form.update_field(ReportField::Description, "");
        form.set_longitude("not a number");

        let errors = form.validate();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ReportField::Description, ReportField::Location]
        );
    }

    #[test]
    fn test_update_field_clears_only_that_error() {
        let (mut form, _) = form_with_store();
        form.validate();
        form.update_field(ReportField::Title, "Broken light");

        assert!(!form.errors().contains(ReportField::Title));
        assert!(form.errors().contains(ReportField::Description));
    }

    #[test]
    fn test_unknown_category_clears_and_flags() {
        let (mut form, _) = form_with_store();
        form.update_field(ReportField::Category, "water_issue");
        form.update_field(ReportField::Category, "pothole");

        assert_eq!(form.draft().category, None);
        assert_eq!(form.errors().get(ReportField::Category), Some("Unknown category"));
    }

    #[test]
    fn test_independent_coordinates_keep_each_other() {
        let (mut form, _) = form_with_store();
        form.set_latitude("30.05");
        form.set_longitude("31.2");
        form.set_latitude("");

        assert_eq!(form.draft().location.lat, None);
        assert_eq!(form.draft().location.lng, Some(31.2));

        form.update_field(ReportField::Location, "0,0");
        assert_eq!(
            form.draft().location.complete(),
            Some(Location { lat: 0.0, lng: 0.0 })
        );
    }

    #[tokio::test]
    async fn test_oversized_image_keeps_previous() {
        let (mut form, _) = form_with_store();
        form.attach_image(png(b"first")).await.unwrap();
        let before = form.draft().image.clone();

        let big = vec![0u8; 15 * 1024 * 1024];
        let result = form.attach_image(png(&big)).await;

        assert_eq!(
            result,
            Err(ImageRejection::TooLarge {
                max_bytes: MAX_IMAGE_SIZE_BYTES
            })
        );
        assert_eq!(form.draft().image, before);
        assert_eq!(
            form.errors().get(ReportField::Images),
            Some("Image must be less than 10MB")
        );
    }

    #[tokio::test]
    async fn test_size_limit_counts_bytes_read() {
        let (mut form, _) = form_with_store();
        let big = vec![0u8; MAX_IMAGE_SIZE_BYTES + 1];
        let upload = ImageUpload::new(None, "image/jpeg".to_string(), 10, big.as_slice());

        assert!(matches!(
            form.attach_image(upload).await,
            Err(ImageRejection::TooLarge { .. })
        ));
        assert!(form.draft().image.is_none());
    }

    #[tokio::test]
    async fn test_configured_limit_in_message() {
        let store = Arc::new(InMemoryStore::new());
        let mut form = ReportFormModel::new(Arc::new(StoreReportSink::new(store)), 1024);

        let result = form.attach_image(png(&[0u8; 2048])).await;
        assert!(matches!(result, Err(ImageRejection::TooLarge { max_bytes: 1024 })));
        assert_eq!(
            form.errors().get(ReportField::Images),
            Some("Image must be less than 1KB")
        );
    }

    #[tokio::test]
    async fn test_exact_limit_is_accepted() {
        let (mut form, _) = form_with_store();
        let exact = vec![0u8; MAX_IMAGE_SIZE_BYTES];
        form.attach_image(png(&exact)).await.unwrap();
        assert_eq!(
            form.draft().image.as_ref().map(|i| i.size_bytes),
            Some(MAX_IMAGE_SIZE_BYTES)
        );
    }

    #[tokio::test]
    async fn test_non_image_is_rejected_without_other_changes() {
        let (mut form, _) = form_with_store();
        form.update_field(ReportField::Title, "Leak");
        let before = form.draft().clone();

        let upload = ImageUpload::from_bytes(None, "text/plain".to_string(), b"hello");
        assert_eq!(form.attach_image(upload).await, Err(ImageRejection::NotAnImage));
        assert_eq!(form.draft(), &before);
        assert_eq!(
            form.errors().get(ReportField::Images),
            Some("Please select an image file")
        );
    }

    #[test]
    fn test_encoded_image_checks() {
        let (mut form, _) = form_with_store();
        assert_eq!(
            form.attach_encoded_image("data:text/plain;base64,aGVsbG8=", None),
            Err(ImageRejection::NotAnImage)
        );
        assert_eq!(
            form.attach_encoded_image("not a data uri", None),
            Err(ImageRejection::Unreadable)
        );
        form.attach_encoded_image("data:image/png;base64,aGVsbG8=", None)
            .unwrap();
        assert_eq!(form.draft().image.as_ref().map(|i| i.size_bytes), Some(5));
        assert!(!form.errors().contains(ReportField::Images));
    }

    #[tokio::test]
    async fn test_submit_appends_and_resets() {
        let (mut form, store) = form_with_store();
        form.set_reporter(Some("28504199501234".to_string()));
        fill_valid(&mut form).await;

        let report = form.submit().await.unwrap();

        assert_eq!(report.title, "Pothole");
        assert_eq!(report.reporter.as_deref(), Some("28504199501234"));
        assert_eq!(store.reports().await.unwrap().len(), 1);
        assert_eq!(form.state(), FormState::Submitted);
        assert!(form.draft().title.is_empty());
        assert!(form.draft().category.is_none());
        assert!(form.draft().image.is_none());
        assert!(form.draft().location.complete().is_none());
        assert_eq!(form.draft().reporter.as_deref(), Some("28504199501234"));
    }

    #[tokio::test]
    async fn test_invalid_submit_has_no_side_effect() {
        let (mut form, store) = form_with_store();
        form.update_field(ReportField::Title, "Only a title");

        let result = form.submit().await;

        assert!(matches!(result, Err(SubmitError::Invalid(ref e)) if e.len() == 4));
        assert!(store.reports().await.unwrap().is_empty());
        assert_eq!(form.draft().title, "Only a title");
        assert_eq!(form.state(), FormState::Editing);
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_draft() {
        let mut form = ReportFormModel::new(Arc::new(FailingSink), MAX_IMAGE_SIZE_BYTES);
        fill_valid(&mut form).await;

        let result = form.submit().await;

        assert!(matches!(result, Err(SubmitError::Sink(SinkError::Unavailable(_)))));
        assert_eq!(form.draft().title, "Pothole");
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn test_draft_marker_fallbacks() {
        let (mut form, _) = form_with_store();
        assert!(form.draft_marker().is_none());

        form.set_location(30.05, 31.23);
        let marker = form.draft_marker().unwrap();
        assert_eq!(marker.title, "New Report");
        assert_eq!(marker.color(), "#94a3b8");
        assert_eq!(marker.category_label(), "Uncategorized");

        form.update_field(ReportField::Title, "Dark street");
        form.update_field(ReportField::Category, "street_lighting");
        let marker = form.draft_marker().unwrap();
        assert_eq!(marker.title, "Dark street");
        assert_eq!(marker.color(), "#fcd34d");
    }
}
