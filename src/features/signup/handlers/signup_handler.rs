use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::signup::models::SignupDraft;
use crate::features::signup::services::SignupFormModel;
use crate::modules::sink::{RegistrationReceipt, RegistrationSink};
use crate::shared::types::ApiResponse;

/// Submit a signup form
///
/// The body is tagged by `variant`: `resident` (first/last name and address)
/// or `quick` (single name and age).
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupDraft,
    responses(
        (status = 201, description = "Signup accepted", body = ApiResponse<RegistrationReceipt>),
        (status = 400, description = "Form has invalid fields"),
        (status = 409, description = "National ID already registered")
    ),
    tag = "signup"
)]
pub async fn submit_signup(
    State(sink): State<Arc<dyn RegistrationSink>>,
    AppJson(draft): AppJson<SignupDraft>,
) -> Result<(StatusCode, Json<ApiResponse<RegistrationReceipt>>)> {
    let mut form = SignupFormModel::new(draft, sink);
    let receipt = form.submit().await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(receipt),
            Some("Account created".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{empty_server, test_server};
    use crate::core::config::Config;

    fn resident_body(national_id: &str) -> Value {
        json!({
            "variant": "resident",
            "firstName": "Mona",
            "lastName": "Hassan",
            "email": "mona.hassan@example.com",
            "nationalId": national_id,
            "phone": "01223334445",
            "password": "qwerty456",
            "address": "45 Nile Corniche",
            "city": "Giza",
            "governorate": "Giza"
        })
    }

    #[tokio::test]
    async fn test_signup_logged_by_default() {
        let server = empty_server();
        let response = server
            .post("/api/signup")
            .json(&resident_body("29708200104567"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["stored"], false);
    }

    #[tokio::test]
    async fn test_signup_field_errors() {
        let server = empty_server();
        let response = server
            .post("/api/signup")
            .json(&json!({ "variant": "quick", "nationalId": "123", "age": "16" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["field_errors"]["nationalId"], "National ID must be 14 digits.");
        assert_eq!(body["field_errors"]["age"], "Age must be 18 or older.");
        assert_eq!(body["field_errors"]["name"], "Name is required.");
    }

    #[tokio::test]
    async fn test_signup_unknown_variant_is_bad_request() {
        let server = empty_server();
        server
            .post("/api/signup")
            .json(&json!({ "variant": "business" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_directory_signup_conflict() {
        let mut config = Config::for_tests();
        config.signup.register_users = true;
        let server = test_server(config);

        server
            .post("/api/signup")
            .json(&resident_body("29708200104567"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/signup")
            .json(&resident_body("29708200104567"))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }
}
