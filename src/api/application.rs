// src/api/application.rs

use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::application::{SubmitApplicationRequest, SubmittedApplication};
use crate::models::stage::FinalResultResponse;

impl ApiClient {
    pub async fn submit_application(
        &self,
        request: &SubmitApplicationRequest,
    ) -> Result<SubmittedApplication, ApiError> {
        let builder = self.request(Method::POST, "/api/applications").json(request);
        self.send_json(builder).await
    }

    pub async fn update_application(
        &self,
        application_id: i64,
        request: &SubmitApplicationRequest,
    ) -> Result<SubmittedApplication, ApiError> {
        let builder = self
            .request(Method::PATCH, &format!("/api/applications/{}", application_id))
            .json(request);
        self.send_json(builder).await
    }

    /// Prior application of one applicant for a recruitment, used to
    /// prefill the edit page.
    pub async fn get_application(
        &self,
        recruitment_id: i64,
        email: &str,
    ) -> Result<SubmittedApplication, ApiError> {
        let builder = self
            .request(
                Method::GET,
                &format!("/api/recruitments/{}/applications", recruitment_id),
            )
            .query(&[("email", email)]);
        self.send_json(builder).await
    }

    /// Final-result query. The one fetch with a built-in retry: a single
    /// extra attempt, and only after a network or 5xx failure.
    pub async fn get_final_result(
        &self,
        email: &str,
        applied_at: &str,
    ) -> Result<FinalResultResponse, ApiError> {
        let mut attempts = 0;
        loop {
            let builder = self
                .request(Method::GET, "/api/applications/final-result")
                .query(&[("email", email), ("appliedAt", applied_at)]);
            match self.send_json(builder).await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    let retryable = matches!(
                        &err,
                        ApiError::Network(_) | ApiError::Http { status: 500..=599, .. }
                    );
                    if attempts >= 1 || !retryable {
                        return Err(err);
                    }
                    attempts += 1;
                    tracing::error!("final result fetch failed, retrying once: {}", err);
                }
            }
        }
    }
}
