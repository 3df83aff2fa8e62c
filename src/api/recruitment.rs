// src/api/recruitment.rs

use reqwest::Method;
use serde_json::json;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::recruitment::{CreateRecruitmentRequest, CreatedRecruitment, RecruitmentDetail};

impl ApiClient {
    /// Public recruitment detail, as seen by an applicant.
    pub async fn get_recruitment(&self, id: i64) -> Result<RecruitmentDetail, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/recruitments/{}", id));
        self.send_json(builder).await
    }

    /// Admin variant, including inactive drafts.
    pub async fn get_recruitment_admin(&self, id: i64) -> Result<RecruitmentDetail, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/admin/recruitments/{}", id));
        self.send_json(builder).await
    }

    pub async fn create_recruitment(
        &self,
        request: &CreateRecruitmentRequest,
    ) -> Result<CreatedRecruitment, ApiError> {
        let builder = self
            .request(Method::POST, "/api/admin/recruitments")
            .json(request);
        self.send_json(builder).await
    }

    pub async fn set_recruitment_active(&self, id: i64, active: bool) -> Result<(), ApiError> {
        let builder = self
            .request(
                Method::PATCH,
                &format!("/api/admin/recruitments/{}/active", id),
            )
            .json(&json!({ "isActive": active }));
        self.send_no_content(builder).await
    }

    pub async fn delete_recruitment(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &format!("/api/admin/recruitments/{}", id));
        self.send_no_content(builder).await
    }
}
