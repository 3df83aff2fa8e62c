// src/models/stage.rs

use serde::{Deserialize, Serialize};

/// Screening stages an applicant moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreeningStage {
    Document,
    Interview,
    Final,
}

impl ScreeningStage {
    pub fn label(self) -> &'static str {
        match self {
            ScreeningStage::Document => "서류 심사",
            ScreeningStage::Interview => "면접",
            ScreeningStage::Final => "최종",
        }
    }
}

/// Outcome of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageOutcome {
    Pending,
    Pass,
    Fail,
}

impl StageOutcome {
    pub fn label(self) -> &'static str {
        match self {
            StageOutcome::Pending => "대기",
            StageOutcome::Pass => "합격",
            StageOutcome::Fail => "불합격",
        }
    }
}

/// Stage plus outcome, the unit the result pages and the stage cache deal in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageStatus {
    pub stage: ScreeningStage,
    pub outcome: StageOutcome,
}

impl StageStatus {
    /// User-facing Korean label, e.g. "서류 심사 합격".
    pub fn label(&self) -> String {
        format!("{} {}", self.stage.label(), self.outcome.label())
    }
}

/// Response body of the final-result query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResultResponse {
    pub status: StageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
