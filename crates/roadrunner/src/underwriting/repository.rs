use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, ApplicationId, LoanApplicationStatus};
use super::scoring::RiskAssessment;

/// Finalized application snapshot: profile, assessment, and submission
/// metadata. Created once at submission and never mutated by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub profile: ApplicantProfile,
    pub assessment: RiskAssessment,
    pub submitted_at: DateTime<Utc>,
    pub status: LoanApplicationStatus,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            applicant_name: self.profile.identity.full_name(),
            status: self.status.label(),
            score: self.assessment.score,
            band: self.assessment.band.label(),
            requested_amount: self.profile.loan_request.requested_amount,
            submitted_at: self.submitted_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    /// Most recent submissions first; powers the dashboard listing.
    fn recent(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification hook (e-mail, console, or a downstream review queue).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotifyError>;
}

/// Notification payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationNotice {
    pub template: String,
    pub application_id: ApplicationId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an application for dashboard and status reads.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub applicant_name: String,
    pub status: &'static str,
    pub score: u8,
    pub band: &'static str,
    pub requested_amount: u32,
    pub submitted_at: DateTime<Utc>,
}
