use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{ApplicantProfile, ApplicationId, LoanApplicationStatus};
use super::repository::{
    ApplicationNotice, ApplicationRecord, ApplicationRepository, NotificationPublisher,
    NotifyError, RepositoryError,
};
use super::scoring::{RiskAssessment, RiskScoreEngine, ScoringPolicy};

/// Service composing the intake check, scoring engine, repository, and
/// notification seam.
pub struct LoanApplicationService<R, N> {
    repository: Arc<R>,
    notices: Arc<N>,
    engine: Arc<RiskScoreEngine>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("APP{id:06}"))
}

/// Presentation-level required-field check. Mirrors the wizard's `required`
/// markers; scoring itself never validates.
pub(crate) fn check_required_fields(profile: &ApplicantProfile) -> Result<(), IntakeError> {
    let identity = &profile.identity;
    let fields: [(&'static str, &str); 9] = [
        ("first_name", &identity.first_name),
        ("last_name", &identity.last_name),
        ("email", &identity.email),
        ("phone", &identity.phone),
        ("ssn_last_four", &identity.ssn_last_four),
        ("street", &identity.address.street),
        ("city", &identity.address.city),
        ("state", &identity.address.state),
        ("zip_code", &identity.address.zip_code),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(IntakeError::MissingField(name));
        }
    }

    if profile.employment.gig_platforms.is_empty() {
        return Err(IntakeError::MissingField("gig_platforms"));
    }
    if profile.banking.bank_name.trim().is_empty() {
        return Err(IntakeError::MissingField("bank_name"));
    }

    Ok(())
}

impl<R, N> LoanApplicationService<R, N>
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notices: Arc<N>, policy: ScoringPolicy) -> Self {
        Self {
            repository,
            notices,
            engine: Arc::new(RiskScoreEngine::new(policy)),
        }
    }

    /// Idempotent assessment preview for the review step. Does not store
    /// anything; calling again at submission yields the same result.
    pub fn assess(&self, profile: &ApplicantProfile) -> RiskAssessment {
        self.engine.assess(profile)
    }

    /// Finalize and store a submission: assign an id, score the profile,
    /// stamp the current time, and publish a received notice.
    pub fn submit(
        &self,
        profile: ApplicantProfile,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        check_required_fields(&profile)?;

        let application_id = next_application_id();
        let assessment = self.engine.assess(&profile);

        let record = ApplicationRecord {
            application_id: application_id.clone(),
            profile,
            assessment,
            submitted_at: Utc::now(),
            status: LoanApplicationStatus::Pending,
        };

        let stored = self.repository.insert(record)?;

        let mut details = BTreeMap::new();
        details.insert("score".to_string(), stored.assessment.score.to_string());
        details.insert("band".to_string(), stored.assessment.band.label().to_string());
        self.notices.publish(ApplicationNotice {
            template: "application_received".to_string(),
            application_id,
            details,
        })?;

        Ok(stored)
    }

    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Recent applications for the dashboard, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Required-field failures surfaced by intake, never by scoring.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotifyError),
}
