//! Loan application intake and risk scoring for the RoadRunner lending product.
//!
//! The scoring engine is a pure function of the applicant profile; intake wraps it
//! with id assignment, submission stamping, and repository/notification seams so the
//! HTTP surface and CLI tools can share one implementation.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AccountType, ApplicantProfile, ApplicationId, BankingProfile, CreditBand, CreditHistory,
    EmploymentProfile, IdentityDetails, IncomeCategory, IncomeProfile, IncomeVariability,
    LoanApplicationStatus, LoanPurpose, LoanRequest, MailingAddress, Obligations,
};
pub use repository::{
    ApplicationNotice, ApplicationRecord, ApplicationRepository, ApplicationStatusView,
    NotificationPublisher, NotifyError, RepositoryError,
};
pub use router::application_router;
pub use scoring::{
    RiskAssessment, RiskBand, RiskScoreEngine, ScoreComponent, ScoringFactor, ScoringPolicy,
};
pub use service::{ApplicationServiceError, IntakeError, LoanApplicationService};
