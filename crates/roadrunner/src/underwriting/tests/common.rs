use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::underwriting::domain::{
    AccountType, ApplicantProfile, ApplicationId, BankingProfile, CreditBand, CreditHistory,
    EmploymentProfile, IdentityDetails, IncomeCategory, IncomeProfile, IncomeVariability,
    LoanPurpose, LoanRequest, MailingAddress, Obligations,
};
use crate::underwriting::repository::{
    ApplicationNotice, ApplicationRecord, ApplicationRepository, NotificationPublisher,
    NotifyError, RepositoryError,
};
use crate::underwriting::scoring::{RiskScoreEngine, ScoringPolicy};
use crate::underwriting::{application_router, LoanApplicationService};

pub(super) fn identity(first: &str, last: &str) -> IdentityDetails {
    IdentityDetails {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: "(555) 123-4567".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1991, 4, 12).expect("valid date"),
        ssn_last_four: "4821".to_string(),
        address: MailingAddress {
            street: "12 Mesa Verde Dr".to_string(),
            city: "Phoenix".to_string(),
            state: "AZ".to_string(),
            zip_code: "85004".to_string(),
        },
    }
}

/// Strong applicant used across scenarios: the sample profile from the
/// product walkthrough (income 4200, no debt, 7500 requested).
pub(super) fn profile() -> ApplicantProfile {
    ApplicantProfile {
        identity: identity("Marcus", "Chen"),
        employment: EmploymentProfile {
            gig_platforms: BTreeSet::from(["Uber".to_string(), "DoorDash".to_string()]),
            years_active: 4,
            primary_income_source: IncomeCategory::Rideshare,
        },
        income: IncomeProfile {
            monthly_income: 4200,
            trailing_six_month_avg: 4050,
            variability: IncomeVariability::Low,
        },
        obligations: Obligations {
            monthly_expenses: 1800,
            existing_debt: 0,
            bankruptcy_history: false,
        },
        loan_request: LoanRequest {
            requested_amount: 7500,
            purpose: LoanPurpose::Vehicle,
            repayment_capacity: 650,
        },
        banking: BankingProfile {
            bank_name: "Desert West Credit Union".to_string(),
            account_type: AccountType::Checking,
            avg_monthly_deposits: 4300,
            avg_monthly_withdrawals: 2400,
        },
        credit: CreditHistory {
            band: Some(CreditBand::Good),
            delinquency_history: false,
            notes: String::new(),
        },
    }
}

/// Neutral profile whose only scoring inputs are the three amounts given:
/// no experience bonus, moderate variability, unset credit band, clean flags.
pub(super) fn profile_with(
    monthly_income: u32,
    existing_debt: u32,
    requested_amount: u32,
) -> ApplicantProfile {
    let mut profile = profile();
    profile.employment.years_active = 0;
    profile.income.monthly_income = monthly_income;
    profile.income.trailing_six_month_avg = monthly_income;
    profile.income.variability = IncomeVariability::Moderate;
    profile.obligations.existing_debt = existing_debt;
    profile.loan_request.requested_amount = requested_amount;
    profile.credit.band = None;
    profile
}

pub(super) fn engine() -> RiskScoreEngine {
    RiskScoreEngine::new(ScoringPolicy::default())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.application_id == record.application_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.application_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotices {
    events: Arc<Mutex<Vec<ApplicationNotice>>>,
}

impl MemoryNotices {
    pub(super) fn events(&self) -> Vec<ApplicationNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

impl NotificationPublisher for MemoryNotices {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    LoanApplicationService<MemoryRepository, MemoryNotices>,
    Arc<MemoryRepository>,
    Arc<MemoryNotices>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notices = Arc::new(MemoryNotices::default());
    let service = LoanApplicationService::new(
        repository.clone(),
        notices.clone(),
        ScoringPolicy::default(),
    );
    (service, repository, notices)
}

pub(super) fn router_with_service(
    service: LoanApplicationService<MemoryRepository, MemoryNotices>,
) -> axum::Router {
    application_router(Arc::new(service))
}
