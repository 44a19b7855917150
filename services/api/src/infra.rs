use std::collections::BTreeSet;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use roadrunner::underwriting::{
    AccountType, ApplicantProfile, ApplicationId, ApplicationNotice, ApplicationRecord,
    ApplicationRepository, BankingProfile, CreditBand, CreditHistory, EmploymentProfile,
    IdentityDetails, IncomeCategory, IncomeProfile, IncomeVariability, LoanApplicationStatus,
    LoanPurpose, LoanRequest, MailingAddress, NotificationPublisher, NotifyError, Obligations,
    RepositoryError, RiskScoreEngine, ScoringPolicy,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<ApplicationRecord>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
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
        let mut records: Vec<_> = guard.clone();
        records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        records.truncate(limit);
        Ok(records)
    }
}

/// Console publisher standing in for a real notification channel.
#[derive(Default, Clone)]
pub(crate) struct LoggingNotificationPublisher;

impl NotificationPublisher for LoggingNotificationPublisher {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotifyError> {
        tracing::info!(
            template = %notice.template,
            application_id = %notice.application_id.0,
            "application notice published"
        );
        Ok(())
    }
}

fn seed_profile(
    first: &str,
    last: &str,
    email: &str,
    platforms: [&str; 2],
    monthly_income: u32,
    existing_debt: u32,
    requested_amount: u32,
    years_active: u8,
    variability: IncomeVariability,
    band: Option<CreditBand>,
) -> ApplicantProfile {
    ApplicantProfile {
        identity: IdentityDetails {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: "(555) 123-4567".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
            ssn_last_four: "0000".to_string(),
            address: MailingAddress {
                street: "1 Demo Way".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                zip_code: "73301".to_string(),
            },
        },
        employment: EmploymentProfile {
            gig_platforms: BTreeSet::from([platforms[0].to_string(), platforms[1].to_string()]),
            years_active,
            primary_income_source: IncomeCategory::Rideshare,
        },
        income: IncomeProfile {
            monthly_income,
            trailing_six_month_avg: monthly_income,
            variability,
        },
        obligations: Obligations {
            monthly_expenses: monthly_income / 2,
            existing_debt,
            bankruptcy_history: false,
        },
        loan_request: LoanRequest {
            requested_amount,
            purpose: LoanPurpose::Business,
            repayment_capacity: monthly_income / 8,
        },
        banking: BankingProfile {
            bank_name: "Lone Star Savings".to_string(),
            account_type: AccountType::Checking,
            avg_monthly_deposits: monthly_income,
            avg_monthly_withdrawals: monthly_income / 2,
        },
        credit: CreditHistory {
            band,
            delinquency_history: false,
            notes: String::new(),
        },
    }
}

/// Sample applications for dashboard demos. Assessments are computed with the
/// live engine, not hard-coded, so they track the active policy.
pub(crate) fn seed_applications(policy: &ScoringPolicy) -> Vec<ApplicationRecord> {
    let engine = RiskScoreEngine::new(policy.clone());

    let seeds = [
        (
            "APP-DEMO-001",
            seed_profile(
                "Sarah",
                "Johnson",
                "sarah.j@example.com",
                ["Uber", "Instacart"],
                3500,
                2500,
                5000,
                2,
                IncomeVariability::Moderate,
                Some(CreditBand::Fair),
            ),
            LoanApplicationStatus::UnderReview,
            NaiveDate::from_ymd_opt(2024, 1, 15),
        ),
        (
            "APP-DEMO-002",
            seed_profile(
                "Marcus",
                "Chen",
                "m.chen@example.com",
                ["Lyft", "DoorDash"],
                4200,
                0,
                7500,
                4,
                IncomeVariability::Low,
                Some(CreditBand::Good),
            ),
            LoanApplicationStatus::Approved,
            NaiveDate::from_ymd_opt(2024, 1, 10),
        ),
        (
            "APP-DEMO-003",
            seed_profile(
                "Elena",
                "Rodriguez",
                "elena.r@example.com",
                ["TaskRabbit", "Fiverr"],
                2800,
                1800,
                3500,
                1,
                IncomeVariability::High,
                Some(CreditBand::Fair),
            ),
            LoanApplicationStatus::Pending,
            NaiveDate::from_ymd_opt(2024, 1, 20),
        ),
    ];

    seeds
        .into_iter()
        .map(|(id, profile, status, applied)| {
            let assessment = engine.assess(&profile);
            let submitted_at = applied
                .and_then(|date| date.and_hms_opt(9, 0, 0))
                .map(|naive| Utc.from_utc_datetime(&naive))
                .unwrap_or_else(Utc::now);
            ApplicationRecord {
                application_id: ApplicationId(id.to_string()),
                profile,
                assessment,
                submitted_at,
                status,
            }
        })
        .collect()
}

pub(crate) fn seed_repository(
    repository: &InMemoryApplicationRepository,
    policy: &ScoringPolicy,
) -> Result<usize, RepositoryError> {
    let records = seed_applications(policy);
    let count = records.len();
    for record in records {
        repository.insert(record)?;
    }
    Ok(count)
}
