use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use roadrunner::config::ScoringConfig;
use roadrunner::error::AppError;
use roadrunner::underwriting::{
    ApplicantProfile, ApplicationRecord, ApplicationServiceError, LoanApplicationService,
    RiskScoreEngine, ScoringPolicy,
};

use crate::cli::ScoreArgs;
use crate::infra::{seed_repository, InMemoryApplicationRepository, LoggingNotificationPublisher};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional scoring policy JSON overriding the canonical defaults
    #[arg(long)]
    pub(crate) policy: Option<PathBuf>,
    /// Only print the seeded dashboard, skipping the live intake walkthrough
    #[arg(long)]
    pub(crate) dashboard_only: bool,
}

fn load_policy(path: Option<PathBuf>) -> Result<ScoringPolicy, AppError> {
    let scoring = ScoringConfig { policy_path: path };
    Ok(scoring.load_policy()?)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = fs::read(&args.profile)?;
    let profile: ApplicantProfile = serde_json::from_slice(&raw)?;
    let policy = load_policy(args.policy)?;

    let engine = RiskScoreEngine::new(policy);
    let assessment = engine.assess(&profile);

    println!(
        "{} — score {} ({})",
        profile.identity.full_name(),
        assessment.score,
        assessment.band.label()
    );
    for component in &assessment.components {
        println!("  {:+4}  {}", component.delta, component.notes);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let policy = load_policy(args.policy)?;

    let repository = Arc::new(InMemoryApplicationRepository::default());
    let notices = Arc::new(LoggingNotificationPublisher);
    seed_repository(&repository, &policy).map_err(ApplicationServiceError::Repository)?;
    let service = LoanApplicationService::new(repository, notices, policy);

    println!("RoadRunner underwriting demo");
    println!("\nDashboard — recent applications");
    let recent = service.recent(10)?;
    render_dashboard(&recent);

    if args.dashboard_only {
        return Ok(());
    }

    println!("\nLive intake walkthrough");
    let applicant = walkthrough_profile();
    let preview = service.assess(&applicant);
    println!(
        "review step — {} scores {} ({})",
        applicant.identity.full_name(),
        preview.score,
        preview.band.label()
    );
    for component in &preview.components {
        println!("  {:+4}  {}", component.delta, component.notes);
    }

    let record = service.submit(applicant)?;
    println!(
        "submitted — {} is {} with score {}",
        record.application_id.0,
        record.status.label(),
        record.assessment.score
    );

    Ok(())
}

fn render_dashboard(records: &[ApplicationRecord]) {
    println!(
        "{:<14} {:<18} {:>8} {:>10} {:>6}  {:<14} {:<12}",
        "id", "applicant", "income", "requested", "score", "band", "status"
    );
    for record in records {
        println!(
            "{:<14} {:<18} {:>8} {:>10} {:>6}  {:<14} {:<12}",
            record.application_id.0,
            record.profile.identity.full_name(),
            record.profile.income.monthly_income,
            record.profile.loan_request.requested_amount,
            record.assessment.score,
            record.assessment.band.label(),
            record.status.label()
        );
    }
}

fn walkthrough_profile() -> ApplicantProfile {
    use chrono::NaiveDate;
    use roadrunner::underwriting::{
        AccountType, BankingProfile, CreditBand, CreditHistory, EmploymentProfile,
        IdentityDetails, IncomeCategory, IncomeProfile, IncomeVariability, LoanPurpose,
        LoanRequest, MailingAddress, Obligations,
    };
    use std::collections::BTreeSet;

    ApplicantProfile {
        identity: IdentityDetails {
            first_name: "Dana".to_string(),
            last_name: "Okafor".to_string(),
            email: "dana.o@example.com".to_string(),
            phone: "(555) 987-6543".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 21).expect("valid date"),
            ssn_last_four: "5512".to_string(),
            address: MailingAddress {
                street: "44 Canal St".to_string(),
                city: "Columbus".to_string(),
                state: "OH".to_string(),
                zip_code: "43215".to_string(),
            },
        },
        employment: EmploymentProfile {
            gig_platforms: BTreeSet::from(["Freelancer".to_string(), "Fiverr".to_string()]),
            years_active: 5,
            primary_income_source: IncomeCategory::Freelance,
        },
        income: IncomeProfile {
            monthly_income: 5200,
            trailing_six_month_avg: 4900,
            variability: IncomeVariability::Moderate,
        },
        obligations: Obligations {
            monthly_expenses: 2600,
            existing_debt: 1200,
            bankruptcy_history: false,
        },
        loan_request: LoanRequest {
            requested_amount: 9000,
            purpose: LoanPurpose::Business,
            repayment_capacity: 800,
        },
        banking: BankingProfile {
            bank_name: "Scioto Valley Bank".to_string(),
            account_type: AccountType::Both,
            avg_monthly_deposits: 5300,
            avg_monthly_withdrawals: 3100,
        },
        credit: CreditHistory {
            band: Some(CreditBand::Excellent),
            delinquency_history: false,
            notes: "Retainer clients cover most months".to_string(),
        },
    }
}
