use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted loan applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Personal and contact details collected on the first wizard step. Stored verbatim;
/// no format validation beyond presence happens in this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub ssn_last_four: String,
    pub address: MailingAddress,
}

impl IdentityDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Gig work history. Platforms are kept as a set so duplicate checkbox submissions
/// collapse naturally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentProfile {
    pub gig_platforms: BTreeSet<String>,
    pub years_active: u8,
    pub primary_income_source: IncomeCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Rideshare,
    Delivery,
    Freelance,
    Tasks,
    Other,
}

/// Declared income. Currency fields are whole dollars; unsigned types carry the
/// non-negativity invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub monthly_income: u32,
    pub trailing_six_month_avg: u32,
    #[serde(default)]
    pub variability: IncomeVariability,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeVariability {
    Low,
    #[default]
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligations {
    pub monthly_expenses: u32,
    pub existing_debt: u32,
    #[serde(default)]
    pub bankruptcy_history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub requested_amount: u32,
    pub purpose: LoanPurpose,
    pub repayment_capacity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanPurpose {
    Vehicle,
    Business,
    Emergency,
    #[serde(rename = "debt")]
    DebtConsolidation,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankingProfile {
    pub bank_name: String,
    #[serde(default)]
    pub account_type: AccountType,
    pub avg_monthly_deposits: u32,
    pub avg_monthly_withdrawals: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Both,
}

/// Self-reported credit standing. The band is optional; scoring treats an unset
/// band the same as `Good`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditHistory {
    #[serde(default)]
    pub band: Option<CreditBand>,
    #[serde(default)]
    pub delinquency_history: bool,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Complete applicant snapshot the wizard assembles across its five steps.
/// Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub identity: IdentityDetails,
    pub employment: EmploymentProfile,
    pub income: IncomeProfile,
    pub obligations: Obligations,
    pub loan_request: LoanRequest,
    pub banking: BankingProfile,
    pub credit: CreditHistory,
}

/// Lifecycle status shown on the dashboard. New submissions always start as
/// `Pending`; later transitions belong to a review workflow outside this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl LoanApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LoanApplicationStatus::Pending => "pending",
            LoanApplicationStatus::UnderReview => "under-review",
            LoanApplicationStatus::Approved => "approved",
            LoanApplicationStatus::Rejected => "rejected",
        }
    }
}
