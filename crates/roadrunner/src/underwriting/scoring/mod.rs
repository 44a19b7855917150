mod policy;
mod rules;

pub use policy::{CreditBandDeltas, RatioBand, ScoringPolicy, TierBonus};
pub use rules::{debt_to_income_ratio, loan_to_income_ratio};

use super::domain::ApplicantProfile;
use serde::{Deserialize, Serialize};

/// Stateless engine applying the canonical scoring policy to an applicant
/// profile. Assessing the same profile twice always yields the same result.
pub struct RiskScoreEngine {
    policy: ScoringPolicy,
}

impl RiskScoreEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score a profile. Pure and total: every input produces a clamped score,
    /// malformed-looking data included. Validation is an intake concern.
    pub fn assess(&self, profile: &ApplicantProfile) -> RiskAssessment {
        let (components, raw) = rules::score_profile(profile, &self.policy);
        let score = self.policy.clamp(raw);

        RiskAssessment {
            score,
            band: self.policy.band_for(score),
            components,
        }
    }
}

/// Qualitative risk label derived solely from score cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
        }
    }
}

/// Factors the heuristic may credit or penalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringFactor {
    IncomeLevel,
    DebtToIncome,
    LoanToIncome,
    GigExperience,
    IncomeVariability,
    CreditBand,
    Delinquency,
    Bankruptcy,
}

/// Discrete contribution to an assessment, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoringFactor,
    pub delta: i16,
    pub notes: String,
}

/// Derived, immutable assessment: the clamped score, its band, and the
/// per-factor trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub band: RiskBand,
    pub components: Vec<ScoreComponent>,
}
