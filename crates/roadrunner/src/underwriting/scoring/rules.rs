use super::super::domain::{ApplicantProfile, CreditBand, IncomeVariability};
use super::policy::ScoringPolicy;
use super::{ScoreComponent, ScoringFactor};

/// Debt-to-income ratio with the divisor floored at 1 so a zero-income profile
/// still scores without dividing by zero.
pub fn debt_to_income_ratio(profile: &ApplicantProfile) -> f32 {
    profile.obligations.existing_debt as f32 / profile.income.monthly_income.max(1) as f32
}

/// Loan-to-income ratio with the same floored divisor.
pub fn loan_to_income_ratio(profile: &ApplicantProfile) -> f32 {
    profile.loan_request.requested_amount as f32 / profile.income.monthly_income.max(1) as f32
}

pub(crate) fn score_profile(
    profile: &ApplicantProfile,
    policy: &ScoringPolicy,
) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::new();
    let mut total: i16 = policy.base_score;

    let monthly_income = profile.income.monthly_income;
    for tier in &policy.income_tiers {
        if monthly_income > tier.above {
            components.push(ScoreComponent {
                factor: ScoringFactor::IncomeLevel,
                delta: tier.bonus,
                notes: format!("monthly income {monthly_income} above {}", tier.above),
            });
            total += tier.bonus;
        }
    }

    let dti = debt_to_income_ratio(profile);
    if dti < policy.debt_to_income.reward_below {
        components.push(ScoreComponent {
            factor: ScoringFactor::DebtToIncome,
            delta: policy.debt_to_income.reward,
            notes: format!(
                "debt-to-income {dti:.2} below {:.2}",
                policy.debt_to_income.reward_below
            ),
        });
        total += policy.debt_to_income.reward;
    } else if dti > policy.debt_to_income.penalize_above {
        components.push(ScoreComponent {
            factor: ScoringFactor::DebtToIncome,
            delta: -policy.debt_to_income.penalty,
            notes: format!(
                "debt-to-income {dti:.2} exceeds {:.2}",
                policy.debt_to_income.penalize_above
            ),
        });
        total -= policy.debt_to_income.penalty;
    }

    let lti = loan_to_income_ratio(profile);
    if lti < policy.loan_to_income.reward_below {
        components.push(ScoreComponent {
            factor: ScoringFactor::LoanToIncome,
            delta: policy.loan_to_income.reward,
            notes: format!(
                "loan-to-income {lti:.2} below {:.2}",
                policy.loan_to_income.reward_below
            ),
        });
        total += policy.loan_to_income.reward;
    } else if lti > policy.loan_to_income.penalize_above {
        components.push(ScoreComponent {
            factor: ScoringFactor::LoanToIncome,
            delta: -policy.loan_to_income.penalty,
            notes: format!(
                "loan-to-income {lti:.2} exceeds {:.2}",
                policy.loan_to_income.penalize_above
            ),
        });
        total -= policy.loan_to_income.penalty;
    }

    if profile.employment.years_active >= policy.experience_years {
        components.push(ScoreComponent {
            factor: ScoringFactor::GigExperience,
            delta: policy.experience_bonus,
            notes: format!(
                "{} year(s) of gig work meets minimum {}",
                profile.employment.years_active, policy.experience_years
            ),
        });
        total += policy.experience_bonus;
    }

    match profile.income.variability {
        IncomeVariability::Low => {
            components.push(ScoreComponent {
                factor: ScoringFactor::IncomeVariability,
                delta: policy.low_variability_bonus,
                notes: "consistent income".to_string(),
            });
            total += policy.low_variability_bonus;
        }
        IncomeVariability::High => {
            components.push(ScoreComponent {
                factor: ScoringFactor::IncomeVariability,
                delta: -policy.high_variability_penalty,
                notes: "highly variable income".to_string(),
            });
            total -= policy.high_variability_penalty;
        }
        IncomeVariability::Moderate => {}
    }

    if let Some(band) = profile.credit.band {
        let delta = match band {
            CreditBand::Excellent => policy.credit_bands.excellent,
            CreditBand::Good => policy.credit_bands.good,
            CreditBand::Fair => policy.credit_bands.fair,
            CreditBand::Poor => policy.credit_bands.poor,
        };
        if delta != 0 {
            components.push(ScoreComponent {
                factor: ScoringFactor::CreditBand,
                delta,
                notes: format!("self-reported credit band {band:?}"),
            });
            total += delta;
        }
    }

    if profile.credit.delinquency_history {
        components.push(ScoreComponent {
            factor: ScoringFactor::Delinquency,
            delta: -policy.delinquency_penalty,
            notes: "prior delinquency disclosed".to_string(),
        });
        total -= policy.delinquency_penalty;
    }

    if profile.obligations.bankruptcy_history {
        components.push(ScoreComponent {
            factor: ScoringFactor::Bankruptcy,
            delta: -policy.bankruptcy_penalty,
            notes: "prior bankruptcy disclosed".to_string(),
        });
        total -= policy.bankruptcy_penalty;
    }

    (components, total)
}
