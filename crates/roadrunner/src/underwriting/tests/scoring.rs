use super::common::*;
use crate::underwriting::domain::{CreditBand, IncomeVariability};
use crate::underwriting::scoring::{RiskBand, ScoringFactor, ScoringPolicy};

#[test]
fn strong_sample_profile_maxes_out() {
    let engine = engine();
    let assessment = engine.assess(&profile());

    // 50 +15 income +15 dti +10 lti +10 experience +10 low variability = 110, clamped.
    assert_eq!(assessment.score, 100);
    assert_eq!(assessment.band, RiskBand::Low);
}

#[test]
fn assessment_is_deterministic() {
    let engine = engine();
    let profile = profile();

    let first = engine.assess(&profile);
    let second = engine.assess(&profile);

    assert_eq!(first, second);
}

#[test]
fn score_stays_within_policy_window() {
    let engine = engine();
    let floor = engine.policy().score_floor;
    let ceiling = engine.policy().score_ceiling;

    let mut worst = profile_with(0, 500, 1000);
    worst.income.variability = IncomeVariability::High;
    worst.credit.band = Some(CreditBand::Poor);
    worst.credit.delinquency_history = true;
    worst.obligations.bankruptcy_history = true;

    for candidate in [profile(), profile_with(9000, 0, 0), worst] {
        let assessment = engine.assess(&candidate);
        assert!(assessment.score >= floor && assessment.score <= ceiling);
    }
}

#[test]
fn zero_income_profile_scores_without_panicking() {
    let engine = engine();
    let assessment = engine.assess(&profile_with(0, 500, 1000));

    // Ratios fall back to a divisor of 1, so both penalize.
    assert_eq!(assessment.score, 15);
    assert_eq!(assessment.band, RiskBand::High);
}

#[test]
fn raising_income_never_lowers_the_score() {
    let engine = engine();
    let mut previous = None;
    for income in [0, 2999, 3001, 5001, 12_000] {
        let score = engine.assess(&profile_with(income, 1000, 4000)).score;
        if let Some(last) = previous {
            assert!(score >= last, "score dropped from {last} to {score} at income {income}");
        }
        previous = Some(score);
    }
}

#[test]
fn income_tiers_stack_for_high_earners() {
    let engine = engine();
    let assessment = engine.assess(&profile_with(6000, 0, 0));

    let tier_bonuses: Vec<i16> = assessment
        .components
        .iter()
        .filter(|component| component.factor == ScoringFactor::IncomeLevel)
        .map(|component| component.delta)
        .collect();
    assert_eq!(tier_bonuses, vec![15, 10]);
}

#[test]
fn ratios_in_the_neutral_zone_contribute_nothing() {
    let engine = engine();
    // dti = 2800/4000 = 0.70, lti = 12000/4000 = 3.0; both between the cutoffs.
    let assessment = engine.assess(&profile_with(4000, 2800, 12_000));

    assert!(!assessment.components.iter().any(|component| matches!(
        component.factor,
        ScoringFactor::DebtToIncome | ScoringFactor::LoanToIncome
    )));
}

#[test]
fn bankruptcy_always_costs_the_full_penalty() {
    let engine = engine();
    // Mid-range profile so neither score clamps: 50 +15 income -10 fair credit = 55.
    let mut clean = profile_with(3500, 2000, 8000);
    clean.credit.band = Some(CreditBand::Fair);
    let mut flagged = clean.clone();
    flagged.obligations.bankruptcy_history = true;

    let clean_score = engine.assess(&clean).score;
    let flagged_score = engine.assess(&flagged).score;

    assert!(flagged_score < clean_score);
    assert_eq!(
        i16::from(clean_score) - i16::from(flagged_score),
        engine.policy().bankruptcy_penalty
    );
    assert!(i16::from(clean_score) - i16::from(flagged_score) >= 25);
}

#[test]
fn delinquency_and_credit_band_penalties_apply() {
    let engine = engine();
    let mut profile = profile_with(3500, 2000, 8000);
    profile.credit.band = Some(CreditBand::Poor);
    profile.credit.delinquency_history = true;

    let assessment = engine.assess(&profile);

    // 50 +15 income -20 poor credit -25 delinquency = 20.
    assert_eq!(assessment.score, 20);
    assert!(assessment
        .components
        .iter()
        .any(|component| component.factor == ScoringFactor::Delinquency && component.delta < 0));
}

#[test]
fn band_cutoffs_match_policy() {
    let policy = ScoringPolicy::default();

    assert_eq!(policy.band_for(80), RiskBand::Low);
    assert_eq!(policy.band_for(79), RiskBand::Moderate);
    assert_eq!(policy.band_for(60), RiskBand::Moderate);
    assert_eq!(policy.band_for(59), RiskBand::High);
}

#[test]
fn stricter_policy_variant_is_expressible_as_data() {
    // The legacy single-page form used a floor of 10 and else-if income tiers;
    // a policy document models that as one tier plus a raised floor.
    let mut policy = ScoringPolicy::default();
    policy.score_floor = 10;
    policy.income_tiers = vec![crate::underwriting::scoring::TierBonus {
        above: 5000,
        bonus: 20,
    }];

    let engine = crate::underwriting::scoring::RiskScoreEngine::new(policy);
    let mut hopeless = profile_with(0, 5000, 10_000);
    hopeless.obligations.bankruptcy_history = true;
    hopeless.credit.delinquency_history = true;
    hopeless.credit.band = Some(CreditBand::Poor);
    hopeless.income.variability = IncomeVariability::High;

    assert_eq!(engine.assess(&hopeless).score, 10);
}
