use serde::{Deserialize, Serialize};

use super::RiskBand;

/// Income tier bonus. Every tier whose threshold is exceeded fires, so the
/// bonuses stack for high earners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBonus {
    pub above: u32,
    pub bonus: i16,
}

/// Reward/penalize bands around a financial ratio. Ratios falling between the
/// two cutoffs are neutral and contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioBand {
    pub reward_below: f32,
    pub reward: i16,
    pub penalize_above: f32,
    pub penalty: i16,
}

/// Per-band credit adjustments. Positive values add to the score, negative
/// values subtract; an unset band contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditBandDeltas {
    pub excellent: i16,
    pub good: i16,
    pub fair: i16,
    pub poor: i16,
}

/// The single source of truth for the additive risk heuristic. All penalty
/// fields hold magnitudes and are subtracted by the rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub base_score: i16,
    pub income_tiers: Vec<TierBonus>,
    pub debt_to_income: RatioBand,
    pub loan_to_income: RatioBand,
    pub experience_years: u8,
    pub experience_bonus: i16,
    pub low_variability_bonus: i16,
    pub high_variability_penalty: i16,
    pub credit_bands: CreditBandDeltas,
    pub delinquency_penalty: i16,
    pub bankruptcy_penalty: i16,
    pub score_floor: u8,
    pub score_ceiling: u8,
    pub low_risk_cutoff: u8,
    pub moderate_risk_cutoff: u8,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            base_score: 50,
            income_tiers: vec![
                TierBonus {
                    above: 3000,
                    bonus: 15,
                },
                TierBonus {
                    above: 5000,
                    bonus: 10,
                },
            ],
            debt_to_income: RatioBand {
                reward_below: 0.5,
                reward: 15,
                penalize_above: 1.0,
                penalty: 20,
            },
            loan_to_income: RatioBand {
                reward_below: 2.0,
                reward: 10,
                penalize_above: 4.0,
                penalty: 15,
            },
            experience_years: 3,
            experience_bonus: 10,
            low_variability_bonus: 10,
            high_variability_penalty: 10,
            credit_bands: CreditBandDeltas {
                excellent: 15,
                good: 0,
                fair: -10,
                poor: -20,
            },
            delinquency_penalty: 25,
            bankruptcy_penalty: 30,
            score_floor: 0,
            score_ceiling: 100,
            low_risk_cutoff: 80,
            moderate_risk_cutoff: 60,
        }
    }
}

impl ScoringPolicy {
    pub fn clamp(&self, raw: i16) -> u8 {
        raw.clamp(i16::from(self.score_floor), i16::from(self.score_ceiling)) as u8
    }

    pub fn band_for(&self, score: u8) -> RiskBand {
        if score >= self.low_risk_cutoff {
            RiskBand::Low
        } else if score >= self.moderate_risk_cutoff {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }
}
