use serde::{Deserialize, Serialize};

/// How a stated refusal interacts with self-reported experience (household and pets).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefusalPolicy {
    /// Any refusal of the client's need scores zero.
    #[default]
    Strict,
    /// A refusal contradicted by matching experience scores at the override multiplier.
    ExperienceOverride,
}

impl RefusalPolicy {
    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" | "strict_refusal" => Some(Self::Strict),
            "experience_override" | "override" => Some(Self::ExperienceOverride),
            _ => None,
        }
    }
}

/// Whether bonuses already covered by a stated requirement are suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusPolicy {
    #[default]
    RequirementAware,
    RequirementBlind,
}

impl BonusPolicy {
    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "requirement_aware" | "aware" => Some(Self::RequirementAware),
            "requirement_blind" | "blind" => Some(Self::RequirementBlind),
            _ => None,
        }
    }
}

/// Unit in which penalty weights are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyUnit {
    /// Weights are fractions of the 100 point scale (`0.3` deducts 30 points).
    #[default]
    Fraction,
    /// Weights are already point deductions.
    Points,
}

impl PenaltyUnit {
    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fraction" => Some(Self::Fraction),
            "points" => Some(Self::Points),
            _ => None,
        }
    }

    pub fn to_points(self, weight: f64) -> f64 {
        match self {
            Self::Fraction => weight * 100.0,
            Self::Points => weight,
        }
    }
}

/// Relative importance of each requirement dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DimensionWeights {
    pub household: f64,
    pub special_cases: f64,
    pub pets: f64,
    pub dayoff: f64,
    pub living: f64,
    pub nationality: f64,
    pub cuisine: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            household: 0.7,
            special_cases: 0.7,
            pets: 0.6,
            dayoff: 0.6,
            living: 0.6,
            nationality: 0.3,
            cuisine: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PenaltyWeights {
    pub smoking: f64,
    pub attitude: f64,
    pub unit: PenaltyUnit,
    /// Treat an unstated smoking status like a smoker.
    pub penalize_unstated_smoking: bool,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            smoking: 0.3,
            attitude: 0.3,
            unit: PenaltyUnit::Fraction,
            penalize_unstated_smoking: true,
        }
    }
}

/// Point increments for bonus traits; the total is clamped to `cap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BonusWeights {
    pub cap: f64,
    pub multilingual: f64,
    pub experience_two_years: f64,
    pub experience_five_years: f64,
    pub education: f64,
    /// Accepted education levels; `None` rewards any stated level.
    pub education_levels: Option<Vec<String>>,
    pub personality_trait: f64,
    pub travel_and_relocate: f64,
    pub travel_or_relocate: f64,
    pub non_smoker: f64,
    pub caregiving: f64,
    pub multi_cuisine: f64,
    pub policy: BonusPolicy,
}

impl Default for BonusWeights {
    fn default() -> Self {
        Self {
            cap: 10.0,
            multilingual: 2.0,
            experience_two_years: 2.0,
            experience_five_years: 4.0,
            education: 2.0,
            education_levels: None,
            personality_trait: 2.0,
            travel_and_relocate: 2.0,
            travel_or_relocate: 1.0,
            non_smoker: 2.0,
            caregiving: 2.0,
            multi_cuisine: 2.0,
            policy: BonusPolicy::RequirementAware,
        }
    }
}

/// Nationality rule knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NationalityRules {
    pub restricted: Vec<String>,
    /// Restricted nationalities only match an `any` preference, even when listed.
    pub restricted_require_any: bool,
}

impl Default for NationalityRules {
    fn default() -> Self {
        Self {
            restricted: vec!["indian".to_string()],
            restricted_require_any: false,
        }
    }
}

/// Immutable weight configuration passed into every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightConfig {
    pub dimensions: DimensionWeights,
    pub penalties: PenaltyWeights,
    pub bonuses: BonusWeights,
    pub refusal_policy: RefusalPolicy,
    pub override_multiplier: f64,
    pub nationality: NationalityRules,
}

const DEFAULT_OVERRIDE_MULTIPLIER: f64 = 1.2;

impl Default for WeightConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl WeightConfig {
    pub fn standard() -> Self {
        Self {
            dimensions: DimensionWeights::default(),
            penalties: PenaltyWeights::default(),
            bonuses: BonusWeights::default(),
            refusal_policy: RefusalPolicy::Strict,
            override_multiplier: DEFAULT_OVERRIDE_MULTIPLIER,
            nationality: NationalityRules::default(),
        }
    }

    pub fn with_refusal_policy(mut self, policy: RefusalPolicy) -> Self {
        self.refusal_policy = policy;
        self
    }

    pub fn with_bonus_policy(mut self, policy: BonusPolicy) -> Self {
        self.bonuses.policy = policy;
        self
    }

    pub fn with_penalty_unit(mut self, unit: PenaltyUnit) -> Self {
        self.penalties.unit = unit;
        self
    }

    /// Rejects negative or non-finite numbers before any score is produced.
    pub fn validate(&self) -> Result<(), WeightConfigError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(WeightConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(WeightConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    fn numeric_fields(&self) -> [(&'static str, f64); 21] {
        let d = &self.dimensions;
        let p = &self.penalties;
        let b = &self.bonuses;
        [
            ("dimensions.household", d.household),
            ("dimensions.special_cases", d.special_cases),
            ("dimensions.pets", d.pets),
            ("dimensions.dayoff", d.dayoff),
            ("dimensions.living", d.living),
            ("dimensions.nationality", d.nationality),
            ("dimensions.cuisine", d.cuisine),
            ("penalties.smoking", p.smoking),
            ("penalties.attitude", p.attitude),
            ("bonuses.cap", b.cap),
            ("bonuses.multilingual", b.multilingual),
            ("bonuses.experience_two_years", b.experience_two_years),
            ("bonuses.experience_five_years", b.experience_five_years),
            ("bonuses.education", b.education),
            ("bonuses.personality_trait", b.personality_trait),
            ("bonuses.travel_and_relocate", b.travel_and_relocate),
            ("bonuses.travel_or_relocate", b.travel_or_relocate),
            ("bonuses.non_smoker", b.non_smoker),
            ("bonuses.caregiving", b.caregiving),
            ("bonuses.multi_cuisine", b.multi_cuisine),
            ("override_multiplier", self.override_multiplier),
        ]
    }
}

/// Raised when a weight configuration cannot produce meaningful scores.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightConfigError {
    #[error("weight `{field}` must be non-negative (found {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("weight `{field}` must be a finite number")]
    NonFinite { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_weights_validate() {
        let weights = WeightConfig::standard();
        assert!(weights.validate().is_ok());
        assert_eq!(weights.override_multiplier, 1.2);
        assert_eq!(weights.bonuses.cap, 10.0);
        assert_eq!(weights.refusal_policy, RefusalPolicy::Strict);
    }

    #[test]
    fn negative_weight_fails_fast() {
        let mut weights = WeightConfig::standard();
        weights.dimensions.pets = -0.1;
        match weights.validate() {
            Err(WeightConfigError::Negative { field, .. }) => assert_eq!(field, "dimensions.pets"),
            other => panic!("expected negative weight error, got {other:?}"),
        }
    }

    #[test]
    fn nan_weight_is_rejected() {
        let mut weights = WeightConfig::standard();
        weights.penalties.attitude = f64::NAN;
        assert!(matches!(
            weights.validate(),
            Err(WeightConfigError::NonFinite { field: "penalties.attitude" })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "dimensions": { "cuisine": 0.9 }, "refusal_policy": "experience_override" }"#;
        let weights: WeightConfig = serde_json::from_str(json).expect("weights parse");
        assert_eq!(weights.dimensions.cuisine, 0.9);
        assert_eq!(weights.dimensions.household, 0.7);
        assert_eq!(weights.refusal_policy, RefusalPolicy::ExperienceOverride);
        assert_eq!(weights.penalties.unit, PenaltyUnit::Fraction);
        assert_eq!(weights.override_multiplier, 1.2);
    }

    #[test]
    fn non_numeric_json_weight_is_an_error() {
        let json = r#"{ "dimensions": { "pets": "lots" } }"#;
        assert!(serde_json::from_str::<WeightConfig>(json).is_err());
    }

    #[test]
    fn penalty_unit_scales_fraction_weights() {
        assert_eq!(PenaltyUnit::Fraction.to_points(0.5), 50.0);
        assert_eq!(PenaltyUnit::Points.to_points(5.0), 5.0);
    }
}
