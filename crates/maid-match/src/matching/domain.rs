use serde::{Deserialize, Serialize};

use super::normalizer::{is_unspecified, normalize_token, TokenSet};

/// Identifier wrapper for client rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientId(pub String);

/// Identifier wrapper for candidate worker rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Household composition the client needs help with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdNeed {
    #[default]
    Unspecified,
    Baby,
    ManyKids,
    BabyAndKids,
}

impl HouseholdNeed {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "baby" => Self::Baby,
            "many_kids" => Self::ManyKids,
            "baby_and_kids" => Self::BabyAndKids,
            _ => Self::Unspecified,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Baby => "baby",
            Self::ManyKids => "many_kids",
            Self::BabyAndKids => "baby_and_kids",
        }
    }
}

/// Special care the client household requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareNeed {
    #[default]
    Unspecified,
    Elderly,
    SpecialNeeds,
    ElderlyAndSpecial,
}

impl CareNeed {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "elderly" => Self::Elderly,
            "special_needs" => Self::SpecialNeeds,
            "elderly_and_special" => Self::ElderlyAndSpecial,
            _ => Self::Unspecified,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Elderly => "elderly",
            Self::SpecialNeeds => "special_needs",
            Self::ElderlyAndSpecial => "elderly_and_special",
        }
    }
}

/// Pets living in the client household.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetNeed {
    #[default]
    NoPets,
    Cat,
    Dog,
    Both,
}

impl PetNeed {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "cat" | "cats" => Self::Cat,
            "dog" | "dogs" => Self::Dog,
            "both" | "cat_and_dog" => Self::Both,
            _ => Self::NoPets,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoPets => "no_pets",
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Both => "both",
        }
    }
}

/// Day-off arrangement requested by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOffRequest {
    #[default]
    Unspecified,
    Requested(String),
}

impl DayOffRequest {
    pub fn from_token(value: &str) -> Self {
        let token = normalize_token(value);
        if is_unspecified(&token) {
            Self::Unspecified
        } else {
            Self::Requested(token)
        }
    }
}

/// Nationality preference, either open to anyone or restricted to a token set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NationalityPreference {
    #[default]
    Unspecified,
    Any,
    OneOf(TokenSet),
}

impl NationalityPreference {
    pub fn from_token(value: &str) -> Self {
        let tokens = TokenSet::parse(value);
        if tokens.is_empty() {
            Self::Unspecified
        } else if tokens.contains("any") {
            Self::Any
        } else {
            Self::OneOf(tokens)
        }
    }
}

/// Refusal the candidate declared for a household type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdRefusal {
    #[default]
    None,
    RefusesBaby,
    RefusesManyKids,
    RefusesBabyAndKids,
}

impl HouseholdRefusal {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "refuses_baby" => Self::RefusesBaby,
            "refuses_many_kids" => Self::RefusesManyKids,
            "refuses_baby_and_kids" => Self::RefusesBabyAndKids,
            _ => Self::None,
        }
    }
}

/// Self-reported experience bucket with children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KidsExperience {
    #[default]
    Unspecified,
    UnderTwo,
    AboveTwo,
    Both,
}

impl KidsExperience {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "lessthan2" | "less_than_2" | "under_two" => Self::UnderTwo,
            "above2" | "above_2" | "above_two" => Self::AboveTwo,
            "both" => Self::Both,
            _ => Self::Unspecified,
        }
    }
}

/// Caregiving background the candidate declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareProfile {
    #[default]
    Unspecified,
    Elderly,
    SpecialNeeds,
    ElderlyAndSpecial,
}

impl CareProfile {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "elderly" | "elderly_experienced" => Self::Elderly,
            "special_needs" => Self::SpecialNeeds,
            "elderly_and_special" => Self::ElderlyAndSpecial,
            _ => Self::Unspecified,
        }
    }

    pub const fn has_any(self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

/// Pet refusal the candidate declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetRefusal {
    #[default]
    None,
    RefusesCat,
    RefusesDog,
    RefusesBoth,
}

impl PetRefusal {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "refuses_cat" | "refuses_cats" => Self::RefusesCat,
            "refuses_dog" | "refuses_dogs" => Self::RefusesDog,
            "refuses_both_pets" | "refuses_both" | "refuses_pets" => Self::RefusesBoth,
            _ => Self::None,
        }
    }
}

/// Pets the candidate says they can look after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetHandling {
    #[default]
    Unspecified,
    Cats,
    Dogs,
    Both,
}

impl PetHandling {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "cats" | "cat" => Self::Cats,
            "dogs" | "dog" => Self::Dogs,
            "both" => Self::Both,
            _ => Self::Unspecified,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelFlexibility {
    #[default]
    Unspecified,
    Travel,
    Relocate,
    TravelAndRelocate,
}

impl TravelFlexibility {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "travel" | "travel_only" => Self::Travel,
            "relocate" | "relocate_only" => Self::Relocate,
            "travel_and_relocate" => Self::TravelAndRelocate,
            _ => Self::Unspecified,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    #[default]
    Unspecified,
    NonSmoker,
    Smoker,
}

impl SmokingStatus {
    pub fn from_token(value: &str) -> Self {
        match normalize_token(value).as_str() {
            "non_smoker" | "nonsmoker" => Self::NonSmoker,
            "smoker" | "smokes" => Self::Smoker,
            _ => Self::Unspecified,
        }
    }
}

/// Client preferences, one typed field per scoring dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_id: ClientId,
    pub household: HouseholdNeed,
    pub special_cases: CareNeed,
    pub pets: PetNeed,
    pub dayoff: DayOffRequest,
    pub living: TokenSet,
    pub nationality: NationalityPreference,
    pub cuisine: TokenSet,
}

impl ClientProfile {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: ClientId(client_id.into()),
            ..Self::default()
        }
    }
}

/// Candidate capabilities and refusals mirroring the client dimensions, plus bonus traits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate_id: CandidateId,
    pub household_refusal: HouseholdRefusal,
    pub kids_experience: KidsExperience,
    pub caregiving: CareProfile,
    pub pet_refusal: PetRefusal,
    pub pet_handling: PetHandling,
    pub refuses_fixed_sunday: bool,
    pub living_refusals: TokenSet,
    pub travel: TravelFlexibility,
    pub nationality: Option<String>,
    pub cuisines: TokenSet,
    pub years_of_experience: u32,
    pub languages: TokenSet,
    pub language_count: u32,
    pub personality: TokenSet,
    pub smoking: SmokingStatus,
    pub education: Option<String>,
}

impl CandidateProfile {
    pub fn new(candidate_id: impl Into<String>) -> Self {
        Self {
            candidate_id: CandidateId(candidate_id.into()),
            ..Self::default()
        }
    }

    /// Languages spoken, taking the larger of the explicit list and the declared count.
    pub fn spoken_languages(&self) -> u32 {
        (self.languages.len() as u32).max(self.language_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tokens_degrade_to_unspecified() {
        assert_eq!(HouseholdNeed::from_token("twins"), HouseholdNeed::Unspecified);
        assert_eq!(CareNeed::from_token(""), CareNeed::Unspecified);
        assert_eq!(PetNeed::from_token("parrot"), PetNeed::NoPets);
        assert_eq!(KidsExperience::from_token("???"), KidsExperience::Unspecified);
        assert_eq!(SmokingStatus::from_token("sometimes"), SmokingStatus::Unspecified);
    }

    #[test]
    fn nationality_preference_recognizes_any_and_sets() {
        assert_eq!(
            NationalityPreference::from_token("Any"),
            NationalityPreference::Any
        );
        assert_eq!(
            NationalityPreference::from_token("unspecified"),
            NationalityPreference::Unspecified
        );
        match NationalityPreference::from_token("Filipina maid+Ethiopian") {
            NationalityPreference::OneOf(set) => {
                assert!(set.contains("filipina"));
                assert!(set.contains("ethiopian"));
            }
            other => panic!("expected token set, got {other:?}"),
        }
    }

    #[test]
    fn spoken_languages_prefers_larger_signal() {
        let mut candidate = CandidateProfile::new("m-1");
        candidate.language_count = 3;
        candidate.languages = TokenSet::parse("english+arabic");
        assert_eq!(candidate.spoken_languages(), 3);
    }
}
