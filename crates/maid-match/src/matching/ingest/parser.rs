use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

use super::super::domain::{
    CandidateProfile, CareNeed, CareProfile, ClientProfile, DayOffRequest, HouseholdNeed,
    HouseholdRefusal, KidsExperience, NationalityPreference, PetHandling, PetNeed, PetRefusal,
    SmokingStatus, TravelFlexibility,
};
use super::super::normalizer::{is_unspecified, normalize_token, TokenSet};

const REFUSES_FIXED_SUNDAY: &str = "refuses_fixed_sunday";
const LANGUAGE_FLAG_PREFIX: &str = "speaks_";

pub(crate) fn reader_for<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClientRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    client_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    clientmts_household_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    clientmts_special_cases: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    clientmts_pet_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    clientmts_dayoff_policy: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    clientmts_living_arrangement: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    clientmts_nationality_preference: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    clientmts_cuisine_preference: Option<String>,
}

impl ClientRow {
    pub(crate) fn into_profile(self, row: usize) -> ClientProfile {
        let client_id = self
            .client_name
            .unwrap_or_else(|| format!("client-{row}"));

        ClientProfile {
            household: token(&self.clientmts_household_type, HouseholdNeed::from_token),
            special_cases: token(&self.clientmts_special_cases, CareNeed::from_token),
            pets: token(&self.clientmts_pet_type, PetNeed::from_token),
            dayoff: token(&self.clientmts_dayoff_policy, DayOffRequest::from_token),
            living: token(&self.clientmts_living_arrangement, TokenSet::parse),
            nationality: token(
                &self.clientmts_nationality_preference,
                NationalityPreference::from_token,
            ),
            cuisine: token(&self.clientmts_cuisine_preference, TokenSet::parse),
            ..ClientProfile::new(client_id)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maid_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidmts_household_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidpref_kids_experience: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidpref_caregiving_profile: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidmts_pet_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidpref_pet_handling: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidmts_dayoff_policy: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidmts_living_arrangement: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidpref_travel: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maid_nationality: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cooking_group: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    num_languages: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    languages: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    years_of_experience: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidpref_personality: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidpref_smoking: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    maidpref_education: Option<String>,
}

impl CandidateRow {
    /// `spoken` holds languages flagged through `speaks_<language>` columns.
    pub(crate) fn into_profile(self, row: usize, spoken: Vec<String>) -> CandidateProfile {
        let candidate_id = self.maid_id.clone().unwrap_or_else(|| format!("maid-{row}"));
        let refuses_fixed_sunday = self
            .maidmts_dayoff_policy
            .as_deref()
            .map(|value| normalize_token(value) == REFUSES_FIXED_SUNDAY)
            .unwrap_or(false);
        let listed = token(&self.languages, TokenSet::parse);
        let languages = TokenSet::from_tokens(listed.iter().map(str::to_string).chain(spoken));

        CandidateProfile {
            household_refusal: token(&self.maidmts_household_type, HouseholdRefusal::from_token),
            kids_experience: token(&self.maidpref_kids_experience, KidsExperience::from_token),
            caregiving: token(&self.maidpref_caregiving_profile, CareProfile::from_token),
            pet_refusal: token(&self.maidmts_pet_type, PetRefusal::from_token),
            pet_handling: token(&self.maidpref_pet_handling, PetHandling::from_token),
            refuses_fixed_sunday,
            living_refusals: token(&self.maidmts_living_arrangement, TokenSet::parse),
            travel: token(&self.maidpref_travel, TravelFlexibility::from_token),
            nationality: specified(&self.maid_nationality),
            cuisines: token(&self.cooking_group, TokenSet::parse),
            years_of_experience: count(
                &candidate_id,
                "years_of_experience",
                &self.years_of_experience,
            ),
            languages,
            language_count: count(&candidate_id, "num_languages", &self.num_languages),
            personality: token(&self.maidpref_personality, TokenSet::parse),
            smoking: token(&self.maidpref_smoking, SmokingStatus::from_token),
            education: specified(&self.maidpref_education),
            ..CandidateProfile::new(candidate_id.clone())
        }
    }
}

/// Languages whose `speaks_<language>` column holds a truthy flag.
pub(crate) fn language_flags(
    headers: &csv::StringRecord,
    record: &csv::StringRecord,
) -> Vec<String> {
    headers
        .iter()
        .zip(record.iter())
        .filter_map(|(header, value)| {
            let header = header.to_ascii_lowercase();
            let language = header.strip_prefix(LANGUAGE_FLAG_PREFIX)?;
            let flagged = matches!(
                normalize_token(value).as_str(),
                "1" | "1.0" | "true" | "yes" | "y"
            );
            flagged.then(|| language.to_string())
        })
        .collect()
}

fn token<T: Default>(value: &Option<String>, parse: impl Fn(&str) -> T) -> T {
    value.as_deref().map(parse).unwrap_or_default()
}

fn specified(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(normalize_token)
        .filter(|token| !is_unspecified(token))
}

/// Whole non-negative count; fractional values are floored and anything else degrades to 0.
fn count(candidate: &str, field: &str, value: &Option<String>) -> u32 {
    let Some(raw) = value.as_deref() else {
        return 0;
    };
    if is_unspecified(&normalize_token(raw)) {
        return 0;
    }

    match raw.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => {
            parsed.floor().min(u32::MAX as f64) as u32
        }
        _ => {
            warn!(candidate, field, value = raw, "malformed count, defaulting to 0");
            0
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
pub(crate) fn count_for_tests(value: &str) -> u32 {
    count("test", "field", &Some(value.to_string()))
}
