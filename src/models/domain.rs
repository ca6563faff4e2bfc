use serde::{Deserialize, Serialize};

use crate::core::scoring::priority_score;

/// Housing applicant with a derived, immutable priority score
///
/// The score is computed once here from the applicant's attributes and is
/// the sole ordering key from then on; nothing recomputes it later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(rename = "familySize")]
    pub family_size: u32,
    pub income: f64,
    #[serde(rename = "priorityScore")]
    pub priority_score: u32,
}

impl Applicant {
    pub fn new(id: &str, name: &str, age: u32, family_size: u32, income: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            age,
            family_size,
            income,
            priority_score: priority_score(age, family_size, income),
        }
    }
}

/// An available dwelling; immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    pub id: String,
    pub address: String,
    pub bedrooms: u32,
    pub size: f64,
    #[serde(rename = "type")]
    pub house_type: String,
}

impl House {
    pub fn new(id: &str, address: &str, bedrooms: u32, size: f64, house_type: &str) -> Self {
        Self {
            id: id.to_string(),
            address: address.to_string(),
            bedrooms,
            size,
            house_type: house_type.to_string(),
        }
    }
}

/// One applicant-house pairing produced by the allocator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(rename = "applicantId")]
    pub applicant_id: String,
    #[serde(rename = "applicantName")]
    pub applicant_name: String,
    #[serde(rename = "houseId")]
    pub house_id: String,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}
