use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Applicant, House};

/// Applicant attributes as submitted by the caller
///
/// The priority score is not accepted on the wire; it is derived when the
/// record is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicantInput {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub age: u32,
    #[serde(alias = "family_size", rename = "familySize")]
    pub family_size: u32,
    #[validate(range(min = 0.0))]
    pub income: f64,
}

impl From<ApplicantInput> for Applicant {
    fn from(input: ApplicantInput) -> Self {
        Applicant::new(
            &input.id,
            &input.name,
            input.age,
            input.family_size,
            input.income,
        )
    }
}

/// House attributes as submitted by the caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HouseInput {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub bedrooms: u32,
    #[validate(range(min = 0.0))]
    pub size: f64,
    #[serde(alias = "house_type", rename = "type")]
    pub house_type: String,
}

impl From<HouseInput> for House {
    fn from(input: HouseInput) -> Self {
        House::new(
            &input.id,
            &input.address,
            input.bedrooms,
            input.size,
            &input.house_type,
        )
    }
}

/// Request to run one complete allocation over the supplied collections
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RunAllocationRequest {
    #[validate(length(min = 1), nested)]
    pub applicants: Vec<ApplicantInput>,
    #[validate(nested)]
    pub houses: Vec<HouseInput>,
}

/// Request to add an undirected edge to the location graph
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddEdgeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "house_id1", rename = "houseId1")]
    pub house_id1: String,
    #[validate(length(min = 1))]
    #[serde(alias = "house_id2", rename = "houseId2")]
    pub house_id2: String,
    #[validate(range(min = 0.0))]
    pub distance: f64,
}

/// Query parameters for a bounded proximity search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyQuery {
    #[validate(length(min = 1))]
    pub start: String,
    #[validate(range(min = 0.0))]
    #[serde(alias = "max_distance", rename = "maxDistance")]
    pub max_distance: f64,
}
