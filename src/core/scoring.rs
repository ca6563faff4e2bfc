use crate::models::{Applicant, House};

/// Monthly income that marks the top of the subsidy scale.
const INCOME_REFERENCE: f64 = 20000.0;

/// Minimum floor area (square feet) considered adequate per family member.
const MIN_SIZE_PER_PERSON: f64 = 150.0;

/// Calculate an applicant's priority score (0-100)
///
/// Scoring formula:
/// score = (
///     age_band        +   # >=60: 30, >=50: 20, >=40: 10
///     family_band     +   # >=6: 30, >=4: 20, >=2: 10
///     income_band         # ratio <=0.5: 40, <=0.75: 30, <=1.0: 20, else 10
/// ), capped at 100
///
/// Each band is additive and independent; the first matching bracket wins
/// (brackets are not cumulative). The income band always contributes at
/// least 10, even for very high incomes. The result is computed exactly
/// once when an [`Applicant`] is constructed and never recomputed.
pub fn priority_score(age: u32, family_size: u32, income: f64) -> u32 {
    let age_band = calculate_age_band(age);
    let family_band = calculate_family_band(family_size);
    let income_band = calculate_income_band(income);

    (age_band + family_band + income_band).min(100)
}

/// Age bracket contribution (0-30)
#[inline]
fn calculate_age_band(age: u32) -> u32 {
    if age >= 60 {
        30
    } else if age >= 50 {
        20
    } else if age >= 40 {
        10
    } else {
        0
    }
}

/// Family size bracket contribution (0-30)
#[inline]
fn calculate_family_band(family_size: u32) -> u32 {
    if family_size >= 6 {
        30
    } else if family_size >= 4 {
        20
    } else if family_size >= 2 {
        10
    } else {
        0
    }
}

/// Income bracket contribution (10-40)
///
/// Lower income relative to the reference scale means greater need and a
/// higher contribution. Never zero: every applicant gets at least 10.
#[inline]
fn calculate_income_band(income: f64) -> u32 {
    let ratio = income / INCOME_REFERENCE;
    if ratio <= 0.5 {
        40
    } else if ratio <= 0.75 {
        30
    } else if ratio <= 1.0 {
        20
    } else {
        10
    }
}

/// Calculate a compatibility score (0-100) between an applicant and a house
///
/// Scoring formula:
/// score = 50 (base)
///       + bedroom_score     # max(0, 30 - 10 * |bedrooms - ideal|)
///       + size_score        # min(20, surplus / 50) when size is adequate
/// capped at 100.
///
/// The ideal bedroom count is `(family_size + 1) / 2` using integer
/// division. A house smaller than `family_size * 150` square feet gets no
/// size bonus but also no penalty. Total for all finite inputs.
pub fn match_score(applicant: &Applicant, house: &House) -> f64 {
    let mut score = 50.0;

    // Bedroom compatibility
    let ideal_bedrooms = (applicant.family_size + 1) / 2;
    let bedroom_diff = house.bedrooms.abs_diff(ideal_bedrooms);
    let bedroom_score = (30.0 - (bedroom_diff as f64 * 10.0)).max(0.0);
    score += bedroom_score;

    // Size adequacy
    let required_size = applicant.family_size as f64 * MIN_SIZE_PER_PERSON;
    if house.size >= required_size {
        let size_score = ((house.size - required_size) / 50.0).min(20.0);
        score += size_score;
    }

    score.min(100.0)
}
