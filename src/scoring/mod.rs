use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_SCORE: f64 = 0.1;
pub const MAX_SCORE: f64 = 10.0;

const BASE_SCORE: f64 = 5.0;
const INDUSTRY_BONUS: f64 = 2.0;
const SIZE_BONUS: f64 = 2.0;
const PROXIMITY_BONUS: f64 = 1.0;
const JITTER_STD_DEV: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityPreference {
    HighQuality,
    Standard,
}

impl fmt::Display for QualityPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityPreference::HighQuality => write!(f, "High Quality (Fewer leads)"),
            QualityPreference::Standard => write!(f, "Standard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [CompanySize; 5] = [
        CompanySize::Startup,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Enterprise,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Startup => "Startup (1-10)",
            CompanySize::Small => "Small (11-50)",
            CompanySize::Medium => "Medium (51-200)",
            CompanySize::Large => "Large (201-1000)",
            CompanySize::Enterprise => "Enterprise (1000+)",
        }
    }

    /// The two largest buckets earn the size bonus.
    pub fn is_large(&self) -> bool {
        matches!(self, CompanySize::Large | CompanySize::Enterprise)
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Caller-supplied targeting used for ranking. Not persisted.
#[derive(Debug, Clone)]
pub struct ScoringPreferences {
    pub industry: String,
    pub quality: QualityPreference,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LeadAttributes {
    pub industry: String,
    pub company_size: CompanySize,
    pub location: String,
}

/// Deterministic part of the score: base plus categorical bonuses, before
/// jitter and clamping. Split out so tests can pin it down exactly.
pub fn base_component(attrs: &LeadAttributes, prefs: &ScoringPreferences) -> f64 {
    let mut score = BASE_SCORE;

    if attrs.industry == prefs.industry {
        score += INDUSTRY_BONUS;
    }

    if prefs.quality == QualityPreference::HighQuality && attrs.company_size.is_large() {
        score += SIZE_BONUS;
    }

    if let Some(target) = &prefs.location {
        if !target.is_empty()
            && attrs
                .location
                .to_lowercase()
                .contains(&target.to_lowercase())
        {
            score += PROXIMITY_BONUS;
        }
    }

    score
}

/// Final score: deterministic component plus a small normal perturbation to
/// break ties, clamped to [MIN_SCORE, MAX_SCORE] and rounded to one decimal.
pub fn score_lead(attrs: &LeadAttributes, prefs: &ScoringPreferences) -> f64 {
    let jitter = Normal::new(0.0, JITTER_STD_DEV)
        .expect("std dev is a positive constant")
        .sample(&mut rand::rng());

    let clamped = (base_component(attrs, prefs) + jitter).clamp(MIN_SCORE, MAX_SCORE);
    (clamped * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(industry: &str, size: CompanySize, location: &str) -> LeadAttributes {
        LeadAttributes {
            industry: industry.to_string(),
            company_size: size,
            location: location.to_string(),
        }
    }

    fn prefs(
        industry: &str,
        quality: QualityPreference,
        location: Option<&str>,
    ) -> ScoringPreferences {
        ScoringPreferences {
            industry: industry.to_string(),
            quality,
            location: location.map(str::to_string),
        }
    }

    #[test]
    fn base_is_five_with_no_bonuses() {
        let score = base_component(
            &attrs("Retail", CompanySize::Small, "Denver, CO"),
            &prefs("Technology", QualityPreference::Standard, None),
        );
        assert_eq!(score, 5.0);
    }

    #[test]
    fn industry_match_adds_two() {
        let score = base_component(
            &attrs("Technology", CompanySize::Small, "Denver, CO"),
            &prefs("Technology", QualityPreference::Standard, None),
        );
        assert_eq!(score, 7.0);
    }

    #[test]
    fn size_bonus_requires_high_quality_preference_and_a_large_bucket() {
        let large = attrs("Retail", CompanySize::Enterprise, "Denver, CO");
        let small = attrs("Retail", CompanySize::Startup, "Denver, CO");

        let high = prefs("Technology", QualityPreference::HighQuality, None);
        let standard = prefs("Technology", QualityPreference::Standard, None);

        assert_eq!(base_component(&large, &high), 7.0);
        assert_eq!(base_component(&small, &high), 5.0);
        assert_eq!(base_component(&large, &standard), 5.0);
    }

    #[test]
    fn location_substring_match_is_case_insensitive() {
        let score = base_component(
            &attrs("Retail", CompanySize::Small, "Austin, TX"),
            &prefs("Technology", QualityPreference::Standard, Some("austin")),
        );
        assert_eq!(score, 6.0);
    }

    #[test]
    fn empty_location_preference_earns_nothing() {
        let score = base_component(
            &attrs("Retail", CompanySize::Small, "Austin, TX"),
            &prefs("Technology", QualityPreference::Standard, Some("")),
        );
        assert_eq!(score, 5.0);
    }

    #[test]
    fn enabling_high_quality_never_decreases_the_deterministic_score() {
        for size in CompanySize::ALL {
            let a = attrs("Technology", size, "Austin, TX");
            let with = base_component(&a, &prefs("Technology", QualityPreference::HighQuality, None));
            let without =
                base_component(&a, &prefs("Technology", QualityPreference::Standard, None));
            assert!(with >= without);
        }
    }

    #[test]
    fn final_score_stays_in_bounds_and_rounds_to_one_decimal() {
        let a = attrs("Technology", CompanySize::Enterprise, "Austin, TX");
        let p = prefs(
            "Technology",
            QualityPreference::HighQuality,
            Some("Austin"),
        );
        for _ in 0..200 {
            let score = score_lead(&a, &p);
            assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "score {}", score);
            let tenths = score * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9, "score {}", score);
        }
    }
}
