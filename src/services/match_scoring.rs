use crate::models::place::Place;
use crate::services::seasons::SeasonCalendar;
use crate::services::trip_types::{TripTypeCatalog, TripTypeMapping};
use log::info;
use serde::{Deserialize, Serialize};

/// Best-season text at or above this many characters is treated as a vague,
/// multi-season description and is never penalized. Pinned value; changing it
/// silently reshuffles rankings.
pub const SPECIFIC_SEASON_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Bonus when the place's best season covers the requested travel month
    pub season_match_bonus: f32,
    /// Penalty when a specific best season contradicts the requested month
    pub season_mismatch_penalty: f32,
    /// Bonus for a trip type keyword found in tags or description
    pub tag_weight: f32,
    /// Bonus for a trip type category found in the place type
    pub category_weight: f32,
    /// Bonus for a trip type keyword found in activities
    pub activity_weight: f32,
    /// Per-matched-type bonus for places matching several trip types
    pub versatility_bonus: f32,
    /// Multiplier applied to the place rating
    pub rating_multiplier: f32,
    /// Flat bonus for places with province data, for regional variety
    pub province_bonus: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            season_match_bonus: 20.0,
            season_mismatch_penalty: 10.0,
            tag_weight: 10.0,
            category_weight: 12.0,
            activity_weight: 8.0,
            versatility_bonus: 5.0,
            rating_multiplier: 2.0,
            province_bonus: 1.0,
        }
    }
}

impl MatchWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            season_match_bonus: std::env::var("MATCH_SEASON_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.season_match_bonus),
            season_mismatch_penalty: std::env::var("MATCH_SEASON_PENALTY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.season_mismatch_penalty),
            tag_weight: std::env::var("MATCH_TAG_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.tag_weight),
            category_weight: std::env::var("MATCH_CATEGORY_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.category_weight),
            activity_weight: std::env::var("MATCH_ACTIVITY_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.activity_weight),
            versatility_bonus: std::env::var("MATCH_VERSATILITY_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.versatility_bonus),
            rating_multiplier: std::env::var("MATCH_RATING_MULTIPLIER")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.rating_multiplier),
            province_bonus: std::env::var("MATCH_PROVINCE_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.province_bonus),
        }
    }
}

/// A requested trip type label together with its keyword mapping.
#[derive(Debug, Clone)]
pub struct ResolvedTripType {
    pub label: String,
    pub mapping: TripTypeMapping,
}

/// Outcome of scoring one place against the request.
#[derive(Debug, Clone)]
pub struct PlaceMatch {
    pub score: f32,
    pub matched_labels: Vec<String>,
}

/// Scores places against the visitor's trip preferences.
///
/// Pure and re-entrant: every call works on its own accumulator and only
/// reads the lookup tables captured at construction.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    pub weights: MatchWeights,
    trip_types: TripTypeCatalog,
    seasons: SeasonCalendar,
}

impl MatchScorer {
    pub fn new() -> Self {
        let weights = MatchWeights::from_env();
        info!("MatchScorer initialized with weights: {:?}", weights);
        Self {
            weights,
            trip_types: TripTypeCatalog::standard(),
            seasons: SeasonCalendar::standard(),
        }
    }

    pub fn with_weights(weights: MatchWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    /// Substitute lookup tables, used by tests and tuning experiments.
    pub fn with_tables(
        weights: MatchWeights,
        trip_types: TripTypeCatalog,
        seasons: SeasonCalendar,
    ) -> Self {
        Self {
            weights,
            trip_types,
            seasons,
        }
    }

    /// Resolves requested labels against the trip type catalog. Unknown
    /// labels come back with an empty mapping and simply never match.
    pub fn resolve(&self, labels: &[String]) -> Vec<ResolvedTripType> {
        labels
            .iter()
            .map(|label| ResolvedTripType {
                label: label.clone(),
                mapping: self.trip_types.mapping(label),
            })
            .collect()
    }

    /// Scores one place against the resolved trip types, trip length in days
    /// and optional travel month. The score is additive and unbounded; it can
    /// go negative on a season mismatch.
    pub fn score_place(
        &self,
        place: &Place,
        trip_types: &[ResolvedTripType],
        duration_days: u32,
        travel_month: Option<&str>,
    ) -> PlaceMatch {
        let mut score = 0.0;

        // Handle both comma and semicolon separators in tags and activities
        let place_tags = lower_list(place.tags.as_deref());
        let place_type = lower(place.place_type.as_deref());
        let place_activities = lower_list(place.activities.as_deref());
        let place_description = lower(place.description.as_deref());
        let place_best_season = lower(place.best_season.as_deref());

        if let Some(month) = travel_month {
            score += self.score_season(&place_best_season, month);
        }

        let mut matched_labels = Vec::new();
        for trip_type in trip_types {
            if let Some(points) = self.score_trip_type(
                &trip_type.mapping,
                &place_tags,
                &place_type,
                &place_activities,
                &place_description,
            ) {
                score += points;
                matched_labels.push(trip_type.label.clone());
            }
        }

        // Versatile destinations cover several of the requested trip types
        if matched_labels.len() > 1 {
            score += matched_labels.len() as f32 * self.weights.versatility_bonus;
        }

        score += self.score_duration_fit(place, duration_days);

        if let Some(rating) = place.rating {
            score += rating * self.weights.rating_multiplier;
        }

        if place.province.as_deref().is_some_and(|p| !p.is_empty()) {
            score += self.weights.province_bonus;
        }

        PlaceMatch {
            score,
            matched_labels,
        }
    }

    fn score_season(&self, place_best_season: &str, month: &str) -> f32 {
        for keyword in self.seasons.month_keywords(month) {
            if place_best_season.contains(keyword) {
                return self.weights.season_match_bonus;
            }
        }

        // Penalize only season texts short enough to be a specific claim;
        // vague or multi-season descriptions are left alone.
        if !place_best_season.is_empty()
            && place_best_season.chars().count() < SPECIFIC_SEASON_MAX_CHARS
        {
            for keyword in self.seasons.opposite_keywords(month) {
                if place_best_season.contains(keyword) {
                    return -self.weights.season_mismatch_penalty;
                }
            }
        }

        0.0
    }

    /// First hit wins per trip type: tags, then category, then activities.
    fn score_trip_type(
        &self,
        mapping: &TripTypeMapping,
        place_tags: &str,
        place_type: &str,
        place_activities: &str,
        place_description: &str,
    ) -> Option<f32> {
        for tag in &mapping.tags {
            if place_tags.contains(tag.as_str()) || place_description.contains(tag.as_str()) {
                return Some(self.weights.tag_weight);
            }
        }

        for category in &mapping.categories {
            if place_type.contains(&category.to_lowercase()) {
                return Some(self.weights.category_weight);
            }
        }

        for activity in &mapping.activities {
            if place_activities.contains(activity.as_str()) {
                return Some(self.weights.activity_weight);
            }
        }

        None
    }

    fn score_duration_fit(&self, place: &Place, duration_days: u32) -> f32 {
        let difficulty = lower(place.difficulty_level.as_deref());
        let mut score = 0.0;

        if duration_days <= 3 {
            // Short trips favor easily reached places
            if lower(place.accessibility.as_deref()).contains("road accessible") {
                score += 5.0;
            }
            if difficulty == "easy" {
                score += 4.0;
            }
        } else if duration_days <= 7 {
            if difficulty == "moderate" || difficulty == "easy" {
                score += 3.0;
            }
        } else {
            // Long trips can absorb the harder itineraries
            if difficulty == "hard" || difficulty == "moderate" {
                score += 5.0;
            }
        }

        score
    }
}

fn lower(text: Option<&str>) -> String {
    text.unwrap_or("").to_lowercase()
}

fn lower_list(text: Option<&str>) -> String {
    lower(text).replace(';', ",")
}
