use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trip preferences submitted by the visitor.
///
/// Field names follow the frontend JSON body. Older clients send a single
/// `tripType` string instead of the `tripTypes` array; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub travellers: Option<u32>,
    pub trip_type: Option<String>,
    #[serde(default)]
    pub trip_types: Vec<String>,
    #[serde(default)]
    pub trip_duration: String,
    pub travel_month: Option<String>,
}

impl RecommendationRequest {
    /// Normalizes the single/multi trip type fields into one label list.
    pub fn labels(&self) -> Vec<String> {
        if !self.trip_types.is_empty() {
            self.trip_types.clone()
        } else {
            self.trip_type.clone().into_iter().collect()
        }
    }
}

/// One ranked entry in the recommendation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedPlace {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: String,
    /// Requested trip types this place matched
    pub matched_types: Vec<String>,
    pub description: String,
    pub image: String,
    pub rating: f32,
    /// Suggested visit length, derived from the requested trip duration
    pub duration: String,
    pub location: String,
    pub tags: String,
    pub activities: String,
    pub best_season: String,
    pub difficulty_level: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub match_score: f32,
    /// True when the place matched more than one requested trip type
    pub is_versatile: bool,
}

/// Ranked recommendation list, ready for JSON serialization.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendedPlace>,
    pub total_matches: usize,
    pub preferences: PreferenceSummary,
}

/// Echo of the visitor's preferences, shown alongside the results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSummary {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub travellers: Option<u32>,
    pub trip_duration: String,
    pub travel_month: Option<String>,
    pub trip_types: Vec<String>,
    #[serde(rename = "multiple_types")]
    pub multiple_types: bool,
}

/// Snapshot of a recommendation run, handed to the storage layer for the
/// audit trail. Only the ordered place ids matter for reproducibility; the
/// rest echoes the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub user_id: String,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub travellers: Option<u32>,
    pub trip_duration: String,
    pub trip_types: Vec<String>,
    pub travel_month: Option<String>,
    pub recommended_place_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_trip_types_array() {
        let request: RecommendationRequest = serde_json::from_str(
            r#"{
                "userId": "u-42",
                "tripTypes": ["⛰️ Natural Attractions", "🏡 Village & Rural"],
                "tripDuration": "4-7",
                "travelMonth": "October"
            }"#,
        )
        .unwrap();

        assert_eq!(request.user_id.as_deref(), Some("u-42"));
        assert_eq!(request.labels().len(), 2);
        assert_eq!(request.trip_duration, "4-7");
        assert_eq!(request.travel_month.as_deref(), Some("October"));
    }

    #[test]
    fn request_falls_back_to_single_trip_type() {
        let request: RecommendationRequest = serde_json::from_str(
            r#"{"tripType": "🏙️ Urban & Modern", "tripDuration": "1-3"}"#,
        )
        .unwrap();

        assert_eq!(request.labels(), vec!["🏙️ Urban & Modern".to_string()]);
    }

    #[test]
    fn request_array_wins_over_single_field() {
        let request: RecommendationRequest = serde_json::from_str(
            r#"{"tripType": "🏙️ Urban & Modern", "tripTypes": ["🏡 Village & Rural"], "tripDuration": "1-3"}"#,
        )
        .unwrap();

        assert_eq!(request.labels(), vec!["🏡 Village & Rural".to_string()]);
    }

    #[test]
    fn missing_trip_types_yield_empty_labels() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"tripDuration": "4-7"}"#).unwrap();

        assert!(request.labels().is_empty());
    }
}
