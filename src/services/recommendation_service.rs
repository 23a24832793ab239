use crate::models::place::Place;
use crate::models::recommendation::{
    PreferenceSummary, RecommendationRecord, RecommendationRequest, RecommendationResponse,
    RecommendedPlace,
};
use crate::services::match_scoring::{MatchScorer, PlaceMatch};
use chrono::Utc;
use log::{debug, info};

/// Result cap for single trip type requests
pub const SINGLE_TYPE_RESULT_CAP: usize = 30;
/// Result cap when several trip types are requested
pub const MULTI_TYPE_RESULT_CAP: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("At least one trip type must be selected")]
    NoTripTypes,
}

/// Converts the request duration bucket to a representative day count.
/// Unknown buckets fall back to a mid-range trip.
pub fn duration_days(bucket: &str) -> u32 {
    match bucket {
        "1-3" => 2,
        "4-7" => 5,
        "8-14" => 11,
        "15+" => 20,
        _ => 5,
    }
}

fn recommended_duration(duration_days: u32) -> &'static str {
    if duration_days <= 3 {
        "1-2 days recommended"
    } else if duration_days <= 7 {
        "2-4 days recommended"
    } else {
        "3-7 days recommended"
    }
}

/// Scores the whole place corpus against the request and returns the ranked
/// recommendation list.
///
/// The corpus is an in-memory snapshot fetched by the caller; nothing is
/// cached here across requests. Places scoring zero or below are dropped,
/// and ties keep their corpus order.
pub fn build_recommendations(
    scorer: &MatchScorer,
    places: &[Place],
    request: &RecommendationRequest,
) -> Result<RecommendationResponse, RecommendationError> {
    let labels = request.labels();
    if labels.is_empty() {
        return Err(RecommendationError::NoTripTypes);
    }

    let trip_types = scorer.resolve(&labels);
    let days = duration_days(&request.trip_duration);
    let travel_month = request.travel_month.as_deref().filter(|m| !m.is_empty());

    let mut scored: Vec<(&Place, PlaceMatch)> = Vec::new();
    for place in places {
        let result = scorer.score_place(place, &trip_types, days, travel_month);
        if result.score > 0.0 {
            scored.push((place, result));
        }
    }

    debug!(
        "{} of {} places scored above zero",
        scored.len(),
        places.len()
    );

    // Stable sort keeps corpus order for equal scores
    scored.sort_by(|a, b| {
        b.1.score
            .partial_cmp(&a.1.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let multiple_types = labels.len() > 1;
    let cap = if multiple_types {
        MULTI_TYPE_RESULT_CAP
    } else {
        SINGLE_TYPE_RESULT_CAP
    };
    scored.truncate(cap);

    let duration_label = recommended_duration(days);
    let recommendations: Vec<RecommendedPlace> = scored
        .into_iter()
        .map(|(place, result)| RecommendedPlace {
            id: place.id,
            name: place.name.clone(),
            place_type: place
                .place_type
                .clone()
                .unwrap_or_else(|| "Destination".to_string()),
            is_versatile: result.matched_labels.len() > 1,
            matched_types: result.matched_labels,
            description: place
                .description
                .clone()
                .unwrap_or_else(|| "Discover this amazing destination".to_string()),
            image: place.image_url.clone().unwrap_or_default(),
            rating: place.rating.unwrap_or(4.0),
            duration: duration_label.to_string(),
            location: place.location.clone().unwrap_or_default(),
            tags: place.tags.clone().unwrap_or_default(),
            activities: place.activities.clone().unwrap_or_default(),
            best_season: place.best_season.clone().unwrap_or_default(),
            difficulty_level: place
                .difficulty_level
                .clone()
                .unwrap_or_else(|| "Moderate".to_string()),
            latitude: place.latitude,
            longitude: place.longitude,
            match_score: result.score,
        })
        .collect();

    info!(
        "Returning {} recommendations for {} trip types",
        recommendations.len(),
        labels.len()
    );

    Ok(RecommendationResponse {
        total_matches: recommendations.len(),
        preferences: PreferenceSummary {
            name: request.name.clone(),
            age: request.age,
            travellers: request.travellers,
            trip_duration: request.trip_duration.clone(),
            travel_month: request.travel_month.clone(),
            trip_types: labels,
            multiple_types,
        },
        recommendations,
    })
}

/// Builds the audit record the storage layer persists after a run. Only the
/// ordered place ids are needed to reproduce the outcome.
pub fn audit_record(
    request: &RecommendationRequest,
    response: &RecommendationResponse,
) -> RecommendationRecord {
    RecommendationRecord {
        user_id: request
            .user_id
            .clone()
            .unwrap_or_else(|| "anonymous".to_string()),
        name: request.name.clone(),
        age: request.age,
        phone: request.phone.clone(),
        travellers: request.travellers,
        trip_duration: request.trip_duration.clone(),
        trip_types: response.preferences.trip_types.clone(),
        travel_month: request.travel_month.clone(),
        recommended_place_ids: response.recommendations.iter().map(|p| p.id).collect(),
        created_at: Utc::now(),
    }
}
