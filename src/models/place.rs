use serde::{Deserialize, Serialize};

/// A destination record as loaded from the place store.
///
/// Every descriptive field is free text maintained by content editors, so all
/// of them may be absent. The scoring engine treats absence as "no
/// contribution", never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    /// Comma- or semicolon-separated keywords
    pub tags: Option<String>,
    /// Comma- or semicolon-separated activity names
    pub activities: Option<String>,
    pub description: Option<String>,
    /// Free-text season window, e.g. "Sep-Nov" or "all year round"
    pub best_season: Option<String>,
    pub accessibility: Option<String>,
    /// Loosely one of easy/moderate/hard
    pub difficulty_level: Option<String>,
    pub rating: Option<f32>,
    pub province: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
}
