use std::collections::HashMap;

/// Keyword sets matched against a place for one user-facing trip type.
#[derive(Debug, Clone, Default)]
pub struct TripTypeMapping {
    /// Matched against the place tags and description text
    pub tags: Vec<String>,
    /// Matched against the place's primary type field
    pub categories: Vec<String>,
    /// Matched against the place activities text
    pub activities: Vec<String>,
}

impl TripTypeMapping {
    pub fn new(tags: &[&str], categories: &[&str], activities: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|s| s.to_string()).collect(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            activities: activities.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.categories.is_empty() && self.activities.is_empty()
    }
}

/// Static table translating the frontend trip type labels into keyword sets
/// drawn from the destination dataset vocabulary.
#[derive(Debug, Clone)]
pub struct TripTypeCatalog {
    mappings: HashMap<String, TripTypeMapping>,
}

impl Default for TripTypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TripTypeCatalog {
    /// The five trip types offered by the trip planner form.
    pub fn standard() -> Self {
        let mut mappings = HashMap::new();

        mappings.insert(
            "⛰️ Natural Attractions".to_string(),
            TripTypeMapping::new(
                &[
                    "mountain",
                    "nature",
                    "viewpoint",
                    "hill town",
                    "waterfall",
                    "lake",
                    "valley",
                    "scenic",
                    "wildlife",
                    "birdwatching",
                    "tea garden",
                    "picnic spot",
                    "hidden valley",
                    "temple",
                    "pilgrimage",
                    "hill",
                    "trekking start",
                    "river",
                    "conservation",
                    "hot springs",
                    "rural",
                    "offbeat",
                    "pond",
                    "pokhari",
                    "landscape",
                    "sunrise",
                    "sunset",
                    "forest",
                    "garden",
                    "park",
                    "natural",
                    "stream",
                ],
                &["Natural Attractions"],
                &[
                    "photography",
                    "sightseeing",
                    "nature walks",
                    "picnic",
                    "wildlife safari",
                    "birdwatching",
                    "short hike",
                    "walks",
                    "market tour",
                    "local experience",
                    "viewing",
                    "tour",
                    "boating",
                    "camping",
                ],
            ),
        );

        mappings.insert(
            "🧗 Trekking & Adventures".to_string(),
            TripTypeMapping::new(
                &[
                    "trekking",
                    "adventure",
                    "mountain",
                    "climbing",
                    "trek",
                    "expedition",
                    "remote trekking",
                    "wilderness",
                    "biodiversity",
                    "scenic",
                    "high altitude",
                    "base camp",
                    "hiking",
                    "trail",
                    "peak",
                    "summit",
                    "alpine",
                ],
                &["Trekking & Adventure"],
                &[
                    "trek to base camp",
                    "mountain climbing",
                    "trekking",
                    "camping",
                    "hiking",
                    "climbing",
                    "expedition",
                    "photography",
                    "adventure",
                ],
            ),
        );

        mappings.insert(
            "🛕 Cultural & Religious".to_string(),
            TripTypeMapping::new(
                &[
                    "temple",
                    "pilgrimage",
                    "cultural village",
                    "religious",
                    "heritage",
                    "unesco",
                    "monastery",
                    "spiritual",
                    "historical",
                    "cultural",
                    "limbu",
                    "city",
                    "local",
                    "offbeat",
                    "shrine",
                    "stupa",
                    "gumba",
                    "gompa",
                    "hindu",
                    "buddhist",
                    "sacred",
                    "holy",
                    "dham",
                    "mandir",
                ],
                &["Cultural & Religious Sites"],
                &[
                    "worship",
                    "cultural tour",
                    "cultural tours",
                    "temple visit",
                    "religious fair",
                    "holy bathing",
                    "photography",
                    "sightseeing",
                    "pilgrimage",
                    "meditation",
                    "prayer",
                ],
            ),
        );

        mappings.insert(
            "🏡 Village & Rural".to_string(),
            TripTypeMapping::new(
                &[
                    "village",
                    "rural",
                    "cultural village",
                    "traditional",
                    "local",
                    "ethnic",
                    "homestay",
                    "limbu",
                    "sherpa",
                    "tharu",
                    "offbeat",
                    "cultural",
                    "community",
                    "indigenous",
                    "hamlet",
                    "settlement",
                    "countryside",
                    "agriculture",
                ],
                &["Village & Rural Tourism", "Cultural & Religious Sites"],
                &[
                    "cultural tours",
                    "local experience",
                    "market tour",
                    "photography",
                    "village tour",
                    "homestay",
                    "cultural tour",
                    "community visit",
                    "traditional",
                    "farming",
                ],
            ),
        );

        mappings.insert(
            "🏙️ Urban & Modern".to_string(),
            TripTypeMapping::new(
                &[
                    "urban",
                    "city",
                    "modern",
                    "shopping",
                    "bazaar",
                    "market",
                    "town",
                    "cultural",
                    "hub",
                    "center",
                    "municipality",
                    "metro",
                    "commercial",
                ],
                &["Urban & Modern Attractions"],
                &[
                    "market tour",
                    "shopping",
                    "sightseeing",
                    "local experience",
                    "photography",
                    "dining",
                    "entertainment",
                    "nightlife",
                ],
            ),
        );

        Self { mappings }
    }

    /// Builds a catalog from caller-supplied mappings, used by tests and
    /// tuning experiments.
    pub fn from_mappings(mappings: HashMap<String, TripTypeMapping>) -> Self {
        Self { mappings }
    }

    /// Looks up the mapping for a trip type label. Unknown labels resolve to
    /// an empty mapping rather than an error, so new frontend trip types
    /// never break scoring.
    pub fn mapping(&self, label: &str) -> TripTypeMapping {
        self.mappings.get(label).cloned().unwrap_or_default()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONTEND_LABELS: [&str; 5] = [
        "⛰️ Natural Attractions",
        "🧗 Trekking & Adventures",
        "🛕 Cultural & Religious",
        "🏡 Village & Rural",
        "🏙️ Urban & Modern",
    ];

    #[test]
    fn every_frontend_label_has_a_full_mapping() {
        let catalog = TripTypeCatalog::standard();
        for label in FRONTEND_LABELS {
            let mapping = catalog.mapping(label);
            assert!(!mapping.tags.is_empty(), "no tags for {label}");
            assert!(!mapping.categories.is_empty(), "no categories for {label}");
            assert!(!mapping.activities.is_empty(), "no activities for {label}");
        }
        assert_eq!(catalog.labels().count(), FRONTEND_LABELS.len());
    }

    #[test]
    fn unknown_label_resolves_to_empty_mapping() {
        let catalog = TripTypeCatalog::standard();
        let mapping = catalog.mapping("🚀 Space Tourism");
        assert!(mapping.is_empty());
    }

    #[test]
    fn mapping_keywords_are_lowercase() {
        // Tag and activity keywords compare against lowercased place text,
        // so the tables themselves must stay lowercase.
        let catalog = TripTypeCatalog::standard();
        for label in FRONTEND_LABELS {
            let mapping = catalog.mapping(label);
            for keyword in mapping.tags.iter().chain(mapping.activities.iter()) {
                assert_eq!(keyword, &keyword.to_lowercase(), "in {label}");
            }
        }
    }
}
