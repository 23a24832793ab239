use crate::models::place::Place;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Default number of similar places returned for a detail page.
pub const DEFAULT_SIMILAR_LIMIT: usize = 6;

/// Descriptions longer than this are truncated for the similar-place cards.
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum SimilarPlacesError {
    #[error("Place \"{0}\" not in similarity index")]
    PlaceNotIndexed(String),
}

/// One entry on a "similar places" card list.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarPlace {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub rating: f32,
    pub best_season: Option<String>,
    pub difficulty_level: Option<String>,
    pub image: Option<String>,
}

impl SimilarPlace {
    fn from_place(place: &Place) -> Self {
        Self {
            id: place.id,
            name: place.name.clone(),
            location: place.location.clone(),
            place_type: place.place_type.clone(),
            description: place.description.as_deref().map(preview),
            tags: place.tags.clone(),
            rating: place.rating.unwrap_or(4.0),
            best_season: place.best_season.clone(),
            difficulty_level: place.difficulty_level.clone(),
            image: place.image_url.clone(),
        }
    }
}

/// Precomputed content-similarity lookup over the place corpus.
///
/// The matrix is square with rows following the order of `row_names`; both
/// are produced offline and injected here as plain data. Lookups go through
/// trimmed, lowercased place names, which is how the offline pipeline keys
/// its rows.
#[derive(Debug, Clone, Default)]
pub struct SimilarityIndex {
    matrix: Vec<Vec<f32>>,
    name_to_row: HashMap<String, usize>,
}

impl SimilarityIndex {
    pub fn new(matrix: Vec<Vec<f32>>, row_names: &[String]) -> Self {
        let name_to_row = row_names
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.trim().is_empty())
            .map(|(idx, name)| (name.trim().to_lowercase(), idx))
            .collect();
        Self {
            matrix,
            name_to_row,
        }
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Ranks the places most similar to `place`, best first, excluding the
    /// place itself. Candidate rows are over-fetched at twice the limit so
    /// rows with no matching corpus place can be skipped.
    pub fn similar_places(
        &self,
        place: &Place,
        corpus: &[Place],
        limit: usize,
    ) -> Result<Vec<SimilarPlace>, SimilarPlacesError> {
        let key = place.name.trim().to_lowercase();
        let row_idx = *self
            .name_to_row
            .get(&key)
            .ok_or_else(|| SimilarPlacesError::PlaceNotIndexed(place.name.clone()))?;
        let row = self
            .matrix
            .get(row_idx)
            .ok_or_else(|| SimilarPlacesError::PlaceNotIndexed(place.name.clone()))?;

        let mut scores: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores.retain(|(idx, _)| *idx != row_idx);

        let row_to_name: HashMap<usize, &str> = self
            .name_to_row
            .iter()
            .map(|(name, idx)| (*idx, name.as_str()))
            .collect();

        let mut results = Vec::new();
        for (idx, _) in scores.into_iter().take(limit * 2) {
            let Some(name) = row_to_name.get(&idx) else {
                continue;
            };
            let found = corpus
                .iter()
                .find(|p| p.name.trim().to_lowercase() == *name);
            if let Some(found) = found {
                if results.len() < limit {
                    results.push(SimilarPlace::from_place(found));
                }
            }
        }

        debug!(
            "{} similar places found for \"{}\"",
            results.len(),
            place.name
        );
        Ok(results)
    }
}

/// Truncates long descriptions for card display.
fn preview(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        let cut: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: i32, name: &str) -> Place {
        Place {
            id,
            name: name.to_string(),
            place_type: None,
            tags: None,
            activities: None,
            description: None,
            best_season: None,
            accessibility: None,
            difficulty_level: None,
            rating: None,
            province: None,
            location: None,
            latitude: None,
            longitude: None,
            image_url: None,
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ranks_by_similarity_row_and_excludes_self() {
        let matrix = vec![
            vec![1.0, 0.2, 0.9, 0.5],
            vec![0.2, 1.0, 0.1, 0.3],
            vec![0.9, 0.1, 1.0, 0.4],
            vec![0.5, 0.3, 0.4, 1.0],
        ];
        let index = SimilarityIndex::new(matrix, &names(&["Alpha", "Beta", "Gamma", "Delta"]));
        let corpus = vec![
            place(1, "Alpha"),
            place(2, "Beta"),
            place(3, "Gamma"),
            place(4, "Delta"),
        ];

        let similar = index
            .similar_places(&corpus[0], &corpus, DEFAULT_SIMILAR_LIMIT)
            .unwrap();

        let ids: Vec<i32> = similar.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 2]);
    }

    #[test]
    fn limit_caps_the_result() {
        let matrix = vec![
            vec![1.0, 0.2, 0.9, 0.5],
            vec![0.2, 1.0, 0.1, 0.3],
            vec![0.9, 0.1, 1.0, 0.4],
            vec![0.5, 0.3, 0.4, 1.0],
        ];
        let index = SimilarityIndex::new(matrix, &names(&["Alpha", "Beta", "Gamma", "Delta"]));
        let corpus = vec![
            place(1, "Alpha"),
            place(2, "Beta"),
            place(3, "Gamma"),
            place(4, "Delta"),
        ];

        let similar = index.similar_places(&corpus[0], &corpus, 1).unwrap();
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id, 3);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let matrix = vec![vec![1.0, 0.7], vec![0.7, 1.0]];
        let index = SimilarityIndex::new(matrix, &names(&["Alpha Peak ", "beta lake"]));
        let corpus = vec![place(1, "ALPHA PEAK"), place(2, "Beta Lake")];

        let similar = index.similar_places(&corpus[0], &corpus, 6).unwrap();
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id, 2);
    }

    #[test]
    fn unknown_place_is_an_error() {
        let index = SimilarityIndex::new(vec![vec![1.0]], &names(&["Alpha"]));
        let corpus = vec![place(1, "Alpha")];

        let err = index
            .similar_places(&place(9, "Nowhere"), &corpus, 6)
            .unwrap_err();
        assert!(matches!(err, SimilarPlacesError::PlaceNotIndexed(_)));
    }

    #[test]
    fn rows_missing_from_corpus_are_skipped() {
        let matrix = vec![
            vec![1.0, 0.9, 0.8],
            vec![0.9, 1.0, 0.1],
            vec![0.8, 0.1, 1.0],
        ];
        let index = SimilarityIndex::new(matrix, &names(&["Alpha", "Beta", "Gamma"]));
        // Beta has been removed from the corpus since the matrix was built
        let corpus = vec![place(1, "Alpha"), place(3, "Gamma")];

        let similar = index.similar_places(&corpus[0], &corpus, 6).unwrap();
        let ids: Vec<i32> = similar.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn long_descriptions_are_truncated_for_cards() {
        let matrix = vec![vec![1.0, 0.7], vec![0.7, 1.0]];
        let index = SimilarityIndex::new(matrix, &names(&["Alpha", "Beta"]));
        let mut beta = place(2, "Beta");
        beta.description = Some("x".repeat(250));
        let corpus = vec![place(1, "Alpha"), beta];

        let similar = index.similar_places(&corpus[0], &corpus, 6).unwrap();
        let description = similar[0].description.as_deref().unwrap();
        assert_eq!(description.chars().count(), 203);
        assert!(description.ends_with("..."));

        let mut short = place(2, "Beta");
        short.description = Some("short enough".to_string());
        let corpus = vec![place(1, "Alpha"), short];
        let similar = index.similar_places(&corpus[0], &corpus, 6).unwrap();
        assert_eq!(similar[0].description.as_deref(), Some("short enough"));
    }
}
