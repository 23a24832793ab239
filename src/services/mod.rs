pub mod match_scoring;
pub mod recommendation_service;
pub mod seasons;
pub mod similar_places;
pub mod trip_types;
