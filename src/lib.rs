//! Trip-recommendation matching engine for the tourism platform.
//!
//! Scores every destination in the place corpus against the visitor's
//! requested trip types, trip length and travel month, and returns a ranked
//! list for the recommendations endpoint. Also hosts the content-similarity
//! lookup behind "similar places".

pub mod models;
pub mod services;
