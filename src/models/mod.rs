pub mod place;
pub mod recommendation;
