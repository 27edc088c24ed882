pub mod dictionary;
pub mod matrix;
pub mod summary;

pub use dictionary::{build_dictionary, dictionary_distance, Dictionary, NOT_COMPARABLE};
pub use matrix::DistanceMatrix;
pub use summary::{CollectionSummary, DocumentSummary};
