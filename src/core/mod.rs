pub mod base;
pub mod collection;
pub mod color;
pub mod document;
pub mod geometry;
pub mod model;
pub mod stats;
