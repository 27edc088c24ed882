pub mod analysis;
pub mod core;
pub mod error;
pub mod export;
pub mod loader;
pub mod parser;
pub mod pipeline;

pub use core::base::{Colored, Named, Selectable};
pub use core::collection::Collection;
pub use core::document::Document;
pub use core::model::{ImageData, PageData, Region, RegionType};
pub use error::{Error, Result};
