pub mod record;

pub use record::Record;

use serde_json::Value;
use tracing::warn;

use crate::core::collection::Collection;
use crate::core::color::ColorPicker;
use crate::core::document::Document;
use crate::error::{Error, Result};

fn parse_value(bytes: &[u8], location: &str) -> Result<Value> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| Error::Json {
        location: location.to_string(),
        source,
    })?;

    if !value.is_object() {
        warn!(location, "top-level record is not an object, using defaults");
    }
    Ok(value)
}

/// Parses a collection record from an already loaded buffer.
pub fn parse_collection(bytes: &[u8], name: &str, picker: &dyn ColorPicker) -> Result<Collection> {
    let value = parse_value(bytes, name)?;
    Ok(Collection::from_record(&Record::new(&value), name, picker))
}

/// Parses a single document record from an already loaded buffer.
pub fn parse_document(bytes: &[u8], picker: &dyn ColorPicker) -> Result<Document> {
    let value = parse_value(bytes, "document")?;
    Ok(Document::from_record(&Record::new(&value), picker))
}
