use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::analysis::{CollectionSummary, DistanceMatrix};
use crate::core::collection::Collection;
use crate::export::Exporter;

#[derive(Debug, Serialize)]
struct CollectionReport {
    summary: CollectionSummary,
    distances: DistanceMatrix,
}

#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, collection: &Collection) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let report = CollectionReport {
            summary: CollectionSummary::from_collection(collection),
            distances: DistanceMatrix::compute(collection),
        };
        let path = self.out_dir.join("collection.json");
        let data = serde_json::to_string_pretty(&report)?;
        fs::write(path, data)?;
        Ok(())
    }
}
