use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::collection::Collection;
use crate::core::color::Palette;
use crate::export::json_export::JsonExporter;
use crate::export::markdown_export::MarkdownExporter;
use crate::export::text_export::TextExporter;
use crate::export::Exporter;
use crate::loader::ByteLoader;
use crate::parser::parse_collection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
    Markdown,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: String,
    pub output: PathBuf,
    pub collection_name: Option<String>,
    pub alpha: f64,
}

impl PipelineConfig {
    pub fn new(input: impl Into<String>, output: PathBuf) -> Self {
        Self {
            input: input.into(),
            output,
            collection_name: None,
            alpha: 1.0,
        }
    }

    pub fn with_collection_name(mut self, name: Option<String>) -> Self {
        self.collection_name = name;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Explicit name, else the input's file stem.
    pub fn collection_name(&self) -> String {
        if let Some(name) = &self.collection_name {
            return name.clone();
        }
        let trimmed = self.input.trim_end_matches('/');
        Path::new(trimmed)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| trimmed.to_string())
    }

    pub fn palette(&self) -> Palette {
        Palette::default().with_alpha(self.alpha)
    }
}

pub fn build_collection(config: &PipelineConfig, loader: &dyn ByteLoader) -> Result<Collection> {
    let bytes = loader
        .load(&config.input)
        .with_context(|| format!("failed to load {}", config.input))?;

    let name = config.collection_name();
    let collection = parse_collection(&bytes, &name, &config.palette())
        .with_context(|| format!("failed to parse {}", config.input))?;

    info!(
        collection = %name,
        documents = collection.num_documents(),
        pages = collection.num_pages(),
        "collection loaded"
    );
    Ok(collection)
}

pub fn export_collection(
    collection: &Collection,
    output: &Path,
    formats: &[ExportFormat],
) -> Result<()> {
    for format in formats {
        let exporter: Box<dyn Exporter> = match format {
            ExportFormat::Json => Box::new(JsonExporter::new(output.to_path_buf())),
            ExportFormat::Text => Box::new(TextExporter::new(output.to_path_buf())),
            ExportFormat::Markdown => Box::new(MarkdownExporter::new(output.to_path_buf())),
        };
        exporter
            .export(collection)
            .with_context(|| format!("failed to export {:?} to {}", format, output.display()))?;
    }
    Ok(())
}
