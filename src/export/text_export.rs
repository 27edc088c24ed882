use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::base::Named;
use crate::core::collection::Collection;
use crate::core::document::Document;
use crate::export::Exporter;

#[derive(Debug, Clone)]
pub struct TextExporter {
    out_dir: PathBuf,
}

impl TextExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    fn format_document(document: &Document) -> String {
        let mut out = format!(
            "--- {} ({} pages, {} regions, {} words) ---\n",
            document.name(),
            document.num_pages(),
            document.num_regions(),
            document.dictionary().len()
        );
        for page in document.pages() {
            let _ = writeln!(
                out,
                "{}: {} regions, {} characters",
                page.name(),
                page.num_regions(),
                page.text().chars().count()
            );
        }
        out
    }

    pub fn render(collection: &Collection) -> String {
        let mut text = format!("=== {} ===\n\n{}\n\n", collection.name(), collection);
        for document in collection.documents() {
            text.push_str(&Self::format_document(document));
            text.push('\n');
        }
        text
    }
}

impl Exporter for TextExporter {
    fn export(&self, collection: &Collection) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("collection.txt");
        fs::write(path, Self::render(collection))?;
        Ok(())
    }
}
