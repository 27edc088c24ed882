use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::analysis::{CollectionSummary, DistanceMatrix};
use crate::core::collection::Collection;
use crate::export::Exporter;

#[derive(Debug, Clone)]
pub struct MarkdownExporter {
    out_dir: PathBuf,
}

impl MarkdownExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    fn format_summary(summary: &CollectionSummary) -> String {
        let mut md = format!("# {}\n\n", summary.name);
        md.push_str(&format!(
            "- **Documents:** {}\n- **Pages:** {}\n- **Regions:** {} ({:.2} per page)\n- **Pages with text:** {}\n\n",
            summary.documents,
            summary.pages,
            summary.regions,
            summary.regions_per_page,
            summary.text_pages
        ));

        if summary.document_summaries.is_empty() {
            return md;
        }

        md.push_str("## Documents\n\n");
        md.push_str("| Document | Pages | Regions | Text pages | Vocabulary | Median region area |\n");
        md.push_str("|---|---:|---:|---:|---:|---:|\n");
        for doc in &summary.document_summaries {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {:.1} |\n",
                escape_cell(&doc.name),
                doc.pages,
                doc.regions,
                doc.text_pages,
                doc.vocabulary,
                doc.median_region_area
            ));
        }
        md.push('\n');
        md
    }

    fn format_matrix(matrix: &DistanceMatrix) -> String {
        if matrix.is_empty() {
            return String::new();
        }

        let mut md = String::from("## Dictionary distance\n\n");
        md.push_str("Rows are scored towards columns; `n/a` marks documents without text.\n\n");

        md.push_str("| |");
        for name in &matrix.names {
            md.push_str(&format!(" {} |", escape_cell(name)));
        }
        md.push('\n');
        md.push_str("|---|");
        md.push_str(&"---:|".repeat(matrix.len()));
        md.push('\n');

        for (name, row) in matrix.names.iter().zip(&matrix.values) {
            md.push_str(&format!("| {} |", escape_cell(name)));
            for score in row {
                if *score < 0.0 {
                    md.push_str(" n/a |");
                } else {
                    md.push_str(&format!(" {:.3} |", score));
                }
            }
            md.push('\n');
        }
        md
    }

    pub fn render(collection: &Collection) -> String {
        let summary = CollectionSummary::from_collection(collection);
        let matrix = DistanceMatrix::compute(collection);
        let mut md = Self::format_summary(&summary);
        md.push_str(&Self::format_matrix(&matrix));
        md
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace("\r\n", " ").replace(['\n', '\r'], " ")
}

impl Exporter for MarkdownExporter {
    fn export(&self, collection: &Collection) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("report.md");
        fs::write(path, Self::render(collection))?;
        Ok(())
    }
}
