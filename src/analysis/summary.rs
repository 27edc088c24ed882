use serde::Serialize;

use crate::core::base::{Colored, Named, Selectable};
use crate::core::collection::Collection;
use crate::core::document::Document;
use crate::core::model::Region;
use crate::core::stats::median;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentSummary {
    pub name: String,
    pub pages: usize,
    pub regions: usize,
    pub text_pages: usize,
    /// Distinct words in the document dictionary.
    pub vocabulary: usize,
    /// Median over pages of each page's median region area.
    pub median_region_area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub selected: bool,
}

impl DocumentSummary {
    pub fn from_document(document: &Document) -> Self {
        let page_medians: Vec<f64> = document
            .pages()
            .iter()
            .filter(|p| p.num_regions() > 0)
            .map(|p| p.average_region(Region::area))
            .collect();

        Self {
            name: document.name().to_string(),
            pages: document.num_pages(),
            regions: document.num_regions(),
            text_pages: document.pages().iter().filter(|p| p.has_text()).count(),
            vocabulary: document.dictionary().len(),
            median_region_area: median(&page_medians),
            color: document.color().map(|c| c.to_hex()),
            selected: document.selected(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionSummary {
    pub name: String,
    pub documents: usize,
    pub pages: usize,
    pub regions: usize,
    pub regions_per_page: f64,
    pub text_pages: usize,
    pub document_summaries: Vec<DocumentSummary>,
}

impl CollectionSummary {
    pub fn from_collection(collection: &Collection) -> Self {
        Self {
            name: collection.name().to_string(),
            documents: collection.num_documents(),
            pages: collection.num_pages(),
            regions: collection.num_regions(),
            regions_per_page: collection.regions_per_page(),
            text_pages: collection.num_text_pages(),
            document_summaries: collection
                .documents()
                .iter()
                .map(DocumentSummary::from_document)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::geometry::Size;
    use crate::core::model::{ImageData, PageData, RegionType};
    use pretty_assertions::assert_eq;

    fn page(text: &str, widths: &[u32]) -> PageData {
        let regions = widths
            .iter()
            .map(|w| Region::new(RegionType::TextLine, Size::new(*w, 2)))
            .collect();
        PageData::new(ImageData::default(), regions, text)
    }

    #[test]
    fn summarizes_document() {
        let mut doc = Document::new("d").with_pages(vec![
            page("one two two", &[1, 2, 3]),
            page("", &[]),
            page("three", &[10]),
        ]);
        doc.set_color(Color::rgb(255, 0, 0));

        let summary = DocumentSummary::from_document(&doc);
        assert_eq!(summary.pages, 3);
        assert_eq!(summary.regions, 4);
        assert_eq!(summary.text_pages, 2);
        assert_eq!(summary.vocabulary, 3);
        // page medians: 4.0 and 20.0
        assert_eq!(summary.median_region_area, 12.0);
        assert_eq!(summary.color.as_deref(), Some("#ff0000ff"));
        assert!(!summary.selected);
    }

    #[test]
    fn summarizes_collection() {
        let doc = Document::new("d").with_pages(vec![page("a", &[1]), page("b", &[1, 1, 1])]);
        let collection = Collection::new("c").with_documents(vec![doc]);

        let summary = CollectionSummary::from_collection(&collection);
        assert_eq!(summary.name, "c");
        assert_eq!(summary.documents, 1);
        assert_eq!(summary.pages, 2);
        assert_eq!(summary.regions, 4);
        assert_eq!(summary.regions_per_page, 2.0);
        assert_eq!(summary.text_pages, 2);
        assert_eq!(summary.document_summaries.len(), 1);
    }
}
