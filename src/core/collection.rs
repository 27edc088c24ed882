use std::fmt;

use tracing::debug;

use crate::core::base::{BaseCollection, HasBase, Named, Selectable};
use crate::core::color::ColorPicker;
use crate::core::document::Document;
use crate::core::model::PageData;
use crate::parser::Record;

/// Top-level corpus: an ordered sequence of documents.
///
/// Page, region and text counts are derived from the documents on every
/// call and never cached.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    base: BaseCollection,
    documents: Vec<Document>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseCollection::new(name),
            documents: Vec::new(),
        }
    }

    pub fn with_documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = documents;
        self
    }

    /// Parses `{documents: [...]}`; the name comes from the caller.
    pub fn from_record(record: &Record<'_>, name: &str, picker: &dyn ColorPicker) -> Self {
        let documents: Vec<Document> = record
            .records("documents")
            .iter()
            .map(|r| Document::from_record(r, picker))
            .collect();

        debug!(collection = name, documents = documents.len(), "parsed collection");
        Collection::new(name).with_documents(documents)
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }

    pub fn num_pages(&self) -> usize {
        self.documents.iter().map(Document::num_pages).sum()
    }

    /// All pages in document order, then page order.
    pub fn pages(&self) -> impl Iterator<Item = &PageData> + '_ {
        self.documents.iter().flat_map(|d| d.pages().iter())
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.documents
    }

    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name() == name)
    }

    pub fn num_regions(&self) -> usize {
        self.pages().map(PageData::num_regions).sum()
    }

    pub fn num_text_pages(&self) -> usize {
        self.pages().filter(|p| p.has_text()).count()
    }

    /// Mean regions per page, `0.0` for a collection without pages.
    pub fn regions_per_page(&self) -> f64 {
        let pages = self.num_pages();
        if pages == 0 {
            0.0
        } else {
            self.num_regions() as f64 / pages as f64
        }
    }

    /// Sets the selection flag of every document. Pages carry no selection
    /// state and are left alone.
    pub fn select_all(&mut self, selected: bool) {
        for document in &mut self.documents {
            document.set_selected(selected);
        }
    }

    pub fn selected_documents(&self) -> impl Iterator<Item = &Document> + '_ {
        self.documents.iter().filter(|d| d.selected())
    }
}

impl HasBase for Collection {
    fn base(&self) -> &BaseCollection {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseCollection {
        &mut self.base
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let documents = self.num_documents();
        writeln!(
            f,
            "{} pages found in {} documents",
            self.num_pages(),
            documents
        )?;
        writeln!(f, "{} documents", documents)?;
        writeln!(
            f,
            "{} regions ({:.2} per page)",
            self.num_regions(),
            self.regions_per_page()
        )?;
        write!(f, "{} pages with text", self.num_text_pages())
    }
}
