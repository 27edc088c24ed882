use std::sync::OnceLock;

use tracing::debug;

use crate::analysis::dictionary::{build_dictionary, dictionary_distance, Dictionary};
use crate::core::base::{BaseCollection, Colored, HasBase, Named};
use crate::core::color::ColorPicker;
use crate::core::model::PageData;
use crate::parser::Record;

/// An ordered sequence of pages with a lazily built word dictionary.
#[derive(Debug, Clone, Default)]
pub struct Document {
    base: BaseCollection,
    pages: Vec<PageData>,
    dictionary: OnceLock<Dictionary>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseCollection::new(name),
            ..Self::default()
        }
    }

    pub fn with_pages(mut self, pages: Vec<PageData>) -> Self {
        self.pages = pages;
        self.dictionary = OnceLock::new();
        self
    }

    /// Parses `{name, pages: [...]}` and colors the document by its page
    /// count. Documents with equal page counts therefore share a color.
    pub fn from_record(record: &Record<'_>, picker: &dyn ColorPicker) -> Self {
        let pages = record
            .records("pages")
            .iter()
            .map(PageData::from_record)
            .collect();

        let mut document = Document::new(record.string("name")).with_pages(pages);
        document.set_color(picker.pick(document.num_pages()));
        document
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[PageData] {
        &self.pages
    }

    pub fn num_regions(&self) -> usize {
        self.pages.iter().map(PageData::num_regions).sum()
    }

    /// Appends a page and drops the cached dictionary.
    pub fn push_page(&mut self, page: PageData) {
        self.pages.push(page);
        self.dictionary.take();
    }

    /// Word counts over the text of all pages, built on first access.
    pub fn dictionary(&self) -> &Dictionary {
        self.dictionary.get_or_init(|| {
            let dictionary = build_dictionary(self.pages.iter().map(PageData::text));
            debug!(
                document = self.name(),
                words = dictionary.len(),
                "built dictionary"
            );
            dictionary
        })
    }

    pub fn has_dictionary(&self) -> bool {
        self.dictionary.get().is_some()
    }

    /// Similarity of this document towards `other`; see
    /// [`dictionary_distance`]. Negative means not comparable.
    pub fn dictionary_distance(&self, other: &Document) -> f32 {
        dictionary_distance(self.dictionary(), other.dictionary())
    }
}

impl HasBase for Document {
    fn base(&self) -> &BaseCollection {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseCollection {
        &mut self.base
    }
}
