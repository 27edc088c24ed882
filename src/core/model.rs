use serde::Serialize;

use crate::core::geometry::Size;
use crate::core::stats::median;
use crate::parser::Record;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RegionType {
    #[default]
    Unknown,
    TextRegion,
    TextLine,
    Word,
    Separator,
    Image,
    Graphic,
    Noise,
    TableRegion,
    TableCell,
    Chart,
}

impl RegionType {
    /// Maps a record's integer tag; unrecognized tags are `Unknown`.
    pub fn from_tag(tag: i64) -> Self {
        match tag {
            1 => RegionType::TextRegion,
            2 => RegionType::TextLine,
            3 => RegionType::Word,
            4 => RegionType::Separator,
            5 => RegionType::Image,
            6 => RegionType::Graphic,
            7 => RegionType::Noise,
            8 => RegionType::TableRegion,
            9 => RegionType::TableCell,
            10 => RegionType::Chart,
            _ => RegionType::Unknown,
        }
    }

    pub fn tag(&self) -> i64 {
        *self as i64
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RegionType::Unknown => "unknown",
            RegionType::TextRegion => "text_region",
            RegionType::TextLine => "text_line",
            RegionType::Word => "word",
            RegionType::Separator => "separator",
            RegionType::Image => "image",
            RegionType::Graphic => "graphic",
            RegionType::Noise => "noise",
            RegionType::TableRegion => "table_region",
            RegionType::TableCell => "table_cell",
            RegionType::Chart => "chart",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Region {
    #[serde(rename = "type")]
    region_type: RegionType,
    size: Size,
}

impl Region {
    pub fn new(region_type: RegionType, size: Size) -> Self {
        Self { region_type, size }
    }

    pub fn from_record(record: &Record<'_>) -> Self {
        Self {
            region_type: RegionType::from_tag(record.int("type")),
            size: Size::new(record.dimension("width"), record.dimension("height")),
        }
    }

    pub fn region_type(&self) -> RegionType {
        self.region_type
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f64 {
        f64::from(self.size.width)
    }

    pub fn height(&self) -> f64 {
        f64::from(self.size.height)
    }

    pub fn area(&self) -> f64 {
        self.size.area()
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImageData {
    file_name: String,
    size: Size,
}

impl ImageData {
    pub fn new(file_name: impl Into<String>, size: Size) -> Self {
        Self {
            file_name: file_name.into(),
            size,
        }
    }

    /// Image fields live alongside the page fields in the same record.
    pub fn from_record(record: &Record<'_>) -> Self {
        Self {
            file_name: record.string("imgName"),
            size: Size::new(record.dimension("width"), record.dimension("height")),
        }
    }

    pub fn name(&self) -> &str {
        &self.file_name
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PageData {
    source_xml_path: String,
    text: String,
    collection_name: String,
    document_name: String,
    image: ImageData,
    regions: Vec<Region>,
}

impl PageData {
    pub fn new(image: ImageData, regions: Vec<Region>, text: impl Into<String>) -> Self {
        Self {
            image,
            regions,
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_source_xml(mut self, path: impl Into<String>) -> Self {
        self.source_xml_path = path.into();
        self
    }

    pub fn with_origin(
        mut self,
        collection_name: impl Into<String>,
        document_name: impl Into<String>,
    ) -> Self {
        self.collection_name = collection_name.into();
        self.document_name = document_name.into();
        self
    }

    pub fn from_record(record: &Record<'_>) -> Self {
        Self {
            source_xml_path: record.string("xmlName"),
            text: record.string("content"),
            collection_name: record.string("collection"),
            document_name: record.string("document"),
            image: ImageData::from_record(record),
            regions: record
                .records("regions")
                .iter()
                .map(Region::from_record)
                .collect(),
        }
    }

    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    /// Median of `property` over all regions; `0.0` for a page without regions.
    pub fn average_region<F>(&self, property: F) -> f64
    where
        F: Fn(&Region) -> f64,
    {
        let values: Vec<f64> = self.regions.iter().map(property).collect();
        median(&values)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn image(&self) -> &ImageData {
        &self.image
    }

    /// The page is named after its image.
    pub fn name(&self) -> &str {
        self.image.name()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn source_xml_path(&self) -> &str {
        &self.source_xml_path
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }
}
