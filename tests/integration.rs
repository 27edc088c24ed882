use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use pagecorpus::analysis::{DistanceMatrix, NOT_COMPARABLE};
use pagecorpus::core::color::{ColorPicker, Palette};
use pagecorpus::loader::{ByteLoader, FsLoader};
use pagecorpus::parser::parse_collection;
use pagecorpus::pipeline::{build_collection, export_collection, ExportFormat, PipelineConfig};
use pagecorpus::{Colored, Error, Named, PageData, RegionType, Selectable};

fn page(doc: &str, idx: usize, text: &str, regions: usize) -> serde_json::Value {
    let regions: Vec<_> = (0..regions)
        .map(|r| json!({"type": 1, "width": 10 * (r + 1), "height": 5}))
        .collect();
    json!({
        "xmlName": format!("{doc}/page/{idx:04}.xml"),
        "imgName": format!("{doc}-{idx:04}.jpg"),
        "width": 1200,
        "height": 1800,
        "content": text,
        "collection": "archive",
        "document": doc,
        "regions": regions
    })
}

fn corpus() -> serde_json::Value {
    json!({
        "documents": [
            {
                "name": "letters",
                "pages": [
                    page("letters", 0, "dear sir the harvest", 2),
                    page("letters", 1, "the harvest was good", 1),
                    page("letters", 2, "", 0)
                ]
            },
            {
                "name": "ledger",
                "pages": [
                    page("ledger", 0, "harvest 12 bushels", 3),
                    page("ledger", 1, "rent 4 shillings", 1),
                    page("ledger", 2, "", 0),
                    page("ledger", 3, "harvest 9 bushels", 2),
                    page("ledger", 4, "", 1)
                ]
            },
            {
                "name": "blank",
                "pages": [{}]
            }
        ]
    })
}

fn write_corpus(dir: &std::path::Path) -> Result<PathBuf> {
    let path = dir.join("archive.json");
    fs::write(&path, serde_json::to_vec_pretty(&corpus())?)?;
    Ok(path)
}

/// Load from disk, parse the full hierarchy and check every aggregate.
#[test]
fn test_collection_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_corpus(dir.path())?;

    let config = PipelineConfig::new(path.to_string_lossy(), dir.path().join("out"));
    let collection = build_collection(&config, &FsLoader::new())?;

    assert_eq!(collection.name(), "archive");
    assert_eq!(collection.num_documents(), 3);
    assert_eq!(collection.num_pages(), 9);
    assert_eq!(collection.pages().count(), 9);
    assert_eq!(collection.num_regions(), 10);
    assert_eq!(collection.num_text_pages(), 5);

    let names: Vec<&str> = collection.pages().take(4).map(PageData::name).collect();
    assert_eq!(
        names,
        vec!["letters-0000.jpg", "letters-0001.jpg", "letters-0002.jpg", "ledger-0000.jpg"]
    );

    let first = collection.pages().next().expect("first page");
    assert_eq!(first.source_xml_path(), "letters/page/0000.xml");
    assert_eq!(first.document_name(), "letters");
    assert_eq!(first.collection_name(), "archive");
    assert_eq!(first.regions()[0].region_type(), RegionType::TextRegion);
    // region areas 50 and 100
    assert_eq!(first.average_region(|r| r.area()), 75.0);

    Ok(())
}

/// Documents are colored by page count through the picker passed in.
#[test]
fn test_document_colors_follow_page_count() -> Result<()> {
    let palette = Palette::default();
    let bytes = serde_json::to_vec(&corpus())?;
    let collection = parse_collection(&bytes, "archive", &palette)?;

    let docs = collection.documents();
    assert_eq!(docs[0].color(), Some(palette.pick(3)));
    assert_eq!(docs[1].color(), Some(palette.pick(5)));
    assert_eq!(docs[2].color(), Some(palette.pick(1)));
    Ok(())
}

/// Distances across the parsed corpus, including the sentinel for textless documents.
#[test]
fn test_similarity_over_corpus() -> Result<()> {
    let bytes = serde_json::to_vec(&corpus())?;
    let collection = parse_collection(&bytes, "archive", &Palette::default())?;
    let docs = collection.documents();

    let letters = &docs[0];
    let ledger = &docs[1];
    let blank = &docs[2];

    assert_eq!(letters.dictionary().get("harvest"), Some(&2));
    assert_eq!(ledger.dictionary().get("harvest"), Some(&2));

    let forward = letters.dictionary_distance(ledger);
    let backward = ledger.dictionary_distance(letters);
    assert!(forward > 0.0);
    assert!(backward > 0.0);
    assert!(forward != backward);

    assert_eq!(letters.dictionary_distance(blank), NOT_COMPARABLE);
    assert_eq!(blank.dictionary_distance(letters), NOT_COMPARABLE);

    let matrix = DistanceMatrix::compute(&collection);
    assert_eq!(matrix.get(0, 1), Some(forward));
    assert_eq!(matrix.nearest(0), Some((1, forward)));
    assert_eq!(matrix.nearest(2), None);
    Ok(())
}

#[test]
fn test_select_all_documents() -> Result<()> {
    let bytes = serde_json::to_vec(&corpus())?;
    let mut collection = parse_collection(&bytes, "archive", &Palette::default())?;

    collection.select_all(true);
    assert!(collection.documents().iter().all(|d| d.selected()));
    assert!(!collection.selected());
    assert_eq!(collection.num_pages(), 9);
    Ok(())
}

/// Partial input degrades to defaults instead of failing.
#[test]
fn test_partial_records_are_defaulted() -> Result<()> {
    let bytes = br#"{"documents": [{"pages": [{"regions": [{}]}, 7]}, {"name": "x", "pages": "no"}]}"#;
    let collection = parse_collection(bytes, "partial", &Palette::default())?;

    assert_eq!(collection.num_documents(), 2);
    assert_eq!(collection.num_pages(), 2);
    assert_eq!(collection.num_regions(), 1);
    assert_eq!(collection.num_text_pages(), 0);

    let region = collection.pages().next().expect("page").regions()[0];
    assert_eq!(region.region_type(), RegionType::Unknown);
    assert_eq!(region.area(), 0.0);
    Ok(())
}

#[test]
fn test_missing_input_is_an_error() {
    let err = FsLoader::new().load("/no/such/archive.json").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

/// Full pipeline: load, parse, export all report formats.
#[test]
fn test_export_reports() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_corpus(dir.path())?;
    let out = dir.path().join("report");

    let config = PipelineConfig::new(path.to_string_lossy(), out.clone())
        .with_collection_name(Some("parish".into()));
    let collection = build_collection(&config, &FsLoader::new())?;

    export_collection(
        &collection,
        &config.output,
        &[ExportFormat::Json, ExportFormat::Text, ExportFormat::Markdown],
    )?;

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("collection.json"))?)?;
    assert_eq!(json["summary"]["name"], "parish");
    assert_eq!(json["summary"]["pages"], 9);
    assert_eq!(json["distances"]["values"][0][2], -1.0);

    let text = fs::read_to_string(out.join("collection.txt"))?;
    assert!(text.contains("9 pages found in 3 documents"));
    assert!(text.contains("10 regions (1.11 per page)"));

    let md = fs::read_to_string(out.join("report.md"))?;
    assert!(md.starts_with("# parish"));
    assert!(md.contains("| ledger | 5 | 7 | 3 |"));

    Ok(())
}
