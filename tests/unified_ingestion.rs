use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tabular_pipeline::ingestion::{CsvOptions, IngestionFormat, IngestionOptions, ingest_from_path};

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tabular-pipeline-unified-{nanos}.{ext}"))
}

#[test]
fn format_is_inferred_from_extension() {
    assert_eq!(IngestionFormat::from_extension("CSV"), Some(IngestionFormat::Csv));
    assert_eq!(IngestionFormat::from_extension("ndjson"), Some(IngestionFormat::Json));
    assert_eq!(IngestionFormat::from_extension("pq"), Some(IngestionFormat::Parquet));
    assert_eq!(IngestionFormat::from_extension("xlsx"), None);
}

#[test]
fn csv_and_json_fixtures_load_by_extension() {
    let csv = ingest_from_path("tests/fixtures/people.csv", &IngestionOptions::default()).unwrap();
    let json = ingest_from_path("tests/fixtures/people.json", &IngestionOptions::default()).unwrap();
    assert_eq!(csv.rows()[0].get("name"), Some("Ada"));
    assert_eq!(json.rows()[0].get("name"), Some("Ada"));
}

#[test]
fn forced_format_overrides_extension() {
    let path = tmp_file("data");
    {
        let mut f = File::create(&path).unwrap();
        writeln!(f, "a|b").unwrap();
        writeln!(f, "1|2").unwrap();
    }
    let opts = IngestionOptions {
        format: Some(IngestionFormat::Csv),
        csv: CsvOptions { delimiter: b'|' },
        ..Default::default()
    };
    let t = ingest_from_path(&path, &opts).unwrap();
    assert_eq!(t.rows()[0].get("b"), Some("2"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn unknown_or_missing_extension_is_rejected() {
    let err = ingest_from_path("report.xlsx", &IngestionOptions::default()).unwrap_err();
    assert!(err.to_string().contains("cannot infer format from extension 'xlsx'"));

    let err = ingest_from_path("no_extension", &IngestionOptions::default()).unwrap_err();
    assert!(err.to_string().contains("path has no extension"));
}
