use tabular_pipeline::ingestion::csv::{
    ingest_csv_from_path, ingest_csv_from_reader, ingest_csv_from_str, read_csv_from_path,
};
use tabular_pipeline::ingestion::CsvOptions;

#[test]
fn ingest_csv_from_path_happy_path() {
    let t = ingest_csv_from_path("tests/fixtures/people.csv", &CsvOptions::default()).unwrap();

    // "Linus" has one field too few and is dropped.
    assert_eq!(t.row_count(), 3);
    assert_eq!(t.column_names(), vec!["name", "dept", "age", "city"]);
    assert_eq!(t.rows()[0].get("dept"), Some("Eng"));
    assert_eq!(t.rows()[2].get("name"), Some("Margaret"));
}

#[test]
fn ingest_csv_trims_headers_and_values() {
    let t = ingest_csv_from_str(" a , b \n 1 ,  two  \n", &CsvOptions::default()).unwrap();
    assert_eq!(t.column_names(), vec!["a", "b"]);
    assert_eq!(t.rows()[0].get("b"), Some("two"));
}

#[test]
fn ingest_csv_keeps_empty_cells_as_empty_text() {
    let t = ingest_csv_from_str("a,b\n,x\n", &CsvOptions::default()).unwrap();
    assert_eq!(t.rows()[0].get("a"), Some(""));
}

#[test]
fn ingest_csv_with_custom_delimiter() {
    let t = ingest_csv_from_str("a;b\n1;2\n", &CsvOptions { delimiter: b';' }).unwrap();
    assert_eq!(t.rows()[0].get("b"), Some("2"));
}

#[test]
fn ingest_csv_from_existing_reader() {
    let input = "x,y\n1,2\n3\n4,5,6\n7,8\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let t = ingest_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(t.row_count(), 2);
    assert_eq!(t.rows()[1].get("x"), Some("7"));
}

#[test]
fn ingest_csv_errors_on_missing_file() {
    let err = ingest_csv_from_path("tests/fixtures/does_not_exist.csv", &CsvOptions::default()).unwrap_err();
    assert!(err.to_string().contains("csv error"));
}

#[test]
fn read_csv_reports_dropped_records() {
    let read = read_csv_from_path("tests/fixtures/people.csv", &CsvOptions::default()).unwrap();
    assert_eq!(read.dropped_records, 1);
    assert_eq!(read.table.row_count(), 3);
}

#[test]
fn header_only_csv_keeps_its_columns() {
    let t = ingest_csv_from_str("name,dept\n", &CsvOptions::default()).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.column_names(), vec!["name", "dept"]);
}
