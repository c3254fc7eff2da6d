use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::Event;

pub const DEFAULT_JSON_FILE: &str = "iowa_events.json";
pub const DEFAULT_CSV_FILE: &str = "iowa_events.csv";

/// CSV header, in [`Event`] field order.
pub const CSV_COLUMNS: [&str; 16] = [
    "title",
    "date",
    "time",
    "location",
    "venue",
    "category",
    "subcategory",
    "source",
    "source_url",
    "description",
    "city",
    "teams",
    "age_group",
    "registration_url",
    "latitude",
    "longitude",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct CatalogueDocument<'a> {
    scraped_at: String,
    total_events: usize,
    events: &'a [Event],
}

/// ISO-8601 local timestamp with microsecond precision.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

pub fn write_json_to<W: Write>(
    writer: W,
    events: &[Event],
    scraped_at: NaiveDateTime,
) -> Result<(), ExportError> {
    let document = CatalogueDocument {
        scraped_at: format_timestamp(scraped_at),
        total_events: events.len(),
        events,
    };
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}

pub fn write_json(
    path: impl AsRef<Path>,
    events: &[Event],
    scraped_at: NaiveDateTime,
) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_json_to(&mut writer, events, scraped_at)?;
    writer.flush()?;
    log::info!("Saved to {}", path.as_ref().display());
    Ok(())
}

/// Header plus one row per event. `None` becomes an empty cell.
pub fn write_csv_to<W: Write>(writer: W, events: &[Event]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    csv_writer.write_record(CSV_COLUMNS)?;
    for event in events {
        csv_writer.serialize(event)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv(path: impl AsRef<Path>, events: &[Event]) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    write_csv_to(BufWriter::new(file), events)?;
    log::info!("Saved to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    const CSV_HEADER: &str = "title,date,time,location,venue,category,subcategory,source,source_url,description,city,teams,age_group,registration_url,latitude,longitude";

    fn scraped_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 125)
            .unwrap()
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event {
                title: "Quad-City Times Bix 7".into(),
                date: "July 25, 2026".into(),
                time: Some("8:00 AM".into()),
                location: "Davenport, IA".into(),
                venue: Some("Downtown Davenport".into()),
                category: "running".into(),
                subcategory: Some("race".into()),
                source: "Bix 7".into(),
                source_url: "https://bix7.com/".into(),
                description: None,
                city: Some("Davenport".into()),
                teams: None,
                age_group: None,
                registration_url: None,
                latitude: Some(41.5236),
                longitude: Some(-90.5776),
            },
            Event {
                title: "RAGBRAI, the ride".into(),
                date: "July 2026".into(),
                time: Some("All week".into()),
                location: "Across Iowa, IA".into(),
                venue: None,
                category: "community".into(),
                subcategory: Some("cycling".into()),
                source: "Travel Iowa".into(),
                source_url: "https://www.traveliowa.com/events/".into(),
                description: None,
                city: Some("Across Iowa".into()),
                teams: None,
                age_group: None,
                registration_url: None,
                latitude: None,
                longitude: None,
            },
        ]
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(scraped_at()), "2026-01-01T09:30:00.000125");
    }

    #[test]
    fn test_json_document_shape() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &sample_events(), scraped_at()).expect("JSON export failed");

        let value: serde_json::Value = serde_json::from_slice(&buf).expect("output should be JSON");
        assert_eq!(value["scraped_at"], "2026-01-01T09:30:00.000125");
        assert_eq!(value["total_events"], 2);

        let events = value["events"].as_array().expect("events should be an array");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["title"], "Quad-City Times Bix 7");
        assert_eq!(events[0]["latitude"], 41.5236);
        assert!(events[1]["latitude"].is_null());
        assert!(events[1]["venue"].is_null());
        assert_eq!(events[1].as_object().unwrap().len(), 16);

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\n  \"total_events\": 2,"));
    }

    #[test]
    fn test_json_round_trips_events() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &sample_events(), scraped_at()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let events: Vec<Event> = serde_json::from_value(value["events"].clone()).unwrap();
        assert_eq!(events, sample_events());
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &sample_events()).expect("CSV export failed");

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "Quad-City Times Bix 7,\"July 25, 2026\",8:00 AM,\"Davenport, IA\",Downtown Davenport,running,race,Bix 7,https://bix7.com/,,Davenport,,,,41.5236,-90.5776"
        );
        assert_eq!(
            lines[2],
            "\"RAGBRAI, the ride\",July 2026,All week,\"Across Iowa, IA\",,community,cycling,Travel Iowa,https://www.traveliowa.com/events/,,Across Iowa,,,,,"
        );
    }

    #[test]
    fn test_empty_csv_still_has_header() {
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{CSV_HEADER}\r\n"));
    }

    #[test]
    fn test_header_matches_event_fields() {
        let value = serde_json::to_value(&sample_events()[0]).unwrap();
        let fields: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut columns = CSV_COLUMNS.to_vec();
        columns.sort_unstable();
        let mut fields = fields;
        fields.sort_unstable();
        assert_eq!(columns, fields);
        assert_eq!(CSV_COLUMNS.join(","), CSV_HEADER);
    }

    #[test]
    fn test_file_exports() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let json_path = dir.path().join(DEFAULT_JSON_FILE);
        let csv_path = dir.path().join(DEFAULT_CSV_FILE);

        write_json(&json_path, &sample_events(), scraped_at()).expect("JSON export failed");
        write_csv(&csv_path, &sample_events()).expect("CSV export failed");

        let json = fs::read_to_string(&json_path).unwrap();
        assert!(json.starts_with("{\n  \"scraped_at\": \"2026-01-01T09:30:00.000125\""));
        let csv = fs::read_to_string(&csv_path).unwrap();
        assert!(csv.starts_with(CSV_HEADER));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_JSON_FILE);

        let err = write_json(&path, &sample_events(), scraped_at()).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
