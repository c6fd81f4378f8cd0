use std::io::Read;

use serde_json::{Map, Value};
use tracing::warn;

use super::schema::TogglCsvRecord;
use crate::normalization::SourceRow;
use crate::{Error, Result};

/// Parse CSV text, or JSON holding CSV-shaped objects, into source rows
///
/// JSON input is either `[{...}]` or `{"data": [{...}], ...}`.
pub fn parse_csv_content(text: &str) -> Result<Vec<SourceRow>> {
    let text = text.trim_start_matches('\u{feff}');
    match text.trim_start().chars().next() {
        Some('[') | Some('{') => read_csv_json_rows(text),
        _ => read_csv_rows(text.as_bytes()),
    }
}

/// Read CSV rows with a header line
///
/// A row that cannot be read is skipped with a warning; the rest of the
/// batch is still returned.
pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<SourceRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let string_record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!(row = index + 1, error = %err, "skipping unreadable CSV row");
                continue;
            }
        };

        if string_record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let raw = raw_row(&headers, &string_record);
        let record = match string_record.deserialize::<TogglCsvRecord>(Some(&headers)) {
            Ok(record) => record,
            Err(err) => {
                warn!(row = index + 1, error = %err, "CSV row did not match export schema");
                record_from_object(&raw)
            }
        };

        rows.push(SourceRow::Csv { record, raw });
    }

    Ok(rows)
}

/// Read CSV-shaped rows that were already parsed to JSON objects
pub fn read_csv_json_rows(text: &str) -> Result<Vec<SourceRow>> {
    let document: Value = serde_json::from_str(text)?;
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::Provider(
                    "expected a `data` array of CSV rows".to_string(),
                ));
            }
        },
        _ => {
            return Err(Error::Provider(
                "expected an array of CSV rows".to_string(),
            ));
        }
    };

    Ok(items
        .into_iter()
        .map(|raw| SourceRow::Csv {
            record: record_from_object(&raw),
            raw,
        })
        .collect())
}

fn raw_row(headers: &csv::StringRecord, record: &csv::StringRecord) -> Value {
    let map: Map<String, Value> = headers
        .iter()
        .zip(record.iter())
        .map(|(header, field)| (header.to_string(), Value::String(field.to_string())))
        .collect();
    Value::Object(map)
}

/// Build a record from a loosely typed object, stringifying scalar values
pub(crate) fn record_from_object(value: &Value) -> TogglCsvRecord {
    let Some(object) = value.as_object() else {
        warn!("CSV row is not an object; using empty record");
        return TogglCsvRecord::default();
    };

    let fields: Map<String, Value> = object
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), Value::String(text)))
        })
        .collect();

    serde_json::from_value(Value::Object(fields)).unwrap_or_else(|err| {
        warn!(error = %err, "CSV row fields could not be read; using empty record");
        TogglCsvRecord::default()
    })
}
