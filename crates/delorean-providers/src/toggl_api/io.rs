use serde_json::Value;
use tracing::warn;

use super::schema::TogglApiRecord;
use crate::normalization::SourceRow;
use crate::{Error, Result};

/// Parse an API document: a top-level array, or an object with a `data` array
pub fn read_api_rows(text: &str) -> Result<Vec<SourceRow>> {
    let document: Value = serde_json::from_str(text)?;
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::Provider(
                    "expected an array of time entries or an object with a `data` array"
                        .to_string(),
                ));
            }
        },
        _ => {
            return Err(Error::Provider(
                "expected an array of time entries".to_string(),
            ));
        }
    };

    Ok(items.into_iter().map(api_row).collect())
}

fn api_row(raw: Value) -> SourceRow {
    let record = if raw.is_object() {
        serde_json::from_value::<TogglApiRecord>(raw.clone()).unwrap_or_else(|err| {
            warn!(error = %err, "API entry could not be read; using empty record");
            TogglApiRecord::default()
        })
    } else {
        warn!("API entry is not an object; using empty record");
        TogglApiRecord::default()
    };

    SourceRow::Api { record, raw }
}
