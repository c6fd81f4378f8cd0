// Billing code extraction from tags, project names and descriptions.
//
// Matching is case-insensitive and returns the digits of the first match.
// Digits are ASCII only.

use delorean_types::{CodeKey, TimeEntry};
use regex::Regex;
use std::sync::LazyLock;

/// `tlp` followed by exactly five digits, searched in the joined tag list
static TLP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)tlp([0-9]{5})").unwrap());

static PRJ_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)PRJ\s*([0-9]+)").unwrap());

static DLG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)DLG\s*([0-9]+)").unwrap());

static QAN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)QAN\s*([0-9]+)").unwrap());

fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// TLP code from the entry's tags (comma joined)
pub fn extract_tlp_code(entry: &TimeEntry) -> Option<String> {
    if entry.tag_names.is_empty() {
        return None;
    }
    first_capture(&TLP_REGEX, &entry.tag_names.join(","))
}

/// PRJ number from the project name, falling back to the description
pub fn extract_prj_number(entry: &TimeEntry) -> Option<String> {
    first_capture(&PRJ_REGEX, &entry.project_name)
        .or_else(|| first_capture(&PRJ_REGEX, &entry.description))
}

/// DLG (dev log) number from the description
pub fn extract_dlg_number(entry: &TimeEntry) -> Option<String> {
    first_capture(&DLG_REGEX, &entry.description)
}

/// QAN number from the description
pub fn extract_qan_number(entry: &TimeEntry) -> Option<String> {
    first_capture(&QAN_REGEX, &entry.description)
}

/// All four codes, absent ones as empty strings
pub fn code_key(entry: &TimeEntry) -> CodeKey {
    CodeKey::new(
        extract_tlp_code(entry).unwrap_or_default(),
        extract_prj_number(entry).unwrap_or_default(),
        extract_dlg_number(entry).unwrap_or_default(),
        extract_qan_number(entry).unwrap_or_default(),
    )
}
