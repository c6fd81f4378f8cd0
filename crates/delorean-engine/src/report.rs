// Fixed-width timecard rendering.
//
// Only aggregates with a numeric, non-zero TLP code are itemized. Every
// aggregate's hours still feed the report totals.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use std::fmt;

use crate::aggregate::GroupedAggregate;

pub const TITLE: &str = "DeLorean Transfer Timecard Report";
pub const NO_ENTRIES_MESSAGE: &str = "No loggable time entries.";

/// Column widths: TLP, Dev Log, QAN, PRJ, Hours, Description
pub const COLUMN_WIDTHS: [usize; 6] = [5, 8, 8, 8, 5, 40];

const DESCRIPTION_COLUMN: usize = COLUMN_WIDTHS.len() - 1;
const ROW_SEPARATOR: &str = " | ";
const CONTINUATION_SEPARATOR: &str = " . ";
const CONTINUATION_MARKER: &str = "^";

/// Nearest quarter hour
pub fn round_to_quarter_hour(hours: f64) -> f64 {
    (hours * 4.0).round() / 4.0
}

/// One itemized timecard row
#[derive(Debug, Clone, PartialEq)]
pub struct TimecardLine {
    pub tlp: u64,
    pub dlg_number: String,
    pub qan_number: String,
    pub prj_number: String,
    pub hours_rounded: f64,
    /// Distinct non-empty descriptions, sorted
    pub descriptions: Vec<String>,
}

/// Rows and running totals for one report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timecard {
    pub lines: Vec<TimecardLine>,
    pub total_hours: f64,
    pub total_rounded_hours: f64,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
    pub unique_tlps: BTreeSet<u64>,
    pub unique_prjs: BTreeSet<String>,
    pub unique_dlgs: BTreeSet<String>,
    pub unique_qans: BTreeSet<String>,
    pub unique_descriptions: BTreeSet<String>,
    /// Raw entries behind the itemized rows
    pub represented_entries: usize,
}

impl Timecard {
    pub fn from_aggregates(aggregates: &[GroupedAggregate<'_>]) -> Self {
        let mut card = Timecard::default();

        for aggregate in aggregates {
            let hours = aggregate.hours();
            let hours_rounded = round_to_quarter_hour(hours);
            card.total_hours += hours;
            card.total_rounded_hours += hours_rounded;

            let Some(tlp) = aggregate.key.tlp_value() else {
                continue;
            };
            if hours_rounded <= 0.0 {
                continue;
            }

            let key = &aggregate.key;
            card.unique_tlps.insert(tlp);
            for (set, code) in [
                (&mut card.unique_prjs, &key.prj_number),
                (&mut card.unique_dlgs, &key.dlg_number),
                (&mut card.unique_qans, &key.qan_number),
            ] {
                if !code.is_empty() {
                    set.insert(code.clone());
                }
            }

            let mut descriptions = BTreeSet::new();
            for entry in &aggregate.entries {
                if let Some(day) = entry.start_day() {
                    card.first_day = Some(card.first_day.map_or(day, |d| d.min(day)));
                    card.last_day = Some(card.last_day.map_or(day, |d| d.max(day)));
                }
                if !entry.description.is_empty() {
                    descriptions.insert(entry.description.clone());
                }
            }
            card.unique_descriptions.extend(descriptions.iter().cloned());
            card.represented_entries += aggregate.entries.len();

            card.lines.push(TimecardLine {
                tlp,
                dlg_number: key.dlg_number.clone(),
                qan_number: key.qan_number.clone(),
                prj_number: key.prj_number.clone(),
                hours_rounded,
                descriptions: descriptions.into_iter().collect(),
            });
        }

        card
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rounded minus actual hours, in minutes; `None` when they agree
    pub fn gap_minutes(&self) -> Option<f64> {
        (self.total_rounded_hours != self.total_hours)
            .then(|| (self.total_rounded_hours - self.total_hours) * 60.0)
    }

    /// Table, totals and details, without title or footer
    pub fn body(&self, show_all_descriptions: bool) -> String {
        TimecardBody {
            card: self,
            show_all_descriptions,
        }
        .to_string()
    }

    /// Title line plus the date caption of the itemized entries
    pub fn introduction(&self) -> String {
        let mut out = format!("{TITLE}\n");
        if !self.is_empty()
            && let (Some(first), Some(last)) = (self.first_day, self.last_day)
        {
            out.push_str(&format!("Report date: {}", first.format("%Y-%m-%d")));
            if first != last {
                out.push_str(&format!(" to {}", last.format("%Y-%m-%d")));
            }
        }
        out.push('\n');
        out
    }

    /// The complete report text
    pub fn render(&self, show_all_descriptions: bool, generated_at: NaiveDateTime) -> String {
        format!(
            "{}\n{}\n\nGenerated on: {}\n",
            self.introduction(),
            self.body(show_all_descriptions),
            generated_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Text view of a timecard's table and summary lines
pub struct TimecardBody<'a> {
    pub card: &'a Timecard,
    pub show_all_descriptions: bool,
}

impl fmt::Display for TimecardBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.card;
        if card.is_empty() {
            return writeln!(f, "{NO_ENTRIES_MESSAGE}");
        }

        writeln!(f, "Timecard Entries:")?;

        let description_header = if self.show_all_descriptions {
            "Descriptions (All Distinct)"
        } else {
            "Descriptions (Sample)"
        };
        let header = format_header(&[
            "TLP",
            "Dev Log",
            "QAN",
            "PRJ",
            "Hours",
            description_header,
        ]);
        let rule_len = header.chars().count();
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "=".repeat(rule_len))?;

        for line in &card.lines {
            let first = line.descriptions.first().map(String::as_str).unwrap_or("");
            let cells = [
                line.tlp.to_string(),
                line.dlg_number.clone(),
                line.qan_number.clone(),
                line.prj_number.clone(),
                line.hours_rounded.to_string(),
                first.to_string(),
            ];
            writeln!(f, "{}", format_row(&cells, ROW_SEPARATOR))?;

            if self.show_all_descriptions {
                for description in line.descriptions.iter().skip(1) {
                    let cells = [
                        CONTINUATION_MARKER.to_string(),
                        marker_if_present(&line.dlg_number),
                        marker_if_present(&line.qan_number),
                        marker_if_present(&line.prj_number),
                        CONTINUATION_MARKER.to_string(),
                        description.clone(),
                    ];
                    writeln!(f, "{}", format_row(&cells, CONTINUATION_SEPARATOR))?;
                }
            }
        }

        writeln!(f, "{}", "-".repeat(rule_len))?;
        let totals = [
            card.unique_tlps.len().to_string(),
            card.unique_dlgs.len().to_string(),
            card.unique_qans.len().to_string(),
            card.unique_prjs.len().to_string(),
            card.total_rounded_hours.to_string(),
            format!("{}   (distinct entities)", card.unique_descriptions.len()),
        ];
        writeln!(f, "{}", format_row(&totals, ROW_SEPARATOR))?;

        write!(f, "\n\n")?;
        writeln!(
            f,
            "Total Rounded hours: {} hrs",
            to_fixed(card.total_rounded_hours, 2)
        )?;
        write!(f, "Total Actual hours: {} hrs", to_fixed(card.total_hours, 2))?;
        if let Some(gap) = card.gap_minutes() {
            write!(f, "  (Gap: {} mins)", to_fixed(gap, 1))?;
        }
        write!(f, "\n\n")?;
        writeln!(f, "Total Timecard Lines: {}", card.lines.len())?;
        writeln!(f, "Total Represented Entries: {}", card.represented_entries)
    }
}

/// Render sorted aggregates into the timecard report
pub fn format_report(
    aggregates: &[GroupedAggregate<'_>],
    show_all_descriptions: bool,
    generated_at: NaiveDateTime,
) -> String {
    Timecard::from_aggregates(aggregates).render(show_all_descriptions, generated_at)
}

/// Fixed-point text with ties rounded away from zero (`{:.N}` rounds them to even)
fn to_fixed(value: f64, decimals: u8) -> String {
    let factor = 10f64.powi(i32::from(decimals));
    format!("{:.*}", usize::from(decimals), (value * factor).round() / factor)
}

fn marker_if_present(code: &str) -> String {
    if code.is_empty() {
        String::new()
    } else {
        CONTINUATION_MARKER.to_string()
    }
}

fn format_header(labels: &[&str; 6]) -> String {
    labels
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(label, width)| pad_end(label, width))
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR)
}

/// Numeric columns right-aligned, description left-aligned
fn format_row(cells: &[String; 6], separator: &str) -> String {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .enumerate()
        .map(|(index, (cell, width))| {
            if index == DESCRIPTION_COLUMN {
                pad_end(cell, width)
            } else {
                pad_start(cell, width)
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn pad_end(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn pad_start(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{text}", " ".repeat(width.saturating_sub(len)))
}
