use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Composite billing-code key an entry is grouped under
///
/// Each part is the digits captured from the entry text, or an empty string
/// when the code was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeKey {
    pub tlp_code: String,
    pub prj_number: String,
    pub dlg_number: String,
    pub qan_number: String,
}

impl CodeKey {
    pub fn new(
        tlp_code: impl Into<String>,
        prj_number: impl Into<String>,
        dlg_number: impl Into<String>,
        qan_number: impl Into<String>,
    ) -> Self {
        Self {
            tlp_code: tlp_code.into(),
            prj_number: prj_number.into(),
            dlg_number: dlg_number.into(),
            qan_number: qan_number.into(),
        }
    }

    /// Single string form, parts in tuple order separated by `|`
    pub fn composite(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.tlp_code, self.prj_number, self.dlg_number, self.qan_number
        )
    }

    /// Report order: PRJ, then TLP, then DLG, then QAN, all compared as text
    pub fn report_cmp(&self, other: &Self) -> Ordering {
        self.prj_number
            .cmp(&other.prj_number)
            .then_with(|| self.tlp_code.cmp(&other.tlp_code))
            .then_with(|| self.dlg_number.cmp(&other.dlg_number))
            .then_with(|| self.qan_number.cmp(&other.qan_number))
    }

    /// TLP code as a number; `None` when absent, non-numeric or zero
    pub fn tlp_value(&self) -> Option<u64> {
        self.tlp_code.parse::<u64>().ok().filter(|v| *v != 0)
    }
}

impl fmt::Display for CodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.composite())
    }
}
