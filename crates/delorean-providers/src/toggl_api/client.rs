use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Datelike, Months, NaiveDate};
use serde_json::Value;
use tracing::{debug, info};

use crate::{Error, Result};

pub const TOGGL_TIME_ENTRIES_URL: &str = "https://api.track.toggl.com/api/v9/me/time_entries";

/// Shortest string accepted as a Toggl API token
pub const MIN_TOKEN_LEN: usize = 32;

pub fn is_valid_token(token: &str) -> bool {
    token.trim().chars().count() >= MIN_TOKEN_LEN
}

/// Start of the default download window: the 1st of the month two months back
pub fn default_since(today: NaiveDate) -> NaiveDate {
    let first_of_month = today.with_day(1).unwrap_or(today);
    first_of_month
        .checked_sub_months(Months::new(2))
        .unwrap_or(first_of_month)
}

/// Blocking client for the Toggl v9 time entries endpoint
pub struct TogglClient {
    token: String,
    proxy: Option<String>,
    agent: ureq::Agent,
}

impl TogglClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into().trim().to_string(),
            proxy: None,
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Relay requests through a CORS forwarding proxy (`{proxy}?url=...`)
    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy.filter(|p| !p.trim().is_empty());
        self
    }

    /// HTTP Basic credentials: the token as user, `api_token` as password
    pub fn auth_header(&self) -> String {
        let credentials = format!("{}:api_token", self.token);
        format!("Basic {}", STANDARD.encode(credentials))
    }

    /// Endpoint URL with metadata enabled and the date window applied
    pub fn time_entries_url(since: NaiveDate, until: Option<NaiveDate>) -> String {
        let mut url = format!(
            "{}?meta=true&start_date={}",
            TOGGL_TIME_ENTRIES_URL,
            since.format("%Y-%m-%d")
        );
        if let Some(until) = until {
            url.push_str(&format!("&end_date={}", until.format("%Y-%m-%d")));
        }
        url
    }

    /// Download raw time entry records
    ///
    /// A non-success response becomes [`Error::Http`] carrying the status
    /// code and body text.
    pub fn fetch_time_entries(
        &self,
        since: NaiveDate,
        until: Option<NaiveDate>,
    ) -> Result<Vec<Value>> {
        let target = Self::time_entries_url(since, until);
        let request = match &self.proxy {
            Some(proxy) => {
                debug!(proxy = %proxy, "relaying through proxy");
                self.agent.get(proxy).query("url", &target)
            }
            None => self.agent.get(&target),
        };

        let response = request
            .set("Content-Type", "application/json")
            .set("Authorization", &self.auth_header())
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(status, response) => Error::Http {
                    status,
                    body: response.into_string().unwrap_or_default(),
                },
                ureq::Error::Transport(transport) => Error::Transport(transport.to_string()),
            })?;

        let document: Value = response.into_json()?;
        match document {
            Value::Array(items) => {
                info!(entries = items.len(), "downloaded time entries");
                Ok(items)
            }
            other => Err(Error::Provider(format!(
                "unexpected time entries response: {}",
                truncate_json(&other)
            ))),
        }
    }
}

fn truncate_json(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() <= 100 {
        text
    } else {
        text.chars().take(100).collect::<String>() + "..."
    }
}
