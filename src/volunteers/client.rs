// client.rs
use crate::volunteers::{FetchFailure, VolunteerRecord};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("volunteer_board/", env!("CARGO_PKG_VERSION"));

const VOLUNTEERS_PATH: &str = "/api/volunteers/";

/// Anything a list view can pull the volunteer collection from.
pub trait VolunteerSource: Send + Sync {
    fn fetch_volunteers(&self) -> Result<Vec<VolunteerRecord>, FetchFailure>;
}

/// `{base}/api/volunteers/`, keeping any path prefix the base carries.
pub fn volunteers_endpoint(base: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}{VOLUNTEERS_PATH}", base.trim_end_matches('/')))
}

pub struct ApiClient {
    client: Client,
    endpoint: Url,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self, FetchFailure> {
        let endpoint = volunteers_endpoint(base)
            .map_err(|e| FetchFailure::new(format!("Invalid API base {base:?}: {e}")))?;

        // No request timeout: a hung backend keeps the view loading.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(FetchFailure::network)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl VolunteerSource for ApiClient {
    fn fetch_volunteers(&self) -> Result<Vec<VolunteerRecord>, FetchFailure> {
        log::debug!("GET {}", self.endpoint);

        let resp = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(FetchFailure::network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchFailure::status(status.as_u16()));
        }

        let text = resp.text().map_err(FetchFailure::network)?;
        let records: Vec<VolunteerRecord> =
            serde_json::from_str(&text).map_err(FetchFailure::payload)?;

        warn_on_duplicate_ids(&records);
        Ok(records)
    }
}

fn warn_on_duplicate_ids(records: &[VolunteerRecord]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            log::warn!("volunteer id {} appears more than once in payload", record.id);
        }
    }
}
