use chrono::NaiveDate;
use job_seeker::agency::{HumanResourcesAgency, SharedAgency, TransientCandidateFolder};
use job_seeker::config::AgencyConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-wide agency backed by the transient folder.
pub(crate) fn in_memory_agency(config: &AgencyConfig) -> SharedAgency<TransientCandidateFolder> {
    let agency = HumanResourcesAgency::new(TransientCandidateFolder::new()).with_config(config);
    Arc::new(Mutex::new(agency))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
