use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::HEALTHY_SERVICE_STATES;

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    /// Service name to status string, e.g. `"mongodb" -> "connected"`.
    #[serde(default)]
    pub services: BTreeMap<String, String>,
}

impl HealthStatus {
    /// Whether a reported service status counts as up.
    pub fn is_service_healthy(status: &str) -> bool {
        HEALTHY_SERVICE_STATES.contains(&status)
    }

    pub fn all_healthy(&self) -> bool {
        self.services
            .values()
            .all(|status| Self::is_service_healthy(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_degraded_service() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status":"healthy","services":{"mongodb":"connected","llm":"ready","embeddings":"missing"}}"#,
        )
        .unwrap();

        assert_eq!(health.services.len(), 3);
        assert!(!health.all_healthy());
        assert!(HealthStatus::is_service_healthy("loaded"));
        assert!(!HealthStatus::is_service_healthy("missing"));
    }
}
