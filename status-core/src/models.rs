use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service status values the incident policy knows about. The field
/// itself is an open string: updates may set any other value and it
/// round-trips untouched.
pub mod service_status {
    pub const OPERATIONAL: &str = "operational";
    pub const DEGRADED: &str = "degraded";
}

/// Incident status values that drive the service policy. Any other
/// value is stored as-is and triggers no policy.
pub mod incident_status {
    pub const INVESTIGATING: &str = "investigating";
    pub const IDENTIFIED: &str = "identified";
    pub const RESOLVED: &str = "resolved";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub service_id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn service_serializes_with_rfc3339_timestamp() {
        let service = Service {
            id: "svc-1".into(),
            name: "Website".into(),
            description: None,
            status: service_status::OPERATIONAL.into(),
            last_updated: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["status"], "operational");
        assert_eq!(value["description"], serde_json::Value::Null);
        assert_eq!(value["last_updated"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn unknown_status_round_trips() {
        let incident = Incident {
            id: "inc-1".into(),
            service_id: "svc-1".into(),
            title: "partial outage".into(),
            description: "checkout flow failing".into(),
            status: "monitoring".into(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&incident).unwrap();
        let back: Incident = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, "monitoring");
    }
}
