use crate::error::StoreError;
use crate::models::{incident_status, service_status, Service};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// In-memory service collection. Uniqueness checks are full scans; the
/// caller holds the store lock across the scan and the write, so the
/// check-then-insert sequence is atomic.
#[derive(Default)]
pub struct ServiceRegistry {
    services: Vec<Service>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insertion order.
    pub fn list(&self) -> Vec<Service> {
        self.services.clone()
    }

    pub fn get(&self, id: &str) -> Result<&Service, StoreError> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(StoreError::service_not_found)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.services.iter().any(|s| s.id == id)
    }

    pub fn create(
        &mut self,
        name: String,
        description: Option<String>,
        status: String,
    ) -> Result<Service, StoreError> {
        if self.services.iter().any(|s| s.name == name) {
            return Err(StoreError::duplicate_service_name());
        }

        let service = Service {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            status,
            last_updated: Utc::now(),
        };
        self.services.push(service.clone());
        Ok(service)
    }

    /// Overwrites every mutable field; `id` is preserved. Fails before
    /// touching the record.
    pub fn update(
        &mut self,
        id: &str,
        name: String,
        description: Option<String>,
        status: String,
    ) -> Result<Service, StoreError> {
        if self.contains(id) && self.services.iter().any(|s| s.name == name && s.id != id) {
            return Err(StoreError::duplicate_service_name());
        }

        let Some(service) = self.services.iter_mut().find(|s| s.id == id) else {
            return Err(StoreError::service_not_found());
        };
        service.name = name;
        service.description = description;
        service.status = status;
        service.last_updated = Utc::now();
        Ok(service.clone())
    }

    /// Fixed mapping from an incident's status at creation time to the
    /// referenced service's status. `last_updated` is stamped whether or
    /// not the status changed. The incident log validates `id` under the
    /// same lock before calling, so an unknown id is unreachable here.
    pub fn apply_incident_policy(
        &mut self,
        id: &str,
        incident_status: &str,
        timestamp: DateTime<Utc>,
    ) {
        let Some(service) = self.services.iter_mut().find(|s| s.id == id) else {
            return;
        };

        match incident_status {
            incident_status::INVESTIGATING | incident_status::IDENTIFIED => {
                service.status = service_status::DEGRADED.into();
            }
            incident_status::RESOLVED => {
                service.status = service_status::OPERATIONAL.into();
            }
            _ => {}
        }
        service.last_updated = timestamp;
    }
}
