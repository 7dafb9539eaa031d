use crate::error::StoreError;
use crate::models::Incident;
use crate::registry::ServiceRegistry;
use chrono::Utc;
use uuid::Uuid;

/// In-memory incident collection. Creation validates the service
/// reference and drives the registry policy; the caller holds the store
/// lock for the whole sequence, making it one critical section.
#[derive(Default)]
pub struct IncidentLog {
    incidents: Vec<Incident>,
}

impl IncidentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent first. The sort is stable over the insertion-ordered
    /// backing vec, so incidents sharing a timestamp keep insertion order.
    pub fn list(&self) -> Vec<Incident> {
        let mut incidents = self.incidents.clone();
        incidents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        incidents
    }

    pub fn get(&self, id: &str) -> Result<&Incident, StoreError> {
        self.incidents
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(StoreError::incident_not_found)
    }

    /// Fails before storing anything if `service_id` does not resolve.
    /// The registry policy runs after the insert with the incident's own
    /// `created_at`; existence was just checked under the same lock, so
    /// the policy step cannot miss.
    pub fn create(
        &mut self,
        registry: &mut ServiceRegistry,
        service_id: String,
        title: String,
        description: String,
        status: String,
    ) -> Result<Incident, StoreError> {
        if !registry.contains(&service_id) {
            return Err(StoreError::service_not_found());
        }

        let incident = Incident {
            id: Uuid::new_v4().to_string(),
            service_id,
            title,
            description,
            status,
            created_at: Utc::now(),
        };
        self.incidents.push(incident.clone());

        registry.apply_incident_policy(&incident.service_id, &incident.status, incident.created_at);
        Ok(incident)
    }
}
