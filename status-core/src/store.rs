use crate::incidents::IncidentLog;
use crate::models::{incident_status, service_status};
use crate::registry::ServiceRegistry;

/// The single store shared by all request handlers. Constructed once at
/// startup and passed by handle; the server serializes access with a
/// mutex around the whole value so cross-collection operations stay in
/// one critical section.
#[derive(Default)]
pub struct StatusStore {
    pub services: ServiceRegistry,
    pub incidents: IncidentLog,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample data loaded at process start.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        let website = store
            .services
            .create(
                "Website".into(),
                Some("Main company website".into()),
                service_status::OPERATIONAL.into(),
            )
            .expect("seed services into empty store");
        store
            .services
            .create(
                "API Service".into(),
                Some("REST API endpoints".into()),
                service_status::OPERATIONAL.into(),
            )
            .expect("seed services into empty store");

        store
            .incidents
            .create(
                &mut store.services,
                website.id,
                "High Latency Issues".into(),
                "Users experiencing slower response times".into(),
                incident_status::RESOLVED.into(),
            )
            .expect("seed incident against seeded service");

        store
    }
}
