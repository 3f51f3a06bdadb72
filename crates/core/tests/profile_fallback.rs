mod support;

use symposium_core::{ProfileService, ProfileSource};
use support::{event_registration, workshop_registration, MockApi, MockStore};

#[tokio::test]
async fn api_is_the_primary_source() {
    let api = MockApi::new();
    let store = MockStore::new();
    let service = ProfileService::new(api.clone(), store);

    let snapshot = service.load("asha@example.org").await;

    assert_eq!(snapshot.source, ProfileSource::Api);
    assert_eq!(snapshot.profile.map(|p| p.email), Some("asha@example.org".to_string()));
    assert_eq!(snapshot.events.len(), 1);
}

#[tokio::test]
async fn api_failure_falls_back_to_store_by_email() {
    let api = MockApi::new();
    *api.profile_available.lock() = false;
    let store = MockStore::new();
    store.events.lock().push(event_registration("code-sprint", "asha@example.org"));
    store.events.lock().push(event_registration("robo-race", "someone@example.org"));
    store.workshops.lock().push(workshop_registration("rust-robotics", "asha@example.org"));
    let mut pending = workshop_registration("iot-lab", "asha@example.org");
    pending.status = "pending".into();
    store.workshops.lock().push(pending);
    let service = ProfileService::new(api, store);

    let snapshot = service.load("asha@example.org").await;

    assert_eq!(snapshot.source, ProfileSource::DocumentStore);
    assert!(snapshot.profile.is_none());
    assert_eq!(snapshot.events.len(), 1);
    assert_eq!(snapshot.events[0].event_id, "code-sprint");
    assert_eq!(snapshot.workshops.len(), 1);
    assert_eq!(snapshot.workshops[0].workshop_id, "rust-robotics");
}

#[tokio::test]
async fn store_failure_yields_empty_lists() {
    let api = MockApi::new();
    *api.profile_available.lock() = false;
    let store = MockStore::new();
    *store.failing.lock() = true;
    let service = ProfileService::new(api, store);

    let snapshot = service.load("asha@example.org").await;

    assert_eq!(snapshot.source, ProfileSource::DocumentStore);
    assert!(snapshot.events.is_empty());
    assert!(snapshot.workshops.is_empty());
}
