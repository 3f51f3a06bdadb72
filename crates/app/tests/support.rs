#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use symposium_core::{IdentityProvider, TokenIssuer};
use symposium_domain::{ApiConfig, AppConfig, AuthToken, Identity, Result, RetryConfig};
use symposium_app::AppContext;
use symposium_infra::{InMemoryDocumentStore, SessionIdentity};

pub struct FixedIssuer;

#[async_trait]
impl TokenIssuer for FixedIssuer {
    async fn issue(&self, identity: &Identity, _force_refresh: bool) -> Result<AuthToken> {
        Ok(AuthToken::new(format!("token-{}", identity.uid)))
    }
}

/// Everything a command test needs, kept alive together.
pub struct TestApp {
    pub ctx: AppContext,
    pub session: Arc<SessionIdentity>,
    pub store: Arc<InMemoryDocumentStore>,
}

/// Config pointing at `base_url` with millisecond retry waits.
pub fn test_config(base_url: Option<&str>) -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: base_url.map(str::to_string),
            retry: RetryConfig { max_attempts: 3, delays_ms: vec![5, 10, 20] },
            ..ApiConfig::default()
        },
        ..AppConfig::default()
    }
}

/// Context over a signed-out session, so requests never wait on identity.
pub fn test_app(base_url: Option<&str>) -> TestApp {
    let session = Arc::new(SessionIdentity::new(Arc::new(FixedIssuer)));
    session.sign_out();
    let store = Arc::new(InMemoryDocumentStore::new());
    let identity: Arc<dyn IdentityProvider> = session.clone();
    let ctx = AppContext::new(test_config(base_url), Some(identity), store.clone())
        .expect("context should build");
    TestApp { ctx, session, store }
}

pub fn asha() -> Identity {
    Identity::new("u-asha").with_email("asha@example.org").with_display_name("Asha")
}

pub fn event_json(id: &str, min: u32, max: u32, fee: Option<f64>) -> Value {
    json!({
        "event_id": id,
        "title": "Code Sprint",
        "description": "24h hackathon",
        "category": "technical",
        "date": "2026-03-14",
        "time": "09:00",
        "image_url": "/img/code-sprint.png",
        "max_participants": null,
        "min_team_size": min,
        "max_team_size": max,
        "registration_fee": fee,
        "status": "open",
        "created_at": "2026-01-01T00:00:00Z"
    })
}

pub fn workshop_json(id: &str) -> Value {
    json!({
        "workshop_id": id,
        "title": "Rust 101",
        "description": "Intro to Rust",
        "instructor": "Ferris",
        "date": "2026-03-15",
        "time": "10:00",
        "duration": "3h",
        "image_url": "/img/rust.png",
        "max_participants": 40,
        "registration_fee": 200.0,
        "status": "open",
        "created_at": "2026-01-01T00:00:00Z"
    })
}
