#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use snaplink::application::services::LinkService;
use snaplink::domain::entities::{NewUrlRecord, UrlRecord};
use snaplink::domain::repositories::UrlRepository;
use snaplink::error::AppError;
use snaplink::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// In-memory record store with the same contract as the Postgres
/// repository: atomic insert that fails on a duplicate short code, and a
/// lock-held click increment.
pub struct MemoryUrlRepository {
    records: Mutex<Vec<UrlRecord>>,
    next_id: AtomicI64,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn clicks_of(&self, code: &str) -> Option<i64> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_code == code)
            .map(|r| r.clicks)
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.lock().unwrap();

        if records
            .iter()
            .any(|r| r.short_code == new_record.short_code)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_short_code_key" }),
            ));
        }

        let record = UrlRecord::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            new_record.short_code,
            new_record.long_url,
            new_record.owner_id,
            0,
            Utc::now(),
        );
        records.push(record.clone());

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_code == code)
            .cloned())
    }

    async fn find_by_long_url(
        &self,
        long_url: &str,
        owner_id: Option<String>,
    ) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.long_url == long_url && r.owner_id == owner_id)
            .cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let mut records = self.records.lock().unwrap();

        Ok(records
            .iter_mut()
            .find(|r| r.short_code == code)
            .map(|r| {
                r.clicks += 1;
                r.clone()
            }))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<UrlRecord>, AppError> {
        let mut records: Vec<UrlRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.owner_id.as_deref() == Some(owner_id))
            .cloned()
            .collect();

        records.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(records)
    }
}

/// Builds an [`AppState`] backed by an in-memory store, returning the store
/// handle for direct assertions.
pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let link_service = Arc::new(LinkService::new(repository.clone()));
    let state = AppState::new(link_service, TEST_BASE_URL.to_string());

    (state, repository)
}
