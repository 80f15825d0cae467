// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps stamped onto created, updated and soft-deleted records.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
