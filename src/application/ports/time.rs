// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the generation timestamp written into edit scripts.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
