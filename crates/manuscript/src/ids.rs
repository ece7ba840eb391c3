use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of entity identifiers. Injected into every `add` operation so
/// callers (and tests) control how ids are minted.
pub trait IdProvider {
    fn next_id(&self) -> String;
}

/// Collision-resistant random ids. The default choice.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Millisecond wall-clock ids. Two additions within the same clock tick
/// can collide; kept for compatibility with documents created that way.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClockIds;

impl IdProvider for WallClockIds {
    fn next_id(&self) -> String {
        chrono::Utc::now().timestamp_millis().to_string()
    }
}

/// Deterministic counter ids, mainly for tests and import tooling.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
