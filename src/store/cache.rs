//! Read-through cache for one resource collection
//!
//! One entry exists per resource type for the whole session. The entry is
//! a plain state machine; the async driving lives in the store functions
//! so the same logic runs under Dioxus signals and under plain test cells.

use chrono::{DateTime, Utc};

use crate::api::ClientError;
use crate::schema::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCache<R: Resource> {
    records: Vec<R>,
    status: FetchStatus,
    fetched_at: Option<DateTime<Utc>>,
    /// At most one request is outstanding at any time.
    in_flight: bool,
    /// An invalidation not yet satisfied by a fetch issued after it.
    stale: bool,
}

impl<R: Resource> ResourceCache<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            status: FetchStatus::Idle,
            fetched_at: None,
            in_flight: false,
            stale: true,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Read path: start a fetch the first time the entry is used. Returns
    /// whether the caller must drive a request. Settled entries (including
    /// errored ones) are left alone so renders never trigger refetch loops.
    pub fn begin_read(&mut self) -> bool {
        self.try_start()
    }

    /// Mark the entry stale. Returns whether the caller must drive a
    /// request now; while one is in flight the invalidation is absorbed
    /// and satisfied by the single follow-up fetch issued when the
    /// in-flight one settles.
    pub fn invalidate(&mut self) -> bool {
        self.stale = true;
        self.try_start()
    }

    fn try_start(&mut self) -> bool {
        if self.in_flight || !self.stale {
            return false;
        }
        self.stale = false;
        self.in_flight = true;
        self.status = FetchStatus::Loading;
        true
    }

    /// A driver was dropped before its fetch settled (the owning scope
    /// went away). Reopen the entry so the next read or invalidate starts
    /// a fresh request instead of waiting on a response that will never
    /// arrive.
    pub fn abort_fetch(&mut self) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        self.stale = true;
        self.status = FetchStatus::Idle;
    }

    /// Apply a settled fetch. Success replaces the records wholesale;
    /// failure keeps the previous records visible. Returns whether an
    /// invalidation arrived mid-flight and the caller must issue exactly
    /// one more request.
    pub fn finish_fetch(&mut self, result: Result<Vec<R>, ClientError>) -> bool {
        match result {
            Ok(records) => {
                self.records = records;
                self.fetched_at = Some(Utc::now());
                self.status = FetchStatus::Idle;
            }
            Err(_) => {
                self.status = FetchStatus::Error;
            }
        }

        if self.stale {
            self.stale = false;
            self.status = FetchStatus::Loading;
            true
        } else {
            self.in_flight = false;
            false
        }
    }
}

impl<R: Resource> Default for ResourceCache<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gender, User};

    fn sample(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Alice".to_string(),
            gender: Gender::Female,
            banned: false,
        }
    }

    #[test]
    fn test_first_read_starts_a_fetch_once() {
        let mut cache = ResourceCache::<User>::new();
        assert!(cache.begin_read());
        assert_eq!(cache.status(), FetchStatus::Loading);
        // Re-render while loading must not stack a second request.
        assert!(!cache.begin_read());
    }

    #[test]
    fn test_settled_read_does_not_refetch() {
        let mut cache = ResourceCache::<User>::new();
        cache.begin_read();
        assert!(!cache.finish_fetch(Ok(vec![sample("u1")])));
        assert_eq!(cache.status(), FetchStatus::Idle);
        assert!(cache.fetched_at().is_some());
        assert!(!cache.begin_read());
    }

    #[test]
    fn test_invalidations_during_flight_collapse_to_one_follow_up() {
        let mut cache = ResourceCache::<User>::new();
        assert!(cache.begin_read());
        assert!(!cache.invalidate());
        assert!(!cache.invalidate());
        // The settled fetch owes both invalidations exactly one request.
        assert!(cache.finish_fetch(Ok(vec![])));
        assert!(!cache.finish_fetch(Ok(vec![sample("u1")])));
        assert_eq!(cache.status(), FetchStatus::Idle);
        assert_eq!(cache.records().len(), 1);
    }

    #[test]
    fn test_invalidate_when_idle_starts_immediately() {
        let mut cache = ResourceCache::<User>::new();
        cache.begin_read();
        cache.finish_fetch(Ok(vec![]));
        assert!(cache.invalidate());
        assert_eq!(cache.status(), FetchStatus::Loading);
    }

    #[test]
    fn test_aborted_fetch_reopens_the_entry() {
        let mut cache = ResourceCache::<User>::new();
        assert!(cache.begin_read());
        cache.abort_fetch();
        assert_eq!(cache.status(), FetchStatus::Idle);

        // The entry must not stay stuck waiting on a response that never
        // comes; reads and invalidations work again immediately.
        assert!(cache.begin_read());
        assert_eq!(cache.status(), FetchStatus::Loading);
    }

    #[test]
    fn test_abort_keeps_previously_fetched_records() {
        let mut cache = ResourceCache::<User>::new();
        cache.begin_read();
        cache.finish_fetch(Ok(vec![sample("u1")]));

        cache.invalidate();
        cache.abort_fetch();
        assert_eq!(cache.records().len(), 1);
        assert!(cache.invalidate());
    }

    #[test]
    fn test_abort_without_a_flight_is_a_no_op() {
        let mut cache = ResourceCache::<User>::new();
        cache.begin_read();
        cache.finish_fetch(Ok(vec![sample("u1")]));

        cache.abort_fetch();
        assert_eq!(cache.status(), FetchStatus::Idle);
        // A settled entry stays settled.
        assert!(!cache.begin_read());
    }

    #[test]
    fn test_fetch_error_keeps_stale_records_visible() {
        let mut cache = ResourceCache::<User>::new();
        cache.begin_read();
        cache.finish_fetch(Ok(vec![sample("u1")]));

        cache.invalidate();
        assert!(!cache.finish_fetch(Err(ClientError::Rejected("502 Bad Gateway".to_string()))));
        assert_eq!(cache.status(), FetchStatus::Error);
        assert_eq!(cache.records().len(), 1);
        // No automatic retry; only an explicit invalidate re-attempts.
        assert!(!cache.begin_read());
        assert!(cache.invalidate());
    }
}
