//! Remote store synchronization
//!
//! Drives the per-collection cache against the API and runs the mutation
//! protocol: write, then invalidate, then notify. Nothing here mutates the
//! cached list directly; the refetch after an invalidation is the only way
//! a write becomes visible.

mod cache;
mod notify;

pub use cache::*;
pub use notify::*;

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use dioxus::prelude::{Signal, Writable};
use tracing::{debug, warn};

use crate::api::ResourceApi;
use crate::schema::Resource;

/// Mutable slot holding a piece of store state. The app keeps its state in
/// Dioxus signals; tests keep it in plain cells.
pub trait Slot<T> {
    fn apply<U>(&mut self, f: impl FnOnce(&mut T) -> U) -> U;
}

impl<T: 'static> Slot<T> for Signal<T> {
    fn apply<U>(&mut self, f: impl FnOnce(&mut T) -> U) -> U {
        self.with_mut(f)
    }
}

impl<T> Slot<T> for Rc<RefCell<T>> {
    fn apply<U>(&mut self, f: impl FnOnce(&mut T) -> U) -> U {
        f(&mut self.borrow_mut())
    }
}

/// Reopens the entry if the driving future is dropped before its fetch
/// settles, so a cancelled task cannot leave the entry marked in-flight
/// with nothing left to finish it.
struct ReopenOnDrop<R: Resource, C: Slot<ResourceCache<R>>> {
    cache: C,
    armed: bool,
    _marker: PhantomData<R>,
}

impl<R: Resource, C: Slot<ResourceCache<R>>> ReopenOnDrop<R, C> {
    fn new(cache: C) -> Self {
        Self { cache, armed: true, _marker: PhantomData }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<R: Resource, C: Slot<ResourceCache<R>>> Drop for ReopenOnDrop<R, C> {
    fn drop(&mut self) {
        if self.armed {
            self.cache.apply(|cache| cache.abort_fetch());
        }
    }
}

/// Read path: fetch the collection the first time a screen uses it.
pub async fn read_through<R, A, C>(api: &A, cache: &mut C)
where
    R: Resource,
    A: ResourceApi<R>,
    C: Slot<ResourceCache<R>> + Clone,
{
    if cache.apply(|cache| cache.begin_read()) {
        drive(api, cache).await;
    }
}

/// Mark the collection stale and refetch. Concurrent invalidations
/// collapse into whichever request is already running plus at most one
/// follow-up, so rapid mutations never stack duplicate fetches.
pub async fn invalidate<R, A, C>(api: &A, cache: &mut C)
where
    R: Resource,
    A: ResourceApi<R>,
    C: Slot<ResourceCache<R>> + Clone,
{
    if cache.apply(|cache| cache.invalidate()) {
        drive(api, cache).await;
    }
}

async fn drive<R, A, C>(api: &A, cache: &mut C)
where
    R: Resource,
    A: ResourceApi<R>,
    C: Slot<ResourceCache<R>> + Clone,
{
    let guard = ReopenOnDrop::new(cache.clone());
    loop {
        let result = api.list().await;
        if let Err(err) = &result {
            warn!(collection = R::COLLECTION, %err, "fetch failed");
        }
        if !cache.apply(|cache| cache.finish_fetch(result)) {
            break;
        }
    }
    guard.disarm();
}

/// Create a record, refresh the cache and notify. On failure the cache is
/// left untouched and the error travels through the notification channel;
/// the draft is gone either way and is never resubmitted automatically.
pub async fn create_record<R, A, C, N>(
    api: &A,
    cache: &mut C,
    notices: &mut N,
    body: R::Create,
    message: String,
) where
    R: Resource,
    A: ResourceApi<R>,
    C: Slot<ResourceCache<R>> + Clone,
    N: Slot<Notifier>,
{
    match api.create(&body).await {
        Ok(created) => {
            debug!(collection = R::COLLECTION, id = created.id(), "record created");
            invalidate(api, cache).await;
            notices.apply(|notices| notices.success(message));
        }
        Err(err) => {
            warn!(collection = R::COLLECTION, %err, "create failed");
            notices.apply(|notices| {
                notices.error(format!("Could not save {}: {err}", R::SINGULAR))
            });
        }
    }
}

/// Partial update of one record, covering both full edits and quick
/// actions. Same protocol as [`create_record`].
pub async fn update_record<R, A, C, N>(
    api: &A,
    cache: &mut C,
    notices: &mut N,
    id: &str,
    patch: R::Patch,
    message: String,
) where
    R: Resource,
    A: ResourceApi<R>,
    C: Slot<ResourceCache<R>> + Clone,
    N: Slot<Notifier>,
{
    match api.update(id, &patch).await {
        Ok(updated) => {
            debug!(collection = R::COLLECTION, id = updated.id(), "record updated");
            invalidate(api, cache).await;
            notices.apply(|notices| notices.success(message));
        }
        Err(err) => {
            warn!(collection = R::COLLECTION, %err, "update failed");
            notices.apply(|notices| {
                notices.error(format!("Could not save {}: {err}", R::SINGULAR))
            });
        }
    }
}
