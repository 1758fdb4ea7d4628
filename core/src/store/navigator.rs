//! Top-level navigation state machine and composition point.
//!
//! # Design
//! Two states — the collection view and one selected list's detail view —
//! with two transitions, `select` and `back`, each carrying its side effect
//! (the reload or load request the host must execute) explicitly in its
//! return value. The detail store exists exactly while a list is selected,
//! which makes the "detail is loaded iff a list is selected" invariant
//! structural rather than checked.
//!
//! In-flight detail loads are tagged with a selection epoch. Every
//! transition bumps the epoch, so a response that arrives after the user has
//! navigated away (or re-selected) no longer matches and is discarded
//! without touching state. This is the only cancellation mechanism; there
//! are no timeouts, and an unanswered request simply leaves the detail view
//! loading.

use tracing::debug;
use uuid::Uuid;

use crate::client::ChecklistClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::store::collection::ListCollectionStore;
use crate::store::detail::ListDetailStore;

/// Tag for one in-flight detail load, captured at issue time. Pass it back
/// to `settle_detail_load` together with the host's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// Result of settling a detail load: either the response was applied to the
/// currently selected list, or it belonged to a superseded selection and was
/// discarded. `Stale` is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Stale,
}

/// Routes between the collection view and a selected list's detail view.
///
/// Owns both stores; callers reach the active one through `collection` /
/// `detail` accessors and drive transitions through `select` and `back`.
#[derive(Debug)]
pub struct Navigator {
    client: ChecklistClient,
    collection: ListCollectionStore,
    detail: Option<ListDetailStore>,
    epoch: u64,
}

impl Navigator {
    /// Start in the collection view, with the collection loading. The host
    /// should execute `collection().begin_reload()` to populate it.
    pub fn new(client: ChecklistClient) -> Self {
        let collection = ListCollectionStore::new(client.clone());
        Self {
            client,
            collection,
            detail: None,
            epoch: 0,
        }
    }

    /// The selected list id, or `None` in the collection view.
    pub fn selection(&self) -> Option<Uuid> {
        self.detail.as_ref().map(|store| store.list_id())
    }

    pub fn collection(&self) -> &ListCollectionStore {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut ListCollectionStore {
        &mut self.collection
    }

    pub fn detail(&self) -> Option<&ListDetailStore> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut ListDetailStore> {
        self.detail.as_mut()
    }

    /// Select a list: construct a fresh detail store bound to `id` (any
    /// previous one is destroyed) and return the detail-load request plus
    /// the ticket identifying it.
    pub fn select(&mut self, id: Uuid) -> (HttpRequest, LoadTicket) {
        self.epoch += 1;
        debug!(list_id = %id, epoch = self.epoch, "selecting list");
        let store = ListDetailStore::new(self.client.clone(), id);
        let request = store.begin_load();
        self.detail = Some(store);
        (request, LoadTicket { epoch: self.epoch })
    }

    /// Return to the collection view: destroy the detail store and return
    /// the collection reload request (counts may have changed while the
    /// list was open).
    pub fn back(&mut self) -> HttpRequest {
        self.epoch += 1;
        debug!(epoch = self.epoch, "back to collection");
        self.detail = None;
        self.collection.begin_reload()
    }

    /// Settle a detail load issued by `select`. A response whose ticket no
    /// longer matches the current epoch is discarded as `Stale` without
    /// touching any state.
    pub fn settle_detail_load(
        &mut self,
        ticket: LoadTicket,
        response: HttpResponse,
    ) -> Result<LoadOutcome, ApiError> {
        if ticket.epoch != self.epoch {
            debug!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "discarding stale detail load"
            );
            return Ok(LoadOutcome::Stale);
        }
        // Tickets are only issued by `select`, which binds a detail store
        // and bumps the epoch, so a current-epoch ticket always has one.
        let Some(store) = self.detail.as_mut() else {
            return Ok(LoadOutcome::Stale);
        };
        store.settle_load(response)?;
        Ok(LoadOutcome::Applied)
    }
}
