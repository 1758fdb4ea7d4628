//! Local store for the collection of list summaries.
//!
//! # Design
//! The collection is reconciled by full refetch: create and delete never
//! synthesize or splice local state, they confirm the mutation and hand the
//! host a reload request. The canonical id and `item_count` of a new list
//! only exist server-side, so a wholesale reload is the cheapest way to stay
//! coherent, at the cost of one extra round trip per mutation. The displayed
//! collection is therefore never ahead of confirmed server state.

use tracing::debug;
use uuid::Uuid;

use crate::client::ChecklistClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreatedList, ListSummary, NewList};

/// Local view of all list summaries.
///
/// `summaries()` is `None` while loading (before the first reload settles)
/// and `Some` thereafter. Every `settle_*` method applies its state
/// transition only after the response confirms success; on any error the
/// prior state is left untouched.
#[derive(Debug, Clone)]
pub struct ListCollectionStore {
    client: ChecklistClient,
    summaries: Option<Vec<ListSummary>>,
}

impl ListCollectionStore {
    /// Create an empty store in the loading state. Call `begin_reload` to
    /// populate it.
    pub fn new(client: ChecklistClient) -> Self {
        Self {
            client,
            summaries: None,
        }
    }

    /// The current summaries, or `None` while the first reload is pending.
    pub fn summaries(&self) -> Option<&[ListSummary]> {
        self.summaries.as_deref()
    }

    pub fn begin_reload(&self) -> HttpRequest {
        self.client.build_list_lists()
    }

    /// Replace the summaries wholesale with the server's response,
    /// preserving its order. On failure the prior summaries stay in place.
    pub fn settle_reload(&mut self, response: HttpResponse) -> Result<(), ApiError> {
        let summaries = self.client.parse_list_lists(response)?;
        debug!(count = summaries.len(), "collection reloaded");
        self.summaries = Some(summaries);
        Ok(())
    }

    /// Build the create request. `name` may be empty; the server is
    /// authoritative on rejecting invalid names.
    pub fn begin_create(&self, name: &str) -> Result<HttpRequest, ApiError> {
        self.client.build_create_list(&NewList {
            name: name.to_string(),
        })
    }

    /// Confirm a create. On success returns the created list (carrying the
    /// server-assigned id) together with the follow-up reload request the
    /// host must execute; local state is not touched until that reload
    /// settles.
    pub fn settle_create(&self, response: HttpResponse) -> Result<(CreatedList, HttpRequest), ApiError> {
        let created = self.client.parse_create_list(response)?;
        debug!(id = %created.id, name = %created.name, "list created, reconciling");
        Ok((created, self.begin_reload()))
    }

    pub fn begin_delete(&self, id: Uuid) -> HttpRequest {
        self.client.build_delete_list(id)
    }

    /// Confirm a delete. On success returns the follow-up reload request;
    /// there is no optimistic removal, so a failed delete never shows a
    /// list as gone.
    pub fn settle_delete(&self, response: HttpResponse) -> Result<HttpRequest, ApiError> {
        self.client.parse_delete_list(response)?;
        debug!("list deleted, reconciling");
        Ok(self.begin_reload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn store() -> ListCollectionStore {
        ListCollectionStore::new(ChecklistClient::new("http://localhost:3001"))
    }

    fn ok_collection_body() -> String {
        r#"[{"id":"00000000-0000-0000-0000-000000000001","name":"Groceries","item_count":0},
            {"id":"00000000-0000-0000-0000-000000000002","name":"Work","item_count":3}]"#
            .to_string()
    }

    #[test]
    fn starts_loading() {
        assert!(store().summaries().is_none());
    }

    #[test]
    fn settle_reload_replaces_wholesale_preserving_order() {
        let mut store = store();
        store
            .settle_reload(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: ok_collection_body(),
            })
            .unwrap();
        let summaries = store.summaries().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Groceries");
        assert_eq!(summaries[1].name, "Work");
        assert_eq!(summaries[1].item_count, 3);

        // A later reload replaces everything, including removed lists.
        store
            .settle_reload(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: r#"[{"id":"00000000-0000-0000-0000-000000000002","name":"Work","item_count":4}]"#
                    .to_string(),
            })
            .unwrap();
        let summaries = store.summaries().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].item_count, 4);
    }

    #[test]
    fn settle_reload_failure_leaves_prior_state() {
        let mut store = store();
        store
            .settle_reload(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: ok_collection_body(),
            })
            .unwrap();

        let err = store
            .settle_reload(HttpResponse {
                status: 500,
                headers: Vec::new(),
                body: "boom".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        assert_eq!(store.summaries().unwrap().len(), 2);
    }

    #[test]
    fn create_allows_empty_name() {
        let req = store().begin_create("").unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "");
    }

    #[test]
    fn settle_create_returns_created_list_and_reload_request() {
        let store = store();
        let (created, reload) = store
            .settle_create(HttpResponse {
                status: 201,
                headers: Vec::new(),
                body: r#"{"id":"00000000-0000-0000-0000-000000000001","name":"Groceries"}"#
                    .to_string(),
            })
            .unwrap();
        assert_eq!(created.name, "Groceries");
        assert_eq!(reload.method, HttpMethod::Get);
        assert_eq!(reload.path, "http://localhost:3001/api/lists");
        // No optimistic insert: still loading until the reload settles.
        assert!(store.summaries().is_none());
    }

    #[test]
    fn settle_create_failure_surfaces_error() {
        let err = store()
            .settle_create(HttpResponse {
                status: 500,
                headers: Vec::new(),
                body: "boom".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn settle_delete_returns_reload_request() {
        let reload = store()
            .settle_delete(HttpResponse {
                status: 204,
                headers: Vec::new(),
                body: String::new(),
            })
            .unwrap();
        assert_eq!(reload.method, HttpMethod::Get);
        assert_eq!(reload.path, "http://localhost:3001/api/lists");
    }

    #[test]
    fn settle_delete_rejection_keeps_summaries() {
        let mut store = store();
        store
            .settle_reload(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: ok_collection_body(),
            })
            .unwrap();

        let _ = store.begin_delete(Uuid::nil());
        let err = store
            .settle_delete(HttpResponse {
                status: 404,
                headers: Vec::new(),
                body: String::new(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(store.summaries().unwrap().len(), 2);
    }
}
