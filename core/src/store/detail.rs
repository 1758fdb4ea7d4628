//! Local store for one list's full detail.
//!
//! # Design
//! Unlike the collection store, mutations here reconcile by patch-merge
//! rather than refetch: the item set of a single list is cheap to keep
//! synchronized locally (append the created item, remove the deleted one,
//! rewrite one checked flag), and no other client is assumed to mutate the
//! same list concurrently. The discipline is confirm-then-apply uniformly:
//! every `settle_*` method checks the response for success first and only
//! then mutates local state, so a rejected mutation never diverges the local
//! view from the server.

use tracing::debug;
use uuid::Uuid;

use crate::client::ChecklistClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CheckedStateUpdate, ListDetail, NewItem};

/// Local view of one list's detail, bound to a single `list_id` for its
/// whole lifetime. A selection change constructs a fresh store; see
/// `Navigator`.
///
/// `detail()` is `None` while the initial load is pending.
#[derive(Debug, Clone)]
pub struct ListDetailStore {
    client: ChecklistClient,
    list_id: Uuid,
    detail: Option<ListDetail>,
}

impl ListDetailStore {
    pub fn new(client: ChecklistClient, list_id: Uuid) -> Self {
        Self {
            client,
            list_id,
            detail: None,
        }
    }

    /// The list this store is bound to.
    pub fn list_id(&self) -> Uuid {
        self.list_id
    }

    /// The loaded detail, or `None` while loading.
    pub fn detail(&self) -> Option<&ListDetail> {
        self.detail.as_ref()
    }

    pub fn begin_load(&self) -> HttpRequest {
        self.client.build_get_list(self.list_id)
    }

    /// Replace the detail wholesale with the server's response.
    pub fn settle_load(&mut self, response: HttpResponse) -> Result<(), ApiError> {
        let detail = self.client.parse_get_list(response)?;
        debug!(list_id = %self.list_id, items = detail.items.len(), "detail loaded");
        self.detail = Some(detail);
        Ok(())
    }

    /// Build the item-create request, or `None` for an empty label (no call
    /// is issued; the collection-level name has no such guard because the
    /// server owns name validation).
    pub fn begin_create_item(&self, label: &str) -> Result<Option<HttpRequest>, ApiError> {
        if label.is_empty() {
            return Ok(None);
        }
        let req = self.client.build_create_item(
            self.list_id,
            &NewItem {
                label: label.to_string(),
            },
        )?;
        Ok(Some(req))
    }

    /// Confirm an item create and append the returned item (carrying the
    /// server-assigned id) to the local sequence. No reload.
    pub fn settle_create_item(&mut self, response: HttpResponse) -> Result<(), ApiError> {
        let item = self.client.parse_create_item(response)?;
        debug!(list_id = %self.list_id, item_id = %item.id, "item appended");
        if let Some(detail) = &mut self.detail {
            detail.items.push(item);
        }
        Ok(())
    }

    pub fn begin_delete_item(&self, item_id: Uuid) -> HttpRequest {
        self.client.build_delete_item(self.list_id, item_id)
    }

    /// Confirm an item delete and remove the matching item locally. A
    /// rejected delete leaves the sequence untouched, so an item is never
    /// shown as gone while it still exists server-side.
    pub fn settle_delete_item(&mut self, item_id: Uuid, response: HttpResponse) -> Result<(), ApiError> {
        self.client.parse_delete_item(response)?;
        debug!(list_id = %self.list_id, item_id = %item_id, "item removed");
        if let Some(detail) = &mut self.detail {
            detail.items.retain(|item| item.id != item_id);
        }
        Ok(())
    }

    pub fn begin_toggle_checked(&self, item_id: Uuid, checked: bool) -> Result<HttpRequest, ApiError> {
        self.client.build_set_checked(
            self.list_id,
            &CheckedStateUpdate {
                item_id,
                checked_state: checked,
            },
        )
    }

    /// Confirm a checked-state update and rewrite the matching item's
    /// `checked` flag, leaving order and all other items untouched. At most
    /// one item matches; duplicate ids within a list are out of contract.
    pub fn settle_toggle_checked(
        &mut self,
        item_id: Uuid,
        checked: bool,
        response: HttpResponse,
    ) -> Result<(), ApiError> {
        self.client.parse_set_checked(response)?;
        debug!(list_id = %self.list_id, item_id = %item_id, checked, "checked state applied");
        if let Some(detail) = &mut self.detail {
            for item in &mut detail.items {
                if item.id == item_id {
                    item.checked = checked;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_id() -> Uuid {
        "00000000-0000-0000-0000-000000000001".parse().unwrap()
    }

    fn item_id(n: u8) -> Uuid {
        Uuid::from_u128(0x70 + n as u128)
    }

    fn store() -> ListDetailStore {
        ListDetailStore::new(ChecklistClient::new("http://localhost:3001"), list_id())
    }

    fn loaded_store() -> ListDetailStore {
        let mut store = store();
        let body = serde_json::json!({
            "id": list_id(),
            "name": "Groceries",
            "items": [
                {"id": item_id(1), "label": "Milk", "checked": false},
                {"id": item_id(2), "label": "Eggs", "checked": true},
            ],
        });
        store
            .settle_load(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: body.to_string(),
            })
            .unwrap();
        store
    }

    fn no_content() -> HttpResponse {
        HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    fn not_found() -> HttpResponse {
        HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn begin_load_targets_bound_list() {
        let req = store().begin_load();
        assert_eq!(
            req.path,
            "http://localhost:3001/api/lists/00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn settle_load_replaces_wholesale() {
        let store = loaded_store();
        let detail = store.detail().unwrap();
        assert_eq!(detail.name, "Groceries");
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.items[0].label, "Milk");
    }

    #[test]
    fn settle_load_failure_keeps_prior_detail() {
        let mut store = loaded_store();
        let err = store
            .settle_load(HttpResponse {
                status: 500,
                headers: Vec::new(),
                body: "boom".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        assert_eq!(store.detail().unwrap().items.len(), 2);
    }

    #[test]
    fn empty_label_skips_the_call() {
        assert!(store().begin_create_item("").unwrap().is_none());
        assert!(store().begin_create_item("Milk").unwrap().is_some());
    }

    #[test]
    fn settle_create_item_appends_server_item() {
        let mut store = loaded_store();
        let body = serde_json::json!({"id": item_id(3), "label": "Bread", "checked": false});
        store
            .settle_create_item(HttpResponse {
                status: 201,
                headers: Vec::new(),
                body: body.to_string(),
            })
            .unwrap();
        let items = &store.detail().unwrap().items;
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].label, "Bread");
        assert_eq!(items[2].id, item_id(3));
    }

    #[test]
    fn settle_create_item_failure_leaves_items() {
        let mut store = loaded_store();
        let err = store
            .settle_create_item(HttpResponse {
                status: 500,
                headers: Vec::new(),
                body: "boom".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { .. }));
        assert_eq!(store.detail().unwrap().items.len(), 2);
    }

    #[test]
    fn settle_delete_item_removes_exactly_one_match() {
        let mut store = loaded_store();
        store.settle_delete_item(item_id(1), no_content()).unwrap();
        let items = &store.detail().unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Eggs");
    }

    #[test]
    fn rejected_delete_is_a_local_no_op() {
        let mut store = loaded_store();
        let err = store.settle_delete_item(item_id(9), not_found()).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(store.detail().unwrap().items.len(), 2);
    }

    #[test]
    fn toggle_rewrites_only_the_matching_item() {
        let mut store = loaded_store();
        store
            .settle_toggle_checked(item_id(1), true, no_content())
            .unwrap();
        let items = &store.detail().unwrap().items;
        assert!(items[0].checked);
        assert_eq!(items[0].label, "Milk");
        assert!(items[1].checked); // untouched
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn toggle_twice_is_idempotent_and_preserves_order() {
        let mut store = loaded_store();
        store
            .settle_toggle_checked(item_id(1), true, no_content())
            .unwrap();
        store
            .settle_toggle_checked(item_id(1), true, no_content())
            .unwrap();
        let items = &store.detail().unwrap().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Milk");
        assert!(items[0].checked);
        assert_eq!(items[1].label, "Eggs");
    }

    #[test]
    fn rejected_toggle_leaves_checked_state() {
        let mut store = loaded_store();
        let err = store
            .settle_toggle_checked(item_id(1), true, not_found())
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert!(!store.detail().unwrap().items[0].checked);
    }
}
