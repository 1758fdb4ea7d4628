//! Domain DTOs for the list-manager API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Field names
//! (`item_count`, `label`, `checked`, `item_id`, `checked_state`) are part of
//! the wire contract and must not be renamed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Collection-level projection of one list: name and item count, no items.
///
/// Produced only by the collection endpoint. Summaries are replaced wholesale
/// on every reload and never mutated field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSummary {
    pub id: Uuid,
    pub name: String,
    pub item_count: u64,
}

/// Full projection of one list including its ordered items.
///
/// Item order is preserved exactly as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListDetail {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<Item>,
}

/// A labeled, checkable unit belonging to exactly one list.
///
/// Identity is the server-assigned `id`, never reused after deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub label: String,
    pub checked: bool,
}

/// Request payload for creating a new list. The server is authoritative on
/// rejecting invalid names; no client-side validation is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewList {
    pub name: String,
}

/// Response payload for list creation: the server-assigned id plus the name.
/// The new list's `item_count` is recovered by the follow-up reload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedList {
    pub id: Uuid,
    pub name: String,
}

/// Request payload for creating a new item within a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub label: String,
}

/// Request payload for the checked-state endpoint: flips exactly one item's
/// `checked` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckedStateUpdate {
    pub item_id: Uuid,
    pub checked_state: bool,
}
