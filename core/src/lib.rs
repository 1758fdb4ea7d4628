//! Client-side state synchronization core for a two-level to-do list
//! manager: named lists of checkable items, backed by a remote
//! authoritative store.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ChecklistClient` is stateless — it holds only `base_url`. Each remote
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - The stores layer local state on top: `ListCollectionStore` reconciles
//!   by full refetch, `ListDetailStore` by confirm-then-apply patch-merge,
//!   and `Navigator` composes the two behind a selection state machine with
//!   epoch-tagged in-flight loads.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::ChecklistClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{ListCollectionStore, ListDetailStore, LoadOutcome, LoadTicket, Navigator};
pub use types::{CheckedStateUpdate, CreatedList, Item, ListDetail, ListSummary, NewItem, NewList};
