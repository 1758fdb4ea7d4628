//! Local state stores synchronized against the remote authoritative store.
//!
//! Two reconciliation policies coexist, chosen per entity set:
//! - the collection store refetches wholesale after every confirmed
//!   mutation (canonical ids and counts live server-side);
//! - the detail store patch-merges confirmed mutations into its item
//!   sequence (a single list is cheap to keep synchronized locally).
//!
//! `Navigator` is the sole composition point; the stores do not depend on
//! each other.

pub mod collection;
pub mod detail;
pub mod navigator;

pub use collection::ListCollectionStore;
pub use detail::ListDetailStore;
pub use navigator::{LoadOutcome, LoadTicket, Navigator};
