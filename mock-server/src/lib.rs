//! In-memory implementation of the remote authoritative store: named
//! to-do lists of checkable items behind the seven-endpoint HTTP contract.
//! Used as the test backend for `checklist-core` and runnable standalone.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub label: String,
    pub checked: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: Uuid,
    pub name: String,
    pub item_count: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListDetail {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<Item>,
}

#[derive(Deserialize)]
pub struct NewList {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedList {
    pub id: Uuid,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewItem {
    pub label: String,
}

#[derive(Deserialize)]
pub struct CheckedStateUpdate {
    pub item_id: Uuid,
    pub checked_state: bool,
}

/// Stored form of one list; `item_count` is computed from `items` at
/// listing time.
#[derive(Clone, Debug)]
pub struct StoredList {
    name: String,
    items: Vec<Item>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, StoredList>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/lists", get(list_lists).post(create_list))
        .route("/api/lists/{id}", get(get_list).delete(delete_list))
        // Trailing slash matches the wire contract; axum does not redirect.
        .route("/api/lists/{id}/items/", post(create_item))
        .route("/api/lists/{id}/items/{item_id}", delete(delete_item))
        .route("/api/lists/{id}/checked_state", patch(set_checked))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Summaries sorted by name for a stable display order.
async fn list_lists(State(db): State<Db>) -> Json<Vec<ListSummary>> {
    let lists = db.read().await;
    let mut summaries: Vec<ListSummary> = lists
        .iter()
        .map(|(id, list)| ListSummary {
            id: *id,
            name: list.name.clone(),
            item_count: list.items.len() as u64,
        })
        .collect();
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    Json(summaries)
}

async fn create_list(
    State(db): State<Db>,
    Json(input): Json<NewList>,
) -> (StatusCode, Json<CreatedList>) {
    let id = Uuid::new_v4();
    debug!(%id, name = %input.name, "create list");
    db.write().await.insert(
        id,
        StoredList {
            name: input.name.clone(),
            items: Vec::new(),
        },
    );
    (StatusCode::CREATED, Json(CreatedList { id, name: input.name }))
}

async fn get_list(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListDetail>, StatusCode> {
    let lists = db.read().await;
    let list = lists.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(ListDetail {
        id,
        name: list.name.clone(),
        items: list.items.clone(),
    }))
}

async fn delete_list(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut lists = db.write().await;
    lists
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>), StatusCode> {
    let mut lists = db.write().await;
    let list = lists.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let item = Item {
        id: Uuid::new_v4(),
        label: input.label,
        checked: false,
    };
    debug!(list_id = %id, item_id = %item.id, "create item");
    list.items.push(item.clone());
    Ok((StatusCode::CREATED, Json(item)))
}

async fn delete_item(
    State(db): State<Db>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, StatusCode> {
    let mut lists = db.write().await;
    let list = lists.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let before = list.items.len();
    list.items.retain(|item| item.id != item_id);
    if list.items.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn set_checked(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<CheckedStateUpdate>,
) -> Result<StatusCode, StatusCode> {
    let mut lists = db.write().await;
    let list = lists.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let item = list
        .items
        .iter_mut()
        .find(|item| item.id == input.item_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    item.checked = input.checked_state;
    Ok(StatusCode::NO_CONTENT)
}
