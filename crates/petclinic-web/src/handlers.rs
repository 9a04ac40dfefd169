//! Axum handlers for the visit and owner routes.
//!
//! Each handler hands one controller operation to [`AppState::with_db`],
//! which runs it and builds the response while the database lock is held.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::{Form, Json};
use petclinic_core::{OwnerController, VisitController, VisitForm};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::WebError;
use crate::view;
use crate::AppState;

/// `action` parameter of the edit route, from the query string.
#[derive(Debug, Default, Deserialize)]
pub struct ActionQuery {
    pub action: Option<String>,
}

/// Body of the edit route: visit fields plus an optional `action`.
#[derive(Debug, Default, Deserialize)]
pub struct EditVisitBody {
    #[serde(flatten)]
    pub visit: VisitForm,
    pub action: Option<String>,
}

// GET /owners/:owner_id/pets/:pet_id/visits/new
pub async fn init_new_visit_form(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(i64, i64)>,
) -> Result<Response, WebError> {
    debug!(owner_id, pet_id, "new visit form");
    state
        .with_db(move |db| {
            let outcome = VisitController::new(db).init_new_visit_form(owner_id, pet_id)?;
            view::respond(db, outcome)
        })
        .await
}

// POST /owners/:owner_id/pets/:pet_id/visits/new
pub async fn process_new_visit_form(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(i64, i64)>,
    Form(form): Form<VisitForm>,
) -> Result<Response, WebError> {
    debug!(owner_id, pet_id, "submit new visit");
    state
        .with_db(move |db| {
            let outcome =
                VisitController::new(db).process_new_visit_form(owner_id, pet_id, &form)?;
            view::respond(db, outcome)
        })
        .await
}

// GET /owners/:owner_id/pets/:pet_id/visits/:visit_id/edit
pub async fn init_edit_visit_form(
    State(state): State<AppState>,
    Path((owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
) -> Result<Response, WebError> {
    debug!(owner_id, pet_id, visit_id, "edit visit form");
    state
        .with_db(move |db| {
            let outcome =
                VisitController::new(db).init_edit_visit_form(owner_id, pet_id, visit_id)?;
            view::respond(db, outcome)
        })
        .await
}

// POST /owners/:owner_id/pets/:pet_id/visits/:visit_id/edit
pub async fn process_edit_visit_form(
    State(state): State<AppState>,
    Path((owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
    Query(query): Query<ActionQuery>,
    Form(body): Form<EditVisitBody>,
) -> Result<Response, WebError> {
    // The query string wins over a body field of the same name
    let action = query
        .action
        .or(body.action)
        .ok_or_else(|| WebError::BadRequest("missing required parameter `action`".into()))?;
    debug!(owner_id, pet_id, visit_id, action, "submit visit edit");

    let form = body.visit;
    state
        .with_db(move |db| {
            let outcome = VisitController::new(db)
                .process_edit_visit_form(owner_id, pet_id, visit_id, &form, &action)?;
            view::respond(db, outcome)
        })
        .await
}

// GET /owners/:owner_id/pets/:pet_id/visits/:visit_id/return
pub async fn init_return_visit_form(
    State(state): State<AppState>,
    Path((owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
) -> Result<Response, WebError> {
    debug!(owner_id, pet_id, visit_id, "return visit");
    state
        .with_db(move |db| {
            let outcome =
                VisitController::new(db).init_return_visit_form(owner_id, pet_id, visit_id)?;
            view::respond(db, outcome)
        })
        .await
}

// GET /owners/:owner_id
pub async fn show_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i64>,
) -> Result<Response, WebError> {
    debug!(owner_id, "owner details");
    state
        .with_db(move |db| {
            let outcome = OwnerController::new(db).show_owner(owner_id)?;
            view::respond(db, outcome)
        })
        .await
}

// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
