//! Turns controller outcomes into HTTP responses.
//!
//! Rendered views are returned as `{"view": ..., "model": {...}}` for a
//! template layer to consume. The vet list is added to every model here,
//! so controllers never need to remember it.

use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use petclinic_core::{ClinicRepository, Outcome, VisitController};
use serde_json::json;

use crate::error::WebError;

/// Build the response for `outcome`, loading vets for renders.
pub fn respond<R>(repo: &R, outcome: Outcome) -> Result<Response, WebError>
where
    R: ClinicRepository + ?Sized,
{
    match outcome {
        Outcome::Redirect(location) => Ok(Redirect::to(&location).into_response()),
        Outcome::Render { view, model } => {
            let mut model = serde_json::to_value(&model)?;
            model["vets"] = serde_json::to_value(VisitController::new(repo).vet_types()?)?;

            Ok(Json(json!({ "view": view, "model": model })).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use petclinic_core::controller::VISIT_FORM_VIEW;
    use petclinic_core::{Database, ViewModel};

    fn seeded_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.seed_sample_data().unwrap();
        db
    }

    #[test]
    fn test_redirect_is_see_other() {
        let db = seeded_db();
        let response = respond(&db, Outcome::redirect_to_owner(5)).unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/owners/5");
    }

    #[tokio::test]
    async fn test_render_includes_vets() {
        let db = seeded_db();
        let outcome = Outcome::Render {
            view: VISIT_FORM_VIEW,
            model: ViewModel::default(),
        };

        let response = respond(&db, outcome).unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["view"], VISIT_FORM_VIEW);
        assert_eq!(body["model"]["vets"].as_array().unwrap().len(), 6);
        assert_eq!(body["model"]["errors"], json!([]));
    }
}
