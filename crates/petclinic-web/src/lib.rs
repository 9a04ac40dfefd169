//! Pet Clinic HTTP front end
//!
//! Routes visit and owner requests onto the controllers in
//! [`petclinic_core`] and renders their outcomes.
//!
//! | Method | Path                                                    | Handler                     |
//! |--------|---------------------------------------------------------|-----------------------------|
//! | GET    | `/owners/:owner_id/pets/:pet_id/visits/new`             | new visit form              |
//! | POST   | `/owners/:owner_id/pets/:pet_id/visits/new`             | create visit                |
//! | GET    | `/owners/:owner_id/pets/:pet_id/visits/:visit_id/edit`  | edit visit form             |
//! | POST   | `/owners/:owner_id/pets/:pet_id/visits/:visit_id/edit`  | update visit                |
//! | GET    | `/owners/:owner_id/pets/:pet_id/visits/:visit_id/return`| mark visit active           |
//! | GET    | `/owners/:owner_id`                                     | owner details               |
//! | GET    | `/health`                                               | liveness                    |

pub mod config;
pub mod error;
pub mod handlers;
pub mod view;

use std::sync::{Arc, Mutex};

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use petclinic_core::Database;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::error::WebError;

pub use config::{Cli, ConfigError, ServerConfig};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Run `f` with the database locked, on the blocking thread pool.
    pub async fn with_db<T, F>(&self, f: F) -> Result<T, WebError>
    where
        F: FnOnce(&Database) -> Result<T, WebError> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let db = db.lock()?;
            f(&db)
        })
        .await?
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/new",
            get(handlers::init_new_visit_form).post(handlers::process_new_visit_form),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/:visit_id/edit",
            get(handlers::init_edit_visit_form).post(handlers::process_edit_visit_form),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/:visit_id/return",
            get(handlers::init_return_visit_form),
        )
        .route("/owners/:owner_id", get(handlers::show_owner))
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

/// Tag each request with an id, log it, and echo the id back.
async fn trace_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!(
        "request",
        id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let mut response = next.run(request).await;
        info!(status = response.status().as_u16(), "handled");

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_db_runs_closure() {
        let db = Database::open_in_memory().unwrap();
        db.seed_sample_data().unwrap();
        let state = AppState::new(db);

        let count = state.with_db(|db| Ok(db.count_visits()?)).await.unwrap();
        assert_eq!(count, 4);
    }

    #[tokio::test]
    async fn test_with_db_poisoned_lock() {
        let state = AppState::new(Database::open_in_memory().unwrap());

        let db = Arc::clone(&state.db);
        let _ = std::thread::spawn(move || {
            let _guard = db.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let result = state.with_db(|_| Ok(())).await;
        assert!(matches!(result, Err(WebError::LockPoisoned)));
    }
}
