//! User REST routes.
//!
//! | Method | Path             | Success |
//! |--------|------------------|---------|
//! | GET    | `/api/user/`     | 200     |
//! | GET    | `/api/user/:id`  | 200     |
//! | POST   | `/api/user/`     | 201     |
//! | PUT    | `/api/user/:id`  | 200     |
//! | DELETE | `/api/user/:id`  | 200     |
//!
//! Bodies are decoded before any store access, so a malformed body is 422
//! even when the target id does not exist.

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::{run_blocking, SharedState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use log::{debug, info};
use recordbook_core::db::ping;
use recordbook_core::{RecordId, RepoError, User};
use serde::Deserialize;

/// Inbound user fields. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
}

impl From<UserPayload> for User {
    fn from(value: UserPayload) -> Self {
        User::new(value.username, value.password, value.email)
    }
}

pub fn user_routes(state: SharedState) -> Router {
    Router::new()
        .route(
            "/api/user/",
            get(list_users_handler)
                .post(create_user_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/api/user/:id",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler)
                .fallback(method_not_allowed_handler),
        )
        .with_state(state)
}

pub fn health_routes(state: SharedState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health_handler).fallback(method_not_allowed_handler),
        )
        .with_state(state)
}

/// Envelope-shaped 404 for every unmatched path.
pub async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}

/// Envelope-shaped 405 for a known path hit with an unrouted method.
async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn list_users_handler(
    State(state): State<SharedState>,
) -> Result<Envelope<Vec<User>>, ApiError> {
    let users = run_blocking(&state, |state| state.users.list_users()).await?;
    debug!("event=user_list module=api status=ok count={}", users.len());
    Ok(Envelope::ok(users))
}

async fn get_user_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Envelope<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let user = run_blocking(&state, move |state| state.users.get_user(id)).await?;
    Ok(Envelope::ok(user))
}

async fn create_user_handler(
    State(state): State<SharedState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Envelope<User>, ApiError> {
    let user = decode(payload)?;
    let created = run_blocking(&state, move |state| state.users.create_user(user)).await?;
    info!("event=user_create module=api status=ok id={}", created.id);
    Ok(Envelope::created(created))
}

async fn update_user_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Envelope<User>, ApiError> {
    let fields = decode(payload)?;
    let id = parse_id(&raw_id)?;
    let updated =
        run_blocking(&state, move |state| state.users.update_user(id, fields)).await?;
    info!("event=user_update module=api status=ok id={}", updated.id);
    Ok(Envelope::ok(updated))
}

async fn delete_user_handler(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Envelope<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let deleted = run_blocking(&state, move |state| state.users.delete_user(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    info!("event=user_delete module=api status=ok id={}", deleted.id);
    Ok(Envelope::ok(deleted))
}

async fn health_handler(
    State(state): State<SharedState>,
) -> Result<Envelope<&'static str>, ApiError> {
    let probe = run_blocking(&state, |state| {
        let conn = state.pool.get()?;
        ping(&conn).map_err(RepoError::from)
    })
    .await;

    match probe {
        Ok(()) => Ok(Envelope::ok(recordbook_core::ping())),
        Err(err) => Err(ApiError::Unavailable(err.to_string())),
    }
}

/// Accepts positive decimal ids only; anything else is treated as an unknown
/// resource rather than a bad request.
fn parse_id(raw: &str) -> Result<RecordId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }
    match raw.parse::<RecordId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::NotFound),
    }
}

fn decode(payload: Result<Json<UserPayload>, JsonRejection>) -> Result<User, ApiError> {
    match payload {
        Ok(Json(payload)) => Ok(payload.into()),
        Err(rejection) => Err(ApiError::Unprocessable(rejection.body_text())),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_accepts_positive_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        for raw in ["", "0", "-1", "abc", "1.5", " 7", "99999999999999999999"] {
            assert!(parse_id(raw).is_err(), "{raw:?} should be rejected");
        }
    }
}
