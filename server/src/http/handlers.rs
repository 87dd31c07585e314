//! Generic request handlers, instantiated once per resource in the router.
//!
//! Extractor rejections are taken as `Result`s so every failure renders the
//! same envelope: malformed ids and queries are 400, JSON syntax errors are
//! 400 and well-formed bodies with missing or mistyped fields are 422.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mercado_domain::{CountReport, Resource};
use serde::{Deserialize, Deserializer, Serialize};

use super::response::{ApiError, Envelope};
use super::AppState;
use crate::persistence::SqlRecord;
use crate::service::{ReportService, ResourceService};

type Reply<T> = Result<(StatusCode, Json<Envelope<T>>), ApiError>;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub id: Option<i64>,
}

/// `?id=` with no value selects every parent, like omitting `id`.
fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub storage: &'static str,
}

fn record_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request("id must be an integer"))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))
}

pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "route not found")
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

pub async fn health(State(state): State<AppState>) -> Reply<Health> {
    Ok(Envelope::data(
        StatusCode::OK,
        Health {
            status: "ok",
            storage: state.store.backend(),
        },
    ))
}

pub async fn list<E: Resource + SqlRecord>(State(state): State<AppState>) -> Reply<Vec<E>> {
    tracing::debug!(resource = E::COLLECTION, "list");
    let records = ResourceService::<E>::new(&state.store).list().await?;
    Ok(Envelope::data(StatusCode::OK, records))
}

pub async fn show<E: Resource + SqlRecord>(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Reply<E> {
    let id = record_id(path)?;
    tracing::debug!(resource = E::COLLECTION, id, "show");
    let record = ResourceService::<E>::new(&state.store).get(id).await?;
    Ok(Envelope::data(StatusCode::OK, record))
}

pub async fn create<E: Resource + SqlRecord>(
    State(state): State<AppState>,
    payload: Result<Json<E::Draft>, JsonRejection>,
) -> Reply<E> {
    tracing::info!(resource = E::COLLECTION, "create");
    let draft = body(payload)?;
    let record = ResourceService::<E>::new(&state.store).create(draft).await?;
    Ok(Envelope::data(StatusCode::CREATED, record))
}

pub async fn update<E: Resource + SqlRecord>(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<E::Changes>, JsonRejection>,
) -> Reply<E> {
    let id = record_id(path)?;
    tracing::info!(resource = E::COLLECTION, id, "update");
    let changes = body(payload)?;
    let record = ResourceService::<E>::new(&state.store)
        .update(id, changes)
        .await?;
    Ok(Envelope::data(StatusCode::OK, record))
}

pub async fn destroy<E: Resource + SqlRecord>(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = record_id(path)?;
    tracing::info!(resource = E::COLLECTION, id, "delete");
    ResourceService::<E>::new(&state.store).delete(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn report<R>(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Reply<Vec<R::Row>>
where
    R: CountReport,
    R::Parent: SqlRecord,
    R::Child: SqlRecord,
{
    let Query(query) = query.map_err(|_| ApiError::bad_request("id must be an integer"))?;
    tracing::debug!(
        parent = <R::Parent as mercado_domain::Record>::COLLECTION,
        child = <R::Child as mercado_domain::Record>::COLLECTION,
        id = ?query.id,
        "report"
    );
    let rows = ReportService::new(&state.store).count::<R>(query.id).await?;
    Ok(Envelope::data(StatusCode::OK, rows))
}
