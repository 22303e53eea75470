use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use param_console_shared::{ActiveFilter, ErrorPayload, SearchRequest, SearchResponse};

use crate::{
    resources::Resource,
    state::AppState,
    store::{Store, StoreError},
};

type Rejection = (StatusCode, Json<ErrorPayload>);

pub async fn search<R: Resource>(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse<R>>, Rejection> {
    let today = state.today();
    let store = state.read().await;
    Ok(Json(search_page::<R>(&store, &request, today)))
}

/// Bodyless GET form of [`search`]: first page of active rows.
pub async fn search_default<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<SearchResponse<R>>, Rejection> {
    let today = state.today();
    let store = state.read().await;
    Ok(Json(search_page::<R>(&store, &SearchRequest::default(), today)))
}

pub async fn details<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<R>, Rejection> {
    let today = state.today();
    let store = state.read().await;
    let record = R::table(&store).get(id).ok_or_else(|| reject(StoreError::NotFound(id)))?;
    Ok(Json(with_child_count(&store, record, today)))
}

/// Id-less GET form of [`details`]: the first top-level row.
pub async fn details_sample<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<R>, Rejection> {
    let today = state.today();
    let store = state.read().await;
    let record = R::table(&store)
        .first_top_level()
        .ok_or_else(|| reject(StoreError::NotFound(0)))?;
    Ok(Json(with_child_count(&store, record, today)))
}

pub async fn sub_table<R: Resource>(
    State(state): State<AppState>,
    Json(request): Json<R::SubRequest>,
) -> Result<Json<Vec<R::Child>>, Rejection> {
    let today = state.today();
    let store = state.read().await;
    Ok(Json(R::children(&store, &request, today)))
}

/// Bodyless GET form of [`sub_table`]: children of the first row that has
/// any.
pub async fn sub_table_sample<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Child>>, Rejection> {
    let today = state.today();
    let store = state.read().await;
    let children = R::table(&store)
        .top_level(ActiveFilter::All, today)
        .iter()
        .filter_map(|record| record.id())
        .map(|id| R::children(&store, &R::sub_request(id, ActiveFilter::All), today))
        .find(|children| !children.is_empty())
        .unwrap_or_default();
    Ok(Json(children))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(record): Json<R>,
) -> Result<(StatusCode, Json<R>), Rejection> {
    let today = state.today();
    let mut store = state.write().await;
    let saved = R::table_mut(&mut store).save(record, None, today).map_err(reject)?;
    tracing::info!(resource = R::PATH, id = ?saved.id(), "Created record");
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(record): Json<R>,
) -> Result<Json<R>, Rejection> {
    let today = state.today();
    let mut store = state.write().await;
    let saved = R::table_mut(&mut store).save(record, Some(id), today).map_err(reject)?;
    tracing::info!(resource = R::PATH, id, "Updated record");
    Ok(Json(saved))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Rejection> {
    if state.fail_delete_id() == Some(id) {
        return Err(reject(StoreError::DeleteFailed(id)));
    }
    let today = state.today();
    let mut store = state.write().await;
    R::table_mut(&mut store).delete(id, today).map_err(reject)?;
    tracing::info!(resource = R::PATH, id, "Deleted record");
    Ok(StatusCode::NO_CONTENT)
}

/// GET form of save and delete: nothing changes.
pub async fn acknowledge() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn search_page<R: Resource>(
    store: &Store,
    request: &SearchRequest,
    today: NaiveDate,
) -> SearchResponse<R> {
    R::table(store).search(request, today, |record| {
        <R as Resource>::child_count(store, record, request.active, today)
    })
}

fn with_child_count<R: Resource>(store: &Store, record: &R, today: NaiveDate) -> R {
    let mut record = record.clone();
    let count = <R as Resource>::child_count(store, &record, ActiveFilter::All, today);
    record.set_child_count(count);
    record
}

fn reject(err: StoreError) -> Rejection {
    let status = match &err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::DeleteNotAllowed(_) | StoreError::DuplicateName(_) => StatusCode::CONFLICT,
        StoreError::InvalidStartDate(_)
        | StoreError::InvalidDateRange
        | StoreError::ReinstateRequiresOpenWindow => StatusCode::BAD_REQUEST,
        StoreError::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!(%status, error = %err, "Rejected request");
    (status, Json(ErrorPayload::code(err.code()).with_message(err.to_string())))
}
