use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::{
        api::{CountDto, DeletedDto, ErrorDto},
        scholarship::{ScholarshipDto, ScholarshipPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            scholarship::ScholarshipParams,
            search::{normalize_search_text, ScholarshipSearch},
        },
        service::{identity::Principal, scholarship::ScholarshipService},
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping scholarship endpoints in OpenAPI documentation
pub static SCHOLARSHIP_TAG: &str = "scholarship";

/// Raw search query. Pagination stays as text; `ScholarshipSearch::from_query`
/// validates it.
#[derive(Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Deserialize)]
pub struct CountQuery {
    pub search: Option<String>,
}

/// Search scholarships.
///
/// Returns one page of scholarships whose name, university or degree contains the
/// search text (case-insensitive). Each record carries its average review rating.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Search text and pagination
///
/// # Returns
/// - `200 OK` - Page of scholarships with ratings
/// - `400 Bad Request` - Malformed page or size
/// - `503 Service Unavailable` - Store did not answer in time
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/scholarships",
    tag = SCHOLARSHIP_TAG,
    params(
        ("search" = Option<String>, Query, description = "Free text matched against name, university and degree"),
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("size" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of scholarships", body = Vec<ScholarshipDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scholarships(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let search = ScholarshipSearch::from_query(
        query.search.as_deref(),
        query.page.as_deref(),
        query.size.as_deref(),
    )?;

    let service = ScholarshipService::new(&state.db, state.query);

    let scholarships = service.search(&search).await?;

    let dtos: Vec<ScholarshipDto> = scholarships.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Count scholarships matching a search.
///
/// Uses the same filter as the search endpoint, without pagination.
#[utoipa::path(
    get,
    path = "/scholarships/count",
    tag = SCHOLARSHIP_TAG,
    params(
        ("search" = Option<String>, Query, description = "Free text matched against name, university and degree")
    ),
    responses(
        (status = 200, description = "Number of matching scholarships", body = CountDto),
        (status = 503, description = "Store unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_scholarships(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScholarshipService::new(&state.db, state.query);

    let text = normalize_search_text(query.search.as_deref());
    let count = service.count(text.as_deref()).await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Get a scholarship by id, with its average rating.
///
/// # Returns
/// - `200 OK` - Scholarship with rating
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No scholarship with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/scholarships/{id}",
    tag = SCHOLARSHIP_TAG,
    params(
        ("id" = String, Path, description = "Scholarship id")
    ),
    responses(
        (status = 200, description = "Scholarship with rating", body = ScholarshipDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scholarship_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let service = ScholarshipService::new(&state.db, state.query);

    let scholarship = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Scholarship not found".to_string()))?;

    Ok((StatusCode::OK, Json(scholarship.into_dto())))
}

/// List the cheapest scholarships.
///
/// Returns up to 6 scholarships ordered by application fee, newest first among
/// equal fees. Ratings are not included.
#[utoipa::path(
    get,
    path = "/topScholarship",
    tag = SCHOLARSHIP_TAG,
    responses(
        (status = 200, description = "Cheapest scholarships", body = Vec<ScholarshipDto>),
        (status = 503, description = "Store unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_scholarships(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScholarshipService::new(&state.db, state.query);

    let scholarships = service.top().await?;

    let dtos: Vec<ScholarshipDto> = scholarships.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a scholarship.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can post scholarships
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `principal` - Verified caller
/// - `payload` - Scholarship fields; `postDate` defaults to now
///
/// # Returns
/// - `201 Created` - Created scholarship
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a moderator or admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/scholarships",
    tag = SCHOLARSHIP_TAG,
    request_body = ScholarshipPayloadDto,
    responses(
        (status = 201, description = "Successfully created scholarship", body = ScholarshipDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a moderator or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_scholarship(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<ScholarshipPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Moderator])
        .await?;

    let service = ScholarshipService::new(&state.db, state.query);

    let params = ScholarshipParams::from_dto(payload, user.email, Utc::now());

    let scholarship = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(scholarship.into_dto())))
}

/// Replace a scholarship.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can edit scholarships
///
/// # Returns
/// - `200 OK` - Replaced scholarship
/// - `400 Bad Request` - Malformed id
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a moderator or admin
/// - `404 Not Found` - No scholarship with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/scholarships/{id}",
    tag = SCHOLARSHIP_TAG,
    params(
        ("id" = String, Path, description = "Scholarship id")
    ),
    request_body = ScholarshipPayloadDto,
    responses(
        (status = 200, description = "Successfully replaced scholarship", body = ScholarshipDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a moderator or admin", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn replace_scholarship(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    Json(payload): Json<ScholarshipPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Moderator])
        .await?;

    let id = parse_id(&id)?;

    let service = ScholarshipService::new(&state.db, state.query);

    let params = ScholarshipParams::from_dto(payload, user.email, Utc::now());

    let scholarship = service
        .replace(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Scholarship not found".to_string()))?;

    Ok((StatusCode::OK, Json(scholarship.into_dto())))
}

/// Delete a scholarship.
///
/// Reviews and applications referencing the scholarship are kept.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can delete scholarships
#[utoipa::path(
    delete,
    path = "/scholarships/{id}",
    tag = SCHOLARSHIP_TAG,
    params(
        ("id" = String, Path, description = "Scholarship id")
    ),
    responses(
        (status = 200, description = "Successfully deleted scholarship", body = DeletedDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a moderator or admin", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_scholarship(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Moderator])
        .await?;

    let id = parse_id(&id)?;

    let service = ScholarshipService::new(&state.db, state.query);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Scholarship not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeletedDto { deleted_count: 1 })))
}
