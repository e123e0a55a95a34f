use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        review::{AverageRatingDto, CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::{rating_from_json, UpdateReviewParams, UpsertReviewParams},
        service::{identity::Principal, rating::RatingService, review::ReviewService},
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize)]
pub struct ScholarshipIdQuery {
    #[serde(rename = "scholarshipId")]
    pub scholarship_id: Option<String>,
}

impl ScholarshipIdQuery {
    /// Returns the trimmed `scholarshipId`, rejecting absent or blank values.
    fn required(&self) -> Result<&str, AppError> {
        self.scholarship_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("scholarshipId is required".to_string()))
    }
}

/// Get the average rating of a scholarship.
///
/// Aggregates every review referencing the scholarship at request time. Reviews with
/// a missing or malformed rating count toward the total and contribute zero.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `scholarshipId` to aggregate
///
/// # Returns
/// - `200 OK` - Average rounded to two decimals plus review count
/// - `400 Bad Request` - `scholarshipId` missing or blank
/// - `503 Service Unavailable` - Store did not answer in time
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/average-rating",
    tag = REVIEW_TAG,
    params(
        ("scholarshipId" = String, Query, description = "Scholarship id")
    ),
    responses(
        (status = 200, description = "Average rating", body = AverageRatingDto),
        (status = 400, description = "scholarshipId missing", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_average_rating(
    State(state): State<AppState>,
    Query(query): Query<ScholarshipIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let scholarship_id = query.required()?;

    let service = RatingService::new(&state.db, state.query.store_timeout);

    let summary = service.summary_for(scholarship_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Submit a review.
///
/// A user has at most one review per scholarship; submitting again replaces it.
///
/// # Access Control
/// - Any registered user
///
/// # Returns
/// - `200 OK` - Created or replaced review
/// - `400 Bad Request` - Malformed scholarship id
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller has no account
/// - `404 Not Found` - Scholarship not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 200, description = "Created or replaced review", body = ReviewDto),
        (status = 400, description = "Malformed scholarship id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller has no account", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn submit_review(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &principal).require(&[]).await?;

    let service = ReviewService::new(&state.db);

    let review = service
        .upsert(UpsertReviewParams {
            scholarship_id: payload.scholarship_id,
            user_email: user.email,
            user_name: payload.user_name.or(user.name),
            rating: rating_from_json(payload.rating),
            comment: payload.comment,
        })
        .await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// List the reviews of a scholarship.
#[utoipa::path(
    get,
    path = "/reviews",
    tag = REVIEW_TAG,
    params(
        ("scholarshipId" = String, Query, description = "Scholarship id")
    ),
    responses(
        (status = 200, description = "Reviews of the scholarship", body = Vec<ReviewDto>),
        (status = 400, description = "scholarshipId missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scholarship_reviews(
    State(state): State<AppState>,
    Query(query): Query<ScholarshipIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let scholarship_id = query.required()?;

    let service = ReviewService::new(&state.db);

    let reviews = service.get_by_scholarship(scholarship_id).await?;

    let dtos: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the reviews a user wrote.
///
/// # Access Control
/// - `OwnerOrModerator` - The user themselves, or moderators and admins
#[utoipa::path(
    get,
    path = "/reviews/user/{email}",
    tag = REVIEW_TAG,
    params(
        ("email" = String, Path, description = "Reviewer email")
    ),
    responses(
        (status = 200, description = "Reviews by the user", body = Vec<ReviewDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the user, moderator or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_reviews(
    State(state): State<AppState>,
    principal: Principal,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::OwnerOrModerator(email.clone())])
        .await?;

    let service = ReviewService::new(&state.db);

    let reviews = service.get_by_user(&email).await?;

    let dtos: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List every review.
///
/// # Access Control
/// - `Moderator` - Moderators and admins
#[utoipa::path(
    get,
    path = "/reviews/all",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "All reviews", body = Vec<ReviewDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a moderator or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_reviews(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Moderator])
        .await?;

    let service = ReviewService::new(&state.db);

    let reviews = service.get_all().await?;

    let dtos: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Edit a review.
///
/// # Access Control
/// - `Owner` - Only the author can edit a review
///
/// # Returns
/// - `200 OK` - Updated review
/// - `400 Bad Request` - Malformed id
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not the author
/// - `404 Not Found` - Review not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = String, Path, description = "Review id")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Updated review", body = ReviewDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_review(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let service = ReviewService::new(&state.db);

    let review = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Owner(review.user_email)])
        .await?;

    let review = service
        .update(UpdateReviewParams {
            id,
            rating: rating_from_json(payload.rating),
            comment: payload.comment,
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Delete a review.
///
/// # Access Control
/// - `OwnerOrModerator` - The author, or moderators and admins
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Deleted review", body = DeletedDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the author, moderator or admin", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let service = ReviewService::new(&state.db);

    let review = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::OwnerOrModerator(review.user_email)])
        .await?;

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Review not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeletedDto { deleted_count: 1 })))
}
