use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        application::{
            ApplicationDto, ApplicationFeedbackDto, CreateApplicationDto,
            UpdateApplicationStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::application::{ApplicationStatus, CreateApplicationParams},
        service::{application::ApplicationService, identity::Principal},
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Apply to a scholarship.
///
/// The application fee is taken from the scholarship and the application starts out
/// `pending`.
///
/// # Access Control
/// - Any registered user, applying as themselves
///
/// # Returns
/// - `201 Created` - Stored application
/// - `400 Bad Request` - Malformed scholarship id
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller has no account
/// - `404 Not Found` - Scholarship not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Stored application", body = ApplicationDto),
        (status = 400, description = "Malformed scholarship id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller has no account", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_application(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &principal).require(&[]).await?;

    let scholarship_id = parse_id(&payload.scholarship_id)?;

    let service = ApplicationService::new(&state.db);

    let application = service
        .create(CreateApplicationParams {
            scholarship_id,
            user_email: user.email,
            transaction_id: payload.transaction_id,
            details: payload.details,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// List every application.
///
/// # Access Control
/// - `Moderator` - Moderators and admins
#[utoipa::path(
    get,
    path = "/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "All applications", body = Vec<ApplicationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a moderator or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Moderator])
        .await?;

    let service = ApplicationService::new(&state.db);

    let applications = service.get_all().await?;

    let dtos: Vec<ApplicationDto> = applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the applications a user submitted.
///
/// # Access Control
/// - `OwnerOrModerator` - The applicant, or moderators and admins
#[utoipa::path(
    get,
    path = "/applications/user/{email}",
    tag = APPLICATION_TAG,
    params(
        ("email" = String, Path, description = "Applicant email")
    ),
    responses(
        (status = 200, description = "Applications by the user", body = Vec<ApplicationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the applicant, moderator or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_applications(
    State(state): State<AppState>,
    principal: Principal,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::OwnerOrModerator(email.clone())])
        .await?;

    let service = ApplicationService::new(&state.db);

    let applications = service.get_by_user(&email).await?;

    let dtos: Vec<ApplicationDto> = applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Change the status of an application.
///
/// # Access Control
/// - `Moderator` - Moderators and admins
///
/// # Returns
/// - `200 OK` - Updated application
/// - `400 Bad Request` - Malformed id or unknown status
/// - `404 Not Found` - Application not found
#[utoipa::path(
    patch,
    path = "/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(
        ("id" = String, Path, description = "Application id")
    ),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Updated application", body = ApplicationDto),
        (status = 400, description = "Malformed id or unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a moderator or admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    Json(payload): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Moderator])
        .await?;

    let id = parse_id(&id)?;
    let status: ApplicationStatus = payload.status.parse()?;

    let service = ApplicationService::new(&state.db);

    if !service.set_status(id, status).await? {
        return Err(AppError::NotFound("Application not found".to_string()));
    }

    updated_application(&service, id).await
}

/// Leave feedback on an application.
///
/// # Access Control
/// - `Moderator` - Moderators and admins
#[utoipa::path(
    patch,
    path = "/applications/{id}/feedback",
    tag = APPLICATION_TAG,
    params(
        ("id" = String, Path, description = "Application id")
    ),
    request_body = ApplicationFeedbackDto,
    responses(
        (status = 200, description = "Updated application", body = ApplicationDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a moderator or admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_application_feedback(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
    Json(payload): Json<ApplicationFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::Moderator])
        .await?;

    let id = parse_id(&id)?;

    let service = ApplicationService::new(&state.db);

    if !service.set_feedback(id, payload.feedback).await? {
        return Err(AppError::NotFound("Application not found".to_string()));
    }

    updated_application(&service, id).await
}

/// Withdraw or remove an application.
///
/// # Access Control
/// - `OwnerOrModerator` - The applicant, or moderators and admins
#[utoipa::path(
    delete,
    path = "/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = String, Path, description = "Application id")
    ),
    responses(
        (status = 200, description = "Deleted application", body = DeletedDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the applicant, moderator or admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let service = ApplicationService::new(&state.db);

    let application = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    let _ = AuthGuard::new(&state.db, &principal)
        .require(&[Permission::OwnerOrModerator(application.user_email)])
        .await?;

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Application not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeletedDto { deleted_count: 1 })))
}

async fn updated_application(
    service: &ApplicationService<'_>,
    id: i32,
) -> Result<(StatusCode, Json<ApplicationDto>), AppError> {
    let application = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}
