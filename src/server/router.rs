use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{CountDto, DeletedDto, ErrorDto},
        application::{
            ApplicationDto, ApplicationFeedbackDto, CreateApplicationDto,
            UpdateApplicationStatusDto,
        },
        payment::{PaymentIntentDto, PaymentIntentRequestDto},
        review::{AverageRatingDto, CreateReviewDto, ReviewDto, UpdateReviewDto},
        scholarship::{ScholarshipDto, ScholarshipPayloadDto},
        user::{UpdateRoleDto, UpsertUserDto, UserDto},
    },
    server::{
        controller::{application, health, payment, review, scholarship, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        scholarship::get_scholarships,
        scholarship::count_scholarships,
        scholarship::get_scholarship_by_id,
        scholarship::get_top_scholarships,
        scholarship::create_scholarship,
        scholarship::replace_scholarship,
        scholarship::delete_scholarship,
        review::get_average_rating,
        review::submit_review,
        review::get_scholarship_reviews,
        review::get_user_reviews,
        review::get_all_reviews,
        review::update_review,
        review::delete_review,
        user::upsert_user,
        user::get_users,
        user::get_user,
        user::update_user_role,
        user::delete_user,
        application::create_application,
        application::get_applications,
        application::get_user_applications,
        application::update_application_status,
        application::update_application_feedback,
        application::delete_application,
        payment::create_payment_intent,
    ),
    components(schemas(
        ErrorDto,
        CountDto,
        DeletedDto,
        ScholarshipDto,
        ScholarshipPayloadDto,
        ReviewDto,
        CreateReviewDto,
        UpdateReviewDto,
        AverageRatingDto,
        UserDto,
        UpsertUserDto,
        UpdateRoleDto,
        ApplicationDto,
        CreateApplicationDto,
        UpdateApplicationStatusDto,
        ApplicationFeedbackDto,
        PaymentIntentRequestDto,
        PaymentIntentDto,
    )),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route(
            "/scholarships",
            get(scholarship::get_scholarships).post(scholarship::create_scholarship),
        )
        .route("/scholarships/count", get(scholarship::count_scholarships))
        .route(
            "/scholarships/{id}",
            get(scholarship::get_scholarship_by_id)
                .put(scholarship::replace_scholarship)
                .delete(scholarship::delete_scholarship),
        )
        .route("/topScholarship", get(scholarship::get_top_scholarships))
        .route("/average-rating", get(review::get_average_rating))
        .route(
            "/reviews",
            get(review::get_scholarship_reviews).post(review::submit_review),
        )
        .route("/reviews/all", get(review::get_all_reviews))
        .route("/reviews/user/{email}", get(review::get_user_reviews))
        .route(
            "/reviews/{id}",
            put(review::update_review).delete(review::delete_review),
        )
        .route("/users", get(user::get_users).post(user::upsert_user))
        .route(
            "/users/{email}",
            get(user::get_user).delete(user::delete_user),
        )
        .route("/users/{email}/role", patch(user::update_user_role))
        .route(
            "/applications",
            get(application::get_applications).post(application::create_application),
        )
        .route(
            "/applications/user/{email}",
            get(application::get_user_applications),
        )
        .route("/applications/{id}", delete(application::delete_application))
        .route(
            "/applications/{id}/status",
            patch(application::update_application_status),
        )
        .route(
            "/applications/{id}/feedback",
            patch(application::update_application_feedback),
        )
        .route(
            "/create-payment-intent",
            post(payment::create_payment_intent),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
