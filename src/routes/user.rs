use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::application_dto::{ApplicationListResponse, ApplyPayload};
use crate::dto::favorite_dto::{AddFavoritePayload, FavoriteListResponse};
use crate::dto::user_dto::{
    ProfileResponse, SyncUserPayload, SyncUserResponse, UpdateProfilePayload,
};
use crate::error::Result;
use crate::middleware::auth::Claims;
use crate::models::{application::Application, favorite::Favorite, user::UserProfile};
use crate::services::user_service::Identity;
use crate::AppState;

/// Token claims win; the body only fills in what the token lacks.
fn merged_identity(claims: &Claims, payload: &SyncUserPayload) -> Identity {
    let identity = claims.identity();
    Identity {
        email: identity.email.or_else(|| payload.email.clone()),
        name: identity.name.or_else(|| payload.name.clone()),
        picture: identity.picture.or_else(|| payload.picture.clone()),
        sub: identity.sub,
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/sync-user",
    request_body = SyncUserPayload,
    responses(
        (status = 200, description = "Existing user refreshed", body = SyncUserResponse),
        (status = 201, description = "User created", body = SyncUserResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer" = [])),
    tag = "user"
)]
#[axum::debug_handler]
pub async fn sync_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Option<Json<SyncUserPayload>>,
) -> Result<impl IntoResponse> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    payload.validate()?;

    let identity = merged_identity(&claims, &payload);
    let outcome = state.user_service.sync(&identity).await?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(SyncUserResponse {
            success: true,
            message: "User synchronized successfully".to_string(),
            user: outcome.user,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/user/profile",
    responses(
        (status = 200, description = "Current user and profile", body = ProfileResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer" = [])),
    tag = "user"
)]
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ProfileResponse>> {
    let (user, profile) = state.user_service.get_profile(&claims.identity()).await?;
    Ok(Json(ProfileResponse { user, profile }))
}

#[utoipa::path(
    patch,
    path = "/api/user/profile",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Profile saved", body = UserProfile),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer" = [])),
    tag = "user"
)]
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state
        .user_service
        .update_profile(&claims.identity(), payload)
        .await?;
    Ok(Json(profile))
}

#[utoipa::path(
    get,
    path = "/api/user/favorites",
    responses(
        (status = 200, description = "Favorite companies, newest first", body = FavoriteListResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer" = [])),
    tag = "user"
)]
#[axum::debug_handler]
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<FavoriteListResponse>> {
    let user = state.user_service.ensure(&claims.identity()).await?;
    let items = state.favorite_service.list(user.id).await?;
    Ok(Json(FavoriteListResponse { items }))
}

#[utoipa::path(
    post,
    path = "/api/user/favorites",
    request_body = AddFavoritePayload,
    responses(
        (status = 201, description = "Favorite added", body = Favorite),
        (status = 404, description = "Company not found"),
        (status = 409, description = "Already a favorite")
    ),
    security(("bearer" = [])),
    tag = "user"
)]
#[axum::debug_handler]
pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<AddFavoritePayload>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.ensure(&claims.identity()).await?;
    let favorite = state
        .favorite_service
        .add(user.id, payload.company_id)
        .await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    delete,
    path = "/api/user/favorites/{id}",
    params(
        ("id" = Uuid, Path, description = "Favorite ID")
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer" = [])),
    tag = "user"
)]
#[axum::debug_handler]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let user = state.user_service.ensure(&claims.identity()).await?;
    state.favorite_service.remove(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/user/applications",
    responses(
        (status = 200, description = "Applications, newest first", body = ApplicationListResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer" = [])),
    tag = "user"
)]
#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ApplicationListResponse>> {
    let user = state.user_service.ensure(&claims.identity()).await?;
    let items = state.application_service.list(user.id).await?;
    Ok(Json(ApplicationListResponse { items }))
}

#[utoipa::path(
    post,
    path = "/api/user/applications",
    request_body = ApplyPayload,
    responses(
        (status = 201, description = "Application submitted", body = Application),
        (status = 400, description = "Neither or both targets given"),
        (status = 404, description = "Target not found"),
        (status = 409, description = "Already applied")
    ),
    security(("bearer" = [])),
    tag = "user"
)]
#[axum::debug_handler]
pub async fn apply(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse> {
    let (kind, target_id) = payload.target()?;
    let user = state.user_service.ensure(&claims.identity()).await?;
    let application = state
        .application_service
        .apply(user.id, kind, target_id)
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}
