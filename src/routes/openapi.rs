use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::{application_dto, favorite_dto, listing_dto, user_dto};
use crate::listing::SortKey;
use crate::models::{application, company, favorite, internship, recruitment, user};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health,
        super::api::list_companies,
        super::api::list_internships,
        super::api::list_recruitments,
        super::api::get_company,
        super::user::sync_user,
        super::user::get_profile,
        super::user::update_profile,
        super::user::list_favorites,
        super::user::add_favorite,
        super::user::remove_favorite,
        super::user::list_applications,
        super::user::apply,
    ),
    components(schemas(
        company::Company,
        company::CompanyOverview,
        company::CompanyData,
        company::CompanyBasicInfo,
        internship::Internship,
        internship::InternshipTag,
        recruitment::Recruitment,
        user::User,
        user::UserProfile,
        favorite::Favorite,
        favorite::FavoriteCompany,
        application::Application,
        application::ApplicationSummary,
        application::ApplicationType,
        SortKey,
        listing_dto::CompanyListResponse,
        listing_dto::InternshipListResponse,
        listing_dto::RecruitmentListResponse,
        listing_dto::CompanyDetailResponse,
        user_dto::SyncUserPayload,
        user_dto::SyncUserResponse,
        user_dto::UpdateProfilePayload,
        user_dto::ProfileResponse,
        favorite_dto::AddFavoritePayload,
        favorite_dto::FavoriteListResponse,
        application_dto::ApplyPayload,
        application_dto::ApplicationListResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "listings", description = "Company, internship and recruitment listings"),
        (name = "user", description = "Signed-in user profile, favorites and applications"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
