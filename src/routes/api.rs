use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::dto::listing_dto::{
    CompanyDetailResponse, CompanyListResponse, InternshipListResponse, ListingQuery,
    ListingResponse, RecruitmentListResponse,
};
use crate::error::Result;
use crate::listing;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/companies",
    params(ListingQuery),
    responses(
        (status = 200, description = "Filtered, sorted page of companies", body = CompanyListResponse)
    ),
    tag = "listings"
)]
#[axum::debug_handler]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<CompanyListResponse>> {
    let companies = state.company_service.list_public().await?;
    let page = listing::run_view(&companies, &query.view());
    Ok(Json(ListingResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/api/internships",
    params(ListingQuery),
    responses(
        (status = 200, description = "Filtered, sorted page of internships", body = InternshipListResponse)
    ),
    tag = "listings"
)]
#[axum::debug_handler]
pub async fn list_internships(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<InternshipListResponse>> {
    let internships = state.internship_service.list_with_company().await?;
    let page = listing::run_view(&internships, &query.view());
    Ok(Json(ListingResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/api/recruitments",
    params(ListingQuery),
    responses(
        (status = 200, description = "Filtered, sorted page of recruitments", body = RecruitmentListResponse)
    ),
    tag = "listings"
)]
#[axum::debug_handler]
pub async fn list_recruitments(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<RecruitmentListResponse>> {
    let recruitments = state.recruitment_service.list_with_company().await?;
    let page = listing::run_view(&recruitments, &query.view());
    Ok(Json(ListingResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company with its openings", body = CompanyDetailResponse),
        (status = 404, description = "Company not found")
    ),
    tag = "listings"
)]
#[axum::debug_handler]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyDetailResponse>> {
    let (company, recruitments, internships) = tokio::try_join!(
        state.company_service.get_by_id(id),
        state.recruitment_service.list_by_company(id),
        state.internship_service.list_by_company(id),
    )?;
    Ok(Json(CompanyDetailResponse {
        company,
        recruitments,
        internships,
    }))
}
