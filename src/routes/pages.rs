use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use uuid::Uuid;

use crate::dto::listing_dto::ListingQuery;
use crate::error::Error;
use crate::listing::{self, FilterCriteria, ListingPage};
use crate::models::{company::Company, internship::Internship, recruitment::Recruitment};
use crate::views::{
    cards::{render_company_card, render_internship_card, render_recruitment_card},
    detail::{render_company_detail, render_internship_detail, render_recruitment_detail},
    home::render_home,
    layout::{escape_html, render_page, NavPage},
    search::{
        render_empty, render_pagination, render_result_count, render_search_form, SearchForm,
        TagOption,
    },
};
use crate::AppState;

/// Errors on HTML routes render as a page instead of JSON.
#[derive(Debug)]
pub struct PageError(Error);

impl From<Error> for PageError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let (title, message) = if status == StatusCode::NOT_FOUND {
            ("ページが見つかりません", "お探しのページは見つかりませんでした")
        } else {
            tracing::error!(error = %self.0, "page render failed");
            ("エラー", "データの取得に失敗しました。時間をおいて再度お試しください")
        };
        let body = format!(
            "<section class=\"error\">\n<h1>{}</h1>\n<p>{}</p>\n<a href=\"/\">トップへ戻る</a>\n</section>\n",
            title,
            escape_html(message)
        );
        (status, Html(render_page(title, None, &body))).into_response()
    }
}

type PageResult = std::result::Result<Html<String>, PageError>;

/// Malformed ids read as a missing page.
fn parse_id(raw: &str) -> Result<Uuid, PageError> {
    Uuid::parse_str(raw).map_err(|_| PageError(Error::NotFound("Page not found".to_string())))
}

fn render_results<T>(
    base_path: &str,
    subject: &str,
    criteria: &FilterCriteria,
    page: &ListingPage<'_, T>,
    card: impl Fn(&T) -> String,
) -> String {
    let mut html = render_result_count(page.total);
    if page.items.is_empty() {
        html.push_str(&render_empty(subject));
    } else {
        html.push_str("<div class=\"card-list\">\n");
        for &item in &page.items {
            html.push_str(&card(item));
        }
        html.push_str("</div>\n");
    }
    html.push_str(&render_pagination(
        base_path,
        criteria,
        page.page,
        page.total_pages,
    ));
    html
}

#[axum::debug_handler]
pub async fn home(State(state): State<AppState>) -> PageResult {
    let (companies, internships, recruitments) = tokio::try_join!(
        state.company_service.list_public(),
        state.internship_service.list_with_company(),
        state.recruitment_service.list_with_company(),
    )?;

    let newest = FilterCriteria::default();
    let companies = listing::run(&companies, &newest, 1);
    let internships = listing::run(&internships, &newest, 1);
    let recruitments = listing::run(&recruitments, &newest, 1);

    let body = render_home(&companies.items, &internships.items, &recruitments.items);
    Ok(Html(render_page("トップ", Some(NavPage::Home), &body)))
}

#[axum::debug_handler]
pub async fn companies(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> PageResult {
    let all = state.company_service.list_public().await?;
    let view = query.view();
    let page = listing::run_view(&all, &view);

    let industries = listing::distinct(all.iter().filter_map(Company::industry));
    let job_types = listing::distinct(
        all.iter()
            .flat_map(|c| c.recruitment_job_types.iter().map(String::as_str)),
    );
    let form = SearchForm {
        action: "/companies",
        title: "企業を検索",
        keyword_placeholder: "企業名、業界など",
        industries: &industries,
        job_types: &job_types,
        tags: None,
    };

    let mut body = render_search_form(&form, view.criteria());
    body.push_str(&render_results(
        form.action,
        "企業",
        view.criteria(),
        &page,
        render_company_card,
    ));
    Ok(Html(render_page("企業一覧", Some(NavPage::Companies), &body)))
}

#[axum::debug_handler]
pub async fn internships(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> PageResult {
    let all = state.internship_service.list_with_company().await?;
    let view = query.view();
    let page = listing::run_view(&all, &view);

    let industries = listing::distinct(all.iter().filter_map(|i| i.company.industry.as_deref()));
    let job_types = listing::distinct(all.iter().filter_map(|i| i.job_type.as_deref()));
    let tags = tag_options(&all);
    let form = SearchForm {
        action: "/internships",
        title: "インターンシップを検索",
        keyword_placeholder: "職種、企業名など",
        industries: &industries,
        job_types: &job_types,
        tags: Some(&tags),
    };

    let mut body = render_search_form(&form, view.criteria());
    body.push_str(&render_results(
        form.action,
        "インターンシップ",
        view.criteria(),
        &page,
        render_internship_card,
    ));
    Ok(Html(render_page(
        "インターンシップ",
        Some(NavPage::Internships),
        &body,
    )))
}

#[axum::debug_handler]
pub async fn jobs(State(state): State<AppState>, Query(query): Query<ListingQuery>) -> PageResult {
    let all = state.recruitment_service.list_with_company().await?;
    let view = query.view();
    let page = listing::run_view(&all, &view);

    let industries = listing::distinct(all.iter().filter_map(|r| r.company.industry.as_deref()));
    let job_types = listing::distinct(all.iter().filter_map(|r| r.job_type.as_deref()));
    let form = SearchForm {
        action: "/jobs",
        title: "求人を検索",
        keyword_placeholder: "職種、企業名など",
        industries: &industries,
        job_types: &job_types,
        tags: None,
    };

    let mut body = render_search_form(&form, view.criteria());
    body.push_str(&render_results(
        form.action,
        "求人",
        view.criteria(),
        &page,
        render_recruitment_card,
    ));
    Ok(Html(render_page("求人一覧", Some(NavPage::Jobs), &body)))
}

#[axum::debug_handler]
pub async fn company_detail(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let id = parse_id(&id)?;
    let (company, recruitments, internships) = tokio::try_join!(
        state.company_service.get_by_id(id),
        state.recruitment_service.list_by_company(id),
        state.internship_service.list_by_company(id),
    )?;

    let body = render_company_detail(&company, &recruitments, &internships);
    Ok(Html(render_page(&company.name, Some(NavPage::Companies), &body)))
}

#[axum::debug_handler]
pub async fn recruitment_detail(
    State(state): State<AppState>,
    Path((company_id, recruitment_id)): Path<(String, String)>,
) -> PageResult {
    let recruitment: Recruitment = state
        .recruitment_service
        .get_by_id(parse_id(&company_id)?, parse_id(&recruitment_id)?)
        .await?;

    let title = format!("{} | {}", recruitment.display_title(), recruitment.company.name);
    let body = render_recruitment_detail(&recruitment);
    Ok(Html(render_page(&title, Some(NavPage::Jobs), &body)))
}

#[axum::debug_handler]
pub async fn internship_detail(
    State(state): State<AppState>,
    Path((company_id, internship_id)): Path<(String, String)>,
) -> PageResult {
    let internship: Internship = state
        .internship_service
        .get_by_id(parse_id(&company_id)?, parse_id(&internship_id)?)
        .await?;

    let title = format!("{} | {}", internship.display_title(), internship.company.name);
    let body = render_internship_detail(&internship);
    Ok(Html(render_page(&title, Some(NavPage::Internships), &body)))
}

pub async fn not_found() -> PageError {
    PageError(Error::NotFound("Page not found".to_string()))
}

/// Tags across all internships, first-seen order, keyed by tag id.
fn tag_options(internships: &[Internship]) -> Vec<TagOption> {
    let mut options: Vec<TagOption> = Vec::new();
    for tag in internships.iter().flat_map(|i| i.tags.iter()) {
        let value = tag.id.to_string();
        if !options.iter().any(|o| o.value == value) {
            options.push(TagOption {
                value,
                label: tag.name.clone(),
            });
        }
    }
    options
}
