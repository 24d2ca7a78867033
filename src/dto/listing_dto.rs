use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::listing::{FilterCriteria, ListingPage, ListingView, Selection, SortKey};
use crate::models::{company::Company, internship::Internship, recruitment::Recruitment};

/// Query string shared by the listing pages and their JSON counterparts.
///
/// Every field is kept as raw text so malformed values degrade to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct ListingQuery {
    pub keyword: Option<String>,
    pub area: Option<String>,
    pub industry: Option<String>,
    pub job_type: Option<String>,
    /// Internship tag id.
    pub tag: Option<String>,
    /// `created_at` or `favorites`.
    pub sort: Option<String>,
    /// 1-based page number.
    pub page: Option<String>,
}

impl ListingQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            keyword: self.keyword.clone().unwrap_or_default(),
            area: Selection::parse(self.area.as_deref()),
            industry: Selection::parse(self.industry.as_deref()),
            job_type: Selection::parse(self.job_type.as_deref()),
            tag: Selection::parse(self.tag.as_deref()),
            sort: SortKey::parse(self.sort.as_deref()),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    pub fn view(&self) -> ListingView {
        ListingView::new(self.criteria(), self.page())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    CompanyListResponse = ListingResponse<Company>,
    InternshipListResponse = ListingResponse<Internship>,
    RecruitmentListResponse = ListingResponse<Recruitment>
)]
pub struct ListingResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub per_page: usize,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetailResponse {
    pub company: Company,
    pub recruitments: Vec<Recruitment>,
    pub internships: Vec<Internship>,
}

impl<'a, T: Clone> From<ListingPage<'a, T>> for ListingResponse<T> {
    fn from(value: ListingPage<'a, T>) -> Self {
        Self {
            items: value.items.into_iter().cloned().collect(),
            total: value.total,
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
        }
    }
}
