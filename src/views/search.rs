use url::form_urlencoded;

use super::layout::escape_html;
use crate::listing::{FilterCriteria, Selection, SortKey, ALL};

/// Prefectures offered by the area filter. Matched as substrings of an
/// entity's location.
pub const AREA_OPTIONS: [&str; 4] = ["愛知県", "岐阜県", "三重県", "静岡県"];

const PAGE_LINK_RADIUS: u32 = 2;

/// A selectable tag in the internship search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct SearchForm<'a> {
    /// Path the form submits to, e.g. `/companies`.
    pub action: &'a str,
    pub title: &'a str,
    pub keyword_placeholder: &'a str,
    pub industries: &'a [String],
    pub job_types: &'a [String],
    pub tags: Option<&'a [TagOption]>,
}

pub fn render_search_form(form: &SearchForm<'_>, criteria: &FilterCriteria) -> String {
    let mut html = String::from("<section class=\"search-hero\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(form.title)));
    html.push_str(&format!(
        "<form method=\"get\" action=\"{}\" class=\"search-form\">\n",
        escape_html(form.action)
    ));
    html.push_str(&format!(
        concat!(
            "<label>キーワード",
            "<input type=\"text\" name=\"keyword\" value=\"{}\" placeholder=\"{}\">",
            "</label>\n"
        ),
        escape_html(&criteria.keyword),
        escape_html(form.keyword_placeholder)
    ));

    let areas: Vec<String> = AREA_OPTIONS.iter().map(|a| a.to_string()).collect();
    html.push_str(&render_select("エリア", "area", &plain_options(&areas), &criteria.area));
    html.push_str(&render_select(
        "業界",
        "industry",
        &plain_options(form.industries),
        &criteria.industry,
    ));
    html.push_str(&render_select(
        "業種",
        "job_type",
        &plain_options(form.job_types),
        &criteria.job_type,
    ));
    if let Some(tags) = form.tags {
        html.push_str(&render_select("タグ", "tag", tags, &criteria.tag));
    }
    html.push_str(&render_sort(criteria.sort));

    html.push_str("<div class=\"search-actions\">\n");
    html.push_str("<button type=\"submit\">検索</button>\n");
    html.push_str(&format!(
        "<a class=\"clear\" href=\"{}\">条件をクリア</a>\n",
        escape_html(form.action)
    ));
    html.push_str("</div>\n</form>\n</section>\n");
    html
}

fn plain_options(values: &[String]) -> Vec<TagOption> {
    values
        .iter()
        .map(|v| TagOption {
            value: v.clone(),
            label: v.clone(),
        })
        .collect()
}

fn render_select(label: &str, name: &str, options: &[TagOption], current: &Selection) -> String {
    let mut html = format!(
        "<label>{}<select name=\"{}\">\n<option value=\"{}\"{}>すべて</option>\n",
        label,
        name,
        ALL,
        selected(current.is_all())
    );
    for option in options {
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escape_html(&option.value),
            selected(current.value() == Some(option.value.as_str())),
            escape_html(&option.label)
        ));
    }
    html.push_str("</select></label>\n");
    html
}

fn render_sort(current: SortKey) -> String {
    let mut html = String::from("<label>並び順<select name=\"sort\">\n");
    for key in [SortKey::CreatedAt, SortKey::Favorites] {
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            key.as_str(),
            selected(key == current),
            key.label()
        ));
    }
    html.push_str("</select></label>\n");
    html
}

fn selected(on: bool) -> &'static str {
    if on {
        " selected"
    } else {
        ""
    }
}

pub fn render_result_count(total: usize) -> String {
    format!("<p class=\"result-count\">検索結果: {}件</p>\n", total)
}

pub fn render_empty(subject: &str) -> String {
    format!(
        concat!(
            "<div class=\"empty\">\n",
            "<p>{}が見つかりませんでした</p>\n",
            "<p class=\"hint\">検索条件を変更してお試しください</p>\n",
            "</div>\n"
        ),
        escape_html(subject)
    )
}

/// Query string carrying the criteria and page. Default values are omitted.
pub fn query_string(criteria: &FilterCriteria, page: u32) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let keyword = criteria.keyword.trim();
    if !keyword.is_empty() {
        query.append_pair("keyword", keyword);
    }
    for (name, selection) in [
        ("area", &criteria.area),
        ("industry", &criteria.industry),
        ("job_type", &criteria.job_type),
        ("tag", &criteria.tag),
    ] {
        if let Some(value) = selection.value() {
            query.append_pair(name, value);
        }
    }
    if criteria.sort != SortKey::default() {
        query.append_pair("sort", criteria.sort.as_str());
    }
    if page > 1 {
        query.append_pair("page", &page.to_string());
    }
    query.finish()
}

fn page_href(base_path: &str, criteria: &FilterCriteria, page: u32) -> String {
    let query = query_string(criteria, page);
    if query.is_empty() {
        escape_html(base_path)
    } else {
        escape_html(&format!("{}?{}", base_path, query))
    }
}

/// 前へ / page numbers / 次へ. Links keep the criteria and change only the
/// page. Nothing is rendered for a single page.
pub fn render_pagination(
    base_path: &str,
    criteria: &FilterCriteria,
    page: u32,
    total_pages: u32,
) -> String {
    if total_pages <= 1 {
        return String::new();
    }
    let page = page.clamp(1, total_pages);
    let mut html = String::from("<nav class=\"pagination\">\n");

    if page > 1 {
        html.push_str(&format!(
            "<a class=\"prev\" href=\"{}\">前へ</a>\n",
            page_href(base_path, criteria, page - 1)
        ));
    } else {
        html.push_str("<span class=\"prev disabled\">前へ</span>\n");
    }

    let first = page.saturating_sub(PAGE_LINK_RADIUS).max(1);
    let last = (page + PAGE_LINK_RADIUS).min(total_pages);
    for n in first..=last {
        if n == page {
            html.push_str(&format!("<span class=\"current\">{}</span>\n", n));
        } else {
            html.push_str(&format!(
                "<a href=\"{}\">{}</a>\n",
                page_href(base_path, criteria, n),
                n
            ));
        }
    }

    if page < total_pages {
        html.push_str(&format!(
            "<a class=\"next\" href=\"{}\">次へ</a>\n",
            page_href(base_path, criteria, page + 1)
        ));
    } else {
        html.push_str("<span class=\"next disabled\">次へ</span>\n");
    }
    html.push_str("</nav>\n");
    html
}
