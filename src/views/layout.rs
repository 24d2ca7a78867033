/// Which navigation entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Companies,
    Internships,
    Jobs,
}

const SITE_NAME: &str = "オルキャリ";
const COLUMN_URL: &str = "https://student.orca-career.com/column";

const NAV_ITEMS: [(NavPage, &str, &str); 3] = [
    (NavPage::Companies, "/companies", "企業一覧"),
    (NavPage::Internships, "/internships", "インターンシップ"),
    (NavPage::Jobs, "/jobs", "求人一覧"),
];

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escaped text, or `fallback` when the value is missing or blank.
pub fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => escape_html(v),
        None => escape_html(fallback),
    }
}

/// Escapes and keeps line breaks of multi-line fields.
pub fn multiline(raw: &str) -> String {
    escape_html(raw).replace('\n', "<br>")
}

pub fn render_page(title: &str, current: Option<NavPage>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} | {}</title>\n",
        escape_html(title),
        SITE_NAME
    ));
    html.push_str("<link rel=\"stylesheet\" href=\"/static/site.css\">\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&render_nav(current));
    html.push_str("<main class=\"container\">\n");
    html.push_str(body);
    html.push_str("</main>\n");
    html.push_str(&render_footer());
    html.push_str("</body>\n</html>\n");
    html
}

fn render_nav(current: Option<NavPage>) -> String {
    let mut html = String::from("<header class=\"site-header\">\n<div class=\"container nav\">\n");
    html.push_str(&format!(
        "<a class=\"brand\" href=\"/\">{}</a>\n<nav>\n",
        SITE_NAME
    ));
    for (page, href, label) in NAV_ITEMS {
        let class = if current == Some(page) {
            "nav-link active"
        } else {
            "nav-link"
        };
        html.push_str(&format!(
            "<a class=\"{}\" href=\"{}\">{}</a>\n",
            class, href, label
        ));
    }
    html.push_str(&format!(
        "<a class=\"nav-link\" href=\"{}\">就活コラム</a>\n",
        COLUMN_URL
    ));
    html.push_str("</nav>\n</div>\n</header>\n");
    html
}

fn render_footer() -> String {
    format!(
        concat!(
            "<footer class=\"site-footer\">\n<div class=\"container\">\n",
            "<h3>{name}</h3>\n",
            "<p>東海地方を中心とした新卒向け求人・企業情報サイト</p>\n",
            "<ul>\n",
            "<li><a href=\"/companies\">企業一覧</a></li>\n",
            "<li><a href=\"/internships\">インターンシップ</a></li>\n",
            "<li><a href=\"https://orca-career.com/company\">採用ご担当者様向けサイト</a></li>\n",
            "<li><a href=\"https://student.orca-career.com/\">学生向けサイト</a></li>\n",
            "</ul>\n",
            "<p class=\"copyright\">&copy; 2025 {name}. All rights reserved.</p>\n",
            "</div>\n</footer>\n"
        ),
        name = SITE_NAME
    )
}
