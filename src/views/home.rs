use super::cards::{render_internship_card, render_recruitment_card};
use super::layout::escape_html;
use crate::models::{company::Company, internship::Internship, recruitment::Recruitment};

pub const NEW_COMPANIES: usize = 5;
pub const NEW_INTERNSHIPS: usize = 3;
pub const NEW_RECRUITMENTS: usize = 3;

fn section_header(title: &str, href: &str) -> String {
    format!(
        "<div class=\"section-header\">\n<h2>{}</h2>\n<a class=\"see-all\" href=\"{}\">すべて見る</a>\n</div>\n",
        title, href
    )
}

/// Newest entries of each kind, already ordered by the caller.
pub fn render_home(
    companies: &[&Company],
    internships: &[&Internship],
    recruitments: &[&Recruitment],
) -> String {
    let mut html = String::from(concat!(
        "<section class=\"hero\">\n",
        "<h1>東海地方の新卒就活は、<br><span class=\"accent\">オルキャリ。</span></h1>\n",
        "</section>\n"
    ));

    html.push_str("<section class=\"new-companies\">\n");
    html.push_str(&section_header("新着企業", "/companies"));
    html.push_str("<ul class=\"company-list\">\n");
    for company in companies.iter().take(NEW_COMPANIES) {
        html.push_str(&format!(
            "<li><a href=\"/companies/{}\">{}</a>{}</li>\n",
            company.id,
            escape_html(&company.name),
            company
                .industry()
                .map(|i| format!(" <span class=\"industry\">{}</span>", escape_html(i)))
                .unwrap_or_default()
        ));
    }
    html.push_str("</ul>\n</section>\n");

    html.push_str("<section class=\"new-internships\">\n");
    html.push_str(&section_header("新着のインターンシップ", "/internships"));
    for internship in internships.iter().take(NEW_INTERNSHIPS) {
        html.push_str(&render_internship_card(internship));
    }
    html.push_str("</section>\n");

    html.push_str("<section class=\"new-recruitments\">\n");
    html.push_str(&section_header("新着の求人", "/jobs"));
    for recruitment in recruitments.iter().take(NEW_RECRUITMENTS) {
        html.push_str(&render_recruitment_card(recruitment));
    }
    html.push_str("</section>\n");
    html
}
