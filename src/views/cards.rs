use super::layout::{escape_html, text_or};
use crate::models::{company::Company, internship::Internship, recruitment::Recruitment};
use crate::utils::time::format_date;
use chrono::{DateTime, Utc};

const PLACEHOLDER_LOGO: &str = "/static/placeholder-logo.svg";

pub fn render_logo(logo_url: Option<&str>, name: &str) -> String {
    match logo_url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => format!(
            "<img class=\"logo\" src=\"{}\" alt=\"{}のロゴ\">",
            escape_html(url),
            escape_html(name)
        ),
        None => format!(
            "<img class=\"logo placeholder\" src=\"{}\" alt=\"No Logo\">",
            PLACEHOLDER_LOGO
        ),
    }
}

pub fn render_updated_at(updated_at: Option<DateTime<Utc>>) -> String {
    format!(
        "<p class=\"updated-at\">最終更新: {}</p>",
        format_date(updated_at)
    )
}

fn detail_row(label: &str, value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format!(
            "<li><span class=\"label\">{}:</span> {}</li>\n",
            label,
            escape_html(v)
        ),
        None => String::new(),
    }
}

pub fn render_company_card(company: &Company) -> String {
    let mut html = format!(
        "<article class=\"card company-card\">\n<a href=\"/companies/{}\">\n",
        company.id
    );
    html.push_str(&render_logo(company.logo_url.as_deref(), &company.name));
    html.push_str("\n<div class=\"card-body\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&company.name)));
    if let Some(kana) = company.name_kana.as_deref().filter(|k| !k.is_empty()) {
        html.push_str(&format!("<p class=\"kana\">{}</p>\n", escape_html(kana)));
    }
    html.push_str("<ul class=\"facts\">\n");
    html.push_str(&detail_row("業界", company.industry()));
    html.push_str(&detail_row("所在地", company.location()));
    html.push_str("</ul>\n");
    if let Some(profile) = company.data.as_ref().and_then(|d| d.profile.as_deref()) {
        html.push_str(&format!("<p class=\"summary\">{}</p>\n", escape_html(profile)));
    }
    html.push_str(&render_updated_at(company.updated_at));
    html.push_str("\n</div>\n</a>\n</article>\n");
    html
}

pub fn render_internship_card(internship: &Internship) -> String {
    let mut html = format!(
        "<article class=\"card internship-card\">\n<a href=\"/companies/{}/internships/{}\">\n",
        internship.company_id, internship.id
    );
    html.push_str(&render_logo(
        internship.company.logo_url.as_deref(),
        &internship.company.name,
    ));
    html.push_str("\n<div class=\"card-body\">\n");
    html.push_str(&format!(
        "<p class=\"company-name\">{}</p>\n<h2>{}</h2>\n",
        escape_html(&internship.company.name),
        escape_html(internship.display_title())
    ));
    if !internship.tags.is_empty() {
        html.push_str("<ul class=\"tags\">\n");
        for tag in &internship.tags {
            html.push_str(&format!("<li class=\"tag\">{}</li>\n", escape_html(&tag.name)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("<ul class=\"facts\">\n");
    html.push_str(&detail_row("職種", internship.job_type_description.as_deref()));
    html.push_str(&detail_row("時給", internship.hourly_wage.as_deref()));
    html.push_str(&detail_row("勤務時間", internship.work_hours.as_deref()));
    html.push_str(&detail_row("勤務地", internship.work_location.as_deref()));
    html.push_str("</ul>\n");
    html.push_str(&render_updated_at(internship.updated_at));
    html.push_str("\n</div>\n</a>\n</article>\n");
    html
}

pub fn render_recruitment_card(recruitment: &Recruitment) -> String {
    let mut html = format!(
        "<article class=\"card recruitment-card\">\n<a href=\"/companies/{}/recruitments/{}\">\n",
        recruitment.company_id, recruitment.id
    );
    html.push_str(&render_logo(
        recruitment.company.logo_url.as_deref(),
        &recruitment.company.name,
    ));
    html.push_str("\n<div class=\"card-body\">\n");
    html.push_str(&format!(
        "<p class=\"company-name\">{}</p>\n<h2>{}</h2>\n",
        escape_html(&recruitment.company.name),
        escape_html(recruitment.display_title())
    ));
    html.push_str(&format!(
        "<p class=\"summary\">{}</p>\n",
        text_or(recruitment.job_description.as_deref(), "求人内容の記載なし")
    ));
    html.push_str("<ul class=\"facts\">\n");
    html.push_str(&detail_row("勤務地", recruitment.work_location.as_deref()));
    html.push_str(&detail_row("給与・賞与", recruitment.salary_bonus.as_deref()));
    html.push_str(&detail_row("募集人数", recruitment.number_of_hires.as_deref()));
    html.push_str("</ul>\n");
    html.push_str(&render_updated_at(recruitment.updated_at));
    html.push_str("\n</div>\n</a>\n</article>\n");
    html
}
