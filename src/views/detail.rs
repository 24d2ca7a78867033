use super::cards::{render_logo, render_updated_at};
use super::layout::{escape_html, multiline};
use crate::models::{company::Company, internship::Internship, recruitment::Recruitment};

/// Two-column table; rows without a value are left out.
fn render_table(rows: &[(&str, Option<String>)]) -> String {
    let mut html = String::from("<table class=\"detail-table\">\n");
    for (label, value) in rows {
        let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>\n",
            label,
            multiline(value)
        ));
    }
    html.push_str("</table>\n");
    html
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Logo, a small line above the title, and the title itself.
fn render_header(logo_url: Option<&str>, logo_name: &str, eyebrow: &str, title: &str) -> String {
    format!(
        "<section class=\"detail-header\">\n{}\n<div>\n<p class=\"eyebrow\">{}</p>\n<h1>{}</h1>\n</div>\n</section>\n",
        render_logo(logo_url, logo_name),
        escape_html(eyebrow),
        escape_html(title)
    )
}

pub fn render_company_detail(
    company: &Company,
    recruitments: &[Recruitment],
    internships: &[Internship],
) -> String {
    let mut html = render_header(
        company.logo_url.as_deref(),
        &company.name,
        company.name_kana.as_deref().unwrap_or_default(),
        &company.name,
    );
    html.push_str(&render_updated_at(company.updated_at));
    html.push('\n');

    let overview = company.overview.as_ref();
    html.push_str("<section id=\"company-info\">\n<h2>企業概要</h2>\n");
    html.push_str(&render_table(&[
        ("業界", owned(company.industry())),
        (
            "設立",
            overview
                .and_then(|o| o.established_year)
                .map(|y| format!("{}年", y)),
        ),
        (
            "本社所在地",
            owned(overview.and_then(|o| o.headquarters_address.as_deref())),
        ),
        (
            "従業員数",
            overview
                .and_then(|o| o.employee_count)
                .map(|n| format!("{}名", n)),
        ),
        (
            "上場区分",
            owned(overview.and_then(|o| o.listing_classification.as_deref())),
        ),
        ("Webサイト", owned(company.website_url.as_deref())),
    ]));
    html.push_str("</section>\n");

    if let Some(data) = company.data.as_ref() {
        html.push_str("<section id=\"company-data\">\n<h2>会社データプロフィール</h2>\n");
        html.push_str(&render_table(&[
            ("プロフィール", owned(data.profile.as_deref())),
            ("事業内容", owned(data.business_content.as_deref())),
            ("本社所在地", owned(data.headquarters_location.as_deref())),
            ("事業所", owned(data.offices.as_deref())),
        ]));
        html.push_str("</section>\n");
    }

    html.push_str("<section id=\"recruitment\">\n<h2>募集要項（本選考）</h2>\n");
    if recruitments.is_empty() {
        html.push_str("<p class=\"empty\">現在募集中の求人はありません</p>\n");
    } else {
        html.push_str("<ul class=\"link-list\">\n");
        for r in recruitments {
            html.push_str(&format!(
                "<li><a href=\"/companies/{}/recruitments/{}\">{}</a></li>\n",
                company.id,
                r.id,
                escape_html(r.display_title())
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");

    html.push_str("<section id=\"internship\">\n<h2>募集要項（長期インターン）</h2>\n");
    if internships.is_empty() {
        html.push_str("<p class=\"empty\">現在募集中のインターンシップはありません</p>\n");
    } else {
        html.push_str("<ul class=\"link-list\">\n");
        for i in internships {
            html.push_str(&format!(
                "<li><a href=\"/companies/{}/internships/{}\">{}</a></li>\n",
                company.id,
                i.id,
                escape_html(i.display_title())
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");
    html
}

pub fn render_recruitment_detail(recruitment: &Recruitment) -> String {
    let company = &recruitment.company;
    let mut html = render_header(
        company.logo_url.as_deref(),
        &company.name,
        &company.name,
        recruitment.display_title(),
    );
    html.push_str(&render_updated_at(recruitment.updated_at));
    html.push_str("\n<section>\n<h2>募集要項</h2>\n");
    html.push_str(&render_table(&[
        ("職種", owned(recruitment.job_type.as_deref())),
        ("職種詳細", owned(recruitment.job_type_description.as_deref())),
        ("仕事内容", owned(recruitment.job_description.as_deref())),
        ("勤務地", owned(recruitment.work_location.as_deref())),
        ("勤務時間", owned(recruitment.work_hours.as_deref())),
        ("募集人数", owned(recruitment.number_of_hires.as_deref())),
        ("給与・賞与", owned(recruitment.salary_bonus.as_deref())),
        (
            "年間休日",
            recruitment.annual_holidays.map(|d| format!("{}日", d)),
        ),
        ("休日休暇", owned(recruitment.holidays_leave.as_deref())),
        ("福利厚生", owned(recruitment.benefits.as_deref())),
        ("選考フロー", owned(recruitment.selection_flow.as_deref())),
    ]));
    html.push_str("</section>\n");
    html.push_str(&render_actions(
        "recruitment",
        &recruitment.id.to_string(),
        &recruitment.company_id.to_string(),
    ));
    html
}

pub fn render_internship_detail(internship: &Internship) -> String {
    let company = &internship.company;
    let mut html = render_header(
        company.logo_url.as_deref(),
        &company.name,
        &company.name,
        internship.display_title(),
    );
    html.push_str(&render_updated_at(internship.updated_at));
    html.push('\n');

    if !internship.tags.is_empty() {
        html.push_str("<section>\n<h2>この長期インターンの特徴</h2>\n<ul class=\"tags\">\n");
        for tag in &internship.tags {
            html.push_str(&format!("<li class=\"tag\">{}</li>\n", escape_html(&tag.name)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str("<section>\n<h2>インターン詳細</h2>\n");
    html.push_str(&render_table(&[
        ("職種", owned(internship.job_type.as_deref())),
        ("職種詳細", owned(internship.job_type_description.as_deref())),
        ("任せたい仕事", owned(internship.job_description.as_deref())),
        (
            "身につくスキル・経験",
            owned(internship.skills_to_acquire.as_deref()),
        ),
        ("勤務地", owned(internship.work_location.as_deref())),
        ("勤務時間", owned(internship.work_hours.as_deref())),
        ("給与", owned(internship.hourly_wage.as_deref())),
        ("応募資格", owned(internship.required_skills.as_deref())),
        ("歓迎スキル", owned(internship.preferred_skills.as_deref())),
        ("選考フロー", owned(internship.selection_flow.as_deref())),
    ]));
    html.push_str("</section>\n");
    html.push_str(&render_actions(
        "internship",
        &internship.id.to_string(),
        &internship.company_id.to_string(),
    ));
    html
}

/// Apply button wired up by the client script, plus a link back to the company.
fn render_actions(kind: &str, target_id: &str, company_id: &str) -> String {
    format!(
        concat!(
            "<section class=\"actions\">\n",
            "<button class=\"apply\" data-apply-type=\"{kind}\" data-apply-id=\"{target}\">応募する</button>\n",
            "<a href=\"/companies/{company}\">この企業について</a>\n",
            "</section>\n"
        ),
        kind = kind,
        target = target_id,
        company = company_id
    )
}
