//! Server-rendered HTML. Every function is pure and returns a fragment or a
//! full document as a `String`; all dynamic text goes through
//! [`layout::escape_html`].

pub mod cards;
pub mod detail;
pub mod home;
pub mod layout;
pub mod search;

#[cfg(test)]
mod tests {
    use super::cards::{render_company_card, render_internship_card, render_recruitment_card};
    use super::detail::render_company_detail;
    use crate::models::company::{Company, CompanyBasicInfo, CompanyOverview};
    use crate::models::internship::{Internship, InternshipTag};
    use crate::models::recruitment::Recruitment;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn company() -> Company {
        Company {
            id: Uuid::new_v4(),
            name: "東海<テック>".into(),
            name_kana: Some("トウカイテック".into()),
            logo_url: None,
            website_url: Some("https://tokai-tech.example.jp".into()),
            created_at: None,
            updated_at: Some(Utc.with_ymd_and_hms(2025, 4, 1, 3, 0, 0).unwrap()),
            overview: Some(CompanyOverview {
                industry: Some("IT".into()),
                established_year: Some(2015),
                headquarters_address: Some("愛知県名古屋市中区錦3-1-1".into()),
                employee_count: Some(85),
                listing_classification: Some("非上場".into()),
            }),
            data: None,
            recruitment_job_types: vec![],
        }
    }

    fn basic(c: &Company) -> CompanyBasicInfo {
        c.basic_info()
    }

    fn internship(c: &Company) -> Internship {
        Internship {
            id: Uuid::new_v4(),
            company_id: c.id,
            title: None,
            job_type_id: None,
            job_type: Some("エンジニア".into()),
            job_type_description: Some("Webエンジニア".into()),
            job_description: None,
            skills_to_acquire: None,
            work_location: Some("名古屋市".into()),
            work_hours: None,
            hourly_wage: Some("1,200円".into()),
            required_skills: None,
            preferred_skills: None,
            selection_flow: None,
            created_at: None,
            updated_at: None,
            company: basic(c),
            tags: vec![InternshipTag {
                id: Uuid::new_v4(),
                name: "リモート可".into(),
                category: None,
            }],
        }
    }

    fn recruitment(c: &Company) -> Recruitment {
        Recruitment {
            id: Uuid::new_v4(),
            company_id: c.id,
            job_type_id: None,
            job_type: None,
            job_type_description: Some("総合職".into()),
            job_description: None,
            work_location: None,
            work_hours: None,
            number_of_hires: Some("3名".into()),
            salary_bonus: None,
            annual_holidays: Some(125),
            holidays_leave: None,
            benefits: None,
            selection_flow: None,
            created_at: None,
            updated_at: None,
            company: basic(c),
        }
    }

    #[test]
    fn company_card_escapes_name_and_shows_updated_date() {
        let html = render_company_card(&company());
        assert!(html.contains("東海&lt;テック&gt;"));
        assert!(html.contains("最終更新: 2025/04/01"));
        assert!(html.contains("placeholder-logo.svg"));
        assert!(html.contains("<span class=\"label\">業界:</span> IT"));
    }

    #[test]
    fn internship_card_falls_back_to_default_title() {
        let c = company();
        let html = render_internship_card(&internship(&c));
        assert!(html.contains("<h2>インターン募集</h2>"));
        assert!(html.contains("<li class=\"tag\">リモート可</li>"));
        assert!(html.contains("最終更新: 不明"));
        assert!(html.contains(&format!("/companies/{}/internships/", c.id)));
    }

    #[test]
    fn recruitment_card_uses_description_title() {
        let c = company();
        let html = render_recruitment_card(&recruitment(&c));
        assert!(html.contains("<h2>総合職</h2>"));
        assert!(html.contains("求人内容の記載なし"));
    }

    #[test]
    fn company_detail_lists_openings() {
        let c = company();
        let html = render_company_detail(&c, &[recruitment(&c)], &[]);
        assert!(html.contains("<tr><th>設立</th><td>2015年</td></tr>"));
        assert!(html.contains("<tr><th>従業員数</th><td>85名</td></tr>"));
        assert!(html.contains("総合職</a>"));
        assert!(html.contains("現在募集中のインターンシップはありません"));
    }
}
