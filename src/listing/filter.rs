use super::criteria::{FilterCriteria, Selection};
use super::Listable;

/// True if any of `values` equals `target` exactly.
///
/// This is the existential predicate used for one-to-many attributes, e.g. a
/// company matches a job-type filter when any one of its recruitments does.
pub fn any_equals<'a, I>(values: I, target: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().any(|value| value == target)
}

/// `keyword` must already be trimmed and lowercased.
pub fn matches_keyword<T: Listable + ?Sized>(item: &T, keyword: &str) -> bool {
    item.searchable_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(keyword))
}

pub fn matches_area<T: Listable + ?Sized>(item: &T, area: &Selection) -> bool {
    match area.value() {
        None => true,
        Some(area) => item.location().is_some_and(|location| location.contains(area)),
    }
}

pub fn matches_industry<T: Listable + ?Sized>(item: &T, industry: &Selection) -> bool {
    match industry.value() {
        None => true,
        Some(target) => any_equals(item.industries(), target),
    }
}

pub fn matches_job_type<T: Listable + ?Sized>(item: &T, job_type: &Selection) -> bool {
    match job_type.value() {
        None => true,
        Some(target) => any_equals(item.job_types(), target),
    }
}

pub fn matches_tag<T: Listable + ?Sized>(item: &T, tag: &Selection) -> bool {
    match tag.value() {
        None => true,
        Some(target) => item.tag_ids().iter().any(|id| id == target),
    }
}

/// Every criterion must hold.
pub fn matches<T: Listable + ?Sized>(
    item: &T,
    keyword: Option<&str>,
    criteria: &FilterCriteria,
) -> bool {
    keyword.map_or(true, |kw| matches_keyword(item, kw))
        && matches_area(item, &criteria.area)
        && matches_industry(item, &criteria.industry)
        && matches_job_type(item, &criteria.job_type)
        && matches_tag(item, &criteria.tag)
}

/// Keeps input order.
pub fn filter_items<'a, T: Listable>(items: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    let keyword = criteria.folded_keyword();
    items
        .iter()
        .filter(|item| matches(*item, keyword.as_deref(), criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::fixtures::Item;

    fn criteria() -> FilterCriteria {
        FilterCriteria::default()
    }

    #[test]
    fn all_sentinel_keeps_everything() {
        let items = vec![
            Item::titled("a").located("愛知県名古屋市"),
            Item::titled("b"),
            Item::titled("c").industry("IT"),
        ];
        let kept = filter_items(&items, &criteria());
        assert_eq!(kept.len(), items.len());
    }

    #[test]
    fn keyword_is_case_insensitive_substring() {
        let items = vec![Item::titled("Backend Engineer"), Item::titled("Sales")];
        let c = FilterCriteria {
            keyword: "engineer".into(),
            ..criteria()
        };
        let kept = filter_items(&items, &c);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].fields[0].as_deref(), Some("Backend Engineer"));
    }

    #[test]
    fn keyword_checks_every_designated_field_and_skips_missing() {
        let item = Item {
            fields: vec![None, Some("株式会社テック".into()), Some("Web開発".into())],
            ..Item::default()
        };
        assert!(matches_keyword(&item, "web"));
        assert!(matches_keyword(&item, "テック"));
        assert!(!matches_keyword(&item, "営業"));
    }

    #[test]
    fn area_matches_more_specific_address() {
        let item = Item::titled("x").located("愛知県名古屋市中区錦3-1-1");
        assert!(matches_area(&item, &Selection::from("愛知県")));
        assert!(!matches_area(&item, &Selection::from("岐阜県")));
        assert!(!matches_area(&Item::titled("y"), &Selection::from("愛知県")));
    }

    #[test]
    fn industry_is_exact_not_substring() {
        let item = Item::titled("x").industry("IT・通信");
        assert!(!matches_industry(&item, &Selection::from("IT")));
        assert!(matches_industry(&item, &Selection::from("IT・通信")));
    }

    #[test]
    fn job_type_matches_any_nested_value() {
        let item = Item::titled("x").job_type("営業").job_type("エンジニア");
        assert!(matches_job_type(&item, &Selection::from("エンジニア")));
        assert!(!matches_job_type(&item, &Selection::from("人事")));
        assert!(!matches_job_type(&Item::titled("y"), &Selection::from("営業")));
    }

    #[test]
    fn industry_and_tag_compose_with_and() {
        let only_industry = Item::titled("only industry").industry("IT");
        let both = Item::titled("both").industry("IT").tag("remote-ok");
        let only_tag = Item::titled("only tag").tag("remote-ok");
        let items = vec![only_industry, both, only_tag];

        let c = FilterCriteria {
            industry: Selection::from("IT"),
            tag: Selection::from("remote-ok"),
            ..criteria()
        };
        let kept = filter_items(&items, &c);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].fields[0].as_deref(), Some("both"));
    }

    #[test]
    fn adding_a_criterion_never_grows_the_result() {
        let items = vec![
            Item::titled("Engineer A").located("愛知県").industry("IT"),
            Item::titled("Engineer B").located("三重県").industry("IT"),
            Item::titled("Designer").located("愛知県").industry("広告"),
        ];
        let base = FilterCriteria {
            keyword: "engineer".into(),
            ..criteria()
        };
        let narrowed = FilterCriteria {
            area: Selection::from("愛知県"),
            ..base.clone()
        };
        let wide = filter_items(&items, &base);
        let narrow = filter_items(&items, &narrowed);
        assert!(narrow.len() <= wide.len());
        assert!(narrow.iter().all(|n| wide.iter().any(|w| std::ptr::eq(*n, *w))));
    }

    #[test]
    fn filtering_preserves_input_order() {
        let items = vec![
            Item::titled("IT 1").industry("IT"),
            Item::titled("other"),
            Item::titled("IT 2").industry("IT"),
        ];
        let c = FilterCriteria {
            industry: Selection::from("IT"),
            ..criteria()
        };
        let titles: Vec<_> = filter_items(&items, &c)
            .iter()
            .map(|i| i.fields[0].clone().unwrap())
            .collect();
        assert_eq!(titles, vec!["IT 1", "IT 2"]);
    }
}
