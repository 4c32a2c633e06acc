//! Pure in-memory views over an already-fetched instructor list: filtering,
//! grouping, free-text search and name ordering. No I/O; every function is
//! total over its input.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::{Gender, Instructor};

/// Keeps an instructor iff it matches every filter that is present. Both
/// filters are optional and independent; passing neither returns the input.
pub fn filter_by_center_and_category(
    list: Vec<Instructor>,
    center: Option<&str>,
    category: Option<&str>,
) -> Vec<Instructor> {
    list.into_iter()
        .filter(|inst| center.is_none_or(|c| inst.current_center == c))
        .filter(|inst| category.is_none_or(|c| inst.category == c))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CenterGroup {
    pub center: String,
    pub categories: Vec<CategoryGroup>,
}

#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub instructors: Vec<Instructor>,
}

/// Groups instructors by facility, then by category, in the caller-supplied
/// order (display priority, not alphabetical). Empty buckets are dropped, and
/// facilities with no remaining bucket are dropped too.
pub fn group_by_center_then_category(
    list: &[Instructor],
    centers: &[&str],
    categories: &[&str],
) -> Vec<CenterGroup> {
    centers
        .iter()
        .map(|&center| CenterGroup {
            center: center.to_owned(),
            categories: categories
                .iter()
                .map(|&category| CategoryGroup {
                    category: category.to_owned(),
                    instructors: list
                        .iter()
                        .filter(|inst| {
                            inst.current_center == center && inst.category == category
                        })
                        .cloned()
                        .collect(),
                })
                .filter(|group| !group.instructors.is_empty())
                .collect(),
        })
        .filter(|group| !group.categories.is_empty())
        .collect()
}

/// Search label for a gender value.
pub fn gender_label(gender: Option<Gender>) -> &'static str {
    match gender {
        Some(Gender::Male) => "남자",
        Some(Gender::Female) => "여자",
        None => "",
    }
}

/// Case-insensitive substring search across name, position, category, gender
/// label, center and assigned classes. A blank term matches everything.
pub fn search_instructors(list: Vec<Instructor>, term: &str) -> Vec<Instructor> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return list;
    }

    list.into_iter()
        .filter(|inst| {
            let assigned = inst.assigned_classes.join(" ");
            let haystack = [
                inst.name.as_str(),
                inst.position.as_str(),
                inst.category.as_str(),
                gender_label(inst.gender),
                inst.current_center.as_str(),
                assigned.as_str(),
            ]
            .join(" ")
            .to_lowercase();
            haystack.contains(&needle)
        })
        .collect()
}

/// Script class for the `ko` locale: Hangul orders ahead of other letters,
/// digits and punctuation ahead of both.
fn collation_class(c: char) -> u8 {
    if is_hangul(c) {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        0
    }
}

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7A3}'     // precomposed syllables, already in reading order
        | '\u{1100}'..='\u{11FF}'   // jamo
        | '\u{3130}'..='\u{318F}'   // compatibility jamo
        | '\u{A960}'..='\u{A97F}'
        | '\u{D7B0}'..='\u{D7FF}'
    )
}

/// Korean-locale name comparison.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| (collation_class(c), c))
        .cmp(b.chars().map(|c| (collation_class(c), c)))
}

/// Orders by name under Korean collation. Stable: equal names keep their
/// relative input order, which later grouping relies on.
pub fn sort_by_name(mut list: Vec<Instructor>) -> Vec<Instructor> {
    list.sort_by(|a, b| compare_names(&a.name, &b.name));
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instructor(id: &str, name: &str, center: &str, category: &str) -> Instructor {
        Instructor::from_document(
            id,
            &json!({
                "name": name,
                "currentCenter": center,
                "category": category,
                "position": "강사",
            }),
        )
    }

    fn ids(list: &[Instructor]) -> Vec<&str> {
        list.iter().map(|inst| inst.id.as_str()).collect()
    }

    fn sample() -> Vec<Instructor> {
        vec![
            instructor("i1", "김강사", "문화체육센터", "수영"),
            instructor("i2", "이강사", "문화체육센터", "헬스"),
            instructor("i3", "박강사", "용산청소년센터", "수영"),
        ]
    }

    #[test]
    fn filters_are_independent_and_optional() {
        assert_eq!(
            ids(&filter_by_center_and_category(sample(), Some("문화체육센터"), Some("수영"))),
            vec!["i1"]
        );
        assert_eq!(
            ids(&filter_by_center_and_category(sample(), Some("문화체육센터"), None)),
            vec!["i1", "i2"]
        );
        assert_eq!(
            ids(&filter_by_center_and_category(sample(), None, Some("수영"))),
            vec!["i1", "i3"]
        );
        assert_eq!(
            ids(&filter_by_center_and_category(sample(), None, None)),
            vec!["i1", "i2", "i3"]
        );
        assert!(
            filter_by_center_and_category(sample(), Some("문화체육센터"), Some("서킷핏"))
                .is_empty()
        );
    }

    #[test]
    fn grouping_follows_caller_order_and_drops_empty_buckets() {
        let list = sample();
        let groups = group_by_center_then_category(
            &list,
            &["용산청소년센터", "문화체육센터", "꿈나무종합타운"],
            &["헬스", "수영"],
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].center, "용산청소년센터");
        assert_eq!(groups[0].categories.len(), 1);
        assert_eq!(groups[0].categories[0].category, "수영");
        assert_eq!(groups[1].center, "문화체육센터");
        let categories: Vec<&str> = groups[1]
            .categories
            .iter()
            .map(|g| g.category.as_str())
            .collect();
        assert_eq!(categories, vec!["헬스", "수영"]);
    }

    #[test]
    fn blank_search_term_matches_everything() {
        assert_eq!(ids(&search_instructors(sample(), "")), vec!["i1", "i2", "i3"]);
        assert_eq!(ids(&search_instructors(sample(), "   ")), vec!["i1", "i2", "i3"]);
    }

    #[test]
    fn search_is_case_insensitive_over_position() {
        let list = vec![Instructor::from_document(
            "i1",
            &json!({ "name": "Kim", "position": "swim instructor" }),
        )];
        assert_eq!(ids(&search_instructors(list, "SWIM")), vec!["i1"]);
    }

    #[test]
    fn search_covers_gender_label_and_assigned_classes() {
        let list = vec![Instructor::from_document(
            "i1",
            &json!({
                "name": "김강사",
                "gender": "male",
                "assignedClasses": ["월수금 새벽반", "주말 상급반"],
            }),
        )];

        assert_eq!(ids(&search_instructors(list.clone(), "남자")), vec!["i1"]);
        assert_eq!(ids(&search_instructors(list.clone(), "상급반")), vec!["i1"]);
        assert!(search_instructors(list, "여자").is_empty());
    }

    #[test]
    fn sorts_hangul_names_in_reading_order() {
        let list = vec![
            instructor("i1", "영희", "c", "k"),
            instructor("i2", "철수", "c", "k"),
            instructor("i3", "가영", "c", "k"),
        ];
        let sorted = sort_by_name(list);
        let names: Vec<&str> = sorted.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["가영", "영희", "철수"]);
    }

    #[test]
    fn hangul_orders_ahead_of_latin() {
        assert_eq!(compare_names("가영", "Alice"), Ordering::Less);
        assert_eq!(compare_names("Alice", "가영"), Ordering::Greater);
    }

    #[test]
    fn sort_is_stable_for_equal_names() {
        let list = vec![
            instructor("first", "김강사", "a", "x"),
            instructor("second", "김강사", "b", "y"),
        ];
        assert_eq!(ids(&sort_by_name(list)), vec!["first", "second"]);
    }
}
