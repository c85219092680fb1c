//! Client-side search over the cached record list

use std::cmp::Ordering;

use crate::schema::Resource;

/// Case-insensitive substring filter on the record name, sorted ascending
/// by name. Case-insensitive comparison first, case-sensitive tiebreak;
/// full ties keep their relative order (the sort is stable). An empty
/// query returns the whole list, sorted.
pub fn filter_by_name<R: Resource>(query: &str, records: &[R]) -> Vec<R> {
    let needle = query.to_lowercase();
    let mut rows: Vec<R> = records
        .iter()
        .filter(|record| record.name().to_lowercase().contains(&needle))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        match a.name().to_lowercase().cmp(&b.name().to_lowercase()) {
            Ordering::Equal => a.name().cmp(b.name()),
            order => order,
        }
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gender, User};

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            gender: Gender::Other,
            banned: false,
        }
    }

    fn names(rows: &[User]) -> Vec<&str> {
        rows.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        let records = [user("1", "Rex"), user("2", "felix"), user("3", "TREX")];
        let rows = filter_by_name("rex", &records);
        assert_eq!(names(&rows), ["Rex", "TREX"]);
    }

    #[test]
    fn test_empty_query_returns_all_sorted() {
        let records = [user("1", "zoe"), user("2", "Adam"), user("3", "mia")];
        let rows = filter_by_name("", &records);
        assert_eq!(names(&rows), ["Adam", "mia", "zoe"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let records = [user("1", "Rex")];
        assert!(filter_by_name("xyz", &records).is_empty());
    }

    #[test]
    fn test_full_ties_keep_relative_order() {
        let records = [user("first", "Rex"), user("second", "Rex")];
        let rows = filter_by_name("", &records);
        assert_eq!(rows[0].id, "first");
        assert_eq!(rows[1].id, "second");
    }

    #[test]
    fn test_result_contains_exactly_the_matches() {
        let records = [user("1", "Rex"), user("2", "Felix"), user("3", "Bella")];
        let rows = filter_by_name("el", &records);
        assert_eq!(names(&rows), ["Bella", "Felix"]);
    }
}
