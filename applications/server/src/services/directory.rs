//! Filter, sort and paginate over the loaded users.

use crate::error::{Result, ServerError};
use std::cmp::Ordering;
use usersearch_core::{OrderBy, OrderField, User};

/// A validated search, as decoded from the query string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub query: String,
    pub order_field: OrderField,
    pub order_by: OrderBy,
    pub offset: usize,
    pub limit: usize,
}

type Comparator = fn(&User, &User) -> Ordering;

/// Natural ascending order per sortable field.
///
/// Sorting by a new field means adding a row here.
const COMPARATORS: [(OrderField, Comparator); 3] = [
    (OrderField::Id, by_id),
    (OrderField::Name, by_name),
    (OrderField::Age, by_age),
];

fn by_id(a: &User, b: &User) -> Ordering {
    a.id.cmp(&b.id)
}

fn by_name(a: &User, b: &User) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_age(a: &User, b: &User) -> Ordering {
    a.age.cmp(&b.age)
}

fn comparator(field: OrderField) -> Option<Comparator> {
    COMPARATORS
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, compare)| *compare)
}

/// Stable in-place sort. `AsIs` leaves the slice untouched.
pub fn sort_users(users: &mut [User], field: OrderField, direction: OrderBy) {
    let Some(compare) = comparator(field) else {
        return;
    };

    match direction {
        OrderBy::AsIs => {}
        OrderBy::Asc => users.sort_by(compare),
        OrderBy::Desc => users.sort_by(|a, b| compare(a, b).reverse()),
    }
}

/// Read-only set of users loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Run a search and return the requested page.
    ///
    /// An offset that skips every match is an error; a limit larger than
    /// what remains is not.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<User>> {
        let mut found: Vec<User> = self
            .users
            .iter()
            .filter(|user| user.matches(&query.query))
            .cloned()
            .collect();

        sort_users(&mut found, query.order_field, query.order_by);

        if query.offset >= found.len() {
            return Err(ServerError::OffsetTooLarge {
                offset: query.offset,
                found: found.len(),
            });
        }

        Ok(found
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, age: u32, about: &str) -> User {
        User {
            id,
            name: name.to_string(),
            age,
            about: about.to_string(),
            gender: "female".to_string(),
        }
    }

    fn directory() -> UserDirectory {
        UserDirectory::new(vec![
            user(3, "Carol Dunn", 40, "Sails every summer"),
            user(1, "Alice Lee", 30, "Writes still life poems"),
            user(2, "Bob Hill", 30, "Fixes bikes"),
            user(5, "Dave Wills", 25, "Knits"),
        ])
    }

    fn ids(users: &[User]) -> Vec<i64> {
        users.iter().map(|u| u.id).collect()
    }

    fn query(text: &str, field: OrderField, direction: OrderBy) -> SearchQuery {
        SearchQuery {
            query: text.to_string(),
            order_field: field,
            order_by: direction,
            offset: 0,
            limit: 100,
        }
    }

    #[test]
    fn test_every_field_has_a_comparator() {
        for field in [OrderField::Id, OrderField::Name, OrderField::Age] {
            assert!(comparator(field).is_some(), "{} has no comparator", field);
        }
    }

    #[test]
    fn test_empty_query_matches_all_in_dataset_order() {
        let found = directory()
            .search(&query("", OrderField::Name, OrderBy::AsIs))
            .unwrap();
        assert_eq!(ids(&found), vec![3, 1, 2, 5]);
    }

    #[test]
    fn test_filter_checks_name_and_about() {
        let found = directory()
            .search(&query("ill", OrderField::Name, OrderBy::AsIs))
            .unwrap();
        // "still" in about, "Hill" and "Wills" in names
        assert_eq!(ids(&found), vec![1, 2, 5]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let result = directory().search(&query("knits", OrderField::Name, OrderBy::AsIs));
        assert!(matches!(
            result,
            Err(ServerError::OffsetTooLarge { offset: 0, found: 0 })
        ));
    }

    #[test]
    fn test_sort_by_id() {
        let dir = directory();
        let asc = dir.search(&query("", OrderField::Id, OrderBy::Asc)).unwrap();
        let desc = dir.search(&query("", OrderField::Id, OrderBy::Desc)).unwrap();
        assert_eq!(ids(&asc), vec![1, 2, 3, 5]);
        assert_eq!(ids(&desc), vec![5, 3, 2, 1]);
    }

    #[test]
    fn test_sort_by_name_is_lexicographic() {
        let found = directory()
            .search(&query("", OrderField::Name, OrderBy::Asc))
            .unwrap();
        assert_eq!(ids(&found), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_sort_by_age_is_stable_for_ties() {
        let dir = directory();
        let asc = dir.search(&query("", OrderField::Age, OrderBy::Asc)).unwrap();
        let desc = dir.search(&query("", OrderField::Age, OrderBy::Desc)).unwrap();
        // Alice (1) and Bob (2) are both 30 and keep dataset order either way
        assert_eq!(ids(&asc), vec![5, 1, 2, 3]);
        assert_eq!(ids(&desc), vec![3, 1, 2, 5]);
    }

    #[test]
    fn test_offset_and_limit() {
        let mut q = query("", OrderField::Id, OrderBy::Asc);
        q.offset = 1;
        q.limit = 2;
        let found = directory().search(&q).unwrap();
        assert_eq!(ids(&found), vec![2, 3]);
    }

    #[test]
    fn test_limit_larger_than_remaining_returns_rest() {
        let mut q = query("", OrderField::Id, OrderBy::Asc);
        q.offset = 2;
        q.limit = 50;
        let found = directory().search(&q).unwrap();
        assert_eq!(ids(&found), vec![3, 5]);
    }

    #[test]
    fn test_offset_boundaries() {
        let dir = directory();

        let mut last = query("", OrderField::Id, OrderBy::Asc);
        last.offset = 3;
        last.limit = 5;
        assert_eq!(ids(&dir.search(&last).unwrap()), vec![5]);

        let mut past = last.clone();
        past.offset = 4;
        assert!(matches!(
            dir.search(&past),
            Err(ServerError::OffsetTooLarge { offset: 4, found: 4 })
        ));
    }

    #[test]
    fn test_zero_limit_returns_empty_page() {
        let mut q = query("", OrderField::Id, OrderBy::Asc);
        q.limit = 0;
        assert!(directory().search(&q).unwrap().is_empty());
    }
}
