//! Category index for the portfolio filter.

use crate::core::Project;

/// Sentinel filter value selecting every item.
pub const ALL_CATEGORIES: &str = "all";

/// Insertion-ordered set of categories, always starting with [`ALL_CATEGORIES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Collect the unique categories of `items` in first-seen order.
    pub fn from_items(items: &[Project]) -> Self {
        let mut names = vec![ALL_CATEGORIES.to_string()];
        for item in items {
            if !names.iter().any(|n| n == &item.category) {
                names.push(item.category.clone());
            }
        }
        Self { names }
    }

    /// All names, sentinel first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names that get their own filter control (everything but the sentinel).
    pub fn filterable(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|n| *n != ALL_CATEGORIES)
    }

    /// Number of names including the sentinel.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true; the sentinel is always present.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Items matching `filter`, in original order.
///
/// [`ALL_CATEGORIES`] selects everything; any other value is an exact,
/// case-sensitive match on `category`.
pub fn filter_items<'a>(items: &'a [Project], filter: &str) -> Vec<&'a Project> {
    if filter == ALL_CATEGORIES {
        items.iter().collect()
    } else {
        items.iter().filter(|item| item.category == filter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> Project {
        Project {
            id: id.to_string(),
            title: None,
            category: category.to_string(),
            description: None,
            image: None,
            gallery: None,
        }
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let items = vec![
            item("a", "web"),
            item("b", "branding"),
            item("c", "web"),
            item("d", "print"),
        ];
        let set = CategorySet::from_items(&items);
        assert_eq!(set.names(), &["all", "web", "branding", "print"]);
        assert_eq!(set.filterable().collect::<Vec<_>>(), vec!["web", "branding", "print"]);
    }

    #[test]
    fn empty_items_still_have_sentinel() {
        let set = CategorySet::from_items(&[]);
        assert_eq!(set.names(), &["all"]);
        assert_eq!(set.filterable().count(), 0);
        assert!(!set.is_empty());
    }

    #[test]
    fn item_named_all_is_not_duplicated() {
        let set = CategorySet::from_items(&[item("a", "all"), item("b", "web")]);
        assert_eq!(set.names(), &["all", "web"]);
    }

    #[test]
    fn filter_is_exact_and_ordered() {
        let items = vec![
            item("a", "web"),
            item("b", "Web"),
            item("c", "web"),
            item("d", "webdesign"),
        ];
        let ids: Vec<_> = filter_items(&items, "web").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let all: Vec<_> = filter_items(&items, "all").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(all, vec!["a", "b", "c", "d"]);

        assert!(filter_items(&items, "print").is_empty());
    }
}
