use super::models::{Category, PortfolioItem};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter buttons, in display order.
    pub fn buttons() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Category::ALL.into_iter().map(Filter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All Work",
            Filter::Only(Category::Photography) => "Photography",
            Filter::Only(Category::Videography) => "Videography",
            Filter::Only(Category::Social) => "Social Media",
        }
    }

    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => item.category == category,
        }
    }
}

/// Items matching `filter`, in catalog order. Borrows; the catalog is untouched.
pub fn filter_items(items: &[PortfolioItem], filter: Filter) -> Vec<&PortfolioItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// What the portfolio grid area shows.
#[derive(Debug, PartialEq)]
pub enum GridView<'a> {
    Loading,
    Empty,
    Cards(Vec<&'a PortfolioItem>),
}

impl<'a> GridView<'a> {
    /// Loading wins over everything; an empty match is its own state, never an empty grid.
    pub fn build(is_loading: bool, items: &'a [PortfolioItem], filter: Filter) -> GridView<'a> {
        if is_loading {
            return GridView::Loading;
        }
        let visible = filter_items(items, filter);
        if visible.is_empty() {
            GridView::Empty
        } else {
            GridView::Cards(visible)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::Media;

    fn item(id: u32, category: Category) -> PortfolioItem {
        PortfolioItem {
            id,
            title: format!("item {}", id),
            description: String::new(),
            category,
            media: Media::PhotoPost { media_url: format!("https://www.instagram.com/p/{}/", id) },
        }
    }

    fn ids(items: &[&PortfolioItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let items = vec![
            item(3, Category::Social),
            item(1, Category::Photography),
            item(2, Category::Videography),
        ];
        assert_eq!(ids(&filter_items(&items, Filter::All)), vec![3, 1, 2]);
    }

    #[test]
    fn category_keeps_relative_order() {
        let items = vec![
            item(9, Category::Photography),
            item(4, Category::Videography),
            item(7, Category::Photography),
            item(1, Category::Photography),
        ];
        let photos = filter_items(&items, Filter::Only(Category::Photography));
        assert_eq!(ids(&photos), vec![9, 7, 1]);
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn no_matches_is_empty() {
        let items = vec![item(1, Category::Photography), item(2, Category::Videography)];
        assert!(filter_items(&items, Filter::Only(Category::Social)).is_empty());
    }

    #[test]
    fn embedded_catalog_splits_by_category() {
        let catalog = crate::portfolio::catalog::load().unwrap();
        let total: usize = Category::ALL
            .iter()
            .map(|c| filter_items(&catalog, Filter::Only(*c)).len())
            .sum();
        assert_eq!(total, catalog.len());
        assert_eq!(
            ids(&filter_items(&catalog, Filter::Only(Category::Videography))),
            vec![7, 8, 9]
        );
    }

    #[test]
    fn button_labels() {
        let labels: Vec<_> = Filter::buttons().map(Filter::label).collect();
        assert_eq!(labels, vec!["All Work", "Photography", "Videography", "Social Media"]);
    }

    #[test]
    fn grid_shows_spinner_while_loading() {
        let items = vec![item(1, Category::Photography)];
        assert_eq!(GridView::build(true, &items, Filter::All), GridView::Loading);
        assert_eq!(
            GridView::build(true, &items, Filter::Only(Category::Social)),
            GridView::Loading
        );
    }

    #[test]
    fn grid_zero_matches_is_empty_state() {
        let items = vec![item(1, Category::Photography), item(2, Category::Videography)];
        assert_eq!(
            GridView::build(false, &items, Filter::Only(Category::Social)),
            GridView::Empty
        );
        assert_eq!(GridView::build(false, &[], Filter::All), GridView::Empty);
    }

    #[test]
    fn grid_cards_follow_filter() {
        let items = vec![
            item(4, Category::Videography),
            item(2, Category::Social),
            item(6, Category::Videography),
        ];
        match GridView::build(false, &items, Filter::Only(Category::Videography)) {
            GridView::Cards(cards) => assert_eq!(ids(&cards), vec![4, 6]),
            other => panic!("expected cards, got {:?}", other),
        }
    }
}
