//! Portfolio grid with category filter.

use super::Page;
use crate::core::{
    capitalize, filter_items, project_href, CategorySet, PreferenceStore, Project, ALL_CATEGORIES,
};
use crate::dom::{ids, Document};

impl<D: Document, S: PreferenceStore> Page<D, S> {
    /// Build the category buttons and the initial unfiltered grid.
    ///
    /// Needs both `#portfolio-grid` and `#categories`; otherwise nothing is
    /// rendered and filtering stays inert.
    pub(crate) fn render_portfolio(&mut self, items: &[Project]) {
        if self.doc.by_id(ids::PORTFOLIO_GRID).is_none() {
            return;
        }
        let Some(container) = self.doc.by_id(ids::CATEGORIES) else {
            return;
        };
        self.portfolio_items = items.to_vec();

        let categories = CategorySet::from_items(items);
        for category in categories.filterable() {
            let Some(button) = self.doc.create("button") else {
                continue;
            };
            self.doc.set_attr(&button, ids::FILTER_ATTR, category);
            self.doc.set_text(&button, &capitalize(category));
            self.doc.append(&container, &button);
        }
        log::debug!(
            "portfolio: {} items, {} categories",
            items.len(),
            categories.len() - 1
        );

        self.active_filter = ALL_CATEGORIES.to_string();
        self.render_items(ALL_CATEGORIES);
    }

    /// Make `filter` the active category and re-render the grid.
    pub fn select_category(&mut self, filter: &str) {
        let Some(container) = self.doc.by_id(ids::CATEGORIES) else {
            return;
        };
        for button in self.doc.children(&container) {
            let matches = self
                .doc
                .attr(&button, ids::FILTER_ATTR)
                .is_some_and(|f| f == filter);
            self.doc.set_class(&button, ids::ACTIVE_CLASS, matches);
        }
        self.active_filter = filter.to_string();
        self.render_items(filter);
    }

    /// Clear the grid and append one card per item matching `filter`.
    fn render_items(&mut self, filter: &str) {
        let Some(grid) = self.doc.by_id(ids::PORTFOLIO_GRID) else {
            return;
        };
        self.doc.clear(&grid);

        let items = filter_items(&self.portfolio_items, filter);
        for (index, item) in items.into_iter().enumerate() {
            let href = project_href(&self.config.project_page, &item.id);
            let delay = self.config.stagger_delay(index);
            if let Some(card) = build_card(&mut self.doc, item, &href, &delay) {
                self.doc.append(&grid, &card);
            }
        }
    }
}

fn build_card<D: Document>(doc: &mut D, item: &Project, href: &str, delay: &str) -> Option<D::Node> {
    let card = doc.create("a")?;
    doc.set_attr(&card, "class", "portfolio-item fade-in-up");
    doc.set_attr(&card, "href", href);
    doc.set_style(&card, "animation-delay", delay);
    doc.set_style(&card, "display", "block");

    let img = doc.create("img")?;
    doc.set_attr(&img, "src", item.image.as_deref().unwrap_or(""));
    doc.set_attr(&img, "alt", item.title_or_empty());
    doc.set_attr(&img, "loading", "lazy");
    doc.append(&card, &img);

    let overlay = doc.create("div")?;
    doc.set_attr(&overlay, "class", "portfolio-overlay");
    let title = doc.create("h4")?;
    doc.set_text(&title, item.title_or_empty());
    let category = doc.create("p")?;
    doc.set_text(&category, &item.category);
    doc.append(&overlay, &title);
    doc.append(&overlay, &category);
    doc.append(&card, &overlay);

    Some(card)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::{ContentSchema, Location, MemoryPreferenceStore, SiteConfig};
    use crate::dom::{ids, Document, MemoryDocument};
    use crate::page::{ClickTarget, Page, PageEvent};

    fn page() -> Page<MemoryDocument, MemoryPreferenceStore> {
        let mut page = Page::new(
            MemoryDocument::home_page(),
            MemoryPreferenceStore::new(),
            SiteConfig::default(),
            Location::parse("/index.html"),
        );
        page.load(
            ContentSchema::from_value(json!({
                "portfolio": [
                    {"id": "p1", "title": "Logo", "category": "branding", "image": "a.jpg"},
                    {"id": "p2", "title": "Poster", "category": "print", "image": "b.jpg"},
                    {"id": "p3", "title": "Mark", "category": "branding", "image": "c.jpg"}
                ]
            }))
            .unwrap(),
        );
        page
    }

    fn card_hrefs(page: &Page<MemoryDocument, MemoryPreferenceStore>) -> Vec<String> {
        let doc = page.doc();
        let grid = doc.by_id(ids::PORTFOLIO_GRID).unwrap();
        doc.children(&grid)
            .iter()
            .filter_map(|card| doc.attr(card, "href"))
            .collect()
    }

    #[test]
    fn category_buttons_follow_first_seen_order() {
        let page = page();
        let doc = page.doc();
        let container = doc.by_id(ids::CATEGORIES).unwrap();
        let labels: Vec<String> = doc
            .children(&container)
            .into_iter()
            .map(|b| doc.text(b))
            .collect();
        assert_eq!(labels, vec!["All", "Branding", "Print"]);
    }

    #[test]
    fn initial_grid_shows_everything_staggered() {
        let page = page();
        assert_eq!(
            card_hrefs(&page),
            vec!["project.html?id=p1", "project.html?id=p2", "project.html?id=p3"]
        );

        let doc = page.doc();
        let grid = doc.by_id(ids::PORTFOLIO_GRID).unwrap();
        let cards = doc.children(&grid);
        assert_eq!(doc.style(cards[2], "animation-delay"), Some("200ms"));
        assert_eq!(doc.style(cards[0], "display"), Some("block"));
        assert!(doc.has_class(&cards[0], "fade-in-up"));

        let img = doc.children(&cards[1])[0];
        assert_eq!(doc.attr(&img, "loading").as_deref(), Some("lazy"));
        assert_eq!(doc.attr(&img, "alt").as_deref(), Some("Poster"));
    }

    #[test]
    fn category_click_filters_and_moves_active() {
        let mut page = page();
        assert!(page.dispatch(PageEvent::Click(ClickTarget::Category("branding".into()))));

        assert_eq!(page.active_filter(), "branding");
        assert_eq!(
            card_hrefs(&page),
            vec!["project.html?id=p1", "project.html?id=p3"]
        );
        // Stagger restarts at zero for the filtered list.
        let doc = page.doc();
        let grid = doc.by_id(ids::PORTFOLIO_GRID).unwrap();
        assert_eq!(doc.style(doc.children(&grid)[1], "animation-delay"), Some("100ms"));

        let container = doc.by_id(ids::CATEGORIES).unwrap();
        let active: Vec<String> = doc
            .children(&container)
            .into_iter()
            .filter(|b| doc.has_class(b, ids::ACTIVE_CLASS))
            .filter_map(|b| doc.attr(&b, ids::FILTER_ATTR))
            .collect();
        assert_eq!(active, vec!["branding"]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let mut page = page();
        page.select_category("Branding");
        assert!(card_hrefs(&page).is_empty());

        page.select_category("all");
        assert_eq!(card_hrefs(&page).len(), 3);
    }

    #[test]
    fn missing_title_and_image_render_empty() {
        let mut page = Page::new(
            MemoryDocument::home_page(),
            MemoryPreferenceStore::new(),
            SiteConfig::default(),
            Location::parse("/"),
        );
        page.load(
            ContentSchema::from_value(json!({"portfolio": [{"id": "bare", "category": "misc"}]}))
                .unwrap(),
        );
        let doc = page.doc();
        let grid = doc.by_id(ids::PORTFOLIO_GRID).unwrap();
        let card = doc.children(&grid)[0];
        let img = doc.children(&card)[0];
        assert_eq!(doc.attr(&img, "src").as_deref(), Some(""));
        assert_eq!(doc.attr(&img, "alt").as_deref(), Some(""));
    }

    #[test]
    fn no_grid_means_no_buttons() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let categories = doc.add(root, "div", Some(ids::CATEGORIES), &[]);
        let mut page = Page::new(
            doc,
            MemoryPreferenceStore::new(),
            SiteConfig::default(),
            Location::parse("/"),
        );
        page.load(
            ContentSchema::from_value(json!({"portfolio": [{"id": "p1", "category": "web"}]}))
                .unwrap(),
        );
        assert!(page.doc().children(&categories).is_empty());
    }
}
