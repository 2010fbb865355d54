//! Nav bar scroll state and logo.

use super::Page;
use crate::core::PreferenceStore;
use crate::dom::{ids, Document};

impl<D: Document, S: PreferenceStore> Page<D, S> {
    pub(crate) fn init_nav(&mut self) {
        if let Some(logo) = self.doc.query(ids::LOGO_SELECTOR) {
            self.doc.set_style(&logo, "cursor", "pointer");
        }
    }

    /// Toggle the nav's `scrolled` class for a vertical scroll offset.
    pub fn update_nav(&mut self, offset: f64) {
        let Some(nav) = self.doc.query(ids::NAV_SELECTOR) else {
            return;
        };
        let scrolled = offset > self.config.scroll_threshold;
        self.doc.set_class(&nav, ids::SCROLLED_CLASS, scrolled);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Location, MemoryPreferenceStore, SiteConfig};
    use crate::dom::{ids, Document, MemoryDocument};
    use crate::page::{ClickTarget, Page, PageEvent};

    fn page(config: SiteConfig) -> Page<MemoryDocument, MemoryPreferenceStore> {
        Page::new(
            MemoryDocument::home_page(),
            MemoryPreferenceStore::new(),
            config,
            Location::parse("/"),
        )
    }

    fn scrolled(page: &Page<MemoryDocument, MemoryPreferenceStore>) -> bool {
        let doc = page.doc();
        doc.has_class(&doc.query(ids::NAV_SELECTOR).unwrap(), ids::SCROLLED_CLASS)
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut page = page(SiteConfig::default());
        page.dispatch(PageEvent::Scroll(50.0));
        assert!(!scrolled(&page));
        page.dispatch(PageEvent::Scroll(51.0));
        assert!(scrolled(&page));
        page.dispatch(PageEvent::Scroll(120.0));
        assert!(scrolled(&page));
        page.dispatch(PageEvent::Scroll(0.0));
        assert!(!scrolled(&page));
    }

    #[test]
    fn configured_threshold_applies() {
        let mut page = page(SiteConfig {
            scroll_threshold: 200.0,
            ..SiteConfig::default()
        });
        page.dispatch(PageEvent::Scroll(120.0));
        assert!(!scrolled(&page));
    }

    #[test]
    fn logo_is_clickable_and_scrolls_up() {
        let mut page = page(SiteConfig::default());
        let logo = page.doc().query(ids::LOGO_SELECTOR).unwrap();
        assert_eq!(page.doc().style(logo, "cursor"), Some("pointer"));

        assert!(page.dispatch(PageEvent::Click(ClickTarget::Logo)));
        assert_eq!(page.doc().scroll_to_top_calls(), 1);
    }
}
