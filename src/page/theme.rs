use super::Page;
use crate::core::{PreferenceStore, THEME_KEY};
use crate::dom::{ids, Document};
use crate::theme::{ThemeMode, LIGHT_MODE_CLASS};

impl<D: Document, S: PreferenceStore> Page<D, S> {
    /// Apply the persisted theme (dark when unset) to `<body>` and the toggle icon.
    pub(crate) fn init_theme(&mut self) {
        self.theme = ThemeMode::from_stored(self.store.get(THEME_KEY).as_deref());
        self.apply_theme();
    }

    /// Flip light/dark, update the icon and persist the new value.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.apply_theme();
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            log::warn!("failed to persist theme: {}", e);
        }
        log::debug!("theme -> {}", self.theme);
    }

    fn apply_theme(&mut self) {
        if let Some(body) = self.doc.body() {
            self.doc
                .set_class(&body, LIGHT_MODE_CLASS, self.theme == ThemeMode::Light);
        }
        if let Some(toggle) = self.doc.by_id(ids::THEME_TOGGLE) {
            self.doc.set_html(&toggle, self.theme.icon());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Location, MemoryPreferenceStore, PreferenceStore, SiteConfig, THEME_KEY};
    use crate::dom::{ids, Document, MemoryDocument};
    use crate::page::Page;
    use crate::theme::{ThemeMode, LIGHT_MODE_CLASS, MOON_ICON, SUN_ICON};

    fn page(store: MemoryPreferenceStore) -> Page<MemoryDocument, MemoryPreferenceStore> {
        Page::new(
            MemoryDocument::home_page(),
            store,
            SiteConfig::default(),
            Location::parse("/"),
        )
    }

    fn toggle_html(page: &Page<MemoryDocument, MemoryPreferenceStore>) -> String {
        let toggle = page.doc().by_id(ids::THEME_TOGGLE).unwrap();
        page.doc().inner_html(toggle).unwrap_or_default().to_string()
    }

    #[test]
    fn default_is_dark_with_sun_icon() {
        let page = page(MemoryPreferenceStore::new());
        assert_eq!(page.theme(), ThemeMode::Dark);
        let body = page.doc().body().unwrap();
        assert!(!page.doc().has_class(&body, LIGHT_MODE_CLASS));
        assert_eq!(toggle_html(&page), SUN_ICON);
        assert_eq!(page.store().writes(), 0);
    }

    #[test]
    fn persisted_light_is_restored() {
        let page = page(MemoryPreferenceStore::with_values([(THEME_KEY, "light")]));
        let body = page.doc().body().unwrap();
        assert!(page.doc().has_class(&body, LIGHT_MODE_CLASS));
        assert_eq!(toggle_html(&page), MOON_ICON);
    }

    #[test]
    fn toggle_round_trip() {
        let mut page = page(MemoryPreferenceStore::new());

        page.toggle_theme();
        assert_eq!(page.store().get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(toggle_html(&page), MOON_ICON);

        page.toggle_theme();
        assert_eq!(page.store().get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(toggle_html(&page), SUN_ICON);
        let body = page.doc().body().unwrap();
        assert!(!page.doc().has_class(&body, LIGHT_MODE_CLASS));
    }

    #[test]
    fn missing_toggle_is_tolerated() {
        let mut page = Page::new(
            MemoryDocument::new(),
            MemoryPreferenceStore::new(),
            SiteConfig::default(),
            Location::parse("/"),
        );
        page.toggle_theme();
        assert_eq!(page.theme(), ThemeMode::Light);
    }
}
