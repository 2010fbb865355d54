//! Lightbox overlay: mirrors the [`Gallery`](crate::core::Gallery) cursor into
//! the document after every transition.

use super::Page;
use crate::core::PreferenceStore;
use crate::dom::{ids, Document};

impl<D: Document, S: PreferenceStore> Page<D, S> {
    /// Enable lightbox bindings if the template has a `#lightbox`.
    pub(crate) fn bind_lightbox(&mut self) {
        self.lightbox_bound = self.doc.by_id(ids::LIGHTBOX).is_some();
        if !self.lightbox_bound {
            log::debug!("no lightbox element; gallery clicks are inert");
        }
    }

    /// Show image `index`.
    pub fn open_lightbox(&mut self, index: usize) {
        if !self.lightbox_bound {
            return;
        }
        let Some(gallery) = self.gallery.as_mut() else {
            return;
        };
        if let Err(e) = gallery.open(index) {
            log::warn!("lightbox: {}", e);
            return;
        }
        self.sync_lightbox();
    }

    /// Hide the overlay. Safe to call when already closed.
    pub fn close_lightbox(&mut self) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.close();
        }
        self.sync_lightbox();
    }

    /// Advance one image, wrapping around.
    pub fn show_next_image(&mut self) {
        if self.gallery.as_mut().is_some_and(|g| g.next()) {
            self.sync_lightbox();
        }
    }

    /// Step back one image, wrapping around.
    pub fn show_previous_image(&mut self) {
        if self.gallery.as_mut().is_some_and(|g| g.previous()) {
            self.sync_lightbox();
        }
    }

    fn sync_lightbox(&mut self) {
        let Some(gallery) = &self.gallery else {
            return;
        };
        let open = gallery.is_open();

        if open {
            if let Some(image) = self.doc.by_id(ids::LIGHTBOX_IMAGE) {
                self.doc
                    .set_attr(&image, "src", gallery.current_image().unwrap_or(""));
                self.doc.set_attr(&image, "alt", &gallery.alt_text());
            }
            self.doc
                .set_text_by_id(ids::LIGHTBOX_COUNTER, &gallery.counter_text());
        }

        if let Some(lightbox) = self.doc.by_id(ids::LIGHTBOX) {
            self.doc.set_class(&lightbox, ids::ACTIVE_CLASS, open);
        }
        if let Some(body) = self.doc.body() {
            self.doc
                .set_style(&body, "overflow", if open { "hidden" } else { "" });
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::{ContentSchema, Location, MemoryPreferenceStore, SiteConfig};
    use crate::dom::{ids, Document, MemoryDocument};
    use crate::page::{ClickTarget, Key, Page, PageEvent};

    fn page(gallery: serde_json::Value) -> Page<MemoryDocument, MemoryPreferenceStore> {
        let mut page = Page::new(
            MemoryDocument::project_page(),
            MemoryPreferenceStore::new(),
            SiteConfig::default(),
            Location::parse("/project.html?id=p"),
        );
        page.load(
            ContentSchema::from_value(json!({
                "portfolio": [{"id": "p", "title": "P", "category": "c", "gallery": gallery}]
            }))
            .unwrap(),
        );
        page
    }

    fn is_active(page: &Page<MemoryDocument, MemoryPreferenceStore>) -> bool {
        let doc = page.doc();
        doc.has_class(&doc.by_id(ids::LIGHTBOX).unwrap(), ids::ACTIVE_CLASS)
    }

    #[test]
    fn open_shows_image_and_locks_scroll() {
        let mut page = page(json!(["a.jpg", "b.jpg", "c.jpg"]));
        page.dispatch(PageEvent::Click(ClickTarget::GalleryCell(1)));

        let doc = page.doc();
        let img = doc.by_id(ids::LIGHTBOX_IMAGE).unwrap();
        assert_eq!(doc.attr(&img, "src").as_deref(), Some("b.jpg"));
        assert_eq!(doc.attr(&img, "alt").as_deref(), Some("Image 2"));
        assert_eq!(doc.text_of(ids::LIGHTBOX_COUNTER).as_deref(), Some("2 / 3"));
        assert_eq!(doc.style(doc.root(), "overflow"), Some("hidden"));
        assert!(is_active(&page));
    }

    #[test]
    fn arrows_wrap_and_escape_closes() {
        let mut page = page(json!(["a.jpg", "b.jpg", "c.jpg"]));
        page.dispatch(PageEvent::Click(ClickTarget::GalleryCell(2)));
        page.dispatch(PageEvent::Key(Key::ArrowRight));
        assert_eq!(page.doc().text_of(ids::LIGHTBOX_COUNTER).as_deref(), Some("1 / 3"));
        page.dispatch(PageEvent::Key(Key::ArrowLeft));
        assert_eq!(page.doc().text_of(ids::LIGHTBOX_COUNTER).as_deref(), Some("3 / 3"));

        assert!(page.dispatch(PageEvent::Key(Key::Escape)));
        assert!(!is_active(&page));
        assert_eq!(page.doc().style(page.doc().root(), "overflow"), None);
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut page = page(json!(["a.jpg", "b.jpg"]));
        assert!(!page.dispatch(PageEvent::Key(Key::ArrowRight)));
        assert_eq!(page.gallery().unwrap().current_index(), 0);
    }

    #[test]
    fn backdrop_closes_but_content_does_not() {
        let mut page = page(json!(["a.jpg"]));
        page.dispatch(PageEvent::Click(ClickTarget::GalleryCell(0)));

        page.dispatch(PageEvent::Click(ClickTarget::LightboxContent));
        assert!(is_active(&page));
        page.dispatch(PageEvent::Click(ClickTarget::LightboxBackdrop));
        assert!(!is_active(&page));

        // Closing twice is harmless.
        page.dispatch(PageEvent::Click(ClickTarget::LightboxClose));
        assert!(!is_active(&page));
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut page = page(json!(["a.jpg"]));
        page.dispatch(PageEvent::Click(ClickTarget::GalleryCell(5)));
        assert!(!is_active(&page));
        assert!(!page.gallery().unwrap().is_open());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut page = page(json!([]));
        page.dispatch(PageEvent::Click(ClickTarget::GalleryCell(0)));
        page.dispatch(PageEvent::Click(ClickTarget::LightboxNext));
        assert!(!is_active(&page));
        assert!(page.gallery().unwrap().is_empty());
    }
}
