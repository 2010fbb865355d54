//! DOM listeners that feed [`PageEvent`]s into the shared page.
//!
//! All targets are static template elements, so every listener is attached
//! once at startup and lives for the page lifetime. Content-dependent
//! elements (category buttons, gallery cells) are reached through
//! delegation on their containers.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, Window};

use super::SharedPage;
use crate::core::Locale;
use crate::dom::{ids, Document};
use crate::page::{ClickTarget, Key, PageEvent};

/// Attach every listener the page reacts to.
pub fn install(page: &SharedPage, window: &Window, document: &web_sys::Document) {
    if let Some(toggle) = element(page, ids::THEME_TOGGLE) {
        on_click(page, &toggle, |_| Some(ClickTarget::ThemeToggle));
    }
    for (id, locale) in [(ids::LANG_EN, Locale::En), (ids::LANG_ID, Locale::Id)] {
        if let Some(button) = element(page, id) {
            on_click(page, &button, move |_| Some(ClickTarget::Locale(locale)));
        }
    }
    let logo = page.borrow().doc().query(ids::LOGO_SELECTOR);
    if let Some(logo) = logo {
        on_click(page, &logo, |_| Some(ClickTarget::Logo));
    }

    if let Some(categories) = element(page, ids::CATEGORIES) {
        on_click(page, &categories, |event| {
            let button = closest(event, &format!("[{}]", ids::FILTER_ATTR))?;
            button.get_attribute(ids::FILTER_ATTR).map(ClickTarget::Category)
        });
    }
    if let Some(grid) = element(page, ids::PROJECT_GALLERY_GRID) {
        on_click(page, &grid, |event| {
            let cell = closest(event, &format!(".{}", ids::GALLERY_CELL_CLASS))?;
            let index = cell.get_attribute(ids::INDEX_ATTR)?.parse().ok()?;
            Some(ClickTarget::GalleryCell(index))
        });
    }

    for (id, target) in [
        (ids::LIGHTBOX_CLOSE, ClickTarget::LightboxClose),
        (ids::LIGHTBOX_PREV, ClickTarget::LightboxPrev),
        (ids::LIGHTBOX_NEXT, ClickTarget::LightboxNext),
    ] {
        if let Some(control) = element(page, id) {
            on_click(page, &control, move |_| Some(target.clone()));
        }
    }
    if let Some(lightbox) = element(page, ids::LIGHTBOX) {
        let backdrop = lightbox.clone();
        on_click(page, &lightbox, move |event| {
            let target = event.target()?.dyn_into::<Element>().ok()?;
            Some(if target == backdrop {
                ClickTarget::LightboxBackdrop
            } else {
                ClickTarget::LightboxContent
            })
        });
    }

    listen(page, document, "keydown", |event| {
        let key = event.dyn_ref::<KeyboardEvent>()?.key();
        Some(PageEvent::Key(Key::from_dom(&key)))
    });

    let scroll_window = window.clone();
    listen(page, window, "scroll", move |_| {
        Some(PageEvent::Scroll(scroll_window.scroll_y().unwrap_or(0.0)))
    });
}

fn on_click<F>(page: &SharedPage, target: &EventTarget, classify: F)
where
    F: Fn(&Event) -> Option<ClickTarget> + 'static,
{
    listen(page, target, "click", move |event| {
        classify(event).map(PageEvent::Click)
    });
}

fn listen<F>(page: &SharedPage, target: &EventTarget, kind: &'static str, translate: F)
where
    F: Fn(&Event) -> Option<PageEvent> + 'static,
{
    let page = page.clone();
    EventListener::new(target, kind, move |event| {
        let Some(page_event) = translate(event) else {
            return;
        };
        match page.try_borrow_mut() {
            Ok(mut page) => {
                page.dispatch(page_event);
            }
            Err(_) => log::debug!("dropped {} event during dispatch", kind),
        }
    })
    .forget();
}

fn element(page: &SharedPage, id: &str) -> Option<Element> {
    page.borrow().doc().by_id(id)
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}
