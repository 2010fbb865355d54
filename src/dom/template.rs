//! Page skeletons for the in-memory document.
//!
//! These mirror the element ids the static `index.html` / `project.html`
//! templates ship with, so the renderers can be exercised without a browser.

use super::ids;
use super::{Document, MemoryDocument, NodeId};
use crate::core::{Location, PageKind, SiteConfig, ALL_CATEGORIES};

impl MemoryDocument {
    /// Skeleton for `location`'s page kind.
    pub fn for_location(location: &Location, config: &SiteConfig) -> Self {
        match location.kind(&config.project_page) {
            PageKind::Home => Self::home_page(),
            PageKind::Project => Self::project_page(),
        }
    }

    /// Home page skeleton, carrying the ids of both content schemas.
    pub fn home_page() -> Self {
        let mut doc = Self::new();
        let root = doc.root();
        add_nav(&mut doc, root);

        let hero = doc.add(root, "section", Some("hero"), &["hero"]);
        doc.add(hero, "img", Some(ids::PROFILE_IMAGE), &[]);
        for id in [
            ids::PROFILE_NAME,
            ids::PROFILE_FULLNAME,
            ids::PROFILE_TITLE,
            ids::PROFILE_BIO,
            ids::HERO_TITLE,
            ids::HERO_BIO,
        ] {
            doc.add(hero, "p", Some(id), &[]);
        }
        doc.add(hero, "a", Some(ids::EMAIL_LINK), &[]);
        doc.add(hero, "a", Some(ids::INSTAGRAM_LINK), &[]);

        let about = doc.add(root, "section", Some("about"), &[]);
        doc.add(about, "h2", Some(ids::ABOUT_TITLE), &[]);
        doc.add(about, "div", Some(ids::ABOUT_TEXT), &[]);

        let program = doc.add(root, "section", Some("program"), &[]);
        doc.add(program, "h2", Some(ids::PROGRAM_TITLE), &[]);
        doc.add(program, "div", Some(ids::PROGRAM_DESC), &[]);

        let social = doc.add(root, "section", Some("social"), &[]);
        doc.add(social, "span", Some(ids::INSTAGRAM_LABEL), &[]);
        doc.add(social, "span", Some(ids::INSTAGRAM_HANDLE), &[]);
        doc.add(social, "span", Some(ids::TIKTOK_LABEL), &[]);
        doc.add(social, "span", Some(ids::TIKTOK_HANDLE), &[]);
        doc.add(social, "a", Some(ids::TIKTOK_LINK), &[]);

        let moodboard = doc.add(root, "section", Some("moodboard"), &[]);
        doc.add(moodboard, "h2", Some(ids::MOODBOARD_TITLE), &[]);
        doc.add(moodboard, "div", Some(ids::MOODBOARD_BUTTONS), &[]);

        let work = doc.add(root, "section", Some("work"), &[]);
        let categories = doc.add(work, "div", Some(ids::CATEGORIES), &["categories"]);
        let all = doc.add(categories, "button", None, &[ids::ACTIVE_CLASS]);
        doc.set_attr(&all, ids::FILTER_ATTR, ALL_CATEGORIES);
        doc.set_text(&all, "All");
        doc.add(work, "div", Some(ids::PORTFOLIO_GRID), &["portfolio-grid"]);

        let business = doc.add(root, "section", Some("business"), &[]);
        doc.add(business, "h3", Some(ids::BUSINESS_NAME), &[]);
        doc.add(business, "p", Some(ids::BUSINESS_DESC), &[]);
        doc.add(business, "a", Some(ids::BUSINESS_LINK), &[]);

        let contact = doc.add(root, "section", Some("contact"), &[]);
        doc.add(contact, "h2", Some(ids::CONTACT_HEADING), &[]);
        for (label, link) in [
            (ids::CONTACT_EMAIL_LABEL, ids::CONTACT_EMAIL),
            (ids::CONTACT_INSTAGRAM_LABEL, ids::CONTACT_INSTAGRAM),
            (ids::CONTACT_GITHUB_LABEL, ids::CONTACT_GITHUB),
        ] {
            doc.add(contact, "span", Some(label), &[]);
            doc.add(contact, "a", Some(link), &[]);
        }

        let footer = doc.add(root, "footer", None, &[]);
        doc.add(footer, "p", Some(ids::FOOTER_TEXT), &[]);
        doc
    }

    /// Project detail page skeleton, including the lightbox overlay.
    pub fn project_page() -> Self {
        let mut doc = Self::new();
        let root = doc.root();
        add_nav(&mut doc, root);

        let header = doc.add(root, "header", None, &["project-header"]);
        let container = doc.add(header, "div", None, &["container"]);
        doc.add(container, "span", Some(ids::PROJECT_CATEGORY), &[]);
        doc.add(container, "h1", Some(ids::PROJECT_TITLE), &[]);
        doc.add(container, "p", Some(ids::PROJECT_DESC), &[]);

        doc.add(root, "div", Some(ids::PROJECT_GALLERY_GRID), &["project-gallery"]);

        let lightbox = doc.add(root, "div", Some(ids::LIGHTBOX), &["lightbox"]);
        doc.add(lightbox, "button", Some(ids::LIGHTBOX_CLOSE), &["lightbox-close"]);
        doc.add(lightbox, "button", Some(ids::LIGHTBOX_PREV), &["lightbox-nav"]);
        let content = doc.add(lightbox, "div", None, &["lightbox-content"]);
        doc.add(content, "img", Some(ids::LIGHTBOX_IMAGE), &[]);
        doc.add(content, "div", Some(ids::LIGHTBOX_COUNTER), &["lightbox-counter"]);
        doc.add(lightbox, "button", Some(ids::LIGHTBOX_NEXT), &["lightbox-nav"]);
        doc
    }
}

fn add_nav(doc: &mut MemoryDocument, root: NodeId) {
    let nav = doc.add(root, "nav", None, &[]);
    doc.add(nav, "div", None, &["logo"]);
    doc.add(nav, "button", Some(ids::LANG_EN), &["lang-btn"]);
    doc.add(nav, "button", Some(ids::LANG_ID), &["lang-btn"]);
    doc.add(nav, "button", Some(ids::THEME_TOGGLE), &[]);
}
