//! Element ids and selectors the page templates must provide.
//!
//! Any of these may be missing from a given template; renderers skip
//! whatever they cannot find.

#![allow(missing_docs)]

// Chrome shared by both pages
pub const THEME_TOGGLE: &str = "theme-toggle";
pub const LANG_EN: &str = "lang-en";
pub const LANG_ID: &str = "lang-id";
pub const NAV_SELECTOR: &str = "nav";
pub const LOGO_SELECTOR: &str = ".logo";

// Home: flat profile
pub const PROFILE_NAME: &str = "profile-name";
pub const PROFILE_TITLE: &str = "profile-title";
pub const PROFILE_BIO: &str = "profile-bio";
pub const EMAIL_LINK: &str = "email-link";
pub const INSTAGRAM_LINK: &str = "instagram-link";

// Home: localized common + sections
pub const PROFILE_FULLNAME: &str = "profile-fullname";
pub const PROFILE_IMAGE: &str = "profile-image";
pub const HERO_TITLE: &str = "hero-title";
pub const HERO_BIO: &str = "hero-bio";
pub const ABOUT_TITLE: &str = "about-title";
pub const ABOUT_TEXT: &str = "about-text";
pub const PROGRAM_TITLE: &str = "program-title";
pub const PROGRAM_DESC: &str = "program-desc";
pub const INSTAGRAM_LABEL: &str = "instagram-label";
pub const INSTAGRAM_HANDLE: &str = "instagram-handle";
pub const TIKTOK_LABEL: &str = "tiktok-label";
pub const TIKTOK_HANDLE: &str = "tiktok-handle";
pub const TIKTOK_LINK: &str = "tiktok-link";
pub const CONTACT_HEADING: &str = "contact-heading";
pub const CONTACT_EMAIL_LABEL: &str = "contact-email-label";
pub const CONTACT_EMAIL: &str = "contact-email";
pub const CONTACT_INSTAGRAM_LABEL: &str = "contact-instagram-label";
pub const CONTACT_INSTAGRAM: &str = "contact-instagram";
pub const CONTACT_GITHUB_LABEL: &str = "contact-github-label";
pub const CONTACT_GITHUB: &str = "contact-github";
pub const FOOTER_TEXT: &str = "footer-text";

// Home: mood-board, portfolio, business
pub const MOODBOARD_TITLE: &str = "moodboard-title";
pub const MOODBOARD_BUTTONS: &str = "moodboard-buttons";
pub const CATEGORIES: &str = "categories";
pub const PORTFOLIO_GRID: &str = "portfolio-grid";
pub const BUSINESS_NAME: &str = "business-name";
pub const BUSINESS_DESC: &str = "business-desc";
pub const BUSINESS_LINK: &str = "business-link";

// Project page
pub const PROJECT_HEADER_SELECTOR: &str = ".project-header";
pub const PROJECT_CATEGORY: &str = "project-category";
pub const PROJECT_TITLE: &str = "project-title";
pub const PROJECT_DESC: &str = "project-desc";
pub const PROJECT_GALLERY_GRID: &str = "project-gallery-grid";

// Lightbox
pub const LIGHTBOX: &str = "lightbox";
pub const LIGHTBOX_IMAGE: &str = "lightbox-image";
pub const LIGHTBOX_COUNTER: &str = "lightbox-counter";
pub const LIGHTBOX_CLOSE: &str = "lightbox-close";
pub const LIGHTBOX_PREV: &str = "lightbox-prev";
pub const LIGHTBOX_NEXT: &str = "lightbox-next";

// Shared class names
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const GALLERY_CELL_CLASS: &str = "project-image";
pub const FILTER_ATTR: &str = "data-filter";
pub const INDEX_ATTR: &str = "data-index";
