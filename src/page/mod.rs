//! Page controller: owns all per-page state and applies events to it.
//!
//! One [`Page`] exists per loaded document. It starts in a content-less
//! state (theme, locale and nav already live), receives the content document
//! once via [`Page::load`], and from then on only changes through
//! [`Page::dispatch`].

mod home;
mod input;
mod lightbox;
mod locale;
mod nav;
mod portfolio;
mod project;
mod theme;

pub use input::*;
pub use locale::RenderError;

use crate::core::{
    ContentSchema, Gallery, Locale, Location, PageKind, PreferenceStore, Project, SiteConfig,
    ALL_CATEGORIES,
};
use crate::dom::Document;
use crate::theme::ThemeMode;

/// Outcome of rendering the project detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectRender {
    /// Project found and rendered.
    Rendered,
    /// No `?id=` match; the header, if present, shows "Project not found".
    NotFound,
}

/// Per-page state.
///
/// Field ownership: `theme` and `locale` are written only by their
/// controllers, `gallery` only by the project renderer (creation) and the
/// lightbox transitions (cursor), `active_filter` only by the portfolio grid.
pub struct Page<D: Document, S: PreferenceStore> {
    doc: D,
    store: S,
    config: SiteConfig,
    location: Location,
    content: Option<ContentSchema>,
    theme: ThemeMode,
    locale: Locale,
    active_filter: String,
    portfolio_items: Vec<Project>,
    gallery: Option<Gallery>,
    lightbox_bound: bool,
    locale_renders: usize,
    project_render: Option<ProjectRender>,
}

impl<D: Document, S: PreferenceStore> Page<D, S> {
    /// Create the controller and run the content-independent setup:
    /// theme, locale selector state and nav behavior.
    pub fn new(doc: D, store: S, config: SiteConfig, location: Location) -> Self {
        let mut page = Self {
            doc,
            store,
            config,
            location,
            content: None,
            theme: ThemeMode::default(),
            locale: Locale::default(),
            active_filter: ALL_CATEGORIES.to_string(),
            portfolio_items: Vec::new(),
            gallery: None,
            lightbox_bound: false,
            locale_renders: 0,
            project_render: None,
        };
        page.init_theme();
        page.init_locale();
        page.init_nav();
        page
    }

    /// Install the fetched content document and render the current page.
    ///
    /// Called once per page; a second call replaces the content and renders
    /// again on top of what is already there.
    pub fn load(&mut self, content: ContentSchema) {
        self.content = Some(content);
        match self.kind() {
            PageKind::Project => {
                let outcome = self.render_project_page();
                self.project_render = Some(outcome);
            }
            PageKind::Home => self.render_home(),
        }
    }

    fn render_home(&mut self) {
        // Put back before the locale pass, which reads it.
        let Some(content) = self.content.take() else {
            return;
        };
        match &content {
            ContentSchema::Flat(flat) => {
                self.render_profile(&flat.profile);
                if let Some(section) = &flat.moodboard_section {
                    self.render_moodboard(Some(section));
                }
                self.render_portfolio(&flat.portfolio);
                self.render_business(&flat.business);
            }
            ContentSchema::Localized(localized) => {
                self.render_common(&localized.common);
                if let Some(section) = &localized.moodboard_section {
                    self.render_moodboard(Some(section));
                }
                if !localized.portfolio.is_empty() {
                    self.render_portfolio(&localized.portfolio);
                }
            }
        }
        self.content = Some(content);
        self.render_locale_sections();
    }

    /// Apply an input event. Returns whether any binding handled it.
    pub fn dispatch(&mut self, event: PageEvent) -> bool {
        match resolve(&event, &self.event_context()) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Snapshot of the state the dispatch guards look at.
    pub fn event_context(&self) -> EventContext {
        EventContext {
            lightbox_bound: self.lightbox_bound,
            lightbox_open: self.gallery.as_ref().is_some_and(Gallery::is_open),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::OpenLightbox(index) => self.open_lightbox(index),
            Action::CloseLightbox => self.close_lightbox(),
            Action::NextImage => self.show_next_image(),
            Action::PreviousImage => self.show_previous_image(),
            Action::FilterCategory(filter) => self.select_category(&filter),
            Action::ToggleTheme => self.toggle_theme(),
            Action::SetLocale(locale) => {
                self.set_locale(locale);
            }
            Action::ScrollToTop => self.doc.scroll_to_top(),
            Action::UpdateNav(offset) => self.update_nav(offset),
        }
    }

    /// Which template this page is.
    pub fn kind(&self) -> PageKind {
        self.location.kind(&self.config.project_page)
    }

    /// The document being rendered into.
    pub fn doc(&self) -> &D {
        &self.doc
    }

    /// The preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Current location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Loaded content, if the fetch has completed.
    pub fn content(&self) -> Option<&ContentSchema> {
        self.content.as_ref()
    }

    /// Current presentation mode.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Current content locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Active portfolio filter.
    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Project gallery state, once a project has been rendered.
    pub fn gallery(&self) -> Option<&Gallery> {
        self.gallery.as_ref()
    }

    /// Number of full locale re-renders performed so far.
    pub fn locale_renders(&self) -> usize {
        self.locale_renders
    }

    /// Outcome of the project page render, if it ran.
    pub fn project_render(&self) -> Option<ProjectRender> {
        self.project_render
    }

    /// Title suffix: the content owner's name, or the configured site name.
    fn site_name(&self) -> String {
        self.content
            .as_ref()
            .and_then(ContentSchema::site_name)
            .unwrap_or(self.config.site_name.as_str())
            .to_string()
    }
}
