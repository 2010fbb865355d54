//! Locale switching for the bilingual content schema.
//!
//! Every locale change re-renders all locale-dependent sections from scratch.
//! Sections fail independently: a missing field is logged and only that
//! section stops, so a half-translated locale still renders everything it can.

use thiserror::Error;

use super::Page;
use crate::core::{ContentSchema, LangBlock, Locale, PreferenceStore, LANG_KEY};
use crate::dom::{ids, Document};

/// A locale section could not be fully rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The language block lacks a field the section needs.
    #[error("{locale}: missing field '{field}'")]
    MissingField {
        /// Locale code being rendered.
        locale: &'static str,
        /// Dotted field path, e.g. `social.tiktok`.
        field: &'static str,
    },
    /// The content has no block for the locale at all.
    #[error("no language block for '{0}'")]
    MissingLocale(&'static str),
}

type SectionResult = Result<(), RenderError>;

impl<D: Document, S: PreferenceStore> Page<D, S> {
    /// Restore the persisted locale (default `id`) and mark its selector active.
    pub(crate) fn init_locale(&mut self) {
        self.locale = self
            .store
            .get(LANG_KEY)
            .and_then(|code| code.parse().ok())
            .unwrap_or_default();
        self.mark_locale_buttons();
    }

    /// Switch locale. A no-op when `locale` is already current; otherwise
    /// persists it, updates the selectors and re-renders every section.
    /// Returns whether anything changed.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        if locale == self.locale {
            return false;
        }
        self.locale = locale;
        if let Err(e) = self.store.set(LANG_KEY, locale.code()) {
            log::warn!("failed to persist locale: {}", e);
        }
        self.mark_locale_buttons();
        self.render_locale_sections();
        true
    }

    fn mark_locale_buttons(&mut self) {
        for (id, locale) in [(ids::LANG_EN, Locale::En), (ids::LANG_ID, Locale::Id)] {
            if let Some(button) = self.doc.by_id(id) {
                self.doc
                    .set_class(&button, ids::ACTIVE_CLASS, locale == self.locale);
            }
        }
    }

    /// Re-render every locale section for the current locale.
    /// Does nothing until localized content has been loaded.
    pub(crate) fn render_locale_sections(&mut self) {
        let Some(ContentSchema::Localized(content)) = &self.content else {
            return;
        };
        let locale = self.locale;
        let Some(lang) = content.lang(locale).cloned() else {
            log::warn!("{}", RenderError::MissingLocale(locale.code()));
            return;
        };

        self.locale_renders += 1;
        let results = [
            ("hero", self.render_hero(&lang)),
            ("about", self.render_about(locale, &lang)),
            ("program", self.render_program(locale, &lang)),
            ("social", self.render_social(locale, &lang)),
            ("contact", self.render_contact(locale, &lang)),
            ("footer", self.render_footer(locale, &lang)),
        ];
        for (section, result) in results {
            if let Err(e) = result {
                log::warn!("error rendering {} section: {}", section, e);
            }
        }
    }

    fn render_hero(&mut self, lang: &LangBlock) -> SectionResult {
        if let Some(title) = &lang.title {
            self.doc.set_text_by_id(ids::HERO_TITLE, title);
        }
        if let Some(bio) = &lang.bio {
            self.doc.set_text_by_id(ids::HERO_BIO, bio);
        }
        Ok(())
    }

    fn render_about(&mut self, locale: Locale, lang: &LangBlock) -> SectionResult {
        let about = lang.about.as_ref().ok_or_else(|| missing(locale, "about"))?;
        if let Some(title) = &about.title {
            self.doc.set_text_by_id(ids::ABOUT_TITLE, title);
        }
        let text = about.text.as_deref().ok_or_else(|| missing(locale, "about.text"))?;
        self.doc.set_html_by_id(ids::ABOUT_TEXT, text);
        Ok(())
    }

    fn render_program(&mut self, locale: Locale, lang: &LangBlock) -> SectionResult {
        let program = lang.program.as_ref().ok_or_else(|| missing(locale, "program"))?;
        if let Some(title) = &program.title {
            self.doc.set_text_by_id(ids::PROGRAM_TITLE, title);
        }
        let text = program
            .text
            .as_deref()
            .ok_or_else(|| missing(locale, "program.description"))?;
        self.doc.set_html_by_id(ids::PROGRAM_DESC, text);
        Ok(())
    }

    fn render_social(&mut self, locale: Locale, lang: &LangBlock) -> SectionResult {
        let social = lang.social.as_ref().ok_or_else(|| missing(locale, "social"))?;

        let instagram = social
            .instagram
            .as_ref()
            .ok_or_else(|| missing(locale, "social.instagram"))?;
        if let Some(label) = &instagram.label {
            self.doc.set_text_by_id(ids::INSTAGRAM_LABEL, label);
        }
        if let Some(handle) = &instagram.handle {
            self.doc.set_text_by_id(ids::INSTAGRAM_HANDLE, handle);
        }

        let tiktok = social
            .tiktok
            .as_ref()
            .ok_or_else(|| missing(locale, "social.tiktok"))?;
        if let Some(label) = &tiktok.label {
            self.doc.set_text_by_id(ids::TIKTOK_LABEL, label);
        }
        if let Some(handle) = &tiktok.handle {
            self.doc.set_text_by_id(ids::TIKTOK_HANDLE, handle);
        }
        if let Some(url) = &tiktok.url {
            self.doc.set_attr_by_id(ids::TIKTOK_LINK, "href", url);
        }
        Ok(())
    }

    fn render_contact(&mut self, locale: Locale, lang: &LangBlock) -> SectionResult {
        let labels = lang
            .contact_labels
            .as_ref()
            .ok_or_else(|| missing(locale, "contact_labels"))?;
        if let Some(heading) = &labels.heading {
            self.doc.set_text_by_id(ids::CONTACT_HEADING, heading);
        }
        for (id, label) in [
            (ids::CONTACT_EMAIL_LABEL, &labels.email),
            (ids::CONTACT_INSTAGRAM_LABEL, &labels.instagram),
            (ids::CONTACT_GITHUB_LABEL, &labels.github),
        ] {
            if let Some(label) = label {
                self.doc.set_text_by_id(id, label);
            }
        }
        Ok(())
    }

    fn render_footer(&mut self, locale: Locale, lang: &LangBlock) -> SectionResult {
        let footer = lang.footer.as_deref().ok_or_else(|| missing(locale, "footer"))?;
        self.doc.set_html_by_id(ids::FOOTER_TEXT, footer);
        Ok(())
    }
}

fn missing(locale: Locale, field: &'static str) -> RenderError {
    RenderError::MissingField {
        locale: locale.code(),
        field,
    }
}
