//! Home page sections that do not depend on locale.

use super::Page;
use crate::core::{
    escape_html, project_href, Business, Common, MoodboardSection, PreferenceStore, Profile,
};
use crate::dom::{ids, Document};

impl<D: Document, S: PreferenceStore> Page<D, S> {
    /// Fill the flat-schema profile block.
    pub(crate) fn render_profile(&mut self, profile: &Profile) {
        let doc = &mut self.doc;
        for (id, value) in [
            (ids::PROFILE_NAME, &profile.name),
            (ids::PROFILE_TITLE, &profile.title),
            (ids::PROFILE_BIO, &profile.bio),
        ] {
            doc.set_text_by_id(id, value.as_deref().unwrap_or(""));
        }

        if let Some(link) = doc.by_id(ids::EMAIL_LINK) {
            let email = profile.email.as_deref().unwrap_or("");
            doc.set_attr(&link, "href", &format!("mailto:{}", email));
            doc.set_text(&link, email);
        }

        if let Some(link) = doc.by_id(ids::INSTAGRAM_LINK) {
            doc.set_attr(&link, "href", profile.instagram_url.as_deref().unwrap_or(""));
            doc.set_text(&link, profile.instagram.as_deref().unwrap_or(""));
        }
    }

    /// Fill the locale-agnostic part of the localized schema.
    pub(crate) fn render_common(&mut self, common: &Common) {
        let doc = &mut self.doc;
        if let Some(name) = &common.name {
            doc.set_text_by_id(ids::PROFILE_NAME, name);
        }
        if let Some(full_name) = &common.full_name {
            doc.set_text_by_id(ids::PROFILE_FULLNAME, full_name);
        }
        if let Some(image) = doc.by_id(ids::PROFILE_IMAGE) {
            if let Some(src) = &common.image {
                doc.set_attr(&image, "src", src);
            }
            let alt = common.full_name.as_ref().or(common.name.as_ref());
            if let Some(alt) = alt {
                doc.set_attr(&image, "alt", alt);
            }
        }

        let contact = &common.contact;
        if let Some(email) = &contact.personal_email {
            if let Some(link) = doc.by_id(ids::CONTACT_EMAIL) {
                doc.set_attr(&link, "href", &format!("mailto:{}", email));
                doc.set_text(&link, email);
            }
        }
        for (id, url) in [
            (ids::CONTACT_INSTAGRAM, &contact.instagram_url),
            (ids::CONTACT_GITHUB, &contact.github_url),
        ] {
            if let Some(url) = url {
                doc.set_attr_by_id(id, "href", url);
            }
        }
    }

    /// Render the mood-board shortcuts. No-op without a section or container.
    pub(crate) fn render_moodboard(&mut self, section: Option<&MoodboardSection>) {
        let Some(section) = section else {
            return;
        };
        let Some(container) = self.doc.by_id(ids::MOODBOARD_BUTTONS) else {
            return;
        };

        if let Some(title) = &section.title {
            self.doc.set_text_by_id(ids::MOODBOARD_TITLE, title);
        }

        for button in &section.buttons {
            let Some(link) = self.doc.create("a") else {
                continue;
            };
            let href = project_href(&self.config.project_page, &button.target_id);
            self.doc.set_attr(&link, "href", &href);
            self.doc.set_attr(&link, "class", "btn-mood");
            self.doc.set_text(&link, &button.label);
            self.doc.append(&container, &link);
        }
    }

    /// Fill the business block. No-op unless `#business-name` exists.
    pub(crate) fn render_business(&mut self, business: &Business) {
        let doc = &mut self.doc;
        let Some(name) = doc.by_id(ids::BUSINESS_NAME) else {
            return;
        };
        doc.set_text(&name, business.name.as_deref().unwrap_or(""));
        doc.set_text_by_id(
            ids::BUSINESS_DESC,
            business.description.as_deref().unwrap_or(""),
        );

        if let Some(link) = doc.by_id(ids::BUSINESS_LINK) {
            doc.set_attr(&link, "href", business.link.as_deref().unwrap_or(""));
            let label = escape_html(business.link_text.as_deref().unwrap_or(""));
            doc.set_html(&link, &format!("{} <span class=\"arrow\">→</span>", label));
        }
    }
}
