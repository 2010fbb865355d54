//! Content document model.
//!
//! The site is driven by a single JSON document. Two schemas exist in the
//! wild: a flat one carrying `profile`/`business` directly, and a localized
//! one carrying `common` plus a `languages` dictionary. Both are parsed into
//! [`ContentSchema`] once at load and never mixed afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::Locale;

/// Errors from loading the content document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    /// The document is not valid JSON or does not match either schema.
    #[error("invalid content document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The root value is not a JSON object.
    #[error("content document root must be an object")]
    NotAnObject,
}

/// A portfolio or mood-board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier, unique within its collection.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Category used by the portfolio filter.
    pub category: String,
    /// Long description for the detail page.
    #[serde(default)]
    pub description: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Ordered gallery image URLs.
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
}

impl Project {
    /// Gallery images for the detail page.
    ///
    /// Falls back to a single-image list built from `image` when no gallery
    /// is given. An explicit empty gallery stays empty.
    pub fn gallery_images(&self) -> Vec<String> {
        match &self.gallery {
            Some(images) => images.clone(),
            None => self.image.iter().cloned().collect(),
        }
    }

    /// Title, or the empty string when absent.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Profile block of the flat schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
}

/// One mood-board shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodButton {
    /// Button label.
    pub label: String,
    /// Project identifier the button links to.
    pub target_id: String,
}

/// Mood-board section shown on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodboardSection {
    /// Section heading.
    #[serde(default)]
    pub title: Option<String>,
    /// Shortcut buttons, in display order.
    #[serde(default)]
    pub buttons: Vec<MoodButton>,
}

/// Business block of the flat schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Business {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
}

/// Flat (single-language) content document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatContent {
    /// Owner profile.
    #[serde(default)]
    pub profile: Profile,
    /// Optional mood-board section.
    #[serde(default)]
    pub moodboard_section: Option<MoodboardSection>,
    /// Extra projects reachable only from the mood-board.
    #[serde(default)]
    pub moodboard_galleries: Option<Vec<Project>>,
    /// Portfolio items.
    #[serde(default)]
    pub portfolio: Vec<Project>,
    /// Business block.
    #[serde(default)]
    pub business: Business,
}

/// Contact links shared by every locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CommonContact {
    #[serde(default)]
    pub personal_email: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// Locale-agnostic part of the localized schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Common {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub contact: CommonContact,
}

/// Heading plus body text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct TextBlock {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "description")]
    pub text: Option<String>,
}

/// A social account entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct SocialEntry {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Social accounts, per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Social {
    #[serde(default)]
    pub instagram: Option<SocialEntry>,
    #[serde(default)]
    pub tiktok: Option<SocialEntry>,
}

/// Labels for the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ContactLabels {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

/// Per-locale text. Every field is optional; renderers report what is
/// missing section by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct LangBlock {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub about: Option<TextBlock>,
    #[serde(default)]
    pub program: Option<TextBlock>,
    #[serde(default)]
    pub social: Option<Social>,
    #[serde(default)]
    pub contact_labels: Option<ContactLabels>,
    #[serde(default)]
    pub footer: Option<String>,
}

/// Localized (bilingual) content document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedContent {
    /// Locale-agnostic fields.
    #[serde(default)]
    pub common: Common,
    /// Text blocks keyed by locale code.
    pub languages: HashMap<String, LangBlock>,
    /// Portfolio items, when the localized site also has a grid.
    #[serde(default)]
    pub portfolio: Vec<Project>,
    /// Optional mood-board section.
    #[serde(default)]
    pub moodboard_section: Option<MoodboardSection>,
    /// Extra projects reachable only from the mood-board.
    #[serde(default)]
    pub moodboard_galleries: Option<Vec<Project>>,
}

impl LocalizedContent {
    /// Text block for a locale.
    pub fn lang(&self, locale: Locale) -> Option<&LangBlock> {
        self.languages.get(locale.code())
    }
}

/// The content document, selected once at load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSchema {
    /// Single-language schema.
    Flat(FlatContent),
    /// Bilingual schema.
    Localized(LocalizedContent),
}

impl ContentSchema {
    /// Parse a content document, picking the schema by the presence of a
    /// `languages` object.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Build from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        let Some(root) = value.as_object() else {
            return Err(ContentError::NotAnObject);
        };
        if root.get("languages").is_some_and(Value::is_object) {
            Ok(Self::Localized(serde_json::from_value(value)?))
        } else {
            Ok(Self::Flat(serde_json::from_value(value)?))
        }
    }

    /// Portfolio items (empty when the document has none).
    pub fn portfolio(&self) -> &[Project] {
        match self {
            Self::Flat(flat) => &flat.portfolio,
            Self::Localized(loc) => &loc.portfolio,
        }
    }

    /// Mood-board gallery projects, if the document carries any.
    pub fn moodboard_galleries(&self) -> Option<&[Project]> {
        match self {
            Self::Flat(flat) => flat.moodboard_galleries.as_deref(),
            Self::Localized(loc) => loc.moodboard_galleries.as_deref(),
        }
    }

    /// Mood-board section, if present.
    pub fn moodboard_section(&self) -> Option<&MoodboardSection> {
        match self {
            Self::Flat(flat) => flat.moodboard_section.as_ref(),
            Self::Localized(loc) => loc.moodboard_section.as_ref(),
        }
    }

    /// Owner name, used as a page-title suffix when available.
    pub fn site_name(&self) -> Option<&str> {
        match self {
            Self::Flat(flat) => flat.profile.name.as_deref(),
            Self::Localized(loc) => loc.common.name.as_deref(),
        }
    }

    /// Whether locale switching applies to this document.
    pub fn is_localized(&self) -> bool {
        matches!(self, Self::Localized(_))
    }

    /// Find a project by id: portfolio first, then mood-board galleries.
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        find_project(self.portfolio(), self.moodboard_galleries(), id)
    }
}

/// Look up a project by exact id in `portfolio`, falling back to `moodboard`.
pub fn find_project<'a>(
    portfolio: &'a [Project],
    moodboard: Option<&'a [Project]>,
    id: &str,
) -> Option<&'a Project> {
    portfolio
        .iter()
        .find(|p| p.id == id)
        .or_else(|| moodboard.unwrap_or_default().iter().find(|p| p.id == id))
}
