//! Input events and the dispatch table.
//!
//! Browser listeners (or the preview CLI) translate raw events into
//! [`PageEvent`]s. [`resolve`] walks [`BINDINGS`] in order and returns the
//! first [`Action`] whose guard accepts the current [`EventContext`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::Locale;

/// What was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A gallery cell on the project page, by position.
    GalleryCell(usize),
    /// Lightbox close control.
    LightboxClose,
    /// Lightbox "previous" control.
    LightboxPrev,
    /// Lightbox "next" control.
    LightboxNext,
    /// The lightbox backdrop itself (not its contents).
    LightboxBackdrop,
    /// Something inside the lightbox other than its controls.
    LightboxContent,
    /// A category filter button, by its `data-filter` value.
    Category(String),
    /// Theme toggle button.
    ThemeToggle,
    /// A locale selector button.
    Locale(Locale),
    /// Site logo.
    Logo,
}

/// Keys the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// `Escape`.
    Escape,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// Any other key, by its `KeyboardEvent.key` value.
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }
}

/// An input event delivered to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Pointer click.
    Click(ClickTarget),
    /// Key press on the document.
    Key(Key),
    /// Window scrolled to this vertical offset.
    Scroll(f64),
}

/// State transition requested by an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open the lightbox at an index.
    OpenLightbox(usize),
    /// Close the lightbox.
    CloseLightbox,
    /// Show the next image.
    NextImage,
    /// Show the previous image.
    PreviousImage,
    /// Filter the portfolio grid.
    FilterCategory(String),
    /// Flip light/dark.
    ToggleTheme,
    /// Switch content locale.
    SetLocale(Locale),
    /// Scroll back to the top.
    ScrollToTop,
    /// Update the nav for a scroll offset.
    UpdateNav(f64),
}

/// Page state the guards may inspect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventContext {
    /// Lightbox controls are bound (project found and `#lightbox` present).
    pub lightbox_bound: bool,
    /// Lightbox is showing.
    pub lightbox_open: bool,
}

/// One row of the dispatch table.
pub struct Binding {
    /// Name for logging.
    pub name: &'static str,
    /// Whether the binding is live in the current state.
    pub guard: fn(&EventContext) -> bool,
    /// Event-to-action mapping; `None` means "not mine".
    pub map: fn(&PageEvent) -> Option<Action>,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").field("name", &self.name).finish()
    }
}

/// The dispatch table, evaluated top to bottom.
pub const BINDINGS: &[Binding] = &[
    Binding {
        name: "gallery-cell",
        guard: always,
        map: gallery_cell,
    },
    Binding {
        name: "lightbox-controls",
        guard: lightbox_bound,
        map: lightbox_controls,
    },
    Binding {
        name: "lightbox-keys",
        guard: lightbox_open,
        map: lightbox_keys,
    },
    Binding {
        name: "chrome",
        guard: always,
        map: chrome,
    },
    Binding {
        name: "scroll",
        guard: always,
        map: scroll,
    },
];

/// First action the table yields for `event`, if any.
pub fn resolve(event: &PageEvent, ctx: &EventContext) -> Option<Action> {
    BINDINGS.iter().find_map(|binding| {
        if !(binding.guard)(ctx) {
            return None;
        }
        let action = (binding.map)(event)?;
        log::trace!("{:?} -> {:?} via {}", event, action, binding.name);
        Some(action)
    })
}

fn always(_: &EventContext) -> bool {
    true
}

fn lightbox_bound(ctx: &EventContext) -> bool {
    ctx.lightbox_bound
}

fn lightbox_open(ctx: &EventContext) -> bool {
    ctx.lightbox_bound && ctx.lightbox_open
}

fn gallery_cell(event: &PageEvent) -> Option<Action> {
    match event {
        PageEvent::Click(ClickTarget::GalleryCell(index)) => Some(Action::OpenLightbox(*index)),
        _ => None,
    }
}

fn lightbox_controls(event: &PageEvent) -> Option<Action> {
    match event {
        PageEvent::Click(ClickTarget::LightboxClose | ClickTarget::LightboxBackdrop) => {
            Some(Action::CloseLightbox)
        }
        PageEvent::Click(ClickTarget::LightboxNext) => Some(Action::NextImage),
        PageEvent::Click(ClickTarget::LightboxPrev) => Some(Action::PreviousImage),
        _ => None,
    }
}

fn lightbox_keys(event: &PageEvent) -> Option<Action> {
    match event {
        PageEvent::Key(Key::Escape) => Some(Action::CloseLightbox),
        PageEvent::Key(Key::ArrowLeft) => Some(Action::PreviousImage),
        PageEvent::Key(Key::ArrowRight) => Some(Action::NextImage),
        _ => None,
    }
}

fn chrome(event: &PageEvent) -> Option<Action> {
    match event {
        PageEvent::Click(ClickTarget::Category(filter)) => {
            Some(Action::FilterCategory(filter.clone()))
        }
        PageEvent::Click(ClickTarget::ThemeToggle) => Some(Action::ToggleTheme),
        PageEvent::Click(ClickTarget::Locale(locale)) => Some(Action::SetLocale(*locale)),
        PageEvent::Click(ClickTarget::Logo) => Some(Action::ScrollToTop),
        _ => None,
    }
}

fn scroll(event: &PageEvent) -> Option<Action> {
    match event {
        PageEvent::Scroll(offset) => Some(Action::UpdateNav(*offset)),
        _ => None,
    }
}

/// Error parsing the textual event form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid event '{input}': {reason}")]
pub struct EventParseError {
    /// Offending input.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl EventParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Textual form used by the preview CLI:
/// `click:gallery:<n>`, `click:close`, `click:prev`, `click:next`,
/// `click:backdrop`, `click:content`, `click:category:<name>`,
/// `click:theme`, `click:locale:<en|id>`, `click:logo`, `key:<KeyName>`,
/// `scroll:<px>`.
impl FromStr for PageEvent {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind = parts.next().unwrap_or("");
        let arg = parts.next();
        let rest = parts.next();

        match (kind, arg, rest) {
            ("key", Some(key), None) if !key.is_empty() => Ok(PageEvent::Key(Key::from_dom(key))),
            ("scroll", Some(offset), None) => offset
                .parse::<f64>()
                .map(PageEvent::Scroll)
                .map_err(|_| EventParseError::new(s, "scroll offset must be a number")),
            ("click", Some(target), rest) => parse_click(s, target, rest).map(PageEvent::Click),
            _ => Err(EventParseError::new(
                s,
                "expected click:<target>, key:<name> or scroll:<px>",
            )),
        }
    }
}

fn parse_click(input: &str, target: &str, arg: Option<&str>) -> Result<ClickTarget, EventParseError> {
    let simple = |t: ClickTarget| match arg {
        None => Ok(t),
        Some(_) => Err(EventParseError::new(input, format!("'{}' takes no argument", target))),
    };
    match target {
        "gallery" => {
            let index = arg.ok_or_else(|| EventParseError::new(input, "missing gallery index"))?;
            index
                .parse::<usize>()
                .map(ClickTarget::GalleryCell)
                .map_err(|_| EventParseError::new(input, "gallery index must be a number"))
        }
        "category" => arg
            .filter(|a| !a.is_empty())
            .map(|a| ClickTarget::Category(a.to_string()))
            .ok_or_else(|| EventParseError::new(input, "missing category name")),
        "locale" => {
            let code = arg.ok_or_else(|| EventParseError::new(input, "missing locale code"))?;
            code.parse::<Locale>()
                .map(ClickTarget::Locale)
                .map_err(|e| EventParseError::new(input, e))
        }
        "close" => simple(ClickTarget::LightboxClose),
        "prev" => simple(ClickTarget::LightboxPrev),
        "next" => simple(ClickTarget::LightboxNext),
        "backdrop" => simple(ClickTarget::LightboxBackdrop),
        "content" => simple(ClickTarget::LightboxContent),
        "theme" => simple(ClickTarget::ThemeToggle),
        "logo" => simple(ClickTarget::Logo),
        other => Err(EventParseError::new(input, format!("unknown click target '{}'", other))),
    }
}
