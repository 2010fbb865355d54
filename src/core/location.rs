//! Page location: which template is showing and which project it asks for.

use url::form_urlencoded;

/// Query parameter naming the project on the detail page.
pub const PROJECT_ID_PARAM: &str = "id";

/// Which of the two static pages is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Home page (profile, mood-board, portfolio, business).
    Home,
    /// Project detail page.
    Project,
}

/// Path and query string of the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// URL path, e.g. `/work/project.html`.
    pub path: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
}

impl Location {
    /// Create from separate path and query parts (as `window.location` exposes them).
    pub fn new(path: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            search: search.into(),
        }
    }

    /// Split a relative URL like `project.html?id=p1#top`.
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split('#').next().unwrap_or("");
        match without_fragment.find('?') {
            Some(idx) => Self::new(&without_fragment[..idx], &without_fragment[idx..]),
            None => Self::new(without_fragment, ""),
        }
    }

    /// Page kind, decided by whether the path names `project_page`.
    pub fn kind(&self, project_page: &str) -> PageKind {
        if !project_page.is_empty() && self.path.contains(project_page) {
            PageKind::Project
        } else {
            PageKind::Home
        }
    }

    /// First value of query parameter `name`, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.search.strip_prefix('?').unwrap_or(&self.search);
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Requested project id (`?id=`).
    pub fn project_id(&self) -> Option<String> {
        self.query_param(PROJECT_ID_PARAM)
    }
}

/// Link to the detail page for project `id`.
pub fn project_href(project_page: &str, id: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(PROJECT_ID_PARAM, id)
        .finish();
    format!("{}?{}", project_page, query)
}
