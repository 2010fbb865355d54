//! Browser entry point.
//!
//! Builds one [`Page`] over the live DOM, attaches listeners, then fetches the
//! content document in the background. Until the fetch lands, theme, locale
//! and nav already work; content-dependent clicks fall through the dispatch
//! guards.

mod document;
mod listeners;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

pub use document::WebDocument;
pub use storage::LocalStorageStore;

use crate::core::{ContentError, ContentSchema, Location, SiteConfig};
use crate::page::Page;

/// The page as shared by every listener.
pub type SharedPage = Rc<RefCell<Page<WebDocument, LocalStorageStore>>>;

/// Errors fetching the content document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The body could not be read as text.
    #[error("could not read body: {0}")]
    Body(String),
    /// The body is not a valid content document.
    #[error(transparent)]
    Content(#[from] ContentError),
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Module start hook.
#[wasm_bindgen(start)]
pub fn start() {
    crate::logging::init(log::LevelFilter::Info);

    let Some(window) = web_sys::window() else {
        log::error!("no window; not running in a browser");
        return;
    };
    let Some(document) = window.document() else {
        log::error!("window has no document");
        return;
    };

    let browser_location = window.location();
    let location = Location::new(
        browser_location.pathname().unwrap_or_default(),
        browser_location.search().unwrap_or_default(),
    );
    let config = SiteConfig::default();
    let data_url = config.data_url.clone();

    let page: SharedPage = Rc::new(RefCell::new(Page::new(
        WebDocument::new(window.clone(), document.clone()),
        LocalStorageStore::new(&window),
        config,
        location,
    )));
    listeners::install(&page, &window, &document);

    spawn_local(async move {
        match fetch_content(&window, &data_url).await {
            Ok(content) => page.borrow_mut().load(content),
            Err(e) => log::error!("failed to load {}: {}", data_url, e),
        }
    });
}

/// GET `url` and parse it as a content document.
pub async fn fetch_content(window: &Window, url: &str) -> Result<ContentSchema, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| FetchError::Request(js_error(e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Request(js_error(e)))?
        .dyn_into::<Response>()
        .map_err(|e| FetchError::Request(js_error(e)))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().map_err(|e| FetchError::Body(js_error(e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Body(js_error(e)))?
        .as_string()
        .ok_or_else(|| FetchError::Body("body is not text".to_string()))?;

    Ok(ContentSchema::from_json(&text)?)
}
