//! Preview command: render a page against an in-memory document and print it.
//!
//! Handy for checking a `data.json` without a browser. Events given with
//! `--event` are dispatched in order after the content loads, so the dump
//! reflects e.g. an open lightbox or an active filter.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::{
    ContentSchema, FilePreferenceStore, Location, MemoryPreferenceStore, PreferenceStore,
    SiteConfig,
};
use crate::dom::MemoryDocument;
use crate::logging::Timer;
use crate::page::{Page, PageEvent};

/// Render a portfolio page from its content document.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Content document (defaults to the configured data_url)
    #[arg(short = 'd', long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Page URL to render, e.g. "project.html?id=p1"
    #[arg(short = 'u', long = "url", default_value = "index.html")]
    pub url: String,

    /// Event to dispatch after load (click:gallery:0, key:Escape, scroll:120, ...)
    #[arg(short = 'e', long = "event", value_name = "EVENT")]
    pub events: Vec<PageEvent>,

    /// Site config JSON
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preferences file (defaults to the user config dir)
    #[arg(long = "state-file", value_name = "PATH", conflicts_with = "ephemeral")]
    pub state_file: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Default preferences path: `<config dir>/folio/prefs.json`.
pub fn default_state_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "folio").map(|d| d.config_dir().join("prefs.json"))
}

/// Run the preview and write the rendered document to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SiteConfig::default(),
    };

    let html = if cli.ephemeral {
        render(cli, config, MemoryPreferenceStore::new())
    } else {
        let path = cli
            .state_file
            .clone()
            .or_else(default_state_path)
            .context("No config directory; pass --state-file or --ephemeral")?;
        let store = FilePreferenceStore::open(&path)
            .with_context(|| format!("Failed to open preferences {}", path.display()))?;
        render(cli, config, store)
    };

    out.write_all(html.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn render<S: PreferenceStore>(cli: &Cli, config: SiteConfig, store: S) -> String {
    let _timer = Timer::start("render");
    let location = Location::parse(&cli.url);
    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_url));
    let doc = MemoryDocument::for_location(&location, &config);
    let mut page = Page::new(doc, store, config, location);

    // Same failure model as the browser: log it and leave the skeleton.
    match load_content(&data_path) {
        Ok(content) => page.load(content),
        Err(e) => log::error!("{:#}", e),
    }

    for event in &cli.events {
        if !page.dispatch(event.clone()) {
            log::info!("event ignored: {:?}", event);
        }
    }

    page.doc().to_html()
}

fn load_content(path: &Path) -> Result<ContentSchema> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    ContentSchema::from_json(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
