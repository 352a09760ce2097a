//! linkdeck - local-first link-in-bio page builder
//!
//! Startup sequence:
//! 1. Load app config (theme default, path overrides)
//! 2. Open the page store and read whatever state it holds
//! 3. Build the editor session on top of it
//! 4. Write the rendered preview page

use anyhow::Context;

use linkdeck::{Config, Session, Store};
use linkdeck_renderer::render_page;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,linkdeck=info"),
    )
    .init();
    log::info!("linkdeck starting");

    let config = Config::load();

    let store = match &config.storage.path {
        Some(path) => Store::new(path),
        None => Store::open_default().context("could not locate a page file")?,
    };
    log::info!("Page file: {:?}", store.path());

    let session = Session::open(store, &config);
    match session.preset_index() {
        Some(index) => log::info!(
            "Page uses the '{}' preset",
            linkdeck_theme::themes()[index].name
        ),
        None => log::info!("Page uses a custom appearance"),
    }

    let output = config.preview_output();
    let page = render_page(&session.project());
    std::fs::write(&output, page)
        .with_context(|| format!("failed to write preview page {:?}", output))?;
    log::info!("Preview written to {:?}", output);

    Ok(())
}
