//! Portfolio Frontend Entry Point

mod app;
mod components;
mod config;
mod content;
mod context;
mod gallery;
mod icons;
mod lifecycle;
mod logging;
mod menu;
mod models;
mod motion;
mod scroll;
mod series;
mod store;

use app::{App, ContentErrorView};
use content::Portfolio;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    match Portfolio::bundled() {
        Ok(portfolio) => {
            logging::set_level(portfolio.settings.log_level);
            log::info!(
                "[APP] content loaded: {} projects, {} demos",
                portfolio.projects.len(),
                portfolio.sandbox.demos.len()
            );
            mount_to_body(move || view! { <App portfolio=portfolio /> });
        }
        Err(e) => {
            log::error!("[APP] {e}");
            let message = e.to_string();
            mount_to_body(move || view! { <ContentErrorView message=message /> });
        }
    }
}
