mod boot;
mod config;
mod controller;
mod counters;
mod dom;
mod eyes;
mod gallery;
mod input;
mod navigation;
mod theme_toggle;
mod typewriter;

use std::cell::RefCell;

use gloo::console;
use gloo::events::EventListener;

pub use config::load_site_config;
pub use controller::SiteController;
pub use dom::SetupError;
pub use pullcord_core::{InstallReport, SiteConfig, Theme};

thread_local! {
    static CONTROLLER: RefCell<Option<SiteController>> = RefCell::new(None);
}

/// Installs every behavior once the document is ready. The controller then
/// lives for the rest of the page.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        console::error!("pullcord: no document");
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| run()).forget();
    } else {
        run();
    }
}

fn run() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let config = load_site_config(&document);
    let controller = SiteController::install(&document, &config);
    boot::announce(controller.report());
    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(controller);
    });
}
