use std::fmt::Display;
use std::rc::Rc;

use gloo::console;
use pullcord_core::{InstallReport, SiteConfig, Theme};
use web_sys::Document;

use crate::counters::PeriodicCounters;
use crate::eyes::Eyes;
use crate::gallery::{Gallery, PageProbe};
use crate::navigation::{PageNav, TabGroup};
use crate::theme_toggle::ThemeToggle;
use crate::typewriter::CursorAnimation;

/// Owns every page behavior. Elements are bound once at install; dropping the
/// controller detaches all listeners and cancels all timers.
pub struct SiteController {
    theme: Option<Rc<ThemeToggle>>,
    pages: Option<Rc<PageNav>>,
    tabs: Vec<Rc<TabGroup>>,
    gallery: Option<Rc<Gallery>>,
    cursors: Vec<Rc<CursorAnimation>>,
    counters: Rc<PeriodicCounters>,
    eyes: Option<Rc<Eyes>>,
    report: InstallReport,
}

impl SiteController {
    /// Installs each behavior independently; one that cannot bind its
    /// elements is logged and left out.
    pub fn install(document: &Document, config: &SiteConfig) -> Self {
        let mut report = InstallReport::new();
        let theme = record(
            &mut report,
            "theme toggle",
            ThemeToggle::install(document, &config.theme),
        );
        let pages = record(
            &mut report,
            "navigation",
            PageNav::install(document, &config.navigation),
        );
        let tabs = config
            .navigation
            .tab_groups
            .iter()
            .filter_map(|group| {
                record(
                    &mut report,
                    "tabs",
                    TabGroup::install(document, group, &config.navigation.active_class),
                )
            })
            .collect();

        let probe_pages = pages.as_ref().map(Rc::downgrade);
        let page_probe: PageProbe = Rc::new(move || {
            probe_pages
                .as_ref()
                .and_then(|pages| pages.upgrade())
                .and_then(|pages| pages.active_page())
        });
        let gallery = record(
            &mut report,
            "gallery",
            Gallery::install(document, &config.gallery, page_probe),
        );

        let cursors = config
            .typewriter
            .lines
            .iter()
            .filter_map(|line| {
                record(
                    &mut report,
                    "typewriter",
                    CursorAnimation::start(document, line),
                )
            })
            .collect();

        let counters = PeriodicCounters::install(document, &config.counters);
        report.record_installed("counters");
        let eyes = record(&mut report, "eyes", Eyes::install(document, &config.eyes));

        Self {
            theme,
            pages,
            tabs,
            gallery,
            cursors,
            counters,
            eyes,
            report,
        }
    }

    pub fn report(&self) -> &InstallReport {
        &self.report
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme.as_ref().map(|toggle| toggle.theme())
    }

    pub fn active_page(&self) -> Option<String> {
        self.pages.as_ref().and_then(|pages| pages.active_page())
    }

    pub fn active_tab(&self, group: usize) -> Option<String> {
        self.tabs.get(group).and_then(|tabs| tabs.active_tab())
    }

    pub fn gallery_index(&self) -> Option<usize> {
        self.gallery.as_ref().and_then(|gallery| gallery.active())
    }

    pub fn cursors_finished(&self) -> bool {
        self.cursors.iter().all(|cursor| cursor.is_finished())
    }

    pub fn view_count(&self) -> u64 {
        self.counters.view_count()
    }

    pub fn uptime_label(&self) -> String {
        self.counters.uptime_label()
    }

    pub fn tracks_eyes(&self) -> bool {
        self.eyes.is_some()
    }
}

fn record<T, E: Display>(
    report: &mut InstallReport,
    behavior: &str,
    result: Result<T, E>,
) -> Option<T> {
    match result {
        Ok(value) => {
            report.record_installed(behavior);
            Some(value)
        }
        Err(err) => {
            let reason = err.to_string();
            console::warn!(format!("{behavior}: skipped"), reason.clone());
            report.record_skipped(behavior, reason);
            None
        }
    }
}
