use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Interval;
use pullcord_core::{CountersConfig, UptimeClock, ViewCounter};
use web_sys::{Document, Element};

/// View count and uptime, each ticking on its own interval for the page's
/// lifetime. A missing display element only skips rendering.
pub(crate) struct PeriodicCounters {
    views: Cell<ViewCounter>,
    uptime: Cell<UptimeClock>,
    view_display: Option<Element>,
    uptime_display: Option<Element>,
    intervals: RefCell<Vec<Interval>>,
}

impl PeriodicCounters {
    pub(crate) fn install(document: &Document, config: &CountersConfig) -> Rc<Self> {
        let counters = Rc::new(Self {
            views: Cell::new(ViewCounter::new(config.view_count_initial)),
            uptime: Cell::new(UptimeClock::new()),
            view_display: document.get_element_by_id(&config.view_count_id),
            uptime_display: document.get_element_by_id(&config.uptime_id),
            intervals: RefCell::new(Vec::new()),
        });
        let views = Rc::downgrade(&counters);
        let view_interval = Interval::new(config.view_count_interval_ms, move || {
            if let Some(counters) = views.upgrade() {
                counters.tick_views();
            }
        });
        let uptime = Rc::downgrade(&counters);
        let uptime_interval = Interval::new(config.uptime_interval_ms, move || {
            if let Some(counters) = uptime.upgrade() {
                counters.tick_uptime();
            }
        });
        *counters.intervals.borrow_mut() = vec![view_interval, uptime_interval];
        counters
    }

    pub(crate) fn view_count(&self) -> u64 {
        self.views.get().value()
    }

    pub(crate) fn uptime_label(&self) -> String {
        self.uptime.get().label()
    }

    fn tick_views(&self) {
        let mut views = self.views.get();
        views.tick();
        self.views.set(views);
        if let Some(display) = &self.view_display {
            display.set_text_content(Some(&views.label()));
        }
    }

    fn tick_uptime(&self) {
        let mut uptime = self.uptime.get();
        uptime.tick();
        self.uptime.set(uptime);
        if let Some(display) = &self.uptime_display {
            display.set_text_content(Some(&uptime.label()));
        }
    }
}
