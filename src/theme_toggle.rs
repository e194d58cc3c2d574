use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use pullcord_core::{
    parse_css_px, px, rotate_transform, ChainPose, PullChain, PullChainParams, Release, Theme,
    ThemeConfig,
};
use web_sys::{Document, Event, HtmlElement};

use crate::dom::{self, SetupError};
use crate::input::{pointer_sample, PointerKind, PointerSample};

const PULLING_CLASS: &str = "pulling";
const WILL_TOGGLE_CLASS: &str = "will-toggle";

pub(crate) struct ThemeToggle {
    body: HtmlElement,
    toggle: HtmlElement,
    chain: HtmlElement,
    bulb: HtmlElement,
    config: ThemeConfig,
    state: RefCell<PullChain>,
    drag_listeners: RefCell<Vec<EventListener>>,
    listeners: RefCell<Vec<EventListener>>,
    pulse_timer: RefCell<Option<Timeout>>,
    sway_timer: RefCell<Option<Timeout>>,
}

impl ThemeToggle {
    pub(crate) fn install(
        document: &Document,
        config: &ThemeConfig,
    ) -> Result<Rc<Self>, SetupError> {
        let body = document.body().ok_or_else(|| SetupError::missing("body"))?;
        let toggle = dom::query_html(document, &config.toggle_selector)?;
        let chain = dom::query_html(document, &config.chain_selector)?;
        let bulb = dom::query_html(document, &config.bulb_selector)?;
        // the markup may still carry an inline toggle handler
        let _ = toggle.remove_attribute("onclick");
        let theme = Theme::from_light(dom::has_class(&body, &config.light_class));

        let toggle_view = Rc::new(Self {
            body,
            toggle,
            chain,
            bulb,
            config: config.clone(),
            state: RefCell::new(PullChain::with_theme(PullChainParams::from(config), theme)),
            drag_listeners: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            pulse_timer: RefCell::new(None),
            sway_timer: RefCell::new(None),
        });
        toggle_view.install_listeners();
        toggle_view.schedule_sway();
        Ok(toggle_view)
    }

    pub(crate) fn theme(&self) -> Theme {
        self.state.borrow().theme()
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        for event_type in ["mousedown", "touchstart"] {
            let view = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &self.chain,
                event_type,
                dom::active_listener(),
                move |event: &Event| {
                    if let Some(view) = view.upgrade() {
                        view.on_drag_start(event);
                    }
                },
            ));
        }
        for target in [&self.chain, &self.bulb] {
            let view = Rc::downgrade(self);
            listeners.push(EventListener::new(target, "click", move |event: &Event| {
                if let Some(view) = view.upgrade() {
                    view.on_tap(event);
                }
            }));
        }
        *self.listeners.borrow_mut() = listeners;
    }

    fn schedule_sway(self: &Rc<Self>) {
        let view = Rc::downgrade(self);
        let timer = Timeout::new(self.config.sway_delay_ms, move || {
            if let Some(view) = view.upgrade() {
                view.sway_timer.borrow_mut().take();
                // a drag in progress starts the sway when it settles
                if !view.state.borrow().is_dragging() {
                    dom::set_style(&view.toggle, "animation", &view.config.sway_animation);
                }
            }
        });
        *self.sway_timer.borrow_mut() = Some(timer);
    }

    fn resting_len(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.get_computed_style(&self.chain).ok().flatten())
            .and_then(|style| style.get_property_value("height").ok())
            .and_then(|height| parse_css_px(&height))
            .unwrap_or(self.config.resting_len_fallback_px)
    }

    fn on_drag_start(self: &Rc<Self>, event: &Event) {
        let Some(sample) = pointer_sample(event) else {
            return;
        };
        if self.begin_drag(sample) {
            dom::suppress(event);
        }
    }

    fn begin_drag(self: &Rc<Self>, sample: PointerSample) -> bool {
        let resting_len = self.resting_len();
        let started = self
            .state
            .borrow_mut()
            .begin(sample.client_y, resting_len, dom::now_ms());
        if !started {
            return false;
        }
        dom::set_class(&self.chain, PULLING_CLASS, true);
        // a running keyframe would override the inline drag rotation
        dom::clear_style(&self.toggle, "animation");
        self.attach_drag_listeners(sample.kind);
        true
    }

    fn attach_drag_listeners(self: &Rc<Self>, kind: PointerKind) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut listeners = Vec::with_capacity(3);
        let view = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            &window,
            kind.move_event(),
            dom::active_listener(),
            move |event: &Event| {
                if let Some(view) = view.upgrade() {
                    view.on_drag_move(event);
                }
            },
        ));
        for event_type in kind.end_events() {
            let view = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &window,
                *event_type,
                dom::active_listener(),
                move |event: &Event| {
                    if let Some(view) = view.upgrade() {
                        view.on_drag_end(event);
                    }
                },
            ));
        }
        *self.drag_listeners.borrow_mut() = listeners;
    }

    fn on_drag_move(&self, event: &Event) {
        let Some(sample) = pointer_sample(event) else {
            return;
        };
        let Some(pose) = self.state.borrow_mut().drag_to(sample.client_y) else {
            return;
        };
        self.apply_pose(&pose);
        dom::suppress(event);
    }

    fn apply_pose(&self, pose: &ChainPose) {
        dom::set_style(&self.chain, "height", &px(pose.len));
        dom::set_style(&self.bulb, "transform", &rotate_transform(pose.bulb_rotation_deg));
        dom::set_style(&self.toggle, "transform", &rotate_transform(pose.toggle_rotation_deg));
        if pose.will_toggle_changed {
            dom::set_class(&self.chain, WILL_TOGGLE_CLASS, pose.will_toggle);
        }
    }

    fn on_drag_end(self: &Rc<Self>, event: &Event) {
        let Some(release) = self.state.borrow_mut().release(dom::now_ms()) else {
            return;
        };
        self.settle(&release);
        if release.committed {
            console::log!("theme toggle: pulled", theme_label(release.theme));
            self.apply_theme(release.theme);
        }
        // the RefCell must not stay borrowed while the listeners drop
        let listeners = std::mem::take(&mut *self.drag_listeners.borrow_mut());
        drop(listeners);
        if event.type_() != "blur" {
            dom::suppress(event);
        }
    }

    fn settle(&self, release: &Release) {
        dom::set_class(&self.chain, PULLING_CLASS, false);
        dom::set_class(&self.chain, WILL_TOGGLE_CLASS, false);
        dom::set_style(&self.chain, "height", &px(release.resting_len));
        dom::clear_style(&self.bulb, "transform");
        dom::clear_style(&self.toggle, "transform");
        if self.sway_timer.borrow().is_none() {
            dom::set_style(&self.toggle, "animation", &self.config.sway_animation);
        }
    }

    fn on_tap(self: &Rc<Self>, event: &Event) {
        let flipped = self.state.borrow_mut().tap(dom::now_ms());
        if !flipped {
            return;
        }
        let theme = self.theme();
        console::log!("theme toggle: clicked", theme_label(theme));
        self.apply_theme(theme);
        event.stop_propagation();
    }

    fn apply_theme(self: &Rc<Self>, theme: Theme) {
        dom::set_class(&self.body, &self.config.light_class, theme.is_light());
        dom::set_class(&self.toggle, PULLING_CLASS, true);
        let view = Rc::downgrade(self);
        let timer = Timeout::new(self.config.cooldown_ms.round() as u32, move || {
            if let Some(view) = view.upgrade() {
                view.pulse_timer.borrow_mut().take();
                dom::set_class(&view.toggle, PULLING_CLASS, false);
            }
        });
        // replacing a pending pulse cancels its removal timer
        *self.pulse_timer.borrow_mut() = Some(timer);
    }
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    }
}
