use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use pullcord_core::{EyeTracking, EyesConfig, PUPIL_CENTERED};
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom::{self, SetupError};
use crate::input::pointer_sample;

struct Eye {
    socket: Element,
    pupil: HtmlElement,
}

impl Eye {
    fn center(&self) -> (f64, f64) {
        let rect = self.socket.get_bounding_client_rect();
        (
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
        )
    }
}

pub(crate) struct Eyes {
    eyes: Vec<Eye>,
    tracking: EyeTracking,
    listeners: RefCell<Vec<EventListener>>,
}

impl Eyes {
    pub(crate) fn install(
        document: &Document,
        config: &EyesConfig,
    ) -> Result<Rc<Self>, SetupError> {
        let sockets = dom::query_all(document, &config.eye_selector)?;
        let eyes: Vec<Eye> = sockets
            .into_iter()
            .filter_map(|socket| {
                let pupil = socket
                    .query_selector(&config.pupil_selector)
                    .ok()
                    .flatten()
                    .and_then(|pupil| dom::html_of(&pupil))?;
                Some(Eye { socket, pupil })
            })
            .collect();
        if eyes.is_empty() {
            return Err(SetupError::missing(&config.eye_selector));
        }
        let view = Rc::new(Self {
            eyes,
            tracking: EyeTracking::from(config),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners(document);
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::with_capacity(4);
        let view = Rc::downgrade(self);
        listeners.push(EventListener::new(document, "mousemove", move |event: &Event| {
            if let Some(view) = view.upgrade() {
                view.on_pointer_move(event);
            }
        }));
        let view = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            document,
            "touchmove",
            dom::active_listener(),
            move |event: &Event| {
                event.prevent_default();
                if let Some(view) = view.upgrade() {
                    view.on_pointer_move(event);
                }
            },
        ));
        for event_type in ["mouseleave", "touchend"] {
            let view = Rc::downgrade(self);
            listeners.push(EventListener::new(document, event_type, move |_event: &Event| {
                if let Some(view) = view.upgrade() {
                    view.reset();
                }
            }));
        }
        *self.listeners.borrow_mut() = listeners;
    }

    fn on_pointer_move(&self, event: &Event) {
        if let Some(sample) = pointer_sample(event) {
            self.look_at(sample.client_x, sample.client_y);
        }
    }

    pub(crate) fn look_at(&self, x: f64, y: f64) {
        for eye in &self.eyes {
            let offset = self.tracking.pupil_offset(eye.center(), (x, y));
            dom::set_style(&eye.pupil, "transform", &offset.transform());
        }
    }

    pub(crate) fn reset(&self) {
        for eye in &self.eyes {
            dom::set_style(&eye.pupil, "transform", PUPIL_CENTERED);
        }
    }
}
