use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use pullcord_core::{px, CursorSweep, TypewriterLine};
use web_sys::{Document, HtmlElement};

use crate::dom::{self, SetupError};

/// Moves a cursor marker across one typewriter line, once per page load.
pub(crate) struct CursorAnimation {
    text: HtmlElement,
    cursor: HtmlElement,
    sweep: CursorSweep,
    started_ms: Cell<Option<f64>>,
    finished: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl CursorAnimation {
    pub(crate) fn start(
        document: &Document,
        line: &TypewriterLine,
    ) -> Result<Rc<Self>, SetupError> {
        let text = dom::query_html(document, &line.text_selector)?;
        let cursor = dom::query_html(document, &line.cursor_selector)?;
        let started_ms = web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now());
        let animation = Rc::new(Self {
            text,
            cursor,
            sweep: CursorSweep::from(line),
            started_ms: Cell::new(started_ms),
            finished: Cell::new(false),
            frame: RefCell::new(None),
        });
        animation.schedule();
        Ok(animation)
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished.get()
    }

    fn schedule(self: &Rc<Self>) {
        let animation = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(animation) = animation.upgrade() {
                animation.on_frame(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let started = match self.started_ms.get() {
            Some(started) => started,
            None => {
                self.started_ms.set(Some(timestamp));
                timestamp
            }
        };
        let width = self.text.offset_width() as f64;
        let frame = self.sweep.frame(timestamp - started, width);
        dom::set_style(&self.cursor, "left", &px(frame.offset));
        if frame.done {
            self.finished.set(true);
        } else {
            self.schedule();
        }
    }
}
