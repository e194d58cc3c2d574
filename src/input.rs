use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    pub(crate) fn move_event(self) -> &'static str {
        match self {
            PointerKind::Mouse => "mousemove",
            PointerKind::Touch => "touchmove",
        }
    }

    /// Events that end a gesture started with this pointer. `blur` covers a
    /// mouse button released outside the window.
    pub(crate) fn end_events(self) -> &'static [&'static str] {
        match self {
            PointerKind::Mouse => &["mouseup", "blur"],
            PointerKind::Touch => &["touchend", "touchcancel"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PointerSample {
    pub kind: PointerKind,
    pub client_x: f64,
    pub client_y: f64,
}

/// Viewport position of a mouse event or of the first active touch.
pub(crate) fn pointer_sample(event: &Event) -> Option<PointerSample> {
    if let Some(event) = event.dyn_ref::<MouseEvent>() {
        return Some(PointerSample {
            kind: PointerKind::Mouse,
            client_x: event.client_x() as f64,
            client_y: event.client_y() as f64,
        });
    }
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.touches().get(0)?;
    Some(PointerSample {
        kind: PointerKind::Touch,
        client_x: touch.client_x() as f64,
        client_y: touch.client_y() as f64,
    })
}

/// Builds a real `TouchEvent` holding one touch at the given point, or no touch
/// when `active` is false. `None` where the browser has no `Touch` constructor.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) fn synthetic_touch(
    target: &web_sys::EventTarget,
    event_type: &str,
    client_x: f64,
    client_y: f64,
    active: bool,
) -> Option<TouchEvent> {
    use wasm_bindgen::JsValue;
    use web_sys::{Touch, TouchEventInit, TouchInit};

    let touch_init = TouchInit::new(1, target);
    touch_init.set_client_x(client_x);
    touch_init.set_client_y(client_y);
    let touch = Touch::new(&touch_init).ok()?;
    let touches = js_sys::Array::new();
    if active {
        touches.push(&touch);
    }
    let init = TouchEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    js_sys::Reflect::set(&init, &JsValue::from_str("touches"), &touches).ok()?;
    TouchEvent::new_with_event_init_dict(event_type, &init).ok()
}
