use std::fmt;

use gloo::events::{EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement};

pub(crate) const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    MissingElement { selector: String },
    Dom { context: &'static str, detail: String },
}

impl SetupError {
    pub(crate) fn missing(selector: &str) -> Self {
        SetupError::MissingElement {
            selector: selector.to_string(),
        }
    }

    pub(crate) fn dom(context: &'static str, err: JsValue) -> Self {
        SetupError::Dom {
            context,
            detail: js_detail(&err),
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingElement { selector } => {
                write!(f, "no element matches '{selector}'")
            }
            SetupError::Dom { context, detail } => write!(f, "{context} failed: {detail}"),
        }
    }
}

impl std::error::Error for SetupError {}

pub(crate) fn js_detail(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn query(document: &Document, selector: &str) -> Result<Element, SetupError> {
    document
        .query_selector(selector)
        .map_err(|err| SetupError::dom("query_selector", err))?
        .ok_or_else(|| SetupError::missing(selector))
}

pub(crate) fn query_html(document: &Document, selector: &str) -> Result<HtmlElement, SetupError> {
    query(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::missing(selector))
}

/// All matches in document order. An empty result is not an error.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SetupError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| SetupError::dom("query_selector_all", err))?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let element = list
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok());
        if let Some(element) = element {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub(crate) fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn suppress(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}

pub(crate) fn active_listener() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub(crate) fn html_of(element: &Element) -> Option<HtmlElement> {
    element.clone().dyn_into::<HtmlElement>().ok()
}
