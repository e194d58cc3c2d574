use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use pullcord_core::{GalleryConfig, Selection, Step};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlImageElement, KeyboardEvent};

use crate::dom::{self, SetupError, ACTIVE_CLASS};

/// Reports the id of the page currently shown, if any.
pub(crate) type PageProbe = Rc<dyn Fn() -> Option<String>>;

pub(crate) struct Gallery {
    thumbs: Vec<Element>,
    main: HtmlImageElement,
    config: GalleryConfig,
    selection: RefCell<Selection>,
    page_probe: PageProbe,
    fade_timer: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Gallery {
    pub(crate) fn install(
        document: &Document,
        config: &GalleryConfig,
        page_probe: PageProbe,
    ) -> Result<Rc<Self>, SetupError> {
        let main = document
            .get_element_by_id(&config.main_image_id)
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
            .ok_or_else(|| SetupError::missing(&format!("#{}", config.main_image_id)))?;
        let thumbs = dom::query_all(document, &config.thumb_selector)?;
        if thumbs.is_empty() {
            return Err(SetupError::missing(&config.thumb_selector));
        }
        let initial = thumbs
            .iter()
            .position(|thumb| dom::has_class(thumb, ACTIVE_CLASS));
        let gallery = Rc::new(Self {
            selection: RefCell::new(Selection::new(thumbs.len(), initial)),
            thumbs,
            main,
            config: config.clone(),
            page_probe,
            fade_timer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        gallery.install_listeners(document);
        Ok(gallery)
    }

    pub(crate) fn active(&self) -> Option<usize> {
        self.selection.borrow().active()
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::with_capacity(self.thumbs.len() + 1);
        for (index, thumb) in self.thumbs.iter().enumerate() {
            let gallery = Rc::downgrade(self);
            listeners.push(EventListener::new(thumb, "click", move |_event: &Event| {
                if let Some(gallery) = gallery.upgrade() {
                    gallery.activate(index);
                }
            }));
        }
        let gallery = Rc::downgrade(self);
        listeners.push(EventListener::new(document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(gallery) = gallery.upgrade() {
                gallery.on_key(&event.key());
            }
        }));
        *self.listeners.borrow_mut() = listeners;
    }

    fn on_key(self: &Rc<Self>, key: &str) {
        let Some(step) = Step::from_key(key) else {
            return;
        };
        if (self.page_probe)().as_deref() != Some(self.config.page_id.as_str()) {
            return;
        }
        let next = self.selection.borrow_mut().step(step);
        if let Some(index) = next {
            self.show(index);
        }
    }

    pub(crate) fn activate(self: &Rc<Self>, index: usize) {
        let selected = self.selection.borrow_mut().select(index);
        if let Some(index) = selected {
            self.show(index);
        }
    }

    fn show(self: &Rc<Self>, index: usize) {
        for (position, thumb) in self.thumbs.iter().enumerate() {
            dom::set_class(thumb, ACTIVE_CLASS, position == index);
        }
        let Some(src) = self.source_of(index) else {
            console::warn!("gallery: thumbnail has no source", index as u32);
            return;
        };
        dom::set_style(&self.main, "opacity", "0");
        let gallery = Rc::downgrade(self);
        let timer = Timeout::new(self.config.fade_ms, move || {
            if let Some(gallery) = gallery.upgrade() {
                gallery.fade_timer.borrow_mut().take();
                gallery.main.set_src(&src);
                dom::set_style(&gallery.main, "opacity", "1");
            }
        });
        *self.fade_timer.borrow_mut() = Some(timer);
    }

    fn source_of(&self, index: usize) -> Option<String> {
        let thumb = self.thumbs.get(index)?;
        thumb
            .get_attribute(&self.config.full_src_attribute)
            .or_else(|| {
                thumb
                    .dyn_ref::<HtmlImageElement>()
                    .map(|image| image.src())
            })
            .or_else(|| thumb.get_attribute("src"))
            .filter(|src| !src.is_empty())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(id: &str) -> (Document, HtmlElement) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document
            .create_element("div")
            .expect("create fixture root")
            .dyn_into::<HtmlElement>()
            .expect("fixture is html");
        root.set_id(id);
        root.set_inner_html(&format!(
            r#"<img id="{id}-main" src="a.png">
               <img class="{id}-thumb active" src="a.png">
               <img class="{id}-thumb" src="b.png" data-full="b-full.png">
               <img class="{id}-thumb" src="c.png">"#
        ));
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append fixture");
        (document, root)
    }

    fn config_for(id: &str) -> GalleryConfig {
        GalleryConfig {
            thumb_selector: format!(".{id}-thumb"),
            main_image_id: format!("{id}-main"),
            fade_ms: 5,
            ..GalleryConfig::default()
        }
    }

    fn press(document: &Document, key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        document.dispatch_event(&event).expect("dispatch key");
    }

    fn active_flags(gallery: &Gallery) -> Vec<bool> {
        gallery
            .thumbs
            .iter()
            .map(|thumb| dom::has_class(thumb, ACTIVE_CLASS))
            .collect()
    }

    #[wasm_bindgen_test(async)]
    async fn click_swaps_main_image_after_fade() {
        let (document, root) = fixture("gallery-click");
        let probe: PageProbe = Rc::new(|| Some("events".to_string()));
        let gallery =
            Gallery::install(&document, &config_for("gallery-click"), probe).expect("install");
        assert_eq!(gallery.active(), Some(0));

        gallery.thumbs[1]
            .dyn_ref::<HtmlElement>()
            .expect("thumb is html")
            .click();
        assert_eq!(active_flags(&gallery), vec![false, true, false]);
        assert_eq!(gallery.main.style().get_property_value("opacity").unwrap(), "0");

        TimeoutFuture::new(50).await;
        assert!(gallery.main.src().ends_with("b-full.png"));
        assert_eq!(gallery.main.style().get_property_value("opacity").unwrap(), "1");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn arrows_move_within_bounds_on_gallery_page() {
        let (document, root) = fixture("gallery-keys");
        let probe: PageProbe = Rc::new(|| Some("events".to_string()));
        let gallery =
            Gallery::install(&document, &config_for("gallery-keys"), probe).expect("install");

        press(&document, "ArrowLeft");
        assert_eq!(gallery.active(), Some(0));
        press(&document, "ArrowRight");
        press(&document, "ArrowRight");
        assert_eq!(active_flags(&gallery), vec![false, false, true]);
        press(&document, "ArrowRight");
        assert_eq!(gallery.active(), Some(2));
        press(&document, "ArrowLeft");
        assert_eq!(gallery.active(), Some(1));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn arrows_ignored_on_other_pages() {
        let (document, root) = fixture("gallery-away");
        let probe: PageProbe = Rc::new(|| Some("home".to_string()));
        let gallery =
            Gallery::install(&document, &config_for("gallery-away"), probe).expect("install");
        press(&document, "ArrowRight");
        assert_eq!(gallery.active(), Some(0));
        root.remove();
    }
}
