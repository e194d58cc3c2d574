use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use pullcord_core::{content_id, ActiveGroup, MarkerStrategy, NavigationConfig, TabGroupConfig};
use web_sys::{Document, Element, Event, HtmlElement, Node};

use crate::dom::{self, SetupError};

/// Single-page navigation: nav links switch which `.page` section is shown.
pub(crate) struct PageNav {
    pages: Vec<Element>,
    links: Vec<Element>,
    active_class: String,
    group: RefCell<ActiveGroup>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PageNav {
    pub(crate) fn install(
        document: &Document,
        config: &NavigationConfig,
    ) -> Result<Rc<Self>, SetupError> {
        let pages = dom::query_all(document, &config.page_selector)?;
        if pages.is_empty() {
            return Err(SetupError::missing(&config.page_selector));
        }
        let links = dom::query_all(document, &config.link_selector)?;
        let mut group = ActiveGroup::new(pages.iter().map(|page| page.id()));
        if let Some(index) = pages
            .iter()
            .position(|page| dom::has_class(page, &config.active_class))
        {
            group.activate_index(index);
        }
        let nav = Rc::new(Self {
            pages,
            links,
            active_class: config.active_class.clone(),
            group: RefCell::new(group),
            listeners: RefCell::new(Vec::new()),
        });
        nav.install_listeners(&config.page_attribute);
        Ok(nav)
    }

    pub(crate) fn active_page(&self) -> Option<String> {
        self.group.borrow().active_id().map(str::to_string)
    }

    fn install_listeners(self: &Rc<Self>, page_attribute: &str) {
        let mut listeners = Vec::with_capacity(self.links.len());
        for (index, link) in self.links.iter().enumerate() {
            let Some(target) = link
                .get_attribute(page_attribute)
                .filter(|target| !target.is_empty())
            else {
                continue;
            };
            let nav = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                link,
                "click",
                dom::active_listener(),
                move |event: &Event| {
                    event.prevent_default();
                    if let Some(nav) = nav.upgrade() {
                        nav.show(&target, index);
                    }
                },
            ));
        }
        *self.listeners.borrow_mut() = listeners;
    }

    fn show(&self, page_id: &str, link_index: usize) {
        let Some(page_index) = self.group.borrow_mut().activate(page_id) else {
            console::warn!("navigation: no page with id", page_id.to_string());
            return;
        };
        for (index, page) in self.pages.iter().enumerate() {
            dom::set_class(page, &self.active_class, index == page_index);
        }
        for (index, link) in self.links.iter().enumerate() {
            dom::set_class(link, &self.active_class, index == link_index);
        }
    }
}

/// One group of tab triggers and the content panels they reveal.
pub(crate) struct TabGroup {
    triggers: Vec<Element>,
    targets: Vec<Option<HtmlElement>>,
    contents: Vec<HtmlElement>,
    markers: Vec<MarkerStrategy>,
    active_class: String,
    group: RefCell<ActiveGroup>,
    listeners: RefCell<Vec<EventListener>>,
}

impl TabGroup {
    pub(crate) fn install(
        document: &Document,
        config: &TabGroupConfig,
        active_class: &str,
    ) -> Result<Rc<Self>, SetupError> {
        let triggers = dom::query_all(document, &config.trigger_selector)?;
        if triggers.is_empty() {
            return Err(SetupError::missing(&config.trigger_selector));
        }
        let tab_ids: Vec<String> = triggers
            .iter()
            .map(|trigger| trigger.get_attribute(&config.id_attribute).unwrap_or_default())
            .collect();
        let targets: Vec<Option<HtmlElement>> = tab_ids
            .iter()
            .map(|tab| {
                if tab.is_empty() {
                    return None;
                }
                document
                    .get_element_by_id(&content_id(tab, &config.content_id_suffix))
                    .and_then(|element| dom::html_of(&element))
            })
            .collect();
        let mut contents: Vec<HtmlElement> = dom::query_all(document, &config.content_selector)?
            .iter()
            .filter_map(dom::html_of)
            .collect();
        for target in targets.iter().flatten() {
            let node: &Node = target;
            if !contents.iter().any(|content| content.is_same_node(Some(node))) {
                contents.push(target.clone());
            }
        }
        let tabs = Rc::new(Self {
            triggers,
            targets,
            contents,
            markers: config.markers.clone(),
            active_class: active_class.to_string(),
            group: RefCell::new(ActiveGroup::new(tab_ids)),
            listeners: RefCell::new(Vec::new()),
        });
        tabs.install_listeners();
        tabs.activate(0);
        Ok(tabs)
    }

    pub(crate) fn active_tab(&self) -> Option<String> {
        self.group.borrow().active_id().map(str::to_string)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::with_capacity(self.triggers.len());
        for (index, trigger) in self.triggers.iter().enumerate() {
            let tabs = Rc::downgrade(self);
            listeners.push(EventListener::new(trigger, "click", move |_event: &Event| {
                if let Some(tabs) = tabs.upgrade() {
                    tabs.activate(index);
                }
            }));
        }
        *self.listeners.borrow_mut() = listeners;
    }

    fn activate(&self, index: usize) {
        if self.group.borrow_mut().activate_index(index).is_none() {
            return;
        }
        for (position, trigger) in self.triggers.iter().enumerate() {
            dom::set_class(trigger, &self.active_class, position == index);
        }
        for content in &self.contents {
            self.mark(content, false);
        }
        if let Some(target) = self.targets.get(index).and_then(Option::as_ref) {
            self.mark(target, true);
        }
    }

    fn mark(&self, content: &HtmlElement, shown: bool) {
        for marker in &self.markers {
            match marker {
                MarkerStrategy::Class => dom::set_class(content, &self.active_class, shown),
                MarkerStrategy::Display => {
                    dom::set_style(content, "display", if shown { "block" } else { "none" })
                }
            }
        }
    }
}
