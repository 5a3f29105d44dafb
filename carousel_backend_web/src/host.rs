// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM implementation of the host contract.
//!
//! [`DomHost`] owns the track element, a snapshot of its children taken at
//! construction, the navigation controls and the dot containers. Style
//! changes are inline (`transform`, `transition`, `display`); clearing a
//! property hands control back to the stylesheet.
//!
//! Listeners route events to the controller through a dispatch slot that
//! [`mount`](crate::mount) fills once the controller exists. Each closure
//! holds only a `Weak` reference, so listeners never keep a carousel alive,
//! and events arriving while the controller is already borrowed are dropped.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{OnceCell, RefCell};

use carousel_core::Carousel;
use carousel_core::host::{
    CarouselHost, HostError, ListenerTarget, NavControl, NavDirection, PointerInput, PointerKind,
};
use kurbo::Point;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, NodeList, PointerEvent,
    Window,
};

/// CSS class of a dot button.
const DOT_CLASS: &str = "carousel-dot";

/// CSS class toggled on the active dot.
const ACTIVE_CLASS: &str = "is-active";

pub(crate) type SharedCarousel = Rc<RefCell<Carousel<DomHost>>>;

/// Late-bound route from DOM listeners to their controller.
pub(crate) type DispatchSlot = Rc<OnceCell<Weak<RefCell<Carousel<DomHost>>>>>;

/// Runs `f` on the controller behind `slot` if it is alive and not busy.
pub(crate) fn dispatch(slot: &DispatchSlot, f: impl FnOnce(&mut Carousel<DomHost>)) {
    let Some(carousel) = slot.get().and_then(Weak::upgrade) else {
        return;
    };
    let Ok(mut carousel) = carousel.try_borrow_mut() else {
        return;
    };
    f(&mut carousel);
}

/// A set of optional DOM elements, such as all navigation controls of one
/// direction.
///
/// Absent handles become an empty set, so a page without dots or without
/// navigation simply has nothing to show or hide.
#[derive(Clone, Debug, Default)]
pub struct Targets(Vec<HtmlElement>);

impl Targets {
    /// Zero or one element.
    #[must_use]
    pub fn from_element(element: Option<Element>) -> Self {
        Self(
            element
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .into_iter()
                .collect(),
        )
    }

    /// Every HTML element in `list`, in document order.
    #[must_use]
    pub fn from_node_list(list: &NodeList) -> Self {
        Self(
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .collect(),
        )
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn get(&self, index: usize) -> Option<&HtmlElement> {
        self.0.get(index)
    }
}

impl From<Vec<HtmlElement>> for Targets {
    fn from(elements: Vec<HtmlElement>) -> Self {
        Self(elements)
    }
}

type EventClosure = Closure<dyn FnMut(Event)>;

/// Event listeners bound for one [`ListenerTarget`].
///
/// Dropping a `DomListener` without passing it to
/// [`CarouselHost::unbind`] leaves the DOM listeners registered but their
/// callbacks invalidated.
pub struct DomListener {
    target: EventTarget,
    handlers: Vec<(&'static str, EventClosure)>,
}

impl core::fmt::Debug for DomListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let events: Vec<&str> = self.handlers.iter().map(|(event, _)| *event).collect();
        f.debug_struct("DomListener")
            .field("events", &events)
            .finish_non_exhaustive()
    }
}

/// A [`CarouselHost`] over live DOM elements.
pub struct DomHost {
    window: Window,
    track: HtmlElement,
    items: Vec<HtmlElement>,
    prev: Targets,
    next: Targets,
    dot_containers: Targets,
    /// Dot buttons per container, in page order.
    dots: Vec<Vec<HtmlElement>>,
    slot: DispatchSlot,
}

impl core::fmt::Debug for DomHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomHost")
            .field("track", &"HtmlElement")
            .field("items", &self.items.len())
            .field("prev", &self.prev.len())
            .field("next", &self.next.len())
            .field("dot_containers", &self.dot_containers.len())
            .finish_non_exhaustive()
    }
}

impl DomHost {
    /// Creates a host for `track`, snapshotting its element children as the
    /// carousel items.
    #[must_use]
    pub fn new(
        window: Window,
        track: HtmlElement,
        prev: Targets,
        next: Targets,
        dot_containers: Targets,
    ) -> Self {
        let children = track.children();
        let items = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let dots = (0..dot_containers.len()).map(|_| Vec::new()).collect();
        Self {
            window,
            track,
            items,
            prev,
            next,
            dot_containers,
            dots,
            slot: Rc::new(OnceCell::new()),
        }
    }

    pub(crate) fn slot(&self) -> DispatchSlot {
        Rc::clone(&self.slot)
    }

    fn nav(&self, control: NavControl) -> Option<&HtmlElement> {
        match control.direction {
            NavDirection::Prev => self.prev.get(control.index),
            NavDirection::Next => self.next.get(control.index),
        }
    }

    fn dot(&self, container: usize, page: usize) -> Option<&HtmlElement> {
        self.dots.get(container)?.get(page)
    }

    fn click_listener(&self, element: &HtmlElement, target: ListenerTarget) -> DomListener {
        let slot = self.slot();
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            dispatch(&slot, |c| c.click(target));
        }) as Box<dyn FnMut(Event)>);
        let _ = element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        DomListener {
            target: element.clone().into(),
            handlers: alloc::vec![("click", on_click)],
        }
    }

    fn track_listener(&self) -> DomListener {
        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        let active = AddEventListenerOptions::new();
        active.set_passive(false);

        let mut handlers = Vec::with_capacity(4);
        for (name, options) in [
            ("pointerdown", &passive),
            ("pointermove", &active),
            ("pointerup", &passive),
            ("pointercancel", &passive),
        ] {
            let slot = self.slot();
            let handler = Closure::wrap(Box::new(move |event: Event| {
                let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let input = pointer_input(pointer);
                dispatch(&slot, |c| match event.type_().as_str() {
                    "pointerdown" => c.pointer_down(&input),
                    "pointermove" => {
                        if c.pointer_move(&input).prevent_default {
                            event.prevent_default();
                        }
                    }
                    "pointerup" => c.pointer_up(&input),
                    _ => c.pointer_cancel(&input),
                });
            }) as Box<dyn FnMut(Event)>);
            let _ = self
                .track
                .add_event_listener_with_callback_and_add_event_listener_options(
                    name,
                    handler.as_ref().unchecked_ref(),
                    options,
                );
            handlers.push((name, handler));
        }

        DomListener {
            target: self.track.clone().into(),
            handlers,
        }
    }
}

fn pointer_input(event: &PointerEvent) -> PointerInput {
    PointerInput {
        pointer_id: event.pointer_id(),
        kind: PointerKind::from_pointer_type(&event.pointer_type()),
        button: event.button(),
        position: Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
    }
}

fn set_displayed(element: &HtmlElement, visible: bool) {
    let style = element.style();
    let _ = if visible {
        style.remove_property("display").map(drop)
    } else {
        style.set_property("display", "none")
    };
}

impl CarouselHost for DomHost {
    type Listener = DomListener;

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_offset(&self, index: usize) -> Option<f64> {
        self.items
            .get(index)
            .map(|item| f64::from(item.offset_left()))
    }

    fn nav_count(&self, direction: NavDirection) -> usize {
        match direction {
            NavDirection::Prev => self.prev.len(),
            NavDirection::Next => self.next.len(),
        }
    }

    fn dot_container_count(&self) -> usize {
        self.dot_containers.len()
    }

    fn set_track_transition(&mut self, enabled: bool) {
        let style = self.track.style();
        let _ = if enabled {
            style.remove_property("transition").map(drop)
        } else {
            style.set_property("transition", "none")
        };
    }

    fn set_track_translate(&mut self, x: Option<f64>) {
        let style = self.track.style();
        let _ = match x {
            Some(x) => style.set_property("transform", &format!("translateX({x}px)")),
            None => style.remove_property("transform").map(drop),
        };
    }

    fn flush_layout(&mut self) {
        // Reading a layout property forces style and layout to be computed.
        let _ = self.track.offset_width();
    }

    fn set_nav_visible(&mut self, control: NavControl, visible: bool) {
        if let Some(element) = self.nav(control) {
            set_displayed(element, visible);
        }
    }

    fn set_dots_visible(&mut self, container: usize, visible: bool) {
        if let Some(element) = self.dot_containers.get(container) {
            set_displayed(element, visible);
        }
    }

    fn clear_dots(&mut self, container: usize) {
        if let Some(element) = self.dot_containers.get(container) {
            element.set_inner_html("");
        }
        if let Some(buttons) = self.dots.get_mut(container) {
            buttons.clear();
        }
    }

    fn append_dot(&mut self, container: usize, page: usize) {
        let Some(parent) = self.dot_containers.get(container) else {
            return;
        };
        let Some(document) = self.window.document() else {
            return;
        };
        let Some(button) = document
            .create_element("button")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let _ = button.set_attribute("type", "button");
        button.set_class_name(DOT_CLASS);
        let _ = button.set_attribute("aria-label", &format!("Go to slide {}", page + 1));
        let _ = button.set_attribute("aria-current", "false");
        let _ = parent.append_child(&button);
        if let Some(buttons) = self.dots.get_mut(container) {
            buttons.push(button);
        }
    }

    fn set_dot_active(&mut self, container: usize, page: usize, active: bool) {
        if let Some(button) = self.dot(container, page) {
            let _ = button
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, active);
            let _ = button.set_attribute("aria-current", if active { "true" } else { "false" });
        }
    }

    fn bind(&mut self, target: ListenerTarget) -> DomListener {
        let element = match target {
            ListenerTarget::Nav(control) => self.nav(control).cloned(),
            ListenerTarget::Dot { container, page } => self.dot(container, page).cloned(),
            ListenerTarget::Track => return self.track_listener(),
        };
        match element {
            Some(element) => self.click_listener(&element, target),
            // The controller only binds indices the host reported.
            None => DomListener {
                target: self.track.clone().into(),
                handlers: Vec::new(),
            },
        }
    }

    fn unbind(&mut self, listener: DomListener) {
        for (event, handler) in &listener.handlers {
            let _ = listener
                .target
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
    }

    fn set_pointer_capture(&mut self, pointer_id: i32) -> Result<(), HostError> {
        self.track
            .set_pointer_capture(pointer_id)
            .map_err(|_| HostError::CaptureFailed)
    }

    fn release_pointer_capture(&mut self, pointer_id: i32) -> Result<(), HostError> {
        self.track
            .release_pointer_capture(pointer_id)
            .map_err(|_| HostError::ReleaseFailed)
    }
}
