//! Dock controller binding the engine to DOM elements

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, TouchEvent};

use dockpane::{DockConfig, DockEngine, FrameUpdate, Vec2};

use crate::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// State shared between the controller, its listeners, and the frame loop
struct Shared {
    engine: RefCell<DockEngine>,
    pane: web_sys::HtmlElement,
    ghost: web_sys::HtmlElement,
    /// JS callback invoked with (width, height) when a re-layout is due
    resize_callback: RefCell<Option<js_sys::Function>>,
    /// Cleared by `detach` to stop the frame loop and ignore late events
    running: Cell<bool>,
}

impl Shared {
    /// Apply one frame of output to the panel and ghost surfaces
    fn apply(&self, update: &FrameUpdate) {
        dom::set_bounds(&self.pane, update.pane);
        dom::set_bounds(&self.ghost, update.ghost);
        dom::set_opacity(&self.ghost, update.ghost_opacity);
        dom::set_cursor(&self.pane, update.cursor.css());

        if update.needs_relayout {
            if let Some(callback) = self.resize_callback.borrow().as_ref() {
                let width = JsValue::from_f64(update.pane.width as f64);
                let height = JsValue::from_f64(update.pane.height as f64);
                let _ = callback.call2(&JsValue::NULL, &width, &height);
            }
        }
    }
}

/// Binds a [`DockEngine`] to a panel element, a ghost overlay element,
/// and a title drag-handle element
///
/// Pointer-down listeners attach to the panel; move/up listeners attach
/// to the document so a fast drag cannot escape the gesture. All
/// listeners and the frame loop are scoped to this instance: `detach`
/// releases them, and two controllers on one page do not cross-talk.
#[wasm_bindgen]
pub struct DockController {
    shared: Rc<Shared>,
    title: web_sys::HtmlElement,
    // Listener closures, kept alive for the controller's lifetime
    mouse_listeners: Vec<(&'static str, ListenerTarget, Closure<dyn FnMut(MouseEvent)>)>,
    touch_listeners: Vec<(&'static str, ListenerTarget, Closure<dyn FnMut(TouchEvent)>)>,
    resize_listener: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

/// Where a listener was registered, for symmetric removal on detach
#[derive(Clone, Copy)]
enum ListenerTarget {
    Pane,
    Title,
    Document,
}

#[wasm_bindgen]
impl DockController {
    /// Create a controller bound to the given element ids and start its
    /// frame loop
    #[wasm_bindgen(constructor)]
    pub fn new(pane_id: &str, ghost_id: &str, title_id: &str) -> Result<DockController, JsValue> {
        let pane = dom::element_by_id(pane_id)?;
        let ghost = dom::element_by_id(ghost_id)?;
        let title = dom::element_by_id(title_id)?;

        let (width, height) = dom::viewport_size()?;
        let mut engine = DockEngine::new(DockConfig::default());
        let seed = engine.init(width, height);

        let shared = Rc::new(Shared {
            engine: RefCell::new(engine),
            pane,
            ghost,
            resize_callback: RefCell::new(None),
            running: Cell::new(true),
        });

        // Seed both surfaces before the first frame
        shared.apply(&seed);

        let mut controller = DockController {
            shared,
            title,
            mouse_listeners: Vec::new(),
            touch_listeners: Vec::new(),
            resize_listener: None,
        };
        controller.register_listeners()?;
        controller.start_frame_loop()?;

        log(&format!("dockpane: controller attached to #{}", pane_id));
        Ok(controller)
    }

    /// Register a JS callback invoked with (width, height) whenever the
    /// panel content needs a re-layout pass
    pub fn set_resize_callback(&self, callback: js_sys::Function) {
        *self.shared.resize_callback.borrow_mut() = Some(callback);
    }

    /// Commit full-screen geometry immediately
    pub fn toggle_full_screen(&self) {
        let update = self.shared.engine.borrow_mut().toggle_full_screen();
        self.shared.apply(&update);
    }

    /// Restore the pre-snap panel size, if one is cached
    pub fn restore(&self) {
        let update = self.shared.engine.borrow_mut().restore_pre_snapped();
        if let Some(update) = update {
            self.shared.apply(&update);
        }
    }

    /// Current panel bounds as JSON, for host debugging
    pub fn bounds_json(&self) -> Result<String, JsValue> {
        let bounds = self.shared.engine.borrow().bounds();
        serde_json::to_string(&bounds).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Release document-level listeners and stop the frame loop
    pub fn detach(&mut self) -> Result<(), JsValue> {
        self.shared.running.set(false);

        let document = dom::document()?;
        for (name, target, closure) in &self.mouse_listeners {
            self.event_target(*target, &document)
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        }
        for (name, target, closure) in &self.touch_listeners {
            self.event_target(*target, &document)
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        }
        if let Some(closure) = &self.resize_listener {
            dom::window()?
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        }

        self.mouse_listeners.clear();
        self.touch_listeners.clear();
        self.resize_listener = None;

        log("dockpane: controller detached");
        Ok(())
    }
}

impl DockController {
    /// Resolve a listener's registration target for removal
    fn event_target<'a>(
        &'a self,
        target: ListenerTarget,
        document: &'a web_sys::Document,
    ) -> &'a web_sys::EventTarget {
        match target {
            ListenerTarget::Pane => &self.shared.pane,
            ListenerTarget::Title => &self.title,
            ListenerTarget::Document => document,
        }
    }

    fn register_listeners(&mut self) -> Result<(), JsValue> {
        let document = dom::document()?;
        let title = self.title.clone();

        // Mouse: down on the panel, move/up on the document
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if !shared.running.get() {
                    return;
                }
                let sample = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                if shared.engine.borrow_mut().on_pointer_down(sample).is_handled() {
                    event.prevent_default();
                    event.stop_propagation();
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            self.shared
                .pane
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            self.mouse_listeners
                .push(("mousedown", ListenerTarget::Pane, closure));
        }
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if !shared.running.get() {
                    return;
                }
                let sample = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                shared.engine.borrow_mut().on_pointer_move(sample);
            }) as Box<dyn FnMut(MouseEvent)>);
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            self.mouse_listeners
                .push(("mousemove", ListenerTarget::Document, closure));
        }
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if !shared.running.get() {
                    return;
                }
                let sample = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                let update = shared.engine.borrow_mut().on_pointer_up(sample);
                if let Some(update) = update {
                    shared.apply(&update);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            document
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            self.mouse_listeners
                .push(("mouseup", ListenerTarget::Document, closure));
        }

        // Title hover drives the "can move" test
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |_: MouseEvent| {
                shared.engine.borrow_mut().set_title_hover(true);
            }) as Box<dyn FnMut(MouseEvent)>);
            title.add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref())?;
            self.mouse_listeners
                .push(("mouseover", ListenerTarget::Title, closure));
        }
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |_: MouseEvent| {
                shared.engine.borrow_mut().set_title_hover(false);
            }) as Box<dyn FnMut(MouseEvent)>);
            title.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref())?;
            self.mouse_listeners
                .push(("mouseout", ListenerTarget::Title, closure));
        }

        // Touch: start on the panel, move/end on the document
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
                if !shared.running.get() {
                    return;
                }
                if let Some(touch) = event.touches().get(0) {
                    let sample = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                    shared.engine.borrow_mut().on_touch_start(sample);
                    // A touch on the panel is never meant to scroll the page
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(TouchEvent)>);
            self.shared
                .pane
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            self.touch_listeners
                .push(("touchstart", ListenerTarget::Pane, closure));
        }
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
                if !shared.running.get() {
                    return;
                }
                if let Some(touch) = event.touches().get(0) {
                    let sample = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                    shared.engine.borrow_mut().on_touch_move(sample);
                }
            }) as Box<dyn FnMut(TouchEvent)>);
            document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            self.touch_listeners
                .push(("touchmove", ListenerTarget::Document, closure));
        }
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
                if !shared.running.get() {
                    return;
                }
                let remaining = event.touches().length() as usize;
                if let Some(touch) = event.changed_touches().get(0) {
                    let sample = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                    let update = shared.engine.borrow_mut().on_touch_end(remaining, sample);
                    if let Some(update) = update {
                        shared.apply(&update);
                    }
                }
            }) as Box<dyn FnMut(TouchEvent)>);
            document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            self.touch_listeners
                .push(("touchend", ListenerTarget::Document, closure));
        }

        // Viewport resize: snapped geometry re-applies synchronously
        {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if !shared.running.get() {
                    return;
                }
                if let Ok((width, height)) = dom::viewport_size() {
                    let update = shared.engine.borrow_mut().viewport_resized(width, height);
                    if let Some(update) = update {
                        shared.apply(&update);
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            dom::window()?
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            self.resize_listener = Some(closure);
        }

        Ok(())
    }

    /// Start the perpetually-rescheduled frame callback
    fn start_frame_loop(&self) -> Result<(), JsValue> {
        let shared = self.shared.clone();
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let seed = slot.clone();

        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Stop rescheduling once detached
            if !shared.running.get() {
                return;
            }

            let update = shared.engine.borrow_mut().on_frame();
            if let Some(update) = update {
                shared.apply(&update);
            }

            if let (Ok(win), Some(closure)) = (dom::window(), seed.borrow().as_ref()) {
                let _ = win.request_animation_frame(closure.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut()>));

        if let Some(closure) = slot.borrow().as_ref() {
            dom::window()?.request_animation_frame(closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}
