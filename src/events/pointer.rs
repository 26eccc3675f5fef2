use super::EventListener;
use backdrop_core::PointerTracker;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Window-level pointer subscription feeding a shared [`PointerTracker`].
pub struct PointerTracking {
    tracker: Rc<RefCell<PointerTracker>>,
    _listener: EventListener,
}

impl PointerTracking {
    pub fn start() -> Result<Self, JsValue> {
        let tracker = Rc::new(RefCell::new(PointerTracker::default()));
        let tracker_ev = tracker.clone();
        let listener = EventListener::on_window("pointermove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            tracker_ev.borrow_mut().on_move(pos, js_sys::Date::now());
        })?;
        Ok(Self {
            tracker,
            _listener: listener,
        })
    }

    pub fn tracker(&self) -> Rc<RefCell<PointerTracker>> {
        self.tracker.clone()
    }
}
