use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A registered DOM event listener. Dropping the handle unregisters it, so a
/// component that owns its listeners cannot leak them past teardown.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<F>(
        target: &web::EventTarget,
        kind: &'static str,
        handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::register(target, kind, false, handler)
    }

    /// Listen on the global `window`.
    pub fn on_window<F>(kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web::Event) + 'static,
    {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let target: &web::EventTarget = window.as_ref();
        Self::register(target, kind, false, handler)
    }

    /// Like [`EventListener::on_window`], but promises never to call
    /// `preventDefault` so scrolling is not blocked on the handler.
    pub fn on_window_passive<F>(kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web::Event) + 'static,
    {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let target: &web::EventTarget = window.as_ref();
        Self::register(target, kind, true, handler)
    }

    fn register<F>(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(web::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let function = callback.as_ref().unchecked_ref();
        if passive {
            let options = web::AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind, function, &options,
            )?;
        } else {
            target.add_event_listener_with_callback(kind, function)?;
        }
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
