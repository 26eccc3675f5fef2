use backdrop_core::BackdropError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, BackdropError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BackdropError::SurfaceUnavailable(format!("missing #{id}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| BackdropError::SurfaceUnavailable(format!("#{id} is not a canvas")))
}

/// Viewport size in CSS pixels, the coordinate space of `clientX/clientY`.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (read(w.inner_width()), read(w.inner_height()))
}

/// Match the canvas backing store to the viewport and return the new size.
pub fn fit_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (w, h) = viewport_size();
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_attr(document: &web::Document, id: &str, name: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute(name, value);
    }
}

#[inline]
pub fn toggle_class(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().toggle_with_force(class, on);
    }
}
