//! Scroll-driven page effects: sections that fade in the first time they are
//! seen, and the hero glow that drifts as the page scrolls.

use crate::constants::*;
use crate::dom;
use crate::events::EventListener;
use backdrop_core::constants::REVEAL_THRESHOLD;
use backdrop_core::{hero_glow_css, RevealSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// One `IntersectionObserver` over every `#reveal-{i}` section. Disconnected
/// on drop, or as soon as every section has been revealed.
pub struct RevealSections {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealSections {
    /// Returns `None` when the page has no reveal sections.
    pub fn mount(document: &web::Document) -> Option<anyhow::Result<Self>> {
        let sections: Vec<web::Element> = (0..)
            .map_while(|i| document.get_element_by_id(&format!("{REVEAL_ID_PREFIX}{i}")))
            .collect();
        if sections.is_empty() {
            return None;
        }
        Some(Self::observe(sections).map_err(|e| anyhow::anyhow!("{:?}", e)))
    }

    fn observe(sections: Vec<web::Element>) -> Result<Self, JsValue> {
        let latches = Rc::new(RefCell::new(RevealSet::new(sections.len())));
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                let mut latches = latches.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = section_index(&target.id()) else {
                        continue;
                    };
                    if latches.observe(index, entry.is_intersecting()) {
                        _ = target.class_list().toggle_with_force(IN_VIEW_CLASS, true);
                        observer.unobserve(&target);
                        log::debug!("[reveal] section {} in view", index);
                    }
                }
                if latches.all_revealed() {
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        for section in &sections {
            observer.observe(section);
        }

        log::info!("[reveal] observing {} sections", sections.len());
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealSections {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn section_index(id: &str) -> Option<usize> {
    id.strip_prefix(REVEAL_ID_PREFIX)?.parse().ok()
}

/// Keeps `#hero-glow`'s gradient centre in step with `window.scrollY`.
pub struct HeroParallax {
    _scroll: EventListener,
}

impl HeroParallax {
    pub fn mount(document: &web::Document) -> Option<anyhow::Result<Self>> {
        document.get_element_by_id(HERO_GLOW_ID)?;

        render_glow(document);
        let doc = document.clone();
        let scroll = EventListener::on_window_passive("scroll", move |_| render_glow(&doc));
        Some(
            scroll
                .map(|s| Self { _scroll: s })
                .map_err(|e| anyhow::anyhow!("{:?}", e)),
        )
    }
}

fn render_glow(document: &web::Document) {
    let scroll_y = web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32;
    let style = format!("background: {}", hero_glow_css(scroll_y));
    dom::set_attr(document, HERO_GLOW_ID, "style", &style);
}
