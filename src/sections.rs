use crate::constants::*;
use crate::dom;
use crate::events::EventListener;
use backdrop_core::{Accordion, Countdown, GalleryEvent, GalleryRotator};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `setInterval` registration, cleared on drop.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: i32, handler: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

pub struct CountdownSection {
    _tick: Interval,
}

impl CountdownSection {
    /// Returns `None` when the page has no countdown markup.
    pub fn mount(document: &web::Document) -> Option<anyhow::Result<Self>> {
        document.get_element_by_id(&format!("{COUNTDOWN_ID_PREFIX}days"))?;

        let mut countdown = Countdown::default();
        render_countdown(document, &countdown);
        let doc = document.clone();
        let tick = Interval::start(COUNTDOWN_TICK_MS, move || {
            if countdown.tick() {
                render_countdown(&doc, &countdown);
            }
        });
        Some(
            tick.map(|t| Self { _tick: t })
                .map_err(|e| anyhow::anyhow!("{:?}", e)),
        )
    }
}

fn render_countdown(document: &web::Document, countdown: &Countdown) {
    for (label, value) in countdown.units() {
        let id = format!("{COUNTDOWN_ID_PREFIX}{label}");
        dom::set_text(document, &id, &format!("{:02}", value));
    }
}

pub struct GallerySection {
    _tick: Interval,
}

impl GallerySection {
    pub fn mount(document: &web::Document) -> Option<anyhow::Result<Self>> {
        document.get_element_by_id(GALLERY_CURRENT_ID)?;
        Some(Self::wire(document))
    }

    fn wire(document: &web::Document) -> anyhow::Result<Self> {
        let mut rotator = GalleryRotator::new(GALLERY_IMAGES.len())?;
        render_gallery_committed(document, &rotator);

        let doc = document.clone();
        let mut last = Instant::now();
        let mut events = Vec::new();
        let tick = Interval::start(GALLERY_TICK_MS, move || {
            let now = Instant::now();
            rotator.advance(now - last, &mut events);
            last = now;
            for ev in events.drain(..) {
                match ev {
                    GalleryEvent::TransitionStarted { to, .. } => {
                        dom::set_attr(&doc, GALLERY_NEXT_ID, "src", GALLERY_IMAGES[to]);
                        dom::set_attr(&doc, GALLERY_CURRENT_ID, "style", "opacity:0");
                        dom::set_attr(&doc, GALLERY_NEXT_ID, "style", "opacity:1");
                    }
                    GalleryEvent::TransitionFinished { .. } => {
                        render_gallery_committed(&doc, &rotator);
                    }
                }
            }
        })
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { _tick: tick })
    }
}

fn render_gallery_committed(document: &web::Document, rotator: &GalleryRotator) {
    let current = rotator.current();
    dom::set_attr(document, GALLERY_CURRENT_ID, "src", GALLERY_IMAGES[current]);
    dom::set_attr(document, GALLERY_CURRENT_ID, "style", "opacity:1");
    dom::set_attr(document, GALLERY_NEXT_ID, "style", "opacity:0");
    dom::set_text(document, GALLERY_COUNTER_ID, &rotator.counter_label());
    for i in 0..rotator.image_count() {
        let id = format!("{GALLERY_DOT_ID_PREFIX}{i}");
        dom::toggle_class(document, &id, ACTIVE_CLASS, i == current);
    }
}

pub struct FaqSection {
    _clicks: Vec<EventListener>,
}

impl FaqSection {
    pub fn mount(document: &web::Document) -> Option<anyhow::Result<Self>> {
        let questions: Vec<web::Element> = (0..)
            .map_while(|i| document.get_element_by_id(&format!("{FAQ_QUESTION_ID_PREFIX}{i}")))
            .collect();
        if questions.is_empty() {
            return None;
        }

        let accordion = Rc::new(RefCell::new(Accordion::new(questions.len())));
        let clicks = questions
            .iter()
            .enumerate()
            .map(|(i, el)| {
                let accordion = accordion.clone();
                let doc = document.clone();
                let target: &web::EventTarget = el.as_ref();
                EventListener::new(target, "click", move |_| {
                    let mut acc = accordion.borrow_mut();
                    acc.toggle(i);
                    for j in 0..acc.len() {
                        let id = format!("{FAQ_ITEM_ID_PREFIX}{j}");
                        dom::toggle_class(&doc, &id, OPEN_CLASS, acc.is_open(j));
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("{:?}", e));

        log::info!("[faq] wired {} questions", questions.len());
        Some(clicks.map(|c| Self { _clicks: c }))
    }
}
