#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod background;
mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod reveal;
mod sections;

use background::{FloatingParticles, GridBackground};
use reveal::{HeroParallax, RevealSections};
use sections::{CountdownSection, FaqSection, GallerySection};

/// Everything mounted on the page. Dropping it stops every loop, interval and
/// listener.
struct Page {
    grid: Option<GridBackground>,
    particles: Option<FloatingParticles>,
    countdown: Option<CountdownSection>,
    gallery: Option<GallerySection>,
    faq: Option<FaqSection>,
    reveal: Option<RevealSections>,
    parallax: Option<HeroParallax>,
}

impl Page {
    fn mounted_count(&self) -> usize {
        [
            self.grid.is_some(),
            self.particles.is_some(),
            self.countdown.is_some(),
            self.gallery.is_some(),
            self.faq.is_some(),
            self.reveal.is_some(),
            self.parallax.is_some(),
        ]
        .into_iter()
        .filter(|m| *m)
        .count()
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Tear down every mounted component.
#[wasm_bindgen]
pub fn dispose() {
    if let Some(page) = PAGE.with(|p| p.borrow_mut().take()) {
        drop(page);
        log::info!("backdrop-web disposed");
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A missing or unusable surface only disables that layer.
    let grid = dom::canvas_by_id(&document, constants::GRID_CANVAS_ID)
        .map_err(anyhow::Error::from)
        .and_then(GridBackground::mount);
    let particles = dom::canvas_by_id(&document, constants::PARTICLE_CANVAS_ID)
        .map_err(anyhow::Error::from)
        .and_then(FloatingParticles::mount);

    let page = Page {
        grid: keep("grid background", grid),
        particles: keep("floating particles", particles),
        countdown: CountdownSection::mount(&document).and_then(|r| keep("countdown", r)),
        gallery: GallerySection::mount(&document).and_then(|r| keep("gallery", r)),
        faq: FaqSection::mount(&document).and_then(|r| keep("faq", r)),
        reveal: RevealSections::mount(&document).and_then(|r| keep("section reveal", r)),
        parallax: HeroParallax::mount(&document).and_then(|r| keep("hero parallax", r)),
    };

    log::info!("backdrop-web mounted {} components", page.mounted_count());

    // Replacing a previous page drops it first.
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

fn keep<T>(what: &str, mounted: anyhow::Result<T>) -> Option<T> {
    match mounted {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("{} disabled: {}", what, e);
            None
        }
    }
}
