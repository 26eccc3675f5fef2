//! The two canvas layers behind the page: the pointer-reactive grid and the
//! floating particles. Each component owns its stage, its frame loop and its
//! listeners; dropping it tears all of them down.

use crate::dom;
use crate::events::{EventListener, PointerTracking};
use crate::frame::FrameLoop;
use crate::render::CanvasPainter;
use backdrop_core::{
    Animator, FrameInput, GridField, GridParams, ParticleField, ParticleParams, Stage,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct GridBackground {
    stage: Rc<RefCell<Stage<GridField>>>,
    _pointer: PointerTracking,
    _resize: EventListener,
    _frames: FrameLoop,
}

impl GridBackground {
    pub fn mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let mut painter = CanvasPainter::new(&canvas)?;
        let (w, h) = dom::fit_canvas_to_viewport(&canvas);
        let stage = Rc::new(RefCell::new(Stage::new(GridField::new(
            w,
            h,
            GridParams::default(),
        )?)));

        let pointer = PointerTracking::start().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let resize = watch_resize(canvas, stage.clone())?;

        let stage_tick = stage.clone();
        let tracker = pointer.tracker();
        let frames = FrameLoop::start(move || {
            let input = FrameInput {
                pointer: tracker.borrow().latest(),
            };
            stage_tick.borrow_mut().frame(&input, &mut painter)
        });

        log::info!(
            "[grid] mounted {}x{} with {} dots",
            w,
            h,
            stage.borrow().animator().dots().len()
        );
        Ok(Self {
            stage,
            _pointer: pointer,
            _resize: resize,
            _frames: frames,
        })
    }
}

impl Drop for GridBackground {
    fn drop(&mut self) {
        self.stage.borrow_mut().dispose();
    }
}

pub struct FloatingParticles {
    stage: Rc<RefCell<Stage<ParticleField>>>,
    _resize: EventListener,
    _frames: FrameLoop,
}

impl FloatingParticles {
    pub fn mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let mut painter = CanvasPainter::new(&canvas)?;
        let (w, h) = dom::fit_canvas_to_viewport(&canvas);
        let mut rng = StdRng::from_entropy();
        let field = ParticleField::new(w, h, &ParticleParams::default(), &mut rng);
        let stage = Rc::new(RefCell::new(Stage::new(field)));

        let resize = watch_resize(canvas, stage.clone())?;

        let stage_tick = stage.clone();
        let frames = FrameLoop::start(move || {
            stage_tick
                .borrow_mut()
                .frame(&FrameInput::default(), &mut painter)
        });

        log::info!(
            "[particles] mounted {}x{} with {} particles",
            w,
            h,
            stage.borrow().animator().particles().len()
        );
        Ok(Self {
            stage,
            _resize: resize,
            _frames: frames,
        })
    }
}

impl Drop for FloatingParticles {
    fn drop(&mut self) {
        self.stage.borrow_mut().dispose();
    }
}

fn watch_resize<A>(
    canvas: web::HtmlCanvasElement,
    stage: Rc<RefCell<Stage<A>>>,
) -> anyhow::Result<EventListener>
where
    A: Animator + 'static,
{
    EventListener::on_window("resize", move |_| {
        if !stage.borrow().is_running() {
            return;
        }
        let (w, h) = dom::fit_canvas_to_viewport(&canvas);
        stage.borrow_mut().resize(w, h);
    })
    .map_err(|e| anyhow::anyhow!("{:?}", e))
}
