// Host-side tests for the running/disposed lifecycle shared by both animators.

mod support;

use backdrop_core::{
    FrameInput, GridField, GridParams, ParticleField, ParticleParams, PointerTracker, RunState,
    Stage, Vec2,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use support::RecordingPainter;

fn grid_stage() -> Stage<GridField> {
    let grid = GridField::new(800.0, 600.0, GridParams::default()).expect("valid params");
    Stage::new(grid)
}

#[test]
fn running_stage_draws_and_asks_for_more_frames() {
    let mut stage = grid_stage();
    let mut painter = RecordingPainter::default();
    let input = FrameInput {
        pointer: Some(Vec2::new(400.0, 300.0)),
    };

    assert!(stage.frame(&input, &mut painter));
    assert!(stage.frame(&input, &mut painter));
    assert_eq!(stage.frames(), 2);
    assert!(!painter.calls.is_empty());
}

#[test]
fn no_draw_calls_after_dispose() {
    let mut stage = grid_stage();
    let mut tracker = PointerTracker::default();
    let mut painter = RecordingPainter::default();

    tracker.on_move(Vec2::new(100.0, 100.0), 0.0);
    let input = FrameInput {
        pointer: tracker.latest(),
    };
    assert!(stage.frame(&input, &mut painter));
    painter.reset();

    stage.dispose();
    assert_eq!(stage.state(), RunState::Disposed);

    // Input and resize that arrive after teardown.
    tracker.on_move(Vec2::new(300.0, 200.0), 50.0);
    stage.resize(1024.0, 768.0);
    let input = FrameInput {
        pointer: tracker.latest(),
    };
    for _ in 0..10 {
        assert!(!stage.frame(&input, &mut painter), "disposed stage must not reschedule");
    }

    assert!(painter.calls.is_empty());
    assert_eq!(stage.animator().size(), (800.0, 600.0));
    assert_eq!(stage.frames(), 1);
}

#[test]
fn particle_stage_stops_after_dispose() {
    let mut rng = StdRng::seed_from_u64(5);
    let field = ParticleField::new(640.0, 480.0, &ParticleParams::default(), &mut rng);
    let mut stage = Stage::new(field);
    let mut painter = RecordingPainter::default();

    assert!(stage.frame(&FrameInput::default(), &mut painter));
    let snapshot = stage.animator().particles().to_vec();

    stage.dispose();
    stage.dispose();
    painter.reset();
    stage.resize(10.0, 10.0);
    assert!(!stage.frame(&FrameInput::default(), &mut painter));

    assert!(painter.calls.is_empty());
    assert_eq!(stage.animator().particles(), snapshot.as_slice());
    assert_eq!(stage.animator().size(), (640.0, 480.0));
}

#[test]
fn resize_reaches_the_animator_while_running() {
    let mut stage = grid_stage();
    stage.resize(100.0, 100.0);
    assert_eq!(stage.animator().dots().len(), 4);
}
