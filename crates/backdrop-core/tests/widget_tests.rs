// Host-side tests for the countdown, gallery rotator, FAQ accordion and
// section reveal.

use backdrop_core::constants::HERO_GLOW_BASE_PERCENT;
use backdrop_core::{
    hero_glow_center, hero_glow_css, Accordion, BackdropError, Countdown, GalleryEvent,
    GalleryRotator, Phase, Reveal, RevealSet,
};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn countdown_starts_at_nine_days_nine_hours() {
    let mut c = Countdown::default();
    assert_eq!(c, Countdown::new(9, 9, 0, 0));
    assert_eq!(c.to_string(), "09d 09h 00m 00s");

    assert!(c.tick());
    assert_eq!(c, Countdown::new(9, 8, 59, 59));
}

#[test]
fn countdown_borrows_from_larger_units() {
    let mut c = Countdown::new(0, 0, 1, 0);
    c.tick();
    assert_eq!(c, Countdown::new(0, 0, 0, 59));

    let mut c = Countdown::new(1, 0, 0, 0);
    c.tick();
    assert_eq!(c, Countdown::new(0, 23, 59, 59));
}

#[test]
fn countdown_tick_matches_total_seconds() {
    let mut c = Countdown::default();
    let start = c.total_seconds();
    for i in 1..=5_000 {
        c.tick();
        assert_eq!(c, Countdown::from_total_seconds(start - i));
    }
}

#[test]
fn countdown_holds_at_zero() {
    let mut c = Countdown::new(0, 0, 0, 1);
    assert!(c.tick());
    assert!(c.is_elapsed());
    assert!(!c.tick());
    assert_eq!(c, Countdown::new(0, 0, 0, 0));
    let labels: Vec<_> = c.units().iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["days", "hours", "minutes", "seconds"]);
}

#[test]
fn gallery_shows_then_cross_fades() {
    let mut g = GalleryRotator::new(5).expect("non-empty gallery");
    let mut events = Vec::new();
    assert_eq!((g.current(), g.next()), (0, 1));
    assert_eq!(g.counter_label(), "1 / 5");

    g.advance(ms(3_999), &mut events);
    assert!(events.is_empty());
    g.advance(ms(1), &mut events);
    assert_eq!(events, vec![GalleryEvent::TransitionStarted { from: 0, to: 1 }]);
    assert_eq!(g.phase(), Phase::Transitioning);

    events.clear();
    g.advance(ms(799), &mut events);
    assert!(events.is_empty());
    g.advance(ms(1), &mut events);
    assert_eq!(events, vec![GalleryEvent::TransitionFinished { current: 1 }]);
    assert!(!g.is_transitioning());
    assert_eq!(g.counter_label(), "2 / 5");

    // The showing period restarts after the commit.
    events.clear();
    g.advance(ms(3_999), &mut events);
    assert!(events.is_empty());
}

#[test]
fn gallery_catches_up_after_a_long_gap() {
    let mut g = GalleryRotator::new(5).expect("non-empty gallery");
    let mut events = Vec::new();
    g.advance(ms(4_800 * 5), &mut events);

    assert_eq!(events.len(), 10);
    for pair in events.chunks(2) {
        match pair {
            [GalleryEvent::TransitionStarted { to, .. }, GalleryEvent::TransitionFinished { current }] => {
                assert_eq!(to, current)
            }
            other => panic!("unexpected event order {other:?}"),
        }
    }
    assert_eq!(g.current(), 0);
    assert_eq!(g.image_count(), 5);
}

#[test]
fn single_image_gallery_stays_put() {
    let mut g = GalleryRotator::new(1).expect("non-empty gallery");
    let mut events = Vec::new();
    g.advance(ms(10_000), &mut events);
    assert_eq!(g.current(), 0);
    assert_eq!(g.next(), 0);
}

#[test]
fn gallery_rejects_bad_configuration() {
    assert_eq!(GalleryRotator::new(0).err(), Some(BackdropError::EmptyGallery));
    assert_eq!(
        GalleryRotator::with_timing(3, ms(500), ms(500)).err(),
        Some(BackdropError::InvalidTiming {
            interval_ms: 500,
            transition_ms: 500
        })
    );
}

#[test]
fn accordion_keeps_at_most_one_entry_open() {
    let mut faq = Accordion::new(4);
    assert_eq!(faq.open(), None);

    assert_eq!(faq.toggle(1), Some(1));
    assert!(faq.is_open(1));
    assert_eq!(faq.toggle(3), Some(3));
    assert!(!faq.is_open(1));
    assert_eq!(faq.toggle(3), None);

    faq.toggle(0);
    assert_eq!(faq.toggle(9), Some(0), "out-of-range click is ignored");
}

#[test]
fn reveal_latches_on_first_intersection() {
    let mut r = Reveal::default();
    assert!(!r.observe(false));
    assert!(!r.is_revealed());

    assert!(r.observe(true), "first sighting reveals");
    assert!(r.is_revealed());

    assert!(!r.observe(true), "already revealed");
    assert!(!r.observe(false));
    assert!(r.is_revealed(), "scrolling away keeps it shown");
}

#[test]
fn reveal_set_tracks_sections_independently() {
    let mut sections = RevealSet::new(3);
    assert_eq!(sections.len(), 3);
    assert!(!sections.all_revealed());

    assert!(sections.observe(2, true));
    assert!(sections.is_revealed(2));
    assert!(!sections.is_revealed(0));

    assert!(!sections.observe(7, true), "unknown section is ignored");
    assert!(!sections.is_revealed(7));

    sections.observe(0, true);
    sections.observe(1, true);
    assert!(sections.all_revealed());
    assert!(RevealSet::new(0).all_revealed());
}

#[test]
fn hero_glow_drifts_with_scroll() {
    assert_eq!(hero_glow_center(0.0), HERO_GLOW_BASE_PERCENT);
    assert!((hero_glow_center(200.0) - 60.0).abs() < 1e-4);
    assert!(hero_glow_center(400.0) > hero_glow_center(200.0));
    assert_eq!(hero_glow_center(f32::NAN), HERO_GLOW_BASE_PERCENT);

    assert_eq!(
        hero_glow_css(0.0),
        "radial-gradient(circle at 50% 50%, rgba(0, 255, 136, 0.15) 0%, transparent 60%)"
    );
}
