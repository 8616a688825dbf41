use crate::*;

use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const TILE_WIDTH: f64 = 100.0;

fn options(count: usize, tiles: f64, cycle_mode: CycleMode) -> SliderOptions {
    SliderOptions::new(count)
        .with_tiles_to_show(tiles)
        .with_cycle_mode(cycle_mode)
}

fn mounted(options: SliderOptions) -> Slider {
    let width = options.tiles_to_show * TILE_WIDTH;
    let mut s = Slider::new(options);
    s.set_viewport_width(width);
    s
}

fn slider(count: usize, tiles: f64, cycle_mode: CycleMode) -> Slider {
    mounted(options(count, tiles, cycle_mode))
}

/// Ticks the live motion every 16ms until it settles. Returns the next free timestamp.
fn settle(s: &mut Slider, mut now_ms: u64) -> u64 {
    let deadline = now_ms + 10_000;
    while s.is_animating() {
        assert!(now_ms < deadline, "motion did not settle");
        s.tick(now_ms);
        now_ms += 16;
    }
    now_ms
}

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let c = Arc::new(AtomicUsize::new(0));
    (Arc::clone(&c), c)
}

fn mode() -> impl Strategy<Value = CycleMode> {
    prop_oneof![
        Just(CycleMode::Stop),
        Just(CycleMode::Restart),
        Just(CycleMode::Endless),
    ]
}

#[test]
fn circular_index_wraps_negative_indexes() {
    assert_eq!(circular_index(-1, 10), Some(9));
    assert_eq!(circular_index(-21, 10), Some(9));
    assert_eq!(circular_index(25, 10), Some(5));
    assert_eq!(circular_index(0, 10), Some(0));
    assert_eq!(circular_index(3, 0), None);
}

#[test]
fn closest_index_takes_the_short_way() {
    assert_eq!(closest_index(97, 5, 10), 95);
    assert_eq!(closest_index(3, 1, 10), 1);
    assert_eq!(closest_index(-12, 9, 10), -11);
    // Exactly half-way resolves forward.
    assert_eq!(closest_index(0, 5, 10), 5);
}

#[test]
fn easings_hit_both_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseOutCubic,
        Easing::EaseOutQuartic,
        Easing::EaseInOut,
    ] {
        assert!((easing.ease(0.0, 10.0, 20.0, 100.0) - 10.0).abs() < 1e-9);
        assert!((easing.ease(100.0, 10.0, 20.0, 100.0) - 30.0).abs() < 1e-9);
        assert!((easing.ease(250.0, 10.0, 20.0, 100.0) - 30.0).abs() < 1e-9);
        assert!((easing.ease(5.0, 10.0, 20.0, 0.0) - 30.0).abs() < 1e-9);
    }
    assert!((ease_out_cubic(50.0, 0.0, 1.0, 100.0) - 0.875).abs() < 1e-9);
    assert!((ease_out_quartic(50.0, 0.0, 1.0, 100.0) - 0.9375).abs() < 1e-9);
    assert!((ease_in_out(50.0, 0.0, 1.0, 100.0) - 0.5).abs() < 1e-9);
}

#[test]
fn velocity_needs_two_samples() {
    let cfg = GestureConfig::default();
    let mut h = MoveHistory::new();
    assert_eq!(h.velocity(&cfg), 0.0);
    h.register_move(Position::new(10.0, 0.0), 0, &cfg);
    assert_eq!(h.velocity(&cfg), 0.0);

    // Same timestamp: no elapsed time, no velocity.
    h.register_move(Position::new(90.0, 0.0), 0, &cfg);
    assert_eq!(h.velocity(&cfg), 0.0);
}

#[test]
fn velocity_is_clamped() {
    let cfg = GestureConfig::default();
    let mut h = MoveHistory::new();
    h.register_move(Position::new(0.0, 0.0), 0, &cfg);
    h.register_move(Position::new(10_000.0, 0.0), 1, &cfg);
    assert_eq!(h.velocity(&cfg), 2.0);

    let mut h = MoveHistory::new();
    h.register_move(Position::new(0.0, 0.0), 0, &cfg);
    h.register_move(Position::new(-80.0, 0.0), 100, &cfg);
    assert!((h.velocity(&cfg) + 0.8).abs() < 1e-9);
}

#[test]
fn move_history_is_bounded_by_count_and_age() {
    let cfg = GestureConfig::default();
    let mut h = MoveHistory::new();
    for i in 0..10u64 {
        h.register_move(Position::new(i as f64, 0.0), i * 10, &cfg);
    }
    assert_eq!(h.len(), cfg.max_samples);
    assert_eq!(h.newest().map(|m| m.ts_ms), Some(90));
    assert_eq!(h.oldest().map(|m| m.ts_ms), Some(50));

    h.register_move(Position::new(0.0, 0.0), 700, &cfg);
    assert_eq!(h.len(), 1);

    // Samples older than the newest one are dropped.
    h.register_move(Position::new(5.0, 0.0), 650, &cfg);
    assert_eq!(h.len(), 1);
    assert_eq!(h.newest().map(|m| m.ts_ms), Some(700));
}

#[test]
fn large_collection_materializes_viewport_plus_overscan() {
    let s = mounted(options(5000, 6.0, CycleMode::Endless).with_overscan(Some(6)));
    let w = s.window();
    assert_eq!(w.start, -6);
    assert_eq!(w.len, 18);
    assert_eq!(w.visible_len(), 6);

    let mut slots = Vec::new();
    s.collect_slots(&mut slots);
    assert_eq!(slots.len(), 18);
    assert_eq!(slots.iter().filter(|slot| slot.is_visible).count(), 6);
    assert_eq!(slots[0].item_index, 4994);
    assert_eq!(slots[0].key, -6);
    assert_eq!(slots[6].item_index, 0);
    assert!(slots[6].is_visible);
    assert!(!slots[5].is_visible);
}

#[test]
fn single_page_renders_every_item_once() {
    let mut s = slider(3, 6.0, CycleMode::Endless);
    let w = s.window();
    assert_eq!((w.start, w.len), (0, 3));
    assert_eq!(w.visible_len(), 3);
    assert!(!s.is_multi_page());
    assert!(!s.controls().left.visible);
    assert!(!s.controls().right.visible);
    assert_eq!(s.pages(), 1);

    assert!(s.slide(Direction::Right));
    assert_eq!(s.index(), 0);
    assert!(!s.is_animating());
}

#[test]
fn stop_mode_clamps_overscan_at_the_edges() {
    let mut s = slider(10, 4.0, CycleMode::Stop);
    let w = s.window();
    assert_eq!((w.start, w.len), (0, 8));
    assert_eq!((w.left_overscan, w.right_overscan), (0, 4));

    s.update_options(|o| o.animated = false);
    s.slide_to_index(6, false);
    let w = s.window();
    assert_eq!((w.start, w.len), (2, 8));
    assert_eq!(w.end(), 10);
}

#[test]
fn sliding_window_keeps_both_viewports_visible() {
    let mut s = slider(100, 4.0, CycleMode::Endless);
    assert!(s.slide(Direction::Right));
    let st = s.state();
    assert!(st.sliding);
    assert_eq!((st.from_index, st.to_index), (0, 4));

    let w = s.window();
    assert_eq!(w.visible_start, 0);
    assert_eq!(w.visible_end, 8);
    assert!(w.is_visible(7));
    assert!(!w.is_visible(8));
}

#[test]
fn stop_mode_left_at_start_is_clamped() {
    let mut s = slider(10, 4.0, CycleMode::Stop);
    assert!(s.controls().left.disabled);

    assert!(s.slide(Direction::Left));
    assert_eq!(s.index(), 0);
    assert!(!s.is_sliding());
    assert!(!s.is_animating());
    assert!(s.controls().left.disabled);
}

#[test]
fn stop_mode_right_edge_disables_right_control() {
    let mut s = slider(10, 4.0, CycleMode::Stop);
    assert!(!s.controls().right.disabled);

    let mut now = 0;
    for _ in 0..3 {
        assert!(s.slide(Direction::Right));
        now = settle(&mut s, now);
    }
    assert_eq!(s.index(), 6);
    assert!(s.controls().right.disabled);
    assert!(!s.controls().left.disabled);
}

#[test]
fn restart_mode_wraps_through_marker_index() {
    let mut s = slider(10, 4.0, CycleMode::Restart);
    s.slide_to_index(6, false);
    let now = settle(&mut s, 0);
    assert_eq!(s.index(), 6);

    assert!(s.slide(Direction::Right));
    assert_eq!(s.state().to_index, 10);
    let now = settle(&mut s, now);
    assert_eq!(s.index(), 0);
    assert_eq!(s.position(), 0.0);

    assert!(s.slide(Direction::Left));
    assert_eq!(s.state().to_index, -4);
    settle(&mut s, now);
    assert_eq!(s.index(), 6);
    assert_eq!(s.position(), -600.0);
}

#[test]
fn restart_mode_clamps_before_wrapping() {
    let mut s = mounted(options(10, 4.0, CycleMode::Restart).with_animated(false));
    s.slide_to_index(4, false);
    assert!(s.slide(Direction::Right));
    assert_eq!(s.index(), 6);
    assert!(s.slide(Direction::Left));
    assert!(s.slide(Direction::Left));
    assert_eq!(s.index(), 0);
}

#[test]
fn slide_to_current_index_is_a_noop() {
    let (starts, starts_cb) = counter();
    let (changes, changes_cb) = counter();
    let mut s = mounted(
        options(20, 4.0, CycleMode::Endless)
            .with_on_slide_start(Some(move |_| {
                starts_cb.fetch_add(1, Ordering::Relaxed);
            }))
            .with_on_change(Some(move |_: &Slider, _| {
                changes_cb.fetch_add(1, Ordering::Relaxed);
            })),
    );
    let before = changes.load(Ordering::Relaxed);

    s.slide_to_index(0, false);
    s.slide_to_index(0, true);
    assert!(!s.is_animating());
    assert!(!s.is_sliding());
    assert_eq!(starts.load(Ordering::Relaxed), 0);
    assert_eq!(changes.load(Ordering::Relaxed), before);
}

#[test]
fn endless_slide_to_index_closest_goes_the_short_way() {
    let mut s = mounted(options(10, 2.0, CycleMode::Endless).with_animated(false));
    s.slide_to_index(97, false);
    assert_eq!(s.index(), 97);

    s.slide_to_index(5, true);
    assert_eq!(s.index(), 95);
    assert_eq!(s.item_index(), 5);
}

#[test]
fn out_of_range_targets_are_mapped_in_bounded_modes() {
    let mut s = mounted(options(10, 4.0, CycleMode::Stop).with_animated(false));
    s.slide_to_index(-1, false);
    assert_eq!(s.index(), 6);
    s.slide_to_index(12, false);
    assert_eq!(s.index(), 2);
    s.slide_to_index(1_000_003, false);
    assert_eq!(s.index(), 3);
}

#[test]
fn slide_to_page_resolves_through_step_count() {
    let mut s = mounted(options(10, 4.0, CycleMode::Endless).with_animated(false));
    assert_eq!(s.pages(), 3);

    s.slide_to_page(2);
    assert_eq!(s.item_index(), 8);
    assert_eq!(s.page(), 2);
    assert_eq!(s.slide_info().pages, 3);

    let mut s = mounted(options(10, 4.0, CycleMode::Stop).with_animated(false));
    s.slide_to_page(2);
    assert_eq!(s.index(), 6);
    assert_eq!(s.page(), 1);
}

#[test]
fn unanimated_slides_commit_synchronously() {
    let (ends, ends_cb) = counter();
    let (changes, changes_cb) = counter();
    let mut s = mounted(
        options(20, 6.0, CycleMode::Endless)
            .with_animated(false)
            .with_on_slide_end(Some(move |_| {
                ends_cb.fetch_add(1, Ordering::Relaxed);
            }))
            .with_on_change(Some(move |_: &Slider, _| {
                changes_cb.fetch_add(1, Ordering::Relaxed);
            })),
    );
    let before = changes.load(Ordering::Relaxed);

    assert!(s.slide(Direction::Right));
    assert_eq!(s.index(), 6);
    assert!(!s.is_sliding());
    assert_eq!(s.frame_handle(), None);
    assert_eq!(s.position(), -600.0);
    assert!(s.state().has_slide_before);
    assert_eq!(ends.load(Ordering::Relaxed), 1);
    assert_eq!(changes.load(Ordering::Relaxed), before + 1);
}

#[test]
fn slide_callbacks_report_pre_and_post_state() {
    let log = Arc::new(Mutex::new(Vec::<(&'static str, SlideInfo)>::new()));
    let start_log = Arc::clone(&log);
    let end_log = Arc::clone(&log);
    let mut s = mounted(
        options(20, 6.0, CycleMode::Endless)
            .with_on_slide_start(Some(move |info| {
                start_log.lock().unwrap().push(("start", info));
            }))
            .with_on_slide_end(Some(move |info| {
                end_log.lock().unwrap().push(("end", info));
            })),
    );

    assert!(s.slide(Direction::Right));
    settle(&mut s, 0);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].0, "start");
    assert_eq!(log[0].1.index, 0);
    assert_eq!(log[1].0, "end");
    assert_eq!(
        log[1].1,
        SlideInfo {
            index: 6,
            item_index: 6,
            total: 20,
            page: 1,
            pages: 4,
        }
    );
}

#[test]
fn throttled_slides_are_refused_while_sliding() {
    let mut s = mounted(options(20, 4.0, CycleMode::Endless).with_throttle_on_transition(true));
    assert!(s.slide(Direction::Right));
    assert!(!s.slide(Direction::Right));
    let now = settle(&mut s, 0);
    assert_eq!(s.index(), 4);

    assert!(s.slide(Direction::Right));
    settle(&mut s, now);
    assert_eq!(s.index(), 8);
}

#[test]
fn consecutive_slides_accumulate_on_the_target() {
    let mut s = slider(20, 4.0, CycleMode::Endless);
    assert!(s.slide(Direction::Right));
    s.tick(0);
    assert!(s.slide(Direction::Right));
    assert_eq!(s.state().to_index, 8);
    settle(&mut s, 16);
    assert_eq!(s.index(), 8);
}

#[test]
fn snap_updates_index_when_nearest_tile_changes() {
    let mut s = slider(20, 6.0, CycleMode::Endless);
    assert!(s.slide(Direction::Right));
    assert_eq!(s.tick(0), Some(0.0));
    assert_eq!(s.index(), 0);

    // Cubic ease-out at t = 0.5 covers 87.5% of the distance.
    let pos = s.tick(250).unwrap();
    assert!((pos + 525.0).abs() < 1e-9);
    assert_eq!(s.index(), 5);
    assert!(s.is_sliding());

    assert_eq!(s.tick(500), Some(-600.0));
    assert_eq!(s.index(), 6);
    assert!(!s.is_animating());
    assert!(!s.is_sliding());
}

#[test]
fn stale_frame_handles_are_ignored() {
    let mut s = slider(20, 4.0, CycleMode::Endless);
    assert!(s.slide(Direction::Right));
    let first = s.frame_handle().unwrap();
    assert!(s.on_frame(first, 0).is_some());

    assert!(s.slide(Direction::Right));
    let second = s.frame_handle().unwrap();
    assert_ne!(first, second);

    let before = s.position();
    assert_eq!(s.on_frame(first, 16), None);
    assert_eq!(s.position(), before);
    assert!(s.on_frame(second, 16).is_some());

    s.cancel_motion();
    assert_eq!(s.on_frame(second, 32), None);
    assert_eq!(s.tick(48), None);
}

#[test]
fn touch_interrupts_running_motion() {
    let mut s = slider(20, 6.0, CycleMode::Endless);
    assert!(s.slide(Direction::Right));
    let handle = s.frame_handle().unwrap();
    s.tick(0);
    s.tick(250);
    assert_eq!(s.index(), 5);

    s.touch_start(Position::new(300.0, 100.0), 260);
    assert!(!s.is_animating());
    assert!(s.is_dragging());
    assert_eq!(s.index(), 5);
    assert_eq!(s.on_frame(handle, 276), None);

    // A tap snaps to the rendered index.
    s.touch_end(Position::new(300.0, 100.0), 280);
    assert!(!s.is_dragging());
    settle(&mut s, 296);
    assert_eq!(s.index(), 5);
    assert_eq!(s.position(), -500.0);
}

#[test]
fn gentle_swipe_snaps_one_tile_in_its_direction() {
    let (swipes, swipes_cb) = counter();
    let (swipe_ends, swipe_ends_cb) = counter();
    let (ends, ends_cb) = counter();
    let mut s = mounted(
        options(20, 4.0, CycleMode::Endless)
            .with_on_swipe_start(Some(move || {
                swipes_cb.fetch_add(1, Ordering::Relaxed);
            }))
            .with_on_swipe_end(Some(move || {
                swipe_ends_cb.fetch_add(1, Ordering::Relaxed);
            }))
            .with_on_slide_end(Some(move |_| {
                ends_cb.fetch_add(1, Ordering::Relaxed);
            })),
    );

    s.touch_start(Position::new(200.0, 50.0), 1000);
    assert!(s.is_sliding());
    assert_eq!(
        s.touch_move(Position::new(280.0, 50.0), 1100),
        DragAxis::Horizontal
    );
    assert_eq!(s.position(), 80.0);
    assert_eq!(s.index(), 0);

    // 80px in 100ms is 12.8 px/frame: past "negligible", below "swipe".
    s.touch_end(Position::new(280.0, 50.0), 1100);
    assert!(s.is_animating());
    settle(&mut s, 1116);

    assert_eq!(s.index(), -1);
    assert_eq!(s.item_index(), 19);
    assert_eq!(s.position(), 100.0);
    assert_eq!(swipes.load(Ordering::Relaxed), 1);
    assert_eq!(swipe_ends.load(Ordering::Relaxed), 1);
    assert_eq!(ends.load(Ordering::Relaxed), 1);
}

#[test]
fn gentle_swipe_left_advances_one_tile() {
    let mut s = slider(20, 4.0, CycleMode::Endless);
    s.touch_start(Position::new(200.0, 50.0), 0);
    s.touch_move(Position::new(120.0, 50.0), 100);
    s.touch_end(Position::new(120.0, 50.0), 100);
    settle(&mut s, 116);
    assert_eq!(s.index(), 1);
}

#[test]
fn fast_fling_glides_and_settles_on_a_tile() {
    let mut s = slider(50, 4.0, CycleMode::Endless);
    s.touch_start(Position::new(500.0, 0.0), 0);
    for (i, x) in [400.0, 300.0, 200.0, 100.0].into_iter().enumerate() {
        let now = (i as u64 + 1) * 20;
        assert_eq!(s.touch_move(Position::new(x, 0.0), now), DragAxis::Horizontal);
    }
    assert_eq!(s.position(), -400.0);
    s.touch_end(Position::new(100.0, 0.0), 80);
    assert!(s.is_animating());

    settle(&mut s, 96);
    assert!(s.index() >= 4, "index {}", s.index());
    assert_eq!(s.position(), -(s.index() as f64) * TILE_WIDTH);
    assert!(!s.is_sliding());
}

#[test]
fn fling_in_stop_mode_stops_at_the_edge() {
    let mut s = slider(10, 4.0, CycleMode::Stop);
    s.touch_start(Position::new(500.0, 0.0), 0);
    for (i, x) in [400.0, 300.0, 200.0, 100.0].into_iter().enumerate() {
        s.touch_move(Position::new(x, 0.0), (i as u64 + 1) * 20);
    }
    s.touch_end(Position::new(100.0, 0.0), 80);
    settle(&mut s, 96);

    assert_eq!(s.index(), 6);
    assert_eq!(s.position(), -600.0);
    assert!(s.controls().right.disabled);
}

#[test]
fn drag_past_a_bounded_edge_is_limited_to_overshoot() {
    let mut s = slider(10, 4.0, CycleMode::Stop);
    s.touch_start(Position::new(0.0, 0.0), 0);
    assert_eq!(
        s.touch_move(Position::new(300.0, 0.0), 16),
        DragAxis::Horizontal
    );
    assert_eq!(s.position(), 50.0);

    s.touch_cancel(32);
    settle(&mut s, 48);
    assert_eq!(s.index(), 0);
    assert_eq!(s.position(), 0.0);
}

#[test]
fn vertical_gesture_is_cancelled() {
    let (swipe_ends, swipe_ends_cb) = counter();
    let mut s = mounted(
        options(20, 4.0, CycleMode::Endless).with_on_swipe_end(Some(move || {
            swipe_ends_cb.fetch_add(1, Ordering::Relaxed);
        })),
    );
    s.touch_start(Position::new(100.0, 100.0), 0);
    assert_eq!(
        s.touch_move(Position::new(105.0, 160.0), 16),
        DragAxis::Vertical
    );
    // Later horizontal movement can't take the gesture back.
    assert_eq!(
        s.touch_move(Position::new(300.0, 170.0), 32),
        DragAxis::Vertical
    );
    assert_eq!(s.position(), 0.0);

    s.touch_end(Position::new(300.0, 170.0), 48);
    assert!(!s.is_animating());
    assert!(!s.is_sliding());
    assert_eq!(s.index(), 0);
    assert_eq!(swipe_ends.load(Ordering::Relaxed), 1);
}

#[test]
fn short_drag_below_threshold_snaps_back() {
    let mut s = slider(20, 4.0, CycleMode::Endless);
    s.touch_start(Position::new(100.0, 0.0), 0);
    assert_eq!(
        s.touch_move(Position::new(92.0, 0.0), 8),
        DragAxis::Horizontal
    );
    s.touch_end(Position::new(92.0, 0.0), 16);
    settle(&mut s, 32);
    assert_eq!(s.index(), 0);
    assert_eq!(s.position(), 0.0);
}

#[test]
fn resize_settles_running_motion() {
    let mut s = slider(20, 6.0, CycleMode::Endless);
    assert!(s.slide(Direction::Right));
    s.tick(0);
    s.tick(100);

    s.set_viewport_width(1200.0);
    assert!(!s.is_animating());
    assert_eq!(s.index(), 6);
    assert_eq!(s.tile_width(), 200.0);
    assert_eq!(s.position(), -1200.0);
}

#[test]
fn resize_at_rest_rescales_position() {
    let mut s = mounted(options(20, 4.0, CycleMode::Endless).with_animated(false));
    s.slide(Direction::Right);
    assert_eq!(s.position(), -400.0);
    s.set_viewport_width(800.0);
    assert_eq!(s.position(), -800.0);
}

#[test]
fn shrinking_collection_reclamps_stop_index() {
    let mut s = mounted(options(10, 4.0, CycleMode::Stop).with_animated(false));
    s.slide_to_index(6, false);
    assert_eq!(s.index(), 6);

    s.set_count(8);
    assert_eq!(s.index(), 4);
    assert_eq!(s.position(), -400.0);
    assert!(s.controls().right.disabled);
}

#[test]
fn controls_are_hidden_or_disabled() {
    let mut s = mounted(options(20, 4.0, CycleMode::Endless).with_animated(false));
    let c = s.controls();
    assert!(c.left.visible && c.right.visible);
    assert!(c.left.disabled, "left starts disabled until a slide happened");
    assert!(!c.right.disabled);

    s.slide(Direction::Right);
    assert!(!s.controls().left.disabled);

    s.update_options(|o| o.show_controls = false);
    assert!(!s.controls().left.visible);
    assert!(!s.controls().right.visible);
}

#[test]
fn fractional_tiles_reveal_a_partial_slot() {
    let mut s = mounted(options(20, 4.5, CycleMode::Endless).with_animated(false));
    assert_eq!(s.tile_width(), 100.0);
    assert_eq!(s.options().whole_tiles(), 4);
    assert_eq!(s.options().viewport_slots(), 5);

    let w = s.window();
    assert_eq!((w.start, w.len), (-4, 13));
    assert_eq!(w.visible_len(), 5);

    s.slide(Direction::Right);
    assert_eq!(s.index(), 4);
    assert_eq!(s.pages(), 5);
}

#[test]
fn tile_metrics_follow_spacing() {
    let s = mounted(options(20, 4.0, CycleMode::Endless).with_spacing(12));
    let m = s.tile_metrics();
    assert_eq!(m.width, 100.0);
    assert_eq!(m.padding, 6.0);
    assert_eq!(m.list_margin, -6.0);
    assert_eq!(s.slot_offset(3), 300.0);
    assert_eq!(s.slot_offset(-2), -200.0);
}

#[test]
fn page_step_variants() {
    let mut s = mounted(
        options(20, 4.0, CycleMode::Endless)
            .with_animated(false)
            .with_page_step(PageStep::Tile),
    );
    s.slide(Direction::Right);
    assert_eq!(s.index(), 1);

    s.update_options(|o| o.page_step = PageStep::Count(3));
    s.slide(Direction::Left);
    assert_eq!(s.index(), -2);
    assert_eq!(s.item_index(), 18);
}

#[test]
fn unusable_configurations_degrade_to_nothing() {
    let mut s = Slider::new(SliderOptions::new(0));
    s.set_viewport_width(600.0);
    assert_eq!(s.config_error(), Some(ConfigError::EmptyCollection));
    assert!(s.window().is_empty());
    assert!(!s.controls().left.visible);
    assert!(s.slide(Direction::Right));
    s.touch_start(Position::new(0.0, 0.0), 0);
    assert!(!s.is_dragging());
    assert_eq!(s.pages(), 0);

    assert!(matches!(
        Slider::try_new(SliderOptions::new(10).with_tiles_to_show(0.5)),
        Err(ConfigError::InvalidTilesToShow(_))
    ));
    assert!(matches!(
        Slider::try_new(SliderOptions::new(10).with_page_step(PageStep::Count(0))),
        Err(ConfigError::ZeroPageStep)
    ));
    assert!(Slider::try_new(SliderOptions::new(10)).is_ok());

    // Fixing the options brings the slider back.
    s.set_count(10);
    assert_eq!(s.config_error(), None);
    assert_eq!(s.window().visible_len(), 6);
}

#[test]
fn zero_viewport_width_commits_without_motion() {
    let mut s = Slider::new(options(20, 4.0, CycleMode::Endless));
    assert!(s.slide(Direction::Right));
    assert!(!s.is_animating());
    assert_eq!(s.index(), 4);
    assert_eq!(s.position(), 0.0);
}

#[test]
fn batch_update_coalesces_notifications() {
    let (changes, changes_cb) = counter();
    let mut s = mounted(
        options(20, 4.0, CycleMode::Endless)
            .with_animated(false)
            .with_on_change(Some(move |_: &Slider, _| {
                changes_cb.fetch_add(1, Ordering::Relaxed);
            })),
    );
    let before = changes.load(Ordering::Relaxed);
    s.batch_update(|s| {
        s.slide(Direction::Right);
        s.slide(Direction::Right);
        s.set_viewport_width(800.0);
    });
    assert_eq!(changes.load(Ordering::Relaxed), before + 1);
    assert_eq!(s.index(), 8);
}

#[test]
fn closest_index_survives_far_apart_indexes() {
    assert_eq!(closest_index(-4, i64::MAX, 20), -13);
    assert_eq!(closest_index(i64::MIN + 100, i64::MAX, 20), i64::MIN + 95);
    assert_eq!(closest_index(i64::MAX - 100, 0, 10), i64::MAX - 97);
    assert_eq!(closest_index(0, i64::MIN, 20), -8);
}

#[test]
fn slide_to_huge_page_wraps_instead_of_overflowing() {
    let mut s = mounted(options(20, 4.0, CycleMode::Endless).with_animated(false));
    s.slide(Direction::Left);
    assert_eq!(s.index(), -4);

    s.slide_to_page(usize::MAX);
    let expected = ((usize::MAX as u128 % 20) * 4 % 20) as usize;
    assert_eq!(s.item_index(), expected);
    assert!((s.index() + 4).abs() <= 10, "index {}", s.index());
}

#[test]
fn endless_extreme_indexes_are_rebased() {
    let mut s = mounted(options(20, 4.0, CycleMode::Endless).with_animated(false));
    s.slide_to_index(i64::MAX, false);
    assert_eq!(s.index(), 7);
    assert_eq!(s.item_index(), 7);

    let w = s.window();
    assert_eq!(w.len, 12);
    assert_eq!(w.visible_len(), 4);
    let mut slots = Vec::new();
    s.collect_slots(&mut slots);
    assert_eq!(slots.len(), 12);

    s.slide_to_index(i64::MIN, false);
    assert_eq!(s.item_index(), circular_index(i64::MIN, 20).unwrap());
    assert!(s.slide(Direction::Right));

    // Indexes below the limit are kept as they are.
    s.slide_to_index(1_000_000_007, false);
    assert_eq!(s.index(), 1_000_000_007);
    assert!(s.slide(Direction::Right));
    assert_eq!(s.index(), 1_000_000_011);
}

#[test]
fn window_bounds_saturate_at_the_index_range() {
    let w = compute_window(&WindowParams {
        count: 20,
        tiles: 4,
        viewport_slots: 4,
        overscan: 4,
        cycle_mode: CycleMode::Endless,
        index: i64::MAX,
        from_index: i64::MAX,
        to_index: i64::MAX,
        sliding: false,
    });
    assert_eq!(w.start, i64::MAX - 4);
    assert_eq!(w.end(), i64::MAX);
    assert_eq!(w.visible_end, i64::MAX);
    assert_eq!(w.visible_len(), 0);
}

#[test]
fn restart_drag_from_short_step_rest_index_is_continuous() {
    let mut s = mounted(
        options(10, 4.0, CycleMode::Restart)
            .with_animated(false)
            .with_page_step(PageStep::Count(3)),
    );
    for _ in 0..3 {
        assert!(s.slide(Direction::Right));
    }
    assert_eq!(s.index(), 7);
    assert_eq!(s.position(), -700.0);

    s.touch_start(Position::new(500.0, 0.0), 0);
    assert_eq!(
        s.touch_move(Position::new(498.0, 0.0), 16),
        DragAxis::Horizontal
    );
    assert_eq!(s.position(), -702.0);
    s.touch_move(Position::new(300.0, 0.0), 32);
    assert_eq!(s.position(), -750.0);

    s.touch_cancel(48);
    assert_eq!(s.index(), 7);
    assert_eq!(s.position(), -700.0);

    s.slide_to_index(0, false);
    s.slide_to_index(7, false);
    assert_eq!(s.index(), 7);
    s.slide_to_index(9, false);
    assert_eq!(s.index(), 7);
}

#[test]
fn gentle_swipe_moves_one_tile_after_a_long_drag() {
    let mut s = slider(20, 4.0, CycleMode::Endless);
    s.touch_start(Position::new(500.0, 0.0), 0);
    s.touch_move(Position::new(250.0, 0.0), 400);
    assert_eq!(s.position(), -250.0);

    // 250px in 400ms is 10 px/frame.
    s.touch_end(Position::new(250.0, 0.0), 400);
    settle(&mut s, 416);
    assert_eq!(s.index(), 1);
    assert_eq!(s.position(), -100.0);
}

#[test]
fn snapping_back_does_not_enable_the_left_control() {
    let mut s = slider(20, 4.0, CycleMode::Endless);
    assert!(s.controls().left.disabled);

    // Tap.
    s.touch_start(Position::new(200.0, 0.0), 0);
    s.touch_end(Position::new(200.0, 0.0), 16);
    settle(&mut s, 32);
    assert!(!s.state().has_slide_before);

    // Vertical scroll.
    s.touch_start(Position::new(200.0, 0.0), 100);
    s.touch_move(Position::new(202.0, 80.0), 116);
    s.touch_end(Position::new(202.0, 80.0), 132);
    settle(&mut s, 148);
    assert!(!s.state().has_slide_before);

    // Horizontal drag released back where it started.
    s.touch_start(Position::new(200.0, 0.0), 1000);
    s.touch_move(Position::new(230.0, 0.0), 1016);
    s.touch_move(Position::new(200.0, 0.0), 2000);
    s.touch_end(Position::new(200.0, 0.0), 2000);
    settle(&mut s, 2016);
    assert_eq!(s.index(), 0);
    assert!(!s.state().has_slide_before);
    assert!(s.controls().left.disabled);

    assert!(s.slide(Direction::Right));
    settle(&mut s, 3000);
    assert!(s.state().has_slide_before);
    assert!(!s.controls().left.disabled);
}

proptest! {
    #[test]
    fn circular_index_is_always_in_range(i in any::<i64>(), len in 1usize..100_000) {
        let wrapped = circular_index(i, len);
        prop_assert!(matches!(wrapped, Some(x) if x < len));
    }

    #[test]
    fn closest_index_is_equivalent_and_near(
        current in -1_000_000i64..1_000_000,
        target in -1_000_000i64..1_000_000,
        len in 1usize..1000,
    ) {
        let resolved = closest_index(current, target, len);
        prop_assert_eq!(circular_index(resolved, len), circular_index(target, len));
        prop_assert!((resolved - current).unsigned_abs() as usize <= len / 2);
    }

    #[test]
    fn closest_index_never_overflows(
        current in -(1i64 << 60)..(1i64 << 60),
        target in any::<i64>(),
        len in 1usize..100_000,
    ) {
        let resolved = closest_index(current, target, len);
        prop_assert_eq!(circular_index(resolved, len), circular_index(target, len));
        prop_assert!(resolved.abs_diff(current) as usize <= len / 2);
    }

    #[test]
    fn two_sample_velocity_is_bounded(
        x0 in -1.0e6f64..1.0e6,
        x1 in -1.0e6f64..1.0e6,
        dt in 1u64..400,
    ) {
        let cfg = GestureConfig::default();
        let mut h = MoveHistory::new();
        h.register_move(Position::new(x0, 0.0), 1000, &cfg);
        prop_assert_eq!(h.velocity(&cfg), 0.0);
        h.register_move(Position::new(x1, 0.0), 1000 + dt, &cfg);
        prop_assert!(h.velocity(&cfg).abs() <= cfg.velocity_clamp);
    }

    #[test]
    fn window_len_is_bounded(
        count in 1usize..5000,
        tiles in 1usize..12,
        overscan in 0usize..12,
        raw_index in -10_000i64..10_000,
        cycle_mode in mode(),
    ) {
        prop_assume!(count > tiles);
        let index = if cycle_mode == CycleMode::Stop {
            raw_index.rem_euclid((count - tiles) as i64 + 1)
        } else {
            raw_index
        };
        let w = compute_window(&WindowParams {
            count,
            tiles,
            viewport_slots: tiles,
            overscan,
            cycle_mode,
            index,
            from_index: index,
            to_index: index,
            sliding: false,
        });
        prop_assert!(w.len >= tiles);
        prop_assert!(w.len <= tiles + 2 * overscan);
        prop_assert_eq!(w.visible_len(), tiles);
        if cycle_mode == CycleMode::Stop {
            prop_assert!(w.start >= 0);
            prop_assert!(w.end() <= count as i64);
        }
    }

    #[test]
    fn stop_mode_rests_within_reachable_range(
        count in 2usize..200,
        tiles in 1usize..8,
        ops in prop::collection::vec((0u8..3, -1000i64..1000), 0..40),
    ) {
        prop_assume!(count > tiles);
        let mut s = mounted(options(count, tiles as f64, CycleMode::Stop).with_animated(false));
        let max = (count - tiles) as i64;
        for (op, arg) in ops {
            match op {
                0 => { s.slide(Direction::Left); }
                1 => { s.slide(Direction::Right); }
                _ => s.slide_to_index(arg, arg % 2 == 0),
            }
            prop_assert!(!s.is_sliding());
            prop_assert!((0..=max).contains(&s.index()), "index {}", s.index());
            prop_assert!(s.page() < s.pages());
        }
    }

    #[test]
    fn restart_mode_never_drifts(
        count in 2usize..200,
        tiles in 1usize..8,
        step in 1usize..8,
        ops in prop::collection::vec(any::<bool>(), 0..60),
    ) {
        prop_assume!(count > tiles && step <= tiles);
        let mut s = mounted(
            options(count, tiles as f64, CycleMode::Restart)
                .with_animated(false)
                .with_page_step(PageStep::Count(step)),
        );
        let max = (count - step) as i64;
        for right in ops {
            s.slide(if right { Direction::Right } else { Direction::Left });
            prop_assert!((0..=max).contains(&s.index()), "index {}", s.index());
        }
    }

    #[test]
    fn endless_slides_accumulate_whole_steps(
        count in 2usize..200,
        tiles in 1usize..8,
        k in 0usize..30,
    ) {
        prop_assume!(count > tiles);
        let mut s = mounted(options(count, tiles as f64, CycleMode::Endless).with_animated(false));
        for _ in 0..k {
            prop_assert!(s.slide(Direction::Right));
        }
        prop_assert_eq!(s.index(), (k * tiles) as i64);
        prop_assert_eq!(s.item_index(), (k * tiles) % count);
    }
}
