// Example: a fast touch fling glides, then snaps onto a tile.
//
// Run with `RUST_LOG=tile_slider=trace` to see per-frame motion steps.
use tile_slider::{CycleMode, Position, Slider, SliderOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tile_slider=debug")),
        )
        .init();

    let mut s = Slider::new(
        SliderOptions::new(200)
            .with_tiles_to_show(4.0)
            .with_cycle_mode(CycleMode::Endless)
            .with_on_slide_end(Some(|info| println!("slide end: {info:?}"))),
    );
    s.set_viewport_width(400.0);

    // Swipe left quickly: 400px in 80ms.
    s.touch_start(Position::new(500.0, 10.0), 0);
    for step in 1..=4u64 {
        let x = 500.0 - step as f64 * 100.0;
        let axis = s.touch_move(Position::new(x, 12.0), step * 20);
        println!("move x={x} axis={axis:?} position={}", s.position());
    }
    s.touch_end(Position::new(100.0, 12.0), 80);

    let mut now_ms = 96u64;
    while let Some(position) = s.tick(now_ms) {
        println!("t={now_ms} position={position:.1} index={}", s.index());
        now_ms += 16;
    }
    println!("settled at index={} page={}/{}", s.index(), s.page(), s.pages());
}
