// Example: minimal usage, windowing and a programmatic slide.
use tile_slider::{CycleMode, Direction, Slider, SliderOptions};

fn main() {
    let mut s = Slider::new(
        SliderOptions::new(5_000)
            .with_tiles_to_show(6.0)
            .with_cycle_mode(CycleMode::Endless)
            .with_overscan(Some(6)),
    );
    s.set_viewport_width(1200.0);

    let mut slots = Vec::new();
    s.collect_slots(&mut slots);
    println!("tile_metrics={:?}", s.tile_metrics());
    println!("window={:?}", s.window());
    println!(
        "materialized={} visible={} first={:?}",
        slots.len(),
        slots.iter().filter(|slot| slot.is_visible).count(),
        slots.first()
    );

    // Slide one page left from 0: the endless slider wraps to the end of the collection.
    s.slide(Direction::Left);
    let mut now_ms = 0u64;
    while let Some(position) = s.tick(now_ms) {
        if now_ms.is_multiple_of(160) {
            println!("t={now_ms} position={position:.1} index={}", s.index());
        }
        now_ms += 16;
    }
    println!("settled: {:?} info={:?}", s.state(), s.slide_info());

    s.slide_to_index(42, true);
    while s.tick(now_ms).is_some() {
        now_ms += 16;
    }
    println!("slide_to_index(42, closest): index={} item={}", s.index(), s.item_index());
}
