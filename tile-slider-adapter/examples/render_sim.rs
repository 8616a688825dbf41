use tile_slider::{CycleMode, Direction, SliderOptions};
use tile_slider_adapter::{
    Controller, ControlProps, EventKind, EventSource, PaginationProps, Responsive,
    SliderRenderer, Subscription, TileProps,
};

/// Stands in for a DOM node: prints listener changes.
struct ConsoleSource;

impl EventSource for ConsoleSource {
    fn subscribe(&mut self, kind: EventKind) -> Subscription {
        println!("  + listen {kind:?}");
        Subscription::new(kind, move || println!("  - unlisten {kind:?}"))
    }
}

/// Renders each tile as its label; hidden overscan tiles in brackets.
struct TextRenderer;

impl SliderRenderer<String> for TextRenderer {
    type Node = String;

    fn render_tile(&mut self, props: TileProps<'_, String>) -> String {
        if props.is_visible {
            props.item.clone()
        } else {
            format!("[{}]", props.item)
        }
    }

    fn render_left_control(&mut self, props: ControlProps<'_>) -> Option<String> {
        Some(if props.disabled { "(<)" } else { "<" }.to_string())
    }

    fn render_right_control(&mut self, props: ControlProps<'_>) -> Option<String> {
        Some(if props.disabled { "(>)" } else { ">" }.to_string())
    }

    fn render_pagination(&mut self, props: PaginationProps<'_>) -> Option<String> {
        Some(
            props
                .dots()
                .map(|(_, current)| if current { 'o' } else { '.' })
                .collect(),
        )
    }
}

fn main() {
    // Example: an adapter frame loop. Render callbacks enqueue slide commands through the
    // handle; the controller applies them on the next tick.
    let items: Vec<String> = (1..=24).map(|i| format!("#{i}")).collect();
    let mut source = ConsoleSource;
    let mut c = Controller::new(
        SliderOptions::new(items.len()).with_cycle_mode(CycleMode::Restart),
    )
    .with_responsive_tiles(Responsive::new(1.0, 2.0, 3.0, 4.0, 6.0));

    println!("mount:");
    c.mount(&mut source, 960.0);
    c.on_media_width(900.0);

    let print = |c: &Controller| {
        let view = c.render(&items, &mut TextRenderer);
        let tiles: Vec<&str> = view.tiles.iter().map(|t| t.node.as_str()).collect();
        println!(
            "{} {} {} | {} | position={:.0}",
            view.left_control.unwrap_or_default(),
            tiles.join(" "),
            view.right_control.unwrap_or_default(),
            view.pagination.unwrap_or_default(),
            view.position
        );
    };
    print(&c);

    let handle = c.handle();
    let mut now_ms = 0u64;
    for direction in [Direction::Right, Direction::Right, Direction::Left] {
        handle.slide(direction);
        while c.tick(now_ms).is_some() {
            now_ms += 16;
        }
        print(&c);
    }

    handle.slide_to_page(5);
    while c.tick(now_ms).is_some() {
        now_ms += 16;
    }
    print(&c);

    println!("unmount:");
    c.unmount();
}
