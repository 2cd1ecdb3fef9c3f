// Example: a simulated host driving one picker engine frame by frame.
//
// Run with `RUST_LOG=wheel_picker=trace cargo run --example engine_sim --features tracing`
// to see the engine's own events.
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use wheel_picker::{Constraints, PickerEngine, PickerOptions};

const ITEMS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reported = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reported);
    let options = PickerOptions::vertical(ITEMS.len())
        .with_visible_count(3)
        .with_on_select(move |index| {
            if let Ok(mut reported) = sink.lock() {
                reported.push(index);
            }
        })
        .with_on_external_scroll(|in_progress| println!("external scroll: {in_progress}"));

    let mut engine = match PickerEngine::new(options) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid picker: {err}");
            return;
        }
    };
    engine.layout(Constraints::fixed(120, 120));

    let mut selected = 0usize;
    let mut now_ms = 0u64;
    engine.set_selected_index(Some(selected));

    // The host jumps to "F"; the engine animates there without reporting back.
    selected = 5;
    engine.set_selected_index(Some(selected));
    now_ms = run_frames(&mut engine, &reported, &mut selected, now_ms);
    println!(
        "after host change: selected={} ({}), position={:?}",
        selected,
        ITEMS[selected],
        engine.scroll_position()
    );

    // The user drags upwards quickly and lets go.
    engine.drag_start();
    for step in 0..6 {
        engine.drag(now_ms + step * 8, -14.0);
        sync(&mut engine, &reported, &mut selected);
    }
    now_ms += 48;
    let target = engine.drag_end();
    println!("fling target: {target:?}");
    run_frames(&mut engine, &reported, &mut selected, now_ms);
    println!(
        "after fling: selected={} ({}), position={:?}",
        selected,
        ITEMS[selected],
        engine.scroll_position()
    );
}

/// Feeds reported selections back into the engine, the way a host re-renders.
fn sync(engine: &mut PickerEngine, reported: &Mutex<Vec<usize>>, selected: &mut usize) {
    let pending = match reported.lock() {
        Ok(mut reported) => std::mem::take(&mut *reported),
        Err(_) => return,
    };
    for index in pending {
        println!("user selected {} ({})", index, ITEMS[index]);
        *selected = index;
        engine.set_selected_index(Some(index));
    }
}

fn run_frames(
    engine: &mut PickerEngine,
    reported: &Mutex<Vec<usize>>,
    selected: &mut usize,
    mut now_ms: u64,
) -> u64 {
    loop {
        // Simulate a 60fps "tick".
        let animating = engine.tick(now_ms);
        sync(engine, reported, selected);
        if !animating {
            return now_ms;
        }
        now_ms += 16;
    }
}
