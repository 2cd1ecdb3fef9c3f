// Example: a value picker and a double picker driven by a simulated host.
//
// Run with `RUST_LOG=wheel_picker=debug cargo run --example picker_demo --features tracing`.
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use wheel_picker::{Constraints, PickerOptions};
use wheel_picker_widgets::{DoublePicker, Picker, ValuePicker};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let numbers: Vec<u32> = (0..26).collect();
    let reported = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&reported);
    let mut picker = match ValuePicker::with_display_labels(
        numbers,
        PickerOptions::vertical(0).with_visible_count(5),
    ) {
        Ok(picker) => picker.with_on_value_change(move |value: &u32| {
            if let Ok(mut reported) = sink.lock() {
                *reported = Some(*value);
            }
        }),
        Err(err) => {
            eprintln!("invalid picker: {err}");
            return;
        }
    };
    picker.picker_mut().layout(Constraints::fixed(160, 200));

    // Host state: the value lives outside the picker.
    let mut value = 3u32;
    picker.set_selected_value(Some(&value));
    let mut now_ms = run(picker.picker_mut(), 0);
    print_items("initial", picker.picker());

    // A button in the host bumps the value; the picker animates without reporting back.
    value = 12;
    picker.set_selected_value(Some(&value));
    now_ms = run(picker.picker_mut(), now_ms);
    print_items("host set 12", picker.picker());

    // The user flings towards higher values.
    let target = picker.picker_mut().engine_mut().fling(2400.0);
    println!("fling target index: {target:?}");
    loop {
        let animating = picker.picker_mut().tick(now_ms);
        let pending = reported.lock().ok().and_then(|mut r| r.take());
        if let Some(new_value) = pending {
            value = new_value;
            picker.set_selected_value(Some(&value));
        }
        if !animating {
            break;
        }
        now_ms += 16;
    }
    println!("value after fling: {value}");
    print_items("after fling", picker.picker());

    let hours: Vec<u32> = (0..24).collect();
    let minutes: Vec<u32> = (0..60).collect();
    let mut clock = match DoublePicker::vertical(hours, minutes) {
        Ok(clock) => clock,
        Err(err) => {
            eprintln!("invalid picker: {err}");
            return;
        }
    };
    clock.layout(Constraints::fixed(240, 120));
    clock.set_selected_indices(Some(0), Some(0));
    clock.set_selected_indices(Some(9), Some(45));
    let mut now_ms = 0;
    while clock.tick(now_ms) {
        now_ms += 16;
    }
    print_items("hours", clock.first());
    print_items("minutes", clock.second());
}

fn run<T>(picker: &mut Picker<T>, mut now_ms: u64) -> u64 {
    // Simulate a 60fps "tick".
    while picker.tick(now_ms) {
        now_ms += 16;
    }
    now_ms
}

fn print_items<T>(title: &str, picker: &Picker<T>) {
    let row: Vec<String> = picker
        .item_data()
        .into_iter()
        .map(|item| {
            if item.selected {
                format!("[{}]", item.label)
            } else {
                item.label
            }
        })
        .collect();
    println!("{title:>12}: {}", row.join(" "));
}
