// tests/test_metrics.rs
use std::time::Duration;

use workout_core::metrics::{gather_text, summaries_total, zero_guard_total};
use workout_core::{ActivityKind, Running, Training, Walking};

// Testene deler prosessens register, så vi sjekker bare økning.

#[test]
fn summaries_are_counted_per_activity() {
    let before = summaries_total(ActivityKind::Running).get();
    Running::new(1000, Duration::from_secs(600), 70.0).training_info();
    assert!(summaries_total(ActivityKind::Running).get() >= before + 1);
}

#[test]
fn zero_guards_are_counted() {
    let duration_before = zero_guard_total("duration").get();
    let height_before = zero_guard_total("height").get();

    Running::new(1000, Duration::ZERO, 70.0).mean_speed();
    Walking::new(1000, Duration::from_secs(600), 70.0, 0.0).calories();

    assert!(zero_guard_total("duration").get() > duration_before);
    assert!(zero_guard_total("height").get() > height_before);
}

#[test]
fn exposition_text_contains_counters() {
    Walking::new(1000, Duration::from_secs(600), 70.0, 170.0).training_info();
    Running::new(1000, Duration::ZERO, 70.0).mean_speed();

    let text = gather_text().expect("encode metrics");
    assert!(text.contains("workout_summaries_total"), "{text}");
    assert!(text.contains("activity=\"walking\""), "{text}");
    assert!(text.contains("workout_zero_guard_total"), "{text}");
}

#[test]
fn registry_exposes_both_families() {
    Running::new(500, Duration::from_secs(300), 70.0).training_info();
    Walking::new(500, Duration::from_secs(300), 70.0, 0.0).calories();

    let names: Vec<String> = workout_core::metrics::registry()
        .gather()
        .iter()
        .map(|f| f.get_name().to_string())
        .collect();
    assert!(names.iter().any(|n| n == "workout_summaries_total"), "{names:?}");
    assert!(names.iter().any(|n| n == "workout_zero_guard_total"), "{names:?}");
}
