// tests/test_scenarios.rs
use std::time::Duration;

use workout_core::{RoundTo, Running, Swimming, Training, Walking};

#[test]
fn swimming_scenario() {
    // 50 m basseng x 5, 90 min, 85 kg
    let s = Swimming::new(0, Duration::from_secs(90 * 60), 85.0, 50, 5);
    let speed = s.mean_speed();
    assert!((speed - 0.25 / 1.5).abs() < 1e-12);

    let expected = (speed + 1.1) * 2.0 * 85.0 * 1.5;
    assert_eq!(s.calories(), expected);
    assert_eq!(s.calories().round_to(2), 323.00);
}

#[test]
fn walking_scenario() {
    // 20000 skritt, 3t45m, 85 kg, 185 cm
    let w = Walking::new(20000, Duration::from_secs(3 * 3600 + 45 * 60), 85.0, 185.0);
    assert!((w.distance() - 13.0).abs() < 1e-9);

    let speed = w.mean_speed();
    assert!((speed - 13.0 / 3.75).abs() < 1e-9);

    let v = speed * 0.278;
    let expected = (0.035 * 85.0 + (v.powi(2) / 185.0) * 0.029 * 85.0) * 3.75 * 60.0;
    assert!((w.calories() - expected).abs() < 1e-9);
    assert_eq!(w.calories().round_to(2), 672.16);
}

#[test]
fn running_scenario() {
    // 5000 skritt, 30 min, 85 kg
    let r = Running::new(5000, Duration::from_secs(30 * 60), 85.0);
    assert!((r.distance() - 3.25).abs() < 1e-12);
    assert!((r.mean_speed() - 6.5).abs() < 1e-12);

    let expected = (18.0 * 6.5 + 1.79) * 85.0 / 1000.0 * 0.5 * 60.0;
    assert!((r.calories() - expected).abs() < 1e-9);
    assert_eq!(r.calories().round_to(2), 302.91);
}
