// core/src/metrics.rs
// Prosess-globale tellere (prometheus). Påvirker aldri resultatene.
use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::Result;
use crate::models::ActivityKind;

struct Metrics {
    registry: Registry,
    summaries: IntCounterVec,
    zero_guards: IntCounterVec,
}

impl Metrics {
    fn new() -> Self {
        let registry = Registry::new();

        let summaries = IntCounterVec::new(
            Opts::new("workout_summaries_total", "Computed workout summaries per activity"),
            &["activity"],
        )
        .expect("static metric definition");
        let zero_guards = IntCounterVec::new(
            Opts::new("workout_zero_guard_total", "Divisions replaced by 0 per guard"),
            &["guard"],
        )
        .expect("static metric definition");

        registry
            .register(Box::new(summaries.clone()))
            .expect("fresh registry");
        registry
            .register(Box::new(zero_guards.clone()))
            .expect("fresh registry");

        Self { registry, summaries, zero_guards }
    }
}

static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

pub fn registry() -> &'static Registry {
    &METRICS.registry
}

pub fn summaries_total(kind: ActivityKind) -> IntCounter {
    METRICS.summaries.with_label_values(&[kind.as_str()])
}

/// `guard` er "duration" eller "height".
pub fn zero_guard_total(guard: &str) -> IntCounter {
    METRICS.zero_guards.with_label_values(&[guard])
}

/// Tekstformat (prometheus exposition) for hele registeret.
pub fn gather_text() -> Result<String> {
    let families = METRICS.registry.gather();
    Ok(TextEncoder::new().encode_to_string(&families)?)
}
