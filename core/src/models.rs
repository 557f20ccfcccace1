use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::constants::{
    LEN_STEP, RUNNING_LABEL, SWIMMING_LABEL, SWIMMING_LEN_STEP, WALKING_LABEL,
};

/// Felles rådata for en treningsøkt.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub training_type: String, // etikett i rapporten
    pub action: u32,           // antall repetisjoner (skritt, svømmetak)
    pub len_step: f64,         // meter per repetisjon
    pub duration: Duration,
    pub weight: f64,           // kg
}

impl Session {
    pub fn new(training_type: impl Into<String>, action: u32, len_step: f64, duration: Duration, weight: f64) -> Self {
        Self {
            training_type: training_type.into(),
            action,
            len_step,
            duration,
            weight,
        }
    }

    /// Varighet i timer (brøk).
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.duration.as_secs_f64() / 3600.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub session: Session,
}

impl Running {
    /// Løpeøkt med standard skrittlengde og etikett.
    pub fn new(action: u32, duration: Duration, weight: f64) -> Self {
        Self {
            session: Session::new(RUNNING_LABEL, action, LEN_STEP, duration, weight),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub session: Session,
    pub height: f64, // cm
}

impl Walking {
    pub fn new(action: u32, duration: Duration, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(WALKING_LABEL, action, LEN_STEP, duration, weight),
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub session: Session,
    pub length_pool: u32, // meter
    pub count_pool: u32,  // antall bassenglengder
}

impl Swimming {
    /// Svømmeøkt; distanse fra svømmetak (1.38 m), fart fra bassenggeometri.
    pub fn new(action: u32, duration: Duration, weight: f64, length_pool: u32, count_pool: u32) -> Self {
        Self {
            session: Session::new(SWIMMING_LABEL, action, SWIMMING_LEN_STEP, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Running => "running",
            ActivityKind::Walking => "walking",
            ActivityKind::Swimming => "swimming",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lukket sett av treningstyper.
#[derive(Debug, Clone, PartialEq)]
pub enum Activity {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl From<Running> for Activity {
    fn from(r: Running) -> Self {
        Activity::Running(r)
    }
}

impl From<Walking> for Activity {
    fn from(w: Walking) -> Self {
        Activity::Walking(w)
    }
}

impl From<Swimming> for Activity {
    fn from(s: Swimming) -> Self {
        Activity::Swimming(s)
    }
}

/// Ferdig beregnet sammendrag av en økt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    #[serde(rename = "duration_min", serialize_with = "serialize_minutes")]
    pub duration: Duration,
    pub distance: f64, // km
    pub speed: f64,    // km/t
    pub calories: f64, // kcal
}

impl InfoMessage {
    #[inline]
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }
}

fn serialize_minutes<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() / 60.0)
}
