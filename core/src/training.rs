// core/src/training.rs
use log::debug;

use crate::constants::{
    CALORIES_MEAN_SPEED_MULTIPLIER, CALORIES_MEAN_SPEED_SHIFT, CALORIES_SPEED_HEIGHT_MULTIPLIER,
    CALORIES_WEIGHT_MULTIPLIER, KMH_IN_MSEC, MIN_IN_HOURS, M_IN_KM,
    SWIMMING_CALORIES_MEAN_SPEED_SHIFT, SWIMMING_CALORIES_WEIGHT_MULTIPLIER,
};
use crate::metrics;
use crate::models::{Activity, ActivityKind, InfoMessage, Running, Session, Swimming, Walking};

// --- RoundTo trait (offentlig, brukt av rapport-tester) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// km delt på timer, med vakt mot null varighet.
#[inline]
fn per_hour(km: f64, hours: f64) -> f64 {
    if hours == 0.0 {
        debug!("zero duration, mean speed forced to 0");
        metrics::zero_guard_total("duration").inc();
        return 0.0;
    }
    km / hours
}

/// Felles kalori-kalkulator for alle treningstyper.
///
/// `distance`, `mean_speed` og `training_info` har standard-implementasjoner
/// basert på [`Session`]; hver type leverer sin egen `calories`.
pub trait Training {
    fn session(&self) -> &Session;

    fn kind(&self) -> ActivityKind;

    /// Tilbakelagt distanse i km.
    fn distance(&self) -> f64 {
        let s = self.session();
        s.action as f64 * s.len_step / M_IN_KM
    }

    /// Snittfart i km/t. 0 ved null varighet.
    fn mean_speed(&self) -> f64 {
        per_hour(self.distance(), self.session().duration_hours())
    }

    /// Forbrente kilokalorier.
    fn calories(&self) -> f64;

    fn training_info(&self) -> InfoMessage {
        let s = self.session();
        let info = InfoMessage {
            training_type: s.training_type.clone(),
            duration: s.duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        };
        debug!(
            "{} summary: distance={:.3} km, speed={:.3} km/h, calories={:.3}",
            self.kind(),
            info.distance,
            info.speed,
            info.calories
        );
        metrics::summaries_total(self.kind()).inc();
        info
    }
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed();
        let s = &self.session;
        (CALORIES_MEAN_SPEED_MULTIPLIER * speed + CALORIES_MEAN_SPEED_SHIFT) * s.weight / M_IN_KM
            * s.duration_hours()
            * MIN_IN_HOURS
    }
}

impl Training for Walking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn calories(&self) -> f64 {
        if self.height == 0.0 {
            debug!("zero height, walking calories forced to 0");
            metrics::zero_guard_total("height").inc();
            return 0.0;
        }
        // høyden brukes som oppgitt (cm)
        let speed_m_per_sec = self.mean_speed() * KMH_IN_MSEC;
        let s = &self.session;
        (CALORIES_WEIGHT_MULTIPLIER * s.weight
            + (speed_m_per_sec.powi(2) / self.height) * CALORIES_SPEED_HEIGHT_MULTIPLIER * s.weight)
            * s.duration_hours()
            * MIN_IN_HOURS
    }
}

impl Training for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    /// Fart fra bassenggeometri, ikke fra svømmetak.
    fn mean_speed(&self) -> f64 {
        let km = (self.length_pool as f64 * self.count_pool as f64) / M_IN_KM;
        per_hour(km, self.session.duration_hours())
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed();
        let s = &self.session;
        (speed + SWIMMING_CALORIES_MEAN_SPEED_SHIFT)
            * SWIMMING_CALORIES_WEIGHT_MULTIPLIER
            * s.weight
            * s.duration_hours()
    }
}

impl Training for Activity {
    fn session(&self) -> &Session {
        match self {
            Activity::Running(r) => r.session(),
            Activity::Walking(w) => w.session(),
            Activity::Swimming(s) => s.session(),
        }
    }

    fn kind(&self) -> ActivityKind {
        match self {
            Activity::Running(_) => ActivityKind::Running,
            Activity::Walking(_) => ActivityKind::Walking,
            Activity::Swimming(_) => ActivityKind::Swimming,
        }
    }

    fn distance(&self) -> f64 {
        match self {
            Activity::Running(r) => r.distance(),
            Activity::Walking(w) => w.distance(),
            Activity::Swimming(s) => s.distance(),
        }
    }

    // må delegere, ellers mister svømming sin egen fartsformel
    fn mean_speed(&self) -> f64 {
        match self {
            Activity::Running(r) => r.mean_speed(),
            Activity::Walking(w) => w.mean_speed(),
            Activity::Swimming(s) => s.mean_speed(),
        }
    }

    fn calories(&self) -> f64 {
        match self {
            Activity::Running(r) => r.calories(),
            Activity::Walking(w) => w.calories(),
            Activity::Swimming(s) => s.calories(),
        }
    }
}
