// core/src/constants.rs
// Faste konstanter for alle beregninger. Ingen runtime-konfig.

pub const M_IN_KM: f64 = 1000.0;        // meter per km
pub const MIN_IN_HOURS: f64 = 60.0;     // minutter per time
pub const LEN_STEP: f64 = 0.65;         // standard skrittlengde (m)
pub const SWIMMING_LEN_STEP: f64 = 1.38; // lengde på ett svømmetak (m)
pub const KMH_IN_MSEC: f64 = 0.278;     // km/t -> m/s

// --- Løping ---
pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

// --- Gange ---
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// --- Svømming ---
pub const SWIMMING_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
pub const SWIMMING_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

// Standard etiketter (brukes i rapporten)
pub const RUNNING_LABEL: &str = "Бег";
pub const WALKING_LABEL: &str = "Ходьба";
pub const SWIMMING_LABEL: &str = "Плавание";
