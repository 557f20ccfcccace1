//! Treningsstatistikk: distanse, snittfart og kalorier for løping, gange og svømming.

pub mod constants;
pub mod error;
pub mod metrics;
pub mod models;
pub mod report;
pub mod training;

pub use error::{Error, Result};
pub use models::{Activity, ActivityKind, InfoMessage, Running, Session, Swimming, Walking};
pub use report::{read_data, write_report, write_reports};
pub use training::{RoundTo, Training};
