// core/src/report.rs
use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::models::InfoMessage;
use crate::training::Training;

/// Fast tekstmal, ingen beregning her.
impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\nДлительность: {} мин\nДистанция: {:.2} км.\nСр. скорость: {:.2} км/ч\nПотрачено ккал: {:.2}\n",
            self.training_type,
            self.duration_minutes(),
            self.distance,
            self.speed,
            self.calories,
        )
    }
}

impl InfoMessage {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Sammendrag + rapporttekst for en vilkårlig treningstype.
pub fn read_data<T: Training + ?Sized>(training: &T) -> String {
    training.training_info().to_string()
}

pub fn write_report<W: Write>(out: &mut W, info: &InfoMessage) -> Result<()> {
    out.write_all(info.to_string().as_bytes())?;
    Ok(())
}

/// Én rapport per økt, skilt med tom linje.
pub fn write_reports<'a, W, I, T>(out: &mut W, trainings: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a T>,
    T: Training + 'a,
{
    for t in trainings {
        write_report(out, &t.training_info())?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn info(minutes: u64) -> InfoMessage {
        InfoMessage {
            training_type: "Бег".into(),
            duration: Duration::from_secs(minutes * 60),
            distance: 1.955,
            speed: 3.91,
            calories: 99.999,
        }
    }

    #[test]
    fn minutes_are_printed_without_trailing_zeros() {
        let text = info(90).to_string();
        assert!(text.contains("Длительность: 90 мин\n"), "{text}");
    }

    #[test]
    fn fractional_minutes_keep_their_fraction() {
        let mut i = info(0);
        i.duration = Duration::from_secs(90);
        assert!(i.to_string().contains("Длительность: 1.5 мин\n"));
    }

    #[test]
    fn two_decimals_everywhere() {
        let text = info(30).to_string();
        assert!(text.contains("Ср. скорость: 3.91 км/ч\n"));
        assert!(text.contains("Потрачено ккал: 100.00\n"));
        assert!(text.ends_with('\n'));
    }
}
