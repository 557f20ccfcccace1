use std::io;
use std::time::Duration;

use anyhow::Context;
use env_logger::Env;
use log::info;

use workout_core::{write_reports, Activity, Running, Swimming, Walking};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let sessions: Vec<Activity> = vec![
        Swimming::new(2000, Duration::from_secs(90 * 60), 85.0, 50, 40).into(),
        Walking::new(10000, Duration::from_secs(2 * 3600), 70.0, 175.0).into(),
        Running::new(3000, Duration::from_secs(30 * 60), 70.0).into(),
    ];
    info!("rendering {} sessions", sessions.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, &sessions).context("failed to write reports to stdout")?;
    Ok(())
}
