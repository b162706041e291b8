//! Follow the running countdown until it leaves the running state.
//!
//! Runs the ~1 Hz reconciliation loop the engine expects while a timer is
//! running. The cadence only affects display smoothness: remaining time is
//! derived from the absolute anchor on every tick, so a stalled or slowed
//! loop cannot drift the countdown.

use std::io::Write;
use std::time::Duration;

use souschef_core::{Config, SessionStore, SystemClock, TimerStatus};

use super::{load_session, notifier_from, print_json, CliError};

pub fn run() -> Result<(), CliError> {
    let store = SessionStore::open()?;
    let clock = SystemClock;
    let config = Config::load()?;
    let notifier = notifier_from(&config);
    let mut session = load_session(&store)?;

    if session.snapshot(&clock).timer_status != TimerStatus::Running {
        store.save(&session)?;
        return Err("no running timer to watch".into());
    }

    let interval = Duration::from_secs(config.timer.tick_interval_secs.max(1));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let completed = session.tick(&clock, &notifier);
            let snapshot = session.snapshot(&clock);

            if let Some(display) = snapshot.remaining_display.as_deref() {
                print!("\r{display}   ");
                let _ = std::io::stdout().flush();
            }

            if let Some(event) = completed {
                println!();
                print_json(&event)?;
                break;
            }
            if snapshot.timer_status != TimerStatus::Running {
                println!();
                break;
            }
        }
        Ok::<(), CliError>(())
    })?;

    store.save(&session)?;
    Ok(())
}
