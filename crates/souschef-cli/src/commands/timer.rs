use clap::Subcommand;
use souschef_core::{Config, SessionStore, SystemClock};

use super::{load_session, notifier_from, print_json, CliError};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the countdown the current step offers
    Start,
    /// Stop a running countdown
    Stop,
    /// Print the remaining time
    Remaining,
}

pub fn run(action: TimerAction) -> Result<(), CliError> {
    let store = SessionStore::open()?;
    let clock = SystemClock;
    let config = Config::load()?;
    let notifier = notifier_from(&config);
    let mut session = load_session(&store)?;

    match action {
        TimerAction::Start => match session.start_timer(&clock, &notifier) {
            Some(event) => print_json(&event)?,
            None => eprintln!("the current step offers no timer"),
        },
        TimerAction::Stop => match session.stop_timer(&clock, &notifier) {
            Some(event) => print_json(&event)?,
            None => eprintln!("no running timer"),
        },
        TimerAction::Remaining => {
            let snapshot = session.snapshot(&clock);
            match snapshot.remaining_display {
                Some(display) => println!("{display}"),
                None => eprintln!("no running timer"),
            }
        }
    }

    store.save(&session)?;
    Ok(())
}
