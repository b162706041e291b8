pub mod config;
pub mod extract;
pub mod session;
pub mod timer;
pub mod watch;

use souschef_core::{Config, CookingSession, SessionStore};

use crate::notify::TermNotifier;

pub(crate) type CliError = Box<dyn std::error::Error>;

pub(crate) fn load_session(store: &SessionStore) -> Result<CookingSession, CliError> {
    store
        .load()?
        .ok_or_else(|| "no active cooking session (run `souschef session start`)".into())
}

pub(crate) fn notifier_from(config: &Config) -> TermNotifier {
    TermNotifier::new(config.notifications.enabled, config.notifications.vibration)
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
