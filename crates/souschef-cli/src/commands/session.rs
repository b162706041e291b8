use std::path::PathBuf;

use clap::Subcommand;
use souschef_core::{Config, CookingSession, GestureSample, Recipe, SessionStore, SystemClock};

use super::{load_session, notifier_from, print_json, CliError};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start a cooking session from a recipe file
    Start {
        /// Path to a recipe JSON file ({"title": ..., "instructions": [...]})
        #[arg(long)]
        recipe: PathBuf,
    },
    /// Print the current session snapshot as JSON
    Status,
    /// Advance to the next step
    Next,
    /// Go back to the previous step
    Prev,
    /// Feed a raw gesture sample
    Gesture {
        /// Drag distance (positive is rightward)
        #[arg(long, allow_negative_numbers = true)]
        translation: f64,
        /// Drag speed at release
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        velocity: f64,
    },
    /// End the session
    Finish,
}

pub fn run(action: SessionAction) -> Result<(), CliError> {
    let store = SessionStore::open()?;
    let clock = SystemClock;
    let config = Config::load()?;
    let notifier = notifier_from(&config);

    match action {
        SessionAction::Start { recipe } => {
            let recipe = Recipe::from_json_file(&recipe)?;
            let session = CookingSession::with_gestures(recipe, config.gestures);
            store.save(&session)?;
            print_json(&session.snapshot(&clock))?;
        }
        SessionAction::Status => {
            let mut session = load_session(&store)?;
            // Every invocation doubles as the foreground correction point:
            // fold in whatever time passed since the last command.
            if let Some(event) = session.on_foreground(&clock, &notifier) {
                print_json(&event)?;
            }
            print_json(&session.snapshot(&clock))?;
            store.save(&session)?;
        }
        SessionAction::Next => {
            let mut session = load_session(&store)?;
            if let Some(event) = session.advance(&clock, &notifier) {
                print_json(&event)?;
            }
            print_json(&session.snapshot(&clock))?;
            store.save(&session)?;
        }
        SessionAction::Prev => {
            let mut session = load_session(&store)?;
            if let Some(event) = session.retreat(&clock, &notifier) {
                print_json(&event)?;
            }
            print_json(&session.snapshot(&clock))?;
            store.save(&session)?;
        }
        SessionAction::Gesture {
            translation,
            velocity,
        } => {
            let mut session = load_session(&store)?;
            let sample = GestureSample {
                translation,
                velocity,
            };
            if let Some(event) = session.on_gesture(sample, &clock, &notifier) {
                print_json(&event)?;
            }
            print_json(&session.snapshot(&clock))?;
            store.save(&session)?;
        }
        SessionAction::Finish => {
            let mut session = load_session(&store)?;
            let event = session.finish(&clock, &notifier);
            print_json(&event)?;
            store.clear()?;
        }
    }

    Ok(())
}
