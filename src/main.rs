use std::io::{self, BufRead};
use std::sync::Arc;

use float_visibility::actions::{dispatch, ActionOutcome, FloatAction, Keymap};
use float_visibility::delay::ThreadSleep;
use float_visibility::logging;
use float_visibility::settings::Settings;
use float_visibility::visibility::FlagBackend;
use float_visibility::Floating;

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args().nth(1).unwrap_or_else(|| "settings.json".into());
    let settings = Settings::load(&settings_path)?;
    logging::init(settings.debug_logging, settings.log_file.clone());

    let keymap = Keymap::from_settings(&settings);
    tracing::info!("loaded {} bindings from {}", keymap.len(), settings_path);

    let backend = FlagBackend::default();
    let floating = Floating::new(Arc::new(backend.clone()), Arc::new(ThreadSleep));

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        let action = match keymap.resolve(input) {
            Some(action) => action,
            None => match input.parse::<FloatAction>() {
                Ok(action) => action,
                Err(e) => {
                    tracing::warn!("{e}");
                    continue;
                }
            },
        };

        match dispatch(action, &floating, settings.hide_timeout_ms) {
            Ok(ActionOutcome::Done) => println!("visible={}", backend.is_visible()),
            Ok(ActionOutcome::Pinned(pinned)) => {
                println!("pinned={pinned} visible={}", backend.is_visible())
            }
            Ok(ActionOutcome::Scheduled(pending)) => println!("hide scheduled (#{})", pending.token()),
            Err(e) => tracing::error!("{action} failed: {e}"),
        }
    }

    Ok(())
}
