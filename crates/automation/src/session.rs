//! Cart acquisition: run the bot long enough to report its cart.

use std::io;
use std::time::Duration;

use vendkore_cart::CartSnapshot;

use crate::error::AutomationError;
use crate::process::BotProcess;

/// Start the bot, wait `warmup` for it to list its cart into the console
/// transcript, stop it, and parse the transcript.
///
/// The wait is a single bounded sleep, not a poll loop. A transcript that
/// does not exist yet, or contains no cart report, yields `Ok(None)` — the
/// caller may retry with a longer warmup. A malformed report surfaces as an
/// error.
pub fn acquire_cart<B: BotProcess>(
    bot: &mut B,
    warmup: Duration,
) -> Result<Option<CartSnapshot>, AutomationError> {
    bot.start()?;
    std::thread::sleep(warmup);
    bot.stop()?;

    let path = bot.console_log_path();
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "console log not present yet");
            return Ok(None);
        }
        Err(source) => return Err(AutomationError::LogRead { path, source }),
    };

    let snapshot = vendkore_cart::parse(&text)?;
    if snapshot.is_none() {
        tracing::debug!(path = %path.display(), "no cart report in console log");
    }
    Ok(snapshot)
}
