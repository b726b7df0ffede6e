//! Bot process lifecycle.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::error::AutomationError;

/// Lifecycle and well-known paths of the external bot process.
pub trait BotProcess {
    fn start(&mut self) -> Result<(), AutomationError>;
    fn stop(&mut self) -> Result<(), AutomationError>;

    /// Where the bot appends its console transcript.
    fn console_log_path(&self) -> PathBuf;

    /// Where the bot reads its shop configuration.
    fn shop_config_path(&self) -> PathBuf;
}

/// The real OpenKore installation under a home directory.
///
/// OpenKore keeps its transcript under `logs/console.txt` and its shop
/// listing under `control/shop.txt`, both relative to the home.
pub struct Openkore {
    home: PathBuf,
    child: Option<Child>,
}

impl Openkore {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            child: None,
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn is_running(&self) -> bool {
        self.child.is_some()
    }
}

impl BotProcess for Openkore {
    fn start(&mut self) -> Result<(), AutomationError> {
        if self.child.is_some() {
            return Ok(());
        }

        let child = Command::new("perl")
            .arg("openkore.pl")
            .current_dir(&self.home)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AutomationError::Spawn {
                command: format!("perl openkore.pl (in {})", self.home.display()),
                source,
            })?;

        tracing::info!(home = %self.home.display(), pid = child.id(), "started openkore");
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AutomationError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        child
            .kill()
            .map_err(|source| AutomationError::Stop { source })?;
        child
            .wait()
            .map_err(|source| AutomationError::Stop { source })?;

        tracing::info!(home = %self.home.display(), "stopped openkore");
        Ok(())
    }

    fn console_log_path(&self) -> PathBuf {
        self.home.join("logs").join("console.txt")
    }

    fn shop_config_path(&self) -> PathBuf {
        self.home.join("control").join("shop.txt")
    }
}

impl Drop for Openkore {
    fn drop(&mut self) {
        // The bot must not outlive the session that started it.
        let _ = self.stop();
    }
}
