//! Filesystem shop-config persistence.

use std::path::{Path, PathBuf};

use vendkore_vending::ShopConfigSink;

use crate::error::AutomationError;
use crate::process::BotProcess;

/// Persists the rendered shop configuration to the bot's config path.
#[derive(Debug, Clone)]
pub struct FsShopConfigSink {
    path: PathBuf,
}

impl FsShopConfigSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sink targeting the bot's own shop config location.
    pub fn for_bot<B: BotProcess>(bot: &B) -> Self {
        Self::new(bot.shop_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back the currently persisted shop configuration.
    pub fn read_shop_config(&self) -> Result<String, AutomationError> {
        std::fs::read_to_string(&self.path).map_err(|source| AutomationError::ConfigRead {
            path: self.path.clone(),
            source,
        })
    }
}

impl ShopConfigSink for FsShopConfigSink {
    type Error = AutomationError;

    fn persist(&self, rendered: &str) -> Result<(), Self::Error> {
        tracing::info!(path = %self.path.display(), "writing shop config");
        std::fs::write(&self.path, rendered).map_err(|source| AutomationError::Persistence {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persists_and_reads_back_the_exact_text() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsShopConfigSink::new(dir.path().join("shop.txt"));

        sink.persist("MyShop\n\nPotion\t50\t3\n").unwrap();
        assert_eq!(sink.read_shop_config().unwrap(), "MyShop\n\nPotion\t50\t3\n");
    }

    #[test]
    fn persisting_into_a_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsShopConfigSink::new(dir.path().join("no-such-dir").join("shop.txt"));

        let err = sink.persist("MyShop\n\n").unwrap_err();
        assert!(matches!(err, AutomationError::Persistence { .. }));
    }

    #[test]
    fn reading_an_absent_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FsShopConfigSink::new(dir.path().join("shop.txt"));
        assert!(matches!(
            sink.read_shop_config().unwrap_err(),
            AutomationError::ConfigRead { .. }
        ));
    }
}
