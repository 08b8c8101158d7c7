//! Theme preference use case

use crate::domain::Theme;
use crate::error::{NotekeeperError, Result};
use crate::infrastructure::SlotStorage;
use tracing::debug;

/// Slot holding the active theme
pub const THEME_SLOT: &str = "theme";

/// Service for reading and switching the display theme
pub struct ThemeService<S: SlotStorage> {
    slots: S,
}

impl<S: SlotStorage> ThemeService<S> {
    pub fn new(slots: S) -> Self {
        ThemeService { slots }
    }

    /// Stored theme, light when nothing has been stored yet
    pub fn current(&self) -> Result<Theme> {
        match self.slots.get(THEME_SLOT)? {
            Some(raw) => raw.parse().map_err(|_| {
                NotekeeperError::CorruptState(format!("slot '{}' holds '{}'", THEME_SLOT, raw))
            }),
            None => Ok(Theme::default()),
        }
    }

    pub fn set(&self, theme: Theme) -> Result<()> {
        self.slots.set(THEME_SLOT, theme.as_str())?;
        debug!(%theme, "stored theme");
        Ok(())
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle(&self) -> Result<Theme> {
        let theme = self.current()?.toggled();
        self.set(theme)?;
        Ok(theme)
    }
}
