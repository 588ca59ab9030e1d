//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] report failures to the caller.
//! [`load_settings_or_default`] is the startup path: a missing or broken
//! file is logged and replaced by the defaults, so a bad settings file
//! never stops a game from starting.

use std::fs;
use std::path::Path;

use chess_engine::constants::BOARD_SIZE;
use chess_engine::PromotionChoice;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::{CoreError, CoreResult};

/// Default settings filename
pub const SETTINGS_FILENAME: &str = "settings.json";

/// User-adjustable session settings
///
/// Missing fields take their default, so an older or partial file still
/// loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Board row that acts as the promotion picker while a pawn waits
    pub promotion_row: u8,

    /// Pieces offered by the picker, one per column from column 0
    pub promotion_choices: Vec<PromotionChoice>,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            promotion_row: 7,
            promotion_choices: PromotionChoice::ALL.to_vec(),
            log_filter: "info".to_string(),
        }
    }
}

impl GameSettings {
    /// Reject layouts the picker cannot represent
    pub fn validate(&self) -> CoreResult<()> {
        if self.promotion_row >= BOARD_SIZE {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "promotion_row {} is off the board (must be 0-{})",
                    self.promotion_row,
                    BOARD_SIZE - 1
                ),
            });
        }

        if self.promotion_choices.is_empty() {
            return Err(CoreError::InvalidSettings {
                message: "promotion_choices must offer at least one piece".to_string(),
            });
        }

        if self.promotion_choices.len() > BOARD_SIZE as usize {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "promotion_choices has {} entries, the picker row holds {}",
                    self.promotion_choices.len(),
                    BOARD_SIZE
                ),
            });
        }

        for (i, choice) in self.promotion_choices.iter().enumerate() {
            if self.promotion_choices[..i].contains(choice) {
                return Err(CoreError::InvalidSettings {
                    message: format!("promotion_choices lists {:?} twice", choice),
                });
            }
        }

        Ok(())
    }

    /// Picker choice for a click at `col`, if that column holds one
    pub fn promotion_choice_at(&self, col: u8) -> Option<PromotionChoice> {
        self.promotion_choices.get(col as usize).copied()
    }
}

/// Read, parse and validate a settings file
pub fn load_settings(path: impl AsRef<Path>) -> CoreResult<GameSettings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate()?;

    info!("[SETTINGS] Loaded settings from {:?}", path);
    Ok(settings)
}

/// Load settings, falling back to defaults on any failure
pub fn load_settings_or_default(path: impl AsRef<Path>) -> GameSettings {
    let path = path.as_ref();
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Write settings as pretty-printed JSON, creating parent directories
pub fn save_settings(path: impl AsRef<Path>, settings: &GameSettings) -> CoreResult<()> {
    let path = path.as_ref();
    settings.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("duel-chess-settings-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert_eq!(settings.promotion_row, 7);
        assert_eq!(settings.promotion_choices, PromotionChoice::ALL.to_vec());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{ "promotion_row": 0 }"#).expect("partial settings parse");
        assert_eq!(settings.promotion_row, 0);
        assert_eq!(settings.promotion_choices.len(), 4);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_choices_use_lowercase_names() {
        let settings: GameSettings =
            serde_json::from_str(r#"{ "promotion_choices": ["knight", "queen"] }"#)
                .expect("choices parse");
        assert_eq!(
            settings.promotion_choices,
            vec![PromotionChoice::Knight, PromotionChoice::Queen]
        );
        assert_eq!(settings.promotion_choice_at(1), Some(PromotionChoice::Queen));
        assert_eq!(settings.promotion_choice_at(2), None);
    }

    #[test]
    fn test_validate_rejects_bad_layouts() {
        let off_board = GameSettings {
            promotion_row: 8,
            ..GameSettings::default()
        };
        assert!(matches!(
            off_board.validate(),
            Err(CoreError::InvalidSettings { .. })
        ));

        let empty = GameSettings {
            promotion_choices: Vec::new(),
            ..GameSettings::default()
        };
        assert!(empty.validate().is_err(), "Empty picker must be rejected");

        let duplicate = GameSettings {
            promotion_choices: vec![PromotionChoice::Queen, PromotionChoice::Queen],
            ..GameSettings::default()
        };
        assert!(duplicate.validate().is_err(), "Duplicate choice must be rejected");
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save-load");
        let settings = GameSettings {
            promotion_row: 3,
            promotion_choices: vec![PromotionChoice::Rook, PromotionChoice::Queen],
            log_filter: "debug".to_string(),
        };

        save_settings(&path, &settings).expect("settings saved");
        let loaded = load_settings(&path).expect("settings loaded");
        assert_eq!(loaded, settings);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_missing_file_errors_but_default_path_recovers() {
        let path = scratch_path("missing");
        assert!(matches!(load_settings(&path), Err(CoreError::SettingsIo(_))));
        assert_eq!(load_settings_or_default(&path), GameSettings::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let path = scratch_path("invalid");
        let dir = path.parent().expect("scratch path has a parent");
        fs::create_dir_all(dir).expect("scratch dir created");
        fs::write(&path, r#"{ "promotion_row": 12 }"#).expect("file written");

        assert!(matches!(
            load_settings(&path),
            Err(CoreError::InvalidSettings { .. })
        ));
        assert_eq!(load_settings_or_default(&path), GameSettings::default());

        fs::write(&path, "not json").expect("file written");
        assert!(matches!(
            load_settings(&path),
            Err(CoreError::SettingsSerialization(_))
        ));

        let _ = fs::remove_dir_all(dir);
    }
}
