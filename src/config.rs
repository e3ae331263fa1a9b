use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Picker configuration.
///
/// Everything serializes, so hosts can embed it in their own TOML config
/// or let [`PickerConfig::load`] manage a standalone file.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PickerConfig {
    /// Show dotfiles in listings
    pub show_hidden: bool,
    pub labels: Labels,
}

/// Every user-visible string in the dialog, overridable for localization.
/// The defaults are English.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    /// Dialog title in file-pick mode
    pub select_file_title: String,
    /// Dialog title in folder-pick mode
    pub select_folder_title: String,
    /// Subtitle shown while the storage-root list is up
    pub roots_title: String,
    /// The synthetic "go up" row
    pub up: String,
    pub home_storage: String,
    pub internal_storage: String,
    pub removable_storage: String,
    pub new_folder_button: String,
    pub new_folder_title: String,
    pub select_button: String,
    pub ok_button: String,
    pub cancel_button: String,
    /// Advisory shown when a directory has no listable entries
    pub no_entries: String,
    /// Advisory shown when a directory cannot be read
    pub unreadable_directory: String,
    /// Inline validation message for a blank new-folder name
    pub blank_folder_name: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            select_file_title: "Select a file".to_string(),
            select_folder_title: "Select a folder".to_string(),
            roots_title: "Storage".to_string(),
            up: "Up".to_string(),
            home_storage: "Home".to_string(),
            internal_storage: "Internal storage".to_string(),
            removable_storage: "Removable storage".to_string(),
            new_folder_button: "New folder".to_string(),
            new_folder_title: "New folder name".to_string(),
            select_button: "Select".to_string(),
            ok_button: "OK".to_string(),
            cancel_button: "Cancel".to_string(),
            no_entries: "No entries".to_string(),
            unreadable_directory: "Directory cannot be read".to_string(),
            blank_folder_name: "Folder name must not be blank".to_string(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            labels: Labels::default(),
        }
    }
}

impl PickerConfig {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "egui-file-picker") {
            return Some(proj_dirs.config_dir().join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if the file is
    /// missing or malformed
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<PickerConfig>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            log::warn!("failed to parse {}: {e}; using defaults", path.display());
                        }
                    },
                    Err(e) => {
                        log::warn!("failed to read {}: {e}; using defaults", path.display());
                    }
                }
            }
        }
        PickerConfig::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert!(!config.show_hidden);
        assert_eq!(config.labels.up, "Up");
        assert_eq!(config.labels.select_folder_title, "Select a folder");
    }

    #[test]
    fn test_config_serialization() {
        let config = PickerConfig::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: PickerConfig = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.labels, deserialized.labels);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PickerConfig =
            toml::from_str("show_hidden = true\n[labels]\nup = \"Nach oben\"\n").unwrap();
        assert!(config.show_hidden);
        assert_eq!(config.labels.up, "Nach oben");
        assert_eq!(config.labels.cancel_button, "Cancel");
    }
}
