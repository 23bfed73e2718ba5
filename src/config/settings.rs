use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::profile::generator::DEFAULT_ROLE_SESSION_NAME;

use super::paths::expand_home;

pub const DEFAULT_REGION: &str = "ap-northeast-1";
pub const DEFAULT_COLOR_SETTINGS_FILE: &str = "color-setting.ini";

/// Optional overrides, read from the settings file or collected from flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub role_session_name: Option<String>,
    #[serde(default)]
    pub color_settings: Option<PathBuf>,
    #[serde(default)]
    pub aws_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub region: String,
    pub role_session_name: String,
    pub color_settings: PathBuf,
    pub aws_profile: Option<String>,
}

impl Settings {
    /// Layers `overrides` on top of these settings, then fills built-in defaults.
    pub fn resolve(self, overrides: Settings) -> ResolvedSettings {
        let region = non_blank(overrides.region)
            .or_else(|| non_blank(self.region))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let role_session_name = overrides
            .role_session_name
            .or(self.role_session_name)
            .unwrap_or_else(|| DEFAULT_ROLE_SESSION_NAME.to_string());
        let color_settings = overrides
            .color_settings
            .or(self.color_settings)
            .map(|path| expand_home(&path))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COLOR_SETTINGS_FILE));
        let aws_profile = non_blank(overrides.aws_profile).or_else(|| non_blank(self.aws_profile));

        ResolvedSettings {
            region,
            role_session_name,
            color_settings,
            aws_profile,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn load(path: &Path) -> AppResult<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(err) => return Err(err.into()),
    };

    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_builtin_defaults() {
        let resolved = Settings::default().resolve(Settings::default());

        assert_eq!(resolved.region, "ap-northeast-1");
        assert_eq!(resolved.role_session_name, "user_name");
        assert_eq!(resolved.color_settings, PathBuf::from("color-setting.ini"));
        assert_eq!(resolved.aws_profile, None);
    }

    #[test]
    fn overrides_take_precedence_over_file() {
        let file = Settings {
            region: Some("us-east-1".to_string()),
            role_session_name: Some("from-file".to_string()),
            color_settings: Some(PathBuf::from("/etc/aws-prof/colors.ini")),
            aws_profile: Some("management".to_string()),
        };
        let flags = Settings {
            region: Some("eu-west-1".to_string()),
            role_session_name: Some("claude".to_string()),
            ..Settings::default()
        };

        let resolved = file.resolve(flags);
        assert_eq!(resolved.region, "eu-west-1");
        assert_eq!(resolved.role_session_name, "claude");
        assert_eq!(
            resolved.color_settings,
            PathBuf::from("/etc/aws-prof/colors.ini")
        );
        assert_eq!(resolved.aws_profile.as_deref(), Some("management"));
    }

    #[test]
    fn blank_profile_and_region_are_ignored() {
        let flags = Settings {
            region: Some("  ".to_string()),
            aws_profile: Some(String::new()),
            ..Settings::default()
        };

        let resolved = Settings::default().resolve(flags);
        assert_eq!(resolved.region, DEFAULT_REGION);
        assert_eq!(resolved.aws_profile, None);
    }

    #[test]
    fn parses_partial_settings_file() {
        let settings: Settings =
            serde_json::from_str(r#"{"role_session_name":"ops"}"#).expect("valid json");
        assert_eq!(settings.role_session_name.as_deref(), Some("ops"));
        assert!(settings.region.is_none());
    }
}
