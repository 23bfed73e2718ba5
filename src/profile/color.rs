use tracing::{debug, info};

use crate::error::AppResult;

use super::color_store::ColorStore;

/// Color used when no rule matches a profile name.
pub const DEFAULT_COLOR: &str = "00aa00";

/// Contents written when no color settings file exists yet.
pub const DEFAULT_COLOR_SETTINGS: &str = "admin 6644FF\nreadonly 22CCAA\n";

const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRule {
    pub pattern: String,
    pub color: String,
}

impl ColorRule {
    pub fn new(pattern: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            color: color.into(),
        }
    }

    pub fn matches(&self, profile_name: &str) -> bool {
        profile_name.contains(self.pattern.as_str())
    }
}

/// Ordered substring rules. When several rules match a profile name, the one
/// listed last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRuleSet {
    rules: Vec<ColorRule>,
}

impl ColorRuleSet {
    pub fn new(rules: Vec<ColorRule>) -> Self {
        Self { rules }
    }

    pub fn defaults() -> Self {
        Self::parse(DEFAULT_COLOR_SETTINGS)
    }

    /// Parses `<pattern> <color>` lines. Blank lines, `#` comments and lines with
    /// fewer than two fields are skipped; fields past the second are ignored.
    pub fn parse(raw: &str) -> Self {
        let rules = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                match (fields.next(), fields.next()) {
                    (Some(pattern), Some(color)) => Some(ColorRule::new(pattern, color)),
                    _ => {
                        debug!(line, "skipping malformed color rule");
                        None
                    }
                }
            })
            .collect();

        Self { rules }
    }

    /// Reads the rule set from `store`, persisting and returning the defaults
    /// when nothing has been stored yet.
    pub fn load<S: ColorStore>(store: &S) -> AppResult<Self> {
        let Some(raw) = store.load()? else {
            store.save(DEFAULT_COLOR_SETTINGS)?;
            info!(location = %store.location(), "created default color settings");
            return Ok(Self::defaults());
        };

        let rules = Self::parse(&raw);
        debug!(
            location = %store.location(),
            rules = rules.len(),
            "loaded color settings"
        );
        Ok(rules)
    }

    pub fn resolve(&self, profile_name: &str) -> &str {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(profile_name))
            .map_or(DEFAULT_COLOR, |rule| rule.color.as_str())
    }

    pub fn rules(&self) -> &[ColorRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
