use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read format file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse format file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Delimiter used for bold and italic spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisStyle {
    #[default]
    Asterisk,
    Underscore,
}

impl EmphasisStyle {
    pub fn delimiter(self) -> char {
        match self {
            EmphasisStyle::Asterisk => '*',
            EmphasisStyle::Underscore => '_',
        }
    }
}

/// Marker written in front of bullet and task list items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletStyle {
    #[default]
    Asterisk,
    Plus,
    Minus,
}

impl BulletStyle {
    pub fn marker(self) -> char {
        match self {
            BulletStyle::Asterisk => '*',
            BulletStyle::Plus => '+',
            BulletStyle::Minus => '-',
        }
    }
}

/// Punctuation following the number of an ordered list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderedStyle {
    #[default]
    Dot,
    Parenthesis,
}

impl OrderedStyle {
    pub fn delimiter(self) -> char {
        match self {
            OrderedStyle::Dot => '.',
            OrderedStyle::Parenthesis => ')',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceStyle {
    #[default]
    Backtick,
    Tilde,
}

impl FenceStyle {
    pub fn fence(self) -> &'static str {
        match self {
            FenceStyle::Backtick => "```",
            FenceStyle::Tilde => "~~~",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStyle {
    #[default]
    Hyphen,
    Asterisk,
    Underscore,
}

impl RuleStyle {
    pub fn character(self) -> char {
        match self {
            RuleStyle::Hyphen => '-',
            RuleStyle::Asterisk => '*',
            RuleStyle::Underscore => '_',
        }
    }
}

/// How a horizontal rule is spelled: `- - -`, `***`, `___` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleFormat {
    pub style: RuleStyle,
    /// At least 1.
    #[serde(deserialize_with = "rule_count")]
    pub count: usize,
    /// Spaces or tabs only.
    #[serde(deserialize_with = "rule_separator")]
    pub separator: String,
}

fn rule_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let count = usize::deserialize(deserializer)?;
    if count == 0 {
        return Err(D::Error::custom("horizontal rule count must be at least 1"));
    }
    Ok(count)
}

fn rule_separator<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let separator = String::deserialize(deserializer)?;
    if !separator.chars().all(|c| c == ' ' || c == '\t') {
        return Err(D::Error::custom(format!(
            "horizontal rule separator {separator:?} must be spaces or tabs"
        )));
    }
    Ok(separator)
}

impl Default for RuleFormat {
    fn default() -> Self {
        Self {
            style: RuleStyle::Hyphen,
            count: 3,
            separator: " ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharReferenceFormat {
    #[default]
    Hexadecimal,
    Decimal,
}

/// Output settings consumed by the markdown writer.
///
/// Every field has a default, so a format file only needs to list the
/// settings it changes:
///
/// ```toml
/// bold_style = "underscore"
/// bullet_style = "minus"
///
/// [horizontal_rule]
/// style = "asterisk"
/// count = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownFormat {
    pub bold_style: EmphasisStyle,
    pub italic_style: EmphasisStyle,
    pub bullet_style: BulletStyle,
    pub ordered_style: OrderedStyle,
    /// Append closing `#` characters to headings.
    pub heading_closing: bool,
    pub fence_style: FenceStyle,
    pub horizontal_rule: RuleFormat,
    pub char_reference_format: CharReferenceFormat,
    /// Start and end every table row with `|`.
    pub table_outer_pipes: bool,
    pub newline: String,
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self {
            bold_style: EmphasisStyle::Asterisk,
            italic_style: EmphasisStyle::Asterisk,
            bullet_style: BulletStyle::Asterisk,
            ordered_style: OrderedStyle::Dot,
            heading_closing: false,
            fence_style: FenceStyle::Backtick,
            horizontal_rule: RuleFormat::default(),
            char_reference_format: CharReferenceFormat::Hexadecimal,
            table_outer_pipes: true,
            newline: "\n".to_string(),
        }
    }
}

impl MarkdownFormat {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        // Expand shell variables and tilde so callers can pass user-facing paths
        let config_path =
            Self::expand_path(config_path.as_ref()).unwrap_or(config_path.as_ref().to_path_buf());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let format: MarkdownFormat =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        Ok(Some(format))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the user's format file, falling back to defaults when none exists.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-loom");
        PathBuf::from(config_dir.as_ref()).join("format.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
