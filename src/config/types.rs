use mkvtool_av::ToolOverrides;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Explicit MKVToolNix locations.
    #[serde(default)]
    pub tools: ToolOverrides,

    #[serde(default)]
    pub print: PrintConfig,

    #[serde(default)]
    pub rename: RenameConfig,

    #[serde(default)]
    pub languages: LanguagesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrintConfig {
    /// Default mask for `print`.
    #[serde(default = "default_print_format")]
    pub format: String,
}

fn default_print_format() -> String {
    "%{title}.mkv".to_string()
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            format: default_print_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameConfig {
    /// Default mask for `rename`.
    #[serde(default = "default_rename_format")]
    pub format: String,
}

fn default_rename_format() -> String {
    "%{title}.%{container}".to_string()
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            format: default_rename_format(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguagesConfig {
    /// Language preference used by `setdefaultbylang` when no `--lang` is
    /// given. `default` matches tracks without a language tag.
    #[serde(default)]
    pub preferred: Vec<String>,

    /// Track-name substrings always excluded from selection.
    #[serde(default)]
    pub ignore: Vec<String>,
}
