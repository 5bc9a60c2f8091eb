use super::EnvguardConfig;
use anyhow::Result;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => anyhow::bail!("Unsupported format: {}. Use json, toml, or yaml", s),
        }
    }
}

impl EnvguardConfig {
    /// Export configuration in specified format
    pub fn export(&self, format: ConfigFormat) -> Result<String> {
        let output = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yml::to_string(self)?,
        };
        Ok(output)
    }

    /// Export configuration with syntax highlighting when stdout is a terminal
    pub fn export_highlighted(&self, format: ConfigFormat) -> Result<String> {
        let output = self.export(format)?;
        if !console::user_attended() {
            return Ok(output);
        }
        highlight(&output, format)
    }
}

fn highlight(content: &str, format: ConfigFormat) -> Result<String> {
    use syntect::easy::HighlightLines;
    use syntect::highlighting::Style;
    use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};
    use two_face::theme::EmbeddedThemeName;
    use two_face::{syntax, theme};

    let ps = syntax::extra_newlines();
    let ts = theme::extra();

    let syntax = ps
        .find_syntax_by_extension(format.extension())
        .unwrap_or_else(|| ps.find_syntax_plain_text());
    let theme = ts.get(EmbeddedThemeName::Base16OceanDark);

    let mut h = HighlightLines::new(syntax, theme);
    let mut highlighted = String::new();
    for line in LinesWithEndings::from(content) {
        let ranges: Vec<(Style, &str)> = h.highlight_line(line, &ps)?;
        highlighted.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
    }
    // Reset colours so the prompt isn't painted
    highlighted.push_str("\x1b[0m");

    Ok(highlighted)
}
