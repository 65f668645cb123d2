//! Document rendering through `yaml-rust2`

use yaml_rust2::YamlEmitter as Writer;

use super::{EmitError, Yaml};

const DOCUMENT_START: &str = "---\n";

/// Layout options for the emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Start a mapping inside a sequence on the same line as its `-`
    pub compact: bool,

    /// Write strings containing newlines as literal blocks
    pub multiline_strings: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            compact: true,
            multiline_strings: false,
        }
    }
}

/// Renders a [`Yaml`] tree to text
#[derive(Debug, Clone, Default)]
pub struct YamlEmitter {
    config: EmitterConfig,
}

impl YamlEmitter {
    /// Create an emitter with the given layout
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Layout in use
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Render a complete document, without the `---` marker and with a final newline
    pub fn emit(&self, doc: &Yaml) -> Result<String, EmitError> {
        let mut out = String::new();
        {
            let mut writer = Writer::new(&mut out);
            writer.compact(self.config.compact);
            writer.multiline_strings(self.config.multiline_strings);
            writer.dump(doc)?;
        }
        if out.starts_with(DOCUMENT_START) {
            out.drain(..DOCUMENT_START.len());
        }
        out.push('\n');
        Ok(out)
    }
}
