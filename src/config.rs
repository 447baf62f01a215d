//! Generator configuration
//!
//! Defaults match the output of the `protoc-gen-go-dubbo` plugin, except that IR validation is on.

/// Name written into the machine-generated-file marker by default.
pub const DEFAULT_GENERATOR_NAME: &str = "protoc-gen-go-dubbo";

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Tool name in the `// Code generated by <name>. DO NOT EDIT.` marker
    pub generator_name: String,
    /// Whether to reject malformed IR before emitting any text
    pub validate: bool,
    /// Indentation unit of the emitted Go source
    pub indent: Indent,
}

/// Indentation unit for emitted Go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// One tab per level (gofmt style)
    Tab,
    /// A fixed number of spaces per level
    Spaces(usize),
}

impl Indent {
    /// The literal text of one indentation level.
    pub fn unit(self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(n),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generator_name: DEFAULT_GENERATOR_NAME.to_string(),
            validate: true,
            indent: Indent::Tab,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generator name used in the file header
    pub fn with_generator_name(mut self, name: impl Into<String>) -> Self {
        self.generator_name = name.into();
        self
    }

    /// Enable or disable upfront IR validation
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set the indentation unit
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.generator_name, "protoc-gen-go-dubbo");
        assert!(config.validate);
        assert_eq!(config.indent, Indent::Tab);
    }

    #[test]
    fn test_builder_chain_all() {
        let config = GeneratorConfig::new()
            .with_generator_name("dubbogen")
            .with_validation(false)
            .with_indent(Indent::Spaces(2));

        assert_eq!(config.generator_name, "dubbogen");
        assert!(!config.validate);
        assert_eq!(config.indent.unit(), "  ");
    }

    #[test]
    fn test_builder_override() {
        let config = GeneratorConfig::new().with_validation(false).with_validation(true);
        assert!(config.validate); // Last value wins
    }

    #[test]
    fn test_indent_units() {
        assert_eq!(Indent::Tab.unit(), "\t");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(0).unit(), "");
    }
}
