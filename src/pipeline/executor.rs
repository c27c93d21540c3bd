//! Compiler that runs parse and serialization with a set of options

use super::config::{CompileOptions, ConfigError, ProfileRegistry};
use crate::formats::{FormatError, FormatRegistry};
use crate::parsing::{self, ParseError};
use std::fmt;

/// Errors during compilation
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Parse(ParseError),
    Format(FormatError),
    Config(ConfigError),
    ProfileNotFound(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Parse(error) => write!(f, "{}", error),
            CompileError::Format(error) => write!(f, "{}", error),
            CompileError::Config(error) => write!(f, "{}", error),
            CompileError::ProfileNotFound(name) => write!(f, "Profile '{}' not found", name),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Parse(error) => Some(error),
            CompileError::Format(error) => Some(error),
            CompileError::Config(error) => Some(error),
            CompileError::ProfileNotFound(_) => None,
        }
    }
}

impl From<ParseError> for CompileError {
    fn from(error: ParseError) -> Self {
        CompileError::Parse(error)
    }
}

impl From<FormatError> for CompileError {
    fn from(error: FormatError) -> Self {
        CompileError::Format(error)
    }
}

impl From<ConfigError> for CompileError {
    fn from(error: ConfigError) -> Self {
        CompileError::Config(error)
    }
}

/// Compiles source text into one of the registered formats
pub struct Compiler {
    formats: FormatRegistry,
    profiles: ProfileRegistry,
}

impl Compiler {
    /// Create a compiler with the default formats and profiles
    pub fn new() -> Self {
        Self {
            formats: FormatRegistry::with_defaults(),
            profiles: ProfileRegistry::with_defaults(),
        }
    }

    /// Create a compiler with custom registries
    pub fn with_registry(formats: FormatRegistry, profiles: ProfileRegistry) -> Self {
        Self { formats, profiles }
    }

    /// Parse `source` and serialize it as `options` ask.
    ///
    /// The format is checked before parsing so an unknown format is reported even for
    /// malformed source.
    pub fn compile(&self, source: &str, options: &CompileOptions) -> Result<String, CompileError> {
        if !self.formats.has(&options.format) {
            return Err(FormatError::FormatNotFound(options.format.clone()).into());
        }

        let doc = parsing::parse(source)?;
        log::debug!(
            "compiled {} events to {} (debug: {})",
            doc.events().len(),
            options.format,
            options.debug
        );
        Ok(self.formats.serialize(&doc, &options.format, options.debug)?)
    }

    /// Compile raw bytes, which must be UTF-8 text
    pub fn compile_bytes(
        &self,
        bytes: &[u8],
        options: &CompileOptions,
    ) -> Result<String, CompileError> {
        let source = parsing::decode(bytes)?;
        self.compile(source, options)
    }

    /// Compile with the options of a named profile
    pub fn compile_profile(&self, profile: &str, source: &str) -> Result<String, CompileError> {
        let profile = self
            .profiles
            .get(profile)
            .ok_or_else(|| CompileError::ProfileNotFound(profile.to_string()))?;
        self.compile(source, &profile.options)
    }

    /// Compile with options read from YAML text
    pub fn compile_with_yaml(&self, source: &str, yaml: &str) -> Result<String, CompileError> {
        let options = CompileOptions::from_yaml(yaml)?;
        self.compile(source, &options)
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
