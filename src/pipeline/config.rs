//! Compile options and named profiles
//!
//! [`CompileOptions`] is the plain knob set for a single compilation: which output format to
//! produce and whether to include debug attributes. Options deserialize from YAML with every
//! field optional. A [`ProfileRegistry`] maps names such as `debug` or `ast-json` onto
//! ready-made options.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

fn default_format() -> String {
    "html".to_string()
}

/// Options for one compilation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompileOptions {
    /// Add source positions and descendant lists to the output
    #[serde(default)]
    pub debug: bool,
    /// Name of the output format in the format registry
    #[serde(default = "default_format")]
    pub format: String,
}

impl CompileOptions {
    pub fn new(format: impl Into<String>, debug: bool) -> Self {
        Self {
            debug,
            format: format.into(),
        }
    }

    /// Default html output with debug attributes switched on
    pub fn debug() -> Self {
        Self::new(default_format(), true)
    }

    /// Load options from YAML text. Missing fields take their defaults; an empty document is
    /// the default options.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| ConfigError(e.to_string()))
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new(default_format(), false)
    }
}

/// Options text that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid compile options: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// A named set of compile options
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub description: String,
    pub options: CompileOptions,
}

/// Registry of compile profiles
pub struct ProfileRegistry {
    profiles: HashMap<String, Profile>,
}

impl ProfileRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ProfileRegistry {
            profiles: HashMap::new(),
        }
    }

    /// Register a profile, replacing any profile with the same name
    pub fn register(&mut self, profile: Profile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Check if a profile exists
    pub fn has(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// List all profiles (sorted by name)
    pub fn list_all(&self) -> Vec<&Profile> {
        let mut profiles: Vec<_> = self.profiles.values().collect();
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        profiles
    }

    /// Create registry with the standard profiles
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(Profile {
            name: "default".into(),
            description: "Html for the renderer".into(),
            options: CompileOptions::default(),
        });

        registry.register(Profile {
            name: "debug".into(),
            description: "Html with source positions and descendant lists".into(),
            options: CompileOptions::debug(),
        });

        // AST dumps, for inspecting the resolver output
        registry.register(Profile {
            name: "ast-json".into(),
            description: "Event sequence as JSON".into(),
            options: CompileOptions::new("ast-json", false),
        });

        registry.register(Profile {
            name: "ast-yaml".into(),
            description: "Event sequence as YAML".into(),
            options: CompileOptions::new("ast-yaml", false),
        });

        registry
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
