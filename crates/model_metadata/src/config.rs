use serde::Deserialize;

/// How many annotations of one kind a single member may carry
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationMultiplicity {
    /// More than one is reported as an ambiguous declaration
    #[default]
    Single,
    /// The first one in declaration order is used
    First,
}

/// What to do when a class declares more than one companion type
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompanionLinkPolicy {
    /// Use the first declared link and log a warning
    #[default]
    FirstWins,
    /// Report the class as ambiguous
    Reject,
}

/// Resolver settings.
///
/// The multiplicity policy applies to both the direct lookup and the
/// companion fallback.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ResolverConfig {
    pub annotation_multiplicity: AnnotationMultiplicity,
    pub companion_links: CompanionLinkPolicy,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    resolver: ResolverConfig,
}

/// Default configuration, equivalent to `ResolverConfig::default()`
pub const DEFAULT_CONFIG: &str = r#"
[resolver]
annotation_multiplicity = "single"
companion_links = "first_wins"
"#;

impl ResolverConfig {
    /// Parse the `[resolver]` table of a TOML document.
    /// A document without that table yields the defaults.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.resolver)
    }
}
