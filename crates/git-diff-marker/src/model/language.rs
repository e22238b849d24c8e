//! Language hints derived from file extensions.
//!
//! The set of recognized languages is a closed, enumerated table injected
//! into the rendering layer, rather than process-wide highlighter
//! registration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A language the rendering layer knows how to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    CSharp,
    TypeScript,
    Tsx,
    JavaScript,
    Jsx,
    Html,
    Css,
    Sass,
    Scss,
    Json,
    Yaml,
    Markdown,
    Docker,
    Svg,
    Xml,
    Sql,
    Rust,
    Toml,
}

impl Language {
    /// Token understood by the syntax highlighter.
    pub fn token(&self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
            Language::TypeScript => "ts",
            Language::Tsx => "tsx",
            Language::JavaScript => "js",
            Language::Jsx => "jsx",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sass => "sass",
            Language::Scss => "scss",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Markdown => "md",
            Language::Docker => "docker",
            Language::Svg => "svg",
            Language::Xml => "xml",
            Language::Sql => "sql",
            Language::Rust => "rust",
            Language::Toml => "toml",
        }
    }
}

/// Built-in extension table.
const BUILTIN: &[(&str, Language)] = &[
    ("cs", Language::CSharp),
    ("ts", Language::TypeScript),
    ("tsx", Language::Tsx),
    ("js", Language::JavaScript),
    ("jsx", Language::Jsx),
    ("html", Language::Html),
    ("css", Language::Css),
    ("sass", Language::Sass),
    ("scss", Language::Scss),
    ("json", Language::Json),
    ("yaml", Language::Yaml),
    ("yml", Language::Yaml),
    ("md", Language::Markdown),
    ("docker", Language::Docker),
    ("svg", Language::Svg),
    ("xml", Language::Xml),
    ("sql", Language::Sql),
    ("rs", Language::Rust),
    ("toml", Language::Toml),
];

/// Maps file extensions to languages.
///
/// Extensions are matched case-insensitively. Files with an unknown or
/// missing extension resolve to `None` and render as plain text.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    map: HashMap<String, Language>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self {
            map: BUILTIN
                .iter()
                .map(|(ext, lang)| (ext.to_string(), *lang))
                .collect(),
        }
    }
}

impl LanguageRegistry {
    /// An empty registry with no recognized extensions.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Add or replace a mapping.
    pub fn with_mapping(mut self, extension: impl Into<String>, language: Language) -> Self {
        self.map.insert(extension.into().to_lowercase(), language);
        self
    }

    /// Resolve the language hint for a file name from the text after its
    /// final `.`.
    pub fn resolve(&self, file_name: &str) -> Option<Language> {
        let (_, extension) = file_name.rsplit_once('.')?;
        self.map.get(&extension.to_lowercase()).copied()
    }
}
