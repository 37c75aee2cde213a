//! Identifier formatting: character cleaning, reserved-word guarding, case
//! conversion and affix application.
//!
//! A raw key travels through `clean -> case-convert -> affix -> clean` before
//! it becomes a constant name; [`FieldRegistry`] then enforces uniqueness
//! across every constant produced in one run.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::GenerationError;

/// Java keywords plus the structural names used by the emitted unit itself.
const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "PREFIX", "NAMESPACE",
];

/// Rust keywords (strict and reserved) plus the structural constant names.
const RUST_RESERVED: &[&str] = &[
    "as", "async", "await", "become", "box", "break", "const", "continue", "crate", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop",
    "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self",
    "Self", "static", "struct", "super", "trait", "true", "try", "type", "typeof", "union",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield", "PREFIX", "NAMESPACE",
];

/// Target language for the emitted compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Rust,
    Java,
}

impl Target {
    /// Identifiers that must not be emitted bare in this target language.
    pub fn reserved_words(self) -> &'static [&'static str] {
        match self {
            Target::Rust => RUST_RESERVED,
            Target::Java => JAVA_RESERVED,
        }
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Target::Rust),
            "java" => Ok(Target::Java),
            other => Err(format!("unknown target: {other}. Use 'rust' or 'java'.")),
        }
    }
}

/// Identifier casing conventions. Absence (`Option::None`) means no
/// conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseFormat {
    UpperSnake,
    UpperCamel,
    LowerSnake,
    LowerCamel,
    LowerHyphen,
}

impl CaseFormat {
    /// Infer the casing convention of an existing key. Falls back to
    /// lower-camel, matching the original generator's heuristic.
    pub fn detect(key: &str) -> CaseFormat {
        let first_upper = key.chars().next().is_some_and(|c| c.is_uppercase());
        if first_upper && key.contains('_') {
            CaseFormat::UpperSnake
        } else if first_upper {
            CaseFormat::UpperCamel
        } else if key.contains('_') {
            CaseFormat::LowerSnake
        } else if key.contains('-') {
            CaseFormat::LowerHyphen
        } else {
            CaseFormat::LowerCamel
        }
    }

    /// Split a key written in this convention into lowercase words.
    fn words(self, key: &str) -> Vec<String> {
        match self {
            CaseFormat::UpperSnake | CaseFormat::LowerSnake => {
                key.split('_').map(str::to_lowercase).collect()
            }
            CaseFormat::LowerHyphen => key.split('-').map(str::to_lowercase).collect(),
            CaseFormat::UpperCamel | CaseFormat::LowerCamel => {
                let mut words = Vec::new();
                let mut current = String::new();
                for c in key.chars() {
                    if c.is_uppercase() && !current.is_empty() {
                        words.push(std::mem::take(&mut current));
                    }
                    current.extend(c.to_lowercase());
                }
                if !current.is_empty() {
                    words.push(current);
                }
                words
            }
        }
    }

    /// Join lowercase words into this convention.
    fn join(self, words: &[String]) -> String {
        fn capitalize(word: &str) -> String {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }

        match self {
            CaseFormat::UpperSnake => words.join("_").to_uppercase(),
            CaseFormat::LowerSnake => words.join("_"),
            CaseFormat::LowerHyphen => words.join("-"),
            CaseFormat::UpperCamel => words.iter().map(|w| capitalize(w)).collect(),
            CaseFormat::LowerCamel => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(word);
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
        }
    }

    /// Convert a key from its detected source convention into `target`.
    pub fn convert(key: &str, target: CaseFormat) -> String {
        if key.is_empty() {
            return String::new();
        }
        let source = CaseFormat::detect(key);
        if source == target {
            return key.to_string();
        }
        target.join(&source.words(key))
    }
}

impl fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseFormat::UpperSnake => "upper-snake",
            CaseFormat::UpperCamel => "upper-camel",
            CaseFormat::LowerSnake => "lower-snake",
            CaseFormat::LowerCamel => "lower-camel",
            CaseFormat::LowerHyphen => "lower-hyphen",
        };
        f.write_str(name)
    }
}

impl FromStr for CaseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "upper-snake" | "upper-underscore" => Ok(CaseFormat::UpperSnake),
            "upper-camel" => Ok(CaseFormat::UpperCamel),
            "lower-snake" | "lower-underscore" => Ok(CaseFormat::LowerSnake),
            "lower-camel" => Ok(CaseFormat::LowerCamel),
            "lower-hyphen" => Ok(CaseFormat::LowerHyphen),
            other => Err(format!(
                "unknown case format: {other}. Use upper-snake, upper-camel, \
                 lower-snake, lower-camel or lower-hyphen."
            )),
        }
    }
}

/// Strip characters illegal in identifiers: `#` is deleted, `.`, `-` and
/// `/` become underscores.
pub fn clean_chars(key: &str) -> String {
    key.chars()
        .filter_map(|c| match c {
            '#' => None,
            '.' | '-' | '/' => Some('_'),
            other => Some(other),
        })
        .collect()
}

/// Character cleaning plus the reserved-word guard.
pub fn clean_key(key: &str, reserved: &[&str]) -> String {
    let cleaned = clean_chars(key);
    if reserved.contains(&cleaned.as_str()) {
        format!("_{cleaned}")
    } else {
        cleaned
    }
}

/// Produce a constant name from a record key: optional case conversion,
/// then cleaning and the reserved-word guard.
pub fn format_key(key: &str, case: Option<CaseFormat>, reserved: &[&str]) -> String {
    let cased = match case {
        Some(target) => CaseFormat::convert(key, target),
        None => key.to_string(),
    };
    clean_key(&cased, reserved)
}

/// Produce an affixed constant name. Cleaning runs before and after the
/// prefix/suffix are attached, so affixes cannot smuggle illegal characters
/// or reserved words into the result.
pub fn format_affixed_key(
    key: &str,
    case: Option<CaseFormat>,
    prefix: Option<&str>,
    suffix: Option<&str>,
    reserved: &[&str],
) -> String {
    let inner = format_key(key, case, reserved);
    let composed = format!(
        "{}{}{}",
        prefix.unwrap_or_default(),
        inner,
        suffix.unwrap_or_default()
    );
    clean_key(&composed, reserved)
}

/// Tracks every constant name produced in one generation run. All record
/// kinds share a single namespace in the emitted unit, so the registry is
/// shared across them.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    names: HashSet<String>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a constant name, failing if it was already produced.
    pub fn register(&mut self, name: &str) -> Result<(), GenerationError> {
        if self.names.insert(name.to_string()) {
            Ok(())
        } else {
            Err(GenerationError::DuplicateConstant(name.to_string()))
        }
    }
}
