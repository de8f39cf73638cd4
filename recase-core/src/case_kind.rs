//! Case style selected by the caller

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCaseKindError;

/// Output style for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseKind {
    /// `HELLO WORLD`
    #[cfg_attr(feature = "serde", serde(rename = "upper", alias = "uppercase"))]
    Uppercase,
    /// `hello world`
    #[cfg_attr(feature = "serde", serde(rename = "lower", alias = "lowercase"))]
    LowerCase,
    /// `Hello world. This is me.`
    #[cfg_attr(feature = "serde", serde(rename = "sentence", alias = "sentenceCase"))]
    SentenceCase,
    /// `Hello World`
    #[cfg_attr(feature = "serde", serde(rename = "start", alias = "startCase"))]
    StartCase,
    /// `HelloWorld`
    #[cfg_attr(feature = "serde", serde(rename = "pascal", alias = "pascalCase"))]
    PascalCase,
    /// `helloWorld`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "camel", alias = "camelCase"))]
    CamelCase,
    /// `hello_world`
    #[cfg_attr(feature = "serde", serde(rename = "snake", alias = "snakeCase"))]
    SnakeCase,
    /// `hello-world`
    #[cfg_attr(feature = "serde", serde(rename = "kebab", alias = "kebabCase"))]
    KebabCase,
    /// `HELLO_WORLD`
    #[cfg_attr(feature = "serde", serde(rename = "constant", alias = "constantCase"))]
    ConstantCase,
}

impl CaseKind {
    /// Every case style, in declaration order
    pub const ALL: [CaseKind; 9] = [
        CaseKind::Uppercase,
        CaseKind::LowerCase,
        CaseKind::SentenceCase,
        CaseKind::StartCase,
        CaseKind::PascalCase,
        CaseKind::CamelCase,
        CaseKind::SnakeCase,
        CaseKind::KebabCase,
        CaseKind::ConstantCase,
    ];

    /// Short code used on the command line and in configuration files
    pub fn code(&self) -> &'static str {
        match self {
            CaseKind::Uppercase => "upper",
            CaseKind::LowerCase => "lower",
            CaseKind::SentenceCase => "sentence",
            CaseKind::StartCase => "start",
            CaseKind::PascalCase => "pascal",
            CaseKind::CamelCase => "camel",
            CaseKind::SnakeCase => "snake",
            CaseKind::KebabCase => "kebab",
            CaseKind::ConstantCase => "constant",
        }
    }

    /// Identifier a host registers its command under, e.g. `case.converter.camelCase`
    pub fn command_name(&self) -> &'static str {
        match self {
            CaseKind::Uppercase => "uppercase",
            CaseKind::LowerCase => "lowercase",
            CaseKind::SentenceCase => "sentenceCase",
            CaseKind::StartCase => "startCase",
            CaseKind::PascalCase => "pascalCase",
            CaseKind::CamelCase => "camelCase",
            CaseKind::SnakeCase => "snakeCase",
            CaseKind::KebabCase => "kebabCase",
            CaseKind::ConstantCase => "constantCase",
        }
    }

    /// Label written in the style itself
    pub fn label(&self) -> &'static str {
        match self {
            CaseKind::Uppercase => "UPPERCASE",
            CaseKind::LowerCase => "lowercase",
            CaseKind::SentenceCase => "Sentence case",
            CaseKind::StartCase => "Start Case",
            CaseKind::PascalCase => "PascalCase",
            CaseKind::CamelCase => "camelCase",
            CaseKind::SnakeCase => "snake_case",
            CaseKind::KebabCase => "kebab-case",
            CaseKind::ConstantCase => "CONSTANT_CASE",
        }
    }

    /// Whether the style is produced by splitting into fragments and rejoining them
    pub fn is_tokenizing(&self) -> bool {
        !matches!(
            self,
            CaseKind::Uppercase | CaseKind::LowerCase | CaseKind::SentenceCase
        )
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CaseKind {
    type Err = ParseCaseKindError;

    /// Accepts codes, command names and labels, ignoring ASCII case and
    /// the separators `_`, `-` and space
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "upper" | "uppercase" => Ok(CaseKind::Uppercase),
            "lower" | "lowercase" => Ok(CaseKind::LowerCase),
            "sentence" | "sentencecase" => Ok(CaseKind::SentenceCase),
            "start" | "startcase" | "title" | "titlecase" => Ok(CaseKind::StartCase),
            "pascal" | "pascalcase" | "uppercamel" | "uppercamelcase" => Ok(CaseKind::PascalCase),
            "camel" | "camelcase" | "lowercamel" | "lowercamelcase" => Ok(CaseKind::CamelCase),
            "snake" | "snakecase" => Ok(CaseKind::SnakeCase),
            "kebab" | "kebabcase" | "dash" | "dashcase" => Ok(CaseKind::KebabCase),
            "constant" | "constantcase" | "screamingsnake" | "screamingsnakecase" => {
                Ok(CaseKind::ConstantCase)
            }
            _ => Err(ParseCaseKindError::new(s)),
        }
    }
}
