//! Generation options and the brand palette.

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPONENT_NAME: &str = "FigmaComponent";

/// Colors used when a text node has no color of its own or inherited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandPalette {
    /// Brand colors, the first one being the primary text fallback.
    pub brand: Vec<String>,
    pub neutral: String,
    pub placeholder: String,
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self {
            brand: Vec::new(),
            neutral: "#000000".to_string(),
            placeholder: "#999999".to_string(),
        }
    }
}

impl BrandPalette {
    /// First brand color, then neutral, then the placeholder gray.
    pub fn fallback_text_color(&self) -> &str {
        self.brand
            .iter()
            .map(String::as_str)
            .chain([self.neutral.as_str(), self.placeholder.as_str()])
            .find(|c| !c.is_empty())
            .unwrap_or("#999999")
    }
}

/// Which emitter output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Nested `createElement(...)` expression for sandboxed preview.
    #[default]
    Expression,
    /// React component source.
    Component,
    Both,
}

impl Target {
    pub fn wants_expression(&self) -> bool {
        matches!(self, Self::Expression | Self::Both)
    }

    pub fn wants_component(&self) -> bool {
        matches!(self, Self::Component | Self::Both)
    }
}

/// Options shared by both emitters. Every field has a default, so a partial
/// JSON config file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodegenOptions {
    pub component_name: String,
    /// Also export a `React.memo` wrapped alias.
    pub memo: bool,
    /// Attach shared text style tokens as class names.
    pub text_tokens: bool,
    /// Inline placeholder markup for vector-like nodes.
    pub icons: bool,
    pub target: Target,
    pub palette: BrandPalette,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            memo: false,
            text_tokens: true,
            icons: true,
            target: Target::default(),
            palette: BrandPalette::default(),
        }
    }
}

impl CodegenOptions {
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    pub fn with_memo(mut self, memo: bool) -> Self {
        self.memo = memo;
        self
    }

    /// The component name as a PascalCase identifier.
    ///
    /// Characters that cannot appear in an identifier are dropped; an empty
    /// result falls back to the default name.
    pub fn component_ident(&self) -> String {
        let pascal: String = self
            .component_name
            .to_case(Case::Pascal)
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        match pascal.chars().next() {
            None => DEFAULT_COMPONENT_NAME.to_string(),
            Some(first) if first.is_ascii_digit() => format!("Figma{}", pascal),
            Some(_) => pascal,
        }
    }
}
