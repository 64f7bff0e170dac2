//! Landmark and heading detection from layer names.

use std::sync::OnceLock;

use convert_case::{Boundary, Case, Casing};
use regex::Regex;

/// Sectioning element a container maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Header,
    Footer,
    Nav,
    Main,
    Aside,
}

impl Landmark {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Nav => "nav",
            Self::Main => "main",
            Self::Aside => "aside",
        }
    }
}

const LANDMARK_KEYWORDS: &[(Landmark, &[&str])] = &[
    (Landmark::Header, &["header", "top_bar", "app_bar", "toolbar"]),
    (Landmark::Footer, &["footer", "bottom_bar"]),
    (Landmark::Nav, &["nav", "navbar", "navigation", "menu"]),
    (Landmark::Main, &["main", "content"]),
    (Landmark::Aside, &["aside", "sidebar", "side_bar", "drawer"]),
];

const HEADING_KEYWORDS: &[&str] = &["heading", "title", "headline"];

const DEFAULT_HEADING_LEVEL: u8 = 2;

/// `h1`..`h6` as a whole snake-case word.
fn heading_level_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?:^|_)h([1-6])(?:_|$)").ok())
        .as_ref()
}

/// Snake-case a layer name, splitting on separators and camel humps but not
/// on digits, so `H1 Title` stays `h1_title`.
fn snake_name(name: &str) -> String {
    name.with_boundaries(&[
        Boundary::Space,
        Boundary::Underscore,
        Boundary::Hyphen,
        Boundary::LowerUpper,
    ])
    .to_case(Case::Snake)
}

/// Whole-word keyword match on a snake-case name.
fn has_keyword(snake: &str, keyword: &str) -> bool {
    format!("_{}_", snake).contains(&format!("_{}_", keyword))
}

/// Landmark for a layer name, first match in declaration order.
pub fn detect_landmark(name: &str) -> Option<Landmark> {
    let snake = snake_name(name);
    LANDMARK_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| has_keyword(&snake, k)))
        .map(|(landmark, _)| *landmark)
}

/// Heading level for a text layer name: an explicit `h1`..`h6` word wins,
/// otherwise heading-like words map to level 2.
pub fn heading_level(name: &str) -> Option<u8> {
    let snake = snake_name(name);
    if let Some(level) = heading_level_pattern()
        .and_then(|re| re.captures(&snake))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
    {
        return Some(level);
    }
    HEADING_KEYWORDS
        .iter()
        .any(|k| has_keyword(&snake, k))
        .then_some(DEFAULT_HEADING_LEVEL)
}
