//! Document responses returned by the file and nodes endpoints.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::raw::RawNode;

/// A `nodes` map entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeEntry {
    #[serde(default)]
    pub document: Option<RawNode>,
}

/// Either a node-scoped response (`nodes`) or a whole-file response
/// (`document`). Unrelated top-level fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<IndexMap<String, NodeEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<RawNode>,
}

impl DocumentResponse {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(Self::parse(json)?)
    }

    /// Parse a response of any nesting depth.
    ///
    /// Each node level costs two levels of JSON nesting, so the default
    /// recursion limit would reject documents deeper than about 60 nodes.
    /// The stack grows on demand instead.
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let response = Self::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Ok(response)
    }

    /// Wrap a single node as a whole-file response.
    pub fn from_document(document: RawNode) -> Self {
        Self {
            nodes: None,
            document: Some(document),
        }
    }

    /// The root node to generate from.
    ///
    /// A `nodes` map takes precedence; its first entry in document order is
    /// used. `None` when neither shape yields a node.
    pub fn root(&self) -> Option<&RawNode> {
        match &self.nodes {
            Some(nodes) => nodes.values().next()?.document.as_ref(),
            None => self.document.as_ref(),
        }
    }
}
