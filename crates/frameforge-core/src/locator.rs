//! Document locators and the fetcher seam.
//!
//! A locator is parsed from a user-supplied design URL. Fetching itself is an
//! external concern: this crate only defines the [`DocumentFetcher`] trait.

use std::fmt;

use url::Url;

use crate::document::DocumentResponse;
use crate::errors::{FetchError, LocatorError};

/// Identifies a design file and, optionally, one node inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocator {
    pub file_id: String,
    pub node_id: Option<String>,
}

impl DocumentLocator {
    /// Parse a `https://www.figma.com/file/<id>/...` or `/design/<id>/...` URL.
    ///
    /// A `node-id` query parameter is kept with `-` separators converted to
    /// `:` as the API expects.
    pub fn parse(input: &str) -> Result<Self, LocatorError> {
        let url = Url::parse(input.trim()).map_err(|e| LocatorError::InvalidUrl {
            url: input.to_string(),
            reason: e.to_string(),
        })?;

        let host = url.host_str().unwrap_or_default();
        if host != "figma.com" && !host.ends_with(".figma.com") {
            return Err(LocatorError::NotADesignUrl {
                url: input.to_string(),
            });
        }

        let mut segments = url.path_segments().into_iter().flatten();
        match segments.next() {
            Some("file") | Some("design") => {}
            _ => {
                return Err(LocatorError::NotADesignUrl {
                    url: input.to_string(),
                })
            }
        }

        let file_id = segments
            .next()
            .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric()))
            .ok_or_else(|| LocatorError::MissingFileId {
                url: input.to_string(),
            })?
            .to_string();

        let node_id = url
            .query_pairs()
            .find(|(key, _)| key == "node-id")
            .map(|(_, value)| value.replace('-', ":"))
            .filter(|id| !id.is_empty());

        Ok(Self { file_id, node_id })
    }

    /// REST path relative to the API base.
    pub fn api_path(&self) -> String {
        match &self.node_id {
            Some(node_id) => format!(
                "files/{}/nodes?ids={}",
                self.file_id,
                node_id.replace(':', "%3A")
            ),
            None => format!("files/{}", self.file_id),
        }
    }
}

impl fmt::Display for DocumentLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node_id {
            Some(node_id) => write!(f, "{}#{}", self.file_id, node_id),
            None => f.write_str(&self.file_id),
        }
    }
}

/// A personal access token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Turns a locator plus credentials into a document response.
pub trait DocumentFetcher {
    fn fetch(
        &self,
        locator: &DocumentLocator,
        token: &AccessToken,
    ) -> Result<DocumentResponse, FetchError>;
}
