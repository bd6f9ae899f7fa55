use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

use crate::policy::types::AuthorMatch;
use crate::types::errors::{Error, ErrorKind, Result};

/// One block of ownership rules: the directory-level rules of an `OWNERS`
/// file, or the fragment attached to a filter pattern.
///
/// Only `approvers` is evaluated by the resolver; the other lists are carried
/// for collaborators (reviewer assignment, labelling).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnersConfig {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub approvers: Vec<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub required_reviewers: Vec<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl OwnersConfig {
    /// True if any of `authors` is listed in `approvers`.
    pub fn has_approver(&self, authors: &BTreeSet<String>, mode: AuthorMatch) -> bool {
        self.approvers
            .iter()
            .any(|approver| authors.iter().any(|a| mode.matches(a, approver)))
    }

    /// Approvers as a set; duplicates in the document are irrelevant.
    pub fn approver_set(&self) -> BTreeSet<String> {
        self.approvers.iter().cloned().collect()
    }
}

/// A parsed `OWNERS` declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnersFile {
    /// Reserved; accepted and round-tripped but never evaluated.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "serde_yaml::Mapping::is_empty")]
    pub options: serde_yaml::Mapping,
    #[serde(flatten)]
    pub config: OwnersConfig,
    /// Regex pattern (matched against the path relative to the declaring
    /// directory) mapped to *additional* rules for matching files.
    #[serde(default, deserialize_with = "nullable_fragments", skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, OwnersConfig>,
}

impl OwnersFile {
    /// Decode a declaration from raw bytes.
    ///
    /// A blank or comment-only document is an empty declaration: it exists,
    /// but names no approvers.
    ///
    /// # Errors
    /// Returns `MalformedDeclaration` when the bytes are not a YAML mapping of
    /// the expected shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::MalformedDeclaration, e.to_string()))?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
            .map_err(|e| Error::new(ErrorKind::MalformedDeclaration, e.to_string()))
    }

    /// Render back to YAML, e.g. for fixtures.
    ///
    /// # Errors
    /// Returns `MalformedDeclaration` if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::new(ErrorKind::MalformedDeclaration, e.to_string()))
    }
}

// `approvers:` with no value is a null in YAML; treat it as an empty list.
fn nullable<'de, D, T>(de: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

fn nullable_fragments<'de, D>(de: D) -> std::result::Result<BTreeMap<String, OwnersConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<OwnersConfig>>> = Option::deserialize(de)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(pattern, frag)| (pattern, frag.unwrap_or_default()))
        .collect())
}
