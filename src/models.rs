//! Shared schema types for the movie list query and its response.
//!
//! The query template and the adapter both lean on these types, so a
//! field rename in the Guillotine content type is a one-place change.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Variables bound by the executor when running
/// [`LIST_MOVIES_QUERY`](crate::queries::LIST_MOVIES_QUERY).
///
/// Serialises to the GraphQL `variables` object. `sort` and
/// `parent_path_query` are opaque to this crate and passed through
/// verbatim; build the latter with
/// [`build_parent_path_query`](crate::queries::build_parent_path_query).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListVariables {
    pub first: u32,
    pub offset: u32,
    pub sort: String,
    pub parent_path_query: String,
}

/// A well-formed movie entry from the query's type union.
///
/// `displayName` is required: an entry that carries a `data` block but no
/// display name is a malformed response, not another content type.
#[derive(Debug, Deserialize)]
pub struct MovieItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub data: MovieData,
}

/// The nested `data` block of a movie entry. Every field is optional.
#[derive(Debug, Deserialize)]
pub struct MovieData {
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub actor: Option<ActorField>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// The `actor` field as Guillotine returns it: one value or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActorField {
    Many(Vec<Value>),
    One(Value),
}

/// Resolved image reference.
#[derive(Debug, Deserialize)]
pub struct ImageRef {
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Flat display record handed to the rendering layer.
///
/// `title` carries no surrounding whitespace and `actors` holds only
/// non-empty trimmed names in their original order. `year` and
/// `description` pass through untouched; their types belong to the
/// content type, not to this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub image_url: Option<String>,
    pub year: Option<Value>,
    pub description: Option<Value>,
    pub actors: Vec<String>,
}
