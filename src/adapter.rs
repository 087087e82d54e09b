//! Adapts the raw Guillotine response into flat movie records.

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::models::{ActorField, MovieItem, MovieRecord};

/// Failures surfaced while adapting a query response.
#[derive(Debug, Error)]
pub enum MovieListError {
    /// The response does not contain a `data.guillotine.query` array.
    #[error("response has no data.guillotine.query array")]
    MissingQueryPath,
    /// An entry passed the movie filter but does not decode as a movie.
    #[error("malformed movie entry at index {index}: {source}")]
    MalformedEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Extract the display records from a raw query response.
///
/// Entries that are not objects carrying a `data` key are skipped: the
/// query's type union yields such items for non-movie content. A retained
/// entry missing `displayName` is a malformed response rather than
/// another content type, and fails the whole call.
///
/// # Errors
///
/// [`MovieListError::MissingQueryPath`] if the nested query array is
/// absent; [`MovieListError::MalformedEntry`] if a retained entry does
/// not decode as a movie.
pub fn extract_movie_array(response: &Value) -> Result<Vec<MovieRecord>, MovieListError> {
    let entries = response
        .get("data")
        .and_then(|data| data.get("guillotine"))
        .and_then(|graph| graph.get("query"))
        .and_then(Value::as_array)
        .ok_or(MovieListError::MissingQueryPath)?;

    entries
        .iter()
        .enumerate()
        .filter(|(index, entry)| {
            let keep = entry
                .as_object()
                .is_some_and(|fields| fields.contains_key("data"));
            if !keep {
                debug!("skipping non-movie entry at index {index}");
            }
            keep
        })
        .map(|(index, entry)| {
            let item: MovieItem = serde_json::from_value(entry.clone())
                .map_err(|source| MovieListError::MalformedEntry { index, source })?;
            Ok(into_record(item))
        })
        .collect()
}

fn into_record(item: MovieItem) -> MovieRecord {
    let data = item.data;
    MovieRecord {
        id: item.id,
        title: item.display_name.trim().to_owned(),
        image_url: data.image.and_then(|image| image.image_url),
        year: data.year,
        description: data.description,
        actors: normalise_actors(data.actor),
    }
}

/// Coerce the actor field to a list of clean names.
///
/// A lone value counts as a one-element list. Only string elements
/// survive, trimmed, with blanks dropped; order is preserved.
fn normalise_actors(field: Option<ActorField>) -> Vec<String> {
    let raw = match field {
        Some(ActorField::Many(values)) => values,
        Some(ActorField::One(value)) => vec![value],
        None => Vec::new(),
    };
    raw.into_iter()
        .filter_map(|value| match value {
            Value::String(name) => {
                let trimmed = name.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            _ => None,
        })
        .collect()
}
