//! Pure query-building and response-shaping helpers for a Guillotine
//! movie list.
//!
//! A server-side request handler and a client-side rendering component
//! share these entry points so the request and response shapes stay in
//! lockstep across tiers:
//!
//! - [`LIST_MOVIES_QUERY`] — the GraphQL document to execute;
//! - [`build_parent_path_query`] — the `_parentPath` filter bound as the
//!   `parentPathQuery` variable;
//! - [`extract_movie_array`] — the raw response flattened into
//!   [`MovieRecord`]s.
//!
//! Executing the query is the caller's job; this crate does no I/O and
//! holds no state.

pub mod adapter;
pub mod models;
pub mod queries;

pub use adapter::{MovieListError, extract_movie_array};
pub use models::{MovieListVariables, MovieRecord};
pub use queries::{LIST_MOVIES_QUERY, build_parent_path_query};
