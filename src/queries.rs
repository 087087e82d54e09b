//! GraphQL document and path filter for the movie list query.

/// Query fetching one page of movie items.
///
/// The executor binds `first`, `offset`, `sort` and `parentPathQuery` at
/// run time; nothing is interpolated here. Image URLs are resolved
/// absolutely at a fixed 300px width so both tiers render the same asset.
pub const LIST_MOVIES_QUERY: &str = r#"
query(
    $first: Int!,
    $offset: Int!,
    $sort: String!,
    $parentPathQuery: String!
) {
  guillotine {
    query(
        contentTypes: ["com.enonic.app.samples_react4xp:movie"],
        query: $parentPathQuery,
        first: $first,
        offset: $offset,
        sort: $sort
    ) {
      ... on com_enonic_app_samples_react4xp_Movie {
        _id
        displayName
        data {
          year
          description
          actor
          image {
            ... on media_Image {
              imageUrl(type: absolute, scale: "width(300)")
            }
          }
        }
      }
    }
  }
}
"#;

/// Build the filter expression restricting results to descendants of
/// `parent_path`.
///
/// The path is interpolated verbatim. Escaping is the caller's contract:
/// a path containing filter syntax yields a filter that matches the wrong
/// content, not an error here.
///
/// # Examples
///
/// ```
/// use guillotine_movies::build_parent_path_query;
///
/// assert_eq!(
///     build_parent_path_query("/movies"),
///     "_parentPath = '/content/movies'",
/// );
/// ```
#[must_use]
pub fn build_parent_path_query(parent_path: &str) -> String {
    format!("_parentPath = '/content{parent_path}'")
}
