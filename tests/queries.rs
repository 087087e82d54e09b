//! Behaviour of the query template and the path filter builder.

use guillotine_movies::{LIST_MOVIES_QUERY, build_parent_path_query};
use rstest::rstest;

#[test]
fn query_declares_all_four_variables() {
    for declaration in [
        "$first: Int!",
        "$offset: Int!",
        "$sort: String!",
        "$parentPathQuery: String!",
    ] {
        assert!(
            LIST_MOVIES_QUERY.contains(declaration),
            "missing declaration {declaration}"
        );
    }
}

#[test]
fn query_targets_the_movie_content_type() {
    assert!(
        LIST_MOVIES_QUERY.contains(r#"contentTypes: ["com.enonic.app.samples_react4xp:movie"]"#)
    );
    assert!(LIST_MOVIES_QUERY.contains("... on com_enonic_app_samples_react4xp_Movie"));
}

#[test]
fn query_requests_a_fixed_image_scale() {
    assert!(LIST_MOVIES_QUERY.contains(r#"imageUrl(type: absolute, scale: "width(300)")"#));
}

#[rstest]
#[case("/movies", "_parentPath = '/content/movies'")]
#[case("/movies/action", "_parentPath = '/content/movies/action'")]
#[case("", "_parentPath = '/content'")]
fn parent_path_filter_interpolates_verbatim(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(build_parent_path_query(path), expected);
}

#[test]
fn parent_path_filter_does_not_escape() {
    // Escaping is the caller's contract; a quote passes straight through.
    assert_eq!(
        build_parent_path_query("/a'b"),
        "_parentPath = '/content/a'b'"
    );
}
