use crate::client::router::Route;

/// Expect the home route to render back to the root path
#[test]
fn home_renders_root_path() {
    assert_eq!(Route::Home {}.to_string(), "/");
}

/// Expect the confirm route to render the token into its path segment
#[test]
fn confirm_renders_token_segment() {
    let route = Route::Confirm {
        token: "abc123".to_string(),
    };

    assert_eq!(route.to_string(), "/confirm/abc123");
}

/// Expect the catch-all to render its captured segments back as a path
#[test]
fn not_found_renders_captured_segments() {
    let route = Route::NotFound {
        segments: vec!["unknown".to_string()],
    };

    assert_eq!(route.to_string(), "/unknown");
}
