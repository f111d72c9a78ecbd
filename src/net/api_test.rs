use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn set_auth_token_is_shared_between_clones() {
    let api = HttpApi::new(ApiConfig::default());
    let other = api.clone();
    api.set_auth_token(Some("tok"));
    assert_eq!(other.authorization_header().as_deref(), Some("Bearer tok"));
    other.set_auth_token(None);
    assert!(api.auth_token().is_none());
    assert!(api.authorization_header().is_none());
}

#[test]
fn status_error_names_endpoint() {
    let err = ApiError::Status { endpoint: LOGIN_PATH, status: 401 };
    assert_eq!(err.to_string(), "/auth/login failed: 401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let api = HttpApi::new(ApiConfig::default());
    let creds = Credentials { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    let login = futures::executor::block_on(api.login(&creds));
    assert!(matches!(login, Err(ApiError::Unavailable)));
    let me = futures::executor::block_on(api.me());
    assert!(matches!(me, Err(ApiError::Unavailable)));
}
