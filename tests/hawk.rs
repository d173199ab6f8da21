use {
    http::{request::Parts, Request},
    scratchstack_hawk::{
        authenticate_http_request, authenticate_request, get_authorization_header, get_authorization_header_at,
        service_for_credentials_fn, Credentials, GetCredentialsRequest, HawkError, HawkOptions,
    },
    std::collections::HashMap,
    tower::BoxError,
};

const KEY: &str = "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn";

async fn get_credentials(req: GetCredentialsRequest) -> Result<Option<Credentials>, BoxError> {
    let algorithm = match req.id() {
        "123456" => "hmac-sha-256",
        "abcdef" => "hmac-sha-1",
        _ => return Ok(None),
    };

    let extra = HashMap::from([("user".to_string(), "steve".to_string())]);
    Ok(Some(Credentials::builder().id(req.id()).key(KEY).algorithm(algorithm).extra(extra).build()?))
}

fn client_credentials(id: &str, algorithm: &str) -> Credentials {
    Credentials::builder().id(id).key(KEY).algorithm(algorithm).build().unwrap()
}

fn request_parts(uri: &str, host: &str, authorization: Option<&str>) -> Parts {
    let mut builder = Request::get(uri).header("Host", host);
    if let Some(authorization) = authorization {
        builder = builder.header("Authorization", authorization);
    }
    builder.body(()).unwrap().into_parts().0
}

async fn authenticate(parts: &Parts) -> Result<scratchstack_hawk::AuthenticatorResponse, HawkError> {
    let mut svc = service_for_credentials_fn(get_credentials);
    authenticate_request(parts, false, &mut svc, &HawkOptions::default()).await.map_err(|e| e.into_error())
}

#[test_log::test(tokio::test)]
async fn test_round_trip() {
    for (id, algorithm) in [("123456", "hmac-sha-256"), ("abcdef", "hmac-sha-1")] {
        let authorization = get_authorization_header_at(
            &client_credentials(id, algorithm),
            "GET",
            "/resource/4?filter=a",
            "example.com",
            8080,
            Some("some-app-data"),
            1353809207,
        );

        let parts = request_parts("/resource/4?filter=a", "example.com:8080", Some(&authorization));
        let response = authenticate(&parts).await.unwrap();
        assert_eq!(response.credentials().id(), id);
        assert_eq!(response.credentials().get("user"), Some("steve"));
        assert_eq!(response.ext(), Some("some-app-data"));
    }
}

#[test_log::test(tokio::test)]
async fn test_known_token() {
    let authorization =
        r#"Hawk id="123456", ts="1353809207", ext="some-app-data", mac="2jyAL220NIElneg2reY0ENxW9di9p4PBKs4dsH/7Q6s=""#;
    assert_eq!(
        get_authorization_header_at(
            &client_credentials("123456", "hmac-sha-256"),
            "GET",
            "/resource/4?filter=a",
            "example.com",
            8080,
            Some("some-app-data"),
            1353809207
        ),
        authorization
    );

    let parts = request_parts("/resource/4?filter=a", "example.com:8080", Some(authorization));
    authenticate(&parts).await.unwrap();
}

#[test_log::test(tokio::test)]
async fn test_current_time() {
    let authorization = get_authorization_header(
        &client_credentials("123456", "hmac-sha-256"),
        "GET",
        "/resource/4?filter=a",
        "example.com",
        80,
        None,
    );

    let parts = request_parts("/resource/4?filter=a", "example.com", Some(&authorization));
    let response = authenticate(&parts).await.unwrap();
    assert_eq!(response.ext(), None);
}

#[test_log::test(tokio::test)]
async fn test_tampered_request() {
    let authorization = get_authorization_header_at(
        &client_credentials("123456", "hmac-sha-256"),
        "GET",
        "/resource/4?filter=a",
        "example.com",
        8080,
        Some("some-app-data"),
        1353809207,
    );

    let cases = [
        request_parts("/resource/4?filter=b", "example.com:8080", Some(&authorization)),
        request_parts("/resource/5?filter=a", "example.com:8080", Some(&authorization)),
        request_parts("/resource/4?filter=a", "example.com:8081", Some(&authorization)),
        request_parts("/resource/4?filter=a", "example.net:8080", Some(&authorization)),
        request_parts("/resource/4?filter=a", "example.com", Some(&authorization)),
    ];

    for parts in cases {
        let e = authenticate(&parts).await.unwrap_err();
        assert!(matches!(e, HawkError::BadMac), "{:?}", parts);
    }

    let mut parts = request_parts("/resource/4?filter=a", "example.com:8080", Some(&authorization));
    parts.method = http::Method::POST;
    assert!(matches!(authenticate(&parts).await.unwrap_err(), HawkError::BadMac));

    let altered_ext = authorization.replace("some-app-data", "other-app-data");
    let parts = request_parts("/resource/4?filter=a", "example.com:8080", Some(&altered_ext));
    assert!(matches!(authenticate(&parts).await.unwrap_err(), HawkError::BadMac));
}

#[test_log::test(tokio::test)]
async fn test_query_string_token() {
    let authorization = get_authorization_header_at(
        &client_credentials("123456", "hmac-sha-256"),
        "GET",
        "/resource/4?filter=a",
        "example.com",
        8080,
        Some("some-app-data"),
        1353809207,
    );
    let encoded: String = form_urlencoded::byte_serialize(authorization.as_bytes()).collect();

    let uri = format!("/resource/4?filter=a&hawk={}", encoded);
    let parts = request_parts(&uri, "example.com:8080", None);
    let response = authenticate(&parts).await.unwrap();
    assert_eq!(response.ext(), Some("some-app-data"));

    let uri = format!("/resource/4?hawk={}&filter=a", encoded);
    let parts = request_parts(&uri, "example.com:8080", None);
    authenticate(&parts).await.unwrap();

    let uri = format!("/resource/4?filter=b&hawk={}", encoded);
    let parts = request_parts(&uri, "example.com:8080", None);
    assert!(matches!(authenticate(&parts).await.unwrap_err(), HawkError::BadMac));
}

#[test_log::test(tokio::test)]
async fn test_query_string_token_without_other_parameters() {
    let authorization = get_authorization_header_at(
        &client_credentials("abcdef", "hmac-sha-1"),
        "GET",
        "/resource/4",
        "example.com",
        443,
        None,
        1353809207,
    );
    let encoded: String = form_urlencoded::byte_serialize(authorization.as_bytes()).collect();

    let request = Request::get(format!("/resource/4?hawk={}", encoded))
        .header("Host", "example.com")
        .body(())
        .unwrap();
    let mut svc = service_for_credentials_fn(get_credentials);
    let response = authenticate_http_request(&request, true, &mut svc, &HawkOptions::default()).await.unwrap();
    assert_eq!(response.credentials().id(), "abcdef");
}

#[test_log::test(tokio::test)]
async fn test_unknown_id() {
    let authorization = get_authorization_header_at(
        &client_credentials("nobody", "hmac-sha-256"),
        "GET",
        "/resource/4?filter=a",
        "example.com",
        8080,
        Some("some-app-data"),
        1353809207,
    );

    let parts = request_parts("/resource/4?filter=a", "example.com:8080", Some(&authorization));
    let mut svc = service_for_credentials_fn(get_credentials);
    let failure = authenticate_request(&parts, false, &mut svc, &HawkOptions::default()).await.unwrap_err();
    assert!(matches!(failure.error(), HawkError::MissingCredentials));
    assert!(failure.credentials().is_none());
    assert_eq!(failure.ext(), Some("some-app-data"));
}

#[test_log::test(tokio::test)]
async fn test_wrong_key() {
    let credentials =
        Credentials::builder().id("123456").key("not-the-key").algorithm("hmac-sha-256").build().unwrap();
    let authorization = get_authorization_header_at(
        &credentials,
        "GET",
        "/resource/4?filter=a",
        "example.com",
        8080,
        None,
        1353809207,
    );

    let parts = request_parts("/resource/4?filter=a", "example.com:8080", Some(&authorization));
    let mut svc = service_for_credentials_fn(get_credentials);
    let failure = authenticate_request(&parts, false, &mut svc, &HawkOptions::default()).await.unwrap_err();
    assert!(matches!(failure.error(), HawkError::BadMac));
    assert_eq!(failure.credentials().map(Credentials::id), Some("123456"));
    assert_eq!(failure.to_string(), "Bad mac");
}
