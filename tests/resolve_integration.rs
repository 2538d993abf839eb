//! Integration tests for URL resolution using wiremock registries

use pkg_score::resolve::{Resolver, npm::Registry};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver(registry_url: &str) -> Resolver {
    Resolver::new(Registry::new(registry_url).unwrap())
}

#[tokio::test]
async fn test_github_url_resolves_to_itself() {
    // No registry involvement for GitHub URLs
    let resolver = resolver("http://127.0.0.1:1");

    let spec = resolver.resolve("https://github.com/expressjs/express").await.unwrap();
    assert_eq!(spec.url().as_str(), "https://github.com/expressjs/express");
    assert_eq!(spec.owner(), "expressjs");
    assert_eq!(spec.repo(), "express");
}

#[tokio::test]
async fn test_github_url_with_extra_path_is_normalized() {
    let resolver = resolver("http://127.0.0.1:1");

    let spec = resolver.resolve("https://github.com/nodejs/node/tree/main/lib").await.unwrap();
    assert_eq!(spec.url().as_str(), "https://github.com/nodejs/node");
}

#[tokio::test]
async fn test_npm_package_resolves_to_declared_repository() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/express"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "express",
            "repository": {
                "type": "git",
                "url": "git+https://github.com/expressjs/express.git"
            }
        })))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());

    let spec = resolver.resolve("https://www.npmjs.com/package/express").await.unwrap();
    assert_eq!(spec.url().as_str(), "https://github.com/expressjs/express");
}

#[tokio::test]
async fn test_npm_package_with_string_repository_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cookie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "repository": "git://github.com/jshttp/cookie.git"
        })))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());

    let spec = resolver.resolve("https://www.npmjs.com/package/cookie").await.unwrap();
    assert_eq!(spec.url().as_str(), "https://github.com/jshttp/cookie");
}

#[tokio::test]
async fn test_npm_package_without_repository_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/left-pad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "left-pad"
        })))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());

    let err = resolver.resolve("https://www.npmjs.com/package/left-pad").await.unwrap_err();
    assert!(err.to_string().contains("does not declare a source repository"));
}

#[tokio::test]
async fn test_unknown_npm_package_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());

    let err = resolver.resolve("https://www.npmjs.com/package/no-such-package").await.unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_registry_server_error_fails_resolution() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let resolver = resolver(&mock_server.uri());
    let _ = resolver.resolve("https://www.npmjs.com/package/express").await.unwrap_err();
}

#[tokio::test]
async fn test_unclassifiable_url_fails_without_lookup() {
    let resolver = resolver("http://127.0.0.1:1");

    let err = resolver.resolve("https://gitlab.com/inkscape/inkscape").await.unwrap_err();
    assert!(err.to_string().contains("neither a GitHub repository URL nor an npm package URL"));
}
