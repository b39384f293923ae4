use std::fs;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blockdoc_http::{Error, RemoteRepository};

#[tokio::test]
async fn fetch_returns_raw_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results/combined_results.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("model,score\nbase,0.91\n"))
        .mount(&server)
        .await;

    let uri = format!("{}/results/", server.uri());

    let bytes = tokio::task::spawn_blocking(move || {
        let repo = RemoteRepository::new(&uri).unwrap();
        repo.fetch("combined_results.csv").unwrap()
    })
    .await
    .unwrap();

    assert_eq!(&bytes[..], &b"model,score\nbase,0.91\n"[..]);
}

#[tokio::test]
async fn fetch_reports_status_on_missing_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/absent.bin"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = format!("{}/", server.uri());

    let err = tokio::task::spawn_blocking(move || {
        let repo = RemoteRepository::new(&uri).unwrap();
        repo.fetch("absent.bin").unwrap_err()
    })
    .await
    .unwrap();

    match err {
        Error::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_to_downloads_once_then_skips() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weights/best.pt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"weights".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let uri = format!("{}/", server.uri());
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("cache").join("best.pt");
    let destination_clone = destination.clone();

    let (first, second) = tokio::task::spawn_blocking(move || {
        let repo = RemoteRepository::new(&uri).unwrap();
        let first = repo.fetch_to("weights/best.pt", &destination_clone).unwrap();
        let second = repo.fetch_to("weights/best.pt", &destination_clone).unwrap();
        (first, second)
    })
    .await
    .unwrap();

    assert!(first);
    assert!(!second);
    assert_eq!(fs::read(&destination).unwrap(), b"weights");
}

#[tokio::test]
async fn fetch_to_leaves_no_file_on_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken.bin"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = format!("{}/", server.uri());
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("broken.bin");
    let destination_clone = destination.clone();

    let result = tokio::task::spawn_blocking(move || {
        let repo = RemoteRepository::new(&uri).unwrap();
        repo.fetch_to("broken.bin", &destination_clone)
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(Error::Status { status: 500, .. })));
    assert!(!destination.exists());
}

#[tokio::test]
async fn fetch_to_existing_file_touches_nothing() {
    // No mock mounted: any request would 404, but none should happen.
    let server = MockServer::start().await;
    let uri = format!("{}/", server.uri());

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("cached.csv");
    fs::write(&destination, "local copy").unwrap();
    let destination_clone = destination.clone();

    let downloaded = tokio::task::spawn_blocking(move || {
        let repo = RemoteRepository::new(&uri).unwrap();
        repo.fetch_to("cached.csv", &destination_clone).unwrap()
    })
    .await
    .unwrap();

    assert!(!downloaded);
    assert_eq!(fs::read_to_string(&destination).unwrap(), "local copy");
}
