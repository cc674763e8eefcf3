//! Upload flow against mocked Pinata and gateway HTTP servers

use std::sync::Arc;

use jobhive_core::{Config, RetryPolicy, UploadCategory, UploadError, UploadRequest};
use jobhive_services::{AssetUploadService, NoSession};
use jobhive_storage::{build_http_client, create_gateway, create_storage};
use mockito::Matcher;

fn service_for(server: &mockito::ServerGuard) -> AssetUploadService {
    let config = Config::new("test-jwt")
        .with_pinata_urls(server.url(), server.url())
        .with_gateway_base_url(server.url())
        .with_probe_retry(RetryPolicy::immediate(3));
    let client = build_http_client(&config).unwrap();
    let storage = create_storage(&config, client.clone()).unwrap();
    let gateway = create_gateway(&config, client);
    AssetUploadService::new(storage, gateway, Arc::new(config))
}

async fn mock_upload(server: &mut mockito::ServerGuard, cid: &str) -> mockito::Mock {
    server
        .mock("POST", "/v3/files")
        .match_header("authorization", "Bearer test-jwt")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"data":{{"id":"f-1","cid":"{}"}}}}"#, cid))
        .create_async()
        .await
}

async fn mock_listing(
    server: &mut mockito::ServerGuard,
    cid: &str,
    files: &str,
) -> mockito::Mock {
    server
        .mock("GET", "/v3/files/public")
        .match_query(Matcher::UrlEncoded("cid".into(), cid.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"data":{{"files":{}}}}}"#, files))
        .create_async()
        .await
}

#[tokio::test]
async fn test_resume_upload_pinned_and_accessible() {
    let mut server = mockito::Server::new_async().await;
    let upload = mock_upload(&mut server, "bafyresume").await;
    let listing = mock_listing(
        &mut server,
        "bafyresume",
        r#"[{"id":"f-1","cid":"bafyresume"}]"#,
    )
    .await;
    let probe = server
        .mock("HEAD", "/ipfs/bafyresume")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let service = service_for(&server);
    let request = UploadRequest::new(vec![1u8; 4096], "application/pdf", UploadCategory::Resume)
        .with_owner("u1");

    let asset = service.upload(request, &NoSession).await.unwrap();

    assert_eq!(asset.content_id, "bafyresume");
    assert_eq!(asset.public_url, format!("{}/ipfs/bafyresume", server.url()));
    assert!(asset.object_name.starts_with("resume-u1-"));
    assert!(asset.pin_confirmed);
    assert!(asset.accessibility_confirmed);

    upload.assert_async().await;
    listing.assert_async().await;
    probe.assert_async().await;
}

#[tokio::test]
async fn test_gateway_never_serves_content() {
    let mut server = mockito::Server::new_async().await;
    let _upload = mock_upload(&mut server, "bafyslow").await;
    let _listing = mock_listing(
        &mut server,
        "bafyslow",
        r#"[{"id":"f-1","cid":"bafyslow"}]"#,
    )
    .await;
    let probe = server
        .mock("HEAD", "/ipfs/bafyslow")
        .with_status(404)
        .expect(3)
        .create_async()
        .await;

    let service = service_for(&server);
    let request = UploadRequest::new(vec![1u8; 64], "image/png", UploadCategory::ProfileImage)
        .with_owner("u1");

    let asset = service.upload(request, &NoSession).await.unwrap();

    assert!(asset.pin_confirmed);
    assert!(!asset.accessibility_confirmed);
    probe.assert_async().await;
}

#[tokio::test]
async fn test_unpinned_upload_fails_without_probing() {
    let mut server = mockito::Server::new_async().await;
    let _upload = mock_upload(&mut server, "bafyghost").await;
    let _listing = mock_listing(&mut server, "bafyghost", "[]").await;
    let probe = server
        .mock("HEAD", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = service_for(&server);
    let request = UploadRequest::new(
        vec![1u8; 64],
        "application/pdf",
        UploadCategory::CompanyLicense,
    )
    .allow_anonymous(true);

    let err = service.upload(request, &NoSession).await.unwrap_err();

    assert_eq!(
        err,
        UploadError::PinNotConfirmed {
            content_id: "bafyghost".to_string()
        }
    );
    probe.assert_async().await;
}

#[tokio::test]
async fn test_backend_rejection_is_upload_failed() {
    let mut server = mockito::Server::new_async().await;
    let _upload = server
        .mock("POST", "/v3/files")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;
    let listing = server
        .mock("GET", "/v3/files/public")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = service_for(&server);
    let request = UploadRequest::new(vec![1u8; 64], "application/pdf", UploadCategory::Resume)
        .with_owner("u1");

    let err = service.upload(request, &NoSession).await.unwrap_err();

    match err {
        UploadError::UploadFailed(msg) => assert!(msg.contains("500")),
        other => panic!("expected UploadFailed, got {:?}", other),
    }
    listing.assert_async().await;
}

#[tokio::test]
async fn test_invalid_type_never_reaches_the_network() {
    let mut server = mockito::Server::new_async().await;
    let upload = server
        .mock("POST", "/v3/files")
        .expect(0)
        .create_async()
        .await;

    let service = service_for(&server);
    let request = UploadRequest::new(vec![1u8; 64], "image/webp", UploadCategory::ProfileImage)
        .with_owner("u1");

    let err = service.upload(request, &NoSession).await.unwrap_err();

    assert!(matches!(err, UploadError::InvalidMediaType { .. }));
    upload.assert_async().await;
}

#[tokio::test]
async fn test_verify_existing_content() {
    let mut server = mockito::Server::new_async().await;
    let _listing = mock_listing(&mut server, "bafyold", r#"[{"id":"f-9","cid":"bafyold"}]"#).await;
    let _probe = server
        .mock("HEAD", "/ipfs/bafyold")
        .with_status(200)
        .create_async()
        .await;

    let service = service_for(&server);
    let report = service.verify("bafyold").await.unwrap();

    assert!(report.pin_confirmed);
    assert!(report.accessibility_confirmed);
    assert_eq!(report.public_url, format!("{}/ipfs/bafyold", server.url()));
}
