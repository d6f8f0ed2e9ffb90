use super::*;
use crate::config::HttpConfig;
use serde_json::json;

fn source() -> ReqwestSource {
    ReqwestSource::new(&HttpConfig::default()).unwrap()
}

#[test]
fn endpoint_encodes_segments() {
    let base = Url::parse("https://restcountries.com/v3.1").unwrap();
    let url = endpoint(&base, &["name", "united states/of"]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://restcountries.com/v3.1/name/united%20states%2Fof"
    );
}

#[test]
fn endpoint_tolerates_trailing_slash() {
    let base = Url::parse("https://www.themealdb.com/api/json/v1/1/").unwrap();
    let url = endpoint(&base, &["random.php"]).unwrap();
    assert_eq!(url.as_str(), "https://www.themealdb.com/api/json/v1/1/random.php");
}

#[tokio::test]
async fn decodes_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v3.1/name/peru")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name":{"common":"Peru"}}]"#)
        .create_async()
        .await;

    let url = Url::parse(&format!("{}/v3.1/name/peru", server.url())).unwrap();
    let body = source().get_json(url).await.unwrap();

    assert_eq!(body, json!([{"name": {"common": "Peru"}}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_carries_code() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v3.1/name/atlantis")
        .with_status(404)
        .with_body(r#"{"status":404,"message":"Not Found"}"#)
        .create_async()
        .await;

    let url = Url::parse(&format!("{}/v3.1/name/atlantis", server.url())).unwrap();
    let err = source().get_json(url).await.unwrap_err();

    assert_eq!(err, FetchError::Status(404));
    assert_eq!(format!("Error: {}", err), "Error: 404");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let url = Url::parse(&format!("{}/random.php", server.url())).unwrap();
    let result = source().get_json(url).await;

    tokio_test::assert_err!(&result);
    assert!(matches!(result, Err(FetchError::Decode(_))));
}
