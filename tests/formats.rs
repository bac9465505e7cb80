use serde_json::json;
use vimeo_fetch::configs::EndpointsConfig;
use vimeo_fetch::{Video, VimeoError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONFIG_PATH: &str = "/video/42/config";

fn video(server: &MockServer) -> Video {
    Video::with_client(
        &format!("{}/42", server.uri()),
        42,
        reqwest::Client::new(),
        EndpointsConfig::single_host(&server.uri()),
    )
}

fn player_config() -> serde_json::Value {
    json!({
        "request": {
            "files": {
                "progressive": [
                    {"width": 1920, "height": 1080, "quality": "1080p", "url": "https://cdn/1080.mp4"},
                    {"width": 640, "height": 360, "quality": "360p", "url": "https://cdn/360.mp4"},
                    {"width": 1280, "height": 720, "quality": "720p", "url": "https://cdn/720.mp4"}
                ],
                "dash": {
                    "separate_av": true,
                    "default_cdn": "akfire_interconnect_quic",
                    "cdns": {
                        "akfire_interconnect_quic": {"url": "https://cdn/master.json"},
                        "fastly_skyfire": {"url": "https://other/master.json"}
                    }
                }
            }
        }
    })
}

#[tokio::test]
async fn formats_from_player_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(player_config()))
        .expect(1)
        .mount(&server)
        .await;

    let formats = video(&server).formats().await.unwrap();

    let widths: Vec<u32> = formats.progressive.iter().map(|f| f.width).collect();
    assert_eq!(widths, vec![640, 1280, 1920]);
    assert_eq!(formats.progressive.best().unwrap().quality, "1080p");
    assert_eq!(formats.progressive.worst().unwrap().quality, "360p");
    assert_eq!(formats.dash.unwrap().url(), "https://cdn/master.json");
    assert!(formats.hls.is_none());
}

#[tokio::test]
async fn forbidden_config_falls_back_to_embedded_url() {
    let server = MockServer::start().await;
    let signed = format!("{}{}?h=abc", server.uri(), CONFIG_PATH);
    let page = format!(
        r#"<html><script>var config = {{"config_url":"{}","other":"x"}};</script></html>"#,
        signed.replace('/', r"\/")
    );

    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .and(query_param("h", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(player_config()))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .expect(1)
        .mount(&server)
        .await;

    let formats = video(&server).formats().await.unwrap();
    assert_eq!(formats.progressive.len(), 3);
}

#[tokio::test]
async fn fallback_without_embedded_url_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>private</html>"))
        .mount(&server)
        .await;

    let err = video(&server).formats().await.unwrap_err();
    assert!(matches!(err, VimeoError::Parsing(_)), "{:?}", err);
}

#[tokio::test]
async fn failing_fallback_page_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = video(&server).formats().await.unwrap_err();
    assert!(matches!(err, VimeoError::Parsing(_)), "{:?}", err);
}

#[tokio::test]
async fn rejected_signed_config_reports_its_status() {
    let server = MockServer::start().await;
    let signed = format!("{}{}?h=abc", server.uri(), CONFIG_PATH);

    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .and(query_param("h", "abc"))
        .respond_with(ResponseTemplate::new(410))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(format!("\"{}\"", signed.replace('/', r"\/"))),
        )
        .mount(&server)
        .await;

    let err = video(&server).formats().await.unwrap_err();
    assert_eq!(err.status(), Some(410));
}

#[tokio::test]
async fn other_error_statuses_skip_the_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = video(&server).formats().await.unwrap_err();
    assert!(matches!(err, VimeoError::Parsing(_)), "{:?}", err);
}

#[tokio::test]
async fn config_without_files_or_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"request": {}})))
        .mount(&server)
        .await;

    let err = video(&server).formats().await.unwrap_err();
    assert!(matches!(err, VimeoError::Parsing(_)), "{:?}", err);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = video(&server).formats().await.unwrap_err();
    assert!(matches!(err, VimeoError::Decoding(_)), "{:?}", err);
}

#[tokio::test]
async fn metadata_takes_first_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/video/42.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 42,
            "title": "Forty Two",
            "upload_date": "2013-10-15 07:00:43",
            "stats_number_of_plays": 1000,
            "duration": 95,
            "tags": "a, b"
        }])))
        .mount(&server)
        .await;

    let metadata = video(&server).metadata().await.unwrap();
    assert_eq!(metadata.id, 42);
    assert_eq!(metadata.title, "Forty Two");
    assert_eq!(metadata.plays, 1000);
    assert_eq!(metadata.upload_date().unwrap().year(), 2013);
    assert_eq!(metadata.tag_list(), vec!["a", "b"]);
}

#[tokio::test]
async fn metadata_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/video/42.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let err = video(&server).metadata().await.unwrap_err();
    assert!(matches!(err, VimeoError::Parsing(_)), "{:?}", err);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/video/42.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let err = video(&server).metadata().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}
