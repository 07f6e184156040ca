//! Tests for the per-request diagnostic event

use std::io;
use std::sync::{Arc, Mutex};

use thecatapi::{BreedParams, CatApi, CatApiConfig};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Collects everything the fmt subscriber writes
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_request_url_is_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = CatApi::with_config(CatApiConfig::new().with_base_url(mock_server.uri()))
        .expect("Failed to create client");
    client
        .get_breeds(BreedParams::new().with_limit(5).with_page(2))
        .await
        .expect("Get breeds should succeed");

    let output = logs.contents();
    let expected_url = format!("{}/breeds?limit=5&page=2", mock_server.uri());

    assert!(output.contains("sending request"), "logs: {}", output);
    assert!(output.contains("method=GET"), "logs: {}", output);
    assert!(output.contains(&expected_url), "logs: {}", output);
}
