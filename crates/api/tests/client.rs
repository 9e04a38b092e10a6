use api::{
    ClientConfig, Error, ResponseSchema, ResultCount, SearchClient, SearchOptions, SearchRequest,
    SnippetLength,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, schema: ResponseSchema) -> SearchClient {
    let config = ClientConfig {
        base_url: server.uri(),
        response_schema: schema,
        timeout_secs: 5,
    };
    SearchClient::new(&config).expect("client should build")
}

fn sample_body(field: &str) -> serde_json::Value {
    json!({
        field: [{
            "episode_id": "4rOoJ6Egrf8K2IrywzwOMk",
            "episode_name": "Lawn Care 101",
            "show_name": "Gardening Weekly",
            "episode_description": "Everything about grass",
            "picture_uri": "https://i.scdn.co/image/abc",
            "release_date": "2020-01-15",
            "duration_ms": 1_800_000,
            "snippets": [
                { "start_time": "125.430000", "transcript_text": "green grass", "score": 12.5 },
                { "start_time": "30.000000", "transcript_text": "mowing", "score": 8.25 }
            ]
        }]
    })
}

#[tokio::test]
async fn test_search_sends_all_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "green grass"))
        .and(query_param("length", "120"))
        .and(query_param("openai", "true"))
        .and(query_param("results", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body("results")))
        .expect(1)
        .mount(&server)
        .await;

    let options = SearchOptions {
        snippet_length: SnippetLength::Minutes2,
        result_count: ResultCount::new(30),
        show_scores: false,
        use_query_optimization: true,
    };
    let request = SearchRequest::from_options("green grass", &options);

    let entries = client_for(&server, ResponseSchema::Current)
        .search(&request)
        .await
        .expect("search should succeed");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].episode_name, "Lawn Care 101");
    assert_eq!(entries[0].snippets.len(), 2);
}

#[tokio::test]
async fn test_search_legacy_response_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sample_body("unformated_results")),
        )
        .mount(&server)
        .await;

    let entries = client_for(&server, ResponseSchema::Auto)
        .search(&SearchRequest::default())
        .await
        .expect("auto schema should find the legacy field");

    assert_eq!(entries[0].show_name, "Gardening Weekly");
}

#[tokio::test]
async fn test_search_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server, ResponseSchema::Auto)
        .search(&SearchRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_search_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, ResponseSchema::Auto)
        .search(&SearchRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_search_unreachable_endpoint() {
    let config = ClientConfig {
        // Port 9 (discard) is not expected to be listening
        base_url: "http://127.0.0.1:9".to_string(),
        response_schema: ResponseSchema::Auto,
        timeout_secs: 2,
    };
    let client = SearchClient::new(&config).unwrap();

    let err = client.search(&SearchRequest::default()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
