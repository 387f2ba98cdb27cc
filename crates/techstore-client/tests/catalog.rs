//! Integration tests for the catalog half of `StoreClient` using wiremock.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use techstore_client::{ProductQuery, RequestSequencer, StoreClient, StoreError};
use techstore_core::{apply, Category, FilterConfig, SortKey};

fn test_client(server: &MockServer) -> StoreClient {
    StoreClient::new(&format!("{}/api", server.uri()), "techstore-test/0.1", None)
        .expect("client construction should not fail")
}

fn product_json(
    id: &str,
    name: &str,
    category: &str,
    product_type: &str,
    price: f64,
) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "price": price,
        "category": category,
        "product_type": product_type,
        "colors": ["#C0C0C0", "#222222"],
        "model_url": null,
        "images": [],
        "stock": 10,
        "featured": true,
        "created_at": "2024-05-01T09:30:00.000000",
        "updated_at": "2024-05-01T09:30:00.000000"
    })
}

fn sample_catalog() -> serde_json::Value {
    json!([
        product_json("p1", "MacBook Pro M3", "Laptop", "laptop", 29_999_000.0),
        product_json("p2", "iPhone 15 Pro", "Smartphone", "phone", 26_999_000.0),
        product_json("p3", "AirPods Pro (2nd Gen)", "Audio", "headphones", 5_999_000.0),
    ])
}

#[tokio::test]
async fn list_products_without_filters_sends_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let products = test_client(&server)
        .list_products(&ProductQuery::default())
        .await
        .expect("should list products");

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].price, 29_999_000);
    assert_eq!(products[2].category, Category::Audio);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn featured_products_sends_featured_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("featured", "true"))
        .and(query_param("limit", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let products = test_client(&server)
        .featured_products(4)
        .await
        .expect("should list featured products");
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn category_listing_feeds_filter_pipeline() {
    let server = MockServer::start().await;
    let body = json!([
        product_json("p1", "MacBook Pro M3", "Laptop", "laptop", 29_999_000.0),
        product_json("p4", "MacBook Air", "Laptop", "laptop", 19_999_000.0),
        product_json("p5", "Galaxy Book", "Laptop", "laptop", 22_000_000.0),
    ]);
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "Laptop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let products = test_client(&server)
        .products_in_category(Category::Laptop)
        .await
        .expect("should list category");

    let config = FilterConfig::default()
        .with_brand("MacBook")
        .with_sort(Some(SortKey::PriceAsc));
    let shown: Vec<_> = apply(&products, &config)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(shown, ["MacBook Air", "MacBook Pro M3"]);
}

#[tokio::test]
async fn get_product_returns_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(
            "p2",
            "iPhone 15 Pro",
            "Smartphone",
            "phone",
            26_999_000.0,
        )))
        .mount(&server)
        .await;

    let product = test_client(&server)
        .get_product("p2")
        .await
        .expect("should fetch product");
    assert_eq!(product.name, "iPhone 15 Pro");
    assert_eq!(product.product_type, "phone");
}

#[tokio::test]
async fn get_product_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Product not found"})),
        )
        .mount(&server)
        .await;

    let err = test_client(&server).get_product("missing").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }), "{err}");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn server_error_is_remote_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .list_products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_fetch(), "{err}");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .list_products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Deserialize { .. }), "{err}");
}

#[tokio::test]
async fn listing_skips_product_with_unknown_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_json("p1", "MacBook Pro M3", "Laptop", "laptop", 29_999_000.0),
            product_json("p9", "Smart Toaster", "Kitchen", "toaster", 1_500_000.0),
            product_json("p3", "AirPods Pro (2nd Gen)", "Audio", "headphones", 5_999_000.0),
        ])))
        .mount(&server)
        .await;

    let products = test_client(&server)
        .list_products(&ProductQuery::default())
        .await
        .expect("listing should survive one bad element");
    let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p1", "p3"]);
}

#[tokio::test]
async fn unreachable_backend_is_remote_fetch_error() {
    let client = StoreClient::new("http://127.0.0.1:9/api", "techstore-test/0.1", None)
        .expect("client construction should not fail");
    let err = client
        .list_products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_fetch(), "{err}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn fetch_failure_degrades_to_empty_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = test_client(&server).featured_products(8).await;
    let products = techstore_client::fallback::or_default("home", result);
    assert!(products.is_empty());
}

#[tokio::test]
async fn superseded_listing_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "Laptop"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_catalog())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("category", "Audio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([product_json(
            "p3",
            "AirPods Pro (2nd Gen)",
            "Audio",
            "headphones",
            5_999_000.0
        )])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let sequencer = RequestSequencer::new();
    let laptops = ProductQuery::default().category(Category::Laptop);
    let audio = ProductQuery::default().category(Category::Audio);

    let (slow, fast) = tokio::join!(
        client.list_products_latest(&sequencer, &laptops),
        client.list_products_latest(&sequencer, &audio),
    );

    assert!(slow.expect("stale request should not error").is_none());
    let fast = fast.expect("fresh request should succeed").expect("fresh result kept");
    assert_eq!(fast.len(), 1);
    assert_eq!(fast[0].category, Category::Audio);
}

#[tokio::test]
async fn sequential_latest_requests_are_all_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let sequencer = RequestSequencer::new();
    for _ in 0..2 {
        let products = client
            .list_products_latest(&sequencer, &ProductQuery::default())
            .await
            .unwrap();
        assert_eq!(products.map(|p| p.len()), Some(3));
    }
}

#[tokio::test]
async fn api_status_reads_root_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"message": "3D Tech Store API - Ready to serve!", "version": "1.0.0"}),
        ))
        .mount(&server)
        .await;

    let status = test_client(&server).api_status().await.unwrap();
    assert_eq!(status.version.as_deref(), Some("1.0.0"));
    assert!(status.message.contains("Ready"));
}

#[tokio::test]
async fn seed_sample_data_posts_and_reports_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/init-sample-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"message": "Sample data initialized successfully", "products_created": 4}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let summary = test_client(&server).seed_sample_data().await.unwrap();
    assert_eq!(summary.products_created, Some(4));
}
