//! Product fetching against a mock catalog server.

use httpmock::prelude::*;
use kedai_sdk::prelude::*;
use serde_json::{json, Value};

fn product_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Product {}", id),
        "category": "beauty",
        "price": 9.99 + id as f64,
        "discountPercentage": 10.0,
        "rating": 4.5,
        "stock": 5,
        "thumbnail": format!("https://cdn.dummyjson.com/products/{}/thumbnail.png", id)
    })
}

fn listing_json(count: u64) -> Value {
    let products: Vec<Value> = (1..=count).map(product_json).collect();
    json!({
        "products": products,
        "total": 194,
        "skip": 0,
        "limit": count
    })
}

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&CatalogConfig {
        base_url: server.base_url(),
        ..CatalogConfig::default()
    })
}

#[tokio::test]
async fn product_detail_matches_requested_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products/1");
            then.status(200).json_body(product_json(1));
        })
        .await;

    let data = fetch_products_data(&client_for(&server), Some(ProductKey::from(1))).await;

    mock.assert_async().await;
    let product = data.detail().expect("detail form");
    assert_eq!(product.id, 1);
    assert_eq!(product.title(), Some("Product 1"));
}

#[tokio::test]
async fn default_listing_is_capped_at_page_size() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(listing_json(30));
        })
        .await;

    let data = fetch_products_data(&client_for(&server), None).await;

    mock.assert_async().await;
    let listing = data.listing().expect("listing form");
    assert!(listing.products.len() <= DEFAULT_PAGE_SIZE as usize);
    assert_eq!(listing.total, 194);
}

#[tokio::test]
async fn invalid_id_yields_empty_record() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products/invalidId");
            then.status(404)
                .json_body(json!({"message": "Product with id 'invalidId' not found"}));
        })
        .await;

    let data = fetch_products_data(&client_for(&server), Some("invalidId".into())).await;

    mock.assert_async().await;
    assert!(data.is_empty());
    assert_eq!(serde_json::to_value(&data).unwrap(), json!({}));
}

#[tokio::test]
async fn dot_keys_never_leave_the_products_path() {
    let server = MockServer::start_async().await;
    let any_get = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(listing_json(1));
        })
        .await;

    let client = client_for(&server);
    for raw in ["", ".", ".."] {
        let key = ProductKey::from(raw);
        assert!(client.product(&key).await.is_not_found(), "{:?}", raw);

        let data = fetch_products_data(&client, Some(key)).await;
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({}), "{:?}", raw);
    }

    any_get.assert_calls(0);
}

#[tokio::test]
async fn server_error_yields_empty_record() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(500).body("boom");
        })
        .await;

    let data = fetch_products_data(&client_for(&server), None).await;
    assert!(data.is_empty());
}

#[tokio::test]
async fn unreachable_catalog_yields_empty_record() {
    let client = CatalogClient::new(&CatalogConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        ..CatalogConfig::default()
    });

    let data = fetch_products_data(&client, Some(ProductKey::from(1))).await;
    assert!(data.is_empty());
}

#[tokio::test]
async fn typed_client_separates_not_found_from_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/999999");
            then.status(404).json_body(json!({"message": "not found"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/2");
            then.status(503).body("maintenance");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/3");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let client = client_for(&server);

    assert!(client.product(&ProductKey::from(999_999)).await.is_not_found());

    match client.product(&ProductKey::from(2)).await {
        FetchOutcome::NetworkError(FetchError::HttpError { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let outcome = client.product(&ProductKey::from(3)).await;
    assert!(matches!(outcome.error(), Some(FetchError::ParseError(_))));
}

#[tokio::test]
async fn malformed_product_record_is_a_failure_not_a_partial_product() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/4");
            then.status(200).json_body(json!({"id": 4, "title": "No price"}));
        })
        .await;

    let client = client_for(&server);
    assert!(client.product(&ProductKey::from(4)).await.error().is_some());
    assert!(fetch_products_data(&client, Some(ProductKey::from(4))).await.is_empty());
}

#[tokio::test]
async fn products_page_sends_limit_and_skip() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/products")
                .query_param("limit", "10")
                .query_param("skip", "20");
            then.status(200).json_body(listing_json(10));
        })
        .await;

    let page = client_for(&server)
        .products_page(Page::new(10, 20))
        .await
        .found()
        .expect("page");

    mock.assert_async().await;
    assert_eq!(page.len(), 10);
}

#[tokio::test]
async fn requests_identify_the_client() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/products")
                .header("accept", "application/json")
                .header("user-agent", "kedai-test/1.0");
            then.status(200).json_body(listing_json(1));
        })
        .await;

    let client = CatalogClient::new(&CatalogConfig {
        base_url: server.base_url(),
        user_agent: "kedai-test/1.0".to_string(),
        ..CatalogConfig::default()
    });
    assert!(client.products().await.is_found());
    mock.assert_async().await;
}

#[tokio::test]
async fn fetched_products_shape_into_cards() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(listing_json(3));
        })
        .await;

    let data = fetch_products_data(&client_for(&server), None).await;
    let cards = set_products_cards(data.products());

    assert_eq!(cards.len(), 3);
    let keys = serde_json::to_value(&cards[0]).unwrap();
    for key in ["price", "after_discount", "image"] {
        assert!(keys.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(cards[0].image, "https://cdn.dummyjson.com/products/1/thumbnail.png");
    assert_eq!(cards[2].image, "https://cdn.dummyjson.com/products/3/thumbnail.png");
    assert!(cards.iter().all(|c| c.after_discount < c.price));
}
