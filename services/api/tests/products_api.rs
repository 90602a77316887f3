//! Integration tests for `/api/products`

mod support;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::NaiveDateTime;
use serde_json::json;

use support::{
    create_category, create_product, delete, get, post, put, send_request, test_app,
};

#[tokio::test]
async fn create_then_get_returns_the_same_fields() {
    let app = test_app().await;
    let category_id = create_category(&app, "Kitchen").await;

    let (status, created) = post(
        &app,
        "/api/products",
        json!({
            "name": "Kettle",
            "description": "1.7l, stainless steel",
            "price": 24.9,
            "stock": 8,
            "category_id": category_id,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], json!(true));
    assert_eq!(created["message"], json!("Product created successfully"));

    let data = &created["data"];
    assert!(data["id"].as_i64().is_some());
    assert_eq!(data["name"], json!("Kettle"));
    assert_eq!(data["description"], json!("1.7l, stainless steel"));
    assert_eq!(data["price"], json!("24.90"));
    assert_eq!(data["stock"], json!(8));
    assert_eq!(data["category"], json!({"id": category_id, "name": "Kitchen"}));
    let created_at = data["createdAt"].as_str().unwrap();
    assert!(NaiveDateTime::parse_from_str(created_at, "%Y-%m-%d %H:%M:%S").is_ok());

    let id = data["id"].as_i64().unwrap();
    let (status, fetched) = get(&app, &format!("/api/products/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, json!({"success": true, "data": data.clone()}));
}

#[tokio::test]
async fn names_round_trip_unchanged() {
    let app = test_app().await;
    let category_id = create_category(&app, " Books ").await;
    let id = create_product(&app, "  Dune ", json!(10), category_id).await;

    let (status, fetched) = get(&app, &format!("/api/products/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["name"], json!("  Dune "));
    assert_eq!(fetched["data"]["category"]["name"], json!(" Books "));

    let (_, updated) = put(&app, &format!("/api/products/{id}"), json!({"name": " Emma"})).await;
    assert_eq!(updated["data"]["name"], json!(" Emma"));
}

#[tokio::test]
async fn stock_defaults_to_zero_and_description_to_null() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;

    let (status, body) = post(
        &app,
        "/api/products",
        json!({"name": "Dune", "price": "10", "category_id": category_id}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["stock"], json!(0));
    assert_eq!(body["data"]["description"], json!(null));
    assert_eq!(body["data"]["price"], json!("10.00"));
}

#[tokio::test]
async fn missing_required_fields_are_reported_in_order() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;

    let cases = [
        (json!({}), "name is required"),
        (json!({"name": "   ", "price": 1, "category_id": category_id}), "name is required"),
        (json!({"name": "Dune"}), "price is required"),
        (json!({"name": "Dune", "price": null, "category_id": category_id}), "price is required"),
        (json!({"name": "Dune", "price": 5}), "category_id is required"),
    ];

    for (payload, message) in cases {
        let (status, body) = post(&app, "/api/products", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "message": message}));
    }
}

#[tokio::test]
async fn unknown_category_is_a_validation_error_and_nothing_is_stored() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/products",
        json!({"name": "Dune", "price": 10, "category_id": 999}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Category not found"));

    let (_, list) = get(&app, "/api/products").await;
    assert_eq!(list["count"], json!(0));
}

#[tokio::test]
async fn negative_or_non_numeric_price_is_rejected() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;

    for price in [
        json!(-1),
        json!(-0.004),
        json!("-0.001"),
        json!("abc"),
        json!(true),
    ] {
        let (status, body) = post(
            &app,
            "/api/products",
            json!({"name": "Dune", "price": price, "category_id": category_id}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Please enter a valid price"));
    }

    let (_, list) = get(&app, "/api/products").await;
    assert_eq!(list["count"], json!(0));
}

#[tokio::test]
async fn category_is_checked_before_price() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/products",
        json!({"name": "Dune", "price": -5, "category_id": 42}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Category not found"));
}

#[tokio::test]
async fn partial_update_only_changes_supplied_fields() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;
    let id = create_product(&app, "Dune", json!(12.5), category_id).await;
    let (_, before) = get(&app, &format!("/api/products/{id}")).await;

    let (status, body) = put(&app, &format!("/api/products/{id}"), json!({"stock": 5})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Product updated successfully"));

    let mut expected = before["data"].clone();
    expected["stock"] = json!(5);
    assert_eq!(body["data"], expected);

    let (_, after) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(after["data"], expected);
}

#[tokio::test]
async fn null_values_leave_fields_untouched_except_description() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;
    let (_, created) = post(
        &app,
        "/api/products",
        json!({
            "name": "Dune",
            "description": "Desert planet",
            "price": 9,
            "stock": 2,
            "category_id": category_id,
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/products/{id}");

    // Omitting description preserves it.
    let (_, body) = put(&app, &uri, json!({"name": "Dune Messiah"})).await;
    assert_eq!(body["data"]["description"], json!("Desert planet"));

    // null on a regular field is ignored, null on description clears it.
    let (status, body) = put(
        &app,
        &uri,
        json!({"name": null, "price": null, "stock": null, "category_id": null, "description": null}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Dune Messiah"));
    assert_eq!(body["data"]["price"], json!("9.00"));
    assert_eq!(body["data"]["stock"], json!(2));
    assert_eq!(body["data"]["category"]["id"], json!(category_id));
    assert_eq!(body["data"]["description"], json!(null));
}

#[tokio::test]
async fn update_revalidates_changed_fields() {
    let app = test_app().await;
    let books = create_category(&app, "Books").await;
    let games = create_category(&app, "Games").await;
    let id = create_product(&app, "Dune", json!(10), books).await;
    let uri = format!("/api/products/{id}");

    let (status, body) = put(&app, &uri, json!({"price": "-3"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Please enter a valid price"));

    let (status, body) = put(&app, &uri, json!({"category_id": 999})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Category not found"));

    let (status, body) = put(&app, &uri, json!({"name": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("name is required"));

    let (_, unchanged) = get(&app, &uri).await;
    assert_eq!(unchanged["data"]["price"], json!("10.00"));
    assert_eq!(unchanged["data"]["category"]["id"], json!(books));

    let (status, body) = put(&app, &uri, json!({"category_id": games, "price": 3.5})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["category"], json!({"id": games, "name": "Games"}));
    assert_eq!(body["data"]["price"], json!("3.50"));
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() {
    let app = test_app().await;

    let (status, body) = put(&app, "/api/products/77", json!({"stock": 1})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "Product not found"}));
}

#[tokio::test]
async fn list_filters_by_category() {
    let app = test_app().await;
    let books = create_category(&app, "Books").await;
    let games = create_category(&app, "Games").await;
    let empty = create_category(&app, "Garden").await;
    let dune = create_product(&app, "Dune", json!(10), books).await;
    let emma = create_product(&app, "Emma", json!(8), books).await;
    create_product(&app, "Chess", json!(30), games).await;

    let (status, all) = get(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["count"], json!(3));

    let (status, filtered) = get(&app, &format!("/api/products?category={books}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered["count"], json!(2));
    let ids: Vec<i64> = filtered["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|product| product["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![dune, emma]);

    let (status, none) = get(&app, &format!("/api/products?category={empty}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!({"success": true, "data": [], "count": 0}));

    let (status, unknown) = get(&app, "/api/products?category=12345").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown["count"], json!(0));

    let (status, _) = get(&app, "/api/products?category=books").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, unfiltered) = get(&app, "/api/products?category=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unfiltered["count"], json!(3));
}

#[tokio::test]
async fn delete_removes_the_product() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;
    let id = create_product(&app, "Dune", json!(10), category_id).await;
    let uri = format!("/api/products/{id}");

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Product deleted successfully"})
    );

    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Product not found"));
}

#[tokio::test]
async fn malformed_requests_use_the_envelope() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));

    let (status, body) = post(
        &app,
        "/api/products",
        json!({"name": 42, "price": 1, "category_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let (status, body) = get(&app, "/api/products/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

/// There is no optimistic locking: overlapping updates of the same field both
/// succeed and the one that reaches the database last is what remains.
#[tokio::test]
async fn concurrent_updates_are_last_write_wins() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;
    let id = create_product(&app, "Dune", json!(10), category_id).await;
    let uri = format!("/api/products/{id}");

    let (first, second) = tokio::join!(
        put(&app, &uri, json!({"name": "First"})),
        put(&app, &uri, json!({"name": "Second"})),
    );
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);

    let (_, stored) = get(&app, &uri).await;
    let name = stored["data"]["name"].as_str().unwrap();
    assert!(name == "First" || name == "Second");

    // Sequential writers based on the same stale read: the later one wins.
    put(&app, &uri, json!({"stock": 1})).await;
    put(&app, &uri, json!({"stock": 2})).await;
    let (_, stored) = get(&app, &uri).await;
    assert_eq!(stored["data"]["stock"], json!(2));
}

#[tokio::test]
async fn overlapping_updates_of_different_fields_both_stick() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;
    let id = create_product(&app, "Dune", json!(10), category_id).await;
    let uri = format!("/api/products/{id}");

    let (rename, restock) = tokio::join!(
        put(&app, &uri, json!({"name": "Dune Messiah"})),
        put(&app, &uri, json!({"stock": 7})),
    );
    assert_eq!(rename.0, StatusCode::OK);
    assert_eq!(restock.0, StatusCode::OK);

    let (_, stored) = get(&app, &uri).await;
    assert_eq!(stored["data"]["name"], json!("Dune Messiah"));
    assert_eq!(stored["data"]["stock"], json!(7));
    assert_eq!(stored["data"]["price"], json!("10.00"));
}

#[tokio::test]
async fn empty_update_returns_the_product_unchanged() {
    let app = test_app().await;
    let category_id = create_category(&app, "Books").await;
    let id = create_product(&app, "Dune", json!(10), category_id).await;
    let uri = format!("/api/products/{id}");
    let (_, before) = get(&app, &uri).await;

    let (status, body) = put(&app, &uri, json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], before["data"]);
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "service": "catalog-api"}));
}
