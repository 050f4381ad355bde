//! Item catalogue CRUD, search and pagination through the HTTP surface.

mod common;

use axum::http::{header, Method, StatusCode};
use common::{response_json, TestApp};
use serde_json::{json, Value};

fn item(code: &str, name: &str) -> Value {
    json!({
        "itemCode": code,
        "itemName": name,
        "volume": 1.5,
        "packageQty": 12,
        "price": 9.99,
        "costPrice": 4.5,
        "itemCate": "tools",
        "itemStyle": "basic",
        "itemModel": "M-1",
    })
}

async fn create(app: &TestApp, body: Value) -> Value {
    let response = app
        .request_authenticated(Method::POST, "/item", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test]
async fn create_returns_location_and_stored_row() {
    let app = TestApp::new().await;

    let response = app
        .request_authenticated(Method::POST, "/item", Some(item("HAM-01", "Hammer")))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    let body = response_json(response).await;

    let id = body["id"].as_i64().unwrap();
    assert_eq!(location, format!("/item/{}", id));
    assert_eq!(body["itemCode"], "HAM-01");
    assert_eq!(body["itemName"], "Hammer");
    assert_eq!(body["price"], 9.99);
    assert_eq!(body["creator"], "tester");

    let response = app.request_authenticated(Method::GET, &location, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["itemCode"], "HAM-01");
}

#[tokio::test]
async fn create_with_existing_id_fails() {
    let app = TestApp::new().await;

    let mut first = item("A-1", "First");
    first["id"] = json!(42);
    let created = create(&app, first).await;
    assert_eq!(created["id"], 42);

    let mut second = item("A-2", "Second");
    second["id"] = json!(42);
    let response = app
        .request_authenticated(Method::POST, "/item", Some(second))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_taken_item_code_fails() {
    let app = TestApp::new().await;
    create(&app, item("DUP", "One")).await;

    let response = app
        .request_authenticated(Method::POST, "/item", Some(item("DUP", "Two")))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn required_fields_are_validated() {
    let app = TestApp::new().await;

    for body in [
        item("", "No code"),
        item("NO-NAME", ""),
        json!({"itemName": "Only name"}),
    ] {
        let response = app
            .request_authenticated(Method::POST, "/item", Some(body))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn search_matches_name_or_code() {
    let app = TestApp::new().await;
    create(&app, item("ABC-1", "Widget")).await;
    create(&app, item("XYZ-2", "ABC gadget")).await;
    create(&app, item("QRS-3", "Sprocket")).await;

    let response = app
        .request_authenticated(Method::GET, "/item?wd=ABC", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = response_json(response).await;
    assert_eq!(page["totalCount"], 2);
    let codes: Vec<&str> = page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["itemCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["XYZ-2", "ABC-1"], "newest first");

    let page = response_json(app.request_authenticated(Method::GET, "/item", None).await).await;
    assert_eq!(page["totalCount"], 3);

    // An empty term means no filter
    let page =
        response_json(app.request_authenticated(Method::GET, "/item?wd=", None).await).await;
    assert_eq!(page["totalCount"], 3);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let app = TestApp::new().await;
    create(&app, item("A-1", "Dash")).await;
    create(&app, item("B_2", "Underscore")).await;

    for (wd, count, code) in [("_", 1, Some("B_2")), ("%25", 0, None), ("-", 1, Some("A-1"))] {
        let body = response_json(
            app.request_authenticated(Method::GET, &format!("/item?wd={}", wd), None)
                .await,
        )
        .await;
        assert_eq!(body["totalCount"], count, "wd={}", wd);
        if let Some(code) = code {
            assert_eq!(body["data"][0]["itemCode"], code, "wd={}", wd);
        }
    }
}

#[tokio::test]
async fn listing_is_paged_by_fifty() {
    let app = TestApp::new().await;
    for n in 0..120 {
        app.state
            .services
            .items
            .create(
                serde_json::from_value(item(&format!("P-{:03}", n), &format!("Part {}", n)))
                    .unwrap(),
                "seed",
            )
            .await
            .unwrap();
    }

    for (page, rows, has_next, has_previous) in [
        (1, 50, true, false),
        (2, 50, true, true),
        (3, 20, false, true),
        (4, 0, false, true),
    ] {
        let response = app
            .request_authenticated(Method::GET, &format!("/item?page={}", page), None)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;

        assert_eq!(body["pageIndex"], page);
        assert_eq!(body["pageSize"], 50);
        assert_eq!(body["totalCount"], 120);
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["data"].as_array().unwrap().len(), rows, "page {}", page);
        assert_eq!(body["hasNextPage"], has_next, "page {}", page);
        assert_eq!(body["hasPreviousPage"], has_previous, "page {}", page);
    }

    // Far past the end: empty data, real totals, no offset overflow
    for page in ["400000000000000000", "18446744073709551615"] {
        let response = app
            .request_authenticated(Method::GET, &format!("/item?page={}", page), None)
            .await;
        assert_eq!(response.status(), StatusCode::OK, "page {}", page);
        let body = response_json(response).await;
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["totalCount"], 120);
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
        assert_eq!(body["hasNextPage"], false);
    }

    // Page 0 falls back to the first page
    let body =
        response_json(app.request_authenticated(Method::GET, "/item?page=0", None).await).await;
    assert_eq!(body["pageIndex"], 1);
    assert_eq!(body["data"][0]["itemCode"], "P-119");
}

#[tokio::test]
async fn update_rejects_code_of_another_item() {
    let app = TestApp::new().await;
    let first = create(&app, item("KEEP-1", "First")).await;
    create(&app, item("KEEP-2", "Second")).await;
    let uri = format!("/item/{}", first["id"]);

    let response = app
        .request_authenticated(Method::PUT, &uri, Some(item("KEEP-2", "First renamed")))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "itemCode is already used by another item");

    let response = app
        .request_authenticated(Method::PUT, &uri, Some(item("KEEP-1", "First renamed")))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["itemName"], "First renamed");
    assert_eq!(body["itemCode"], "KEEP-1");
}

#[tokio::test]
async fn update_of_missing_item_is_bad_request() {
    let app = TestApp::new().await;
    let response = app
        .request_authenticated(Method::PUT, "/item/999", Some(item("GHOST", "Ghost")))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_item() {
    let app = TestApp::new().await;
    let created = create(&app, item("GONE-1", "Soon gone")).await;
    let uri = format!("/item/{}", created["id"]);

    let response = app.request_authenticated(Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.request_authenticated(Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.request_authenticated(Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
