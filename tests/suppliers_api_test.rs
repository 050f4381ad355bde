//! Supplier and supplier price list endpoints.

mod common;

use axum::http::{header, Method, StatusCode};
use common::{response_json, TestApp};
use serde_json::{json, Value};

fn supplier(code: &str, name: &str) -> Value {
    json!({
        "supplierCode": code,
        "supplierName": name,
        "supplierMobile": "555-0100",
        "supplierAddress": "1 Dock Road",
    })
}

fn supplier_item(supplier_name: &str, item_code: &str, model: &str) -> Value {
    json!({
        "supplierName": supplier_name,
        "itemCode": item_code,
        "packageQty": 6,
        "costPrice": 2.25,
        "itemModel": model,
    })
}

async fn post(app: &TestApp, uri: &str, body: Value) -> Value {
    let response = app.request_authenticated(Method::POST, uri, Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {}", uri);
    response_json(response).await
}

#[tokio::test]
async fn supplier_crud_round() {
    let app = TestApp::new().await;

    let response = app
        .request_authenticated(Method::POST, "/supplier", Some(supplier("S-01", "Acme")))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    let created = response_json(response).await;
    assert_eq!(location, format!("/supplier/{}", created["id"]));
    assert_eq!(created["creator"], "tester");

    let response = app
        .request_authenticated(Method::PUT, &location, Some(supplier("S-01", "Acme Ltd")))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["supplierName"], "Acme Ltd");

    let fetched =
        response_json(app.request_authenticated(Method::GET, &location, None).await).await;
    assert_eq!(fetched["supplierName"], "Acme Ltd");
    assert_eq!(fetched["supplierMobile"], "555-0100");

    let response = app.request_authenticated(Method::DELETE, &location, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = app.request_authenticated(Method::GET, &location, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn supplier_validation_and_missing_targets() {
    let app = TestApp::new().await;

    let response = app
        .request_authenticated(Method::POST, "/supplier", Some(supplier("", "No code")))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request_authenticated(Method::PUT, "/supplier/404", Some(supplier("S-9", "Ghost")))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request_authenticated(Method::DELETE, "/supplier/404", None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn supplier_search_matches_name_or_code() {
    let app = TestApp::new().await;
    post(&app, "/supplier", supplier("NORTH-1", "Northwind")).await;
    post(&app, "/supplier", supplier("SOUTH-1", "Southwind")).await;
    post(&app, "/supplier", supplier("EAST-1", "North Traders")).await;

    let page = response_json(
        app.request_authenticated(Method::GET, "/supplier?wd=North", None)
            .await,
    )
    .await;
    assert_eq!(page["totalCount"], 2);
    assert_eq!(page["data"][0]["supplierCode"], "EAST-1");
    assert_eq!(page["data"][1]["supplierCode"], "NORTH-1");
}

#[tokio::test]
async fn supplier_item_listing_inner_joins_items() {
    let app = TestApp::new().await;
    let item = post(
        &app,
        "/item",
        json!({
            "itemCode": "BOLT-10",
            "itemName": "Hex bolt",
            "volume": 0.5,
            "price": 1.2,
            "itemCate": "fasteners",
            "picPath": "/images/bolt.png",
        }),
    )
    .await;

    post(&app, "/supplieritem", supplier_item("Acme", "BOLT-10", "HX")).await;
    post(&app, "/supplieritem", supplier_item("Acme", "NUT-99", "HX")).await;

    let page =
        response_json(app.request_authenticated(Method::GET, "/supplieritem", None).await).await;
    assert_eq!(page["totalCount"], 1, "rows without a catalogue item are left out");

    let row = &page["data"][0];
    assert_eq!(row["itemCode"], "BOLT-10");
    assert_eq!(row["supplierName"], "Acme");
    assert_eq!(row["itemId"], item["id"]);
    assert_eq!(row["itemName"], "Hex bolt");
    assert_eq!(row["itemCate"], "fasteners");
    assert_eq!(row["picPath"], "/images/bolt.png");
    assert_eq!(row["costPrice"], 2.25);
    assert_eq!(row["price"], 1.2);
}

#[tokio::test]
async fn supplier_item_search_covers_model_code_and_item_name() {
    let app = TestApp::new().await;
    for (code, name) in [("C-1", "Copper pipe"), ("C-2", "Steel pipe"), ("C-3", "Brass valve")] {
        post(
            &app,
            "/item",
            json!({"itemCode": code, "itemName": name}),
        )
        .await;
    }
    post(&app, "/supplieritem", supplier_item("Acme", "C-1", "CU-15")).await;
    post(&app, "/supplieritem", supplier_item("Acme", "C-2", "ST-15")).await;
    post(&app, "/supplieritem", supplier_item("Acme", "C-3", "BR-22")).await;

    for (wd, expected) in [("pipe", 2), ("BR-22", 1), ("C-2", 1), ("nothing", 0)] {
        let page = response_json(
            app.request_authenticated(Method::GET, &format!("/supplieritem?wd={}", wd), None)
                .await,
        )
        .await;
        assert_eq!(page["totalCount"], expected, "wd={}", wd);
    }
}

#[tokio::test]
async fn supplier_item_crud_round() {
    let app = TestApp::new().await;
    let created = post(&app, "/supplieritem", supplier_item("Acme", "X-1", "M")).await;
    let uri = format!("/supplieritem/{}", created["id"]);

    let response = app
        .request_authenticated(Method::PUT, &uri, Some(supplier_item("Globex", "X-1", "M2")))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["supplierName"], "Globex");
    assert_eq!(updated["itemModel"], "M2");

    let mut duplicate = supplier_item("Acme", "X-2", "M");
    duplicate["id"] = created["id"].clone();
    let response = app
        .request_authenticated(Method::POST, "/supplieritem", Some(duplicate))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.request_authenticated(Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = app.request_authenticated(Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
