mod support;

use axum::body::Body;
use axum::http::Request;
use blogpost_server::rpc::{
    INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, NOT_FOUND, PARSE_ERROR,
};
use serde_json::{json, Value};
use support::{apps, rest_call, rpc_call, send};

#[tokio::test]
async fn article_scenario_over_rpc() {
    let apps = apps();

    let author = rpc_call(&apps.rpc, "AuthorService.Create", json!({ "fullname": "John Doe" }))
        .await;
    assert!(author.get("error").is_none());
    let author_id = author["result"]["id"].clone();

    let created = rpc_call(
        &apps.rpc,
        "ArticleService.Create",
        json!({ "content": { "title": "Hi", "body": "World" }, "author_id": author_id }),
    )
    .await;
    let article_id = created["result"]["id"].clone();
    assert_eq!(created["result"]["author"]["fullname"], "John Doe");
    assert!(created["result"]["updated_at"].is_null());

    let updated = rpc_call(
        &apps.rpc,
        "ArticleService.Update",
        json!({ "id": article_id, "content": { "title": "Hi", "body": "Earth" } }),
    )
    .await;
    assert_eq!(updated["result"]["content"]["body"], "Earth");
    assert!(updated["result"]["updated_at"].is_i64());

    rpc_call(&apps.rpc, "AuthorService.Delete", json!({ "id": author_id })).await;

    let read = rpc_call(&apps.rpc, "ArticleService.GetById", json!({ "id": article_id })).await;
    assert_eq!(read["result"]["author"]["fullname"], "John Doe");

    let gone = rpc_call(&apps.rpc, "AuthorService.GetById", json!({ "id": author_id })).await;
    assert_eq!(gone["error"]["code"], NOT_FOUND);
    assert_eq!(gone["error"]["data"]["status"], "NOT_FOUND");
    assert!(gone.get("result").is_none());
}

#[tokio::test]
async fn delete_twice_reports_not_found() {
    let apps = apps();
    let author = rpc_call(&apps.rpc, "AuthorService.Create", json!({ "fullname": "John Doe" }))
        .await;
    let article = rpc_call(
        &apps.rpc,
        "ArticleService.Create",
        json!({ "content": { "title": "Hi", "body": "World" }, "author_id": author["result"]["id"] }),
    )
    .await;
    let id = article["result"]["id"].clone();

    let first = rpc_call(&apps.rpc, "ArticleService.Delete", json!({ "id": id })).await;
    assert_eq!(first["result"]["id"], id);
    assert!(first["result"]["deleted_at"].is_null());

    let second = rpc_call(&apps.rpc, "ArticleService.Delete", json!({ "id": id })).await;
    assert_eq!(second["error"]["code"], NOT_FOUND);
}

#[tokio::test]
async fn list_accepts_missing_params() {
    let apps = apps();
    for name in ["Ada Lovelace", "Alan Turing"] {
        rpc_call(&apps.rpc, "AuthorService.Create", json!({ "fullname": name })).await;
    }

    let all = rpc_call(&apps.rpc, "AuthorService.GetList", Value::Null).await;
    assert_eq!(all["result"].as_array().unwrap().len(), 2);

    let filtered = rpc_call(
        &apps.rpc,
        "AuthorService.GetList",
        json!({ "search": "TURING", "limit": 5 }),
    )
    .await;
    let items = filtered["result"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["fullname"], "Alan Turing");

    let negative = rpc_call(&apps.rpc, "ArticleService.GetList", json!({ "limit": -3 })).await;
    assert_eq!(negative["error"]["code"], INVALID_PARAMS);
}

#[tokio::test]
async fn invalid_params_map_to_invalid_argument() {
    let apps = apps();

    let missing = rpc_call(&apps.rpc, "AuthorService.Create", json!({})).await;
    assert_eq!(missing["error"]["code"], INVALID_PARAMS);
    assert_eq!(missing["error"]["data"]["status"], "INVALID_ARGUMENT");

    let short = rpc_call(&apps.rpc, "AuthorService.Create", json!({ "fullname": "J" })).await;
    assert_eq!(short["error"]["code"], INVALID_PARAMS);

    let bad_id = rpc_call(&apps.rpc, "ArticleService.GetById", json!({ "id": "nope" })).await;
    assert_eq!(bad_id["error"]["code"], INVALID_PARAMS);
}

#[tokio::test]
async fn protocol_errors_are_reported() {
    let apps = apps();

    let unknown = rpc_call(&apps.rpc, "AuthorService.Explode", json!({})).await;
    assert_eq!(unknown["error"]["code"], METHOD_NOT_FOUND);

    let request = Request::builder()
        .method("POST")
        .uri("/rpc")
        .body(Body::from("{not json"))
        .unwrap();
    let (_, body) = send(&apps.rpc, request).await;
    assert_eq!(body["error"]["code"], PARSE_ERROR);
    assert!(body["id"].is_null());

    let request = Request::builder()
        .method("POST")
        .uri("/rpc")
        .body(Body::from(
            json!({ "jsonrpc": "1.0", "method": "AuthorService.GetList", "id": 7 }).to_string(),
        ))
        .unwrap();
    let (_, body) = send(&apps.rpc, request).await;
    assert_eq!(body["error"]["code"], INVALID_REQUEST);
    assert_eq!(body["id"], 7);
}

#[tokio::test]
async fn rest_and_rpc_expose_identical_entities() {
    let apps = apps();

    let (_, created) = rest_call(
        &apps.rest,
        "POST",
        "/v1/author",
        Some(json!({ "fullname": "John Doe" })),
    )
    .await;
    let id = created["data"]["id"].clone();

    let (_, rest_article) = rest_call(
        &apps.rest,
        "POST",
        "/v1/article",
        Some(json!({ "content": { "title": "Hi", "body": "World" }, "author_id": id })),
    )
    .await;
    let article_id = rest_article["data"]["id"].as_str().unwrap().to_string();

    let (_, rest_read) = rest_call(
        &apps.rest,
        "GET",
        &format!("/v1/article/{article_id}"),
        None,
    )
    .await;
    let rpc_read = rpc_call(
        &apps.rpc,
        "ArticleService.GetById",
        json!({ "id": article_id }),
    )
    .await;
    assert_eq!(rest_read["data"], rpc_read["result"]);

    let (_, rest_list) = rest_call(&apps.rest, "GET", "/v1/author", None).await;
    let rpc_list = rpc_call(&apps.rpc, "AuthorService.GetList", json!({})).await;
    assert_eq!(rest_list["data"], rpc_list["result"]);

    let (status, _) = rest_call(&apps.rest, "DELETE", &format!("/v1/article/{article_id}"), None)
        .await;
    assert!(status.is_success());
    let (rest_status, _) = rest_call(
        &apps.rest,
        "GET",
        &format!("/v1/article/{article_id}"),
        None,
    )
    .await;
    let rpc_missing = rpc_call(
        &apps.rpc,
        "ArticleService.GetById",
        json!({ "id": article_id }),
    )
    .await;
    assert_eq!(rest_status.as_u16(), 404);
    assert_eq!(rpc_missing["error"]["code"], NOT_FOUND);
}

#[tokio::test]
async fn oversized_list_limit_is_accepted() {
    let apps = apps();
    rpc_call(&apps.rpc, "AuthorService.Create", json!({ "fullname": "John Doe" })).await;

    let listed = rpc_call(
        &apps.rpc,
        "AuthorService.GetList",
        json!({ "limit": 10_000_000_000_i64 }),
    )
    .await;
    assert!(listed.get("error").is_none());
    assert_eq!(listed["result"].as_array().unwrap().len(), 1);
}
