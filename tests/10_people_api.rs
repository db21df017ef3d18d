mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn crud_lifecycle_over_http() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();
    let people = server.people_url();

    let res = client
        .post(&people)
        .json(&json!({"name": "Ana", "dni": "123", "age": 30}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?, json!({"name": "Ana", "dni": "123", "age": 30}));

    let res = client.get(format!("{}/123", people)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"name": "Ana", "dni": "123", "age": 30}));

    let res = client
        .put(format!("{}/123", people))
        .json(&json!({"name": "Ana B.", "dni": "123", "age": 31}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"name": "Ana B.", "dni": "123", "age": 31}));

    let res = client.get(&people).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([{"name": "Ana B.", "dni": "123", "age": 31}]));

    let res = client.delete(format!("{}/123", people)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Deleted"}));

    let res = client.get(format!("{}/123", people)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Person not found"}));

    Ok(())
}

#[tokio::test]
async fn preflight_and_cors_headers() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .request(reqwest::Method::OPTIONS, server.people_url())
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.headers()["access-control-allow-origin"], "http://localhost:5173");
    assert!(res.headers().contains_key("access-control-allow-methods"));
    assert!(res.text().await?.is_empty());

    let res = client.get(format!("{}/nope", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(res.json::<Value>().await?, json!({"error": "Not Found"}));

    Ok(())
}

#[tokio::test]
async fn concurrent_creates_of_one_dni_have_a_single_winner() -> Result<()> {
    let server = common::start_server().await?;
    let client = reqwest::Client::new();
    let people = server.people_url();

    let requests = (0..20).map(|i| {
        let client = client.clone();
        let people = people.clone();
        async move {
            client
                .post(&people)
                .json(&json!({"name": format!("writer-{}", i), "dni": "race", "age": i}))
                .send()
                .await
                .map(|res| res.status())
        }
    });

    let statuses = futures::future::join_all(requests).await;
    let created = statuses
        .iter()
        .filter(|s| matches!(s, Ok(code) if *code == StatusCode::CREATED))
        .count();
    let conflicts = statuses
        .iter()
        .filter(|s| matches!(s, Ok(code) if *code == StatusCode::CONFLICT))
        .count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 19);

    let list = client.get(&people).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 1);

    Ok(())
}
