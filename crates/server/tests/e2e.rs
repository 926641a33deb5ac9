use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use configs::AppConfig;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let (app, _catalog) = server::startup::build_app(&AppConfig::default());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = server::serve(listener, app, std::future::pending()).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_course_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/admin/courses", app.base_url))
        .json(&json!({
            "name": "Test",
            "description": "D",
            "duration": "1 month",
            "fee": "KES 100",
            "category": "ICT"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_u64().expect("id");

    let list = c
        .get(format!("{}/admin/courses?q=ict", app.base_url))
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    assert_eq!(list.len(), 2);

    let res = c.delete(format!("{}/admin/courses/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let stats = c
        .get(format!("{}/admin/courses/stats", app.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(stats["total"], 8);
    Ok(())
}
