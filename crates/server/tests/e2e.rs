use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestApp {
    base_url: String,
    shutdown: oneshot::Sender<()>,
    server: tokio::task::JoinHandle<anyhow::Result<()>>,
}

/// Run the real startup path on an ephemeral port with a private SQLite database.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = configs::AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg.database.max_connections = 1;
    cfg.normalize_and_validate()?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel::<()>();
    let server = tokio::spawn(server::startup::serve(cfg, listener, async move {
        let _ = rx.await;
    }));

    Ok(TestApp { base_url: format!("http://{}", addr), shutdown: tx, server })
}

#[tokio::test]
async fn e2e_crud_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.post(format!("{}/students", app.base_url))
        .json(&json!({"name": "Ada", "email": "ada@example.com", "course": "CS"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let ada = res.json::<serde_json::Value>().await?;
    let id = ada["id"].as_i64().expect("numeric id");

    let res = c.put(format!("{}/students/{}", app.base_url, id))
        .json(&json!({"email": "ada.l@example.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["email"], "ada.l@example.com");
    assert_eq!(body["course"], "CS");

    let res = c.delete(format!("{}/students/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let list = c.get(format!("{}/students", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(list, json!([]));

    let _ = app.shutdown.send(());
    app.server.await??;
    Ok(())
}
