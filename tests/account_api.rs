use std::sync::Arc;

use account_ledger::{make_app, AppState, Config};
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Fresh store per server, bound to an ephemeral port.
        let state = Arc::new(AppState::new(Config::default()));
        let app = make_app(state).expect("failed to build app");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create(&self, body: Value) -> reqwest::Response {
        self.client
            .post(self.url("/account/create"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn post_as(&self, cpf: &str, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("cpf", cpf)
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn statement(&self, cpf: &str) -> Value {
        let res = self
            .client
            .get(self.url("/account/statement"))
            .header("cpf", cpf)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        res.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn account(cpf: &str, email: &str) -> Value {
    json!({ "name": "A", "email": email, "password": "p", "cpf": cpf })
}

#[tokio::test]
async fn walkthrough_of_deposit_and_withdrawals() {
    let server = TestServer::spawn().await;

    let res = server.create(account("111", "a@x.com")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["statement"], json!([]));
    assert_eq!(created["cpf"], "111");
    assert_eq!(created["password"], "p");
    assert_eq!(created["createdAt"], created["updatedAt"]);
    assert!(created["id"].as_str().is_some());

    let res = server
        .post_as("111", "/account/statement/deposit", json!({ "type": "credit", "amount": 100 }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let entry: Value = res.json().await.unwrap();
    assert_eq!(entry["type"], "credit");
    assert_eq!(entry["amount"], 100.0);
    assert_eq!(server.statement("111").await["statement"].as_array().unwrap().len(), 1);

    let res = server
        .post_as("111", "/account/statement/withdraw", json!({ "type": "debit", "amount": 150 }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "You don't have enough balance" }));
    assert_eq!(server.statement("111").await["statement"].as_array().unwrap().len(), 1);

    let res = server
        .post_as("111", "/account/statement/withdraw", json!({ "type": "debit", "amount": 40 }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["total"], 60.0);
    assert_eq!(body["newStatement"]["type"], "debit");
    assert_eq!(body["newStatement"]["amount"], 40.0);

    let statement = server.statement("111").await;
    assert_eq!(statement["statement"].as_array().unwrap().len(), 2);
    assert_eq!(statement["total"], 60.0);
}

#[tokio::test]
async fn duplicate_cpf_or_email_is_a_bad_request() {
    let server = TestServer::spawn().await;
    assert_eq!(server.create(account("111", "a@x.com")).await.status(), StatusCode::OK);

    for duplicate in [account("111", "other@x.com"), account("222", "a@x.com")] {
        let res = server.create(duplicate).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Account email or cpf already exists" }));
    }

    let res = server.client.get(server.url("/account")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let accounts: Value = res.json().await.unwrap();
    assert_eq!(accounts.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn listing_returns_every_account_in_order() {
    let server = TestServer::spawn().await;
    server.create(account("111", "a@x.com")).await;
    server.create(account("222", "b@x.com")).await;

    let accounts: Value = server
        .client
        .get(server.url("/account"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let cpfs: Vec<&str> = accounts
        .as_array()
        .unwrap()
        .iter()
        .map(|account| account["cpf"].as_str().unwrap())
        .collect();
    assert_eq!(cpfs, vec!["111", "222"]);
}

#[tokio::test]
async fn guarded_routes_reject_unknown_cpf_with_401() {
    let server = TestServer::spawn().await;
    let not_found = json!({ "error": "Account not found" });

    let res = server
        .client
        .get(server.url("/account/statement"))
        .header("cpf", "999")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await.unwrap(), not_found);

    let res = server
        .client
        .get(server.url("/account/statement"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    for path in ["/account/statement", "/account/statement/deposit", "/account/statement/withdraw"] {
        let res = server
            .post_as("999", path, json!({ "type": "credit", "amount": 1, "date": "01/01/2024" }))
            .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(res.json::<Value>().await.unwrap(), not_found);
    }
}

#[tokio::test]
async fn statement_by_date_filters_entries_but_not_the_total() {
    let server = TestServer::spawn().await;
    server.create(account("111", "a@x.com")).await;
    let entry: Value = server
        .post_as("111", "/account/statement/deposit", json!({ "type": "credit", "amount": 80 }))
        .await
        .json()
        .await
        .unwrap();
    server
        .post_as("111", "/account/statement/deposit", json!({ "type": "debit", "amount": 30 }))
        .await;

    let today = entry["date"].as_str().unwrap().to_string();
    let body: Value = server
        .post_as("111", "/account/statement", json!({ "date": today }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["statements"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 50.0);

    let res = server
        .post_as("111", "/account/statement", json!({ "date": "01/01/1999" }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["statements"], json!([]));
    assert_eq!(body["total"], 50.0);
}

#[tokio::test]
async fn delete_removes_one_entry_and_ignores_unknown_ids() {
    let server = TestServer::spawn().await;
    server.create(account("111", "a@x.com")).await;

    let mut ids = Vec::new();
    for amount in [10, 20, 30] {
        let entry: Value = server
            .post_as("111", "/account/statement/deposit", json!({ "type": "credit", "amount": amount }))
            .await
            .json()
            .await
            .unwrap();
        ids.push(entry["id"].as_str().unwrap().to_string());
    }

    let res = server
        .client
        .delete(server.url(&format!("/account/statement/delete/{}", ids[1])))
        .header("cpf", "111")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().is_empty());

    let statement = server.statement("111").await;
    let remaining: Vec<&str> = statement["statement"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();
    assert_eq!(remaining, vec![ids[0].as_str(), ids[2].as_str()]);
    assert_eq!(statement["total"], 40.0);

    let res = server
        .client
        .delete(server.url("/account/statement/delete/does-not-exist"))
        .header("cpf", "111")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(server.statement("111").await["statement"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_with_unknown_cpf_is_a_bad_request() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .delete(server.url("/account/statement/delete/anything"))
        .header("cpf", "999")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "error": "Account not found" }));

    let res = server
        .client
        .delete(server.url("/account/statement/delete/anything"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "error": "Account not found" }));
}

#[tokio::test]
async fn malformed_bodies_are_rejected_as_json_errors() {
    let server = TestServer::spawn().await;
    server.create(account("111", "a@x.com")).await;

    let res = server
        .post_as("111", "/account/statement/deposit", json!({ "type": "refund", "amount": 1 }))
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("refund"));
    assert_eq!(server.statement("111").await["statement"], json!([]));

    let res = server
        .create(json!({ "name": "B", "email": "b@x.com", "cpf": "222" }))
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn health_check_answers() {
    let server = TestServer::spawn().await;

    let res = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "OK, I'm alive!");
}
