use std::sync::Arc;
use std::time::{Duration, Instant};

use arbor_api::app::{self, services};
use arbor_auth::{PasswordChangeBatchConfig, User};
use arbor_core::{CompanyId, PartnerId, SaleOrderId, SaleOrderLineId, UserId};
use arbor_infra::AppConfig;
use arbor_infra::repository::UserRepository;
use arbor_infra::session::SessionStore;
use arbor_parties::{Company, Partner};
use arbor_sales::{Currency, SaleOrder, SaleOrderLine};
use arbor_supplychain::{SaleOrderSupplyChain, SaleOrderType};
use reqwest::StatusCode;
use rust_decimal::Decimal;

struct TestServer {
    base_url: String,
    stores: services::InMemoryStores,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port; cheapest bcrypt cost.
        Self::spawn_with_cost(4).await
    }

    async fn spawn_with_cost(bcrypt_cost: u32) -> Self {
        let config = AppConfig {
            bcrypt_cost,
            ..AppConfig::default()
        };
        let stores = services::InMemoryStores::new();
        seed(&stores);
        let services = services::build_services(&config, &stores).expect("services");
        let app = app::build_app(Arc::new(services));

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
            stores,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn seed(stores: &services::InMemoryStores) {
    for id in 1..=3 {
        stores
            .users
            .insert(User::new(UserId::new(id), format!("user{id}"), format!("User {id}")).with_password("old", None))
            .unwrap();
    }
    stores
        .password_change_batches
        .insert(PasswordChangeBatchConfig {
            id: 1,
            code: "ROTATE-ALL".to_string(),
            generate_new_random_passwords: true,
            update_password_next_login: true,
            all_users: true,
            nb_of_day_since_last_update: 90,
            groups: Vec::new(),
            users: Vec::new(),
        })
        .unwrap();

    let mut order = SaleOrder::new(
        SaleOrderId::new(5),
        "SO-0005",
        Company::new(CompanyId::new(1), "Arbor SA"),
        Partner::new(PartnerId::new(2), "Acme"),
        Currency {
            code: "EUR".to_string(),
            name: "Euro".to_string(),
        },
    );
    let mut line = SaleOrderLine::new(SaleOrderLineId::new(1), 1, "Widget");
    line.price = Decimal::from(100);
    line.price_discounted = Decimal::from(90);
    line.qty = Decimal::from(2);
    order.lines = vec![line];
    stores.sale_orders.insert(order).unwrap();
    stores
        .supply_chain
        .insert(
            SaleOrderId::new(5),
            SaleOrderSupplyChain {
                sale_order_type: SaleOrderType::Standard,
                ..SaleOrderSupplyChain::default()
            },
        )
        .unwrap();
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", server.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn running_a_password_batch_rotates_and_reports() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/base/password-change-batches/1/run", server.base_url))
        .header("x-operator-id", "2")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["flash"], "3 Users processed");
    assert_eq!(body["reload"], true);
    assert_eq!(body["batch"]["done"], 3);
    assert_eq!(body["batch"]["status"]["state"], "completed");

    for id in 1..=3 {
        let user = server.stores.users.find(UserId::new(id)).unwrap().unwrap();
        assert_ne!(user.password, "old");
        assert!(user.force_password_change);
    }
    assert!(server.stores.sessions.login_date(UserId::new(2)).unwrap().is_some());

    let batch_id = body["batch"]["id"].as_str().unwrap();
    let res = client
        .get(format!("{}/base/batches/{}", server.base_url, batch_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_answers_while_a_batch_is_hashing() {
    let server = TestServer::spawn_with_cost(10).await;
    let client = reqwest::Client::new();

    let started = Instant::now();
    let url = format!("{}/base/password-change-batches/1/run", server.base_url);
    let batch = tokio::spawn({
        let client = client.clone();
        async move { client.post(url).send().await.unwrap().status() }
    });

    tokio::time::sleep(Duration::from_millis(30)).await;
    let health_started = Instant::now();
    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    let health_latency = health_started.elapsed();
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(batch.await.unwrap(), StatusCode::OK);
    let batch_elapsed = started.elapsed();
    assert!(
        health_latency * 2 < batch_elapsed,
        "health took {health_latency:?} while the batch took {batch_elapsed:?}"
    );
}

#[tokio::test]
async fn batch_errors_are_json() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/base/password-change-batches/99/run", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    let res = client
        .post(format!("{}/base/password-change-batches/1/run", server.base_url))
        .header("x-operator-id", "nobody")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_operator");
}

#[tokio::test]
async fn sale_order_print_data() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let base = format!("{}/sales/orders/5/print", server.base_url);

    let lines: serde_json::Value = client
        .get(format!("{base}/lines"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(lines[0]["unitPrice"], "100");
    assert_eq!(lines[0]["totalDiscountAmount"], "-20");
    assert_eq!(lines[0]["saleOrderTypeSelect"], 1);

    let order: serde_json::Value = client
        .get(format!("{base}/order"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(order.as_array().unwrap().len(), 2);
    assert_eq!(order[0]["saleOrderSeq"], "SO-0005");

    let merged: serde_json::Value = client
        .get(format!("{base}/order.json"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(merged.as_array().unwrap().len(), 1);
    assert_eq!(merged[0]["sale_order_type_select"], 1);
    assert_eq!(merged[0]["CurrencyCode"], "EUR");

    let taxes: serde_json::Value = client
        .get(format!("{base}/tax-lines"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(taxes, serde_json::json!([]));

    let res = client
        .get(format!("{}/sales/orders/404/print/lines", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/sales/orders/abc/print/lines", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
