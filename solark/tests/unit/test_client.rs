//! Authenticated endpoint unit tests

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use solark_cloud::{AuthState, SolArkCloud, SolArkError};

use crate::test_login::{client_for, token_body};

async fn logged_in(server: &mut ServerGuard, expires_in: i64) -> SolArkCloud {
    server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body(expires_in))
        .create_async()
        .await;

    let mut client = client_for(server);
    client.login("user", "secret").await.unwrap();
    client
}

fn flow_data() -> serde_json::Value {
    json!({
        "custCode": 29,
        "meterCode": 0,
        "pvPower": 1200,
        "battPower": 500,
        "gridOrMeterPower": 0,
        "loadOrEpsPower": 700,
        "genPower": 0,
        "minPower": 0,
        "soc": 64,
        "pvTo": true,
        "toLoad": true,
        "toGrid": false,
        "toBat": true,
        "batTo": false,
        "gridTo": false,
        "genTo": false,
        "minTo": false,
        "existsGen": false,
        "existsMin": false,
        "genOn": false,
        "microOn": false,
        "existsMeter": true,
        "bmsCommFaultFlag": false,
        "existThinkPower": false,
        "pv": null,
    })
}

#[tokio::test]
async fn test_plants_before_login() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/plants")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.plants().await.unwrap_err();

    assert!(matches!(err, SolArkError::NotLoggedIn));
    assert_eq!(err.code(), Some(1001));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_flow_before_login() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.flow(42).await.unwrap_err();

    assert!(matches!(err, SolArkError::NotLoggedIn));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_makes_no_request() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server, 0).await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    assert_eq!(client.auth_state(), AuthState::Expired);

    let err = client.plants().await.unwrap_err();
    assert!(matches!(err, SolArkError::TokenExpired));
    assert_eq!(err.code(), Some(1002));

    let err = client.flow(42).await.unwrap_err();
    assert!(matches!(err, SolArkError::TokenExpired));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_relogin_after_expiry() {
    let mut server = Server::new_async().await;
    let mut client = logged_in(&mut server, 0).await;
    assert_eq!(client.auth_state(), AuthState::Expired);

    server.reset_async().await;
    server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_body(token_body(3600))
        .create_async()
        .await;

    client.login("user", "secret").await.unwrap();
    assert_eq!(client.auth_state(), AuthState::Authenticated);
}

#[tokio::test]
async fn test_plants_sends_fixed_query() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server, 3600).await;
    let mock = server
        .mock("GET", "/api/v1/plants")
        .match_header("authorization", "Bearer test_token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "100".into()),
            Matcher::UrlEncoded("name".into(), "".into()),
            Matcher::UrlEncoded("status".into(), "".into()),
            Matcher::UrlEncoded("type".into(), "-1".into()),
            Matcher::UrlEncoded("sortCol".into(), "createAt".into()),
            Matcher::UrlEncoded("order".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "code": 0,
                "msg": "Success",
                "success": true,
                "data": {
                    "pageSize": 100,
                    "pageNumber": 1,
                    "total": 2,
                    "infos": [
                        { "id": 123123, "name": "Home", "status": 1, "address": "Location, USA" },
                        { "id": 456, "name": "Cabin", "status": 0, "address": "Woods" },
                    ],
                },
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client.plants().await.unwrap();

    assert_eq!(response.plants.len(), 2);
    assert_eq!(response.plants[&123123]["name"], json!("Home"));
    assert_eq!(response.plants[&456]["address"], json!("Woods"));
    assert_eq!(response.data.extra["total"], json!(2));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_plants_application_error() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server, 3600).await;
    server
        .mock("GET", "/api/v1/plants")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({ "code": 102, "msg": "Token invalid", "success": false }).to_string())
        .create_async()
        .await;

    let err = client.plants().await.unwrap_err();
    assert!(matches!(err, SolArkError::Authentication { code: 102, .. }));
    assert_eq!(err.message(), Some("Token invalid"));
}

#[tokio::test]
async fn test_flow_snapshot() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server, 3600).await;
    let mock = server
        .mock("GET", "/api/v1/plant/energy/123123/flow")
        .match_header("authorization", "Bearer test_token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "code": 0, "msg": "Success", "success": true, "data": flow_data() }).to_string())
        .create_async()
        .await;

    let flow = client.flow(123123).await.unwrap();

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.battery_power, 500);
    assert_eq!(snapshot.pv_power, 1200);
    assert_eq!(snapshot.load_or_eps_power, 700);
    assert_eq!(snapshot.soc, 64);
    assert!(snapshot.pv_to);
    assert!(snapshot.to_battery);
    assert!(snapshot.exists_meter);
    assert!(!snapshot.grid_to);
    assert_eq!(&flow.data, flow_data().as_object().unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_flow_unknown_error_keeps_server_code() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server, 3600).await;
    server
        .mock("GET", "/api/v1/plant/energy/7/flow")
        .with_status(200)
        .with_body(json!({ "code": 404, "msg": "Plant not found", "success": false }).to_string())
        .create_async()
        .await;

    let err = client.flow(7).await.unwrap_err();
    match err {
        SolArkError::Unknown { code, msg } => {
            assert_eq!(code, 404);
            assert_eq!(msg, "Plant not found");
        }
        other => panic!("expected unknown error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_flow_server_error_status() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server, 3600).await;
    server
        .mock("GET", "/api/v1/plant/energy/7/flow")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let err = client.flow(7).await.unwrap_err();
    assert!(matches!(err, SolArkError::HttpStatus { status: 503, .. }));
    assert_eq!(err.code(), None);
}

#[tokio::test]
async fn test_flow_schema_mismatch() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server, 3600).await;
    let mut data = flow_data();
    data["soc"] = json!("64%");
    server
        .mock("GET", "/api/v1/plant/energy/7/flow")
        .with_status(200)
        .with_body(json!({ "code": 0, "msg": "Success", "success": true, "data": data }).to_string())
        .create_async()
        .await;

    let err = client.flow(7).await.unwrap_err();
    assert!(matches!(err, SolArkError::Schema(_)));
}
