#![allow(clippy::unwrap_used)]
// Integration tests for `RpcClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use zabsync_api::models::{GroupRef, NewHost, NewInterface};
use zabsync_api::{AuthPlacement, Error, RpcClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(placement: AuthPlacement) -> (MockServer, RpcClient) {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&server.uri()).unwrap();
    let client = RpcClient::with_client(reqwest::Client::new(), endpoint, placement);
    (server, client)
}

fn ok_result(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": 1,
    }))
}

fn fault(code: i64, message: &str, data: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "error": { "code": code, "message": message, "data": data },
        "id": 1,
    }))
}

async fn login(client: &RpcClient, server: &MockServer) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "user.login" })))
        .respond_with(ok_result(json!("0424bd59b807674191e7d77572075f33")))
        .mount(server)
        .await;
    let secret: secrecy::SecretString = "zabbix".to_string().into();
    client.login("Admin", &secret).await.unwrap();
}

/// Matches requests that carry no Authorization header.
struct NoAuthHeader;

impl Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_stores_token() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "user.login",
            "params": { "user": "Admin", "password": "zabbix" },
        })))
        .respond_with(ok_result(json!("0424bd59b807674191e7d77572075f33")))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "zabbix".to_string().into();
    assert!(!client.has_session());
    client.login("Admin", &secret).await.unwrap();
    assert!(client.has_session());
}

#[tokio::test]
async fn test_login_fault_is_authentication_error() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .respond_with(fault(
            -32602,
            "Invalid params.",
            "Incorrect user name or password.",
        ))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let result = client.login("Admin", &secret).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
    assert!(!client.has_session(), "failed login must not store a token");
}

#[tokio::test]
async fn test_login_call_carries_no_token() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .and(NoAuthHeader)
        .respond_with(ok_result(json!("deadbeef")))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "zabbix".to_string().into();
    client.login("Admin", &secret).await.unwrap();
}

#[tokio::test]
async fn test_token_attached_as_bearer_header() {
    let (server, client) = setup(AuthPlacement::Header).await;
    login(&client, &server).await;

    Mock::given(method("POST"))
        .and(header(
            "authorization",
            "Bearer 0424bd59b807674191e7d77572075f33",
        ))
        .and(body_partial_json(json!({ "method": "hostgroup.get" })))
        .respond_with(ok_result(json!([{ "groupid": "42", "name": "prod" }])))
        .expect(1)
        .mount(&server)
        .await;

    let id = client.get_group_id("prod").await.unwrap();
    assert_eq!(id, "42");
}

#[tokio::test]
async fn test_token_attached_in_request_body() {
    let (server, client) = setup(AuthPlacement::Body).await;
    login(&client, &server).await;

    Mock::given(method("POST"))
        .and(NoAuthHeader)
        .and(body_partial_json(json!({
            "method": "hostgroup.get",
            "auth": "0424bd59b807674191e7d77572075f33",
        })))
        .respond_with(ok_result(json!([{ "groupid": "7", "name": "staging" }])))
        .expect(1)
        .mount(&server)
        .await;

    let id = client.get_group_id("staging").await.unwrap();
    assert_eq!(id, "7");
}

// ── Group resolution ────────────────────────────────────────────────

#[tokio::test]
async fn test_group_not_found() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "hostgroup.get" })))
        .respond_with(ok_result(json!([])))
        .mount(&server)
        .await;

    let result = client.get_group_id("missing").await;
    match result {
        Err(Error::GroupNotFound { ref name }) => assert_eq!(name, "missing"),
        other => panic!("expected GroupNotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_group_first_match_wins() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .respond_with(ok_result(json!([
            { "groupid": "10", "name": "prod" },
            { "groupid": "11", "name": "prod" },
        ])))
        .mount(&server)
        .await;

    assert_eq!(client.get_group_id("prod").await.unwrap(), "10");
}

// ── Host enumeration ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_hosts_returns_all_records() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "host.get",
            "params": { "groupids": ["42"], "selectInterfaces": "extend" },
        })))
        .respond_with(ok_result(json!([
            {
                "hostid": "1001",
                "host": "a.example.com",
                "name": "a",
                "interfaces": [{
                    "interfaceid": "5",
                    "type": "1",
                    "main": "1",
                    "useip": "1",
                    "ip": "10.0.0.5",
                    "dns": "a.example.com",
                    "port": "10050"
                }]
            },
            { "hostid": "1002", "host": "b.example.com", "name": "b", "interfaces": [] },
        ])))
        .mount(&server)
        .await;

    let hosts = client.list_hosts("42").await.unwrap();

    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts[0].hostid, "1001");
    assert_eq!(hosts[0].interfaces.len(), 1);
    assert_eq!(hosts[0].interfaces[0].ip, "10.0.0.5");
    assert_eq!(hosts[1].host, "b.example.com");
}

#[tokio::test]
async fn test_list_hosts_empty_group() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .respond_with(ok_result(json!([])))
        .mount(&server)
        .await;

    let hosts = client.list_hosts("42").await.unwrap();
    assert!(hosts.is_empty());
}

#[tokio::test]
async fn test_list_hosts_skips_malformed_record() {
    let (server, client) = setup(AuthPlacement::Header).await;

    // Second record is missing the mandatory hostid/host fields.
    Mock::given(method("POST"))
        .respond_with(ok_result(json!([
            { "hostid": "1", "host": "a.example.com" },
            { "unexpected": true },
            { "hostid": "3", "host": "c.example.com" },
        ])))
        .mount(&server)
        .await;

    let hosts = client.list_hosts("42").await.unwrap();
    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts[0].hostid, "1");
    assert_eq!(hosts[1].hostid, "3");
}

// ── Mutations ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_host_returns_new_id() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "host.create",
            "params": {
                "host": "new.example.com",
                "interfaces": [{ "type": 1, "main": 1, "useip": 1, "ip": "10.0.0.9" }],
                "groups": [{ "groupids": ["42"] }],
            },
        })))
        .respond_with(ok_result(json!({ "hostids": ["2001"] })))
        .mount(&server)
        .await;

    let host = NewHost {
        host: "new.example.com".into(),
        name: "new.example.com".into(),
        interfaces: vec![NewInterface {
            interface_type: 1,
            main: 1,
            useip: 1,
            ip: "10.0.0.9".into(),
            dns: String::new(),
            port: "10050".into(),
        }],
        groups: vec![GroupRef {
            groupids: vec!["42".into()],
        }],
    };

    let id = client.create_host(&host).await.unwrap();
    assert_eq!(id, "2001");
}

#[tokio::test]
async fn test_rename_host() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "host.update",
            "params": { "hostid": "1001", "name": "a.isb" },
        })))
        .respond_with(ok_result(json!({ "hostids": ["1001"] })))
        .expect(1)
        .mount(&server)
        .await;

    client.rename_host("1001", "a.isb").await.unwrap();
}

#[tokio::test]
async fn test_update_host_interface() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "host.update",
            "params": {
                "hostid": "1001",
                "interfaces": [{ "ip": "10.0.0.9", "dns": "a.example.com" }],
            },
        })))
        .respond_with(ok_result(json!({ "hostids": ["1001"] })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_host_interface("1001", "10.0.0.9", "a.example.com")
        .await
        .unwrap();
}

// ── Error classification ────────────────────────────────────────────

#[tokio::test]
async fn test_fault_envelope() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .respond_with(fault(-32500, "Application error.", "No permissions."))
        .mount(&server)
        .await;

    let result = client.list_hosts("42").await;
    match result {
        Err(Error::Fault { code, ref message, .. }) => {
            assert_eq!(code, -32500);
            assert!(message.contains("Application error"));
        }
        other => panic!("expected Fault, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_protocol_error() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
        .mount(&server)
        .await;

    let result = client.list_hosts("42").await;

    // Protocol and Fault must stay distinct error kinds.
    assert!(
        matches!(result, Err(Error::Protocol { .. })),
        "expected Protocol, got: {result:?}"
    );
    assert!(!matches!(result, Err(Error::Fault { .. })));
}

#[tokio::test]
async fn test_empty_envelope_is_protocol_error() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "jsonrpc": "2.0", "id": 1 })),
        )
        .mount(&server)
        .await;

    let result = client.get_group_id("prod").await;
    assert!(
        matches!(result, Err(Error::Protocol { .. })),
        "expected Protocol, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_id_echo_is_protocol_error() {
    let (server, client) = setup(AuthPlacement::Header).await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "jsonrpc": "2.0", "result": [] })),
        )
        .mount(&server)
        .await;

    let result = client.get_group_id("prod").await;
    assert!(
        matches!(result, Err(Error::Protocol { .. })),
        "expected Protocol, got: {result:?}"
    );
}
