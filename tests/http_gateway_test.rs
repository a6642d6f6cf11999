use cpf_check::{
    CheckError, Cpf, CpfChecker, HttpGateway, MembershipGateway, Registry, StaticListGateway,
};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn cpf(raw: &str) -> Cpf {
    Cpf::parse(raw).expect("test identifier must be valid")
}

#[tokio::test]
async fn test_member_response() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/fraud/12345678909");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "member": true }));
        })
        .await;

    let gateway =
        HttpGateway::new(Registry::Fraud, server.url("/fraud/"), Duration::from_secs(2)).unwrap();

    // Formatted input is looked up by its digits.
    assert!(gateway.is_member(&cpf("123.456.789-09")).await.unwrap());
    assert_eq!(gateway.endpoint(), server.url("/fraud"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_member_responses() {
    let server = MockServer::start_async().await;
    let listed_false = server
        .mock_async(|when, then| {
            when.method(GET).path("/debt/52998224725");
            then.status(200)
                .json_body(serde_json::json!({ "member": false }));
        })
        .await;
    let not_found = server
        .mock_async(|when, then| {
            when.method(GET).path("/debt/12345678909");
            then.status(404);
        })
        .await;

    let gateway =
        HttpGateway::new(Registry::Debt, server.url("/debt"), Duration::from_secs(2)).unwrap();

    assert!(!gateway.is_member(&cpf("52998224725")).await.unwrap());
    assert!(!gateway.is_member(&cpf("12345678909")).await.unwrap());
    listed_false.assert_async().await;
    not_found.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_lookup_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/debt/12345678909");
            then.status(503);
        })
        .await;

    let gateway =
        HttpGateway::new(Registry::Debt, server.url("/debt"), Duration::from_secs(2)).unwrap();

    let err = gateway.is_member(&cpf("12345678909")).await.unwrap_err();
    assert!(matches!(
        err,
        CheckError::LookupUnavailable {
            registry: Registry::Debt,
            ..
        }
    ));
}

#[tokio::test]
async fn test_garbled_body_is_lookup_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fraud/12345678909");
            then.status(200).body("yes");
        })
        .await;

    let gateway =
        HttpGateway::new(Registry::Fraud, server.url("/fraud"), Duration::from_secs(2)).unwrap();

    assert!(matches!(
        gateway.is_member(&cpf("12345678909")).await,
        Err(CheckError::LookupUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_slow_registry_is_reported_unverified() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/debt/12345678909");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(serde_json::json!({ "member": true }));
        })
        .await;

    let debt = HttpGateway::new(Registry::Debt, server.url("/debt"), Duration::from_millis(50))
        .unwrap();
    let checker = CpfChecker::new(
        Arc::new(StaticListGateway::default_for(Registry::Fraud)),
        Arc::new(debt),
    );

    let result = checker.check("12345678909").await;

    assert!(result.is_valid());
    assert!(result.is_flagged(Registry::Fraud));
    assert!(!result.is_flagged(Registry::Debt));
    assert!(result.unverified().contains(&Registry::Debt));
    assert!(result
        .message()
        .contains("Não foi possível consultar: base de dados de débitos."));
}

#[tokio::test]
async fn test_invalid_identifier_never_reaches_registry() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(serde_json::json!({ "member": true }));
        })
        .await;

    let fraud =
        HttpGateway::new(Registry::Fraud, server.url("/fraud"), Duration::from_secs(2)).unwrap();
    let debt =
        HttpGateway::new(Registry::Debt, server.url("/debt"), Duration::from_secs(2)).unwrap();
    let checker = CpfChecker::new(Arc::new(fraud), Arc::new(debt));

    for raw in ["11111111111", "123.456.789-00", "1234"] {
        assert!(!checker.check(raw).await.is_valid());
    }

    assert_eq!(mock.hits_async().await, 0);
}
