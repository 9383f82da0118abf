use crate::common::test_context::TestContext;
use paystack_rust::{apis::transactions::*, Context, Error};
use uuid::Uuid;

#[tokio::test]
async fn initialize_transaction() {
    let ctx = TestContext::start().await;
    let reference = format!("ref-{}", Uuid::new_v4().simple());

    let request = TransactionRequestBuilder::default()
        .email("some.one@example.com")
        .amount(20000u64)
        .currency("NGN")
        .reference(reference.as_str())
        .build()
        .unwrap();
    let res = ctx
        .client
        .transactions
        .initialize(&Context::background(), &request)
        .await
        .unwrap();

    let authorization_url = res.get("authorization_url").and_then(|v| v.as_str()).unwrap();
    assert!(authorization_url.starts_with("https://"));
    assert!(res.get("access_code").and_then(|v| v.as_str()).is_some());
    assert_eq!(
        res.get("reference").and_then(|v| v.as_str()),
        Some(reference.as_str())
    );
}

#[tokio::test]
async fn verify_unknown_transaction() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .transactions
        .verify(&Context::background(), "non-existent-reference")
        .await;

    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.status, 400);
            assert!(!e.message.is_empty());
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn verify_transaction() {
    use crate::common::mock_server::MOCK_TRANSACTION_REFERENCE;
    use paystack_rust::response::Expandable;
    use serde_json::json;

    let ctx = TestContext::start().await;

    let transaction = ctx
        .client
        .transactions
        .verify(&Context::background(), MOCK_TRANSACTION_REFERENCE)
        .await
        .unwrap();

    assert_eq!(transaction.reference, MOCK_TRANSACTION_REFERENCE);
    assert_eq!(transaction.status, "success");
    // Sent as a string
    assert_eq!(transaction.amount, 20000);
    // Sent as JSON text
    assert_eq!(transaction.metadata.get("cart_id"), Some(&json!(398)));
    assert!(transaction.paid_at.is_some());
    assert_eq!(transaction.customer.email, "hello@email.com");
    assert_eq!(transaction.authorization.authorization_code, "AUTH_ahisucjkru");
    // Sent as a number
    assert_eq!(transaction.authorization.exp_year, "2030");
    assert!(transaction.authorization.reusable);
    assert_eq!(transaction.plan, None);
    assert!(matches!(transaction.subaccount, Some(Expandable::Object(_))));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn transaction_timeline() {
    use crate::common::mock_server::MOCK_TRANSACTION_REFERENCE;

    let ctx = TestContext::start().await;

    let timeline = ctx
        .client
        .transactions
        .timeline(&Context::background(), MOCK_TRANSACTION_REFERENCE)
        .await
        .unwrap();

    assert!(timeline.success);
    assert_eq!(timeline.attempts, 1);
    assert_eq!(timeline.time_spent, 35);
    assert_eq!(timeline.history.len(), 2);
}
