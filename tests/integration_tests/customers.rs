use crate::common::test_context::TestContext;
use paystack_rust::{apis::customers::*, Context, Error};
use serde_json::json;
use uuid::Uuid;

fn new_customer_request() -> CreateCustomerRequest {
    CreateCustomerRequestBuilder::default()
        .email(format!("customer-{}@example.com", Uuid::new_v4().simple()))
        .first_name("Some")
        .last_name("One")
        .metadata(
            json!({ "source": "integration-tests" })
                .as_object()
                .unwrap()
                .clone(),
        )
        .build()
        .unwrap()
}

#[tokio::test]
async fn create_and_get_customer() {
    let ctx = TestContext::start().await;
    let bg = Context::background();
    let request = new_customer_request();

    let created = ctx.client.customers.create(&bg, &request).await.unwrap();

    assert_eq!(created.email, request.email);
    assert_eq!(created.first_name, "Some");
    assert_eq!(created.last_name, "One");
    assert_eq!(created.metadata.get("source"), Some(&json!("integration-tests")));
    assert!(created.customer_code.starts_with("CUS_"));
    assert!(created.created_at.is_some());

    // Fetching the same customer twice yields the same resource
    let first = ctx
        .client
        .customers
        .get(&bg, &created.customer_code)
        .await
        .unwrap();
    let second = ctx
        .client
        .customers
        .get(&bg, &created.customer_code)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.id, created.id);
    assert_eq!(first.email, created.email);
}

#[tokio::test]
async fn get_customer_by_email() {
    let ctx = TestContext::start().await;
    let bg = Context::background();

    let created = ctx
        .client
        .customers
        .create(&bg, &new_customer_request())
        .await
        .unwrap();
    let fetched = ctx.client.customers.get(&bg, &created.email).await.unwrap();

    assert_eq!(fetched.customer_code, created.customer_code);
}

#[tokio::test]
async fn update_customer() {
    let ctx = TestContext::start().await;
    let bg = Context::background();

    let created = ctx
        .client
        .customers
        .create(&bg, &new_customer_request())
        .await
        .unwrap();

    let update = UpdateCustomerRequestBuilder::default()
        .first_name("Another")
        .phone("+2348123456789")
        .build()
        .unwrap();
    let updated = ctx
        .client
        .customers
        .update(&bg, &created.customer_code, &update)
        .await
        .unwrap();

    assert_eq!(updated.customer_code, created.customer_code);
    assert_eq!(updated.first_name, "Another");
    assert_eq!(updated.last_name, "One");
    assert_eq!(updated.phone, "+2348123456789");
}

#[tokio::test]
async fn list_customers() {
    let ctx = TestContext::start().await;
    let bg = Context::background();

    let created = ctx
        .client
        .customers
        .create(&bg, &new_customer_request())
        .await
        .unwrap();

    let customers = ctx.client.customers.list_n(&bg, 50, 1).await.unwrap();

    assert!(customers.meta.total >= 1);
    assert_eq!(customers.meta.per_page, 50);
    assert_eq!(customers.meta.page, 1);
    assert!(customers
        .values
        .iter()
        .any(|c| c.customer_code == created.customer_code));
}

#[tokio::test]
async fn set_risk_action() {
    let ctx = TestContext::start().await;
    let bg = Context::background();

    let created = ctx
        .client
        .customers
        .create(&bg, &new_customer_request())
        .await
        .unwrap();
    assert_eq!(created.risk_action, "default");

    let customer = ctx
        .client
        .customers
        .set_risk_action(&bg, &created.customer_code, RiskAction::Deny)
        .await
        .unwrap();

    assert_eq!(customer.customer_code, created.customer_code);
    assert_eq!(customer.risk_action, "deny");
}

#[tokio::test]
async fn create_customer_with_invalid_email() {
    let ctx = TestContext::start().await;

    let request = CreateCustomerRequestBuilder::default()
        .email("not-an-email")
        .build()
        .unwrap();
    let res = ctx
        .client
        .customers
        .create(&Context::background(), &request)
        .await;

    assert!(matches!(res, Err(Error::ApiError(e)) if e.status == 400));
}

#[tokio::test]
async fn get_unknown_customer() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .customers
        .get(&Context::background(), "CUS_doesnotexist")
        .await;

    match res {
        Err(Error::ApiError(e)) => assert_eq!(e.status, 404),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn deactivate_authorization() {
    let ctx = TestContext::start().await;
    let bg = Context::background();

    ctx.client
        .customers
        .deactivate_authorization(&bg, "AUTH_72btv547")
        .await
        .unwrap();

    let res = ctx
        .client
        .customers
        .deactivate_authorization(&bg, "not-an-authorization")
        .await;
    assert!(matches!(res, Err(Error::ApiError(e)) if e.status == 404));
}
