use crate::common::test_context::TestContext;
use paystack_rust::{transport::RequestBody, Context, Error};
use reqwest::Method;
use std::time::Duration;

#[tokio::test]
async fn invalid_api_key() {
    let ctx = TestContext::start().await;
    let client = ctx.client_with_invalid_key();

    let res = client.banks.list(&Context::background()).await;

    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.status, 401);
            assert!(!e.message.is_empty());
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn unknown_route() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .transport()
        .execute(
            &Context::background(),
            Method::GET,
            "/does/not/exist",
            RequestBody::Empty,
        )
        .await;

    assert!(matches!(res, Err(Error::ApiError(e)) if e.status == 404));
}

#[tokio::test]
async fn expired_context() {
    let ctx = TestContext::start().await;
    let expired = Context::background().with_timeout(Duration::ZERO);

    let res = ctx.client.banks.list(&expired).await;

    assert!(matches!(res, Err(Error::DeadlineExceeded)));
}

#[tokio::test]
async fn canceled_context() {
    let ctx = TestContext::start().await;
    let (parent, cancel) = Context::background().with_cancel();
    let child = parent.clone().with_timeout(Duration::from_secs(30));

    cancel.cancel();

    assert!(matches!(
        ctx.client.banks.list(&parent).await,
        Err(Error::Cancelled)
    ));
    assert!(matches!(
        ctx.client.customers.list(&child).await,
        Err(Error::Cancelled)
    ));
}

#[tokio::test]
async fn clients_can_be_shared_across_tasks() {
    let ctx = TestContext::start().await;

    let handles = (0..4)
        .map(|_| {
            let client = ctx.client.clone();
            tokio::spawn(async move { client.banks.list(&Context::background()).await })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let banks = handle.await.unwrap().unwrap();
        assert!(!banks.values.is_empty());
    }
}
