use crate::common::test_context::TestContext;
use paystack_rust::{apis::transfers::*, response::Expandable, Context, Error};

async fn create_recipient(ctx: &TestContext) -> Recipient {
    let request = CreateRecipientRequestBuilder::default()
        .recipient_type(RecipientType::Nuban)
        .name("Some One")
        .account_number("0001234567")
        .bank_code("058")
        .currency("NGN")
        .build()
        .unwrap();

    ctx.client
        .transfers
        .create_recipient(&Context::background(), &request)
        .await
        .unwrap()
}

#[tokio::test]
async fn create_and_list_recipients() {
    let ctx = TestContext::start().await;

    let recipient = create_recipient(&ctx).await;

    assert_eq!(recipient.recipient_type, "nuban");
    assert_eq!(recipient.name, "Some One");
    assert!(recipient.recipient_code.starts_with("RCP_"));
    assert!(recipient.active);

    let recipients = ctx
        .client
        .transfers
        .list_recipients_n(&Context::background(), 100, 1)
        .await
        .unwrap();
    assert!(recipients
        .values
        .iter()
        .any(|r| r.recipient_code == recipient.recipient_code));
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn initiate_and_finalize_transfer() {
    use crate::common::mock_server::MOCK_OTP;

    let ctx = TestContext::start().await;
    let bg = Context::background();
    let recipient = create_recipient(&ctx).await;

    let request = InitiateTransferRequestBuilder::default()
        .amount(370000u64)
        .recipient(recipient.recipient_code.as_str())
        .reason("Holiday flexing")
        .build()
        .unwrap();
    let transfer = ctx.client.transfers.initiate(&bg, &request).await.unwrap();

    assert_eq!(transfer.amount, 370000);
    assert_eq!(transfer.source, "balance");
    assert_eq!(transfer.status, "otp");
    // Newly initiated transfers reference the recipient by id
    assert_eq!(transfer.recipient, Some(Expandable::Id(recipient.id)));

    // Fetching it returns the recipient expanded
    let fetched = ctx
        .client
        .transfers
        .get(&bg, &transfer.transfer_code)
        .await
        .unwrap();
    let expanded = fetched.recipient.as_ref().and_then(Expandable::as_object).unwrap();
    assert_eq!(expanded.recipient_code, recipient.recipient_code);

    ctx.client
        .transfers
        .finalize(&bg, &transfer.transfer_code, MOCK_OTP)
        .await
        .unwrap();

    let finalized = ctx
        .client
        .transfers
        .get(&bg, &transfer.transfer_code)
        .await
        .unwrap();
    assert_eq!(finalized.status, "success");
    assert!(finalized.transferred_at.is_some());
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn finalize_transfer_with_wrong_otp() {
    let ctx = TestContext::start().await;
    let bg = Context::background();
    let recipient = create_recipient(&ctx).await;

    let request = InitiateTransferRequestBuilder::default()
        .amount(1000u64)
        .recipient(recipient.recipient_code.as_str())
        .build()
        .unwrap();
    let transfer = ctx.client.transfers.initiate(&bg, &request).await.unwrap();

    let res = ctx
        .client
        .transfers
        .finalize(&bg, &transfer.transfer_code, "000000")
        .await;

    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.message, "Invalid OTP");
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn initiate_transfer_to_unknown_recipient() {
    let ctx = TestContext::start().await;

    let request = InitiateTransferRequestBuilder::default()
        .amount(1000u64)
        .recipient("RCP_doesnotexist")
        .build()
        .unwrap();
    let res = ctx
        .client
        .transfers
        .initiate(&Context::background(), &request)
        .await;

    assert!(matches!(res, Err(Error::ApiError(e)) if e.status == 400));
}
