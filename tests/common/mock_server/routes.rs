use crate::common::mock_server::{
    MockServerStorage, MOCK_ACCOUNT_NUMBER, MOCK_BANK_CODE, MOCK_OTP, MOCK_TRANSACTION_REFERENCE,
};
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use wiremock::{Request, ResponseTemplate};

static MOCK_DOMAIN: &str = "test";
static MOCK_INTEGRATION: u64 = 100032;

pub(super) fn success(message: &str, data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": true,
        "message": message,
        "data": data,
    }))
}

pub(super) fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "status": false,
        "message": message,
    }))
}

fn paginated(message: &str, items: &[Value], req: &Request) -> ResponseTemplate {
    let query = query(req);
    let per_page = query
        .get("perPage")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(50)
        .max(1);
    let page = query
        .get("page")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);
    let skipped = (page - 1) * per_page;
    let data = items
        .iter()
        .skip(skipped)
        .take(per_page)
        .cloned()
        .collect::<Vec<_>>();

    ResponseTemplate::new(200).set_body_json(json!({
        "status": true,
        "message": message,
        "data": data,
        "meta": {
            "total": items.len(),
            "skipped": skipped,
            // Paystack is not consistent about the type of these
            "perPage": per_page.to_string(),
            "page": page,
            "pageCount": (items.len() + per_page - 1) / per_page,
        }
    }))
}

fn query(req: &Request) -> HashMap<String, String> {
    req.url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn form(req: &Request) -> HashMap<String, String> {
    String::from_utf8_lossy(&req.body)
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| {
            let decode = |s: &str| {
                urlencoding::decode(&s.replace('+', " "))
                    .map(|s| s.into_owned())
                    .unwrap_or_default()
            };
            (decode(k), decode(v))
        })
        .collect()
}

fn json_body(req: &Request) -> Map<String, Value> {
    serde_json::from_slice(&req.body).unwrap_or_default()
}

fn last_path_segment(req: &Request) -> String {
    let segment = req.url.path().rsplit('/').next().unwrap_or_default();
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_default()
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

fn find<'a>(items: &'a mut [Value], key: &str, id_or_code: &str) -> Option<&'a mut Value> {
    items.iter_mut().find(|item| {
        item["id"].to_string() == id_or_code || item[key].as_str() == Some(id_or_code)
    })
}

/// `GET /bank`
pub(super) fn list_banks(_req: &Request, _storage: &MockServerStorage) -> ResponseTemplate {
    success(
        "Banks retrieved",
        json!([
            {
                "id": 9,
                "name": "Guaranty Trust Bank",
                "slug": "guaranty-trust-bank",
                "code": MOCK_BANK_CODE,
                "longcode": "058152036",
                "long_code": "058152036",
                "gateway": null,
                "active": true,
                "is_deleted": null,
                "createdAt": "2016-07-14T10:04:29.000Z",
                "updatedAt": "2016-07-14T10:04:29.000Z"
            },
            {
                // Ids are sometimes sent as strings
                "id": "21",
                "name": "Zenith Bank",
                "slug": "zenith-bank",
                "code": "057",
                "long_code": "057150013",
                "gateway": "emandate",
                "active": 1,
                "is_deleted": "false",
                "createdAt": "2016-07-14T10:04:29.000Z",
                "updatedAt": ""
            }
        ]),
    )
}

/// `GET /bank/resolve`
pub(super) fn resolve_account_number(req: &Request, _storage: &MockServerStorage) -> ResponseTemplate {
    let query = query(req);
    if query.get("account_number").map(String::as_str) != Some(MOCK_ACCOUNT_NUMBER)
        || query.get("bank_code").map(String::as_str) != Some(MOCK_BANK_CODE)
    {
        return failure(
            422,
            "Could not resolve account name. Check parameters or try again.",
        );
    }

    success(
        "Account number resolved",
        json!({
            "account_number": MOCK_ACCOUNT_NUMBER,
            "account_name": "SOME ONE",
            "bank_id": 9
        }),
    )
}

/// `POST /customer`
pub(super) fn create_customer(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let body = json_body(req);
    let email = match body.get("email").and_then(Value::as_str) {
        Some(email) if email.contains('@') => email.to_string(),
        _ => return failure(400, "Invalid Email Address Passed"),
    };

    let mut storage = storage.write().unwrap();
    let id = storage.next_id();
    let customer = json!({
        "id": id,
        "email": email,
        "first_name": body.get("first_name").cloned().unwrap_or(Value::Null),
        "last_name": body.get("last_name").cloned().unwrap_or(Value::Null),
        "phone": body.get("phone").cloned().unwrap_or(Value::Null),
        "metadata": body.get("metadata").cloned().unwrap_or(Value::Null),
        "customer_code": format!("CUS_{:010}", id),
        "risk_action": "default",
        "domain": MOCK_DOMAIN,
        "integration": MOCK_INTEGRATION,
        "identified": false,
        "createdAt": now(),
        "updatedAt": now()
    });
    storage.customers.push(customer.clone());

    success("Customer created", customer)
}

/// `GET /customer`
pub(super) fn list_customers(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let storage = storage.read().unwrap();
    paginated("Customers retrieved", &storage.customers, req)
}

/// `GET /customer/{email_or_code}`
pub(super) fn get_customer(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let email_or_code = last_path_segment(req);
    let mut storage = storage.write().unwrap();

    let customer = storage.customers.iter().find(|c| {
        c["customer_code"].as_str() == Some(email_or_code.as_str())
            || c["email"].as_str() == Some(email_or_code.as_str())
    });

    match customer {
        Some(customer) => {
            let mut customer = customer.clone();
            customer["subscriptions"] = json!([]);
            customer["authorizations"] = json!([]);
            success("Customer retrieved", customer)
        }
        None => failure(404, "Customer not found"),
    }
}

/// `PUT /customer/{id_or_code}`
pub(super) fn update_customer(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let id_or_code = last_path_segment(req);
    let body = json_body(req);
    let mut storage = storage.write().unwrap();

    match find(&mut storage.customers, "customer_code", &id_or_code) {
        Some(customer) => {
            for field in ["first_name", "last_name", "phone", "metadata"] {
                if let Some(value) = body.get(field) {
                    customer[field] = value.clone();
                }
            }
            customer["updatedAt"] = json!(now());
            success("Customer updated", customer.clone())
        }
        None => failure(404, "Customer not found"),
    }
}

/// `POST /customer/set_risk_action`
pub(super) fn set_risk_action(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let body = json_body(req);
    let code = body
        .get("customer")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let risk_action = body.get("risk_action").cloned().unwrap_or(Value::Null);
    let mut storage = storage.write().unwrap();

    match find(&mut storage.customers, "customer_code", &code) {
        Some(customer) => {
            customer["risk_action"] = risk_action;
            success("Customer updated", customer.clone())
        }
        None => failure(404, "Customer not found"),
    }
}

/// `POST /customer/deactivate_authorization`
pub(super) fn deactivate_authorization(req: &Request, _storage: &MockServerStorage) -> ResponseTemplate {
    match form(req).get("authorization_code") {
        Some(code) if code.starts_with("AUTH_") => ResponseTemplate::new(200).set_body_json(
            json!({ "status": true, "message": "Authorization has been deactivated" }),
        ),
        _ => failure(404, "Authorization code not found."),
    }
}

/// `POST /transaction/initialize`
pub(super) fn initialize_transaction(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let body = json_body(req);
    if body.get("email").is_none() || body.get("amount").is_none() {
        return failure(400, "Email and amount are required");
    }

    let id = storage.write().unwrap().next_id();
    let access_code = format!("ACC_{:08}", id);
    let reference = body
        .get("reference")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("REF_{:08}", id));

    success(
        "Authorization URL created",
        json!({
            "authorization_url": format!("https://checkout.paystack.com/{}", access_code),
            "access_code": access_code,
            "reference": reference
        }),
    )
}

/// `GET /transaction/verify/{reference}`
pub(super) fn verify_transaction(req: &Request, _storage: &MockServerStorage) -> ResponseTemplate {
    if last_path_segment(req) != MOCK_TRANSACTION_REFERENCE {
        return failure(400, "Transaction reference not found");
    }

    success(
        "Verification successful",
        json!({
            "id": 2009945086,
            "domain": MOCK_DOMAIN,
            "status": "success",
            "reference": MOCK_TRANSACTION_REFERENCE,
            "amount": "20000",
            "message": null,
            "gateway_response": "Successful",
            "paid_at": "2022-08-09T14:21:32.000Z",
            "created_at": "2022-08-09T14:20:57.000Z",
            "channel": "card",
            "currency": "NGN",
            "ip_address": "100.64.11.35",
            // Metadata comes back as JSON text here
            "metadata": "{\"cart_id\":398}",
            "log": null,
            "fees": 100,
            "fees_split": null,
            "authorization": {
                "authorization_code": "AUTH_ahisucjkru",
                "bin": "408408",
                "last4": "4081",
                "exp_month": "12",
                "exp_year": 2030,
                "channel": "card",
                "card_type": "visa ",
                "bank": "TEST BANK",
                "country_code": "NG",
                "brand": "visa",
                "reusable": true,
                "signature": "SIG_yEXu7dLBeqG0kU7g95Ke",
                "account_name": null
            },
            "customer": {
                "id": 89929267,
                "first_name": null,
                "last_name": null,
                "email": "hello@email.com",
                "customer_code": "CUS_i5yosncbl8h2kvc",
                "phone": null,
                "metadata": null,
                "risk_action": "default"
            },
            "plan": null,
            "subaccount": {},
            "paidAt": "2022-08-09T14:21:32.000Z",
            "createdAt": "2022-08-09T14:20:57.000Z",
            "requested_amount": 20000
        }),
    )
}

/// `GET /transaction/timeline/{reference}`
pub(super) fn transaction_timeline(req: &Request, _storage: &MockServerStorage) -> ResponseTemplate {
    if last_path_segment(req) != MOCK_TRANSACTION_REFERENCE {
        return failure(404, "Transaction not found");
    }

    success(
        "Timeline retrieved",
        json!({
            "start_time": 1660054857,
            "time_spent": 35,
            "attempts": 1,
            "errors": 0,
            "success": true,
            "mobile": false,
            "input": [],
            "history": [
                { "type": "action", "message": "Attempted to pay with card", "time": 34 },
                { "type": "success", "message": "Successfully paid with card", "time": 35 }
            ]
        }),
    )
}

/// `POST /transferrecipient`
pub(super) fn create_recipient(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let body = json_body(req);
    let account_number = body
        .get("account_number")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if account_number.len() != 10 {
        return failure(400, "Account number is invalid");
    }

    let mut storage = storage.write().unwrap();
    let id = storage.next_id();
    let recipient = json!({
        "id": id,
        "type": body.get("type").cloned().unwrap_or(Value::Null),
        "name": body.get("name").cloned().unwrap_or(Value::Null),
        "description": body.get("description").cloned().unwrap_or(Value::Null),
        "metadata": body.get("metadata").cloned().unwrap_or(Value::Null),
        "currency": body.get("currency").cloned().unwrap_or_else(|| json!("NGN")),
        "recipient_code": format!("RCP_{:010}", id),
        "active": true,
        "domain": MOCK_DOMAIN,
        "integration": MOCK_INTEGRATION,
        "details": {
            "authorization_code": null,
            "account_number": account_number,
            "account_name": null,
            "bank_code": body.get("bank_code").cloned().unwrap_or(Value::Null),
            "bank_name": "Guaranty Trust Bank"
        },
        "createdAt": now(),
        "updatedAt": now()
    });
    storage.recipients.push(recipient.clone());

    success("Transfer recipient created successfully", recipient)
}

/// `GET /transferrecipient`
pub(super) fn list_recipients(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let storage = storage.read().unwrap();
    paginated("Recipients retrieved", &storage.recipients, req)
}

/// `POST /transfer`
pub(super) fn initiate_transfer(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let body = json_body(req);
    let mut storage = storage.write().unwrap();

    let recipient_code = body
        .get("recipient")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let recipient = match storage
        .recipients
        .iter()
        .find(|r| r["recipient_code"].as_str() == Some(recipient_code))
    {
        Some(recipient) => recipient.clone(),
        None => return failure(400, "Recipient specified is invalid"),
    };

    let id = storage.next_id();
    let transfer = json!({
        "id": id,
        "domain": MOCK_DOMAIN,
        "integration": MOCK_INTEGRATION,
        "source": body.get("source").cloned().unwrap_or_else(|| json!("balance")),
        "amount": body.get("amount").cloned().unwrap_or(Value::Null),
        "currency": "NGN",
        "reason": body.get("reason").cloned().unwrap_or(Value::Null),
        "recipient": recipient,
        "status": "otp",
        "transfer_code": format!("TRF_{:010}", id),
        "createdAt": now(),
        "updatedAt": now()
    });
    storage.transfers.push(transfer.clone());

    // Newly created transfers reference the recipient by id only
    let mut created = transfer;
    created["recipient"] = created["recipient"]["id"].clone();
    success("Transfer requires OTP to continue", created)
}

/// `GET /transfer/{id_or_code}`
pub(super) fn get_transfer(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let id_or_code = last_path_segment(req);
    let mut storage = storage.write().unwrap();

    match find(&mut storage.transfers, "transfer_code", &id_or_code) {
        Some(transfer) => success("Transfer retrieved", transfer.clone()),
        None => failure(404, "Transfer not found"),
    }
}

/// `POST /transfer/finalize_transfer`
pub(super) fn finalize_transfer(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let form = form(req);
    let code = form.get("transfer_code").cloned().unwrap_or_default();
    let mut storage = storage.write().unwrap();

    let transfer = match find(&mut storage.transfers, "transfer_code", &code) {
        Some(transfer) => transfer,
        None => return failure(404, "Transfer not found"),
    };
    if form.get("otp").map(String::as_str) != Some(MOCK_OTP) {
        return failure(400, "Invalid OTP");
    }

    transfer["status"] = json!("success");
    transfer["transferred_at"] = json!(now());
    success("Transfer has been queued", transfer.clone())
}

/// `POST /plan`
pub(super) fn create_plan(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let body = json_body(req);
    let (name, amount, interval) = match (body.get("name"), body.get("amount"), body.get("interval"))
    {
        (Some(name), Some(amount), Some(interval)) => (name.clone(), amount.clone(), interval.clone()),
        _ => return failure(400, "Name, amount and interval are required"),
    };

    let mut storage = storage.write().unwrap();
    let id = storage.next_id();
    let plan = json!({
        "id": id,
        "name": name,
        "amount": amount,
        "interval": interval,
        "description": body.get("description").cloned().unwrap_or(Value::Null),
        "currency": body.get("currency").cloned().unwrap_or_else(|| json!("NGN")),
        "send_invoices": body.get("send_invoices").cloned().unwrap_or(json!(true)),
        "send_sms": body.get("send_sms").cloned().unwrap_or(json!(true)),
        "invoice_limit": body.get("invoice_limit").cloned().unwrap_or(json!(0)),
        "hosted_page": false,
        "plan_code": format!("PLN_{:010}", id),
        "domain": MOCK_DOMAIN,
        "integration": MOCK_INTEGRATION,
        "createdAt": now(),
        "updatedAt": now()
    });
    storage.plans.push(plan.clone());

    success("Plan created", plan)
}

/// `GET /plan`
pub(super) fn list_plans(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let storage = storage.read().unwrap();
    paginated("Plans retrieved", &storage.plans, req)
}

/// `GET /plan/{id_or_code}`
pub(super) fn get_plan(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let id_or_code = last_path_segment(req);
    let mut storage = storage.write().unwrap();

    match find(&mut storage.plans, "plan_code", &id_or_code) {
        Some(plan) => success("Plan retrieved", plan.clone()),
        None => failure(404, "Plan not found"),
    }
}

/// `GET /balance`
pub(super) fn check_balance(_req: &Request, _storage: &MockServerStorage) -> ResponseTemplate {
    success(
        "Balances retrieved",
        json!([
            { "currency": "NGN", "balance": "1000000" },
            { "currency": "USD", "balance": 2500 }
        ]),
    )
}

/// `GET /integration/payment_session_timeout`
pub(super) fn get_session_timeout(_req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let timeout = storage.read().unwrap().session_timeout;
    success("Payment session timeout retrieved", json!({ "payment_session_timeout": timeout }))
}

/// `PUT /integration/payment_session_timeout`
pub(super) fn update_session_timeout(req: &Request, storage: &MockServerStorage) -> ResponseTemplate {
    let timeout = match form(req).get("timeout").and_then(|t| t.parse::<u64>().ok()) {
        Some(timeout) => timeout,
        None => return failure(400, "Timeout must be a number"),
    };

    storage.write().unwrap().session_timeout = timeout;
    success(
        "Payment session timeout updated",
        json!({ "payment_session_timeout": timeout }),
    )
}
