//! Invoices, refunds and payment webhooks.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use super::{CourseSource, Currency, PaymentStatus, decimal_text};

/// Body of `POST v1/payment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Merchant-side order identifier.
    pub order_id: String,
    /// Invoice amount as a decimal string.
    pub amount: String,
    /// Invoice currency code.
    pub currency: String,
    /// Blockchain network code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Link for the "return to shop" button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_return: Option<String>,
    /// Redirect target after a successful payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_success: Option<String>,
    /// Webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_callback: Option<String>,
    /// Whether the payer may settle in several transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_payment_multiple: Option<bool>,
    /// Invoice lifetime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<u32>,
    /// Target currency for conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<String>,
    /// Share of the fee charged to the payer, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtract: Option<u32>,
    /// Accepted underpayment, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_payment_percent: Option<f64>,
    /// Free-form merchant data echoed back in webhooks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
    /// Currencies the payer may choose from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<Vec<Currency>>,
    /// Currencies excluded from the payment page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except_currencies: Option<Vec<Currency>>,
    /// Exchange rate source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_source: Option<CourseSource>,
    /// Referral code of another merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_referral_code: Option<String>,
    /// Discount (positive) or surcharge (negative), in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<i32>,
    /// Refresh an expired invoice with the same `order_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_refresh: Option<bool>,
}

impl CreatePaymentRequest {
    /// Creates a request with only the required fields set.
    #[must_use]
    pub fn new(
        amount: impl Into<String>,
        currency: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            amount: amount.into(),
            currency: currency.into(),
            ..Self::default()
        }
    }
}

/// An invoice as returned by `v1/payment` and `v1/payment/info`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Gateway invoice identifier.
    pub uuid: String,
    /// Merchant-side order identifier.
    pub order_id: String,
    /// Invoice amount.
    pub amount: String,
    /// Amount actually paid.
    #[serde(default)]
    pub payment_amount: Option<String>,
    /// Amount the payer has to send in `payer_currency`.
    #[serde(default)]
    pub payer_amount: Option<String>,
    /// Applied discount, in percent, as a decimal string.
    #[serde(default, deserialize_with = "decimal_text")]
    pub discount_percent: Option<String>,
    /// Applied discount, in invoice currency, as a decimal string.
    #[serde(default, deserialize_with = "decimal_text")]
    pub discount: Option<String>,
    /// Currency chosen by the payer.
    #[serde(default)]
    pub payer_currency: Option<String>,
    /// Invoice currency.
    pub currency: String,
    /// Amount credited to the merchant balance.
    #[serde(default)]
    pub merchant_amount: Option<String>,
    /// Blockchain network code.
    #[serde(default)]
    pub network: Option<String>,
    /// Deposit address.
    #[serde(default)]
    pub address: Option<String>,
    /// Sender address.
    #[serde(default)]
    pub from: Option<String>,
    /// Transaction hash.
    #[serde(default)]
    pub txid: Option<String>,
    /// Current payment status.
    pub payment_status: PaymentStatus,
    /// Payment page URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Expiry as a unix timestamp.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub expired_at: Option<i64>,
    /// Whether the invoice reached a terminal status.
    pub is_final: bool,
    /// Merchant data from the create request.
    #[serde(default)]
    pub additional_data: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST v1/payment/info`. Set either `uuid` or `order_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfoRequest {
    /// Gateway invoice identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Merchant-side order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl PaymentInfoRequest {
    /// Looks a payment up by gateway identifier.
    #[must_use]
    pub fn by_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            order_id: None,
        }
    }

    /// Looks a payment up by merchant order identifier.
    #[must_use]
    pub fn by_order_id(order_id: impl Into<String>) -> Self {
        Self {
            uuid: None,
            order_id: Some(order_id.into()),
        }
    }
}

/// Body of `POST v1/payment/refund`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRefundRequest {
    /// Destination address of the refund.
    pub address: String,
    /// Whether the refund fee is taken from the refunded amount.
    pub is_subtract: bool,
    /// Gateway invoice identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Merchant-side order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Body of `POST v1/payment/resend`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendWebhookRequest {
    /// Gateway invoice identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Merchant-side order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Body of `POST v1/test-webhook/payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestWebhookRequest {
    /// Webhook URL to call.
    pub url_callback: String,
    /// Currency code.
    pub currency: String,
    /// Network code.
    pub network: String,
    /// Gateway invoice identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Merchant-side order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Status to report in the test webhook.
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payment_request_minimal_body() {
        let request = CreatePaymentRequest::new("10", "USDT", "abc123");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"order_id":"abc123","amount":"10","currency":"USDT"}"#
        );
    }

    #[test]
    fn test_create_payment_request_optional_fields() {
        let request = CreatePaymentRequest {
            url_callback: Some("https://example.com/callback".to_owned()),
            lifetime: Some(3600),
            currencies: Some(vec![Currency::new("USDT").on_network("tron")]),
            course_source: Some(CourseSource::Binance),
            is_refresh: Some(false),
            ..CreatePaymentRequest::new("10", "USDT", "abc123")
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "order_id": "abc123",
                "amount": "10",
                "currency": "USDT",
                "url_callback": "https://example.com/callback",
                "lifetime": 3600,
                "currencies": [{"currency": "USDT", "network": "tron"}],
                "course_source": "Binance",
                "is_refresh": false
            })
        );
    }

    #[test]
    fn test_payment_deserializes_nullable_fields() {
        let payment: Payment = serde_json::from_value(json!({
            "uuid": "26109ba0-b05b-4ee0-93d1-fd62c822ce95",
            "order_id": "1",
            "amount": "15.00",
            "payment_amount": null,
            "payer_amount": null,
            "discount_percent": null,
            "discount": "0.00000000",
            "payer_currency": null,
            "currency": "USD",
            "merchant_amount": null,
            "network": null,
            "address": null,
            "from": null,
            "txid": null,
            "payment_status": "check",
            "url": "https://pay.cryptomus.com/pay/26109ba0-b05b-4ee0-93d1-fd62c822ce95",
            "expired_at": 1689098133,
            "is_final": false,
            "additional_data": null,
            "created_at": "2023-07-11T20:23:52+03:00",
            "updated_at": "2023-07-11T21:24:17+03:00"
        }))
        .unwrap();
        assert_eq!(payment.payment_status, PaymentStatus::Check);
        assert_eq!(payment.discount.as_deref(), Some("0.00000000"));
        assert_eq!(payment.expired_at, Some(1_689_098_133));
        assert!(payment.address.is_none());
        assert!(!payment.is_final);
    }

    #[test]
    fn test_payment_accepts_string_timestamp_and_missing_fields() {
        let payment: Payment = serde_json::from_value(json!({
            "uuid": "u",
            "order_id": "o",
            "amount": "1",
            "currency": "USDT",
            "payment_status": "paid",
            "expired_at": "1689098133",
            "is_final": true
        }))
        .unwrap();
        assert_eq!(payment.expired_at, Some(1_689_098_133));
        assert!(payment.discount_percent.is_none());
        assert!(payment.discount.is_none());
        assert!(payment.created_at.is_none());
    }

    #[test]
    fn test_payment_discount_keeps_decimal_digits() {
        let payment: Payment = serde_json::from_value(json!({
            "uuid": "u",
            "order_id": "o",
            "amount": "1",
            "currency": "USDT",
            "payment_status": "paid",
            "is_final": true,
            "discount_percent": 5,
            "discount": "0.12345678901234567890"
        }))
        .unwrap();
        assert_eq!(payment.discount_percent.as_deref(), Some("5"));
        assert_eq!(payment.discount.as_deref(), Some("0.12345678901234567890"));
    }

    #[test]
    fn test_payment_info_request_constructors() {
        assert_eq!(
            serde_json::to_string(&PaymentInfoRequest::by_uuid("u-1")).unwrap(),
            r#"{"uuid":"u-1"}"#
        );
        assert_eq!(
            serde_json::to_string(&PaymentInfoRequest::by_order_id("o-1")).unwrap(),
            r#"{"order_id":"o-1"}"#
        );
    }

    #[test]
    fn test_test_webhook_request_body() {
        let request = TestWebhookRequest {
            url_callback: "https://example.com/hook".to_owned(),
            currency: "USDT".to_owned(),
            network: "tron".to_owned(),
            uuid: None,
            order_id: Some("o-1".to_owned()),
            status: PaymentStatus::PaidOver,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"url_callback":"https://example.com/hook","currency":"USDT","network":"tron","order_id":"o-1","status":"paid_over"}"#
        );
    }
}
