//! Request and response shapes of the Cryptomus API.
//!
//! Request structs serialize in field declaration order and omit every
//! `None` field, since the signature covers the exact serialized body.
//! Response structs keep identifying fields required and everything the
//! gateway may send as `null` optional.

mod payment;
mod recurring;
mod wallet;

use serde::{Deserialize, Deserializer, Serialize};

pub use payment::{
    CreatePaymentRequest, Payment, PaymentInfoRequest, PaymentRefundRequest,
    ResendWebhookRequest, TestWebhookRequest,
};
pub use recurring::{
    CreateRecurringRequest, Paginate, Recurring, RecurringCancelRequest, RecurringCancelled,
    RecurringInfoRequest, RecurringInvoice, RecurringList, RecurringListRequest,
};
pub use wallet::{
    BlockStaticWalletRequest, BlockedWallet, BlockedWalletRefund, CreateStaticWalletRequest,
    GenQrRequest, QrCode, RefundFromBlockedWalletRequest, StaticWallet,
};

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Gateway-side status; `0` on success.
    pub state: i64,
    /// Operation-specific payload.
    pub result: T,
}

/// Result of endpoints that answer with an empty list.
pub type EmptyResult = Vec<serde_json::Value>;

/// Reads an optional decimal sent either as a JSON string or a JSON number,
/// keeping the digits exactly as received.
pub(crate) fn decimal_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Decimal>::deserialize(deserializer)?.map(|decimal| match decimal {
        Decimal::Text(text) => text,
        Decimal::Number(number) => number.to_string(),
    }))
}

/// Status of a payment, as reported in `payment_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Paid the exact amount.
    Paid,
    /// Paid more than requested.
    PaidOver,
    /// Paid less than requested.
    WrongAmount,
    /// Payment is being processed.
    Process,
    /// Waiting for blockchain confirmations.
    ConfirmCheck,
    /// Underpaid; waiting for the remainder.
    WrongAmountWaiting,
    /// Waiting for the transaction to appear on chain.
    Check,
    /// Payment failed.
    Fail,
    /// Payment cancelled.
    Cancel,
    /// Gateway-side failure.
    SystemFail,
    /// Refund in progress.
    RefundProcess,
    /// Refund failed.
    RefundFail,
    /// Funds locked by AML checks.
    Locked,
}

impl PaymentStatus {
    /// Returns the `snake_case` wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::PaidOver => "paid_over",
            Self::WrongAmount => "wrong_amount",
            Self::Process => "process",
            Self::ConfirmCheck => "confirm_check",
            Self::WrongAmountWaiting => "wrong_amount_waiting",
            Self::Check => "check",
            Self::Fail => "fail",
            Self::Cancel => "cancel",
            Self::SystemFail => "system_fail",
            Self::RefundProcess => "refund_process",
            Self::RefundFail => "refund_fail",
            Self::Locked => "locked",
        }
    }
}

impl core::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a static wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticWalletStatus {
    /// Wallet no longer accepts deposits.
    Blocked,
    /// Wallet accepts deposits.
    Active,
    /// Wallet is inactive.
    InActive,
}

impl StaticWalletStatus {
    /// Returns the `snake_case` wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::Active => "active",
            Self::InActive => "in_active",
        }
    }
}

impl core::fmt::Display for StaticWalletStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exchange rate source used when converting invoice amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseSource {
    /// Binance spot.
    Binance,
    /// Binance P2P.
    BinanceP2P,
    /// Exmo.
    Exmo,
    /// KuCoin.
    Kucoin,
    /// Garantex.
    Garantexio,
}

impl CourseSource {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Binance => "Binance",
            Self::BinanceP2P => "BinanceP2P",
            Self::Exmo => "Exmo",
            Self::Kucoin => "Kucoin",
            Self::Garantexio => "Garantexio",
        }
    }
}

impl core::fmt::Display for CourseSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A currency, optionally pinned to one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency code (e.g., `"USDT"`).
    pub currency: String,
    /// Network code (e.g., `"tron"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl Currency {
    /// Creates a currency accepted on any network.
    #[must_use]
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            network: None,
        }
    }

    /// Pins the currency to a network.
    #[must_use]
    pub fn on_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_status_wire_names() {
        for status in [
            PaymentStatus::Paid,
            PaymentStatus::PaidOver,
            PaymentStatus::WrongAmountWaiting,
            PaymentStatus::SystemFail,
            PaymentStatus::RefundFail,
            PaymentStatus::Locked,
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
        let parsed: PaymentStatus = serde_json::from_value(json!("confirm_check")).unwrap();
        assert_eq!(parsed, PaymentStatus::ConfirmCheck);
        assert!(serde_json::from_value::<PaymentStatus>(json!("PAID")).is_err());
    }

    #[test]
    fn test_static_wallet_status_wire_names() {
        let parsed: StaticWalletStatus = serde_json::from_value(json!("in_active")).unwrap();
        assert_eq!(parsed, StaticWalletStatus::InActive);
        assert_eq!(StaticWalletStatus::Blocked.to_string(), "blocked");
    }

    #[test]
    fn test_course_source_keeps_casing() {
        assert_eq!(
            serde_json::to_value(CourseSource::BinanceP2P).unwrap(),
            json!("BinanceP2P")
        );
        assert_eq!(CourseSource::Garantexio.to_string(), "Garantexio");
    }

    #[test]
    fn test_currency_omits_missing_network() {
        assert_eq!(
            serde_json::to_string(&Currency::new("BTC")).unwrap(),
            r#"{"currency":"BTC"}"#
        );
        assert_eq!(
            serde_json::to_string(&Currency::new("USDT").on_network("tron")).unwrap(),
            r#"{"currency":"USDT","network":"tron"}"#
        );
    }

    #[test]
    fn test_envelope_with_empty_result() {
        let envelope: Envelope<EmptyResult> =
            serde_json::from_str(r#"{"state":0,"result":[]}"#).unwrap();
        assert_eq!(envelope.state, 0);
        assert!(envelope.result.is_empty());
    }
}
