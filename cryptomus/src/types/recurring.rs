//! Recurring payments.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// Body of `POST v1/recurrence/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecurringRequest {
    /// Amount charged each period.
    pub amount: String,
    /// Currency code.
    pub currency: String,
    /// Name shown to the payer.
    pub name: String,
    /// Billing period (e.g., `"weekly"`, `"monthly"`).
    pub period: String,
    /// Payer identifier in the merchant system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,
    /// Merchant-side identifier of the subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_payment_id: Option<String>,
    /// Network code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_callback: Option<String>,
    /// Link for the "return to shop" button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_return: Option<String>,
    /// Whether a period may be paid in several transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_payment_multiple: Option<bool>,
    /// Whether the fee is taken from the charged amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtract_fee_from_amount: Option<bool>,
    /// Free-form merchant data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
}

/// First invoice of a freshly created recurring payment.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringInvoice {
    /// Recurring payment identifier.
    pub uuid: String,
    /// Order identifier.
    pub order_id: String,
    /// Amount per period.
    pub amount: String,
    /// Amount actually paid.
    #[serde(default)]
    pub payment_amount: Option<String>,
    /// Paid amount in USD.
    #[serde(default)]
    pub payment_amount_usd: Option<String>,
    /// Amount credited to the merchant balance.
    #[serde(default)]
    pub merchant_amount: Option<String>,
    /// Gateway fee.
    #[serde(default)]
    pub commission: Option<String>,
    /// Currency code.
    pub currency: String,
    /// Network code.
    #[serde(default)]
    pub network: Option<String>,
    /// Deposit address.
    #[serde(default)]
    pub address: Option<String>,
    /// Sender address.
    #[serde(default)]
    pub from: Option<String>,
    /// Payment status of the current period.
    #[serde(default)]
    pub payment_status: Option<String>,
    /// Payment page URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Expiry as a unix timestamp.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub expired_at: Option<i64>,
    /// Subscription status.
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the invoice reached a terminal status.
    #[serde(default)]
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

/// A recurring payment as returned by `v1/recurrence/info` and `v1/recurrence/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurring {
    /// Recurring payment identifier.
    pub uuid: String,
    /// Order identifier.
    #[serde(default)]
    pub order_id: Option<String>,
    /// Amount per period.
    pub amount: String,
    /// Currency code.
    pub currency: String,
    /// Network code.
    #[serde(default)]
    pub network: Option<String>,
    /// Subscription status.
    pub status: String,
    /// Payer identifier in the merchant system.
    #[serde(default)]
    pub payer_id: Option<String>,
    /// Merchant-side identifier of the subscription.
    #[serde(default)]
    pub merchant_payment_id: Option<String>,
    /// Webhook URL.
    #[serde(default)]
    pub url_callback: Option<String>,
    /// Return link.
    #[serde(default)]
    pub url_return: Option<String>,
    /// Whether a period may be paid in several transactions.
    #[serde(default)]
    pub is_payment_multiple: bool,
    /// Merchant data.
    #[serde(default)]
    pub additional_data: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST v1/recurrence/info`. Set either `uuid` or `order_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringInfoRequest {
    /// Recurring payment identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Body of `POST v1/recurrence/list`. The default value sends `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringListRequest {
    /// Page number, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// One page of recurring payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringList {
    /// Recurring payments on this page.
    pub items: Vec<Recurring>,
    /// Pagination cursor.
    pub paginate: Paginate,
}

/// Pagination metadata of list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginate {
    /// Items on this page.
    pub count: u64,
    /// Whether more than one page exists.
    pub has_pages: bool,
    /// Next page number, if any.
    #[serde(default)]
    pub next_page: Option<u64>,
    /// Current page number.
    pub page: u64,
    /// Previous page number, if any.
    #[serde(default)]
    pub previous_page: Option<u64>,
    /// Total number of items.
    pub total_count: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

/// Body of `POST v1/recurrence/cancel`. Set either `uuid` or `order_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringCancelRequest {
    /// Recurring payment identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Result of cancelling a recurring payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringCancelled {
    /// Recurring payment identifier.
    pub uuid: String,
    /// New subscription status.
    pub status: String,
}
