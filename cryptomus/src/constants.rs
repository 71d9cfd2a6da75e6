//! Gateway endpoint, header names and the route table.

use http::HeaderName;

/// Production Cryptomus API base URL. Routes are appended verbatim.
pub const DEFAULT_BASE_URL: &str = "https://api.cryptomus.com/";

/// `Merchant` header carrying the merchant identifier.
pub const MERCHANT_HEADER: HeaderName = HeaderName::from_static("merchant");

/// `Sign` header carrying the request signature.
pub const SIGN_HEADER: HeaderName = HeaderName::from_static("sign");

/// Field name of the signature inside webhook payloads.
pub const SIGN_FIELD: &str = "sign";

/// Environment variable holding the merchant identifier.
pub const ENV_MERCHANT: &str = "CRYPTOMUS_MERCHANT";

/// Environment variable holding the payment token.
pub const ENV_PAYMENT_TOKEN: &str = "CRYPTOMUS_PAYMENT_TOKEN";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const ENV_BASE_URL: &str = "CRYPTOMUS_BASE_URL";

/// Environment variable holding a request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "CRYPTOMUS_TIMEOUT_SECS";

/// Route table. Every route is served with `POST`.
pub mod routes {
    /// Create an invoice.
    pub const CREATE_PAYMENT: &str = "v1/payment";
    /// Create a static wallet.
    pub const CREATE_STATIC_WALLET: &str = "v1/wallet";
    /// Generate a QR code for a static wallet.
    pub const GEN_QR: &str = "v1/wallet/qr";
    /// Block a static wallet.
    pub const BLOCK_STATIC_WALLET: &str = "v1/wallet/block-address";
    /// Refund the balance of a blocked wallet.
    pub const REFUND_FROM_BLOCKED_WALLET: &str = "v1/wallet/blocked-address-refund";
    /// Payment information.
    pub const PAYMENT_INFO: &str = "v1/payment/info";
    /// Refund a payment.
    pub const PAYMENT_REFUND: &str = "v1/payment/refund";
    /// Resend a payment webhook.
    pub const RESEND_WEBHOOK: &str = "v1/payment/resend";
    /// Send a test payment webhook.
    pub const TEST_PAYMENT_WEBHOOK: &str = "v1/test-webhook/payment";
    /// Create a recurring payment.
    pub const RECURRING_CREATE: &str = "v1/recurrence/create";
    /// Recurring payment information.
    pub const RECURRING_INFO: &str = "v1/recurrence/info";
    /// List recurring payments.
    pub const RECURRING_LIST: &str = "v1/recurrence/list";
    /// Cancel a recurring payment.
    pub const RECURRING_CANCEL: &str = "v1/recurrence/cancel";
}
