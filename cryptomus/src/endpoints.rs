//! Named Cryptomus operations.
//!
//! Each method fixes the verb and route and forwards the caller's request
//! unchanged to [`Cryptomus::request`]. No validation, retries or response
//! post-processing happen here.

use http::Method;

use crate::client::Cryptomus;
use crate::constants::routes;
use crate::error::CryptomusError;
use crate::types::{
    BlockStaticWalletRequest, BlockedWallet, BlockedWalletRefund, CreatePaymentRequest,
    CreateRecurringRequest, CreateStaticWalletRequest, EmptyResult, Envelope, GenQrRequest,
    Payment, PaymentInfoRequest, PaymentRefundRequest, QrCode, Recurring, RecurringCancelRequest,
    RecurringCancelled, RecurringInfoRequest, RecurringInvoice, RecurringList,
    RecurringListRequest, RefundFromBlockedWalletRequest, ResendWebhookRequest, StaticWallet,
    TestWebhookRequest,
};

impl Cryptomus {
    /// Creates an invoice (`POST v1/payment`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<Envelope<Payment>, CryptomusError> {
        self.request(Method::POST, routes::CREATE_PAYMENT, request).await
    }

    /// Creates a static wallet (`POST v1/wallet`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn create_static_wallet(
        &self,
        request: &CreateStaticWalletRequest,
    ) -> Result<Envelope<StaticWallet>, CryptomusError> {
        self.request(Method::POST, routes::CREATE_STATIC_WALLET, request).await
    }

    /// Generates a QR code for a static wallet (`POST v1/wallet/qr`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn gen_qr(&self, request: &GenQrRequest) -> Result<Envelope<QrCode>, CryptomusError> {
        self.request(Method::POST, routes::GEN_QR, request).await
    }

    /// Blocks a static wallet (`POST v1/wallet/block-address`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn block_static_wallet(
        &self,
        request: &BlockStaticWalletRequest,
    ) -> Result<Envelope<BlockedWallet>, CryptomusError> {
        self.request(Method::POST, routes::BLOCK_STATIC_WALLET, request).await
    }

    /// Refunds the balance of a blocked wallet
    /// (`POST v1/wallet/blocked-address-refund`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn refund_from_blocked_wallet(
        &self,
        request: &RefundFromBlockedWalletRequest,
    ) -> Result<Envelope<BlockedWalletRefund>, CryptomusError> {
        self.request(Method::POST, routes::REFUND_FROM_BLOCKED_WALLET, request).await
    }

    /// Fetches an invoice (`POST v1/payment/info`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn get_payment(
        &self,
        request: &PaymentInfoRequest,
    ) -> Result<Envelope<Payment>, CryptomusError> {
        self.request(Method::POST, routes::PAYMENT_INFO, request).await
    }

    /// Refunds a payment (`POST v1/payment/refund`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn refund_payment(
        &self,
        request: &PaymentRefundRequest,
    ) -> Result<Envelope<EmptyResult>, CryptomusError> {
        self.request(Method::POST, routes::PAYMENT_REFUND, request).await
    }

    /// Asks the gateway to send a payment webhook again (`POST v1/payment/resend`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn resend_webhook(
        &self,
        request: &ResendWebhookRequest,
    ) -> Result<Envelope<EmptyResult>, CryptomusError> {
        self.request(Method::POST, routes::RESEND_WEBHOOK, request).await
    }

    /// Sends a test payment webhook (`POST v1/test-webhook/payment`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn test_payment_webhook(
        &self,
        request: &TestWebhookRequest,
    ) -> Result<Envelope<EmptyResult>, CryptomusError> {
        self.request(Method::POST, routes::TEST_PAYMENT_WEBHOOK, request).await
    }

    /// Creates a recurring payment (`POST v1/recurrence/create`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn create_recurring(
        &self,
        request: &CreateRecurringRequest,
    ) -> Result<Envelope<RecurringInvoice>, CryptomusError> {
        self.request(Method::POST, routes::RECURRING_CREATE, request).await
    }

    /// Fetches a recurring payment (`POST v1/recurrence/info`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn get_recurring_info(
        &self,
        request: &RecurringInfoRequest,
    ) -> Result<Envelope<Recurring>, CryptomusError> {
        self.request(Method::POST, routes::RECURRING_INFO, request).await
    }

    /// Lists recurring payments (`POST v1/recurrence/list`).
    ///
    /// Pass [`RecurringListRequest::default()`] for the first page.
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn get_recurring_list(
        &self,
        request: &RecurringListRequest,
    ) -> Result<Envelope<RecurringList>, CryptomusError> {
        self.request(Method::POST, routes::RECURRING_LIST, request).await
    }

    /// Cancels a recurring payment (`POST v1/recurrence/cancel`).
    ///
    /// # Errors
    ///
    /// Returns [`CryptomusError`] if the request fails.
    pub async fn cancel_recurring(
        &self,
        request: &RecurringCancelRequest,
    ) -> Result<Envelope<RecurringCancelled>, CryptomusError> {
        self.request(Method::POST, routes::RECURRING_CANCEL, request).await
    }
}
