//! Static wallets.

use serde::{Deserialize, Serialize};

use super::StaticWalletStatus;

/// Body of `POST v1/wallet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStaticWalletRequest {
    /// Currency code.
    pub currency: String,
    /// Merchant-side order identifier.
    pub order_id: String,
    /// Network code.
    pub network: String,
    /// Webhook URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_callback: Option<String>,
    /// Referral code of another merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_referral_code: Option<String>,
}

/// A static wallet as returned by `v1/wallet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticWallet {
    /// Wallet identifier.
    pub wallet_uuid: String,
    /// Wallet address identifier, used by `v1/wallet/qr`.
    pub uuid: String,
    /// Deposit address.
    pub address: String,
    /// Currency code.
    pub currency: String,
    /// Network code.
    pub network: String,
    /// Payment page URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `POST v1/wallet/qr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenQrRequest {
    /// Wallet address identifier ([`StaticWallet::uuid`]).
    pub wallet_address_uuid: String,
}

/// A QR code image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCode {
    /// Data URI of the image (`data:image/png;base64,...`).
    pub image: String,
}

/// Body of `POST v1/wallet/block-address`. Set either `uuid` or `order_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStaticWalletRequest {
    /// Wallet identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Merchant-side order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Refund incoming deposits to the sender automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_force_refund: Option<bool>,
}

/// Result of blocking a static wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedWallet {
    /// Wallet identifier.
    pub uuid: String,
    /// New wallet status.
    pub status: StaticWalletStatus,
}

/// Body of `POST v1/wallet/blocked-address-refund`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundFromBlockedWalletRequest {
    /// Wallet identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Merchant-side order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Destination address of the refund.
    pub address: String,
}

/// Result of refunding a blocked wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedWalletRefund {
    /// Fee charged for the refund.
    pub commission: String,
    /// Refunded amount.
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_request_omits_unset_fields() {
        let request = BlockStaticWalletRequest {
            order_id: Some("wallet-1".to_owned()),
            ..BlockStaticWalletRequest::default()
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"order_id":"wallet-1"}"#
        );
    }

    #[test]
    fn test_refund_request_field_order() {
        let request = RefundFromBlockedWalletRequest {
            uuid: Some("w-1".to_owned()),
            order_id: None,
            address: "TK8...".to_owned(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"uuid":"w-1","address":"TK8..."}"#
        );
    }

    #[test]
    fn test_blocked_wallet_status() {
        let blocked: BlockedWallet =
            serde_json::from_value(json!({"uuid": "w-1", "status": "blocked"})).unwrap();
        assert_eq!(blocked.status, StaticWalletStatus::Blocked);
    }

    #[test]
    fn test_static_wallet_deserializes() {
        let wallet: StaticWallet = serde_json::from_value(json!({
            "wallet_uuid": "4ad54ee3-6ecb-4a5b-b8e2-4d9d1b8e9a0b",
            "uuid": "9e1d6b26-3e8a-4b8f-9f6f-6e4e4c5a1f3a",
            "address": "TDVFx1n9nT6YcN6k7LqRgeuJ6Yu2X4yQ7m",
            "network": "tron",
            "currency": "USDT",
            "url": "https://pay.cryptomus.com/wallet/9e1d6b26"
        }))
        .unwrap();
        assert_eq!(wallet.network, "tron");
        assert!(wallet.url.is_some());
    }
}
