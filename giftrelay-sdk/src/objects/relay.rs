//! Relay API request and response types.
//!
//! These types are used by participants interacting with an event they
//! belong to: anonymous messaging, wishlist updates and gift flags. The
//! caller identifies the event either as `scope:name` or by its bare
//! portable event id.

use serde::{Deserialize, Serialize};

/// Request body for the anonymous send/reply operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    /// The participant on whose behalf the relay acts.
    pub from: String,
    pub message: String,
}

/// Acknowledgement of a relayed message.
///
/// Carries only the delivery outcome; the counterpart's identity is never
/// echoed back to the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayReceipt {
    pub delivered: bool,
}

/// Request body for replacing a participant's wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistRequest {
    pub participant: String,
    pub wishlist: String,
}

/// Response for the whoami operation, intended for direct-message delivery
/// to the requesting participant only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    pub event_name: String,
    pub event_id: String,
    /// The participant this caller gives a gift to.
    pub giftee: String,
    pub target_date: String,
    pub max_price: String,
    pub sent_gift: bool,
    /// The giftee's wishlist, if they have set one.
    pub giftee_wishlist: Option<String>,
}

/// Response after flipping a sent/received gift flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftFlagResponse {
    pub event_name: String,
    pub sent_gift: bool,
    pub received_gift: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whoami_round_trip() {
        let resp = WhoAmIResponse {
            event_name: "xmas".to_string(),
            event_id: "a1b2c3d4".to_string(),
            giftee: "200".to_string(),
            target_date: "2026-12-24".to_string(),
            max_price: "$25".to_string(),
            sent_gift: false,
            giftee_wishlist: Some("socks".to_string()),
        };
        let json = serde_json::to_string(&resp).unwrap();
        let back: WhoAmIResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, back);
    }
}
