//! Notification payload types delivered to participants.
//!
//! The server never messages participants directly; it hands these
//! payloads to the delivery collaborator (an outbound webhook), which owns
//! the actual direct-message transport. Payloads carry the recipient and
//! the event, never the identity of a matched counterpart's sender.

use serde::{Deserialize, Serialize};

/// Which way an anonymous message travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayDirection {
    /// Santa → giftee.
    ToGiftee,
    /// Giftee → their Santa.
    ToSanta,
}

/// A single notice addressed to one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The participant was enrolled in a freshly created event.
    EventCreated {
        event_name: String,
        event_id: String,
        target_date: String,
        max_price: String,
    },
    /// Matching completed; the recipient now has a giftee.
    Matched {
        event_name: String,
        event_id: String,
        giftee: String,
        target_date: String,
        max_price: String,
    },
    /// An anonymous message relayed between matched participants.
    Anonymous {
        event_name: String,
        event_id: String,
        direction: RelayDirection,
        body: String,
    },
    /// The recipient's giftee changed their wishlist.
    WishlistChanged {
        event_name: String,
        event_id: String,
        wishlist: String,
    },
}

/// The envelope POSTed to the delivery webhook: one recipient, one notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDelivery {
    pub recipient: String,
    pub notice: Notice,
}
