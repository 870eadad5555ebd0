//! Wire objects shared by the giftrelay server and its clients.

pub mod admin;
pub mod error;
pub mod notice;
pub mod relay;

pub use admin::{
    CreateEventRequest, EventStatusResponse, EventSummary, ImportEventRequest, DeliveryReport,
    MutationReport, ParticipantStatusRow, ParticipantsRequest, PurgeReport, WirePair,
};
pub use error::{ApiErrorBody, ErrorCode};
pub use notice::{Notice, RelayDirection, WebhookDelivery};
pub use relay::{GiftFlagResponse, RelayReceipt, RelayRequest, WhoAmIResponse, WishlistRequest};
