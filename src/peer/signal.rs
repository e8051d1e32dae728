//! Signaling payloads exchanged during connection negotiation.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Which side of the offer/answer exchange a description belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdpKind {
    /// Description proposed by the initiating peer.
    Offer,
    /// Description returned by the responding peer.
    Answer,
}

/// A session description: an offer or answer plus its SDP body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct SessionDescription {
    kind: SdpKind,
    sdp: String,
}

/// A remote transport candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct IceCandidate {
    candidate: String,
}

/// Outbound signaling message, tagged the way the original wire format was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SignalMessage {
    /// Local offer for the remote peer.
    Offer {
        /// The offered session description.
        offer: SessionDescription,
    },
    /// Local answer to a remote offer.
    Answer {
        /// The answering session description.
        answer: SessionDescription,
    },
    /// Local transport candidate for the remote peer.
    IceCandidate {
        /// The candidate being advertised.
        candidate: IceCandidate,
    },
}
