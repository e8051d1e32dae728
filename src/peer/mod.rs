//! Peer-to-peer connection-negotiation scaffolding.
//!
//! No frontend path constructs a [`PeerSession`] and no [`SignalSink`]
//! transport exists; the module compiles and is unit tested but is
//! otherwise inert.

mod session;
mod signal;

pub use session::{DEFAULT_STUN_SERVER, MediaTracks, PeerError, PeerSession, SignalSink};
pub use signal::{IceCandidate, SdpKind, SessionDescription, SignalMessage};
