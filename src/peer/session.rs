//! Connection-negotiation session state.

use derive_more::{Display, Error};
use tracing::{debug, instrument};

use super::signal::{IceCandidate, SdpKind, SessionDescription, SignalMessage};

/// Default STUN server used when no ICE servers are configured.
pub const DEFAULT_STUN_SERVER: &str = "stun:stun.l.google.com:19302";

/// Errors raised during connection negotiation.
#[derive(Debug, Clone, Display, Error)]
pub enum PeerError {
    /// An operation ran before [`PeerSession::start`].
    #[display("peer session has not been started")]
    NotStarted,
    /// An answer arrived without a local offer to answer.
    #[display("no local offer is pending")]
    OfferMissing,
    /// The outbound signal hook failed to deliver a message.
    #[display("signal delivery failed: {_0}")]
    SignalFailed(#[error(not(source))] String),
}

/// Outbound hook for signaling messages.
///
/// No transport implementation exists in this repository; the hook is a
/// seam for one. Tests provide an in-memory sink.
pub trait SignalSink {
    /// Delivers one signaling message to the remote peer.
    ///
    /// # Errors
    ///
    /// Returns [`PeerError::SignalFailed`] when delivery fails.
    fn send(&mut self, message: SignalMessage) -> Result<(), PeerError>;
}

/// Placeholder for captured local media tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTracks {
    /// Video track requested.
    pub video: bool,
    /// Audio track requested.
    pub audio: bool,
}

/// One peer connection negotiation in progress.
///
/// Holds what the original kept in module-level globals as explicit
/// fields, scoped to a single session.
#[derive(Debug)]
pub struct PeerSession<S: SignalSink> {
    sink: S,
    ice_servers: Vec<String>,
    started: bool,
    local_media: Option<MediaTracks>,
    local_description: Option<SessionDescription>,
    remote_description: Option<SessionDescription>,
    remote_candidates: Vec<IceCandidate>,
}

impl<S: SignalSink> PeerSession<S> {
    /// Creates a session with the default STUN configuration.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            ice_servers: vec![DEFAULT_STUN_SERVER.to_string()],
            started: false,
            local_media: None,
            local_description: None,
            remote_description: None,
            remote_candidates: Vec::new(),
        }
    }

    /// Returns the configured ICE servers.
    pub fn ice_servers(&self) -> &[String] {
        &self.ice_servers
    }

    /// Returns the captured local media, if any.
    pub fn local_media(&self) -> Option<MediaTracks> {
        self.local_media
    }

    /// Returns the current local description, if any.
    pub fn local_description(&self) -> Option<&SessionDescription> {
        self.local_description.as_ref()
    }

    /// Returns the current remote description, if any.
    pub fn remote_description(&self) -> Option<&SessionDescription> {
        self.remote_description.as_ref()
    }

    /// Returns the remote candidates collected so far.
    pub fn remote_candidates(&self) -> &[IceCandidate] {
        &self.remote_candidates
    }

    /// Initializes the connection and captures local media tracks.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), PeerError> {
        debug!("Starting peer session");
        self.local_media = Some(MediaTracks {
            video: true,
            audio: true,
        });
        self.started = true;
        Ok(())
    }

    /// Produces a local offer and emits it through the signal hook.
    ///
    /// # Errors
    ///
    /// Returns [`PeerError::NotStarted`] before [`start`](Self::start), or
    /// [`PeerError::SignalFailed`] when the hook rejects the message.
    #[instrument(skip(self))]
    pub fn create_offer(&mut self) -> Result<SessionDescription, PeerError> {
        self.require_started()?;
        let offer = self.describe_local(SdpKind::Offer);
        self.local_description = Some(offer.clone());
        self.sink.send(SignalMessage::Offer {
            offer: offer.clone(),
        })?;
        Ok(offer)
    }

    /// Installs a remote offer, produces an answer, and emits it.
    ///
    /// # Errors
    ///
    /// Returns [`PeerError::NotStarted`] before [`start`](Self::start), or
    /// [`PeerError::SignalFailed`] when the hook rejects the message.
    #[instrument(skip(self, offer))]
    pub fn accept_offer(&mut self, offer: SessionDescription) -> Result<SessionDescription, PeerError> {
        self.require_started()?;
        self.remote_description = Some(offer);
        let answer = self.describe_local(SdpKind::Answer);
        self.local_description = Some(answer.clone());
        self.sink.send(SignalMessage::Answer {
            answer: answer.clone(),
        })?;
        Ok(answer)
    }

    /// Installs the remote answer to a previously created offer.
    ///
    /// # Errors
    ///
    /// Returns [`PeerError::NotStarted`] before [`start`](Self::start), or
    /// [`PeerError::OfferMissing`] when no local offer is pending.
    #[instrument(skip(self, answer))]
    pub fn accept_answer(&mut self, answer: SessionDescription) -> Result<(), PeerError> {
        self.require_started()?;
        match self.local_description {
            Some(ref desc) if *desc.kind() == SdpKind::Offer => {
                self.remote_description = Some(answer);
                Ok(())
            }
            _ => Err(PeerError::OfferMissing),
        }
    }

    /// Records a remote transport candidate.
    ///
    /// # Errors
    ///
    /// Returns [`PeerError::NotStarted`] before [`start`](Self::start).
    #[instrument(skip(self, candidate))]
    pub fn add_ice_candidate(&mut self, candidate: IceCandidate) -> Result<(), PeerError> {
        self.require_started()?;
        self.remote_candidates.push(candidate);
        Ok(())
    }

    fn require_started(&self) -> Result<(), PeerError> {
        if self.started {
            Ok(())
        } else {
            Err(PeerError::NotStarted)
        }
    }

    fn describe_local(&self, kind: SdpKind) -> SessionDescription {
        let media = self.local_media.unwrap_or(MediaTracks {
            video: false,
            audio: false,
        });
        let mut sdp = String::from("v=0\r\ns=ninecell\r\nt=0 0\r\n");
        if media.audio {
            sdp.push_str("m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n");
        }
        if media.video {
            sdp.push_str("m=video 9 UDP/TLS/RTP/SAVPF 96\r\n");
        }
        SessionDescription::new(kind, sdp)
    }
}
