use tracing::debug;

use crate::types::UserIdentity;

/// Process-local login state, owned by whoever drives the UI and passed to
/// the parts that need to know who is planning.
///
/// Two states only: anonymous (no identity) and authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<UserIdentity>,
}

impl Session {
    /// Start anonymous.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever identity is held. Nothing is validated.
    pub fn login(&mut self, identity: UserIdentity) {
        debug!(target: "tour_guide::session", name = %identity.name, "login");
        self.identity = Some(identity);
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            debug!(target: "tour_guide::session", name = %identity.name, "logout");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    /// Value sent as `userId` on itinerary requests.
    pub fn requester_id(&self) -> Option<String> {
        self.identity.as_ref().map(|identity| identity.email.clone())
    }
}
