//! # Record-sharing grants
//!
//! An Admin invites a viewer to a specific named record; the backend creates
//! a pending grant. The viewer accepts out of band (not through this client).
//! While a grant is still pending the Admin may revoke it, which removes it.
//! Once accepted, the grant is terminal from this client's perspective —
//! there is no unshare-after-accept path.
//!
//! The lifecycle is modelled as an explicit [`GrantState`] rather than the
//! backend's raw `isAccepted` boolean; (de)serialisation maps the variant
//! onto that boolean so the wire format is unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle state of a grant.
///
/// Transitions: Invite creates `Pending`; an external Accept moves
/// `Pending` → `Accepted`; Revoke removes a `Pending` grant. Nothing
/// transitions out of `Accepted` here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrantState {
    Pending,
    Accepted,
}

impl GrantState {
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            GrantState::Accepted
        } else {
            GrantState::Pending
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, GrantState::Accepted)
    }

    pub fn label(self) -> &'static str {
        match self {
            GrantState::Pending => "Pending",
            GrantState::Accepted => "Accepted",
        }
    }
}

// The backend speaks `isAccepted: bool`.
impl Serialize for GrantState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_accepted())
    }
}

impl<'de> Deserialize<'de> for GrantState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(GrantState::from_accepted)
    }
}

/// Permission for one viewer to read one named record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    pub record_name: String,
    #[serde(rename = "isAccepted")]
    pub state: GrantState,
}

impl Grant {
    /// Revoke is only meaningful while the grant is still pending; the UI
    /// hides the control once accepted.
    pub fn can_revoke(&self) -> bool {
        self.state == GrantState::Pending
    }
}

/// One invited viewer together with all grants they hold, as returned by
/// the invited-viewers listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitedViewer {
    pub viewer_id: i64,
    pub viewer_email: String,
    pub viewer_full_name: String,
    #[serde(default)]
    pub records: Vec<Grant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_maps_onto_wire_boolean() {
        let grant: Grant =
            serde_json::from_str(r#"{"recordName": "Kitchen Milk", "isAccepted": false}"#)
                .unwrap();
        assert_eq!(grant.state, GrantState::Pending);
        assert!(grant.can_revoke());

        let back = serde_json::to_string(&grant).unwrap();
        assert!(back.contains(r#""isAccepted":false"#));
    }

    #[test]
    fn accepted_grant_cannot_be_revoked() {
        let grant = Grant {
            record_name: "Kitchen Milk".into(),
            state: GrantState::Accepted,
        };
        assert!(!grant.can_revoke());
        assert_eq!(grant.state.label(), "Accepted");
    }

    #[test]
    fn invited_viewer_groups_grants() {
        let json = r#"{
            "viewerId": 12,
            "viewerEmail": "a@b.com",
            "viewerFullName": "Ayesha",
            "records": [
                {"recordName": "Kitchen Milk", "isAccepted": false},
                {"recordName": "Flat Rent", "isAccepted": true}
            ]
        }"#;
        let viewer: InvitedViewer = serde_json::from_str(json).unwrap();
        assert_eq!(viewer.records.len(), 2);
        assert!(viewer.records[0].can_revoke());
        assert!(!viewer.records[1].can_revoke());
    }
}
