//! Moderation transition table for institution accounts.
//!
//! The client never computes status transitions; it only offers a fixed
//! menu of target statuses per current status and asks the API to apply
//! one. Action menus are built exclusively from this table, so nothing
//! outside it can ever be submitted.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

use crate::net::types::AccountStatus;

/// One entry in an account's action menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusAction {
    pub label: &'static str,
    pub target: AccountStatus,
}

/// The transitions reachable from `current`.
pub fn allowed_targets(current: AccountStatus) -> &'static [StatusAction] {
    use AccountStatus::*;

    match current {
        Active => &[
            StatusAction {
                label: "Suspend institution",
                target: Suspended,
            },
            StatusAction {
                label: "Ban institution",
                target: Banned,
            },
            StatusAction {
                label: "Revoke approval",
                target: Pending,
            },
        ],
        Pending => &[
            StatusAction {
                label: "Approve",
                target: Active,
            },
            StatusAction {
                label: "Reject",
                target: Suspended,
            },
        ],
        Suspended => &[
            StatusAction {
                label: "Lift suspension",
                target: Active,
            },
            StatusAction {
                label: "Ban institution",
                target: Banned,
            },
        ],
        Banned | Inactive => &[],
    }
}
