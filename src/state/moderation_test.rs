use super::*;

fn targets(status: AccountStatus) -> Vec<AccountStatus> {
    allowed_targets(status).iter().map(|a| a.target).collect()
}

#[test]
fn active_can_be_suspended_banned_or_sent_back_to_pending() {
    assert_eq!(
        targets(AccountStatus::Active),
        vec![
            AccountStatus::Suspended,
            AccountStatus::Banned,
            AccountStatus::Pending
        ]
    );
}

#[test]
fn pending_can_only_be_approved_or_rejected() {
    assert_eq!(
        targets(AccountStatus::Pending),
        vec![AccountStatus::Active, AccountStatus::Suspended]
    );
}

#[test]
fn suspended_can_be_reinstated_or_banned() {
    assert_eq!(
        targets(AccountStatus::Suspended),
        vec![AccountStatus::Active, AccountStatus::Banned]
    );
}

#[test]
fn terminal_statuses_offer_no_actions() {
    assert!(allowed_targets(AccountStatus::Banned).is_empty());
    assert!(allowed_targets(AccountStatus::Inactive).is_empty());
}

#[test]
fn no_menu_ever_targets_inactive() {
    for status in [
        AccountStatus::Active,
        AccountStatus::Pending,
        AccountStatus::Suspended,
        AccountStatus::Banned,
        AccountStatus::Inactive,
    ] {
        assert!(
            !targets(status).contains(&AccountStatus::Inactive),
            "{status:?} must not offer INACTIVE"
        );
    }
}

#[test]
fn every_action_has_a_label() {
    for status in [
        AccountStatus::Active,
        AccountStatus::Pending,
        AccountStatus::Suspended,
    ] {
        for action in allowed_targets(status) {
            assert!(!action.label.is_empty());
        }
    }
}
