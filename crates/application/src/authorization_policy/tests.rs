use proptest::prelude::*;
use usergate_domain::{Actor, UserId, UserRole};

use super::{AuthorizationPolicy, Decision, DenialReason, Operation};

fn user_id(value: i64) -> UserId {
    UserId::new(value).unwrap_or_else(|_| unreachable!())
}

fn role_strategy() -> impl Strategy<Value = UserRole> {
    prop_oneof![
        Just(UserRole::Guest),
        Just(UserRole::User),
        Just(UserRole::Admin),
    ]
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![Just(Operation::Update), Just(Operation::Delete)]
}

#[test]
fn owner_may_rename_own_record() {
    let policy = AuthorizationPolicy::new();
    let actor = Actor::authenticated(user_id(5), UserRole::User);

    let decision = policy.can_modify(&actor, user_id(5), Operation::Update, false);
    assert_eq!(decision, Decision::Allow);
}

#[test]
fn owner_may_not_change_own_role() {
    let policy = AuthorizationPolicy::new();
    let actor = Actor::authenticated(user_id(5), UserRole::User);

    let decision = policy.can_modify(&actor, user_id(5), Operation::Update, true);
    assert_eq!(
        decision,
        Decision::Deny(DenialReason::RoleChangeRequiresAdmin)
    );
}

#[test]
fn user_may_not_delete_someone_else() {
    let policy = AuthorizationPolicy::new();
    let actor = Actor::authenticated(user_id(5), UserRole::User);

    let decision = policy.can_modify(&actor, user_id(7), Operation::Delete, false);
    assert_eq!(decision, Decision::Deny(DenialReason::NotOwner));
}

#[test]
fn admin_may_change_any_role() {
    let policy = AuthorizationPolicy::new();
    let actor = Actor::authenticated(user_id(1), UserRole::Admin);

    let decision = policy.can_modify(&actor, user_id(5), Operation::Update, true);
    assert!(decision.is_allowed());
}

#[test]
fn anonymous_is_denied_every_mutation() {
    let policy = AuthorizationPolicy::new();

    for operation in [Operation::Update, Operation::Delete] {
        let decision = policy.can_modify(&Actor::Anonymous, user_id(1), operation, false);
        assert_eq!(decision, Decision::Deny(DenialReason::Anonymous));
    }
}

#[test]
fn guest_role_may_delete_own_record() {
    let policy = AuthorizationPolicy::new();
    let actor = Actor::authenticated(user_id(3), UserRole::Guest);

    let decision = policy.can_modify(&actor, user_id(3), Operation::Delete, false);
    assert_eq!(decision, Decision::Allow);
}

#[test]
fn guest_role_may_not_touch_other_records() {
    let policy = AuthorizationPolicy::new();
    let actor = Actor::authenticated(user_id(3), UserRole::Guest);

    let decision = policy.can_modify(&actor, user_id(4), Operation::Update, false);
    assert_eq!(decision, Decision::Deny(DenialReason::NotOwner));
}

#[test]
fn deny_converts_to_forbidden_with_operation_message() {
    let result = Decision::Deny(DenialReason::NotOwner).into_result(Operation::Delete);

    assert!(matches!(
        result,
        Err(usergate_core::AppError::Forbidden(ref message)) if message.contains("delete")
    ));
}

proptest! {
    #[test]
    fn delete_allowed_iff_owner_or_admin(
        actor_id in 1_i64..50,
        target_id in 1_i64..50,
        role in role_strategy(),
    ) {
        let policy = AuthorizationPolicy::new();
        let actor = Actor::authenticated(user_id(actor_id), role);

        let decision = policy.can_modify(&actor, user_id(target_id), Operation::Delete, false);
        prop_assert_eq!(
            decision.is_allowed(),
            actor_id == target_id || role == UserRole::Admin
        );
    }

    #[test]
    fn non_admin_role_change_is_always_denied(
        actor_id in 1_i64..50,
        target_id in 1_i64..50,
        role in prop_oneof![Just(UserRole::Guest), Just(UserRole::User)],
    ) {
        let policy = AuthorizationPolicy::new();
        let actor = Actor::authenticated(user_id(actor_id), role);

        let decision = policy.can_modify(&actor, user_id(target_id), Operation::Update, true);
        prop_assert!(!decision.is_allowed());
    }

    #[test]
    fn admin_is_always_allowed(
        actor_id in 1_i64..1_000,
        target_id in 1_i64..1_000,
        operation in operation_strategy(),
        attempts_role_change in any::<bool>(),
    ) {
        let policy = AuthorizationPolicy::new();
        let actor = Actor::authenticated(user_id(actor_id), UserRole::Admin);

        let decision = policy.can_modify(&actor, user_id(target_id), operation, attempts_role_change);
        prop_assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn decision_is_deterministic(
        actor_id in 1_i64..20,
        target_id in 1_i64..20,
        role in role_strategy(),
        operation in operation_strategy(),
        attempts_role_change in any::<bool>(),
    ) {
        let policy = AuthorizationPolicy::new();
        let actor = Actor::authenticated(user_id(actor_id), role);
        let target = user_id(target_id);

        prop_assert_eq!(
            policy.can_modify(&actor, target, operation, attempts_role_change),
            policy.can_modify(&actor, target, operation, attempts_role_change)
        );
    }
}
