use crate::tests::list_with;
use crate::{Role, is_shared, resolve_role, validate_new_participant};

use proptest::prelude::*;

fn arb_email() -> impl Strategy<Value = String> {
    "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,4}"
}

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Admin), Just(Role::Viewer)]
}

proptest! {
    #[test]
    fn given_owner_when_resolved_then_always_admin(
        owner in arb_email(),
        entry_role in arb_role(),
    ) {
        // Even a conflicting participant entry for the owner cannot demote
        let list = list_with(&owner, &[(owner.as_str(), entry_role)]);

        prop_assert_eq!(resolve_role(&list, &owner), Role::Admin);
    }

    #[test]
    fn given_unlisted_email_when_resolved_then_viewer(
        owner in arb_email(),
        member in arb_email(),
        member_role in arb_role(),
        caller in arb_email(),
    ) {
        let list = list_with(&owner, &[(member.as_str(), member_role)]);

        if caller != owner && caller != member {
            prop_assert_eq!(resolve_role(&list, &caller), Role::Viewer);
        }
    }

    #[test]
    fn given_repeated_add_when_validated_then_second_rejected(
        owner in arb_email(),
        email in arb_email(),
        first_role in arb_role(),
        second_role in arb_role(),
    ) {
        // Membership is idempotent: adding the same email twice never
        // yields a second entry
        let mut list = list_with(&owner, &[(owner.as_str(), Role::Admin)]);

        if email == owner {
            prop_assert!(validate_new_participant(&list, &email, first_role).is_err());
        } else {
            let entry = validate_new_participant(&list, &email, first_role).unwrap();
            list.participants.push(entry);

            prop_assert!(validate_new_participant(&list, &email, second_role).is_err());
        }
    }

    #[test]
    fn given_any_caller_when_shared_then_listed_non_owner(
        owner in arb_email(),
        member in arb_email(),
        member_role in arb_role(),
        caller in arb_email(),
    ) {
        let list = list_with(&owner, &[(member.as_str(), member_role)]);
        let shared = is_shared(&list, &caller);

        prop_assert_eq!(shared, caller != owner && caller == member);
    }
}
