use std::collections::HashSet;

use activities::database::seed::default_activities;
use activities::database::ActivityRegistry;
use activities::services::activities_service;
use proptest::prelude::*;

const ACTIVITY_NAMES: &[&str] = &["Chess Club", "Programming Class", "Gym Class", "Robotics Club"];
const EMAILS: &[&str] = &[
    "michael@mergington.edu",
    "emma@mergington.edu",
    "alex@mergington.edu",
    "sam@mergington.edu",
    "jordan@mergington.edu",
];

#[derive(Debug, Clone)]
enum Op {
    Signup(usize, usize),
    Unregister(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let activity = 0..ACTIVITY_NAMES.len();
    let email = 0..EMAILS.len();
    prop_oneof![
        (activity.clone(), email.clone()).prop_map(|(a, e)| Op::Signup(a, e)),
        (activity, email).prop_map(|(a, e)| Op::Unregister(a, e)),
    ]
}

fn registry() -> ActivityRegistry {
    ActivityRegistry::from_seed(default_activities()).unwrap()
}

fn apply(registry: &ActivityRegistry, op: &Op) -> bool {
    match op {
        Op::Signup(a, e) => {
            activities_service::signup(registry, ACTIVITY_NAMES[*a], EMAILS[*e]).is_ok()
        }
        Op::Unregister(a, e) => {
            activities_service::unregister(registry, ACTIVITY_NAMES[*a], EMAILS[*e]).is_ok()
        }
    }
}

proptest! {
    /// Property: no roster ever lists an email twice, and no email is on two rosters
    #[test]
    fn membership_stays_unique(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let registry = registry();
        for op in &ops {
            apply(&registry, op);

            let catalog = registry.snapshot();
            let mut seen = HashSet::new();
            for activity in &catalog.activities {
                for email in &activity.participants {
                    prop_assert!(seen.insert(email.clone()), "{} listed twice after {:?}", email, op);
                }
            }
        }
    }

    /// Property: the set of activity names never changes
    #[test]
    fn activity_set_is_closed(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let registry = registry();
        let before = registry.activity_names();
        for op in &ops {
            apply(&registry, op);
        }
        prop_assert_eq!(registry.activity_names(), before);
    }

    /// Property: a successful signup followed by unregister restores the roster exactly
    #[test]
    fn signup_then_unregister_round_trips(
        ops in prop::collection::vec(op_strategy(), 0..32),
        activity in 0..3usize,
    ) {
        let registry = registry();
        for op in &ops {
            apply(&registry, op);
        }

        let name = ACTIVITY_NAMES[activity];
        let email = "roundtrip@mergington.edu";
        let before = registry.get(name).unwrap().participants;

        prop_assert!(activities_service::signup(&registry, name, email).is_ok());
        prop_assert!(activities_service::unregister(&registry, name, email).is_ok());
        prop_assert_eq!(registry.get(name).unwrap().participants, before);
    }

    /// Property: a rejected operation leaves every roster untouched
    #[test]
    fn rejected_operations_do_not_mutate(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let registry = registry();
        for op in &ops {
            let before = registry.snapshot();
            if !apply(&registry, op) {
                prop_assert_eq!(registry.snapshot(), before);
            }
        }
    }
}
