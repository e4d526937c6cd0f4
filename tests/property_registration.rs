/// Property-based tests for service registration
///
/// These tests use proptest to generate random inputs and verify invariants
/// that should hold for all registrations.

use proptest::prelude::*;
use service_locator::{DefaultServices, Key, Services, ServicesExt};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct TestService {
    id: u32,
}

// Property: the first of any sequence of constant registrations wins
proptest! {
    #[test]
    fn constant_first_registration_wins(ids in prop::collection::vec(0u32..1000, 1..10)) {
        let services = DefaultServices::new();

        let results: Vec<bool> = ids
            .iter()
            .map(|id| services.add_constant(TestService { id: *id }))
            .collect();

        prop_assert!(results[0]);
        prop_assert!(results[1..].iter().all(|r| !r));
        prop_assert_eq!(services.get_required::<TestService>().id, ids[0]);
    }
}

proptest! {
    #[test]
    fn lazy_singleton_runs_once(lookups in 1usize..50, seed in 0u32..1000) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let services = DefaultServices::new();
        services.add_lazy_singleton(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            TestService { id: seed }
        });

        let first = services.get_required::<TestService>();
        for _ in 1..lookups {
            let next = services.get_required::<TestService>();
            prop_assert!(Arc::ptr_eq(&first, &next));
        }
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        prop_assert_eq!(first.id, seed);
    }
}

proptest! {
    #[test]
    fn transient_runs_per_lookup(lookups in 0usize..50) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let services = DefaultServices::new();
        services.add_factory(move || counter.fetch_add(1, Ordering::SeqCst));

        for _ in 0..lookups {
            services.get_required::<usize>();
        }
        prop_assert_eq!(calls.load(Ordering::SeqCst), lookups);
    }
}

proptest! {
    #[test]
    fn contracts_are_isolated(contracts in prop::collection::hash_set("[a-z]{1,8}", 1..10)) {
        let services = DefaultServices::new();

        for contract in &contracts {
            prop_assert!(services.add_named_constant(contract, contract.clone()));
        }

        for contract in &contracts {
            let value = services.get_required_named::<String>(contract);
            prop_assert_eq!(&*value, contract);
        }
        prop_assert!(services.get::<String>().unwrap().is_none());
    }
}

proptest! {
    #[test]
    fn unregister_clears_key(kind in 0u8..3, contract in proptest::option::of("[a-z]{0,4}")) {
        let services = DefaultServices::new();
        let key = match &contract {
            Some(c) => Key::named::<u64>(c.as_str()),
            None => Key::of::<u64>(),
        };
        let contract = contract.as_deref();

        match (kind, contract) {
            (0, Some(c)) => { services.add_named_constant(c, 1u64); }
            (0, None) => { services.add_constant(1u64); }
            (1, Some(c)) => { services.add_named_lazy_singleton(c, || 1u64); }
            (1, None) => { services.add_lazy_singleton(|| 1u64); }
            (_, Some(c)) => { services.add_named_factory(c, || 1u64); }
            (_, None) => { services.add_factory(|| 1u64); }
        }
        prop_assert!(services.get_service(&key).is_some());

        services.unregister_service(&key);
        prop_assert!(services.get_service(&key).is_none());
    }
}

proptest! {
    #[test]
    fn key_equality_follows_contract(
        a in proptest::option::of("[a-c]{0,2}"),
        b in proptest::option::of("[a-c]{0,2}"),
    ) {
        let ka = Key::of::<u8>().with_contract(a.as_deref());
        let kb = Key::of::<u8>().with_contract(b.as_deref());

        prop_assert_eq!(ka == kb, a == b);

        let mut set = HashSet::new();
        set.insert(ka);
        set.insert(kb);
        prop_assert_eq!(set.len(), if a == b { 1 } else { 2 });
    }
}
