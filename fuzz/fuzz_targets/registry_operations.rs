#![no_main]

use libfuzzer_sys::fuzz_target;
use service_locator::{DefaultServices, Key, Services, ServicesExt};
use std::collections::HashMap;

// Which strategy currently owns each slot, per (contract index).
#[derive(Default, Clone, Copy)]
struct Slot {
    constant: Option<u32>,
    lazy: Option<u32>,
    factory: Option<u32>,
}

const CONTRACTS: [Option<&str>; 3] = [None, Some("a"), Some("b")];

fuzz_target!(|data: &[u8]| {
    let services = DefaultServices::new();
    let mut model: HashMap<usize, Slot> = HashMap::new();

    // Each operation is two bytes: opcode and value.
    for chunk in data.chunks_exact(2) {
        let op = chunk[0] % 5;
        let which = (chunk[0] as usize / 5) % CONTRACTS.len();
        let value = chunk[1] as u32;
        let contract = CONTRACTS[which];
        let key = Key::of::<u32>().with_contract(contract);
        let slot = model.entry(which).or_default();

        match op {
            0 => {
                let ok = match contract {
                    Some(c) => services.add_named_constant(c, value),
                    None => services.add_constant(value),
                };
                assert_eq!(ok, slot.constant.is_none());
                if ok {
                    slot.constant = Some(value);
                }
            }
            1 => {
                let ok = match contract {
                    Some(c) => services.add_named_lazy_singleton(c, move || value),
                    None => services.add_lazy_singleton(move || value),
                };
                assert_eq!(ok, slot.lazy.is_none());
                if ok {
                    slot.lazy = Some(value);
                }
            }
            2 => {
                let ok = match contract {
                    Some(c) => services.add_named_factory(c, move || value),
                    None => services.add_factory(move || value),
                };
                assert_eq!(ok, slot.factory.is_none());
                if ok {
                    slot.factory = Some(value);
                }
            }
            3 => {
                services.unregister_service(&key);
                *slot = Slot::default();
            }
            _ => {
                let got = services
                    .get_service(&key)
                    .map(|v| *v.downcast::<u32>().expect("registry stores u32 only"));
                let expected = slot.constant.or(slot.lazy).or(slot.factory);
                assert_eq!(got, expected);
                // A resolved lazy singleton becomes the constant
                if slot.constant.is_none() && slot.lazy.is_some() {
                    slot.constant = slot.lazy;
                }
            }
        }
    }
});
