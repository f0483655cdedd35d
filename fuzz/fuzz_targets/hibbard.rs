#![no_main]

use hibbard::tests::{integration_test, Input};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Input<u8, u8>| {
    integration_test(input);
});
