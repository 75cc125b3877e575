#![no_main]

use arbitrary::Arbitrary;
use edseal_core::SealError;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct OpenInput {
    receiver_seed: [u8; 32],
    sender_public: [u8; 32],
    sealed: Vec<u8>,
}

// Attacker-controlled bytes must be rejected without panicking
fuzz_target!(|input: OpenInput| {
    match edseal_crypto::decrypt(&input.receiver_seed, &input.sender_public, &input.sealed) {
        Ok(_) => {}
        Err(SealError::MalformedInput { minimum, actual }) => {
            assert_eq!(actual, input.sealed.len());
            assert!(actual < minimum);
        }
        Err(_) => {}
    }
});
