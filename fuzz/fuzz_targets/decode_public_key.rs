#![no_main]

use edseal_core::{SealError, KEY_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match edseal_crypto::to_x25519_pub(data) {
        Ok(u) => {
            // Output is a canonical field element
            assert!(u[31] & 0x80 == 0);
        }
        Err(SealError::InvalidKeyLength { actual, .. }) => {
            assert_ne!(actual, KEY_SIZE);
            assert_eq!(actual, data.len());
        }
        Err(SealError::InvalidPoint) => assert_eq!(data.len(), KEY_SIZE),
        Err(e) => panic!("unexpected error: {}", e),
    }
});
