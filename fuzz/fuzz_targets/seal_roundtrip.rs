#![no_main]

use arbitrary::Arbitrary;
use edseal_crypto::Identity;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct RoundtripInput {
    sender_seed: [u8; 32],
    receiver_seed: [u8; 32],
    plaintext: Vec<u8>,
}

fuzz_target!(|input: RoundtripInput| {
    let sender = Identity::from_seed(&input.sender_seed);
    let receiver = Identity::from_seed(&input.receiver_seed);

    let sealed = match sender.seal_for(&receiver.to_public(), &input.plaintext) {
        Ok(sealed) => sealed,
        Err(_) => return,
    };
    let opened = receiver
        .open_from(&sender.to_public(), &sealed)
        .expect("sealed message must open");
    assert_eq!(opened, input.plaintext);
});
