//! Published test vectors
//!
//! X25519 vectors are from RFC 7748 §5.2 and §6.1. Ed25519 keypairs are
//! from RFC 8032 §7.1; their X25519 forms follow from the conversion.

/// Single X25519 evaluation: `x25519(scalar, u) == output`
#[derive(Clone, Copy, Debug)]
pub struct X25519Vector {
    pub scalar: &'static str,
    pub u: &'static str,
    pub output: &'static str,
}

pub const RFC7748_X25519: [X25519Vector; 2] = [
    X25519Vector {
        scalar: "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
        u: "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
        output: "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
    },
    X25519Vector {
        scalar: "4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d",
        u: "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
        output: "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957",
    },
];

/// Result of iterating `k, u = x25519(k, u), k` from k = u = 9
pub const RFC7748_ITERATED_1: &str =
    "422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079";
pub const RFC7748_ITERATED_1000: &str =
    "684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51";

/// RFC 7748 §6.1 key agreement
pub const RFC7748_ALICE_PRIV: &str =
    "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
pub const RFC7748_ALICE_PUB: &str =
    "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
pub const RFC7748_BOB_PRIV: &str =
    "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb";
pub const RFC7748_BOB_PUB: &str =
    "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
pub const RFC7748_SHARED: &str =
    "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

/// Ed25519 keypair with its expected X25519 conversion
#[derive(Clone, Copy, Debug)]
pub struct ConversionVector {
    pub ed25519_seed: &'static str,
    pub ed25519_pub: &'static str,
    pub x25519_priv: &'static str,
    pub x25519_pub: &'static str,
}

pub const ED25519_CONVERSIONS: [ConversionVector; 2] = [
    // RFC 8032 TEST 1
    ConversionVector {
        ed25519_seed: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        ed25519_pub: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        x25519_priv: "307c83864f2833cb427a2ef1c00a013cfdff2768d980c0a3a520f006904de94f",
        x25519_pub: "d85e07ec22b0ad881537c2f44d662d1a143cf830c57aca4305d85c7a90f6b62e",
    },
    // RFC 8032 TEST 2
    ConversionVector {
        ed25519_seed: "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        ed25519_pub: "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
        x25519_priv: "68bd9ed75882d52815a97585caf4790a7f6c6b3b7f821c5e259a24b02e502e51",
        x25519_pub: "25c704c594b88afc00a76b69d1ed2b984d7e22550f3ed0802d04fbcd07d38d47",
    },
];

/// Shared secret between the two RFC 8032 keypairs above
pub const ED25519_PAIR_SHARED: &str =
    "5166f24a6918368e2af831a4affadd97af0ac326bdf143596c045967cc00230e";

/// u-coordinates of small-order points (RFC 7748 §7 and the curve's
/// twist); every scalar maps them to zero
pub const LOW_ORDER_POINTS: [&str; 5] = [
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0100000000000000000000000000000000000000000000000000000000000000",
    "e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800",
    "5f9c95bca3508c24b1d0b1559c83ef5b04445cc4581c8e86d8224eddd09f1157",
    "ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
];

/// Ed25519 public keys that decode to small-order Edwards points: y = -1,
/// the two points with y = 0, and two points of order 8. Their Montgomery
/// images are low-order u-coordinates.
pub const ED25519_LOW_ORDER_KEYS: [&str; 5] = [
    "ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000080",
    "26e8958fc2b227b045c3f489f2ef98f0d5dfac05d3c63339b13802886d53fc05",
    "c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac037a",
];

/// Decode a 32-byte hex constant
pub fn bytes32(hex_str: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(hex_str, &mut out).unwrap_or_else(|_| panic!("bad vector: {}", hex_str));
    out
}
