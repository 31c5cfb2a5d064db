//! Cross-crate tests through the session and dispatch layers

use tcrypt_api::{Error, Padding};
use tcrypt_symmetric::{by_cipher_name, by_mode_name, constructor, registry, CipherOptions, CipherSession, Mode};
use tcrypt_tests::{mode_options, stream};

fn ecb_block(cipher: &str, key: &str, plaintext: &str) -> String {
    let key = hex::decode(key).unwrap();
    let pt = hex::decode(plaintext).unwrap();
    let opts = CipherOptions::new().cipher(cipher).padding(Padding::None);
    let ct = stream(&key, opts, &pt, usize::MAX).unwrap();
    assert_eq!(stream(&key, opts.decrypt(), &ct, usize::MAX).unwrap(), pt);
    hex::encode(ct)
}

#[test]
fn test_block_known_answers() {
    // FIPS-197 C.1, C.2, C.3
    let pt = "00112233445566778899aabbccddeeff";
    assert_eq!(
        ecb_block("aes", "000102030405060708090a0b0c0d0e0f", pt),
        "69c4e0d86a7b0430d8cdb78070b4c55a"
    );
    assert_eq!(
        ecb_block("aes", "000102030405060708090a0b0c0d0e0f1011121314151617", pt),
        "dda97ca4864cdfe06eaf70a0ec0d7191"
    );
    assert_eq!(
        ecb_block(
            "aes",
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            pt
        ),
        "8ea2b7ca516745bfeafc49904b496089"
    );

    assert_eq!(
        ecb_block("des", "133457799bbcdff1", "0123456789abcdef"),
        "85e813540f0ab405"
    );
    // three equal keys reduce EDE to single DES
    assert_eq!(
        ecb_block("des3", "133457799bbcdff1133457799bbcdff1133457799bbcdff1", "0123456789abcdef"),
        "85e813540f0ab405"
    );
    assert_eq!(
        ecb_block("blowfish", "0000000000000000", "0000000000000000"),
        "4ef997456198dd78"
    );
}

#[test]
fn test_aes_cbc_zero_key() {
    let key = [0u8; 16];
    let iv = [0u8; 16];
    let opts = CipherOptions::new().cipher("aes").mode("cbc").iv(&iv);

    let ct = tcrypt_symmetric::encrypt(&key, opts, &[b'A'; 16]).unwrap();
    assert_eq!(ct.len(), 32);
    assert_eq!(tcrypt_symmetric::decrypt(&key, opts, &ct).unwrap(), vec![b'A'; 16]);
}

#[test]
fn test_cbc_tampering_yields_padding_error_or_garbage() {
    let key = [0x0fu8; 16];
    let iv = [0xf0u8; 16];
    let msg = b"a message spanning a few cipher blocks";
    let opts = mode_options("aes", Mode::Cbc, &iv, 16);
    let ct = stream(&key, opts, msg, usize::MAX).unwrap();

    for pos in 0..ct.len() {
        let mut tampered = ct.clone();
        tampered[pos] ^= 0x01;
        match stream(&key, opts.decrypt(), &tampered, usize::MAX) {
            Ok(pt) => assert_ne!(pt, msg, "tamper at {pos} went unnoticed"),
            Err(Error::PaddingError { .. }) => {}
            Err(other) => panic!("unexpected error at {pos}: {other:?}"),
        }
    }
}

#[test]
fn test_aes_five_byte_key() {
    let err = CipherSession::new(&[0u8; 5], CipherOptions::new().cipher("aes")).unwrap_err();
    assert!(matches!(err, Error::InvalidKeySize { actual: 5, .. }));
    assert!(err.to_string().contains("16, 24, 32"));
}

#[test]
fn test_update_and_finish_after_finish() {
    let mut session = by_mode_name("ecb", &[0u8; 16], CipherOptions::new()).unwrap();
    session.update(b"data").unwrap();
    session.finish().unwrap();
    assert!(matches!(session.update(b"x"), Err(Error::SessionFinished { .. })));
    assert!(matches!(session.finish(), Err(Error::SessionFinished { .. })));
}

#[test]
fn test_registry_self_tests() {
    let registry = registry();
    assert!(!registry.is_empty());
    for descriptor in registry.registered() {
        descriptor.self_test().unwrap();
    }
    for skipped in registry.skipped() {
        assert!(matches!(skipped.error, Error::UnsupportedBackend { .. }), "{}", skipped.name);
    }
}

#[test]
fn test_dispatch_paths_agree() {
    let key = [0x33u8; 24];
    let iv = [0x44u8; 8];
    let msg = b"same session either way";

    let mut a = by_cipher_name("des3", &key, CipherOptions::new().mode("cfb").iv(&iv)).unwrap();
    let mut b = by_mode_name("cfb", &key, CipherOptions::new().cipher("des3").iv(&iv)).unwrap();
    let mut c = constructor("des3")
        .unwrap()
        .build(&key, CipherOptions::new().mode("cfb").iv(&iv))
        .unwrap();

    let out_a = a.update(msg).unwrap();
    assert_eq!(out_a, b.update(msg).unwrap());
    assert_eq!(out_a, c.update(msg).unwrap());
}

#[cfg(feature = "all-ciphers")]
#[test]
fn test_extra_ciphers_registered() {
    let registry = registry();
    for name in ["twofish", "cast5", "rc2"] {
        assert!(registry.contains(name), "{name} missing");
    }
    for name in ["anubis", "kasumi", "xtea"] {
        assert!(registry.skipped().iter().any(|s| s.name == name), "{name} not skipped");
    }
}
