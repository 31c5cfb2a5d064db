use super::*;
use crate::block::{Aes, CipherAlgorithm};
use crate::error::Error;

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const IV: &str = "000102030405060708090a0b0c0d0e0f";
const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";
const CIPHERTEXT: &str = "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2";

fn cbc() -> Cbc<Aes> {
    let key = hex::decode(KEY).unwrap();
    let iv = hex::decode(IV).unwrap();
    Cbc::new(Aes::new(&key).unwrap(), &iv).unwrap()
}

#[test]
fn test_cbc_aes128_sp800_38a() {
    // SP 800-38A F.2.1
    let mut data = hex::decode(PLAINTEXT).unwrap();
    cbc().encrypt(&mut data).unwrap();
    assert_eq!(hex::encode(&data), CIPHERTEXT);

    cbc().decrypt(&mut data).unwrap();
    assert_eq!(hex::encode(&data), PLAINTEXT);
}

#[test]
fn test_cbc_chaining_carries_across_calls() {
    let data = hex::decode(PLAINTEXT).unwrap();
    let mut mode = cbc();

    let mut first = data[..16].to_vec();
    let mut second = data[16..].to_vec();
    mode.encrypt(&mut first).unwrap();
    mode.encrypt(&mut second).unwrap();

    first.extend_from_slice(&second);
    assert_eq!(hex::encode(&first), CIPHERTEXT);
    // chaining value is the last ciphertext block
    assert_eq!(hex::encode(mode.iv()), &CIPHERTEXT[32..]);
}

#[test]
fn test_cbc_set_iv_resets_chain() {
    let mut mode = cbc();
    let mut data = hex::decode(PLAINTEXT).unwrap();
    mode.encrypt(&mut data).unwrap();

    mode.set_iv(&hex::decode(IV).unwrap()).unwrap();
    let mut again = hex::decode(PLAINTEXT).unwrap();
    mode.encrypt(&mut again).unwrap();
    assert_eq!(data, again);
}

#[test]
fn test_cbc_iv_length_checked() {
    let aes = Aes::new(&[0u8; 16]).unwrap();
    assert!(matches!(
        Cbc::new(aes, &[0u8; 8]),
        Err(Error::IvSize { context: "CBC", expected: 16, actual: 8 })
    ));
}

#[test]
fn test_cbc_rejects_partial_block() {
    let mut data = [0u8; 20];
    assert!(matches!(
        cbc().decrypt(&mut data),
        Err(Error::IncompleteBlock { buffered: 4, .. })
    ));
}
