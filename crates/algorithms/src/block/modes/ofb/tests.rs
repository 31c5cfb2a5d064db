use super::*;
use crate::block::{Aes, CipherAlgorithm};

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const IV: &str = "000102030405060708090a0b0c0d0e0f";
const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";
const CIPHERTEXT: &str = "3b3fd92eb72dad20333449f8e83cfb4a7789508d16918f03f53c52dac54ed825";

fn ofb() -> Ofb<Aes> {
    let key = hex::decode(KEY).unwrap();
    Ofb::new(Aes::new(&key).unwrap(), &hex::decode(IV).unwrap()).unwrap()
}

#[test]
fn test_ofb_aes128_sp800_38a() {
    // SP 800-38A F.4.1
    let mut data = hex::decode(PLAINTEXT).unwrap();
    ofb().encrypt(&mut data).unwrap();
    assert_eq!(hex::encode(&data), CIPHERTEXT);

    ofb().decrypt(&mut data).unwrap();
    assert_eq!(hex::encode(&data), PLAINTEXT);
}

#[test]
fn test_ofb_chunking_invariance() {
    let mut mode = ofb();
    let mut data = hex::decode(PLAINTEXT).unwrap();
    for chunk in data.chunks_mut(7) {
        mode.encrypt(chunk).unwrap();
    }
    assert_eq!(hex::encode(&data), CIPHERTEXT);
}

#[test]
fn test_ofb_register_after_one_block() {
    let mut mode = ofb();
    let mut data = [0u8; 16];
    mode.encrypt(&mut data).unwrap();
    // with a zero block the output is the keystream, which is the register
    assert_eq!(mode.iv(), &data[..]);
}
