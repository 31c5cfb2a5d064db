use super::*;
use crate::block::{Aes, Des};
use crate::error::Error;

const KEY: [u8; 16] = [
    0x23, 0x48, 0x29, 0x00, 0x84, 0x67, 0xbe, 0x18, 0x6c, 0x3d, 0xe1, 0x4a, 0xae, 0x72, 0xd6, 0x2c,
];
const SALT: [u8; 4] = [0x32, 0xf2, 0x87, 0x0d];
const IV: [u8; 16] = [
    0x00, 0x6e, 0x5c, 0xba, 0x50, 0x68, 0x1d, 0xe5, 0x5c, 0x62, 0x15, 0x99, 0xd4, 0x62, 0x56, 0x4a,
];

#[test]
fn test_mask_key_layout() {
    let masked = mask_key(&KEY, &SALT).unwrap();
    assert_eq!(masked[0], KEY[0] ^ SALT[0]);
    assert_eq!(masked[3], KEY[3] ^ SALT[3]);
    assert_eq!(masked[4], KEY[4] ^ 0x55);
    assert_eq!(masked[15], KEY[15] ^ 0x55);

    assert!(matches!(
        mask_key(&KEY[..4], &[0u8; 5]),
        Err(Error::Parameter { name: "salt_key", .. })
    ));
}

#[test]
fn test_f8_rfc3711_vector() {
    // RFC 3711 B.2
    let plaintext = b"pseudorandomness is the next best thing";
    let mut data = plaintext.to_vec();
    F8::<Aes>::from_key(&KEY, &SALT, &IV).unwrap().encrypt(&mut data).unwrap();
    assert_eq!(
        hex::encode(&data),
        "019ce7a26e7854014a6366aa95d4eefd1ad4172a14f9faf455b7f1d4b62bd08f562c0eef7c4802"
    );

    F8::<Aes>::from_key(&KEY, &SALT, &IV).unwrap().decrypt(&mut data).unwrap();
    assert_eq!(&data[..], &plaintext[..]);
}

#[test]
fn test_f8_stream_chunking() {
    let plaintext: Vec<u8> = (0u8..100).collect();
    let mut whole = plaintext.clone();
    F8::<Aes>::from_key(&KEY, &SALT, &IV).unwrap().encrypt(&mut whole).unwrap();

    let mut mode = F8::<Aes>::from_key(&KEY, &SALT, &IV).unwrap();
    let mut pieces = plaintext.clone();
    for chunk in pieces.chunks_mut(13) {
        mode.encrypt(chunk).unwrap();
    }
    assert_eq!(pieces, whole);

    F8::<Aes>::from_key(&KEY, &SALT, &IV).unwrap().decrypt(&mut whole).unwrap();
    assert_eq!(whole, plaintext);
}

#[test]
fn test_f8_set_iv_restarts() {
    let mut mode = F8::<Aes>::from_key(&KEY, &SALT, &IV).unwrap();
    let mut first = [0u8; 40];
    mode.encrypt(&mut first).unwrap();

    mode.set_iv(&IV).unwrap();
    assert_eq!(mode.iv(), &IV[..]);
    let mut second = [0u8; 40];
    mode.encrypt(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_f8_with_64_bit_block() {
    let key = [0x13u8, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1];
    let plaintext = *b"f8 mode over a 64-bit block";
    let mut data = plaintext;
    F8::<Des>::from_key(&key, &[1, 2], &[9u8; 8]).unwrap().encrypt(&mut data).unwrap();
    assert_ne!(data, plaintext);
    F8::<Des>::from_key(&key, &[1, 2], &[9u8; 8]).unwrap().decrypt(&mut data).unwrap();
    assert_eq!(data, plaintext);
}
