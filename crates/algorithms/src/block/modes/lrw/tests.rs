use super::*;
use crate::block::{Aes, Blowfish, CipherAlgorithm};
use crate::error::Error;

const KEY: [u8; 16] = [
    0x45, 0x62, 0xac, 0x25, 0xf8, 0x28, 0x17, 0x6d, 0x4c, 0x26, 0x84, 0x14, 0xb5, 0x68, 0x01, 0x85,
];
const TWEAK: [u8; 16] = [
    0x25, 0x8e, 0x2a, 0x05, 0xe7, 0x3e, 0x9d, 0x03, 0xee, 0x5a, 0x83, 0x0c, 0xcc, 0x09, 0x4c, 0x87,
];

fn index(n: u8) -> [u8; 16] {
    let mut iv = [0u8; 16];
    iv[15] = n;
    iv
}

fn lrw(iv: &[u8]) -> Lrw<Aes> {
    Lrw::new(Aes::new(&KEY).unwrap(), iv, &TWEAK).unwrap()
}

#[test]
fn test_lrw_p1619_vector() {
    // IEEE P1619 LRW-AES-128, index 1
    let mut data = *b"0123456789ABCDEF";
    lrw(&index(1)).encrypt(&mut data).unwrap();
    assert_eq!(hex::encode(data), "f1b273cd65a3df5fe95d489254634eb8");

    lrw(&index(1)).decrypt(&mut data).unwrap();
    assert_eq!(&data, b"0123456789ABCDEF");
}

#[test]
fn test_lrw_index_carry_vector() {
    // index 0xff..0x101 carries into the second byte from the end
    let mut data: Vec<u8> = (0..48).collect();
    lrw(&index(0xff)).encrypt(&mut data).unwrap();
    assert_eq!(
        hex::encode(&data),
        "6756ea0c6a33f181e5f88f5e310219e1\
         f44c4ed64650b2bc4504cd591d0330e3\
         8ea321e8dc6d1e00ce193c146ab5ce7f"
    );
}

#[test]
fn test_lrw_index_advances_per_block() {
    let mut data = [0x11u8; 48];
    let mut mode = lrw(&index(1));
    mode.encrypt(&mut data).unwrap();
    assert_eq!(mode.iv(), &index(4));

    // the third block equals a fresh encryption at index 3
    let mut third = [0x11u8; 16];
    lrw(&index(3)).encrypt(&mut third).unwrap();
    assert_eq!(&data[32..], &third[..]);
}

#[test]
fn test_lrw_round_trip_across_calls() {
    let plaintext: Vec<u8> = (0..64).collect();
    let mut data = plaintext.clone();
    let mut enc = lrw(&index(9));
    enc.encrypt(&mut data[..16]).unwrap();
    enc.encrypt(&mut data[16..]).unwrap();

    lrw(&index(9)).decrypt(&mut data).unwrap();
    assert_eq!(data, plaintext);
}

#[test]
fn test_lrw_requires_whole_blocks() {
    let mut data = [0u8; 20];
    assert!(matches!(
        lrw(&index(0)).encrypt(&mut data),
        Err(Error::IncompleteBlock { context: "LRW", buffered: 4, block_size: 16 })
    ));
}

#[test]
fn test_lrw_rejects_64_bit_ciphers_and_bad_tweaks() {
    let bf = Blowfish::new(&[1u8; 16]).unwrap();
    assert!(matches!(
        Lrw::new(bf, &[0u8; 16], &TWEAK),
        Err(Error::Parameter { name: "cipher", .. })
    ));

    let aes = Aes::new(&KEY).unwrap();
    assert!(matches!(
        Lrw::new(aes, &[0u8; 16], &[0u8; 8]),
        Err(Error::Parameter { name: "tweak", .. })
    ));
}
