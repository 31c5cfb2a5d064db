//! Round trips for every registered cipher, key size class, mode and length

use tcrypt_api::{Error, Padding};
use tcrypt_symmetric::{registry, Mode};
use tcrypt_tests::{mode_options, patterned, stream, supports};

fn expected_len(mode: Mode, padding: Padding, len: usize, bs: usize) -> usize {
    match (mode.is_stream(), padding) {
        (true, _) | (false, Padding::None) => len,
        (false, Padding::Pkcs7) => (len / bs + 1) * bs,
    }
}

#[test]
fn test_round_trip_all_ciphers_and_modes() {
    for descriptor in registry().registered() {
        let bs = descriptor.block_size();
        let lengths = [0, 1, bs - 1, bs, bs + 1, 10 * bs];
        let iv = patterned(bs, 0x10);

        for key_len in descriptor.key_sizes().representatives() {
            let key = patterned(key_len, 0x20);

            for mode in Mode::ALL {
                if !supports(descriptor, mode) {
                    continue;
                }
                let base = mode_options(descriptor.name(), mode, &iv, key_len);
                let mut paddings = vec![mode.default_padding()];
                if mode == Mode::Lrw {
                    paddings.push(Padding::Pkcs7);
                }

                for padding in paddings {
                    let opts = base.padding(padding);
                    for len in lengths {
                        if padding == Padding::None && !mode.is_stream() && len % bs != 0 {
                            continue;
                        }
                        let msg = patterned(len, 0x30);
                        let label = format!("{}/{}/{}/{}/{}", descriptor.name(), key_len, mode, padding, len);

                        let ct = stream(&key, opts.encrypt(), &msg, usize::MAX).unwrap();
                        assert_eq!(ct.len(), expected_len(mode, padding, len, bs), "{label}");
                        let pt = stream(&key, opts.decrypt(), &ct, usize::MAX).unwrap();
                        assert_eq!(pt, msg, "{label}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_aligned_input_gains_one_block() {
    let iv = [0u8; 16];
    for mode in [Mode::Ecb, Mode::Cbc] {
        let opts = mode_options("aes", mode, &iv, 16);
        for blocks in 1..4 {
            let ct = stream(&[1u8; 16], opts, &vec![0u8; blocks * 16], usize::MAX).unwrap();
            assert_eq!(ct.len(), (blocks + 1) * 16);
        }
    }
}

#[test]
fn test_lrw_rejects_small_block_ciphers() {
    let iv = [0u8; 8];
    let opts = mode_options("des", Mode::Lrw, &iv, 8);
    assert!(matches!(stream(&[0u8; 8], opts, &[], 1), Err(Error::InvalidParameter { .. })));
}

#[test]
fn test_unaligned_block_mode_without_padding() {
    let iv = [0u8; 16];
    for mode in [Mode::Ecb, Mode::Cbc, Mode::Lrw] {
        let opts = mode_options("aes", mode, &iv, 16).padding(Padding::None);
        assert!(matches!(
            stream(&[0u8; 16], opts, &[0u8; 17], 5),
            Err(Error::IncompleteBlock { buffered: 1, block_size: 16, .. })
        ));
    }
}
