//! Property-based tests for chunked streaming

use proptest::prelude::*;
use tcrypt_symmetric::{registry, Mode, Padding};
use tcrypt_tests::{mode_options, stream, supports};

fn any_mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn any_cipher() -> impl Strategy<Value = &'static str> {
    prop::sample::select(registry().names())
}

proptest! {
    #[test]
    fn chunking_does_not_change_output(
        cipher in any_cipher(),
        mode in any_mode(),
        data in prop::collection::vec(any::<u8>(), 0..200),
        chunk in 1usize..40,
        seed in any::<u8>(),
    ) {
        let descriptor = registry().lookup(cipher).unwrap();
        prop_assume!(supports(descriptor, mode));

        let bs = descriptor.block_size();
        let key: Vec<u8> = (0..descriptor.max_key_size()).map(|i| seed ^ i as u8).collect();
        let iv = vec![seed; bs];
        let mut opts = mode_options(cipher, mode, &iv, key.len());
        if mode == Mode::Lrw {
            opts = opts.padding(Padding::Pkcs7);
        }

        let whole = stream(&key, opts, &data, usize::MAX).unwrap();
        let chunked = stream(&key, opts, &data, chunk).unwrap();
        prop_assert_eq!(&whole, &chunked);

        let back = stream(&key, opts.decrypt(), &whole, chunk).unwrap();
        prop_assert_eq!(back, data);
    }

    #[test]
    fn stream_modes_preserve_length(
        mode in prop::sample::select(vec![Mode::Ctr, Mode::Cfb, Mode::Ofb, Mode::F8]),
        data in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let key = [0x77u8; 16];
        let iv = [0x88u8; 16];
        let ct = stream(&key, mode_options("aes", mode, &iv, 16), &data, 3).unwrap();
        prop_assert_eq!(ct.len(), data.len());
    }
}
