use super::*;
use crate::types::KeySizes;

#[test]
fn test_with_context_rewrites_context() {
    let err = Error::PaddingError { context: "pkcs7" }.with_context("CBC finish");
    assert_eq!(err, Error::PaddingError { context: "CBC finish" });

    let err = Error::unknown_cipher("nope").with_context("ignored");
    assert_eq!(err, Error::UnknownCipher { name: "nope".into() });
}

#[test]
fn test_display_messages() {
    let err = Error::InvalidIvSize {
        context: "CBC",
        expected: 16,
        actual: 0,
    };
    assert_eq!(err.to_string(), "CBC: invalid IV size (expected 16, got 0)");

    let err = Error::SessionFinished { operation: "update" };
    assert_eq!(err.to_string(), "update called on a finished session");
}

#[test]
fn test_key_size_validation() {
    const AES: KeySizes = KeySizes::Fixed(&[16, 24, 32]);

    assert!(validate::key_size("aes", 24, &AES).is_ok());
    match validate::key_size("aes", 5, &AES).unwrap_err() {
        Error::InvalidKeySize { context, actual, supported } => {
            assert_eq!(context, "aes");
            assert_eq!(actual, 5);
            assert_eq!(supported, "16, 24, 32");
        }
        e => panic!("unexpected error: {e:?}"),
    }
}

#[test]
fn test_iv_and_block_validation() {
    assert!(validate::iv_size("CTR", 16, 16).is_ok());
    assert!(matches!(
        validate::iv_size("ECB", 16, 0),
        Err(Error::InvalidIvSize { expected: 0, actual: 16, .. })
    ));

    assert!(validate::block_aligned("LRW", 32, 16).is_ok());
    assert!(matches!(
        validate::block_aligned("LRW", 33, 16),
        Err(Error::IncompleteBlock { buffered: 1, block_size: 16, .. })
    ));
}

#[test]
fn test_parameter_validation() {
    assert!(validate::parameter(true, "tweak", "must be 16 bytes").is_ok());
    match validate::parameter(false, "tweak", "must be 16 bytes").unwrap_err() {
        Error::InvalidParameter { context, message } => {
            assert_eq!(context, "tweak");
            assert_eq!(message, "must be 16 bytes");
        }
        e => panic!("unexpected error: {e:?}"),
    }
}
