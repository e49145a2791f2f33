// src/permissions/tests.rs
//!
//! Tests for the rwx permission codec
//!

use super::*;

// ============================================================================
// encode Tests
// ============================================================================

#[test]
fn test_encode_all_set() {
    assert_eq!(encode(Permissions::ALL), "rwx rwx rwx");
}

#[test]
fn test_encode_all_clear() {
    assert_eq!(encode(Permissions::NONE), "--- --- ---");
}

#[test]
fn test_encode_common_modes() {
    assert_eq!(encode(Permissions::from_mode(0o755)), "rwx r-x r-x");
    assert_eq!(encode(Permissions::from_mode(0o644)), "rw- r-- r--");
    assert_eq!(encode(Permissions::from_mode(0o600)), "rw- --- ---");
    assert_eq!(encode(Permissions::from_mode(0o421)), "r-- -w- --x");
}

#[test]
fn test_encode_is_eleven_chars() {
    for mode in 0..=0o777u32 {
        assert_eq!(encode(Permissions::from_mode(mode)).len(), 11);
    }
}

#[test]
fn test_from_mode_strips_type_and_special_bits() {
    // regular file, setuid, 0755
    let p = Permissions::from_mode(0o100000 | 0o4000 | 0o755);
    assert_eq!(p.mode(), 0o755);
    assert_eq!(p.to_string(), "rwx r-x r-x");
}

// ============================================================================
// decode_octal Tests
// ============================================================================

#[test]
fn test_decode_octal_valid() {
    assert_eq!(decode_octal("755").unwrap().mode(), 0o755);
    assert_eq!(decode_octal("644").unwrap().mode(), 0o644);
    assert_eq!(decode_octal("000").unwrap(), Permissions::NONE);
    assert_eq!(decode_octal("777").unwrap(), Permissions::ALL);
}

#[test]
fn test_decode_octal_digit_order_is_owner_group_other() {
    let p = decode_octal("421").unwrap();
    assert_eq!(p.triad(Principal::Owner), READ);
    assert_eq!(p.triad(Principal::Group), WRITE);
    assert_eq!(p.triad(Principal::Other), EXECUTE);
}

#[test]
fn test_decode_octal_rejects_wrong_length() {
    for input in ["", "7", "75", "7550", " 755", "755 "] {
        assert!(
            matches!(decode_octal(input), Err(PermissionError::InvalidFormat { .. })),
            "expected InvalidFormat for {:?}",
            input
        );
    }
}

#[test]
fn test_decode_octal_rejects_non_digits() {
    for input in ["abc", "7a5", "-75", "+75", "7.5", "0x7"] {
        assert!(
            matches!(decode_octal(input), Err(PermissionError::InvalidFormat { .. })),
            "expected InvalidFormat for {:?}",
            input
        );
    }
}

#[test]
fn test_decode_octal_rejects_non_octal_digits() {
    assert!(decode_octal("758").is_err());
    assert!(decode_octal("900").is_err());
    assert!(decode_octal("8xx").is_err());
}

#[test]
fn test_decode_octal_rejects_multibyte_input() {
    // three chars, but more than three bytes
    assert!(decode_octal("7５5").is_err());
}

#[test]
fn test_invalid_format_display_names_input() {
    let err = decode_octal("abc").unwrap_err();
    let display = format!("{}", err);
    assert!(display.contains("abc"));
    assert!(display.contains("755"));
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_octal_round_trip_is_stable() {
    for owner in 0..8 {
        for group in 0..8 {
            for other in 0..8 {
                let text = format!("{}{}{}", owner, group, other);
                let decoded = decode_octal(&text).unwrap();
                assert_eq!(decoded.to_octal(), text);
                assert_eq!(decode_octal(&decoded.to_octal()).unwrap(), decoded);
            }
        }
    }
}

#[test]
fn test_from_str_matches_decode_octal() {
    let parsed: Permissions = "750".parse().unwrap();
    assert_eq!(parsed, decode_octal("750").unwrap());
    assert!("75".parse::<Permissions>().is_err());
}
