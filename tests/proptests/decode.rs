//! Property tests for base decoding

use num_bigint::{BigInt, Sign};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use recombine::codec::{decode, encode};
use recombine::domain::Radix;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Base with a full digit alphabet (2..=36)
#[derive(Clone, Copy, Debug)]
struct AlphabetRadix(u32);

impl Arbitrary for AlphabetRadix {
    fn arbitrary(g: &mut Gen) -> Self {
        AlphabetRadix((u32::arbitrary(g) % 35) + 2) // 2..=36
    }
}

/// Digit values valid for some base, most significant first
#[derive(Clone, Debug)]
struct DigitString {
    base: u32,
    digits: Vec<u32>,
}

impl Arbitrary for DigitString {
    fn arbitrary(g: &mut Gen) -> Self {
        let AlphabetRadix(base) = AlphabetRadix::arbitrary(g);
        // Up to 60 digits to go well past fixed-width integers
        let len = (usize::arbitrary(g) % 60) + 1;
        let digits = (0..len).map(|_| u32::arbitrary(g) % base).collect();
        DigitString { base, digits }
    }
}

impl DigitString {
    fn render(&self, uppercase: bool) -> String {
        self.digits
            .iter()
            .map(|&d| {
                let ch = char::from(ALPHABET[d as usize]);
                if uppercase { ch.to_ascii_uppercase() } else { ch }
            })
            .collect()
    }

    fn positional_value(&self) -> BigInt {
        let base = BigInt::from(self.base);
        let len = self.digits.len();
        self.digits
            .iter()
            .enumerate()
            .map(|(i, &d)| BigInt::from(d) * base.pow(u32::try_from(len - 1 - i).unwrap()))
            .sum()
    }
}

/// Decoding matches the positional definition sum(d_i * b^i)
#[quickcheck]
fn prop_decode_matches_positional_value(input: DigitString, uppercase: bool) -> bool {
    let text = input.render(uppercase);
    let Ok(value) = decode(&text, Radix::new(input.base).unwrap()) else {
        return false;
    };
    value == input.positional_value()
}

/// Encoding a decoded value reproduces the digits, minus leading zeros
#[quickcheck]
fn prop_decode_encode_round_trip(input: DigitString) -> bool {
    let text = input.render(false);
    let radix = Radix::new(input.base).unwrap();
    let Ok(value) = decode(&text, radix) else {
        return false;
    };
    let Ok(encoded) = encode(&value, radix) else {
        return false;
    };

    let trimmed = text.trim_start_matches('0');
    let expected = if trimmed.is_empty() { "0" } else { trimmed };
    encoded == expected
}

/// Arbitrary signed values survive encode then decode
#[quickcheck]
fn prop_signed_values_round_trip(limbs: Vec<u32>, negative: bool, radix: AlphabetRadix) -> bool {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    let value = BigInt::new(sign, limbs);
    let radix = Radix::new(radix.0).unwrap();

    let Ok(encoded) = encode(&value, radix) else {
        return false;
    };
    decode(&encoded, radix).ok() == Some(value)
}

/// A digit equal to the base is always rejected
#[quickcheck]
fn prop_digit_equal_to_base_rejected(input: DigitString) -> bool {
    if input.base >= 36 {
        return true; // No digit character for 36
    }
    let mut text = input.render(false);
    let bad = char::from(ALPHABET[input.base as usize]);
    text.push(bad);
    decode(&text, Radix::new(input.base).unwrap()).is_err()
}
