use crate::domain::model::Conversion;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Binary digits of `number`, most significant first.
///
/// Negative numbers are written in two's complement at the width of their
/// magnitude: the bits of `|n|` are inverted and incremented by one, growing
/// by a leading `1` only if the carry runs off the top.
pub fn to_binary(number: i64) -> String {
    if number == 0 {
        return "0".to_string();
    }
    if number > 0 {
        return magnitude_binary(number as u64);
    }

    let mut bits: Vec<u8> = magnitude_binary(number.unsigned_abs())
        .bytes()
        .map(|bit| if bit == b'0' { b'1' } else { b'0' })
        .collect();

    let mut carry = true;
    for bit in bits.iter_mut().rev() {
        if *bit == b'1' {
            *bit = b'0';
        } else {
            *bit = b'1';
            carry = false;
            break;
        }
    }
    if carry {
        bits.insert(0, b'1');
    }

    bits.into_iter().map(char::from).collect()
}

fn magnitude_binary(mut number: u64) -> String {
    let mut digits = Vec::new();
    while number > 0 {
        digits.push(if number % 2 == 1 { '1' } else { '0' });
        number /= 2;
    }
    digits.iter().rev().collect()
}

/// Upper-case hex digits, most significant first. Negative input yields an
/// empty string.
pub fn to_hexadecimal(number: i64) -> String {
    if number == 0 {
        return "0".to_string();
    }

    let mut remaining = number;
    let mut digits = Vec::new();
    while remaining > 0 {
        digits.push(char::from(HEX_DIGITS[(remaining % 16) as usize]));
        remaining /= 16;
    }
    digits.iter().rev().collect()
}

pub fn convert(number: i64) -> Conversion {
    Conversion {
        number,
        binary: to_binary(number),
        hexadecimal: to_hexadecimal(number),
    }
}
