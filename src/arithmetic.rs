use std::cmp;

use log::{debug, warn};

use crate::error::NumberError;
use crate::huge_uint::HugeUint;
use crate::radix::Radix;

/// Digits needed so that the final carry of an addition always fits.
fn result_length(a: &HugeUint, b: &HugeUint) -> usize {
    cmp::max(a.len(), b.len()) + 1
}

/// Bit at `position` (1 = least significant); missing positions read as 0.
#[inline]
fn bit(number: &HugeUint, position: usize) -> bool {
    number.digit_from_end(position) == Some(b'1')
}

/// Adds two binary numbers with a full adder per digit.
///
/// The result is always one digit longer than the longer operand, so it may
/// start with `0`. An allocation failure is reported through the result's
/// error flag.
pub fn add_bin(a: &HugeUint, b: &HugeUint) -> HugeUint {
    let mut result = HugeUint::new(result_length(a, b));
    if result.error().is_some() {
        return result;
    }

    let size = result.len();
    let digits = result.digits_mut();
    let mut carry = false;
    for i in 1..=size {
        let x = bit(a, i);
        let y = bit(b, i);

        let sum = x ^ y ^ carry;
        carry = (x & y) | (carry & (x ^ y));

        digits[size - i] = b'0' + sum as u8;
    }

    debug!("add_bin: {} + {} digits -> {} digits", a.len(), b.len(), size);
    result
}

/// Subtracts `b` from `a`, both binary, with a full subtractor per digit.
///
/// The result has as many digits as `a`. If `b` is larger than `a` the
/// result carries [`NumberError::Underflow`] and its digits are meaningless.
pub fn sub_bin(a: &HugeUint, b: &HugeUint) -> HugeUint {
    let mut result = HugeUint::new(a.len());
    if result.error().is_some() {
        return result;
    }

    let size = result.len();
    let digits = result.digits_mut();
    let mut borrow = false;
    // Digits of `b` above the length of `a` still feed the borrow.
    for i in 1..=cmp::max(a.len(), b.len()) {
        let x = bit(a, i);
        let y = bit(b, i);

        let diff = x ^ y ^ borrow;
        borrow = (!x & y) | (!(x ^ y) & borrow);

        if i <= size {
            digits[size - i] = b'0' + diff as u8;
        }
    }

    if borrow {
        warn!("sub_bin: subtrahend is larger than minuend, result underflowed");
        result.set_error(NumberError::Underflow);
    }
    result
}

/// Adds two decimal numbers.
///
/// A carry-out position that would hold `0` is dropped, so `0 + 0` is `0`.
pub fn add_dec(a: &HugeUint, b: &HugeUint) -> HugeUint {
    add_in_radix(a, b, Radix::Decimal)
}

/// Adds two upper-case hexadecimal numbers.
///
/// A carry-out position that would hold `0` is dropped.
pub fn add_hex(a: &HugeUint, b: &HugeUint) -> HugeUint {
    add_in_radix(a, b, Radix::Hexadecimal)
}

// Builds the sum least significant digit first, growing one slot per digit,
// then flips it into reading order.
fn add_in_radix(a: &HugeUint, b: &HugeUint, radix: Radix) -> HugeUint {
    let base = radix.value() as u16;
    let max_size = result_length(a, b);
    let mut result = HugeUint::new(0);

    // Bytes outside the alphabet can map to values up to 255, so sum in u16.
    let mut carry = 0u16;
    for i in 1..=max_size {
        let x = a.digit_from_end(i).map_or(0, Radix::digit_value);
        let y = b.digit_from_end(i).map_or(0, Radix::digit_value);

        let total = u16::from(x) + u16::from(y) + carry;
        let sum = (total % base) as u8;
        carry = u16::from(total >= base);

        if i == max_size && sum == 0 {
            break;
        }

        let size = result.len();
        result.resize(size + 1);
        if result.error().is_some() {
            warn!("{} addition stopped after {} digits", radix, size);
            return result;
        }
        result.digits_mut()[size] = Radix::digit_char(sum);
    }

    result.digits_mut().reverse();
    debug!(
        "{} addition: {} + {} digits -> {} digits",
        radix,
        a.len(),
        b.len(),
        result.len()
    );
    result
}
