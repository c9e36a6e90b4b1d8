use std::fmt;
use std::io::{self, Write};

use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::NumberError;
use crate::radix::Radix;

/// A huge unsigned integer stored as digit text, most significant digit first.
///
/// The buffer does not know its own base; the operation that reads it decides.
/// Leading zeros are kept as stored. An empty buffer is both "zero" and
/// "nothing loaded".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HugeUint {
    digits: Vec<u8>,
    error: Option<NumberError>,
}

impl HugeUint {
    /// Creates a number with `size` zero-filled digit slots.
    ///
    /// `size == 0` gives an empty number without allocating. If the storage
    /// cannot be allocated the number is empty and flagged with
    /// [`NumberError::Memory`].
    pub fn new(size: usize) -> Self {
        let mut number = HugeUint::default();
        if size == 0 {
            return number;
        }
        if number.digits.try_reserve_exact(size).is_err() {
            warn!("cannot allocate {} digits", size);
            number.error = Some(NumberError::Memory);
            return number;
        }
        number.digits.resize(size, 0);
        number
    }

    /// Wraps already formed digit text. The digits are not validated; see [`HugeUint::is_valid`].
    pub fn from_digits<D: AsRef<[u8]>>(digits: D) -> Self {
        HugeUint {
            digits: digits.as_ref().to_vec(),
            error: None,
        }
    }

    /// Renders `value` in `radix` with upper-case letter digits.
    pub fn from_biguint(value: &BigUint, radix: Radix) -> Self {
        Self::from_digits(value.to_str_radix(radix.value()).to_ascii_uppercase())
    }

    /// Reads the digits back as a `BigUint`, or `None` if any digit is outside `radix`.
    pub fn to_biguint(&self, radix: Radix) -> Option<BigUint> {
        if self.digits.is_empty() {
            return Some(BigUint::zero());
        }
        if !self.is_valid(radix) {
            return None;
        }
        BigUint::parse_bytes(&self.digits, radix.value())
    }

    /// Grows or shrinks the digit storage.
    ///
    /// Existing digits are kept up to the new length and new slots are zero-filled.
    /// When the storage cannot grow, the number is flagged with
    /// [`NumberError::Memory`] and keeps its previous digits.
    pub fn resize(&mut self, new_size: usize) {
        let additional = new_size.saturating_sub(self.digits.len());
        if self.digits.try_reserve(additional).is_err() {
            warn!(
                "cannot grow number from {} to {} digits",
                self.digits.len(),
                new_size
            );
            self.error = Some(NumberError::Memory);
            return;
        }
        self.digits.resize(new_size, 0);
    }

    /// Releases the storage and clears the error flag. Calling it twice is harmless.
    pub fn destroy(&mut self) {
        self.digits = Vec::new();
        self.error = None;
    }

    pub fn error(&self) -> Option<NumberError> {
        self.error
    }

    /// Turns the error flag into a `Result`.
    pub fn into_result(self) -> Result<Self, NumberError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    /// Number of stored digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns true if every stored digit belongs to `radix`.
    pub fn is_valid(&self, radix: Radix) -> bool {
        self.digits.iter().all(|&d| radix.is_digit(d))
    }

    /// Writes the digits verbatim. An empty number writes nothing.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.digits.is_empty() {
            debug!("nothing to print, number is empty");
            return Ok(());
        }
        out.write_all(&self.digits)
    }

    /// Digit at `position`, counted from the least significant end starting at 1.
    #[inline]
    pub(crate) fn digit_from_end(&self, position: usize) -> Option<u8> {
        if position == 0 || position > self.digits.len() {
            None
        } else {
            Some(self.digits[self.digits.len() - position])
        }
    }

    pub(crate) fn digits_mut(&mut self) -> &mut [u8] {
        &mut self.digits
    }

    pub(crate) fn set_error(&mut self, error: NumberError) {
        self.error = Some(error);
    }
}

impl fmt::Display for HugeUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.digits))
    }
}

/// Allocates `count` numbers of `size` digits each.
///
/// If any allocation fails, every number created so far is released before
/// the error is returned.
pub fn new_numbers(count: usize, size: usize) -> Result<Vec<HugeUint>, NumberError> {
    let mut numbers = Vec::new();
    numbers
        .try_reserve_exact(count)
        .map_err(|_| NumberError::Memory)?;

    for i in 0..count {
        let number = HugeUint::new(size);
        if let Some(err) = number.error() {
            warn!("number {} of {} could not be allocated, releasing the set", i + 1, count);
            destroy_all(&mut numbers);
            return Err(err);
        }
        numbers.push(number);
    }
    Ok(numbers)
}

/// Destroys every number in the set.
pub fn destroy_all(numbers: &mut [HugeUint]) {
    for number in numbers.iter_mut() {
        number.destroy();
    }
}
