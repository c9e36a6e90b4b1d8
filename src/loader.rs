use std::io::Read;

use log::{debug, trace, warn};

use crate::block_iterator::BlockIterator;
use crate::error::{LoadError, NumberError};
use crate::huge_uint::HugeUint;
use crate::radix::Radix;

/// Delimiters and alphabet used by [`load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// Ends the current number and moves on to the next one.
    pub separator: u8,
    /// Ends the whole sequence, like end-of-stream does.
    pub end: u8,
    pub radix: Radix,
}

impl Default for LoadConfig {
    fn default() -> Self {
        LoadConfig {
            separator: b' ',
            end: 0,
            radix: Radix::Hexadecimal,
        }
    }
}

impl LoadConfig {
    fn accepts(&self, byte: u8) -> bool {
        byte == self.separator
            || byte == self.end
            || self.radix.is_digit(byte)
            || is_line_noise(byte)
    }
}

// Space is left out on purpose, it is the usual separator.
fn is_line_noise(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n' | 0x0B | 0x0C | b'\t')
}

/// Loads up to `numbers.len()` numbers from `reader`.
///
/// Every slot that is reached is overwritten. Loading stops at the end
/// marker, at end-of-stream, or once every slot is filled; the number being
/// read when the input ends counts as loaded even if it has no digits. Returns
/// how many slots were loaded.
///
/// ```
/// use huge_uint::loader::{load, LoadConfig};
/// use huge_uint::HugeUint;
///
/// let mut numbers = vec![HugeUint::default(), HugeUint::default()];
/// let count = load(&mut numbers, &LoadConfig::default(), "1F 2A\n".as_bytes()).unwrap();
/// assert_eq!(count, 2);
/// assert_eq!(numbers[1].digits(), b"2A");
/// ```
pub fn load<R: Read>(
    numbers: &mut [HugeUint],
    config: &LoadConfig,
    reader: R,
) -> Result<usize, LoadError> {
    let mut bytes = BlockIterator::new(reader);

    for (i, number) in numbers.iter_mut().enumerate() {
        number.destroy();
        loop {
            let byte = match bytes.next() {
                None => {
                    debug!("end of stream reached, loaded {} numbers", i + 1);
                    return Ok(i + 1);
                }
                Some(Err(e)) => {
                    warn!("read failed while loading number {}: {}", i + 1, e);
                    return Err(LoadError::Io(e));
                }
                Some(Ok(byte)) => byte,
            };

            if !config.accepts(byte) {
                warn!("rejected byte {:#04x} in number {}", byte, i + 1);
                return Err(LoadError::InvalidCharacter(byte));
            }

            if byte == config.end {
                debug!("end marker reached, loaded {} numbers", i + 1);
                return Ok(i + 1);
            }

            if byte == config.separator {
                if !number.is_empty() {
                    break;
                }
                continue;
            }

            if is_line_noise(byte) {
                continue;
            }

            let size = number.len();
            number.resize(size + 1);
            if number.error() == Some(NumberError::Memory) {
                return Err(LoadError::Memory);
            }
            number.digits_mut()[size] = byte;
            trace!("number {}: digit {:?}", i + 1, char::from(byte));
        }
    }

    debug!("all {} slots loaded", numbers.len());
    Ok(numbers.len())
}
