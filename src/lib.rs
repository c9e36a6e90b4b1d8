//! Arbitrary-length unsigned integers stored as digit text.
//!
//! - [`HugeUint`]: a growable digit buffer with an error flag.
//! - [`loader::load`]: reads a delimited sequence of numbers from a stream.
//! - [`arithmetic`]: binary add/subtract, decimal add and hexadecimal add.
//!
//! ```
//! use huge_uint::{arithmetic, HugeUint};
//!
//! let sum = arithmetic::add_hex(&HugeUint::from_digits("FF"), &HugeUint::from_digits("01"));
//! assert_eq!(sum.to_string(), "100");
//! ```

pub mod arithmetic;
pub mod block_iterator;
pub mod error;
pub mod huge_uint;
pub mod loader;
pub mod radix;

pub use error::{LoadError, NumberError};
pub use huge_uint::{destroy_all, new_numbers, HugeUint};
pub use loader::LoadConfig;
pub use radix::Radix;
