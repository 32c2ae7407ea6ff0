//! Validation and decoding of hex-encoded command-line parameters.

use std::fmt;

use aes_core::BLOCK_SIZE;
use thiserror::Error;

/// Number of hex characters encoding one 128-bit parameter.
pub const HEX_LEN: usize = 2 * BLOCK_SIZE;

/// Which parameter a value was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    /// Plaintext block.
    Input,
    /// Cipher key.
    Key,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Input => f.write_str("input"),
            Param::Key => f.write_str("key"),
        }
    }
}

/// Rejected command-line parameter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Wrong number of characters.
    #[error("Invalid format for argument '{value}'. Expected 128-bit {param}.")]
    Length {
        /// Parameter the value was given for.
        param: Param,
        /// Value as supplied.
        value: String,
    },
    /// Contains a character outside `[0-9a-fA-F]`.
    #[error("Argument '{value}' is not a hexadecimal string.")]
    NotHex {
        /// Value as supplied.
        value: String,
    },
}

/// Checks that `value` has exactly [`HEX_LEN`] characters.
pub fn check_length(value: &str, param: Param) -> Result<(), InputError> {
    if value.len() != HEX_LEN {
        return Err(InputError::Length {
            param,
            value: value.to_owned(),
        });
    }
    Ok(())
}

/// Decodes a length-checked hex string into a block.
pub fn decode_block(value: &str) -> Result<[u8; BLOCK_SIZE], InputError> {
    let mut out = [0u8; BLOCK_SIZE];
    hex::decode_to_slice(value, &mut out).map_err(|_| InputError::NotHex {
        value: value.to_owned(),
    })?;
    Ok(out)
}
