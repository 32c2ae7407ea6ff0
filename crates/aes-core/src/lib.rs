//! AES-128 forward cipher with generated tables and an incremental key schedule.
//!
//! This crate follows FIPS-197 and provides:
//! - S-box and round constants derived from GF(2^8) arithmetic at first use.
//! - An incremental key schedule that holds one round key at a time.
//! - The four round transformations and single-block encryption.
//!
//! Only encryption of a single block is offered. The implementation aims for
//! clarity and testability rather than constant-time guarantees; it should
//! not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod gf;
mod key;
mod round;
mod tables;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{
    encrypt_block, encrypt_block_observed, encrypt_in_place, Stage, ROUNDS,
};
pub use crate::gf::{double, times_three};
pub use crate::key::{expand_key, Aes128Key, KeySchedule, RoundKeys, KEY_SIZE};
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
pub use crate::tables::{init, sbox, Tables};
