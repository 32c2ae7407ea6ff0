//! AES-128 block encryption driver.

use crate::block::Block;
use crate::key::{Aes128Key, KeySchedule};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::tables::init;

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

/// Point in the cipher at which the state is reported to an observer.
///
/// Each stage is reported right after its key addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// After the initial key addition with round key 0.
    Whitened,
    /// After full round `n` (1..=9).
    Round(usize),
    /// After the final round, which skips MixColumns.
    Final,
}

/// Encrypts a single 16-byte block.
pub fn encrypt_block(block: &Block, key: &Aes128Key) -> Block {
    encrypt_block_observed(block, key, |_, _| {})
}

/// Encrypts a block in place.
pub fn encrypt_in_place(block: &mut Block, key: &Aes128Key) {
    *block = encrypt_block(block, key);
}

/// Encrypts a single block, reporting the state after every round.
pub fn encrypt_block_observed<F>(block: &Block, key: &Aes128Key, mut observe: F) -> Block
where
    F: FnMut(Stage, &Block),
{
    init();
    let mut schedule = KeySchedule::new(key);
    let mut state = *block;

    add_round_key(&mut state, &mut schedule);
    observe(Stage::Whitened, &state);

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &mut schedule);
        observe(Stage::Round(round), &state);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &mut schedule);
    observe(Stage::Final, &state);

    state
}
