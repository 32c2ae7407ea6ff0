//! AES round transformations.

use crate::block::{column, set_column, xor_in_place, Block};
use crate::gf::{double, times_three};
use crate::key::KeySchedule;
use crate::tables::init;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    let sbox = &init().sbox;
    for byte in state.iter_mut() {
        *byte = sbox[*byte as usize];
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    for row in 1..4 {
        let mut entries = [
            state[row],
            state[row + 4],
            state[row + 8],
            state[row + 12],
        ];
        entries.rotate_left(row);
        for (col, entry) in entries.into_iter().enumerate() {
            state[row + 4 * col] = entry;
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = double(a0) ^ times_three(a1) ^ a2 ^ a3;
    col[1] = a0 ^ double(a1) ^ times_three(a2) ^ a3;
    col[2] = a0 ^ a1 ^ double(a2) ^ times_three(a3);
    col[3] = times_three(a0) ^ a1 ^ a2 ^ double(a3);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let mut entries = column(state, col);
        mix_single_column(&mut entries);
        set_column(state, col, entries);
    }
}

/// XORs the current round key into the state, then advances the schedule.
///
/// Must run exactly once per round, in round order.
#[inline]
pub fn add_round_key(state: &mut Block, schedule: &mut KeySchedule) {
    xor_in_place(state, schedule.current());
    schedule.advance();
}
