//! Block representation helpers.
//!
//! The state is a 4×4 byte matrix stored column-major: flat index `k`
//! holds row `k % 4` of column `k / 4`.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns column `col` (0..4) of the state.
#[inline]
pub(crate) fn column(state: &Block, col: usize) -> [u8; 4] {
    let idx = col * 4;
    [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]]
}

/// Overwrites column `col` (0..4) of the state.
#[inline]
pub(crate) fn set_column(state: &mut Block, col: usize, value: [u8; 4]) {
    let idx = col * 4;
    state[idx..idx + 4].copy_from_slice(&value);
}
