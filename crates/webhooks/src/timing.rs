//! Constant-time operations for security.

use subtle::{Choice, ConstantTimeEq};

/// Compare two byte slices in constant time.
///
/// Only the lengths are compared up front; they are not secret. For equal
/// lengths every byte pair is folded into the result, so the running time does
/// not depend on where (or whether) the slices first differ.
///
/// # Arguments
/// * `a` - First byte slice
/// * `b` - Second byte slice
///
/// # Returns
/// true if slices are equal, false otherwise
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    fold_pairs(a.iter().zip(b)).into()
}

/// AND together the byte-wise equality of every pair, without short-circuiting.
fn fold_pairs<'a>(pairs: impl Iterator<Item = (&'a u8, &'a u8)>) -> Choice {
    pairs.fold(Choice::from(1), |acc, (x, y)| acc & x.ct_eq(y))
}
