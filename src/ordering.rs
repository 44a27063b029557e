//! Ordering of transfers by id.
//!
//! Ids that parse as unsigned integers compare numerically and sort before
//! every other id. The remaining ids compare lexicographically by bytes.
//! For all-numeric ids this is the same ascending numeric order the
//! dashboard always produced; mixed or hex ids still get a total order.

use crate::types::Transfer;
use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum IdKey<'a> {
    Numeric(u128),
    Text(&'a str),
}

impl<'a> IdKey<'a> {
    fn of(id: &'a str) -> Self {
        // `u128::from_str` accepts a leading '+', which is not a plain numeric id
        if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = id.parse::<u128>() {
                return IdKey::Numeric(n);
            }
        }
        IdKey::Text(id)
    }
}

/// Compare two transfer ids.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    IdKey::of(a).cmp(&IdKey::of(b))
}

/// Sort transfers ascending by id. The sort is stable, so equal ids keep
/// the order the server returned them in.
pub fn sort_transfers(transfers: &mut [Transfer]) {
    transfers.sort_by(|a, b| compare_ids(&a.id, &b.id));
}

pub fn is_sorted(transfers: &[Transfer]) -> bool {
    transfers
        .windows(2)
        .all(|pair| compare_ids(&pair[0].id, &pair[1].id) != Ordering::Greater)
}
