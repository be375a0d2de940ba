use crate::models::{Interest, Tag};

/// Decide whether a single tag satisfies a single interest
///
/// True iff the tag has exactly the interest's type and value and its
/// strength meets or exceeds the interest's threshold. Ties satisfy.
/// A NaN on either side never satisfies.
#[inline]
pub fn satisfies(interest: &Interest, tag: &Tag) -> bool {
    tag.kind == interest.kind
        && tag.value == interest.value
        && tag.threshold >= interest.threshold
}
