//! Display ordering helpers.
//!
//! Pages show incomplete work before finished work without losing each
//! item's stable id, since mutation routes address items by id rather than
//! by display position.

/// Stable two-bucket partition: incomplete items first, then complete ones,
/// each bucket preserving the input's relative order.
///
/// This is not a sort; equal-bucket items never swap. The returned references
/// still carry their ids, so a caller can render display order while linking
/// each row to its stable identifier.
pub fn incomplete_first<T, F>(items: &[T], is_complete: F) -> Vec<&T>
where
    F: Fn(&T) -> bool,
{
    let (complete, incomplete): (Vec<&T>, Vec<&T>) =
        items.iter().partition(|item| is_complete(item));

    let mut ordered = incomplete;
    ordered.extend(complete);
    ordered
}
