use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderingError {
    #[error("Item {0} not found in ordering")]
    NotFound(String),
}

/// Append a newly created item to the end of the ordering.
///
/// The new item's rank is implicitly `current.len() + 1`. Never fails.
#[must_use]
pub fn compute_append(current: &[String], new_id: &str) -> Vec<String> {
    let mut next = current.to_vec();
    next.push(new_id.to_string());
    next
}

/// Move an item to `desired_index`, preserving the relative order of all
/// other items.
///
/// Out-of-range indices are clamped into `[0, len - 1]` rather than rejected;
/// the admin UI only produces in-range values, and clamping keeps a stale
/// client from failing a whole edit over the rank field. Negative input is
/// unrepresentable by type. Moving an item onto its current index returns the
/// sequence unchanged.
///
/// # Errors
///
/// Returns [`OrderingError::NotFound`] if `item_id` is not in `current`.
pub fn compute_move(
    current: &[String],
    item_id: &str,
    desired_index: usize,
) -> Result<Vec<String>, OrderingError> {
    let current_index = current
        .iter()
        .position(|id| id == item_id)
        .ok_or_else(|| OrderingError::NotFound(item_id.to_string()))?;

    let last = current.len() - 1;
    let target = desired_index.min(last);

    let mut next = current.to_vec();
    let moved = next.remove(current_index);
    next.insert(target, moved);
    Ok(next)
}

/// Remove an item from the ordering.
///
/// Every later item's rank shifts down by one automatically because rank is
/// derived from position; no explicit renumbering step exists to get wrong.
///
/// # Errors
///
/// Returns [`OrderingError::NotFound`] if `item_id` is not in `current`.
pub fn compute_remove(current: &[String], item_id: &str) -> Result<Vec<String>, OrderingError> {
    let index = current
        .iter()
        .position(|id| id == item_id)
        .ok_or_else(|| OrderingError::NotFound(item_id.to_string()))?;

    let mut next = current.to_vec();
    next.remove(index);
    Ok(next)
}

/// Pair each id with its 1-based rank.
pub fn ranks(order: &[String]) -> impl Iterator<Item = (&str, u32)> {
    order
        .iter()
        .enumerate()
        .map(|(index, id)| (id.as_str(), u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1)))
}

#[cfg(test)]
#[path = "compute_tests.rs"]
mod tests;
