use crate::models::record::Record;

/// Replace the record whose id matches `edited`, keeping order.
///
/// A miss returns the records unchanged.
pub fn apply_edit<R: Record>(records: &[R], edited: R) -> Vec<R> {
    records
        .iter()
        .map(|r| {
            if r.id() == edited.id() {
                edited.clone()
            } else {
                r.clone()
            }
        })
        .collect()
}
