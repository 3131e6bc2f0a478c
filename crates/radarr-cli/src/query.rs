//! Client-side name filtering for list commands.
//!
//! Every resource command fetches the full server-side list, then
//! applies the optional exact-name filter here. Pure function of
//! (records, filter) -- no process-wide state.

/// Apply the optional exact-name filter to a fetched record list.
///
/// Without a filter, every record is kept in server order. With a
/// filter, the result is REPLACED by a single-element list on each
/// match, so when several records share the filtered name the last one
/// in server order wins. Matching is exact and case-sensitive.
pub fn select_by_name<T>(
    records: Vec<T>,
    name: Option<&str>,
    name_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    let mut selected = Vec::new();
    for record in records {
        match name {
            Some(wanted) => {
                if name_of(&record) == wanted {
                    selected = vec![record];
                }
            }
            None => selected.push(record),
        }
    }
    selected
}

// ── Tests ────────────────────────────────────────────────────────────
