use crate::domain::{Table, TablesResponse};
use crate::error::IssError;

/// Takes the named table out of a multi-table response.
///
/// A missing key usually means the server had no data for the security or
/// date; callers may treat [`IssError::MissingTable`] as "no rows".
pub fn extract_table(mut response: TablesResponse, table: &str) -> Result<Table, IssError> {
    response
        .remove(table)
        .ok_or_else(|| IssError::missing_table(table))
}
