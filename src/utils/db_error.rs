//! Classification of PostgreSQL errors.

/// Name of the unique constraint guarding `links.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "links_short_code_key";

/// Returns true if `e` is a unique violation on the short code column.
///
/// Unique violations on other constraints (e.g. a primary key clash) are not
/// collisions and must not be retried with a new code.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}
