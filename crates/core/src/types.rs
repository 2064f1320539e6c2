/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Id carried by an entity that has not been inserted yet.
pub const UNASSIGNED_ID: DbId = 0;

/// Calendar date without time zone (`YYYY-MM-DD` on the wire).
pub type Date = chrono::NaiveDate;

/// Monetary amounts are stored as `NUMERIC` and kept exact in memory.
pub type Price = rust_decimal::Decimal;
