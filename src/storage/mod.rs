mod csv_store;

pub use csv_store::*;

/// Fixed header of the ledger file, in column order.
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];
