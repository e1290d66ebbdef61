mod field_aliases;

pub use field_aliases::{FieldAliases, LogicalField};
