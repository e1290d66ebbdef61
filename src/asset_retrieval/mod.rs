/// Asset retrieval domain - canonical record, fetch lifecycle and export rules
///
/// Nothing in this module performs I/O. Network access, object URL
/// bookkeeping and delivery sit behind the ports in `crate::ports`.
pub mod domain;
pub mod policies;
pub mod services;
