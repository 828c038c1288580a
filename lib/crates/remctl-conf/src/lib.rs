//! Parsing of remctl configuration text.
//!
//! Pure functions only: callers supply file contents and an existence check,
//! this crate turns them into logical lines, command records, and the
//! service-keyed [`CommandTable`].

pub mod logical;
pub mod record;
pub mod table;

pub use logical::{ConfigLine, is_comment, unfold};
pub use record::{
    CommandEntry, HELP_SUBCOMMAND, RecordError, WILDCARD_SUBCOMMAND, normalize_whitespace,
    parse_record,
};
pub use table::CommandTable;
