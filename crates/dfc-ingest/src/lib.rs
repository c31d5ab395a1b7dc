pub mod error;
pub mod roster;

pub use error::{IngestError, Result};
pub use roster::{
    FIELD_COUNT, IngestOptions, RosterTable, read_roster_table, read_roster_table_with_options,
};
