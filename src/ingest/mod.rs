//! CSV ingestion for the quarterback and team-defense payloads.
//!
//! Both payloads are comma separated with a header row, but neither is
//! well-formed CSV: there is no quoting, and a free-text cell (typically a
//! player name) sometimes carries a raw newline that splits one logical
//! record across two physical lines. The `csv` reader tokenizes each
//! physical line with quoting switched off, and [`records::LogicalRecords`]
//! stitches wrapped records back together; the dataset modules map the stitched columns onto
//! typed records.
//!
//! Ingestion never fails. Cells that do not parse become unknown values,
//! and rows that stay short of the header width are dropped.

pub mod numeric;
pub mod players;
pub mod records;
pub mod teams;


pub use numeric::{parse_count, parse_number, parse_signed};
pub use players::{parse_players, parse_players_with, PlayerColumns};
pub use records::LogicalRecords;
pub use teams::parse_team_stats;
