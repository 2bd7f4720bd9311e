//! Group printer.
//!
//! Writes every group of two or more names, one name per line, with a single
//! blank line between consecutive blocks. Singleton groups produce nothing,
//! and a store with no qualifying group produces zero bytes.

use std::io::{self, Write};

use serde::Serialize;

use crate::logging::{self, Stage};
use crate::store::GroupingStore;

/// Counts gathered while printing, reported in the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrintSummary {
    pub groups_printed: usize,
    pub names_printed: usize,
    pub singletons_suppressed: usize,
}

/// Consumes the store and writes its multi-member groups to `out`.
pub fn write_groups<W: Write>(store: GroupingStore, out: &mut W) -> io::Result<PrintSummary> {
    let mut summary = PrintSummary::default();

    for (_fingerprint, names) in store.into_groups() {
        if names.len() < 2 {
            summary.singletons_suppressed += 1;
            continue;
        }

        if summary.groups_printed > 0 {
            writeln!(out)?;
        }
        for name in &names {
            writeln!(out, "{}", name)?;
        }

        summary.groups_printed += 1;
        summary.names_printed += names.len();
    }

    logging::debug(
        Stage::Print,
        None,
        &format!(
            "{} groups printed, {} singletons suppressed",
            summary.groups_printed, summary.singletons_suppressed
        ),
    );
    Ok(summary)
}
