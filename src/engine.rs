//! Single-pass grouping run: read, parse, group, print.
//!
//! Input is consumed line by line until end of stream. Malformed lines are
//! logged and skipped; they never stop the run. Once input is exhausted the
//! store is handed to the printer and released.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::config::Config;
use crate::error::FgroupsError;
use crate::logging::{self, Stage};
use crate::model::Rejection;
use crate::parser::LineParser;
use crate::printer::{self, PrintSummary};
use crate::store::GroupingStore;

/// What happened during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub lines_read: usize,
    pub records_accepted: usize,
    pub rejections: Vec<Rejection>,
    pub print: PrintSummary,
}

/// Reads every line from `input`, groups the valid records and writes the
/// multi-member groups to `output`.
///
/// Lines that are not valid UTF-8 are rejected like any other malformed line.
/// Only I/O failures on `input` or `output` are returned as errors.
pub fn run<R, W>(mut input: R, output: &mut W, config: &Config) -> Result<RunSummary, FgroupsError>
where
    R: BufRead,
    W: Write,
{
    let parser = LineParser::new(config.max_fingerprint_len);
    let mut store = GroupingStore::new();
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines_read += 1;

        match parser.parse_bytes(&buf) {
            Ok(record) => {
                store.insert_record(record);
                summary.records_accepted += 1;
            }
            Err(error) => {
                let rejection = Rejection {
                    line_number: summary.lines_read,
                    error,
                };
                logging::log_rejection(&rejection);
                summary.rejections.push(rejection);
            }
        }
    }

    logging::debug(
        Stage::Store,
        None,
        &format!("{} distinct fingerprints collected", store.fingerprint_count()),
    );

    summary.print = printer::write_groups(store, output)?;
    output.flush()?;

    logging::log_run_summary(&summary);
    Ok(summary)
}
