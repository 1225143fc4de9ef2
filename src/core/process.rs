// end-to-end run: load -> sort -> audit -> write
use std::path::Path;

use crate::core::database::{DatabaseError, WordDatabase};
use crate::core::types::TagSet;

/// What a completed run observed: the tags gathered while sorting, and any
/// of them gone on the re-scan of the normalized copy.
#[derive(Debug)]
pub struct ProcessReport {
    pub collected_tags: TagSet,
    pub missing_tags: TagSet,
}

/// Normalize the database at `input` and write the result to `output`.
///
/// Steps run in strict sequence with no retries; the first failure aborts
/// the run, and a failed load leaves the output path untouched.
pub fn process_database(input: &Path, output: &Path) -> Result<ProcessReport, DatabaseError> {
    let database = WordDatabase::load(input)?;
    let (normalized, collected_tags) = database.normalized();
    let missing_tags = normalized.missing_tags(&collected_tags);
    normalized.save(output)?;
    Ok(ProcessReport {
        collected_tags,
        missing_tags,
    })
}
