use std::io::Read;

use tracing::{info, warn};

use crate::error::ReportError;
use crate::ledger::Ledger;
use crate::record::RawRecord;
use crate::validate::{Rejection, validate};

/// Everything one run produces, handed read-only to the report writer.
#[derive(Debug, Default)]
pub struct RunReport {
    pub ledger: Ledger,
    pub rejected: Vec<Rejection>,
}

pub fn process_csv<R: Read>(reader: R) -> Result<RunReport, ReportError> {
    let mut report = RunReport::default();

    // flexible: rows with the wrong number of fields must reach the
    // validator as data instead of failing the whole run.
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    for result in csv_reader.deserialize::<RawRecord>() {
        let record = result?;
        match validate(record.fields()) {
            Ok(tx) => report.ledger.apply(tx),
            Err(rejection) => {
                warn!(
                    row = %rejection.fields.join(","),
                    reason = %rejection.reason_text(),
                    "rejected record"
                );
                report.rejected.push(rejection);
            }
        }
    }

    info!(
        accepted = report.ledger.count(),
        rejected = report.rejected.len(),
        "input processed"
    );
    Ok(report)
}
