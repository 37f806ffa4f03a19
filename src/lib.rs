pub mod error;
pub mod io;
pub mod ledger;
pub mod record;
pub mod report;
pub mod validate;
