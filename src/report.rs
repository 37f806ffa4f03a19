use std::io::Write;

use rust_decimal::Decimal;

use crate::error::ReportError;
use crate::io::RunReport;

/// Renders `amount` as currency: dollar sign, thousands separators, two
/// decimal places. The sign sits between the dollar sign and the digits.
pub fn currency(amount: Decimal) -> String {
    let text = format!("{:.2}", amount.round_dp(2));
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("${sign}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }
    grouped
}

pub fn write_report<W: Write>(mut writer: W, report: &RunReport) -> Result<(), ReportError> {
    writeln!(writer, "PiXELL River Transaction Report")?;
    writeln!(writer, "===============================")?;
    writeln!(writer)?;

    for (customer_id, account) in report.ledger.accounts() {
        writeln!(writer)?;
        writeln!(
            writer,
            "Customer {} has a balance of {}.",
            customer_id,
            currency(account.balance)
        )?;
        writeln!(writer, "Transaction History:")?;
        for entry in &account.history {
            writeln!(writer, "\t{}: {}", entry.kind, currency(entry.amount))?;
        }
    }

    match report.ledger.average() {
        Some(average) => writeln!(
            writer,
            "\nAVERAGE TRANSACTION AMOUNT: {}",
            currency(average)
        )?,
        None => writeln!(writer, "\nNo valid transactions to calculate an average.")?,
    }

    if !report.rejected.is_empty() {
        writeln!(writer, "\nREJECTED RECORDS")?;
        writeln!(writer, "================")?;
        for rejection in &report.rejected {
            writeln!(
                writer,
                "REJECTED: {} ({})",
                rejection.fields.join(","),
                rejection.reason_text()
            )?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::io::process_csv;

    fn render(report: &RunReport) -> String {
        let mut output = Vec::new();
        write_report(&mut output, report).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn currency_pads_to_two_decimals() {
        assert_eq!(currency(dec!(50)), "$50.00");
        assert_eq!(currency(dec!(10.5)), "$10.50");
        assert_eq!(currency(dec!(0)), "$0.00");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(dec!(999)), "$999.00");
        assert_eq!(currency(dec!(1000)), "$1,000.00");
        assert_eq!(currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn currency_negative_sign_follows_dollar() {
        assert_eq!(currency(dec!(-40)), "$-40.00");
        assert_eq!(currency(dec!(-1234.5)), "$-1,234.50");
    }

    #[test]
    fn full_report_layout() {
        let csv_data = "\
customer_id,transaction_type,amount
C1,deposit,100.00
C1,withdraw,40.00
C2,deposit,50
C3,transfer,20
";
        let report = process_csv(csv_data.as_bytes()).unwrap();

        let expected = "\
PiXELL River Transaction Report
===============================


Customer C1 has a balance of $60.00.
Transaction History:
\tDeposit: $100.00
\tWithdraw: $40.00

Customer C2 has a balance of $50.00.
Transaction History:
\tDeposit: $50.00

AVERAGE TRANSACTION AMOUNT: $63.33

REJECTED RECORDS
================
REJECTED: C3,transfer,20 (Not a valid transaction type.)
";
        assert_eq!(render(&report), expected);
    }

    #[test]
    fn empty_input_reports_no_average() {
        let report = process_csv("customer_id,transaction_type,amount\n".as_bytes()).unwrap();
        let rendered = render(&report);

        assert!(rendered.contains("No valid transactions to calculate an average."));
        assert!(!rendered.contains("Customer"));
        assert!(!rendered.contains("REJECTED RECORDS"));
    }

    #[test]
    fn rejected_section_lists_every_reason() {
        let csv_data = "\
customer_id,transaction_type,amount
C1,transfer,abc
";
        let report = process_csv(csv_data.as_bytes()).unwrap();
        let rendered = render(&report);

        assert!(rendered.contains(
            "REJECTED: C1,transfer,abc \
             (Not a valid transaction type. Non-numeric transaction amount.)"
        ));
    }

    #[test]
    fn negative_balance_renders() {
        let csv_data = "\
customer_id,transaction_type,amount
C1,withdraw,40.00
";
        let report = process_csv(csv_data.as_bytes()).unwrap();
        let rendered = render(&report);

        assert!(rendered.contains("Customer C1 has a balance of $-40.00."));
    }
}
