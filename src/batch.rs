//! Batch rendering of transaction requests from CSV.
//!
//! Rows are streamed one at a time. Each valid row becomes a
//! [`TransactionRequest`]; invalid rows are logged at warn level and skipped,
//! so one bad line never stops the batch.

use crate::enums::TransactionType;
use crate::error::{GatewayError, Result};
use crate::money::Amount;
use crate::request_builder::Request;
use crate::requests::TransactionRequest;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;
use std::io::{Read, Write};
use std::str::FromStr;

/// Raw row as read from CSV.
///
/// Only `type` and `amount` are required; every other column may be empty or
/// missing altogether.
#[derive(Debug, Deserialize)]
pub struct TransactionRecord {
    /// `sale` or `credit`
    #[serde(rename = "type")]
    pub tx_type: String,

    pub amount: Option<String>,

    #[serde(default)]
    pub order_id: Option<String>,

    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub payment_method_token: Option<String>,

    #[serde(default)]
    pub merchant_account_id: Option<String>,

    /// `true` or `false`
    #[serde(default)]
    pub submit_for_settlement: Option<String>,
}

impl TransactionRecord {
    /// Builds the request for this row, reporting `row` in any error.
    pub fn parse(&self, row: usize) -> Result<TransactionRequest> {
        let invalid = |message: String| GatewayError::InvalidRecord { row, message };

        let transaction_type = match TransactionType::lookup(&self.tx_type) {
            t @ (TransactionType::Sale | TransactionType::Credit) => t,
            _ => return Err(invalid(format!("unknown transaction type {:?}", self.tx_type.trim()))),
        };

        let amount = self
            .amount
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| invalid("missing amount".to_string()))?;
        let amount = Amount::from_str(amount).map_err(|e| invalid(e.to_string()))?;

        let mut request = TransactionRequest::new()
            .transaction_type(transaction_type)
            .amount(amount);

        if let Some(order_id) = non_empty(&self.order_id) {
            request = request.order_id(order_id);
        }
        if let Some(customer_id) = non_empty(&self.customer_id) {
            request = request.customer_id(customer_id);
        }
        if let Some(token) = non_empty(&self.payment_method_token) {
            request = request.payment_method_token(token);
        }
        if let Some(merchant_account_id) = non_empty(&self.merchant_account_id) {
            request = request.merchant_account_id(merchant_account_id);
        }
        if let Some(flag) = non_empty(&self.submit_for_settlement) {
            let submit = parse_flag(flag)
                .ok_or_else(|| invalid(format!("invalid submit_for_settlement {:?}", flag)))?;
            request = request.options(|o| o.submit_for_settlement(submit));
        }

        Ok(request)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Serialized form written by [`RequestBatch::write_output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xml,
    Query,
}

impl FromStr for OutputFormat {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "query" => Ok(OutputFormat::Query),
            _ => Err(GatewayError::UnknownFormat(s.to_string())),
        }
    }
}

/// Transaction requests collected from CSV input, in input order.
#[derive(Debug, Default)]
pub struct RequestBatch {
    requests: Vec<TransactionRequest>,
}

impl RequestBatch {
    pub fn new() -> Self {
        RequestBatch {
            requests: Vec::new(),
        }
    }

    /// Reads rows from a CSV reader in streaming fashion.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse(row_num) {
                    Ok(request) => {
                        debug!("Row {}: accepted {} request", row_num, record.tx_type);
                        self.requests.push(request);
                    }
                    Err(e) => warn!("{}", e),
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    pub fn requests(&self) -> &[TransactionRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Writes one serialized request per line.
    pub fn write_output<W: Write>(&self, mut writer: W, format: OutputFormat) -> Result<()> {
        for request in &self.requests {
            let line = match format {
                OutputFormat::Xml => request.to_xml(),
                OutputFormat::Query => request.to_query_string(),
            };
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn process_csv_str(csv: &str) -> RequestBatch {
        let mut batch = RequestBatch::new();
        batch.process_csv(Cursor::new(csv)).unwrap();
        batch
    }

    fn render(batch: &RequestBatch, format: OutputFormat) -> String {
        let mut output = Vec::new();
        batch.write_output(&mut output, format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_simple_sale() {
        let batch = process_csv_str(
            "type,amount,order_id,customer_id,payment_method_token,merchant_account_id,submit_for_settlement\n\
             sale,10,order-1,,tok_1,,true\n",
        );

        assert_eq!(batch.len(), 1);
        assert_eq!(
            render(&batch, OutputFormat::Xml),
            "<transaction><amount>10.00</amount><order-id>order-1</order-id>\
             <payment-method-token>tok_1</payment-method-token>\
             <options><submit-for-settlement>true</submit-for-settlement></options>\
             <type>sale</type></transaction>\n"
        );
    }

    #[test]
    fn test_query_output() {
        let batch = process_csv_str("type,amount\ncredit,5.5\n");
        assert_eq!(
            render(&batch, OutputFormat::Query),
            "transaction%5Bamount%5D=5.50&transaction%5Btype%5D=credit\n"
        );
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let batch = process_csv_str(
            "type,amount\n\
             refund,10\n\
             sale,\n\
             sale,1.234\n\
             sale,abc\n\
             credit,3\n",
        );

        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch.requests()[0],
            TransactionRequest::new()
                .transaction_type(TransactionType::Credit)
                .amount(Amount::from_cents(300))
        );
    }

    #[test]
    fn test_whitespace_and_case_handling() {
        let batch = process_csv_str("type, amount, order_id\n  SALE ,  7.25 , abc \n");
        assert_eq!(
            render(&batch, OutputFormat::Xml),
            "<transaction><amount>7.25</amount><order-id>abc</order-id><type>sale</type></transaction>\n"
        );
    }

    #[test]
    fn test_invalid_settlement_flag_skips_row() {
        let batch = process_csv_str("type,amount,submit_for_settlement\nsale,1,maybe\n");
        assert!(batch.is_empty());
    }

    #[test]
    fn test_record_parse_reports_row() {
        let record = TransactionRecord {
            tx_type: "void".to_string(),
            amount: Some("1".to_string()),
            order_id: None,
            customer_id: None,
            payment_method_token: None,
            merchant_account_id: None,
            submit_for_settlement: None,
        };

        match record.parse(7) {
            Err(GatewayError::InvalidRecord { row, .. }) => assert_eq!(row, 7),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("xml".parse::<OutputFormat>().unwrap(), OutputFormat::Xml);
        assert_eq!(" QUERY ".parse::<OutputFormat>().unwrap(), OutputFormat::Query);
        assert!(matches!(
            "json".parse::<OutputFormat>(),
            Err(GatewayError::UnknownFormat(_))
        ));
    }
}
