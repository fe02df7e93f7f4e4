//! Records fed into the report.
//!
//! Every record is built from caller-owned data (usually JSON exported by the
//! finance app) and is read-only from the report's point of view. Decoding is
//! deliberately forgiving: ids may be numbers or strings, amounts may be
//! numeric strings, and missing fields fall back to empty values.

use crate::error::Result;
use crate::labels::ExportLang;
use serde::{Deserialize, Serialize};

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received
    Income,
    /// Money spent
    Expense,
}

impl TransactionType {
    /// `income` maps to Income, empty to nothing, anything else to Expense.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "" => None,
            "income" => Some(TransactionType::Income),
            _ => Some(TransactionType::Expense),
        }
    }
}

/// A single ledger entry.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    /// Signed or unsigned; only the magnitude is used.
    #[serde(deserialize_with = "lenient::number")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient::string")]
    pub account_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category_id: String,
    #[serde(rename = "type", deserialize_with = "lenient::transaction_type")]
    pub kind: Option<TransactionType>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub receipt_id: Option<String>,
    #[serde(rename = "receipt_id", deserialize_with = "lenient::optional_string")]
    pub legacy_receipt_id: Option<String>,
}

impl Transaction {
    /// Absolute amount; non-finite amounts count as zero.
    pub fn magnitude(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount.abs()
        } else {
            0.0
        }
    }

    /// Whether the transaction is explicitly typed as income.
    pub fn is_income(&self) -> bool {
        self.kind == Some(TransactionType::Income)
    }

    /// Whether a receipt is attached under either key name.
    pub fn has_receipt(&self) -> bool {
        [&self.receipt_id, &self.legacy_receipt_id]
            .into_iter()
            .flatten()
            .any(|id| !id.is_empty())
    }
}

/// A money account (checking, credit card, ...).
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: String,
}

/// A spending or income category, optionally mapped to a tax-form line.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient::transaction_type")]
    pub kind: Option<TransactionType>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub tax_label: Option<String>,
}

/// A stored receipt file attached to a transaction.
///
/// Older app versions wrote the id, the transaction link and the file name
/// under different keys, so each of them is kept and resolved in priority order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub id: Option<String>,
    #[serde(rename = "receipt_id", deserialize_with = "lenient::optional_string")]
    pub legacy_id: Option<String>,
    #[serde(rename = "transaction_id", deserialize_with = "lenient::optional_string")]
    pub legacy_transaction_id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub transaction_id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub txn_id: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub filename: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub name: Option<String>,
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|value| value.as_deref())
        .find(|value| !value.is_empty())
}

impl Receipt {
    /// Receipt id from `id`, then `receipt_id`.
    pub fn receipt_ref(&self) -> Option<&str> {
        first_present(&[&self.id, &self.legacy_id])
    }

    /// Linked transaction id from `transaction_id`, then `transactionId`, then `txnId`.
    pub fn transaction_ref(&self) -> Option<&str> {
        first_present(&[&self.legacy_transaction_id, &self.transaction_id, &self.txn_id])
    }

    /// File name from `filename`, then `displayName`, then `name`.
    pub fn file_name(&self) -> Option<&str> {
        first_present(&[&self.filename, &self.display_name, &self.name])
    }
}

/// Unit a mileage record was logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Statute miles
    #[serde(rename = "miles")]
    Miles,
    /// Kilometers
    #[serde(rename = "km")]
    Kilometers,
}

/// One logged business trip.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MileageRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub purpose: String,
    #[serde(deserialize_with = "lenient::distance_unit")]
    pub unit: Option<DistanceUnit>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub miles: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub kilometers: Option<f64>,
    #[serde(alias = "odometerStart", deserialize_with = "lenient::optional_number")]
    pub odo_start: Option<f64>,
    #[serde(alias = "odometerEnd", deserialize_with = "lenient::optional_number")]
    pub odo_end: Option<f64>,
}

impl MileageRecord {
    /// Odometer distance when both readings are finite.
    pub fn odometer_distance(&self) -> Option<f64> {
        match (self.odo_start, self.odo_end) {
            (Some(start), Some(end)) if start.is_finite() && end.is_finite() => {
                Some((end - start).abs())
            },
            _ => None,
        }
    }
}

/// Reporting currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    /// US dollars
    #[default]
    #[serde(rename = "USD")]
    Usd,
    /// Canadian dollars
    #[serde(rename = "CAD")]
    Cad,
}

impl Currency {
    /// `CAD` (any case) is Canadian dollars; every other code is US dollars.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("CAD") {
            Currency::Cad
        } else {
            Currency::Usd
        }
    }

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
        }
    }
}

/// Tax jurisdiction of the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States
    #[default]
    Us,
    /// Canada
    Ca,
}

impl Region {
    /// `ca` (any case) is Canada; everything else is the United States.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("ca") {
            Region::Ca
        } else {
            Region::Us
        }
    }

    /// Currency used when none was chosen explicitly.
    pub fn default_currency(&self) -> Currency {
        match self {
            Region::Us => Currency::Usd,
            Region::Ca => Currency::Cad,
        }
    }
}

/// Business identity and presentation settings for one export.
///
/// Every field is optional. Blank identity fields are printed as an em-dash.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub export_lang: String,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub legal_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub business_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub operating_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub tax_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub naics: String,
    #[serde(deserialize_with = "lenient::string")]
    pub region: String,
}

impl ExportOptions {
    /// Report language, English unless `es` or `fr` was requested.
    pub fn lang(&self) -> ExportLang {
        ExportLang::from_code(&self.export_lang)
    }

    /// Business region, United States unless `ca`.
    pub fn region(&self) -> Region {
        Region::from_code(&self.region)
    }

    /// The explicit currency, or the region's currency when none was given.
    pub fn currency(&self) -> Currency {
        match self.currency.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => Currency::from_code(code),
            _ => self.region().default_currency(),
        }
    }
}

/// Everything one export call needs: options plus the five record lists.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportRequest {
    #[serde(flatten)]
    pub options: ExportOptions,
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub receipts: Vec<Receipt>,
    pub mileage: Vec<MileageRecord>,
}

impl ExportRequest {
    /// Decode a request from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a request from a JSON file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Forgiving field decoders.
mod lenient {
    use super::{DistanceUnit, TransactionType};
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    impl Scalar {
        fn into_text(self) -> Option<String> {
            match self {
                Scalar::Text(text) => Some(text),
                Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                    Some(format!("{}", n as i64))
                },
                Scalar::Number(n) => Some(n.to_string()),
                Scalar::Other(_) => None,
            }
        }

        fn into_number(self) -> Option<f64> {
            let value: Option<f64> = match self {
                Scalar::Number(n) => Some(n),
                Scalar::Text(text) if text.trim().is_empty() => Some(0.0),
                Scalar::Text(text) => text.trim().parse().ok(),
                Scalar::Other(_) => None,
            };
            value.filter(|n| n.is_finite())
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(Scalar::deserialize(d)?.into_text().unwrap_or_default())
    }

    pub fn optional_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(Scalar::deserialize(d)?.into_text())
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Scalar::deserialize(d)?.into_number().unwrap_or(0.0))
    }

    pub fn optional_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(Scalar::deserialize(d)?.into_number())
    }

    pub fn transaction_type<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<TransactionType>, D::Error> {
        Ok(Scalar::deserialize(d)?
            .into_text()
            .and_then(|code| TransactionType::from_code(&code)))
    }

    pub fn distance_unit<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DistanceUnit>, D::Error> {
        Ok(match Scalar::deserialize(d)?.into_text().as_deref() {
            Some("miles") => Some(DistanceUnit::Miles),
            Some("km") => Some(DistanceUnit::Kilometers),
            _ => None,
        })
    }
}
