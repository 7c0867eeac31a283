use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::{CostingError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One stock lot as it appears in the inventory file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRecordDto {
    #[serde(rename = "nazev")]
    pub name: String,
    #[serde(rename = "cena_za_kus")]
    pub unit_price: f64,
    #[serde(rename = "datum_naskladneni")]
    pub acquired_on: String,
    #[serde(rename = "pocet_kusu")]
    pub quantity: u32,
}

/// A quantity of one item acquired on one day at one price.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    name: String,
    unit_price: f64,
    acquired_on: NaiveDate,
    quantity: u32,
}

impl BatchRecord {
    pub fn new(name: impl Into<String>, unit_price: f64, acquired_on: NaiveDate, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            acquired_on,
            quantity,
        }
    }

    /// Builds a record from date text in `YYYY-MM-DD` form.
    pub fn parse(name: impl Into<String>, unit_price: f64, acquired_on: &str, quantity: u32) -> Result<Self> {
        let date = NaiveDate::parse_from_str(acquired_on, DATE_FORMAT).map_err(|source| {
            CostingError::DateParseError {
                value: acquired_on.to_string(),
                source,
            }
        })?;
        Ok(Self::new(name, unit_price, date, quantity))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn acquired_on(&self) -> NaiveDate {
        self.acquired_on
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl TryFrom<BatchRecordDto> for BatchRecord {
    type Error = CostingError;

    fn try_from(dto: BatchRecordDto) -> Result<Self> {
        Self::parse(dto.name, dto.unit_price, &dto.acquired_on, dto.quantity)
    }
}

/// An item the user put into the cart. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub name: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Units taken from a single batch during allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchTake {
    pub acquired_on: NaiveDate,
    pub unit_price: f64,
    pub units: u32,
}

impl BatchTake {
    pub fn cost(&self) -> f64 {
        f64::from(self.units) * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Allocation {
    pub takes: Vec<BatchTake>,
    pub total_cost: f64,
    /// Units the batches could not cover. Zero whenever the caller checked availability first.
    pub unfilled: u32,
}

impl Allocation {
    pub fn units_taken(&self) -> u32 {
        self.takes.iter().map(|t| t.units).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let batch = BatchRecord::parse("Widget", 10.0, "2024-01-01", 5).unwrap();
        assert_eq!(batch.acquired_on(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(batch.name(), "Widget");
        assert_eq!(batch.quantity(), 5);
    }

    #[test]
    fn test_parse_malformed_date() {
        for bad in ["01.02.2024", "2024-02-30", "", "2024/01/01"] {
            let result = BatchRecord::parse("Widget", 10.0, bad, 5);
            assert!(
                matches!(result, Err(CostingError::DateParseError { ref value, .. }) if value == bad),
                "expected date error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_dto_uses_inventory_field_names() {
        let json = r#"{"nazev": "Šroub", "cena_za_kus": 2.5, "datum_naskladneni": "2023-11-20", "pocet_kusu": 100}"#;
        let dto: BatchRecordDto = serde_json::from_str(json).unwrap();
        let batch = BatchRecord::try_from(dto).unwrap();

        assert_eq!(batch.name(), "Šroub");
        assert_eq!(batch.unit_price(), 2.5);
        assert_eq!(batch.quantity(), 100);
    }

    #[test]
    fn test_dto_rejects_negative_quantity() {
        let json = r#"{"nazev": "X", "cena_za_kus": 1, "datum_naskladneni": "2023-11-20", "pocet_kusu": -1}"#;
        assert!(serde_json::from_str::<BatchRecordDto>(json).is_err());
    }
}
