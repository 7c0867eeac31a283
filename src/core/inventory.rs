use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use crate::core::{BatchRecord, BatchRecordDto};
use crate::utils::error::{CostingError, Result};

/// Stock batches loaded once at startup. Never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    batches: Vec<BatchRecord>,
}

impl Inventory {
    pub fn new(batches: Vec<BatchRecord>) -> Self {
        Self { batches }
    }

    /// Parses a JSON array of batch objects. A malformed date fails the whole load.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let dtos: Vec<BatchRecordDto> = serde_json::from_str(content)?;
        let batches = dtos
            .into_iter()
            .map(BatchRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(batches))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CostingError::InventoryNotFound {
                path: path.display().to_string(),
            },
            _ => CostingError::IoError(e),
        })?;

        let inventory = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded {} batches ({} items) from {}",
            inventory.len(),
            inventory.distinct_names().len(),
            path.display()
        );
        Ok(inventory)
    }

    /// Loads the inventory, or tells the user the file is missing and carries on empty.
    ///
    /// Any other failure (unreadable file, bad JSON, bad date) is returned.
    pub fn load_or_report<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<Self> {
        match Self::from_json_file(path) {
            Ok(inventory) => Ok(inventory),
            Err(e @ CostingError::InventoryNotFound { .. }) => {
                tracing::error!("{}", e);
                writeln!(out, "{}", e.user_friendly_message())?;
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn find_by_name(&self, name: &str) -> Vec<&BatchRecord> {
        self.batches.iter().filter(|b| b.name() == name).collect()
    }

    /// Unique item names in alphabetical order.
    pub fn distinct_names(&self) -> Vec<String> {
        self.batches
            .iter()
            .map(|b| b.name())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn available(&self, name: &str) -> u64 {
        self.find_by_name(name)
            .iter()
            .map(|b| u64::from(b.quantity()))
            .sum()
    }

    pub fn batches(&self) -> &[BatchRecord] {
        &self.batches
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"[
        {"nazev": "Widget", "cena_za_kus": 12, "datum_naskladneni": "2024-02-01", "pocet_kusu": 5},
        {"nazev": "Bolt", "cena_za_kus": 0.5, "datum_naskladneni": "2024-01-15", "pocet_kusu": 200},
        {"nazev": "Widget", "cena_za_kus": 10, "datum_naskladneni": "2024-01-01", "pocet_kusu": 5}
    ]"#;

    #[test]
    fn test_distinct_names_sorted_without_duplicates() {
        let inventory = Inventory::from_json_str(SAMPLE).unwrap();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.distinct_names(), vec!["Bolt", "Widget"]);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let inventory = Inventory::from_json_str(SAMPLE).unwrap();

        assert_eq!(inventory.find_by_name("Widget").len(), 2);
        assert!(inventory.find_by_name("widget").is_empty());
        assert!(inventory.find_by_name("Widg").is_empty());
        assert_eq!(inventory.available("Widget"), 10);
        assert_eq!(inventory.available("Nut"), 0);
    }

    #[test]
    fn test_malformed_date_fails_the_load() {
        let content = r#"[{"nazev": "A", "cena_za_kus": 1, "datum_naskladneni": "1. 2. 2024", "pocet_kusu": 1}]"#;
        let result = Inventory::from_json_str(content);
        assert!(matches!(result, Err(CostingError::DateParseError { .. })));
    }

    #[test]
    fn test_missing_field_is_a_serialization_error() {
        let content = r#"[{"nazev": "A", "cena_za_kus": 1, "pocet_kusu": 1}]"#;
        let result = Inventory::from_json_str(content);
        assert!(matches!(result, Err(CostingError::SerializationError(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SAMPLE.as_bytes()).unwrap();

        let inventory = Inventory::from_json_file(temp_file.path()).unwrap();
        assert_eq!(inventory.distinct_names().len(), 2);
    }

    #[test]
    fn test_missing_file_reports_and_continues_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sklad.json");
        let mut out = Vec::new();

        let inventory = Inventory::load_or_report(&path, &mut out).unwrap();

        assert!(inventory.is_empty());
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("was not found"));
    }

    #[test]
    fn test_load_or_report_propagates_bad_data() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ not json").unwrap();

        let mut out = Vec::new();
        let result = Inventory::load_or_report(temp_file.path(), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
