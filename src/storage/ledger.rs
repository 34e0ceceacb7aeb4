use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::domain::{Investment, Totals, CSV_HEADER};

use super::LedgerError;

/// Store for the investments persisted in a single CSV file.
///
/// Holds only the file path: every operation re-reads from (or re-writes to)
/// durable storage, so there is no in-memory state to invalidate between
/// calls. Single-process use only - no locking is held across the
/// read-then-rewrite gap in [`delete`](LedgerStore::delete).
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store backed by the CSV file at `path`.
    /// The file is created lazily on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate and append a new investment, creating the file (with its
    /// header row) if it doesn't exist yet. Returns the stored record.
    pub fn append(
        &self,
        coin_name: &str,
        price: f64,
        amount: f64,
    ) -> Result<Investment, LedgerError> {
        if coin_name.is_empty() {
            return Err(LedgerError::InvalidArgument(
                "coin name must not be empty".to_string(),
            ));
        }
        if price <= 0.0 || !price.is_finite() {
            return Err(LedgerError::InvalidArgument(format!(
                "price must be a positive number (got {price})"
            )));
        }
        if amount <= 0.0 || !amount.is_finite() {
            return Err(LedgerError::InvalidArgument(format!(
                "amount must be a positive number (got {amount})"
            )));
        }

        // Header goes in only when the file is new or empty
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let investment = Investment::new(coin_name, price, amount);
        if needs_header {
            writer.write_record(CSV_HEADER)?;
        }
        writer.serialize(&investment)?;
        writer.flush()?;

        Ok(investment)
    }

    /// Read all investments in file order, optionally keeping only those
    /// whose coin name matches `filter_coin` exactly (case-sensitive).
    /// A missing file is an empty ledger, not an error.
    pub fn list(&self, filter_coin: Option<&str>) -> Result<Vec<Investment>, LedgerError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut investments = Vec::new();
        for result in reader.deserialize() {
            let investment: Investment = result?;
            if filter_coin.is_none_or(|coin| investment.coin_name == coin) {
                investments.push(investment);
            }
        }
        Ok(investments)
    }

    /// Remove every investment whose id equals `id`, preserving the relative
    /// order of the remaining records. Ids collide only if the backing file
    /// was produced by an implementation with coarser id resolution; all
    /// matches are removed in that case.
    ///
    /// The surviving records are written to a sibling temporary file which is
    /// then renamed over the original, so a crash mid-rewrite cannot leave a
    /// half-written ledger behind.
    pub fn delete(&self, id: &str) -> Result<(), LedgerError> {
        let investments = self.list(None)?;
        if !investments.iter().any(|inv| inv.id == id) {
            return Err(LedgerError::NotFound(id.to_string()));
        }

        let tmp_path = self.path.with_extension("tmp");
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp_path)?;
        writer.write_record(CSV_HEADER)?;
        for investment in investments.iter().filter(|inv| inv.id != id) {
            writer.serialize(investment)?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Sum quantity and money invested over the (optionally filtered)
    /// records. An empty or missing ledger yields zero totals.
    pub fn totals(&self, filter_coin: Option<&str>) -> Result<Totals, LedgerError> {
        let mut totals = Totals::default();
        for investment in self.list(filter_coin)? {
            totals.add(&investment);
        }
        Ok(totals)
    }
}
