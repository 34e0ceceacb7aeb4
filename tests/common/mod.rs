// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use cryptrack::LedgerStore;
use tempfile::TempDir;

/// Helper to create a store backed by a temporary ledger file
pub fn test_store() -> Result<(LedgerStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("crypto_investments.csv");
    Ok((LedgerStore::new(path), temp_dir))
}
