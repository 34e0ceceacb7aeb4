use anyhow::Result;
use cryptrack::Totals;

mod common;
use common::test_store;

#[test]
fn test_totals_on_empty_store_are_zero() -> Result<()> {
    let (store, _temp) = test_store()?;

    assert_eq!(store.totals(None)?, Totals::default());
    assert_eq!(store.totals(Some("BTC"))?, Totals::default());
    Ok(())
}

#[test]
fn test_totals_over_all_records() -> Result<()> {
    let (store, _temp) = test_store()?;
    store.append("BTC", 30000.0, 0.5)?;
    store.append("ETH", 2000.0, 1.0)?;

    let totals = store.totals(None)?;
    assert_eq!(totals.amount, 1.5);
    assert_eq!(totals.invested, 17000.0);
    Ok(())
}

#[test]
fn test_totals_filtered_by_coin() -> Result<()> {
    let (store, _temp) = test_store()?;
    store.append("BTC", 30000.0, 0.5)?;
    store.append("BTC", 20000.0, 0.25)?;
    store.append("ETH", 2000.0, 1.0)?;

    let btc = store.totals(Some("BTC"))?;
    assert_eq!(btc.amount, 0.75);
    assert_eq!(btc.invested, 20000.0);

    // Filter that matches nothing yields zero totals, not an error
    assert_eq!(store.totals(Some("DOGE"))?, Totals::default());
    Ok(())
}

#[test]
fn test_full_tracking_scenario() -> Result<()> {
    let (store, _temp) = test_store()?;

    let btc = store.append("BTC", 30000.0, 0.5)?;
    store.append("ETH", 2000.0, 1.0)?;

    let investments = store.list(None)?;
    assert_eq!(investments.len(), 2);
    assert_eq!(investments[0].coin_name, "BTC");
    assert_eq!(investments[1].coin_name, "ETH");

    let totals = store.totals(None)?;
    assert_eq!(totals.amount, 1.5);
    assert_eq!(totals.invested, 17000.0);

    store.delete(&btc.id)?;

    let remaining = store.list(None)?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].coin_name, "ETH");

    let eth = store.totals(Some("ETH"))?;
    assert_eq!(eth.amount, 1.0);
    assert_eq!(eth.invested, 2000.0);
    Ok(())
}
