use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::domain::{Investment, CSV_HEADER};
use crate::storage::LedgerStore;

/// Cryptrack - Crypto Investment Tracker
#[derive(Parser)]
#[command(name = "cryptrack")]
#[command(about = "A local-first crypto investment tracker backed by a CSV ledger")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(short, long, default_value = "crypto_investments.csv")]
    pub file: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new investment
    Add {
        /// Name of the cryptocurrency
        coin_name: String,

        /// Price at which the coin was bought
        #[arg(allow_negative_numbers = true)]
        price: f64,

        /// Amount of the coin bought
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// View recorded investments
    View {
        /// Filter by coin name
        #[arg(long)]
        coin: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Delete an investment by its ID
    Delete {
        /// ID of the investment to delete
        id: String,
    },

    /// Calculate total holdings and money invested
    Total {
        /// Calculate totals for a specific coin
        #[arg(long)]
        coin: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let store = LedgerStore::new(&self.file);

        match self.command {
            Commands::Add {
                coin_name,
                price,
                amount,
            } => {
                let investment = store.append(&coin_name, price, amount)?;
                println!(
                    "Investment in {} added successfully (ID {}).",
                    investment.coin_name, investment.id
                );
            }

            Commands::View { coin, format } => {
                let investments = store.list(coin.as_deref())?;
                if self.verbose {
                    eprintln!("[view] {} matching record(s)", investments.len());
                }

                match format.as_str() {
                    "json" => {
                        println!("{}", serde_json::to_string_pretty(&investments)?);
                    }
                    "csv" => {
                        let mut writer = csv::Writer::from_writer(std::io::stdout());
                        for investment in &investments {
                            writer.serialize(investment)?;
                        }
                        writer.flush()?;
                    }
                    _ => match render_investment_table(&investments) {
                        Some(table) => println!("{table}"),
                        None => println!("No investments to display."),
                    },
                }
            }

            Commands::Delete { id } => {
                store.delete(&id)?;
                println!("Investment with ID {id} has been deleted.");
            }

            Commands::Total { coin, format } => {
                let totals = store.totals(coin.as_deref())?;

                match format.as_str() {
                    "json" => {
                        println!("{}", serde_json::to_string_pretty(&totals)?);
                    }
                    _ => {
                        let scope = coin.as_deref().unwrap_or("all coins");
                        println!("Total amount of {}: {}", scope, totals.amount);
                        println!("Total invested in {}: ${}", scope, totals.invested);
                    }
                }
            }
        }

        Ok(())
    }
}

/// Render investments as a column-aligned table, each column sized to its
/// widest cell. Returns `None` for an empty list so the caller can print a
/// friendlier message instead.
fn render_investment_table(investments: &[Investment]) -> Option<String> {
    if investments.is_empty() {
        return None;
    }

    let rows: Vec<[String; 5]> = investments
        .iter()
        .map(|inv| {
            [
                inv.id.clone(),
                inv.coin_name.clone(),
                inv.price.to_string(),
                inv.amount.to_string(),
                inv.timestamp.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = CSV_HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let format_row = |cells: &[String; 5]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header_cells = CSV_HEADER.map(String::from);
    let header_row = format_row(&header_cells);
    let separator = "-".repeat(header_row.len());

    let mut lines = vec![header_row, separator];
    lines.extend(rows.iter().map(format_row));
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, coin: &str, price: f64, amount: f64) -> Investment {
        Investment {
            id: id.to_string(),
            coin_name: coin.to_string(),
            price,
            amount,
            timestamp: "2026-08-23 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_render_empty_table() {
        assert!(render_investment_table(&[]).is_none());
    }

    #[test]
    fn test_render_table_alignment() {
        let investments = vec![
            sample("20260823100000000001", "BTC", 30000.0, 0.5),
            sample("20260823100000000002", "SomeVeryLongCoin", 2.0, 1.0),
        ];

        let table = render_investment_table(&investments).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID "));
        // Separator spans the full header width
        assert_eq!(lines[1].len(), lines[0].len());
        assert!(lines[1].chars().all(|c| c == '-'));
        // All rows align to the same width
        assert_eq!(lines[2].len(), lines[0].len());
        assert_eq!(lines[3].len(), lines[0].len());

        // Column separators line up across header and data rows
        let pipe_positions = |line: &str| -> Vec<usize> {
            line.match_indices('|').map(|(i, _)| i).collect()
        };
        assert_eq!(pipe_positions(lines[0]), pipe_positions(lines[2]));
        assert_eq!(pipe_positions(lines[0]), pipe_positions(lines[3]));
    }
}
