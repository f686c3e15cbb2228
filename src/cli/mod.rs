mod menu;

pub use menu::*;

use std::io;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::application::TrackerService;

/// Expense Orbit - Personal Expense Tracker
#[derive(Parser)]
#[command(name = "orbit")]
#[command(about = "Log daily expenses, set monthly category budgets and review spending reports")]
#[command(version)]
pub struct Cli {
    /// Currency symbol printed before amounts
    #[arg(short, long, default_value = "₹")]
    pub currency: String,

    /// Report output format: table, json
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How monthly reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

impl Cli {
    /// Parse options and run the interactive menu on stdin/stdout.
    pub fn run(self) -> Result<()> {
        let format: ReportFormat = self.format.parse().map_err(|e| {
            anyhow::anyhow!(
                "Invalid format '{}'. Valid formats: table, json. Error: {}",
                self.format,
                e
            )
        })?;

        let options = MenuOptions {
            currency: self.currency,
            format,
        };
        debug!(?options, "starting expense tracker");

        let mut service = TrackerService::new();
        let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), options);
        menu.run(&mut service)?;

        debug!(
            expenses = service.ledger().len(),
            budgets = service.budgets().len(),
            "session ended"
        );
        Ok(())
    }
}
