mod json_csv;

pub use json_csv::{write_csv, write_json};

use crate::errors::AppResult;
use crate::models::press::PressEvent;
use clap::ValueEnum;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn write<W: Write>(&self, rows: &[PressEvent], out: W) -> AppResult<()> {
        match self {
            ExportFormat::Json => write_json(rows, out),
            ExportFormat::Csv => write_csv(rows, out),
        }
    }
}
