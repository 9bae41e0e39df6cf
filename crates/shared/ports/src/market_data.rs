//! `Process` implementations for the market data shapes

use std::io::Write;

use mdproc_core::{BondMarketData, InterestRateMarketData, MarketData, MarketDataKind};

use crate::error::{ProcessError, ProcessResult};
use crate::process::Process;

/// Message and newline go out in one write call, so a failed item never
/// leaves a partial line behind
fn write_line(out: &mut dyn Write, line: &str) -> ProcessResult<()> {
    let line = format!("{}\n", line);
    out.write_all(line.as_bytes())?;
    Ok(())
}

fn ensure_finite(kind: MarketDataKind, value: f64) -> ProcessResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProcessError::InvalidValue { kind, value })
    }
}

impl Process for BondMarketData {
    fn process(&self, out: &mut dyn Write) -> ProcessResult<()> {
        ensure_finite(MarketDataKind::Bond, self.price)?;
        write_line(out, &self.summary())
    }
}

impl Process for InterestRateMarketData {
    fn process(&self, out: &mut dyn Write) -> ProcessResult<()> {
        ensure_finite(MarketDataKind::InterestRate, self.rate)?;
        write_line(out, &self.summary())
    }
}

impl Process for MarketData {
    fn process(&self, out: &mut dyn Write) -> ProcessResult<()> {
        match self {
            MarketData::Bond(b) => b.process(out),
            MarketData::InterestRate(r) => r.process(out),
        }
    }
}
