//! Human readable report of a selection run

use std::fmt::Display;
use std::io::{self, Write};

use crate::error::Error;
use crate::metrics::MetricSet;

const FRAME: &str = "*************************************************";
const RULE: &str = "*------------------------------------------------";

/// Format with at most two decimals, without trailing zeros
pub fn round2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Writes star-framed blocks to a sink, usually standard output
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Reporter::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn metrics<M: MetricSet>(&mut self, name: &str, metrics: &M) -> io::Result<()> {
        writeln!(self.out, "{}", FRAME)?;
        writeln!(self.out, "*       Metrics for {}", name)?;
        writeln!(self.out, "{}", RULE)?;
        for (label, value) in metrics.values() {
            writeln!(self.out, "*       {}: {}", label, round2(value))?;
        }
        writeln!(self.out, "{}", FRAME)
    }

    pub fn failure(&mut self, name: &str, error: &Error) -> io::Result<()> {
        writeln!(self.out, "{}", FRAME)?;
        writeln!(self.out, "*       {} FAILED", name)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "*       {}", error)?;
        writeln!(self.out, "{}", FRAME)
    }

    /// Announce the winner and list `(predicted, actual)` pairs
    pub fn predictions<L: Display>(&mut self, name: &str, rows: &[(L, L)]) -> io::Result<()> {
        writeln!(self.out, "{}", FRAME)?;
        writeln!(self.out, "* BEST MODEL IS: {}!", name)?;
        writeln!(self.out, "* Here are its predictions: ")?;
        for (predicted, actual) in rows {
            writeln!(self.out, "{}", RULE)?;
            writeln!(self.out, "* Predicted : {}", predicted)?;
            writeln!(self.out, "* Actual:    {}", actual)?;
            writeln!(self.out, "{}", RULE)?;
        }
        writeln!(self.out, "{}", FRAME)?;
        self.out.flush()
    }
}
