//! Console diagnostics and latency classification.

use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

use crate::config::Thresholds;
use crate::domain::CustomerConnection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyTier {
    Excellent,
    Good,
    NeedsOptimization,
}

impl LatencyTier {
    /// `ms < excellent` is excellent, `excellent <= ms < good` is good,
    /// everything else (NaN included) needs optimization.
    pub fn classify(ms: f64, thresholds: &Thresholds) -> Self {
        if ms < thresholds.excellent_ms {
            LatencyTier::Excellent
        } else if ms < thresholds.good_ms {
            LatencyTier::Good
        } else {
            LatencyTier::NeedsOptimization
        }
    }

    pub fn message(&self, thresholds: &Thresholds) -> String {
        match self {
            LatencyTier::Excellent => {
                format!("🚀 EXCELLENT! Under {}ms target!", thresholds.excellent_ms)
            }
            LatencyTier::Good => format!("✨ GOOD! Under {}ms", thresholds.good_ms),
            LatencyTier::NeedsOptimization => {
                format!("⚠️  Needs optimization - over {}ms", thresholds.good_ms)
            }
        }
    }
}

/// Human-readable output sink. Tests hand it a `Vec<u8>`.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Two-space indented JSON.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(self.out, "{rendered}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Summary for a successful customers query.
pub fn write_success<W: Write>(
    console: &mut Console<W>,
    connection: &CustomerConnection,
    elapsed_ms: f64,
    thresholds: &Thresholds,
) -> io::Result<LatencyTier> {
    console.blank()?;
    console.line("✅ Query successful!")?;
    console.line(format_args!("📈 Total customers: {}", connection.total_count))?;
    console.line(format_args!("📋 Returned: {} customers", connection.returned()))?;
    console.blank()?;
    console.line(format_args!("⏱️  Query time: {elapsed_ms:.2}ms"))?;

    let tier = LatencyTier::classify(elapsed_ms, thresholds);
    console.line(tier.message(thresholds))?;

    console.blank()?;
    console.line("📝 Sample customer:")?;
    if let Some(sample) = connection.first_customer() {
        console.json(sample)?;
    }
    Ok(tier)
}
