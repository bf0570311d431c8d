//! Human-readable console report of a run.

use std::io::{self, Write};

use crate::domain::{ProbeResult, ResponseBody, RunSummary};

const RULE_WIDTH: usize = 60;

pub struct Report<W> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn title(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n🍽️  SpinDine Backend Test Suite")?;
        writeln!(self.out, "Testing with Foursquare Places API\n")
    }

    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.rule()?;
        writeln!(self.out, "{}", title)?;
        self.rule()
    }

    pub fn health(&mut self, result: &ProbeResult) -> io::Result<()> {
        self.status(result)?;
        if let Some(body) = result.body() {
            match body {
                ResponseBody::Json(value) => writeln!(self.out, "Response: {}", value)?,
                ResponseBody::Text(raw) => writeln!(self.out, "Response: {}", raw)?,
            }
        }
        self.error(result)
    }

    pub fn fixture(&mut self, result: &ProbeResult) -> io::Result<()> {
        self.status(result)?;
        if let Some(body) = result.body() {
            writeln!(self.out, "Response:")?;
            match body {
                ResponseBody::Json(value) => {
                    let pretty = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
                    writeln!(self.out, "{}", pretty)?
                }
                ResponseBody::Text(raw) => writeln!(self.out, "{}", raw)?,
            }
        }
        self.error(result)
    }

    pub fn gate_closed(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n❌ Backend is not running! Start it with: npm start")
    }

    pub fn gate_open(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n✅ Backend is running!")
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.banner("Test Summary")?;
        if summary.all_passed() {
            writeln!(self.out, "✅ All tests passed!")?;
        } else {
            writeln!(self.out, "❌ Some tests failed. Check the errors above.")?;
        }
        self.rule()?;
        writeln!(self.out)
    }

    fn status(&mut self, result: &ProbeResult) -> io::Result<()> {
        match result.status_code() {
            Some(status) => writeln!(self.out, "Status Code: {}", status),
            None => Ok(()),
        }
    }

    fn error(&mut self, result: &ProbeResult) -> io::Result<()> {
        match result.error() {
            Some(error) => writeln!(self.out, "Error: {}", error),
            None => Ok(()),
        }
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }
}
