//! Text-stream case processing.
//!
//! A stream holds any number of independent cases. Each case starts with a
//! line holding the waypoint count, followed by that many `x y penalty`
//! lines; a count of `0` terminates the stream. Cases are solved
//! sequentially in input order (each completes in a single pass) and results
//! are rendered with three decimal digits.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{CostModel, Waypoint};
use crate::solver::Solver;

/// Line-oriented reader for waypoint case streams.
pub struct CaseReader<R> {
    input: R,
    line: u64,
    buf: String,
}

impl<R: BufRead> CaseReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: 0,
            buf: String::new(),
        }
    }

    /// 1-based number of the last line read, for error reporting.
    pub fn line(&self) -> u64 {
        self.line
    }

    fn next_line(&mut self) -> Result<()> {
        self.buf.clear();
        self.line += 1;
        if self.input.read_line(&mut self.buf)? == 0 {
            return Err(Error::UnexpectedEof { line: self.line });
        }
        Ok(())
    }

    /// Read the next case header; `None` on the zero terminator.
    pub fn next_case_len(&mut self) -> Result<Option<usize>> {
        self.next_line()?;
        let text = self.buf.trim();
        let count: usize = text.parse().map_err(|_| Error::InvalidRecord {
            line: self.line,
            content: text.to_string(),
        })?;
        Ok((count > 0).then_some(count))
    }

    /// Read one `x y penalty` record.
    pub fn next_waypoint(&mut self) -> Result<Waypoint> {
        self.next_line()?;
        let text = self.buf.trim();
        let mut fields = text.split_whitespace();
        let parsed = (|| {
            let x = fields.next()?.parse().ok()?;
            let y = fields.next()?.parse().ok()?;
            let penalty = fields.next()?.parse().ok()?;
            if fields.next().is_some() {
                return None;
            }
            Some(Waypoint::new(x, y, penalty))
        })();
        parsed.ok_or_else(|| Error::InvalidRecord {
            line: self.line,
            content: text.to_string(),
        })
    }
}

/// Solved result for one case.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseReport {
    /// 1-based position of the case in the stream.
    pub case: usize,
    /// Number of waypoints offered.
    pub waypoints: usize,
    /// Minimum total cost in seconds.
    pub cost: f64,
}

impl CaseReport {
    /// Render the cost the way the text output does.
    pub fn rendered_cost(&self) -> String {
        format!("{:.3}", self.cost)
    }
}

fn solve_one<R: BufRead>(
    model: &CostModel,
    reader: &mut CaseReader<R>,
    len: usize,
) -> Result<f64> {
    let mut solver = Solver::new(*model);
    for _ in 0..len {
        let waypoint = reader.next_waypoint()?;
        if !model.contains(waypoint) {
            return Err(Error::WaypointOutOfBounds {
                waypoint,
                edge: model.edge,
            });
        }
        solver.observe(waypoint);
    }
    Ok(solver.finish())
}

/// Solve every case in `input`, collecting one report per case in input
/// order.
pub fn solve_cases<R: BufRead>(model: &CostModel, input: R) -> Result<Vec<CaseReport>> {
    let mut reader = CaseReader::new(input);
    let mut reports = Vec::new();
    while let Some(len) = reader.next_case_len()? {
        let case = reports.len() + 1;
        let cost = solve_one(model, &mut reader, len)?;
        debug!(case, waypoints = len, cost, "case solved");
        reports.push(CaseReport {
            case,
            waypoints: len,
            cost,
        });
    }
    Ok(reports)
}

/// Solve every case in `input`, writing one result line per case to
/// `output`. Returns the number of cases solved.
pub fn process_stream<R: BufRead, W: Write>(
    model: &CostModel,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut reader = CaseReader::new(input);
    let mut cases = 0;
    while let Some(len) = reader.next_case_len()? {
        let cost = solve_one(model, &mut reader, len)?;
        cases += 1;
        debug!(case = cases, waypoints = len, cost, "case solved");
        writeln!(output, "{cost:.3}")?;
    }
    Ok(cases)
}
