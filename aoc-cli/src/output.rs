//! Printing answers and the closing summary

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::fmt;
use std::time::{Duration, Instant};

/// Prints results as they are released and a summary at the end.
///
/// Answers go to stdout and failures to stderr. In quiet mode only the
/// bare answers are printed and the summary is skipped.
pub struct Report {
    quiet: bool,
    started: Instant,
}

impl Report {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started: Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        let line = if self.quiet {
            result.answer.clone().map_err(|e| format!("Error: {e}"))
        } else {
            result_line(result)
        };
        match line {
            Ok(line) => println!("{line}"),
            Err(line) => eprintln!("{line}"),
        }
    }

    pub fn print_summary(&self, results: &[SolverResult]) {
        if !self.quiet {
            println!();
            print!("{}", Summary::of(results, self.started.elapsed()));
        }
    }
}

/// Totals over successful results plus wall-clock time
struct Summary {
    solved: usize,
    failed: usize,
    parsing: TimeDelta,
    solving: TimeDelta,
    elapsed: Duration,
}

impl Summary {
    fn of(results: &[SolverResult], elapsed: Duration) -> Self {
        let solved: Vec<&SolverResult> = results.iter().filter(|r| r.answer.is_ok()).collect();
        Self {
            solved: solved.len(),
            failed: results.len() - solved.len(),
            parsing: solved.iter().filter_map(|r| r.parse_duration).sum(),
            solving: solved.iter().map(|r| r.solve_duration).sum(),
            elapsed,
        }
    }

    /// Summed compute time over wall-clock time; above 1 means threads overlapped.
    fn speedup(&self) -> Option<f64> {
        if self.elapsed.is_zero() {
            return None;
        }
        let compute = (self.parsing + self.solving).num_microseconds()? as f64 / 1e6;
        Some(compute / self.elapsed.as_secs_f64())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Puzzle parts: {} solved, {} failed", self.solved, self.failed)?;
        writeln!(f, "Parsing: {}", format_duration(self.parsing))?;
        writeln!(f, "Solving: {}", format_duration(self.solving))?;
        writeln!(f, "Wall clock: {}", format_micros(self.elapsed.as_micros() as i128))?;
        if let Some(speedup) = self.speedup() {
            writeln!(f, "Speedup: {speedup:.2}x")?;
        }
        Ok(())
    }
}

fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        Some(micros) => format_micros(i128::from(micros)),
        None => "N/A".to_string(),
    }
}

fn format_micros(micros: i128) -> String {
    let sign = if micros < 0 { "-" } else { "" };
    let micros = micros.unsigned_abs();
    if micros < 1_000 {
        format!("{sign}{micros}µs")
    } else if micros < 1_000_000 {
        format!("{sign}{:.2}ms", micros as f64 / 1e3)
    } else {
        format!("{sign}{:.2}s", micros as f64 / 1e6)
    }
}

/// `Ok` lines belong on stdout, `Err` lines on stderr
fn result_line(result: &SolverResult) -> Result<String, String> {
    let puzzle = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    let answer = result.answer.as_ref().map_err(|e| format!("{puzzle}: Error - {e}"))?;

    let parse = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    Ok(format!(
        "{puzzle}: {answer} ({parse}solve: {})",
        format_duration(result.solve_duration)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;

    fn result(answer: Result<String, ExecutorError>) -> SolverResult {
        SolverResult {
            year: 2022,
            day: 12,
            part: 1,
            answer: answer.map_err(Into::into),
            parse_duration: Some(TimeDelta::microseconds(12)),
            solve_duration: TimeDelta::microseconds(1200),
        }
    }

    #[test]
    fn test_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_answer_line_has_timings() {
        assert_eq!(
            result_line(&result(Ok("31".to_string()))),
            Ok("2022/12 Part 1: 31 (parse: 12µs, solve: 1.20ms)".to_string())
        );
    }

    #[test]
    fn test_error_line_goes_to_stderr() {
        let line = result_line(&result(Err(ExecutorError::ChannelSend))).unwrap_err();
        assert_eq!(line, "2022/12 Part 1: Error - Channel send error");
    }

    #[test]
    fn test_summary_counts_only_successes() {
        let results = [
            result(Ok("31".to_string())),
            result(Err(ExecutorError::ChannelSend)),
        ];
        let summary = Summary::of(&results, Duration::from_micros(606));
        assert_eq!(summary.solved, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.parsing, TimeDelta::microseconds(12));
        assert_eq!(summary.solving, TimeDelta::microseconds(1200));

        let speedup = summary.speedup().unwrap();
        assert!((speedup - 2.0).abs() < 1e-9);
        assert!(summary.to_string().contains("Puzzle parts: 1 solved, 1 failed"));
    }
}
