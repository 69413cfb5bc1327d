// std imports
use std::io::{Result, Write};

// third-party imports
use owo_colors::{OwoColorize, Style};
use wildcard::{Issue, IssueType, Profile, Strategy};

// ---

/// Writes human readable results, optionally highlighted with ANSI colors.
pub struct Reporter<W> {
    out: W,
    colors: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self { out, colors }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn issue(&mut self, issue: &Issue) -> Result<()> {
        let style = match issue.kind {
            IssueType::Warning => Style::new().yellow(),
            IssueType::Error => Style::new().bright_red(),
        };
        let line = format!("{}", issue);
        writeln!(self.out, "{}", self.paint(&line, style))
    }

    pub fn profile(&mut self, strategy: Strategy, profile: &Profile) -> Result<()> {
        let result = if profile.matched {
            self.paint("Match Successful", Style::new().green().bold())
        } else {
            self.paint("Match Failed", Style::new().red().bold())
        };
        writeln!(self.out, "Result: {}", result)?;
        writeln!(self.out, "Performance Metrics:")?;
        writeln!(self.out, "  - Solver Used: {}", strategy.title())?;
        writeln!(self.out, "  - Execution Time: {} us", profile.elapsed_micros())?;
        writeln!(self.out, "  - Extra Space: {} bytes", profile.extra_bytes)
    }

    pub fn skipped(&mut self, strategy: Strategy, reason: &str) -> Result<()> {
        let line = format!("Skipped {}: {}", strategy.title(), reason);
        writeln!(self.out, "{}", self.paint(&line, Style::new().dimmed()))
    }

    pub fn solvers(&mut self) -> Result<()> {
        writeln!(self.out, "Available solvers:")?;
        for strategy in Strategy::all() {
            let name = format!("{:<10}", strategy.name());
            writeln!(
                self.out,
                "  - {}: {}",
                self.paint(&name, Style::new().bold()),
                strategy.description()
            )?;
        }
        Ok(())
    }

    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn separator(&mut self) -> Result<()> {
        writeln!(self.out)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colors {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}
