// std imports
use std::io::{BufRead, Write};

// third-party imports
use wildcard::{Issue, IssueCode, Prepared, Profile, Strategy, validate_raw};

// local imports
use crate::{error::*, report::Reporter};

// ---

pub struct Options {
    /// Strategies to run, in order. More than one enables the agreement check.
    pub strategies: Vec<Strategy>,
    pub text: Option<String>,
    pub pattern: Option<String>,
    pub max_input_length: usize,
    pub max_recursive_input_length: usize,
    pub show_warnings: bool,
    pub colors: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Reads text and pattern, validates them, runs the configured strategies and reports results.
    ///
    /// Values given in options are used as is, missing ones are prompted for on `input`.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: W) -> Result<()> {
        let mut out = Reporter::new(output, self.options.colors);

        let text = match &self.options.text {
            Some(text) => text.clone(),
            None => read_line(input, &mut out, "Enter the text string (s): ", "text")?,
        };
        check_text(&text)?;
        self.check_length("text", &text, self.options.max_input_length)?;

        let pattern = match &self.options.pattern {
            Some(pattern) => pattern.clone(),
            None => read_line(input, &mut out, "Enter the pattern string (p): ", "pattern")?,
        };
        self.check_length("pattern", &pattern, self.options.max_input_length)?;

        let prepared = Prepared::new(&text, &pattern).map_err(|source| Error::Rejected {
            what: "pattern",
            source,
        })?;
        log::debug!("compiled pattern {:?} as {:?}", pattern, prepared.compiled().tokens);

        if self.options.show_warnings {
            for warning in prepared.warnings() {
                out.issue(warning)?;
            }
        }

        let mut results: Vec<(Strategy, Profile)> = Vec::with_capacity(self.options.strategies.len());
        for (i, &strategy) in self.options.strategies.iter().enumerate() {
            if i != 0 {
                out.separator()?;
            }

            let limit = self.options.max_recursive_input_length;
            if strategy == Strategy::Recursive && (text.len() > limit || pattern.len() > limit) {
                if self.options.strategies.len() == 1 {
                    let (what, len) = if text.len() > limit {
                        ("text", text.len())
                    } else {
                        ("pattern", pattern.len())
                    };
                    return Err(Error::InputTooLong { what, len, limit });
                }
                log::warn!("skipping {} solver, input exceeds {} bytes", strategy, limit);
                out.skipped(strategy, &format!("input exceeds {} bytes", limit))?;
                continue;
            }

            let profile = prepared.profile(strategy);
            out.profile(strategy, &profile)?;
            results.push((strategy, profile));
        }

        check_agreement(&results)
    }

    fn check_length(&self, what: &'static str, value: &str, limit: usize) -> Result<()> {
        if value.len() > limit {
            return Err(Error::InputTooLong {
                what,
                len: value.len(),
                limit,
            });
        }
        Ok(())
    }
}

// ---

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut Reporter<W>,
    prompt: &str,
    what: &'static str,
) -> Result<String> {
    out.prompt(prompt)?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Err(Error::UnexpectedEof { what });
    }
    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }

    // undecodable bytes are reported by position like any other non-ASCII byte
    String::from_utf8(line).map_err(|e| {
        let position = e.as_bytes().iter().position(|&b| b > 127).unwrap_or(e.utf8_error().valid_up_to());
        Error::Rejected {
            what,
            source: wildcard::Rejected {
                issues: vec![Issue::new(IssueCode::MultibyteCharacterNotAllowed, position + 1, None)],
            },
        }
    })
}

/// Text is matched literally, so it must be free of wildcards and non-ASCII bytes.
fn check_text(text: &str) -> Result<()> {
    if let Some((i, ch)) = text.char_indices().find(|&(_, ch)| ch == '?' || ch == '*') {
        return Err(Error::WildcardInText { ch, position: i + 1 });
    }

    let issues = validate_raw(text);
    if !issues.is_empty() {
        return Err(Error::Rejected {
            what: "text",
            source: wildcard::Rejected { issues },
        });
    }
    Ok(())
}

fn check_agreement(results: &[(Strategy, Profile)]) -> Result<()> {
    let Some((_, first)) = results.first() else {
        return Ok(());
    };
    if results.iter().all(|(_, profile)| profile.matched == first.matched) {
        return Ok(());
    }

    let details = results
        .iter()
        .map(|(strategy, profile)| format!("{}={}", strategy, profile.matched))
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::Disagreement { details })
}
