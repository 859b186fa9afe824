//! Pretty-printing facility for input faults
//!
//! `Fault` holds one report and `Record` aggregates them so that every
//! bad argument of an invocation is shown at once, with colored output.
//!
//! # Example
//!
//! ```rust
//! errs.make("Invalid number")
//!     .arg("price", "7,15")
//!     .text("'7,15' cannot be read as a number")
//!     .hint("write decimals with a dot: '7.15'")
//! ```
//!
//! ```txt
//! --> Error: Invalid number
//!  |     --> <price> = '7,15'
//!  |  '7,15' cannot be read as a number
//!  |      ? hint: write decimals with a dot: '7.15'
//! ```

use std::fmt;

/// Report for a single fault
///
/// All messages (`label` passed with `make`, arguments of `text`
/// and `hint`) should fit in a single line.
#[must_use]
#[derive(Debug)]
pub struct Fault {
    /// determines the label (warning/error) and the color (yellow/red)
    fatal: bool,
    /// name of the fault
    label: String,
    /// contents of the report
    items: Vec<Item>,
}

/// Kinds of items that can be added to a fault report
#[derive(Debug)]
enum Item {
    /// offending argument and the raw text it carried
    Arg(&'static str, String),
    /// important message
    Text(String),
    /// recommendations for fixes
    Hint(String),
}

/// A collection of faults
///
/// Typically to keep record of everything wrong with one invocation,
/// but the structure itself makes no assumption regarding the
/// relationship between the faults
#[must_use]
#[derive(Debug, Default)]
pub struct Record {
    /// how many are errors, the rest are warnings
    fatal: usize,
    contents: Vec<Fault>,
}

impl Fault {
    fn new<S>(msg: S) -> Self
    where
        S: ToString,
    {
        Self {
            fatal: true,
            label: msg.to_string(),
            items: Vec::new(),
        }
    }

    /// Mark as a warning rather than a fatal error
    pub fn nonfatal(&mut self) -> &mut Self {
        self.fatal = false;
        self
    }

    /// Point at the argument that carried the bad value
    pub fn arg<S>(&mut self, name: &'static str, raw: S) -> &mut Self
    where
        S: ToString,
    {
        self.items.push(Item::Arg(name, raw.to_string()));
        self
    }

    /// Add an important note
    pub fn text<S>(&mut self, msg: S) -> &mut Self
    where
        S: ToString,
    {
        self.items.push(Item::Text(msg.to_string()));
        self
    }

    /// Add a hint on how to fix
    pub fn hint<S>(&mut self, msg: S) -> &mut Self
    where
        S: ToString,
    {
        self.items.push(Item::Hint(msg.to_string()));
        self
    }
}

impl Record {
    /// Initialize a new pool of faults
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if any of the recorded faults are fatal
    pub fn is_fatal(&self) -> bool {
        self.fatal > 0 || self.last_is_fatal()
    }

    /// The most recent fault is not counted in `self.fatal` until the next
    /// `make`, since `nonfatal` may still downgrade it
    fn last_is_fatal(&self) -> bool {
        self.contents.last().map(|e| e.fatal).unwrap_or(false)
    }

    /// Number of fatal faults
    pub fn count_errors(&self) -> usize {
        self.fatal + if self.last_is_fatal() { 1 } else { 0 }
    }

    /// Number of nonfatal faults
    pub fn count_warnings(&self) -> usize {
        self.contents.len() - self.count_errors()
    }

    /// Start a new fault and hand it out for completion
    pub fn make<S>(&mut self, msg: S) -> &mut Fault
    where
        S: ToString,
    {
        if self.last_is_fatal() {
            self.fatal += 1;
        }
        self.contents.push(Fault::new(msg));
        self.contents.last_mut().unwrap()
    }
}

const RED: &str = "\x1b[0;91;1m";
const YELLOW: &str = "\x1b[0;93;1m";
const BLUE: &str = "\x1b[0;96;1m";
const WHITE: &str = "\x1b[0;1m";
const NONE: &str = "\x1b[0m";

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (color, header) = if self.fatal {
            (RED, "--> Error")
        } else {
            (YELLOW, "--> Warning")
        };
        writeln!(f, "{}{}:{} {}{}", color, header, WHITE, self.label, NONE)?;
        for item in &self.items {
            match item {
                Item::Arg(name, raw) => {
                    writeln!(
                        f,
                        " {}|     {}--> <{}>{} = '{}'",
                        color, BLUE, name, NONE, raw
                    )?;
                }
                Item::Text(txt) => {
                    writeln!(f, " {}|  {}{}{}", color, WHITE, txt, NONE)?;
                }
                Item::Hint(txt) => {
                    writeln!(f, " {}|      {}? hint: {}{}", color, BLUE, NONE, txt)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contents.is_empty() {
            return Ok(());
        }
        let fatal = self.is_fatal();
        let count = if fatal {
            self.count_errors()
        } else {
            self.count_warnings()
        };
        let color = if fatal { RED } else { YELLOW };
        let trunc = 10;
        for err in self
            .contents
            .iter()
            .filter(|err| err.fatal == fatal)
            .take(trunc)
        {
            // only print faults with the maximum fatality
            writeln!(f, "{}", err)?;
        }
        if count > trunc {
            writeln!(f, "{} And {} more.", color, count - trunc)?;
        }
        let plural = if count > 1 { "s" } else { "" };
        if fatal {
            writeln!(f, "{}Fatal: {}{} error{} emitted{}", color, WHITE, count, plural, NONE)?;
        } else {
            writeln!(f, "{}Nonfatal: {}{} warning{} emitted{}", color, WHITE, count, plural, NONE)?;
        }
        Ok(())
    }
}
