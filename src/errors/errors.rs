use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Unexpected character {character}.")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated comment.")]
    UnterminatedComment,
}

impl LexError {
    pub fn name(&self) -> &str {
        match self {
            LexError::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            LexError::UnterminatedString => "UnterminatedString",
            LexError::UnterminatedComment => "UnterminatedComment",
        }
    }
}

// Lexical errors never abort the scan. The scanner hands every diagnostic
// to the reporter it was constructed with and keeps going.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, error: &LexError);
}

#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> ConsoleReporter {
        ConsoleReporter { had_error: false }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, line: usize, error: &LexError) {
        eprintln!("line {}: {}", line, error);
        self.had_error = true;
    }
}

#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: Vec<(usize, LexError)>,
}

impl CollectingReporter {
    pub fn new() -> CollectingReporter {
        CollectingReporter { reports: vec![] }
    }

    pub fn reports(&self) -> &[(usize, LexError)] {
        &self.reports
    }

    pub fn had_error(&self) -> bool {
        !self.reports.is_empty()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, line: usize, error: &LexError) {
        self.reports.push((line, error.clone()));
    }
}
