/// Whether a blank line is owed before the next non-empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BlankState {
    #[default]
    Idle,
    BlankPending,
}

/// Append-only line buffer with deferred blank-line insertion.
///
/// `request_blank` never writes anything by itself; it only guarantees that
/// the next non-empty `append` is preceded by exactly one blank line.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
    state: BlankState,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` verbatim, paying any pending blank first.
    ///
    /// An empty line fills the pending slot itself rather than adding a second
    /// blank.
    pub fn append(&mut self, line: impl Into<String>) -> &mut Self {
        let line = line.into();
        if !line.is_empty() && self.state == BlankState::BlankPending {
            self.lines.push(String::new());
        }
        self.state = BlankState::Idle;
        self.lines.push(line);
        self
    }

    /// Append an empty line unconditionally.
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self.state = BlankState::Idle;
        self
    }

    pub fn request_blank(&mut self) -> &mut Self {
        self.state = BlankState::BlankPending;
        self
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
