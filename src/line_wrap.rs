//! Provides [LineWrap], the policy for breaking encoded output into lines.

/// The symbol inserted between lines.
pub const LINE_BREAK_BYTE: u8 = b'\n';

/// Symbols produced by one complete quantum.
pub(crate) const QUANTUM_SYMBOLS: u16 = 4;

/// Break encoded output into lines of (at most about) a fixed number of symbols.
///
/// Line breaks are only ever inserted between quanta, never inside the four symbols of one, so a
/// line ends at the first quantum boundary where the line length reaches or exceeds the
/// threshold. A threshold that is a multiple of 4 therefore gives lines of exactly that length.
/// The line break itself does not count toward the line length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineWrap {
    max_line_len: u16,
}

impl LineWrap {
    /// No line breaks at all.
    pub const NONE: Self = Self::new(0);

    /// Multipurpose Internet Mail Extensions (MIME) limit of 76 symbols per line.
    pub const MIME: Self = Self::new(76);

    /// Privacy Enhanced Mail (PEM) limit of 64 symbols per line.
    pub const PEM: Self = Self::new(64);

    /// Break lines once they reach `max_line_len` symbols. Zero means never.
    pub const fn new(max_line_len: u16) -> Self {
        Self { max_line_len }
    }

    /// The configured threshold; zero when line wrapping is disabled.
    pub const fn max_line_len(self) -> u16 {
        self.max_line_len
    }

    /// Returns `true` if line breaks will ever be inserted.
    pub const fn is_enabled(self) -> bool {
        self.max_line_len != 0
    }

    /// Account for one finished quantum at line position `column`.
    ///
    /// Returns the new line position and whether a line break must follow the quantum.
    #[inline]
    pub(crate) const fn after_quantum(self, column: u16) -> (u16, bool) {
        if !self.is_enabled() {
            return (column, false);
        }

        let column = column.saturating_add(QUANTUM_SYMBOLS);
        if column >= self.max_line_len {
            (0, true)
        } else {
            (column, false)
        }
    }

    /// How many complete quanta fit on one line before a break is inserted.
    pub(crate) const fn quanta_per_line(self) -> Option<usize> {
        if !self.is_enabled() {
            return None;
        }

        let symbols = self.max_line_len as usize;
        let quantum = QUANTUM_SYMBOLS as usize;
        Some((symbols + quantum - 1) / quantum)
    }
}
