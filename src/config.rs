//! Provides [Config] and the common encoding presets from RFC 4648.
use crate::{
    alphabet::{self, Alphabet},
    line_wrap::LineWrap,
    padding::Padding,
};

/// Everything that controls how bytes turn into symbols: the [Alphabet], the [Padding] policy,
/// and the [LineWrap] policy.
///
/// A config is chosen once per encoding session and must stay the same for every call that
/// shares an [EncodingState](crate::EncodingState). It is cheap to copy and freely shared across
/// threads.
///
/// ```
/// use base64_chunked::{config::Config, line_wrap::LineWrap, padding::Padding};
///
/// const ARMORED: Config = Config::new()
///     .with_padding(Padding::None)
///     .with_line_wrap(LineWrap::new(8));
///
/// assert_eq!("Zm9vYmFy\nYmF6", base64_chunked::encode_complete(b"foobarbaz", &ARMORED));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    alphabet: Alphabet,
    padding: Padding,
    line_wrap: LineWrap,
}

impl Config {
    /// Create a new config with the standard alphabet, padding, and no line breaks.
    ///
    /// This probably matches most people's expectations, but consider disabling padding to save
    /// a few bytes unless you specifically need it for compatibility with some legacy system.
    pub const fn new() -> Self {
        Self {
            alphabet: alphabet::STANDARD,
            padding: Padding::Standard,
            line_wrap: LineWrap::NONE,
        }
    }

    /// Create a new config based on `self` with an updated `alphabet` parameter.
    pub const fn with_alphabet(self, alphabet: Alphabet) -> Self {
        Self { alphabet, ..self }
    }

    /// Create a new config based on `self` with an updated `padding` parameter.
    pub const fn with_padding(self, padding: Padding) -> Self {
        Self { padding, ..self }
    }

    /// Create a new config based on `self` with an updated `line_wrap` parameter.
    pub const fn with_line_wrap(self, line_wrap: LineWrap) -> Self {
        Self { line_wrap, ..self }
    }

    /// The alphabet symbols are drawn from.
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The padding policy applied when a session is finalized.
    pub const fn padding(&self) -> Padding {
        self.padding
    }

    /// The line wrapping policy.
    pub const fn line_wrap(&self) -> LineWrap {
        self.line_wrap
    }
}

impl Default for Config {
    /// Delegates to [Config::new].
    fn default() -> Self {
        Self::new()
    }
}

/// Standard alphabet, padded with `=`, no line breaks.
pub const STANDARD: Config = Config::new();

/// Standard alphabet, no padding, no line breaks.
pub const STANDARD_NO_PAD: Config = STANDARD.with_padding(Padding::None);

/// URL and filename safe alphabet, padded with `=`, no line breaks.
/// This encoding is sometimes called "base64url".
pub const URL_SAFE: Config = Config::new().with_alphabet(alphabet::URL_SAFE);

/// URL and filename safe alphabet, no padding, no line breaks.
pub const URL_SAFE_NO_PAD: Config = URL_SAFE.with_padding(Padding::None);

/// For content wrapped in a Multipurpose Internet Mail Extensions (MIME) envelope: standard
/// alphabet, padded with `=`, a line break after every 76 symbols.
pub const MIME: Config = Config::new().with_line_wrap(LineWrap::MIME);

/// For content wrapped in a Privacy Enhanced Mail (PEM) envelope: standard alphabet, padded with
/// `=`, a line break after every 64 symbols.
pub const PEM: Config = Config::new().with_line_wrap(LineWrap::PEM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(alphabet::STANDARD, *STANDARD.alphabet());
        assert_eq!(Padding::Standard, STANDARD.padding());
        assert!(!STANDARD.line_wrap().is_enabled());

        assert_eq!(alphabet::URL_SAFE, *URL_SAFE.alphabet());
        assert_eq!(Padding::Standard, URL_SAFE.padding());
        assert!(!URL_SAFE.line_wrap().is_enabled());

        assert_eq!(alphabet::STANDARD, *MIME.alphabet());
        assert_eq!(76, MIME.line_wrap().max_line_len());

        assert_eq!(alphabet::STANDARD, *PEM.alphabet());
        assert_eq!(64, PEM.line_wrap().max_line_len());

        assert_eq!(Padding::None, STANDARD_NO_PAD.padding());
        assert_eq!(Padding::None, URL_SAFE_NO_PAD.padding());
        assert_eq!(alphabet::URL_SAFE, *URL_SAFE_NO_PAD.alphabet());
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(STANDARD, Config::default());
    }
}
