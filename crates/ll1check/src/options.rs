/// Configuration options for the recognizer.
///
/// # Examples
///
/// ```rust
/// use ll1check::{Recognizer, RecognizerOptions};
///
/// let options = RecognizerOptions {
///     allow_leading_zeros: true,
///     ..Default::default()
/// };
/// assert!(Recognizer::new("007+1", options).check().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecognizerOptions {
    /// Whether a multi-digit number may start with `0`.
    ///
    /// The literal `0` on its own is always accepted. With this option off,
    /// `01` is rejected; with it on, any run of digits is a number.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_leading_zeros: bool,

    /// Maximum nesting of parenthesised sub-expressions, if any.
    ///
    /// Each `(` opens one level through `F -> ( E )`. Nesting never touches
    /// the native stack, so this is a policy limit only: with `Some(n)`,
    /// a group opened at depth `n` is rejected with
    /// [`ErrorSource::DepthLimitExceeded`](crate::ErrorSource).
    ///
    /// # Default
    ///
    /// `None`
    pub max_depth: Option<usize>,

    /// Whether to record the productions applied during recognition.
    ///
    /// The sequence is returned in [`Outcome::derivation`](crate::Outcome)
    /// and lists the leftmost derivation up to the point of failure.
    ///
    /// # Default
    ///
    /// `false`
    pub record_derivation: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on failures.
    pub panic_on_error: bool,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            allow_leading_zeros: false,
            max_depth: None,
            record_derivation: false,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
