//! Flags that shape a single substitution run.
//!
//! License: MIT OR APACHE 2.0

/// Behaviour switches for [`crate::execute`] and [`crate::replace_characters`].
///
/// All flags default to off: replace the first match only, match
/// case-sensitively, and allow the original input in debug logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceOptions {
    /// Replace every non-overlapping match instead of only the first.
    pub global_replace: bool,
    /// Compile the pattern with case-insensitive matching.
    pub ignore_case: bool,
    /// Keep the original input out of the logs. This only affects logging;
    /// the returned text is identical either way.
    pub secure: bool,
}

impl ReplaceOptions {
    pub fn global(mut self, global_replace: bool) -> Self {
        self.global_replace = global_replace;
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Maximum number of replacements, where `0` means unbounded.
    pub(crate) fn replacement_limit(&self) -> usize {
        if self.global_replace { 0 } else { 1 }
    }
}
