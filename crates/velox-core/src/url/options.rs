use super::Scheme;

/// Per-call options for [`UrlGenerator::generate`](super::UrlGenerator::generate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Use the full (scheme + host) base instead of the root-relative one.
    pub absolute: bool,
    /// Appended as `#fragment`. Do not include the `#`.
    pub fragment: Option<String>,
    /// Defaults to `https` on a secure connection, `http` otherwise.
    pub scheme: Option<Scheme>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }
}
