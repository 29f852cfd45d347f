//! Host font enumeration port.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSourceError(pub String);

impl std::fmt::Display for FontSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Font enumeration failed: {}", self.0)
    }
}

impl std::error::Error for FontSourceError {}

pub trait FontSource {
    /// Installed family names, unfiltered and in host order.
    fn families(&self) -> Result<Vec<String>, FontSourceError>;
}
