//! Image leaf description.
//!
//! Decal never decodes pixels; an [`ImageSource`] is an opaque reference
//! the host's renderer resolves. Invalid references are not validated here
//! and simply render degenerately downstream.

/// Opaque reference to an image asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageSource {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for ImageSource {
    fn from(reference: String) -> Self {
        Self::new(reference)
    }
}

/// How image content fits its layout box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeMode {
    /// Scale uniformly so the whole image is visible. Stickers use this.
    #[default]
    Contain,
    /// Scale uniformly so the box is fully covered, cropping overflow.
    Cover,
    /// Fill both dimensions, ignoring aspect ratio.
    Stretch,
}
