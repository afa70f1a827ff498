//! Unit types: Px, Rem, and conversions

/// Root font size browsers use when the document does not override it.
pub const DEFAULT_ROOT_FONT_SIZE: f32 = 16.0;

/// Raw CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

/// Lengths relative to the root font size
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Rem(pub f32);

impl Rem {
    pub fn to_px(&self, root_font_size: f32) -> Px {
        Px(self.0 * root_font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rem_scales_default_root_size() {
        assert_eq!(Rem(2.5).to_px(DEFAULT_ROOT_FONT_SIZE), Px(40.0));
    }

    #[test]
    fn rem_follows_custom_root_size() {
        assert_eq!(Rem(10.0).to_px(20.0), Px(200.0));
    }
}
