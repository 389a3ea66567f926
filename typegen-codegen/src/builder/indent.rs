//! Indentation configuration for generated declarations.

/// Width of one indent level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// 2-space indentation, the TypeScript convention.
    pub const TYPESCRIPT: Self = Self(2);

    pub const fn spaces(width: u8) -> Self {
        Self(width)
    }

    pub fn width(&self) -> usize {
        usize::from(self.0)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        assert_eq!(Indent::spaces(4).width(), 4);
        assert_eq!(Indent::TYPESCRIPT.width(), 2);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
    }
}
