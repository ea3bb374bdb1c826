//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal size and answers the layout
//! questions the screens ask: whether side-by-side panels should stack,
//! whether labels should shorten, how wide a dialog may be.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Use short navigation labels.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::MD_WIDTH
    }

    /// Two-column screens stack their panels below this width.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.bounded_width(30, 40, 60), 40);
        assert_eq!(LayoutContext::new(0, 0).percent_width(10), 1);
    }

    #[test]
    fn test_stacking() {
        assert!(LayoutContext::new(70, 30).should_stack_panels());
        assert!(!LayoutContext::new(120, 30).should_stack_panels());
        assert!(LayoutContext::new(120, 20).is_short());
    }
}
