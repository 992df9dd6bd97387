//! Responsive layout decisions.
//!
//! [`LayoutContext`] wraps the frame size and answers the few questions
//! panels ask about it: whether to stack side-by-side panes, whether to use
//! short labels, and how wide dialogs should be.

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of the terminal, clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        let width = ((self.width as u32 * percentage as u32) / 100) as u16;
        width.clamp(min, max).min(self.width)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Side-by-side panes become a vertical stack below 80 columns.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        let wide = LayoutContext::new(120, 40);
        assert!(!wide.is_compact());
        assert!(!wide.should_stack_panels());

        let narrow = LayoutContext::new(70, 40);
        assert!(narrow.is_narrow());
        assert!(narrow.should_stack_panels());
        assert!(!narrow.is_extra_small());

        let tiny = LayoutContext::new(50, 12);
        assert!(tiny.is_extra_small());
        assert!(tiny.is_short());
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.bounded_width(50, 30, 60), 50);
        assert_eq!(ctx.bounded_width(10, 30, 60), 30);
        assert_eq!(ctx.bounded_width(90, 30, 60), 60);
        assert_eq!(LayoutContext::new(20, 10).bounded_width(50, 30, 60), 20);
    }
}
