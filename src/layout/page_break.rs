use crate::units::Pt;

/// Whether a block fits below the cursor on the current page
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PageBreakDecision {
    Fits,
    /// The block does not fit. `remaining` is the usable height left on the
    /// page, which row splitting uses to decide what can still go here.
    /// It may be negative when the cursor already sits inside the margins.
    BreakRequired { remaining: Pt },
}

/// Decide whether `required` points of content fit below `cursor_y`.
///
/// `margin_top` is the top margin of the block being placed and is applied
/// once, at the start of the block. `margin_bottom` is the bottom margin of the
/// page, and `reserved_footer` is the height kept free above it for the footer.
/// Content fits only if it ends strictly above the bottom margin.
pub fn check_fits(
    cursor_y: Pt,
    required: Pt,
    margin_top: Pt,
    margin_bottom: Pt,
    reserved_footer: Pt,
) -> PageBreakDecision {
    if cursor_y - margin_top - required - reserved_footer > margin_bottom {
        PageBreakDecision::Fits
    } else {
        PageBreakDecision::BreakRequired {
            remaining: cursor_y - margin_top - reserved_footer - margin_bottom,
        }
    }
}
