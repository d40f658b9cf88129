//! Global constants for monster-swatch

pub mod markup {
    /// Class carried by the marker appended to a rendered `code` element
    pub const SWATCH_CLASS: &str = "inline-color-swatch";

    /// Element that holds inline code in a rendered fragment
    pub const CODE_TAG: &str = "code";

    /// Block code wrapper; `code` inside it is never annotated
    pub const PRE_TAG: &str = "pre";

    /// Tag of the appended marker
    pub const SWATCH_TAG: &str = "span";

    /// Prefix of the marker's accessible label
    pub const ARIA_LABEL_PREFIX: &str = "Color swatch";
}

pub mod editor {
    /// Class carried by live-editing marks
    pub const MARK_CLASS: &str = "color-swatch-mark";

    /// CSS custom property the stylesheet reads to paint the swatch
    pub const SWATCH_VAR: &str = "--color-swatch";

    /// Inline code delimiter
    pub const CODE_DELIMITER: char = '`';
}

pub mod render {
    /// Cells painted for a swatch in the terminal host
    pub const SWATCH_CELLS: &str = "  ";
}

pub mod errors {
    // Error Codes
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const INVALID_CURSOR: &str = "INVALID_CURSOR";
    pub const INVALID_DELETE: &str = "INVALID_DELETE";
    pub const RANGE_ORDER: &str = "RANGE_ORDER";
}
