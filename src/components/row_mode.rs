//! Row Mode Type
//!
//! Represents whether a todo row shows its text or an edit box.

/// Row display mode - either viewing the content or editing it inline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowMode {
    /// Content shown as plain text
    Viewing,
    /// Content shown in an input, pending confirmation
    Editing,
}
