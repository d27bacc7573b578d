//! Generic navbar item model

use indexmap::IndexMap;

/// Arbitrary extra display options forwarded unchanged to the renderer
/// (e.g., `className`, `aria-label`)
pub type NavbarItemProps = IndexMap<String, serde_json::Value>;

/// One entry of a navbar dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownEntry {
    /// Display string of the entry
    pub label: String,
    /// Link target; `None` when the target document could not be resolved
    pub to: Option<String>,
    /// Whether this entry represents what the visitor is currently viewing
    pub active: bool,
    /// Version selected when the visitor clicks this entry
    pub version_name: String,
}

/// A renderable navigation element: a single link, or a dropdown trigger
/// plus its entry list when `items` is present
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarItem {
    /// Compact/mobile layout instead of the desktop navbar
    pub mobile: bool,
    /// Label of the link or of the collapsed dropdown; `None` degrades to an
    /// empty label rather than failing the render
    pub label: Option<String>,
    /// Link target of the collapsed state; always `None` on mobile
    pub to: Option<String>,
    /// Dropdown entries; `None` renders a plain link
    pub items: Option<Vec<DropdownEntry>>,
    /// Passthrough display options
    pub props: NavbarItemProps,
}
