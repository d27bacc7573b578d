//! Navbar layer
//!
//! Composes the version switcher shown in the site's top navigation and
//! renders it through a generic navbar-item renderer.
//!
//! # Modules
//!
//! - [`item`]: generic navbar item model (link or dropdown)
//! - [`dropdown`]: version switcher composition over the injected providers
//! - [`renderer`]: `NavbarItemRenderer` trait and the classic HTML renderer

pub mod dropdown;
pub mod item;
pub mod renderer;

pub use dropdown::{DocsVersionDropdown, MOBILE_DROPDOWN_LABEL};
pub use item::{DropdownEntry, NavbarItem, NavbarItemProps};
pub use renderer::{HtmlNavbarRenderer, NavbarItemRenderer};
