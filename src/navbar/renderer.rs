//! Navbar item rendering
//!
//! The dropdown component does not emit markup itself; it hands a
//! [`NavbarItem`] to a renderer. [`HtmlNavbarRenderer`] produces the classic
//! theme's markup: `navbar__*`/`dropdown__*` classes on desktop and
//! `menu__*` classes inside the collapsible mobile menu.

use serde_json::Value;
use tracing::debug;

use crate::navbar::item::{NavbarItem, NavbarItemProps};

/// Trait turning a composed navbar item into markup
pub trait NavbarItemRenderer {
    fn render(&self, item: &NavbarItem) -> String;
}

/// Classic-theme HTML renderer
#[derive(Debug, Default)]
pub struct HtmlNavbarRenderer;

impl HtmlNavbarRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Split passthrough props into extra root classes (`className`) and
    /// plain attributes. Non-scalar prop values are skipped.
    fn root_extras(props: &NavbarItemProps) -> (String, String) {
        let mut extra_class = String::new();
        let mut attributes = String::new();

        for (key, value) in props {
            let Some(value) = scalar_to_string(value) else {
                debug!(key = %key, "skipping non-scalar navbar item prop");
                continue;
            };
            if key == "className" {
                extra_class = format!(" {}", escape_html(&value));
            } else {
                attributes.push_str(&format!(" {}=\"{}\"", key, escape_html(&value)));
            }
        }

        (extra_class, attributes)
    }

    fn render_desktop(item: &NavbarItem) -> String {
        let (extra_class, attributes) = Self::root_extras(&item.props);
        let label = item.label.as_deref().unwrap_or("");

        match &item.items {
            None => {
                let mut html = format!(
                    "<a class=\"navbar__item navbar__link{extra_class}\"{attributes}"
                );
                if let Some(to) = &item.to {
                    html.push_str(&format!(" href=\"{}\"", escape_html(to)));
                }
                html.push_str(&format!(">{}</a>", escape_html(label)));
                html
            }
            Some(entries) => {
                let mut html = format!(
                    "<div class=\"navbar__item dropdown dropdown--hoverable{extra_class}\"{attributes}>"
                );
                html.push_str(&anchor("navbar__link", item.to.as_deref(), label));
                html.push_str("<ul class=\"dropdown__menu\">");
                for entry in entries {
                    let class = if entry.active {
                        "dropdown__link dropdown__link--active"
                    } else {
                        "dropdown__link"
                    };
                    html.push_str("<li>");
                    html.push_str(&anchor(class, entry.to.as_deref(), &entry.label));
                    html.push_str("</li>");
                }
                html.push_str("</ul></div>");
                html
            }
        }
    }

    fn render_mobile(item: &NavbarItem) -> String {
        let (extra_class, attributes) = Self::root_extras(&item.props);
        let label = item.label.as_deref().unwrap_or("");

        let mut html = format!("<li class=\"menu__list-item{extra_class}\"{attributes}>");
        match &item.items {
            None => {
                html.push_str(&anchor("menu__link", item.to.as_deref(), label));
            }
            Some(entries) => {
                // The trigger is not navigable; it only opens the entry list.
                html.push_str(&format!(
                    "<a class=\"menu__link menu__link--sublist\" role=\"button\">{}</a>",
                    escape_html(label)
                ));
                html.push_str("<ul class=\"menu__list\">");
                for entry in entries {
                    let class = if entry.active {
                        "menu__link menu__link--active"
                    } else {
                        "menu__link"
                    };
                    html.push_str("<li class=\"menu__list-item\">");
                    html.push_str(&anchor(class, entry.to.as_deref(), &entry.label));
                    html.push_str("</li>");
                }
                html.push_str("</ul>");
            }
        }
        html.push_str("</li>");
        html
    }
}

impl NavbarItemRenderer for HtmlNavbarRenderer {
    fn render(&self, item: &NavbarItem) -> String {
        if item.mobile {
            Self::render_mobile(item)
        } else {
            Self::render_desktop(item)
        }
    }
}

/// An anchor without a resolved target renders without `href`: visibly
/// broken, never a panic.
fn anchor(class: &str, href: Option<&str>, label: &str) -> String {
    match href {
        Some(href) => format!(
            "<a class=\"{class}\" href=\"{}\">{}</a>",
            escape_html(href),
            escape_html(label)
        ),
        None => format!("<a class=\"{class}\">{}</a>", escape_html(label)),
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navbar::item::DropdownEntry;
    use serde_json::json;

    fn link_item() -> NavbarItem {
        NavbarItem {
            mobile: false,
            label: Some("2.0".to_string()),
            to: Some("/docs/2.0/intro".to_string()),
            items: None,
            props: NavbarItemProps::new(),
        }
    }

    fn dropdown_item() -> NavbarItem {
        NavbarItem {
            items: Some(vec![
                DropdownEntry {
                    label: "2.0".to_string(),
                    to: Some("/docs/2.0/intro".to_string()),
                    active: true,
                    version_name: "2.0".to_string(),
                },
                DropdownEntry {
                    label: "1.0".to_string(),
                    to: Some("/docs/1.0/intro".to_string()),
                    active: false,
                    version_name: "1.0".to_string(),
                },
            ]),
            ..link_item()
        }
    }

    #[test]
    fn single_link_renders_as_plain_anchor() {
        let html = HtmlNavbarRenderer::new().render(&link_item());
        assert_eq!(
            html,
            "<a class=\"navbar__item navbar__link\" href=\"/docs/2.0/intro\">2.0</a>"
        );
    }

    #[test]
    fn dropdown_renders_trigger_and_entries_in_order() {
        let html = HtmlNavbarRenderer::new().render(&dropdown_item());

        assert!(html.starts_with("<div class=\"navbar__item dropdown dropdown--hoverable\">"));
        assert!(html.contains(
            "<a class=\"dropdown__link dropdown__link--active\" href=\"/docs/2.0/intro\">2.0</a>"
        ));
        assert!(html.contains("<a class=\"dropdown__link\" href=\"/docs/1.0/intro\">1.0</a>"));
        assert!(
            html.find("2.0</a>").unwrap() < html.find("1.0</a>").unwrap(),
            "entries must keep source order"
        );
    }

    #[test]
    fn mobile_dropdown_trigger_is_not_navigable() {
        let item = NavbarItem {
            mobile: true,
            label: Some("Versions".to_string()),
            to: None,
            ..dropdown_item()
        };
        let html = HtmlNavbarRenderer::new().render(&item);

        assert!(html.starts_with("<li class=\"menu__list-item\">"));
        assert!(html.contains(
            "<a class=\"menu__link menu__link--sublist\" role=\"button\">Versions</a>"
        ));
        assert!(html.contains("<a class=\"menu__link menu__link--active\""));
        assert!(!html.contains("menu__link--sublist\" role=\"button\" href"));
    }

    #[test]
    fn missing_label_and_target_render_an_empty_anchor() {
        let item = NavbarItem {
            label: None,
            to: None,
            ..link_item()
        };
        let html = HtmlNavbarRenderer::new().render(&item);
        assert_eq!(html, "<a class=\"navbar__item navbar__link\"></a>");
    }

    #[test]
    fn labels_and_targets_are_html_escaped() {
        let item = NavbarItem {
            label: Some("<next> & \"beta\"".to_string()),
            to: Some("/docs/a&b".to_string()),
            ..link_item()
        };
        let html = HtmlNavbarRenderer::new().render(&item);

        assert!(html.contains("&lt;next&gt; &amp; &quot;beta&quot;"));
        assert!(html.contains("href=\"/docs/a&amp;b\""));
    }

    #[test]
    fn class_name_prop_merges_into_root_classes() {
        let mut item = link_item();
        item.props
            .insert("className".to_string(), json!("navbar-versions"));

        let html = HtmlNavbarRenderer::new().render(&item);
        assert!(html.starts_with("<a class=\"navbar__item navbar__link navbar-versions\""));
    }

    #[test]
    fn scalar_props_become_root_attributes() {
        let mut item = link_item();
        item.props
            .insert("aria-label".to_string(), json!("Documentation versions"));
        item.props.insert("data-order".to_string(), json!(3));

        let html = HtmlNavbarRenderer::new().render(&item);
        assert!(html.contains(" aria-label=\"Documentation versions\""));
        assert!(html.contains(" data-order=\"3\""));
    }

    #[test]
    fn non_scalar_props_are_skipped() {
        let mut item = link_item();
        item.props.insert("nested".to_string(), json!({"a": 1}));

        let html = HtmlNavbarRenderer::new().render(&item);
        assert!(!html.contains("nested"));
    }
}
