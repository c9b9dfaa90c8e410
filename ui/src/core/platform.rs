//! Page-side effects with no Rust-side state: smooth scrolling.
//!
//! Scripts are built as plain strings so their shape can be checked without a
//! browser, then handed to the renderer's `document::eval`.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::content::Anchor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Back,
    Forward,
}

impl ScrollDirection {
    fn sign(self) -> i8 {
        match self {
            ScrollDirection::Back => -1,
            ScrollDirection::Forward => 1,
        }
    }
}

/// Scrolls so the section starts `header_offset_px` below the viewport top.
/// A missing section is a no-op.
pub fn scroll_to_section_script(anchor: Anchor, header_offset_px: u32) -> String {
    format!(
        r#"return (function(){{
  const el = document.getElementById("{id}");
  if (!el) return false;
  const top = el.getBoundingClientRect().top + window.pageYOffset - {header_offset_px};
  window.scrollTo({{ top: top, behavior: "smooth" }});
  return true;
}})()"#,
        id = anchor.id(),
    )
}

pub fn scroll_into_view_script(anchor: Anchor) -> String {
    format!(
        r#"return (function(){{
  const el = document.getElementById("{id}");
  if (el) el.scrollIntoView({{ behavior: "smooth" }});
  return !!el;
}})()"#,
        id = anchor.id(),
    )
}

/// Pages a horizontal strip by one visible width.
pub fn scroll_strip_script(container_id: &str, direction: ScrollDirection) -> String {
    format!(
        r#"return (function(){{
  const el = document.getElementById("{container_id}");
  if (!el) return false;
  el.scrollBy({{ left: {sign} * el.clientWidth, behavior: "smooth" }});
  return true;
}})()"#,
        sign = direction.sign(),
    )
}

/// Fire-and-forget evaluation. Must be called from inside the component tree.
pub fn run_script(script: String) {
    spawn(async move {
        if let Err(err) = document::eval(&script).await {
            warn!("page script failed: {err:?}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_scroll_subtracts_header_height() {
        let js = scroll_to_section_script(Anchor::Faq, 64);
        assert!(js.contains(r#"getElementById("faq")"#));
        assert!(js.contains("window.pageYOffset - 64"));
        assert!(js.contains("if (!el) return false;"));
    }

    #[test]
    fn strip_scroll_direction_sets_sign() {
        assert!(scroll_strip_script("strip", ScrollDirection::Forward).contains("left: 1 * el.clientWidth"));
        assert!(scroll_strip_script("strip", ScrollDirection::Back).contains("left: -1 * el.clientWidth"));
    }

    #[test]
    fn into_view_targets_anchor() {
        assert!(scroll_into_view_script(Anchor::Newsletter).contains(r#"getElementById("newsletter")"#));
    }
}
