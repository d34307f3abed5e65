// src/scroll.rs
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// `"#results"` -> `Some("results")`. Bare `"#"` and non-fragment hrefs give `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to(id: &str) -> bool {
    let Some(el) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(id) = anchor_target(&href) {
                scroll_to(id);
            }
        })
    };

    html! {
        <a class={props.class.clone()} href={props.href.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#scan"), Some("scan"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/scan"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }
}
