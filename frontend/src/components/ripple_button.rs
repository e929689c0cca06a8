use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::browser::dom::scroll_to_section;
use crate::browser::ripple::spawn_ripple;

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    pub label: AttrValue,
    /// Section anchor to scroll to, e.g. `#contact`.
    pub href: AttrValue,
    #[prop_or_default]
    pub primary: bool,
}

#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let node = use_node_ref();

    let onclick = {
        let node = node.clone();
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(button) = node.cast::<HtmlElement>() {
                spawn_ripple(&button, &e);
            }
            scroll_to_section(&href);
        })
    };

    html! {
        <a ref={node} class={classes!("btn", props.primary.then(|| "btn-primary"))} href={props.href.clone()} {onclick}>
            {props.label.clone()}
        </a>
    }
}
