use log::info;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser::dom::document;
use crate::browser::toasts::ToastHost;
use crate::interaction::key_sequence::KeySequence;
use crate::interaction::severity::Severity;

pub const EASTER_EGG_CLASS: &str = "easter-egg";

#[derive(Properties, PartialEq)]
pub struct EasterEggProps {
    pub message: AttrValue,
}

/// Listens for the Konami code and celebrates when it is typed.
#[function_component(EasterEgg)]
pub fn easter_egg(props: &EasterEggProps) -> Html {
    let sequence = use_mut_ref(KeySequence::konami);
    let toasts = use_context::<ToastHost>();
    let message = props.message.clone();

    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if !sequence.borrow_mut().push(&e.code()) {
            return;
        }
        info!("Easter egg unlocked");
        if let Some(toasts) = &toasts {
            toasts.notify(&message, Severity::Success);
        }
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.class_list().toggle(EASTER_EGG_CLASS);
        }
    });

    html! {}
}
