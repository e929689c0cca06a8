use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser::submit::default_submitter;
use crate::browser::toasts::ToastHost;
use crate::interaction::forms::{cancellable, submit_form, validate, FormFields, FormKind, Submitter, SENDING_LABEL};

#[derive(Properties, PartialEq)]
pub struct SiteFormProps {
    pub kind: FormKind,
}

#[function_component(SiteForm)]
pub fn site_form(props: &SiteFormProps) -> Html {
    let kind = props.kind;
    let fields = use_state(FormFields::default);
    let sending = use_state(|| false);
    let submitter = use_state(default_submitter);
    let toasts = use_context::<ToastHost>();
    let in_flight = use_mut_ref(|| None::<futures::future::AbortHandle>);

    {
        let in_flight = in_flight.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(handle) = in_flight.borrow_mut().take() {
                        debug!("Abandoning in-flight {:?} submission", kind);
                        handle.abort();
                    }
                }
            },
            (),
        );
    }

    let update = {
        let fields = fields.clone();
        move |apply: fn(&mut FormFields, String), value: String| {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        }
    };
    let on_name = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| update(|f, v| f.name = v, e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| update(|f, v| f.email = v, e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            update(|f, v| f.message = v, e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let sending = sending.clone();
        let submitter: Rc<dyn Submitter> = (*submitter).clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            // The button only switches to "Sending..." once the form is valid.
            let will_send = validate(kind, &fields).is_ok();
            if will_send {
                sending.set(true);
            }

            let fields = fields.clone();
            let sending = sending.clone();
            let submitter = submitter.clone();
            let toasts = toasts.clone();
            let (handle, submission) = cancellable(async move {
                let mut current = (*fields).clone();
                let _ = submit_form(kind, &mut current, submitter.as_ref(), |message, severity| match &toasts {
                    Some(toasts) => {
                        toasts.notify(message, severity);
                    }
                    None => warn!("No toast host for {:?}", message),
                })
                .await;
                fields.set(current);
                if will_send {
                    sending.set(false);
                }
            });
            if let Some(previous) = in_flight.borrow_mut().replace(handle) {
                previous.abort();
            }
            spawn_local(async move {
                if submission.await.is_err() {
                    debug!("{:?} submission dropped before it finished", kind);
                }
            });
        })
    };

    let class = match kind {
        FormKind::Contact => "contact-form",
        FormKind::Newsletter => "newsletter-form",
    };
    let label = if *sending { SENDING_LABEL } else { kind.submit_label() };

    html! {
        <form {class} {onsubmit} novalidate={true}>
            if kind == FormKind::Contact {
                <input type="text" placeholder="Your name" value={fields.name.clone()} oninput={on_name} disabled={*sending} />
            }
            <input type="email" placeholder="Your email" value={fields.email.clone()} oninput={on_email} disabled={*sending} />
            if kind == FormKind::Contact {
                <textarea placeholder="Your message" rows="5" value={fields.message.clone()} oninput={on_message} disabled={*sending}></textarea>
            }
            <button type="submit" class="btn btn-primary" disabled={*sending}>{label}</button>
        </form>
    }
}
