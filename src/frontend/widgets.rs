use std::rc::Rc;

use gloo::console;
use gloo::dialogs::alert;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::dom::write_clipboard_text;
use super::toast::Toaster;
use crate::clipboard::copy_feedback;
use crate::config::RelayConfig;
use crate::contact::{
    outcome_message, ContactField, ContactForm, FormAction, FormModel, RelayError, RelayRequest,
};
use crate::selectors::{CONTACT_FORM_ID, COPY_TARGET_ATTR};

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a class="link" href={props.href.clone()} target="_blank" rel="noopener noreferrer">
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    pub label: AttrValue,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let toaster = use_context::<Toaster>();
    let button = use_node_ref();

    {
        let button = button.clone();
        use_effect_with(props.text.clone(), move |text| {
            if let Some(element) = button.cast::<Element>() {
                let _ = element.set_attribute(COPY_TARGET_ATTR, text);
            }
        });
    }

    let onclick = {
        let text = props.text.clone();
        let label = props.label.clone();
        Callback::from(move |_: MouseEvent| {
            let text = text.clone();
            let label = label.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let outcome = write_clipboard_text(&text).await;
                if let Err(err) = &outcome {
                    console::error!(format!("copy {label} failed: {err}"));
                }
                if let Some(toaster) = toaster {
                    toaster.show(copy_feedback(&label, &outcome));
                }
            });
        })
    };

    html! {
        <button
            ref={button}
            type="button"
            class="copy-btn"
            aria-label={format!("Copy {}", props.label)}
            onclick={onclick}
        >
            <i class="fas fa-copy" aria-hidden="true"></i>
        </button>
    }
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

async fn send_to_relay(config: &RelayConfig, form: &ContactForm) -> Result<(), RelayError> {
    let request = Request::post(config.endpoint)
        .json(&RelayRequest::new(config, form))
        .map_err(|err| RelayError::Encode(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| RelayError::Network(err.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(RelayError::Rejected { status, body })
}

fn on_edit(form: &UseReducerHandle<FormModel>, field: ContactField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| {
                event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
            });
        if let Some(value) = value {
            form.dispatch(FormAction::Edit(field, value));
        }
    })
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_reducer(FormModel::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if form.sending {
                return;
            }

            let fields = form.fields.clone();
            if let Err(err) = fields.validate() {
                alert(&err.to_string());
                return;
            }

            form.dispatch(FormAction::Sending);
            let form = form.clone();
            spawn_local(async move {
                let config = RelayConfig::from_build_env();
                let outcome = send_to_relay(&config, &fields).await;
                if let Err(err) = &outcome {
                    console::error!(format!("contact form submission failed: {err}"));
                }
                alert(outcome_message(&outcome));
                form.dispatch(FormAction::Settle(outcome));
            });
        })
    };

    html! {
        <form id={CONTACT_FORM_ID} class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="field">
                <i class="fas fa-user" aria-hidden="true"></i>
                <input
                    type="text"
                    name={ContactField::Name.as_str()}
                    placeholder="Name"
                    required=true
                    value={form.fields.name.clone()}
                    oninput={on_edit(&form, ContactField::Name)}
                />
            </div>
            <div class="field">
                <i class="fas fa-envelope" aria-hidden="true"></i>
                <input
                    type="email"
                    name={ContactField::Email.as_str()}
                    placeholder="Email"
                    required=true
                    value={form.fields.email.clone()}
                    oninput={on_edit(&form, ContactField::Email)}
                />
            </div>
            <div class="field">
                <i class="fas fa-phone-alt" aria-hidden="true"></i>
                <input
                    type="tel"
                    name={ContactField::Phone.as_str()}
                    placeholder="Phone"
                    value={form.fields.phone.clone()}
                    oninput={on_edit(&form, ContactField::Phone)}
                />
            </div>
            <div class="field message">
                <i class="fas fa-comment-dots" aria-hidden="true"></i>
                <textarea
                    name={ContactField::Message.as_str()}
                    placeholder="Message"
                    required=true
                    value={form.fields.message.clone()}
                    oninput={on_edit(&form, ContactField::Message)}
                />
            </div>
            <button type="submit" class="btn" disabled={form.sending}>
                { if form.sending { "Sending…" } else { "Submit" } }
                <i class="fa fa-paper-plane" aria-hidden="true"></i>
            </button>
        </form>
    }
}
