// src/scan_form.rs

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::controller::{submit_outcome, FormAction, FormState, SubmitOutcome};
use crate::diag;

#[derive(Properties, PartialEq)]
pub struct ScanFormProps {
    pub action: AttrValue,
    pub method: AttrValue,
    pub form_ref: NodeRef,
}

#[function_component(ScanForm)]
pub fn scan_form(props: &ScanFormProps) -> Html {
    let state = use_reducer(FormState::default);
    let input_ref = use_node_ref();
    let hidden_ref = use_node_ref();

    let oninput = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            dispatcher.dispatch(FormAction::Input(v));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let input_ref = input_ref.clone();
        let hidden_ref = hidden_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            // the first submit is already on its way
            if state.is_submitting() {
                e.prevent_default();
                return;
            }

            let input = input_ref.cast::<HtmlInputElement>();
            let value = input
                .as_ref()
                .map(|i| i.value())
                .unwrap_or_else(|| state.value.clone());

            match submit_outcome(&value) {
                SubmitOutcome::Blocked => {
                    e.prevent_default();
                    state.dispatch(FormAction::RejectEmpty);
                    if let Some(input) = input {
                        let _ = input.focus();
                    }
                }
                SubmitOutcome::Proceed => {
                    // disabled fields are left out of the POST body
                    if let Some(hidden) = hidden_ref.cast::<HtmlInputElement>() {
                        hidden.set_value(value.trim());
                    }
                    diag::info("submitting scan request");
                    state.dispatch(FormAction::BeginSubmit);
                }
            }
        })
    };

    let disabled = state.controls_disabled();

    html! {
        <form
            id="scanForm"
            ref={props.form_ref.clone()}
            action={props.action.clone()}
            method={props.method.clone()}
            {onsubmit}
        >
            <div class="field">
                <label for="scan_input" class="form-label">
                    { "File hash or IP address" }
                    <i
                        class="fas fa-info-circle ms-1"
                        data-bs-toggle="tooltip"
                        title="MD5, SHA-1 or SHA-256 hex digest, or an IPv4 address"
                    ></i>
                </label>
                <input
                    id="scan_input"
                    ref={input_ref}
                    type="text"
                    class={classes!("form-control", state.field.class())}
                    placeholder="e.g. 44d88612fea8a8f36de82e1278abb02f or 8.8.8.8"
                    autocomplete="off"
                    spellcheck="false"
                    value={state.value.clone()}
                    {disabled}
                    {oninput}
                />
                <input
                    type="hidden"
                    name="scan_input"
                    ref={hidden_ref}
                    value={state.submitted_value().to_string()}
                />

                if let Some(fb) = &state.feedback {
                    <div class={classes!("form-text", "input-feedback", fb.text_class())}>
                        <i class={classes!("fas", fb.icon(), "me-1")}></i>
                        { fb.message() }
                        if let Some(detail) = fb.detail() {
                            <span class="kind">{ format!(" · {detail}") }</span>
                        }
                    </div>
                }
                if let Some(err) = &state.error {
                    <div class="invalid-feedback input-error">{ err.clone() }</div>
                }
            </div>

            <button
                id="scanButton"
                type="submit"
                class={classes!(state.button_class())}
                {disabled}
            >
                <i class={classes!("fas", state.button_icon(), "me-2")}></i>
                { state.button_label() }
            </button>
            <p class="small hint">{ "Ctrl/⌘ + Enter submits from anywhere on the page." }</p>
        </form>
    }
}
