// src/copy_button.rs
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard::{copy_payload, copy_text};

/// Each successful copy gets a new generation; a revert only applies to the
/// generation it was armed for, so a quick second copy keeps its full window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyState {
    pub generation: u64,
    pub copied: bool,
}

pub enum CopyAction {
    Copied(u64),
    Revert(u64),
}

impl Reducible for CopyState {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CopyAction::Copied(generation) => Rc::new(CopyState {
                generation,
                copied: true,
            }),
            CopyAction::Revert(generation) if generation == self.generation && self.copied => {
                Rc::new(CopyState {
                    copied: false,
                    ..*self
                })
            }
            CopyAction::Revert(_) => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    pub revert_ms: u32,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let state = use_reducer(CopyState::default);
    let counter = use_mut_ref(|| 0u64);

    let onclick = {
        let dispatcher = state.dispatcher();
        let text = props.text.clone();
        let revert_ms = props.revert_ms;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(payload) = copy_payload(&text).map(str::to_owned) else {
                return;
            };
            let dispatcher = dispatcher.clone();
            let counter = counter.clone();
            spawn_local(async move {
                if copy_text(&payload).await.is_err() {
                    return;
                }
                let generation = {
                    let mut c = counter.borrow_mut();
                    *c += 1;
                    *c
                };
                dispatcher.dispatch(CopyAction::Copied(generation));
                let _ = Timeout::new(revert_ms, move || {
                    dispatcher.dispatch(CopyAction::Revert(generation));
                })
                .forget();
            });
        })
    };

    let (tone, body) = if state.copied {
        (
            "btn-success",
            html! { <><i class="fas fa-check"></i>{ " Copied!" }</> },
        )
    } else {
        (
            "btn-outline-secondary",
            html! { <i class="fas fa-copy"></i> },
        )
    };

    html! {
        <button
            type="button"
            class={classes!("btn", "btn-sm", "btn-copy", tone)}
            data-copy={props.text.clone()}
            aria-label="Copy to clipboard"
            {onclick}
        >
            { body }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<CopyState>, action: CopyAction) -> Rc<CopyState> {
        state.reduce(action)
    }

    #[test]
    fn test_revert_after_delay_restores_label() {
        let s = apply(Rc::new(CopyState::default()), CopyAction::Copied(1));
        assert!(s.copied);
        let s = apply(s, CopyAction::Revert(1));
        assert!(!s.copied);
        assert_eq!(s.generation, 1);
    }

    #[test]
    fn test_stale_revert_ignored() {
        let s = apply(Rc::new(CopyState::default()), CopyAction::Copied(1));
        let s = apply(s, CopyAction::Copied(2));
        // first timer fires while the second copy is still showing
        let s = apply(s, CopyAction::Revert(1));
        assert!(s.copied);
        let s = apply(s, CopyAction::Revert(2));
        assert!(!s.copied);
    }

    #[test]
    fn test_revert_when_idle_is_noop() {
        let idle = Rc::new(CopyState::default());
        let s = apply(idle.clone(), CopyAction::Revert(0));
        assert!(Rc::ptr_eq(&idle, &s));
    }
}
