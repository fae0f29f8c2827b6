use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::selectors::{TOAST_CLASS, TOAST_CONTAINER_ID};
use crate::toast::{ToastId, ToastRequest, ToastStack};

/// Handle components use to raise toasts.
#[derive(Clone)]
pub struct Toaster {
    stack: Rc<RefCell<ToastStack>>,
    refresh: UseForceUpdateHandle,
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stack, &other.stack)
    }
}

impl Toaster {
    pub fn show(&self, request: ToastRequest) -> ToastId {
        let duration_ms = request.duration_ms;
        let id = self.stack.borrow_mut().show(request);
        self.refresh.force_update();

        let stack = Rc::clone(&self.stack);
        let refresh = self.refresh.clone();
        Timeout::new(duration_ms, move || {
            let removed = stack.borrow_mut().dismiss(id);
            if removed {
                refresh.force_update();
            }
        })
        .forget();

        id
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_mut_ref(ToastStack::default);
    let refresh = use_force_update();
    let toaster = Toaster {
        stack: Rc::clone(&stack),
        refresh,
    };

    let toasts = stack.borrow().iter().cloned().collect::<Vec<_>>();

    html! {
        <ContextProvider<Toaster> context={toaster}>
            {props.children.clone()}
            <div id={TOAST_CONTAINER_ID} aria-live="polite">
                { for toasts.into_iter().map(|toast| html! {
                    <div
                        key={toast.id.0}
                        class={classes!(TOAST_CLASS, toast.severity.class_name())}
                        role="status"
                    >
                        {toast.message}
                    </div>
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}
