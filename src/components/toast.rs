use std::time::Duration;

use wasm_bindgen_futures::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::toast::{Toast, ToastAction, ToastLevel, ToastQueue};

const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Handle for showing toasts, provided by [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct Toaster {
    push: Callback<Toast>,
}

impl Toaster {
    pub fn show(&self, toast: Toast) {
        self.push.emit(toast);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Toast::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast::error(message));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            push: Callback::noop(),
        }
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = {
        let dispatcher = queue.dispatcher();
        use_memo(
            move |_| Toaster {
                push: Callback::from(move |toast| dispatcher.dispatch(ToastAction::Push(toast))),
            },
            (),
        )
    };
    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
                { for queue.items.iter().map(|(id, toast)| html! {
                    <ToastItem key={*id} id={*id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u64,
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u64| {
                let id = *id;
                spawn_local(async move {
                    sleep(DISMISS_AFTER).await;
                    on_dismiss.emit(id);
                });
                || ()
            },
            props.id,
        );
    }

    let tone = match props.toast.level {
        ToastLevel::Success => "bg-emerald-600",
        ToastLevel::Error => "bg-red-600",
    };
    let id = props.id;
    let onclick = props.on_dismiss.reform(move |_: MouseEvent| id);

    html! {
        <div class={classes!("flex", "items-start", "gap-3", "text-white", "text-sm", "rounded-[10px]", "shadow-lg", "px-4", "py-3", tone)} role="status">
            <p class="flex-1">{ props.toast.message.clone() }</p>
            <button type="button" class="opacity-80 hover:opacity-100" aria-label="Tutup" {onclick}>{"×"}</button>
        </div>
    }
}
