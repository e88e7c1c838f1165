//! One module per screen. Helpers here hold the table and button markup and
//! the submit bookkeeping every form screen shares.

pub mod dashboard;
pub mod expenses;
pub mod houses;
pub mod payments;
pub mod reports;
pub mod residents;

use yew::prelude::*;

use crate::app::{Navigator, Route};
use crate::components::icons::{icon_edit, icon_trash};
use crate::components::toast::Toaster;
use crate::forms::{FormMessages, FormMode, SubmitOutcome};
use crate::validation::FieldErrors;

const PRIMARY_BUTTON: &str = "bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-[12px] font-bold flex items-center justify-center gap-2 disabled:opacity-60";
const SECONDARY_BUTTON: &str = "bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-[10px] text-[12px] font-bold flex items-center justify-center gap-2";
const CARD: &str = "bg-card rounded-2xl shadow-md border border-border overflow-hidden";

fn primary_button(label: &'static str, icon: Html, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button type="button" class={PRIMARY_BUTTON} {onclick}>
            { icon }
            <span>{ label }</span>
        </button>
    }
}

fn secondary_button(label: &'static str, icon: Html, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button type="button" class={SECONDARY_BUTTON} {onclick}>
            { icon }
            <span>{ label }</span>
        </button>
    }
}

/// Save and cancel buttons at the bottom of a form.
fn form_actions(saving: bool, on_cancel: Callback<MouseEvent>) -> Html {
    html! {
        <div class="flex justify-end gap-3 pt-4 border-t border-border">
            <button type="button" class={SECONDARY_BUTTON} onclick={on_cancel}>{"Batal"}</button>
            <button type="submit" class={PRIMARY_BUTTON} disabled={saving}>
                { if saving { "Menyimpan..." } else { "Simpan" } }
            </button>
        </div>
    }
}

fn table(headers: &[&'static str], rows: Html) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="w-full text-left border-collapse">
                <thead>
                    <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                        { for headers.iter().map(|h| html! { <th class="px-6 py-4 font-bold">{ *h }</th> }) }
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">{ rows }</tbody>
            </table>
        </div>
    }
}

fn row_actions(on_edit: Callback<MouseEvent>, on_delete: Callback<MouseEvent>) -> Html {
    html! {
        <div class="flex justify-end gap-1">
            <button type="button" class="p-2 rounded-full text-[#173E63] hover:bg-secondary" aria-label="Ubah" onclick={on_edit}>{ icon_edit() }</button>
            <button type="button" class="p-2 rounded-full text-red-600 hover:bg-red-50" aria-label="Hapus" onclick={on_delete}>{ icon_trash() }</button>
        </div>
    }
}

/// Setter for one form field that also clears that field's error.
fn field_setter<F, V>(
    form: &UseStateHandle<F>,
    errors: &UseStateHandle<FieldErrors>,
    field: &'static str,
    apply: fn(&mut F, V),
) -> Callback<V>
where
    F: Clone + 'static,
    V: 'static,
{
    let form = form.clone();
    let errors = errors.clone();
    Callback::from(move |value: V| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
        if errors.has(field) {
            errors.set(errors.without(field));
        }
    })
}

/// Shows the outcome of a form submission: toast, field errors, and the way
/// back to the list once saved.
struct SubmitFeedback {
    messages: FormMessages,
    mode: FormMode,
    errors: UseStateHandle<FieldErrors>,
    saving: UseStateHandle<bool>,
    toaster: Toaster,
    navigator: Navigator,
    back: Route,
}

impl SubmitFeedback {
    fn apply(&self, outcome: SubmitOutcome) {
        if let Some(toast) = outcome.toast(&self.messages, self.mode) {
            self.toaster.show(toast);
        }
        if let Some(errors) = outcome.field_errors() {
            self.errors.set(errors.clone());
        }
        if let SubmitOutcome::Failed(err) = &outcome {
            tracing::error!(error = %err, path = %self.back.path(), "failed to save form");
        }
        self.saving.set(false);
        if outcome.is_saved() {
            self.navigator.go(self.back);
        }
    }
}
