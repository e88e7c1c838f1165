use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::RequestScope;
use crate::app::Route;
use crate::components::fields::{DateField, NumberField, SelectField, TextField};
use crate::components::icons::icon_arrow_left;
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::toast::use_toaster;
use crate::dues::today;
use crate::forms::{submit, ExpenseForm, FormMode, EXPENSE_MESSAGES};
use crate::hooks::{use_api, use_navigator};
use crate::models::ExpenseType;
use crate::pages::{field_setter, form_actions, secondary_button, SubmitFeedback, CARD};
use crate::validation::FieldErrors;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormPageProps {
    #[prop_or_default]
    pub id: Option<u64>,
}

#[function_component(ExpenseFormPage)]
pub fn expense_form_page(props: &ExpenseFormPageProps) -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let mode = FormMode::from_id(props.id);

    let form = use_state(|| ExpenseForm::new(today()));
    let errors = use_state(FieldErrors::new);
    let loading = use_state(|| mode.is_editing());
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let navigator = navigator.clone();
        let form = form.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |id: &Option<u64>| {
                let scope = RequestScope::new();
                if let Some(id) = *id {
                    let client = api.scoped(&scope);
                    spawn_local(async move {
                        match client.get_expense(id).await {
                            Ok(expense) => form.set(ExpenseForm::from_expense(&expense)),
                            Err(err) if err.is_aborted() => return,
                            Err(err) => {
                                tracing::error!(error = %err, id, "failed to load expense");
                                toaster.error("Gagal memuat data pengeluaran");
                                navigator.go(Route::Expenses);
                            }
                        }
                        loading.set(false);
                    });
                }
                move || drop(scope)
            },
            props.id,
        );
    }

    let on_description = field_setter(&form, &errors, "description", |f, v: String| f.description = v);
    let on_type = field_setter(&form, &errors, "expense_type", |f, v: String| {
        if let Some(expense_type) = ExpenseType::parse(&v) {
            f.expense_type = expense_type;
        }
    });
    let on_amount = field_setter(&form, &errors, "amount", |f, v: String| f.amount = v);
    let on_date = field_setter(&form, &errors, "expense_date", |f, v: String| f.expense_date = v);

    let on_submit = {
        let feedback = Rc::new(SubmitFeedback {
            messages: EXPENSE_MESSAGES,
            mode,
            errors: errors.clone(),
            saving: saving.clone(),
            toaster: toaster.clone(),
            navigator: navigator.clone(),
            back: Route::Expenses,
        });
        let api = api.clone();
        let form = form.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*form).clone();
            let api = api.clone();
            let feedback = feedback.clone();
            saving.set(true);
            spawn_local(async move {
                let payload = current.payload();
                let outcome = submit(current.validate(), move || async move {
                    match mode {
                        FormMode::Edit(id) => api.update_expense(id, &payload).await,
                        FormMode::Create => api.create_expense(&payload).await,
                    }
                })
                .await;
                feedback.apply(outcome);
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    let title = if mode.is_editing() { "Perbarui Data Pengeluaran" } else { "Catat Pengeluaran" };
    let type_options = ExpenseType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect::<Vec<_>>();
    let busy = *saving;

    html! {
        <>
            <PageHeader
                {title}
                action={secondary_button("Kembali", icon_arrow_left(), navigator.to(Route::Expenses))}
            />
            <form class={classes!(CARD, "p-6", "space-y-5")} onsubmit={on_submit}>
                <TextField
                    label="Deskripsi"
                    value={form.description.clone()}
                    on_input={on_description}
                    error={errors.get("description").map(str::to_string)}
                    required=true
                    disabled={busy}
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-5">
                    <SelectField
                        label="Jenis Pengeluaran"
                        value={form.expense_type.as_str()}
                        options={type_options}
                        on_change={on_type}
                        error={errors.get("expense_type").map(str::to_string)}
                        required=true
                        disabled={busy}
                    />
                    <NumberField
                        label="Jumlah (Rp)"
                        value={form.amount.clone()}
                        on_input={on_amount}
                        error={errors.get("amount").map(str::to_string)}
                        required=true
                        disabled={busy}
                    />
                    <DateField
                        label="Tanggal Pengeluaran"
                        value={form.expense_date.clone()}
                        on_input={on_date}
                        error={errors.get("expense_date").map(str::to_string)}
                        required=true
                        disabled={busy}
                    />
                </div>
                { form_actions(busy, navigator.to(Route::Expenses)) }
            </form>
        </>
    }
}
