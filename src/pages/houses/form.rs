use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::RequestScope;
use crate::app::Route;
use crate::components::fields::{SelectField, TextField};
use crate::components::icons::icon_arrow_left;
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::toast::use_toaster;
use crate::forms::{submit, FormMode, HouseForm, HOUSE_MESSAGES};
use crate::hooks::{use_api, use_navigator};
use crate::models::OccupancyStatus;
use crate::pages::{field_setter, form_actions, secondary_button, SubmitFeedback, CARD};
use crate::validation::FieldErrors;

#[derive(Properties, PartialEq)]
pub struct HouseFormPageProps {
    #[prop_or_default]
    pub id: Option<u64>,
}

#[function_component(HouseFormPage)]
pub fn house_form_page(props: &HouseFormPageProps) -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let mode = FormMode::from_id(props.id);

    let form = use_state(HouseForm::default);
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
                        match client.get_house(id).await {
                            Ok(detail) => form.set(HouseForm::from_house(&detail.house)),
                            Err(err) if err.is_aborted() => return,
                            Err(err) => {
                                tracing::error!(error = %err, id, "failed to load house");
                                toaster.error("Gagal memuat data rumah");
                                navigator.go(Route::Houses);
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

    let on_number = field_setter(&form, &errors, "house_number", |f, v: String| f.house_number = v);
    let on_status = field_setter(&form, &errors, "occupancy_status", |f, v: String| {
        if let Some(status) = OccupancyStatus::parse(&v) {
            f.occupancy_status = status;
        }
    });

    let on_submit = {
        let feedback = Rc::new(SubmitFeedback {
            messages: HOUSE_MESSAGES,
            mode,
            errors: errors.clone(),
            saving: saving.clone(),
            toaster: toaster.clone(),
            navigator: navigator.clone(),
            back: Route::Houses,
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
                        FormMode::Edit(id) => api.update_house(id, &payload).await,
                        FormMode::Create => api.create_house(&payload).await,
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

    let title = if mode.is_editing() { "Perbarui Data Rumah" } else { "Tambah Rumah Baru" };
    let status_options = OccupancyStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect::<Vec<_>>();

    html! {
        <>
            <PageHeader
                {title}
                action={secondary_button("Kembali", icon_arrow_left(), navigator.to(Route::Houses))}
            />
            <form class={classes!(CARD, "p-6", "space-y-5")} onsubmit={on_submit}>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                    <TextField
                        label="Nomor Rumah"
                        value={form.house_number.clone()}
                        on_input={on_number}
                        error={errors.get("house_number").map(str::to_string)}
                        placeholder="Contoh: A-12"
                        required=true
                    />
                    <SelectField
                        label="Status Hunian"
                        value={form.occupancy_status.as_str()}
                        options={status_options}
                        on_change={on_status}
                        error={errors.get("occupancy_status").map(str::to_string)}
                        required=true
                    />
                </div>
                { form_actions(*saving, navigator.to(Route::Houses)) }
            </form>
        </>
    }
}
