use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::api::RequestScope;
use crate::app::Route;
use crate::components::fields::{FileField, PhoneField, RadioGroup, SwitchField, TextField};
use crate::components::icons::icon_arrow_left;
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::toast::use_toaster;
use crate::forms::{submit, FormMode, ResidentForm, RESIDENT_MESSAGES};
use crate::hooks::{use_api, use_navigator};
use crate::models::ResidentStatus;
use crate::pages::{field_setter, form_actions, secondary_button, SubmitFeedback, CARD};
use crate::validation::FieldErrors;

#[derive(Properties, PartialEq)]
pub struct ResidentFormPageProps {
    #[prop_or_default]
    pub id: Option<u64>,
}

#[function_component(ResidentFormPage)]
pub fn resident_form_page(props: &ResidentFormPageProps) -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let mode = FormMode::from_id(props.id);

    let form = use_state(ResidentForm::default);
    let photo = use_state(|| None::<File>);
    let stored_photo = use_state(|| None::<String>);
    let errors = use_state(FieldErrors::new);
    let loading = use_state(|| mode.is_editing());
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let navigator = navigator.clone();
        let form = form.clone();
        let stored_photo = stored_photo.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |id: &Option<u64>| {
                let scope = RequestScope::new();
                if let Some(id) = *id {
                    let client = api.scoped(&scope);
                    spawn_local(async move {
                        match client.get_resident(id).await {
                            Ok(resident) => {
                                form.set(ResidentForm::from_resident(&resident));
                                stored_photo.set(
                                    resident.id_card_photo.as_deref().map(|p| client.storage_url(p)),
                                );
                            }
                            Err(err) if err.is_aborted() => return,
                            Err(err) => {
                                tracing::error!(error = %err, id, "failed to load resident");
                                toaster.error("Gagal memuat data penghuni");
                                navigator.go(Route::Residents);
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

    let on_name = field_setter(&form, &errors, "name", |f, v: String| f.name = v);
    let on_phone = field_setter(&form, &errors, "phone_number", |f, v: String| f.phone_number = v);
    let on_status = field_setter(&form, &errors, "resident_status", |f, v: String| {
        if let Some(status) = ResidentStatus::parse(&v) {
            f.resident_status = status;
        }
    });
    let on_married = field_setter(&form, &errors, "is_married", |f, v: bool| f.is_married = v);
    let on_photo = {
        let photo = photo.clone();
        let set_flag = field_setter(&form, &errors, "id_card_photo", |f, v: bool| f.has_photo = v);
        Callback::from(move |file: Option<File>| {
            set_flag.emit(file.is_some());
            photo.set(file);
        })
    };

    let on_submit = {
        let feedback = Rc::new(SubmitFeedback {
            messages: RESIDENT_MESSAGES,
            mode,
            errors: errors.clone(),
            saving: saving.clone(),
            toaster: toaster.clone(),
            navigator: navigator.clone(),
            back: Route::Residents,
        });
        let api = api.clone();
        let form = form.clone();
        let photo = photo.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*form).clone();
            let file = (*photo).clone();
            let api = api.clone();
            let feedback = feedback.clone();
            saving.set(true);
            spawn_local(async move {
                let payload = current.payload();
                let outcome = submit(current.validate(mode), move || async move {
                    match mode {
                        FormMode::Edit(id) => api.update_resident(id, &payload, file.as_ref()).await,
                        FormMode::Create => api.create_resident(&payload, file.as_ref()).await,
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

    let title = if mode.is_editing() { "Ubah Data Penghuni" } else { "Tambah Penghuni Baru" };
    let status_options = ResidentStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect::<Vec<_>>();

    html! {
        <>
            <PageHeader
                {title}
                action={secondary_button("Kembali", icon_arrow_left(), navigator.to(Route::Residents))}
            />
            <form class={classes!(CARD, "p-6", "space-y-5")} onsubmit={on_submit}>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                    <TextField
                        label="Nama Lengkap"
                        value={form.name.clone()}
                        on_input={on_name}
                        error={errors.get("name").map(str::to_string)}
                        required=true
                    />
                    <PhoneField
                        label="Nomor Telepon"
                        value={form.phone_number.clone()}
                        on_input={on_phone}
                        error={errors.get("phone_number").map(str::to_string)}
                        helper="10-13 digit, contoh 081234567890"
                        required=true
                    />
                    <RadioGroup
                        label="Status Penghuni"
                        name="resident_status"
                        value={form.resident_status.as_str()}
                        options={status_options}
                        on_change={on_status}
                        error={errors.get("resident_status").map(str::to_string)}
                        required=true
                    />
                    <SwitchField
                        label="Status Pernikahan"
                        checked={form.is_married}
                        on_change={on_married}
                        state_labels={(AttrValue::Static("Menikah"), AttrValue::Static("Belum Menikah"))}
                    />
                </div>
                <FileField
                    label="Foto KTP"
                    on_select={on_photo}
                    current_url={(*stored_photo).clone().map(AttrValue::from)}
                    error={errors.get("id_card_photo").map(str::to_string)}
                    helper={if mode.is_editing() { Some(AttrValue::Static("Kosongkan jika tidak ingin mengganti foto")) } else { None }}
                    required={!mode.is_editing()}
                />
                { form_actions(*saving, navigator.to(Route::Residents)) }
            </form>
        </>
    }
}
