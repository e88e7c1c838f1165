use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, RequestScope};
use crate::app::Route;
use crate::components::fields::{DateField, NumberField, SelectField, SwitchField};
use crate::components::icons::icon_arrow_left;
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::toast::use_toaster;
use crate::dues::{monthly_tariff, today};
use crate::error::ApiError;
use crate::format::format_rupiah;
use crate::forms::{link_current_residents, submit, FormMode, PaymentForm, ResidentOption, PAYMENT_MESSAGES};
use crate::hooks::{use_api, use_navigator};
use crate::models::{House, PaymentPeriod, PaymentType};
use crate::pages::{field_setter, form_actions, secondary_button, SubmitFeedback, CARD};
use crate::validation::FieldErrors;

/// Current residents of a house that a payment can be linked to.
async fn resident_options(client: &ApiClient, house_id: u64) -> Result<Vec<ResidentOption>, ApiError> {
    let detail = client.get_house(house_id).await?;
    if detail.current_residents.is_empty() {
        return Ok(Vec::new());
    }
    let history = client.house_history(house_id).await?;
    Ok(link_current_residents(&detail.current_residents, &history))
}

fn type_options() -> Vec<(String, String)> {
    PaymentType::ALL
        .iter()
        .map(|t| {
            let label = format!("{} ({})", t.label(), format_rupiah(monthly_tariff(*t) as f64));
            (t.as_str().to_string(), label)
        })
        .collect()
}

fn period_options() -> Vec<(String, String)> {
    PaymentPeriod::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PaymentFormPageProps {
    #[prop_or_default]
    pub id: Option<u64>,
}

#[function_component(PaymentFormPage)]
pub fn payment_form_page(props: &PaymentFormPageProps) -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let mode = FormMode::from_id(props.id);

    let form = use_state(|| PaymentForm::new(today()));
    let errors = use_state(FieldErrors::new);
    let houses = use_state(Vec::<House>::new);
    let selected_house = use_state(|| None::<u64>);
    let options = use_state(|| None::<Vec<ResidentOption>>);
    let loading = use_state(|| mode.is_editing());
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let navigator = navigator.clone();
        let form = form.clone();
        let houses = houses.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |id: &Option<u64>| {
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                match *id {
                    Some(id) => spawn_local(async move {
                        match client.get_payment(id).await {
                            Ok(payment) => form.set(PaymentForm::from_payment(&payment)),
                            Err(err) if err.is_aborted() => return,
                            Err(err) => {
                                tracing::error!(error = %err, id, "failed to load payment");
                                toaster.error("Gagal mengambil data pembayaran. Silahkan coba lagi nanti.");
                                navigator.go(Route::Payments);
                            }
                        }
                        loading.set(false);
                    }),
                    None => spawn_local(async move {
                        match client.list_houses().await {
                            Ok(list) => houses.set(list.into_iter().filter(House::is_occupied).collect()),
                            Err(err) if err.is_aborted() => {}
                            Err(err) => {
                                tracing::error!(error = %err, "failed to fetch houses for payment");
                                toaster.error("Gagal mengambil data rumah. Silahkan coba lagi nanti.");
                            }
                        }
                    }),
                }
                move || drop(scope)
            },
            props.id,
        );
    }

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let options = options.clone();
        use_effect_with_deps(
            move |house: &Option<u64>| {
                let scope = RequestScope::new();
                options.set(None);
                if let Some(house_id) = *house {
                    let client = api.scoped(&scope);
                    spawn_local(async move {
                        match resident_options(&client, house_id).await {
                            Ok(found) => options.set(Some(found)),
                            Err(err) if err.is_aborted() => {}
                            Err(err) => {
                                tracing::error!(error = %err, house_id, "failed to fetch house residents");
                                toaster.error("Gagal mengambil data penghuni rumah. Silahkan coba lagi nanti.");
                                options.set(Some(Vec::new()));
                            }
                        }
                    });
                }
                move || drop(scope)
            },
            *selected_house,
        );
    }

    {
        let form = form.clone();
        use_effect_with_deps(
            move |found: &Option<Vec<ResidentOption>>| {
                if let Some(found) = found {
                    if !mode.is_editing() {
                        let mut next = (*form).clone();
                        next.select_from(found);
                        form.set(next);
                    }
                }
                || ()
            },
            (*options).clone(),
        );
    }

    let on_house = {
        let selected_house = selected_house.clone();
        let clear_resident = field_setter(&form, &errors, "house_resident_id", |f, _: ()| f.house_resident_id = None);
        Callback::from(move |value: String| {
            selected_house.set(value.parse().ok());
            clear_resident.emit(());
        })
    };
    let on_resident = field_setter(&form, &errors, "house_resident_id", |f, v: String| {
        f.house_resident_id = v.parse().ok();
    });
    let on_type = field_setter(&form, &errors, "payment_type", |f, v: String| {
        if let Some(payment_type) = PaymentType::parse(&v) {
            f.set_payment_type(payment_type);
        }
    });
    let on_period = field_setter(&form, &errors, "payment_period", |f, v: String| {
        if let Some(period) = PaymentPeriod::parse(&v) {
            f.set_payment_period(period);
        }
    });
    let on_amount = field_setter(&form, &errors, "amount", |f, v: String| f.amount = v);
    let on_payment_date = field_setter(&form, &errors, "payment_date", |f, v: String| f.payment_date = v);
    let on_period_start = field_setter(&form, &errors, "period_start", |f, v: String| f.set_period_start(v));
    let on_paid = field_setter(&form, &errors, "is_paid", |f, v: bool| f.is_paid = v);

    let on_submit = {
        let feedback = Rc::new(SubmitFeedback {
            messages: PAYMENT_MESSAGES,
            mode,
            errors: errors.clone(),
            saving: saving.clone(),
            toaster: toaster.clone(),
            navigator: navigator.clone(),
            back: Route::Payments,
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
                let outcome = submit(current.validate(mode), move || async move {
                    match mode {
                        FormMode::Edit(id) => api.update_payment(id, &payload).await,
                        FormMode::Create => api.create_payment(&payload).await,
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

    let title = if mode.is_editing() { "Perbarui Data Pembayaran" } else { "Catat Pembayaran" };
    let busy = *saving;
    let error = |field: &str| errors.get(field).map(str::to_string);

    let selectors = if mode.is_editing() {
        html! {}
    } else {
        let house_options = houses
            .iter()
            .map(|h| (h.id.to_string(), h.house_number.clone()))
            .collect::<Vec<_>>();
        let resident_choices = (*options).clone().unwrap_or_default();
        let no_residents = selected_house.is_some() && matches!(&*options, Some(found) if found.is_empty());
        let resident_options = resident_choices
            .iter()
            .map(|o| (o.house_resident_id.to_string(), o.label.clone()))
            .collect::<Vec<_>>();
        html! {
            <>
                <SelectField
                    label="Rumah"
                    value={selected_house.map(|id| id.to_string()).unwrap_or_default()}
                    options={house_options}
                    on_change={on_house}
                    placeholder="-- Pilih Rumah --"
                    disabled={busy}
                />
                <SelectField
                    label="Penghuni"
                    value={form.house_resident_id.map(|id| id.to_string()).unwrap_or_default()}
                    options={resident_options}
                    on_change={on_resident}
                    placeholder="-- Pilih Penghuni --"
                    error={error("house_resident_id")}
                    helper={no_residents.then_some(AttrValue::Static("Tidak ada penghuni di rumah ini"))}
                    disabled={selected_house.is_none() || resident_choices.is_empty() || busy}
                    required=true
                />
            </>
        }
    };

    html! {
        <>
            <PageHeader
                {title}
                action={secondary_button("Kembali", icon_arrow_left(), navigator.to(Route::Payments))}
            />
            <form class={classes!(CARD, "p-6", "space-y-5")} onsubmit={on_submit}>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                    { selectors }
                    <SelectField
                        label="Jenis Pembayaran"
                        value={form.payment_type().as_str()}
                        options={type_options()}
                        on_change={on_type}
                        disabled={busy}
                    />
                    <NumberField
                        label="Jumlah (Rp)"
                        value={form.amount.clone()}
                        on_input={on_amount}
                        error={error("amount")}
                        required=true
                        disabled={busy}
                    />
                    <DateField
                        label="Tanggal Pembayaran"
                        value={form.payment_date.clone()}
                        on_input={on_payment_date}
                        error={error("payment_date")}
                        required=true
                        disabled={busy}
                    />
                    <SelectField
                        label="Periode Pembayaran"
                        value={form.payment_period().as_str()}
                        options={period_options()}
                        on_change={on_period}
                        disabled={busy}
                    />
                    <DateField
                        label="Periode Mulai"
                        value={form.period_start().to_string()}
                        on_input={on_period_start}
                        error={error("period_start")}
                        required=true
                        disabled={busy}
                    />
                    <DateField
                        label="Periode Berakhir"
                        value={form.period_end().to_string()}
                        on_input={Callback::noop()}
                        error={error("period_end")}
                        helper="Dihitung dari periode mulai"
                        readonly=true
                    />
                </div>
                <SwitchField label="Sudah dibayar" checked={form.is_paid} on_change={on_paid} />
                { form_actions(busy, navigator.to(Route::Payments)) }
            </form>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_options_show_the_monthly_tariff() {
        let options = type_options();
        assert_eq!(options[0], ("security".to_string(), "Keamanan (Rp 100.000)".to_string()));
        assert_eq!(options[1], ("cleaning".to_string(), "Kebersihan (Rp 15.000)".to_string()));
    }

    #[test]
    fn period_options_cover_both_cadences() {
        let values = period_options().into_iter().map(|(v, _)| v).collect::<Vec<_>>();
        assert_eq!(values, vec!["monthly", "yearly"]);
    }
}
