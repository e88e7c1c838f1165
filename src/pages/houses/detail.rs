use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, RequestScope};
use crate::app::{Navigator, Route};
use crate::components::empty_state::EmptyState;
use crate::components::fields::{DateField, SelectField};
use crate::components::icons::{icon_arrow_left, icon_edit, icon_eye, icon_home, icon_plus, icon_trash};
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::components::toast::{use_toaster, Toaster};
use crate::dues::{current_month_status, today};
use crate::error::ApiError;
use crate::format::{date_only, date_or_na, format_rupiah};
use crate::forms::{
    available_residents, replace_errors, scope_server_errors, AddResidentForm, RemoveResidentForm,
};
use crate::hooks::{use_api, use_navigator, use_reload};
use crate::models::{current_residency, HouseDetail, HouseResident, PaymentHistoryEntry, PaymentType, Resident};
use crate::pages::{field_setter, primary_button, secondary_button, table, CARD, PRIMARY_BUTTON};
use crate::validation::FieldErrors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Current,
    History,
    Payments,
    Manage,
}

impl Tab {
    const ALL: [Tab; 4] = [Self::Current, Self::History, Self::Payments, Self::Manage];

    fn label(&self) -> &'static str {
        match self {
            Self::Current => "Penghuni Aktif",
            Self::History => "Riwayat Penghuni",
            Self::Payments => "Riwayat Pembayaran",
            Self::Manage => "Manajemen Penghuni",
        }
    }
}

/// Everything the detail screen shows, fetched together.
#[derive(Clone, Debug, PartialEq)]
struct HouseData {
    detail: HouseDetail,
    history: Vec<HouseResident>,
    payments: Vec<PaymentHistoryEntry>,
    residents: Vec<Resident>,
}

async fn fetch_house(client: &ApiClient, id: u64) -> Result<HouseData, ApiError> {
    Ok(HouseData {
        detail: client.get_house(id).await?,
        history: client.house_history(id).await?,
        payments: client.house_payment_history(id).await?,
        residents: client.list_residents().await?,
    })
}

fn parse_id(value: &str) -> Option<u64> {
    value.parse().ok()
}

#[derive(Properties, PartialEq)]
pub struct HouseDetailPageProps {
    pub id: u64,
}

#[function_component(HouseDetailPage)]
pub fn house_detail_page(props: &HouseDetailPageProps) -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let id = props.id;

    let data = use_state(|| None::<HouseData>);
    let not_found = use_state(|| false);
    let loading = use_state(|| true);
    let tab = use_state(|| Tab::Current);
    let add_form = use_state(|| AddResidentForm::new(today()));
    let remove_form = use_state(|| RemoveResidentForm::new(today()));
    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let (generation, reload) = use_reload();

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let navigator = navigator.clone();
        let data = data.clone();
        let not_found = not_found.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |(id, _): &(u64, u32)| {
                let id = *id;
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                loading.set(true);
                spawn_local(async move {
                    match fetch_house(&client, id).await {
                        Ok(fetched) => {
                            not_found.set(false);
                            data.set(Some(fetched));
                        }
                        Err(err) if err.is_aborted() => return,
                        Err(ApiError::NotFound) => not_found.set(true),
                        Err(err) => {
                            tracing::error!(error = %err, id, "failed to load house detail");
                            toaster.error("Gagal memuat data rumah");
                            navigator.go(Route::Houses);
                        }
                    }
                    loading.set(false);
                });
                move || drop(scope)
            },
            (id, generation),
        );
    }

    if *loading && data.is_none() {
        return html! { <Loading /> };
    }
    let Some(house_data) = (*data).clone() else {
        let message = if *not_found { "Rumah tidak ditemukan" } else { "Data rumah tidak tersedia" };
        return html! {
            <EmptyState
                {message}
                action={secondary_button("Kembali ke Data Rumah", icon_arrow_left(), navigator.to(Route::Houses))}
            />
        };
    };

    let HouseData { detail, history, payments, residents } = house_data;
    let house = &detail.house;
    let current = &detail.current_residents;
    let dues = current_month_status(&payments, today());

    let on_add = {
        let api = api.clone();
        let toaster = toaster.clone();
        let add_form = add_form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = (*add_form).clone();
            let found = form.validate();
            let invalid = !found.is_empty();
            errors.set(replace_errors(&errors, "add_", found));
            if invalid {
                return;
            }
            let Some(payload) = form.payload() else {
                return;
            };
            let api = api.clone();
            let toaster = toaster.clone();
            let add_form = add_form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let reload = reload.clone();
            submitting.set(true);
            spawn_local(async move {
                match api.add_resident_to_house(id, &payload).await {
                    Ok(()) => {
                        toaster.success("Penghuni berhasil ditambahkan");
                        add_form.set(AddResidentForm::new(today()));
                        reload.emit(());
                    }
                    Err(ApiError::Validation(server)) => {
                        errors.set(replace_errors(&errors, "add_", scope_server_errors("add_", &server)));
                        toaster.error("Mohon perbaiki kesalahan di formulir");
                    }
                    Err(err) => report_failure(&toaster, &err, id, "Gagal menambahkan penghuni"),
                }
                submitting.set(false);
            });
        })
    };

    let on_remove = {
        let api = api.clone();
        let toaster = toaster.clone();
        let remove_form = remove_form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let history = history.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = (*remove_form).clone();
            let current_start = form
                .resident_id
                .and_then(|resident_id| current_residency(&history, resident_id))
                .map(|entry| entry.start_date.clone());
            let found = form.validate(current_start.as_deref());
            let invalid = !found.is_empty();
            errors.set(replace_errors(&errors, "remove_", found));
            if invalid {
                return;
            }
            let Some(payload) = form.payload() else {
                return;
            };
            let api = api.clone();
            let toaster = toaster.clone();
            let remove_form = remove_form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let reload = reload.clone();
            submitting.set(true);
            spawn_local(async move {
                match api.remove_resident_from_house(id, &payload).await {
                    Ok(()) => {
                        toaster.success("Penghuni berhasil dihapus");
                        remove_form.set(RemoveResidentForm::new(today()));
                        reload.emit(());
                    }
                    Err(ApiError::Validation(server)) => {
                        errors.set(replace_errors(&errors, "remove_", scope_server_errors("remove_", &server)));
                        toaster.error("Mohon perbaiki kesalahan di formulir");
                    }
                    Err(err) => report_failure(&toaster, &err, id, "Gagal menghapus penghuni"),
                }
                submitting.set(false);
            });
        })
    };

    let tab_bar = html! {
        <div class="flex flex-wrap border-b border-border" role="tablist">
            { for Tab::ALL.iter().map(|t| {
                let selected = *tab == *t;
                let onclick = {
                    let tab = tab.clone();
                    let t = *t;
                    Callback::from(move |_: MouseEvent| tab.set(t))
                };
                let class = if selected {
                    "px-4 py-3 text-[12px] font-bold text-[#173E63] border-b-2 border-[#173E63]"
                } else {
                    "px-4 py-3 text-[12px] font-bold text-muted-foreground"
                };
                html! {
                    <button type="button" role="tab" aria-selected={selected.to_string()} {class} {onclick}>
                        { t.label() }
                    </button>
                }
            }) }
        </div>
    };

    let panel = match *tab {
        Tab::Current => current_panel(&detail, &history, &navigator, {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(Tab::Manage))
        }),
        Tab::History => history_panel(&history),
        Tab::Payments => payments_panel(&payments),
        Tab::Manage => {
            let available = available_residents(&residents, current);
            let add_options = available
                .iter()
                .map(|r| (r.id.to_string(), r.option_label()))
                .collect::<Vec<_>>();
            let remove_options = current
                .iter()
                .map(|c| (c.resident.id.to_string(), c.resident.name.clone()))
                .collect::<Vec<_>>();
            let busy = *submitting;
            let no_available = add_options.is_empty();

            let on_add_resident = field_setter(&add_form, &errors, "add_resident_id", |f, v: String| f.resident_id = parse_id(&v));
            let on_add_start = field_setter(&add_form, &errors, "add_start_date", |f, v: String| f.start_date = v);
            let on_add_end = field_setter(&add_form, &errors, "add_end_date", |f, v: String| f.end_date = v);
            let on_remove_resident = field_setter(&remove_form, &errors, "remove_resident_id", |f, v: String| f.resident_id = parse_id(&v));
            let on_remove_end = field_setter(&remove_form, &errors, "remove_end_date", |f, v: String| f.end_date = v);
            let add_end_helper = errors
                .get("add_end_date")
                .is_none()
                .then_some(AttrValue::Static("Biarkan kosong jika penghuni permanen"));

            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 p-6">
                    <form class="space-y-4" onsubmit={on_add}>
                        <h3 class="text-base font-bold text-[#173E63]">{"Tambah Penghuni"}</h3>
                        <SelectField
                            label="Pilih Penghuni"
                            value={add_form.resident_id.map(|id| id.to_string()).unwrap_or_default()}
                            options={add_options}
                            on_change={on_add_resident}
                            placeholder="Pilih penghuni"
                            error={errors.get("add_resident_id").map(str::to_string)}
                            disabled={no_available || busy}
                        />
                        <DateField
                            label="Tanggal Mulai"
                            value={add_form.start_date.clone()}
                            on_input={on_add_start}
                            error={errors.get("add_start_date").map(str::to_string)}
                            required=true
                            disabled={busy}
                        />
                        <DateField
                            label="Tanggal Berakhir (opsional)"
                            value={add_form.end_date.clone()}
                            on_input={on_add_end}
                            error={errors.get("add_end_date").map(str::to_string)}
                            helper={add_end_helper}
                            disabled={busy}
                        />
                        <button type="submit" class={classes!(PRIMARY_BUTTON, "w-full")} disabled={no_available || busy}>
                            { icon_plus() }
                            <span>{ if busy { "Menambahkan..." } else { "Tambah Penghuni" } }</span>
                        </button>
                        if no_available {
                            <p class="text-[11px] text-muted-foreground text-center">{"Tidak ada penghuni yang dapat ditambahkan"}</p>
                        }
                    </form>
                    <div class="space-y-4">
                        <h3 class="text-base font-bold text-[#173E63]">{"Hapus Penghuni"}</h3>
                        if current.is_empty() {
                            <p class="text-sm text-muted-foreground">{"Tidak ada penghuni"}</p>
                        } else {
                            <form class="space-y-4" onsubmit={on_remove}>
                                <SelectField
                                    label="Pilih Penghuni"
                                    value={remove_form.resident_id.map(|id| id.to_string()).unwrap_or_default()}
                                    options={remove_options}
                                    on_change={on_remove_resident}
                                    placeholder="Pilih penghuni"
                                    error={errors.get("remove_resident_id").map(str::to_string)}
                                    disabled={busy}
                                />
                                <DateField
                                    label="Tanggal Berakhir"
                                    value={remove_form.end_date.clone()}
                                    on_input={on_remove_end}
                                    error={errors.get("remove_end_date").map(str::to_string)}
                                    required=true
                                    disabled={busy}
                                />
                                <button type="submit" class="w-full bg-red-600 text-white px-4 py-2 rounded-[10px] text-[12px] font-bold flex items-center justify-center gap-2 disabled:opacity-60" disabled={busy}>
                                    { icon_trash() }
                                    <span>{ if busy { "Menghapus..." } else { "Hapus Penghuni" } }</span>
                                </button>
                            </form>
                        }
                    </div>
                </div>
            }
        }
    };

    let header_actions = html! {
        <div class="flex gap-2">
            { primary_button("Perbaharui Rumah", icon_edit(), navigator.to(Route::HouseEdit(id))) }
            { secondary_button("Kembali ke Data Rumah", icon_arrow_left(), navigator.to(Route::Houses)) }
        </div>
    };

    html! {
        <>
            <PageHeader title={format!("Rumah: {}", house.house_number)} action={header_actions} />
            <div class={classes!(CARD, "p-6", "mb-6")}>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div>
                        <p class="text-[10px] font-bold uppercase tracking-widest text-muted-foreground">{"Status"}</p>
                        <div class="mt-2 flex items-center gap-2">
                            { icon_home() }
                            <StatusChip label={house.occupancy_status.label()} tone={ChipTone::from_flag(house.is_occupied())} />
                        </div>
                    </div>
                    <div>
                        <p class="text-[10px] font-bold uppercase tracking-widest text-muted-foreground">{"Jumlah Penghuni"}</p>
                        <p class="mt-2 text-sm font-semibold">{ format!("{} orang", current.len()) }</p>
                    </div>
                    <div>
                        <p class="text-[10px] font-bold uppercase tracking-widest text-muted-foreground">{"Status Pembayaran"}</p>
                        <div class="mt-2 flex gap-2">
                            { for PaymentType::ALL.iter().map(|t| html! {
                                <StatusChip label={t.label()} tone={ChipTone::from_flag(dues.is_paid(*t))} />
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <div class={CARD}>
                { tab_bar }
                { panel }
            </div>
        </>
    }
}

fn report_failure(toaster: &Toaster, err: &ApiError, house_id: u64, message: &'static str) {
    tracing::error!(error = %err, house_id, "failed to change house residents");
    toaster.error(message);
}

fn current_panel(
    detail: &HouseDetail,
    history: &[HouseResident],
    navigator: &Navigator,
    on_manage: Callback<MouseEvent>,
) -> Html {
    if detail.current_residents.is_empty() {
        return html! {
            <EmptyState
                message="Tidak ada penghuni saat ini"
                secondary="Tambah penghuni di manajemen penghuni"
                action={primary_button("Tambah Penghuni", icon_plus(), on_manage)}
            />
        };
    }
    let rows = html! {
        <>
            { for detail.current_residents.iter().map(|item| {
                let resident = &item.resident;
                let started = current_residency(history, resident.id).map(|h| h.start_date.as_str());
                html! {
                    <tr key={resident.id} class="text-sm">
                        <td class="px-6 py-4 font-semibold">{ resident.name.clone() }</td>
                        <td class="px-6 py-4"><StatusChip label={resident.resident_status.label()} tone={ChipTone::Info} /></td>
                        <td class="px-6 py-4">{ resident.phone_number.clone() }</td>
                        <td class="px-6 py-4">{ date_or_na(started) }</td>
                        <td class="px-6 py-4">
                            <button type="button" class="flex items-center gap-2 text-[#173E63] text-[12px] font-bold" onclick={navigator.to(Route::ResidentEdit(resident.id))}>
                                { icon_eye() }{"Lihat Detail"}
                            </button>
                        </td>
                    </tr>
                }
            }) }
        </>
    };
    table(&["Nama Penghuni", "Status", "Nomor Telepon", "Tanggal Mulai", "Aksi"], rows)
}

fn history_panel(history: &[HouseResident]) -> Html {
    if history.is_empty() {
        return html! { <EmptyState message="Tidak ada riwayat penghuni untuk rumah ini" /> };
    }
    let rows = html! {
        <>
            { for history.iter().map(|entry| {
                let name = entry.resident.as_ref().map(|r| r.name.clone()).unwrap_or_else(|| "N/A".to_string());
                let ended = entry
                    .end_date
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .map(|d| date_only(d).to_string())
                    .unwrap_or_else(|| "Sekarang".to_string());
                let status = if entry.is_current { "Sekarang" } else { "Sebelumnya" };
                html! {
                    <tr key={entry.id} class="text-sm">
                        <td class="px-6 py-4 font-semibold">{ name }</td>
                        <td class="px-6 py-4">{ date_only(&entry.start_date) }</td>
                        <td class="px-6 py-4">{ ended }</td>
                        <td class="px-6 py-4">
                            <StatusChip label={status} tone={if entry.is_current { ChipTone::Positive } else { ChipTone::Neutral }} />
                        </td>
                    </tr>
                }
            }) }
        </>
    };
    table(&["Nama Penghuni", "Tanggal Mulai", "Tanggal Berakhir", "Status"], rows)
}

fn payments_panel(history: &[PaymentHistoryEntry]) -> Html {
    if history.iter().all(|entry| entry.payments.is_empty()) {
        return html! { <EmptyState message="Tidak ada riwayat pembayaran untuk rumah ini" /> };
    }
    let rows = html! {
        <>
            { for history.iter().flat_map(|entry| {
                let name = entry.resident.as_ref().map(|r| r.name.clone()).unwrap_or_else(|| "N/A".to_string());
                entry.payments.iter().map(move |payment| html! {
                    <tr key={payment.id} class="text-sm">
                        <td class="px-6 py-4 font-semibold">{ name.clone() }</td>
                        <td class="px-6 py-4">{ payment.payment_type.label() }</td>
                        <td class="px-6 py-4">{ format_rupiah(payment.amount) }</td>
                        <td class="px-6 py-4">{ date_only(&payment.payment_date) }</td>
                        <td class="px-6 py-4">
                            { format!("{} - {}", date_only(&payment.period_start), date_only(&payment.period_end)) }
                        </td>
                        <td class="px-6 py-4">
                            <StatusChip label={payment.paid_label()} tone={ChipTone::from_flag(payment.is_paid)} />
                        </td>
                    </tr>
                })
            }) }
        </>
    };
    table(
        &["Nama Penghuni", "Jenis Pembayaran", "Jumlah", "Tanggal Pembayaran", "Periode", "Status"],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_values_parse_as_ids() {
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id(""), None);
    }
}
