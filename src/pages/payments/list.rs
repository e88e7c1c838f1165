use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{PeriodFilter, RequestScope};
use crate::app::Route;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::filters::PeriodPicker;
use crate::components::icons::icon_plus;
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::paginator::Paginator;
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::components::toast::use_toaster;
use crate::dues::today;
use crate::format::{date_only, format_rupiah};
use crate::hooks::{use_api, use_config, use_navigator, use_reload};
use crate::list::{DeleteTarget, Pagination};
use crate::models::{Payment, PaymentPeriod, PaymentType};
use crate::pages::{primary_button, row_actions, table, CARD};

#[function_component(PaymentListPage)]
pub fn payment_list_page() -> Html {
    let api = use_api();
    let config = use_config();
    let navigator = use_navigator();
    let toaster = use_toaster();

    let payments = use_state(Vec::<Payment>::new);
    let loading = use_state(|| true);
    let filter = use_state(|| PeriodFilter::containing(today()));
    let pagination = use_state(|| Pagination::new(config.default_rows_per_page));
    let delete_target = use_state(|| None::<DeleteTarget>);
    let deleting = use_state(|| false);
    let (generation, reload) = use_reload();

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let payments = payments.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |(filter, _): &(PeriodFilter, u32)| {
                let filter = *filter;
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                loading.set(true);
                spawn_local(async move {
                    match client.list_payments(Some(filter)).await {
                        Ok(list) => payments.set(list),
                        Err(err) if err.is_aborted() => return,
                        Err(err) => {
                            tracing::error!(error = %err, month = filter.month, year = filter.year, "failed to fetch payments");
                            toaster.error("Gagal mengambil data pembayaran");
                        }
                    }
                    loading.set(false);
                });
                move || drop(scope)
            },
            (*filter, generation),
        );
    }

    let on_filter = {
        let filter = filter.clone();
        let pagination = pagination.clone();
        Callback::from(move |next: PeriodFilter| {
            filter.set(next);
            pagination.set(pagination.with_page(0));
        })
    };

    let on_confirm_delete = {
        let api = api.clone();
        let toaster = toaster.clone();
        let delete_target = delete_target.clone();
        let deleting = deleting.clone();
        Callback::from(move |_: ()| {
            let Some(target) = (*delete_target).clone() else {
                return;
            };
            let api = api.clone();
            let toaster = toaster.clone();
            let delete_target = delete_target.clone();
            let deleting = deleting.clone();
            let reload = reload.clone();
            deleting.set(true);
            spawn_local(async move {
                match api.delete_payment(target.id).await {
                    Ok(()) => {
                        toaster.success("Data pembayaran berhasil dihapus");
                        reload.emit(());
                    }
                    Err(err) => {
                        tracing::error!(error = %err, id = target.id, "failed to delete payment");
                        toaster.error("Gagal menghapus data pembayaran");
                    }
                }
                deleting.set(false);
                delete_target.set(None);
            });
        })
    };
    let on_cancel_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |_: ()| delete_target.set(None))
    };

    let page = pagination.clamp(payments.len());
    let on_page_change = {
        let pagination = pagination.clone();
        Callback::from(move |next: Pagination| pagination.set(next))
    };

    let body = if *loading {
        html! { <Loading /> }
    } else if payments.is_empty() {
        html! {
            <EmptyState
                message="Tidak ada data pembayaran untuk bulan tersebut"
                secondary="Catat pembayaran atau ubah filter"
                action={primary_button("Catat Pembayaran", icon_plus(), navigator.to(Route::PaymentCreate))}
            />
        }
    } else {
        let rows = html! {
            <>
                { for page.slice(&payments).iter().map(|payment| {
                    let on_delete = {
                        let delete_target = delete_target.clone();
                        let target = DeleteTarget {
                            id: payment.id,
                            label: format!("{} - {}", payment.house_number(), payment.resident_name()),
                        };
                        Callback::from(move |_: MouseEvent| delete_target.set(Some(target.clone())))
                    };
                    let type_tone = match payment.payment_type {
                        PaymentType::Security => ChipTone::Info,
                        PaymentType::Cleaning => ChipTone::Positive,
                    };
                    let period_tone = match payment.payment_period {
                        PaymentPeriod::Yearly => ChipTone::Info,
                        PaymentPeriod::Monthly => ChipTone::Neutral,
                    };
                    html! {
                        <tr key={payment.id} class="text-sm hover:bg-muted/40 transition-colors">
                            <td class="px-6 py-4 font-semibold">{ payment.resident_name() }</td>
                            <td class="px-6 py-4">{ payment.house_number() }</td>
                            <td class="px-6 py-4"><StatusChip label={payment.payment_type.label()} tone={type_tone} /></td>
                            <td class="px-6 py-4">{ format_rupiah(payment.amount) }</td>
                            <td class="px-6 py-4">{ date_only(&payment.payment_date) }</td>
                            <td class="px-6 py-4"><StatusChip label={payment.payment_period.label()} tone={period_tone} /></td>
                            <td class="px-6 py-4">
                                <StatusChip label={payment.paid_label()} tone={ChipTone::from_flag(payment.is_paid)} />
                            </td>
                            <td class="px-6 py-4">{ row_actions(navigator.to(Route::PaymentEdit(payment.id)), on_delete) }</td>
                        </tr>
                    }
                }) }
            </>
        };
        html! {
            <div class={CARD}>
                { table(&["Penghuni", "Rumah", "Jenis", "Jumlah", "Tanggal Bayar", "Periode", "Status", ""], rows) }
                <Paginator
                    total={payments.len()}
                    pagination={page}
                    options={config.rows_per_page_options.clone()}
                    on_change={on_page_change}
                />
            </div>
        }
    };

    html! {
        <>
            <PageHeader
                title="Data Pembayaran"
                action={primary_button("Catat Pembayaran", icon_plus(), navigator.to(Route::PaymentCreate))}
            />
            <div class="flex justify-end mb-4">
                <PeriodPicker filter={*filter} years={config.year_options()} on_change={on_filter} />
            </div>
            { body }
            <ConfirmDialog
                open={delete_target.is_some()}
                title="Hapus Pembayaran"
                content="Kamu yakin ingin menghapus data pembayaran ini? Data yang sudah dihapus tidak dapat dikembalikan lagi."
                busy={*deleting}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </>
    }
}
