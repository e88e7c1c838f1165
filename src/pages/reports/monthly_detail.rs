use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::balance_class;
use crate::api::{PeriodFilter, RequestScope};
use crate::components::chart::DoughnutView;
use crate::components::empty_state::EmptyState;
use crate::components::filters::PeriodPicker;
use crate::components::icons::{icon_bar_chart, icon_trending_up, icon_wallet};
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::components::toast::use_toaster;
use crate::dues::today;
use crate::format::{date_only, format_rupiah, month_name};
use crate::hooks::{use_api, use_config};
use crate::models::{Expense, MonthlyDetail, Payment};
use crate::pages::{table, CARD};
use crate::reports::{expense_breakdown, income_breakdown, monthly_totals};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Payments,
    Expenses,
}

fn payments_table(payments: &[Payment]) -> Html {
    if payments.is_empty() {
        return html! { <EmptyState message="Tidak ada data pembayaran untuk bulan ini" /> };
    }
    let rows = html! {
        <>
            { for payments.iter().map(|payment| html! {
                <tr key={payment.id} class="text-sm">
                    <td class="px-6 py-4 font-semibold">{ payment.resident_name() }</td>
                    <td class="px-6 py-4">{ payment.house_number() }</td>
                    <td class="px-6 py-4">{ payment.payment_type.label() }</td>
                    <td class="px-6 py-4">{ format_rupiah(payment.amount) }</td>
                    <td class="px-6 py-4">{ date_only(&payment.payment_date) }</td>
                    <td class="px-6 py-4">{ payment.payment_period.label() }</td>
                    <td class="px-6 py-4">
                        <StatusChip label={payment.paid_label()} tone={ChipTone::from_flag(payment.is_paid)} />
                    </td>
                </tr>
            }) }
        </>
    };
    table(&["Penghuni", "Rumah", "Jenis", "Jumlah", "Tanggal Pembayaran", "Periode", "Status"], rows)
}

fn expenses_table(expenses: &[Expense]) -> Html {
    if expenses.is_empty() {
        return html! { <EmptyState message="Tidak ada data pengeluaran untuk bulan ini" /> };
    }
    let rows = html! {
        <>
            { for expenses.iter().map(|expense| html! {
                <tr key={expense.id} class="text-sm">
                    <td class="px-6 py-4 font-semibold">{ expense.description.clone() }</td>
                    <td class="px-6 py-4">{ expense.expense_type.label() }</td>
                    <td class="px-6 py-4">{ format_rupiah(expense.amount) }</td>
                    <td class="px-6 py-4">{ date_only(&expense.expense_date) }</td>
                </tr>
            }) }
        </>
    };
    table(&["Deskripsi", "Jenis", "Jumlah", "Tanggal"], rows)
}

fn chart_card(title: &'static str, empty: &'static str, has_data: bool, chart: Html) -> Html {
    html! {
        <div class={classes!(CARD, "p-6")}>
            <h3 class="text-base font-bold text-[#173E63] mb-4">{ title }</h3>
            if has_data {
                { chart }
            } else {
                <p class="text-sm text-muted-foreground text-center py-12">{ empty }</p>
            }
        </div>
    }
}

#[function_component(MonthlyDetailPage)]
pub fn monthly_detail_page() -> Html {
    let api = use_api();
    let config = use_config();
    let toaster = use_toaster();

    let filter = use_state(|| PeriodFilter::containing(today()));
    let detail = use_state(MonthlyDetail::default);
    let loading = use_state(|| true);
    let tab = use_state(|| Tab::Payments);

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let detail = detail.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |filter: &PeriodFilter| {
                let filter = *filter;
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                loading.set(true);
                spawn_local(async move {
                    match client.monthly_detail(filter).await {
                        Ok(data) => detail.set(data),
                        Err(err) if err.is_aborted() => return,
                        Err(err) => {
                            tracing::error!(error = %err, month = filter.month, year = filter.year, "failed to fetch monthly detail");
                            toaster.error("Gagal mengambil detail laporan bulanan");
                            detail.set(MonthlyDetail::default());
                        }
                    }
                    loading.set(false);
                });
                move || drop(scope)
            },
            *filter,
        );
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |next: PeriodFilter| filter.set(next))
    };

    let body = if *loading {
        html! { <Loading /> }
    } else {
        let totals = monthly_totals(&detail);
        let tab_button = |t: Tab, label: &'static str| {
            let selected = *tab == t;
            let onclick = {
                let tab = tab.clone();
                Callback::from(move |_: MouseEvent| tab.set(t))
            };
            let class = if selected {
                "px-4 py-3 text-[12px] font-bold text-[#173E63] border-b-2 border-[#173E63]"
            } else {
                "px-4 py-3 text-[12px] font-bold text-muted-foreground"
            };
            html! {
                <button type="button" role="tab" aria-selected={selected.to_string()} {class} {onclick}>{ label }</button>
            }
        };
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-6">
                    <StatCard
                        title="Total Pemasukan"
                        value={format_rupiah(totals.income)}
                        icon={icon_trending_up()}
                        value_class={classes!("text-green-700")}
                    />
                    <StatCard
                        title="Total Pengeluaran"
                        value={format_rupiah(totals.expenses)}
                        icon={icon_wallet()}
                        value_class={classes!("text-red-600")}
                    />
                    <StatCard
                        title="Saldo"
                        value={format_rupiah(totals.balance)}
                        icon={icon_bar_chart()}
                        value_class={balance_class(totals.balance)}
                    />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                    { chart_card(
                        "Pemasukan per Jenis",
                        "Tidak ada data pembayaran",
                        !detail.payments.is_empty(),
                        html! { <DoughnutView doughnut={income_breakdown(&detail.payments)} /> },
                    ) }
                    { chart_card(
                        "Pengeluaran per Jenis",
                        "Tidak ada data pengeluaran",
                        !detail.expenses.is_empty(),
                        html! { <DoughnutView doughnut={expense_breakdown(&detail.expenses)} /> },
                    ) }
                </div>
                <div class={CARD}>
                    <div class="flex border-b border-border" role="tablist">
                        { tab_button(Tab::Payments, "Detail Pembayaran") }
                        { tab_button(Tab::Expenses, "Detail Pengeluaran") }
                    </div>
                    {
                        match *tab {
                            Tab::Payments => payments_table(&detail.payments),
                            Tab::Expenses => expenses_table(&detail.expenses),
                        }
                    }
                </div>
            </>
        }
    };

    html! {
        <>
            <PageHeader
                title="Detail Laporan Bulanan"
                subtitle={Some(AttrValue::from(format!("{} {}", month_name(filter.month), filter.year)))}
                action={html! { <PeriodPicker filter={*filter} years={config.year_options()} on_change={on_filter} /> }}
            />
            { body }
        </>
    }
}
