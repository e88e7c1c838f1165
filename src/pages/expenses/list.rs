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
use crate::format::{date_only, format_rupiah, month_name};
use crate::hooks::{use_api, use_config, use_navigator, use_reload};
use crate::list::{DeleteTarget, Pagination};
use crate::models::{expense_total, Expense, ExpenseType};
use crate::pages::{primary_button, row_actions, table, CARD};

fn type_tone(expense_type: ExpenseType) -> ChipTone {
    match expense_type {
        ExpenseType::Security => ChipTone::Info,
        ExpenseType::Cleaning => ChipTone::Positive,
        ExpenseType::Maintenance => ChipTone::Negative,
        ExpenseType::Other | ExpenseType::Unknown => ChipTone::Neutral,
    }
}

#[function_component(ExpenseListPage)]
pub fn expense_list_page() -> Html {
    let api = use_api();
    let config = use_config();
    let navigator = use_navigator();
    let toaster = use_toaster();

    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| true);
    let filter = use_state(|| PeriodFilter::containing(today()));
    let pagination = use_state(|| Pagination::new(config.default_rows_per_page));
    let delete_target = use_state(|| None::<DeleteTarget>);
    let deleting = use_state(|| false);
    let (generation, reload) = use_reload();

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |(filter, _): &(PeriodFilter, u32)| {
                let filter = *filter;
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                loading.set(true);
                spawn_local(async move {
                    match client.list_expenses(Some(filter)).await {
                        Ok(list) => expenses.set(list),
                        Err(err) if err.is_aborted() => return,
                        Err(err) => {
                            tracing::error!(error = %err, month = filter.month, year = filter.year, "failed to fetch expenses");
                            toaster.error("Gagal mengambil data pengeluaran");
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
                match api.delete_expense(target.id).await {
                    Ok(()) => {
                        toaster.success("Data pengeluaran berhasil dihapus");
                        reload.emit(());
                    }
                    Err(err) => {
                        tracing::error!(error = %err, id = target.id, "failed to delete expense");
                        toaster.error("Gagal menghapus data pengeluaran");
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

    let page = pagination.clamp(expenses.len());
    let on_page_change = {
        let pagination = pagination.clone();
        Callback::from(move |next: Pagination| pagination.set(next))
    };

    let body = if *loading {
        html! { <Loading /> }
    } else if expenses.is_empty() {
        html! {
            <EmptyState
                message="Tidak ada data pengeluaran untuk periode tersebut"
                secondary="Catat pengeluaran atau ubah filter"
                action={primary_button("Catat Pengeluaran", icon_plus(), navigator.to(Route::ExpenseCreate))}
            />
        }
    } else {
        let rows = html! {
            <>
                { for page.slice(&expenses).iter().map(|expense| {
                    let on_delete = {
                        let delete_target = delete_target.clone();
                        let target = DeleteTarget { id: expense.id, label: expense.description.clone() };
                        Callback::from(move |_: MouseEvent| delete_target.set(Some(target.clone())))
                    };
                    html! {
                        <tr key={expense.id} class="text-sm hover:bg-muted/40 transition-colors">
                            <td class="px-6 py-4 font-semibold">{ expense.description.clone() }</td>
                            <td class="px-6 py-4">
                                <StatusChip label={expense.expense_type.label()} tone={type_tone(expense.expense_type)} />
                            </td>
                            <td class="px-6 py-4">{ format_rupiah(expense.amount) }</td>
                            <td class="px-6 py-4">{ date_only(&expense.expense_date) }</td>
                            <td class="px-6 py-4">{ row_actions(navigator.to(Route::ExpenseEdit(expense.id)), on_delete) }</td>
                        </tr>
                    }
                }) }
            </>
        };
        html! {
            <div class={CARD}>
                <div class="flex flex-wrap justify-between items-center gap-2 px-6 py-4 border-b border-border">
                    <h3 class="text-base font-bold text-[#173E63]">
                        { format!("Pengeluaran periode {} {}", month_name(filter.month), filter.year) }
                    </h3>
                    <h3 class="text-base font-bold text-[#173E63]">
                        { format!("Total: {}", format_rupiah(expense_total(&expenses))) }
                    </h3>
                </div>
                { table(&["Deskripsi", "Jenis", "Jumlah", "Tanggal", ""], rows) }
                <Paginator
                    total={expenses.len()}
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
                title="Pengeluaran"
                action={primary_button("Catat Pengeluaran", icon_plus(), navigator.to(Route::ExpenseCreate))}
            />
            <div class="flex justify-end mb-4">
                <PeriodPicker filter={*filter} years={config.year_options()} on_change={on_filter} />
            </div>
            { body }
            <ConfirmDialog
                open={delete_target.is_some()}
                title="Hapus Pengeluaran"
                content="Kamu yakin ingin menghapus data pengeluaran ini? Data yang sudah dihapus tidak dapat dikembalikan lagi."
                busy={*deleting}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_types_use_the_neutral_chip() {
        assert_eq!(type_tone(ExpenseType::Unknown), ChipTone::Neutral);
        assert_eq!(type_tone(ExpenseType::Security), ChipTone::Info);
    }
}
