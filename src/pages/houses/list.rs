use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::RequestScope;
use crate::app::Route;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::icons::{icon_eye, icon_home, icon_plus};
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::paginator::Paginator;
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::components::toast::use_toaster;
use crate::hooks::{use_api, use_config, use_navigator, use_reload};
use crate::list::{DeleteTarget, Pagination};
use crate::models::House;
use crate::pages::{primary_button, row_actions, table, CARD};

#[function_component(HouseListPage)]
pub fn house_list_page() -> Html {
    let api = use_api();
    let config = use_config();
    let navigator = use_navigator();
    let toaster = use_toaster();

    let houses = use_state(Vec::<House>::new);
    let loading = use_state(|| true);
    let pagination = use_state(|| Pagination::new(config.default_rows_per_page));
    let delete_target = use_state(|| None::<DeleteTarget>);
    let deleting = use_state(|| false);
    let (generation, reload) = use_reload();

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let houses = houses.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                loading.set(true);
                spawn_local(async move {
                    match client.list_houses().await {
                        Ok(list) => houses.set(list),
                        Err(err) if err.is_aborted() => return,
                        Err(err) => {
                            tracing::error!(error = %err, "failed to fetch houses");
                            toaster.error("Gagal mengambil data rumah");
                        }
                    }
                    loading.set(false);
                });
                move || drop(scope)
            },
            generation,
        );
    }

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
                match api.delete_house(target.id).await {
                    Ok(()) => {
                        toaster.success("Data rumah berhasil dihapus");
                        reload.emit(());
                    }
                    Err(err) => {
                        tracing::error!(error = %err, id = target.id, "failed to delete house");
                        toaster.error("Gagal menghapus data rumah");
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

    let page = pagination.clamp(houses.len());
    let on_page_change = {
        let pagination = pagination.clone();
        Callback::from(move |next: Pagination| pagination.set(next))
    };

    let body = if *loading {
        html! { <Loading /> }
    } else if houses.is_empty() {
        html! {
            <EmptyState
                message="Data rumah kosong"
                secondary="Tambahkan rumah pertama kali untuk memulai"
                action={primary_button("Tambah Rumah", icon_plus(), navigator.to(Route::HouseCreate))}
            />
        }
    } else {
        let rows = html! {
            <>
                { for page.slice(&houses).iter().map(|house| {
                    let on_delete = {
                        let delete_target = delete_target.clone();
                        let target = DeleteTarget { id: house.id, label: house.house_number.clone() };
                        Callback::from(move |_: MouseEvent| delete_target.set(Some(target.clone())))
                    };
                    let paid_label = if house.is_paid() { "Lunas" } else { "Belum Lunas" };
                    html! {
                        <tr key={house.id} class="text-sm hover:bg-muted/40 transition-colors">
                            <td class="px-6 py-4 font-semibold text-foreground">
                                <span class="flex items-center gap-2">{ icon_home() }{ house.house_number.clone() }</span>
                            </td>
                            <td class="px-6 py-4">
                                <StatusChip label={house.occupancy_status.label()} tone={ChipTone::from_flag(house.is_occupied())} />
                            </td>
                            <td class="px-6 py-4">
                                <button type="button" class="flex items-center gap-2 text-[#173E63] text-[12px] font-bold" onclick={navigator.to(Route::HouseDetail(house.id))}>
                                    { icon_eye() }{"Lihat Penghuni"}
                                </button>
                            </td>
                            <td class="px-6 py-4">
                                <StatusChip label={paid_label} tone={ChipTone::from_flag(house.is_paid())} />
                            </td>
                            <td class="px-6 py-4">{ row_actions(navigator.to(Route::HouseEdit(house.id)), on_delete) }</td>
                        </tr>
                    }
                }) }
            </>
        };
        html! {
            <div class={CARD}>
                { table(&["Nomor Rumah", "Status", "Penghuni", "Status Pembayaran", ""], rows) }
                <Paginator
                    total={houses.len()}
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
                title="Data Rumah"
                action={primary_button("Tambah Rumah", icon_plus(), navigator.to(Route::HouseCreate))}
            />
            { body }
            <ConfirmDialog
                open={delete_target.is_some()}
                title="Hapus Rumah"
                content="Kamu yakin ingin menghapus rumah ini? Tindakan ini tidak dapat dibatalkan. Data yang terkait akan terhapus secara permanen."
                busy={*deleting}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </>
    }
}
