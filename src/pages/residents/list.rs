use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::RequestScope;
use crate::app::Route;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::icons::{icon_close, icon_external, icon_eye, icon_plus};
use crate::components::loading::Loading;
use crate::components::page_header::PageHeader;
use crate::components::paginator::Paginator;
use crate::components::status_chip::{ChipTone, StatusChip};
use crate::components::toast::use_toaster;
use crate::hooks::{use_api, use_config, use_navigator, use_reload};
use crate::list::{DeleteTarget, Pagination};
use crate::models::{Resident, ResidentStatus};
use crate::pages::{primary_button, row_actions, table, CARD};

/// ID card photo open in the preview dialog.
#[derive(Clone, PartialEq)]
struct PhotoPreview {
    name: String,
    url: String,
}

#[function_component(ResidentListPage)]
pub fn resident_list_page() -> Html {
    let api = use_api();
    let config = use_config();
    let navigator = use_navigator();
    let toaster = use_toaster();

    let residents = use_state(Vec::<Resident>::new);
    let loading = use_state(|| true);
    let pagination = use_state(|| Pagination::new(config.default_rows_per_page));
    let delete_target = use_state(|| None::<DeleteTarget>);
    let deleting = use_state(|| false);
    let photo = use_state(|| None::<PhotoPreview>);
    let (generation, reload) = use_reload();

    {
        let api = api.clone();
        let toaster = toaster.clone();
        let residents = residents.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let scope = RequestScope::new();
                let client = api.scoped(&scope);
                loading.set(true);
                spawn_local(async move {
                    match client.list_residents().await {
                        Ok(list) => residents.set(list),
                        Err(err) if err.is_aborted() => return,
                        Err(err) => {
                            tracing::error!(error = %err, "failed to fetch residents");
                            toaster.error("Gagal mengambil data penghuni");
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
        let reload = reload.clone();
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
                match api.delete_resident(target.id).await {
                    Ok(()) => {
                        toaster.success("Berhasil menghapus penghuni");
                        reload.emit(());
                    }
                    Err(err) => {
                        tracing::error!(error = %err, id = target.id, "failed to delete resident");
                        toaster.error("Gagal menghapus penghuni");
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
    let close_photo = {
        let photo = photo.clone();
        Callback::from(move |_: MouseEvent| photo.set(None))
    };

    let page = pagination.clamp(residents.len());
    let on_page_change = {
        let pagination = pagination.clone();
        Callback::from(move |next: Pagination| pagination.set(next))
    };

    let body = if *loading {
        html! { <Loading /> }
    } else if residents.is_empty() {
        html! {
            <EmptyState
                message="Data penghuni kosong"
                secondary="Tambahkan penghuni pertama kali untuk memulai"
                action={primary_button("Tambah Penghuni", icon_plus(), navigator.to(Route::ResidentCreate))}
            />
        }
    } else {
        let rows = html! {
            <>
                { for page.slice(&residents).iter().map(|resident| {
                    let tone = match resident.resident_status {
                        ResidentStatus::Permanent => ChipTone::Positive,
                        ResidentStatus::Contract => ChipTone::Info,
                    };
                    let on_photo = resident.id_card_photo.as_ref().map(|path| {
                        let photo = photo.clone();
                        let preview = PhotoPreview {
                            name: resident.name.clone(),
                            url: api.storage_url(path),
                        };
                        Callback::from(move |_: MouseEvent| photo.set(Some(preview.clone())))
                    });
                    let on_delete = {
                        let delete_target = delete_target.clone();
                        let target = DeleteTarget { id: resident.id, label: resident.name.clone() };
                        Callback::from(move |_: MouseEvent| delete_target.set(Some(target.clone())))
                    };
                    html! {
                        <tr key={resident.id} class="text-sm hover:bg-muted/40 transition-colors">
                            <td class="px-6 py-4 font-semibold text-foreground">{ resident.name.clone() }</td>
                            <td class="px-6 py-4"><StatusChip label={resident.resident_status.label()} {tone} /></td>
                            <td class="px-6 py-4 text-muted-foreground">{ resident.phone_number.clone() }</td>
                            <td class="px-6 py-4 text-muted-foreground">{ resident.marital_label() }</td>
                            <td class="px-6 py-4">
                                {
                                    match on_photo {
                                        Some(onclick) => html! {
                                            <button type="button" class="flex items-center gap-2 text-[#173E63] text-[12px] font-bold" {onclick}>
                                                { icon_eye() }{"Lihat Foto KTP"}
                                            </button>
                                        },
                                        None => html! { <span class="text-muted-foreground">{"-"}</span> },
                                    }
                                }
                            </td>
                            <td class="px-6 py-4">{ row_actions(navigator.to(Route::ResidentEdit(resident.id)), on_delete) }</td>
                        </tr>
                    }
                }) }
            </>
        };
        html! {
            <div class={CARD}>
                { table(&["Nama", "Status", "Nomor Telepon", "Status Pernikahan", "KTP", ""], rows) }
                <Paginator
                    total={residents.len()}
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
                title="Data Penghuni"
                action={primary_button("Tambah Penghuni", icon_plus(), navigator.to(Route::ResidentCreate))}
            />
            { body }
            {
                if let Some(preview) = &*photo {
                    html! {
                        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
                            <div class="bg-white rounded-2xl shadow-lg w-full max-w-3xl p-6" role="dialog" aria-modal="true">
                                <div class="flex items-center justify-between mb-4">
                                    <h3 class="text-lg font-bold text-[#173E63]">{ format!("Foto KTP {}", preview.name) }</h3>
                                    <button type="button" aria-label="Tutup" onclick={close_photo.clone()}>{ icon_close() }</button>
                                </div>
                                <div class="flex justify-center p-2">
                                    <img src={preview.url.clone()} alt={format!("KTP {}", preview.name)} class="max-w-full max-h-[70vh] object-contain" />
                                </div>
                                <div class="flex justify-end gap-3 mt-4">
                                    <button type="button" class="px-4 py-2 text-[12px] font-bold text-[#173E63]" onclick={close_photo}>{"Tutup"}</button>
                                    <a href={preview.url.clone()} target="_blank" rel="noopener noreferrer" class="flex items-center gap-2 px-4 py-2 text-[12px] font-bold text-[#173E63]">
                                        { icon_external() }{"Buka di Tab Baru"}
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <ConfirmDialog
                open={delete_target.is_some()}
                title="Hapus Penghuni"
                content="Kamu yakin ingin menghapus penghuni ini? Tindakan ini tidak dapat dibatalkan. Data yang terkait akan terhapus secara permanen."
                busy={*deleting}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </>
    }
}
