use yew::prelude::*;

use super::icons::{
    icon_bar_chart, icon_calendar, icon_chevron_down, icon_close, icon_credit_card, icon_home,
    icon_layout_grid, icon_menu, icon_trending_up, icon_users, icon_wallet,
};
use crate::app::{Route, Section};
use crate::hooks::use_navigator;

struct NavItem {
    label: &'static str,
    route: Route,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Dashboard",
        route: Route::Dashboard,
        icon: icon_layout_grid,
    },
    NavItem {
        label: "Penghuni",
        route: Route::Residents,
        icon: icon_users,
    },
    NavItem {
        label: "Rumah",
        route: Route::Houses,
        icon: icon_home,
    },
    NavItem {
        label: "Pembayaran",
        route: Route::Payments,
        icon: icon_wallet,
    },
    NavItem {
        label: "Pengeluaran",
        route: Route::Expenses,
        icon: icon_credit_card,
    },
];

const REPORT_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Ringkasan Pembayaran",
        route: Route::PaymentSummary,
        icon: icon_trending_up,
    },
    NavItem {
        label: "Detail Bulanan",
        route: Route::MonthlyDetail,
        icon: icon_calendar,
    },
];

const ACTIVE_CLASS: &str = "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full";
const IDLE_CLASS: &str = "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub route: Route,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let drawer_open = use_state(|| false);
    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(!*drawer_open))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: ()| drawer_open.set(false))
    };

    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar route={props.route} on_navigate={Callback::noop()} />
            </div>
            {
                if *drawer_open {
                    html! {
                        <div class="fixed inset-0 z-40 flex md:hidden">
                            <Sidebar route={props.route} on_navigate={close_drawer.clone()} />
                            <div class="flex-1 bg-black/30" onclick={close_drawer.reform(|_: MouseEvent| ())}></div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header drawer_open={*drawer_open} on_toggle={toggle_drawer} />
                <main class="flex-1 overflow-y-auto p-6">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    drawer_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center gap-4 px-6">
            <button type="button" class="p-2 hover:bg-secondary rounded-full transition-colors md:hidden" aria-label="Menu" onclick={props.on_toggle.clone()}>
                { if props.drawer_open { icon_close() } else { icon_menu() } }
            </button>
            <h1 class="text-[#173E63] text-lg font-black tracking-tight">{"Neighborhood Admin"}</h1>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    route: Route,
    /// Called after any navigation, so the mobile drawer can close.
    on_navigate: Callback<()>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let navigator = use_navigator();
    let section = props.route.section();
    let reports_open = use_state(|| section == Section::Reports);
    let toggle_reports = {
        let reports_open = reports_open.clone();
        Callback::from(move |_| reports_open.set(!*reports_open))
    };

    let nav_button = |item: &NavItem, is_active: bool| {
        let navigator = navigator.clone();
        let on_navigate = props.on_navigate.clone();
        let route = item.route;
        let class_name = if is_active { ACTIVE_CLASS } else { IDLE_CLASS };
        html! {
            <button type="button" class={class_name} onclick={Callback::from(move |_| {
                navigator.go(route);
                on_navigate.emit(());
            })}>
                <span class="shrink-0">{ (item.icon)() }</span>
                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
            </button>
        }
    };

    html! {
        <div class="w-[240px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-[#173E63] rounded-full flex items-center justify-center text-white">
                    { icon_home() }
                </div>
                <span class="text-[#173E63] text-xl font-black tracking-tight">{"Admin RT"}</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg overflow-y-auto">
                <nav class="flex-1 space-y-2">
                    { for NAV_ITEMS.iter().map(|item| nav_button(item, item.route.section() == section)) }

                    <button type="button" class={if section == Section::Reports { ACTIVE_CLASS } else { IDLE_CLASS }} onclick={toggle_reports}>
                        <span class="shrink-0">{ icon_bar_chart() }</span>
                        <span class="flex-1 truncate whitespace-nowrap text-left">{"Laporan"}</span>
                        <span class={if *reports_open { "rotate-180 transition-transform" } else { "transition-transform" }}>{ icon_chevron_down() }</span>
                    </button>
                    {
                        if *reports_open {
                            html! {
                                <div class="pl-4 space-y-1">
                                    { for REPORT_ITEMS.iter().map(|item| nav_button(item, item.route == props.route)) }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </nav>
            </div>
        </div>
    }
}
