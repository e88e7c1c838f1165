use std::rc::Rc;

use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::layout::Layout;
use crate::components::toast::ToastProvider;
use crate::config::AppConfig;
use crate::pages::dashboard::DashboardPage;
use crate::pages::expenses::{ExpenseFormPage, ExpenseListPage};
use crate::pages::houses::{HouseDetailPage, HouseFormPage, HouseListPage};
use crate::pages::payments::{PaymentFormPage, PaymentListPage};
use crate::pages::reports::{MonthlyDetailPage, PaymentSummaryPage};
use crate::pages::residents::{ResidentFormPage, ResidentListPage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Residents,
    ResidentCreate,
    ResidentEdit(u64),
    Houses,
    HouseCreate,
    HouseEdit(u64),
    HouseDetail(u64),
    Payments,
    PaymentCreate,
    PaymentEdit(u64),
    Expenses,
    ExpenseCreate,
    ExpenseEdit(u64),
    PaymentSummary,
    MonthlyDetail,
}

/// Navigation group a route is highlighted under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Residents,
    Houses,
    Payments,
    Expenses,
    Reports,
}

impl Route {
    pub fn section(&self) -> Section {
        match self {
            Self::Dashboard => Section::Dashboard,
            Self::Residents | Self::ResidentCreate | Self::ResidentEdit(_) => Section::Residents,
            Self::Houses | Self::HouseCreate | Self::HouseEdit(_) | Self::HouseDetail(_) => {
                Section::Houses
            }
            Self::Payments | Self::PaymentCreate | Self::PaymentEdit(_) => Section::Payments,
            Self::Expenses | Self::ExpenseCreate | Self::ExpenseEdit(_) => Section::Expenses,
            Self::PaymentSummary | Self::MonthlyDetail => Section::Reports,
        }
    }

    /// Path of the screen, for logs.
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Residents => "/residents".to_string(),
            Self::ResidentCreate => "/residents/create".to_string(),
            Self::ResidentEdit(id) => format!("/residents/{}/edit", id),
            Self::Houses => "/houses".to_string(),
            Self::HouseCreate => "/houses/create".to_string(),
            Self::HouseEdit(id) => format!("/houses/{}/edit", id),
            Self::HouseDetail(id) => format!("/houses/{}", id),
            Self::Payments => "/payments".to_string(),
            Self::PaymentCreate => "/payments/create".to_string(),
            Self::PaymentEdit(id) => format!("/payments/{}/edit", id),
            Self::Expenses => "/expenses".to_string(),
            Self::ExpenseCreate => "/expenses/create".to_string(),
            Self::ExpenseEdit(id) => format!("/expenses/{}/edit", id),
            Self::PaymentSummary => "/reports/summary".to_string(),
            Self::MonthlyDetail => "/reports/monthly".to_string(),
        }
    }
}

/// Switches the active screen. Provided through context by [`App`].
#[derive(Clone, PartialEq)]
pub struct Navigator(Callback<Route>);

impl Navigator {
    pub fn go(&self, route: Route) {
        self.0.emit(route);
    }

    /// Click handler that navigates to `route`.
    pub fn to<E>(&self, route: Route) -> Callback<E> {
        let navigator = self.clone();
        Callback::from(move |_| navigator.go(route))
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self(Callback::noop())
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let route = use_state(|| Route::Dashboard);
    let config = use_memo(|config| config.clone(), props.config.clone());
    let client = use_memo(|config| ApiClient::new(config), props.config.clone());
    let navigator = {
        let route = route.clone();
        use_memo(
            move |_| {
                Navigator(Callback::from(move |next: Route| {
                    tracing::debug!(path = %next.path(), "navigate");
                    route.set(next);
                }))
            },
            (),
        )
    };

    let content = match *route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Residents => html! { <ResidentListPage /> },
        Route::ResidentCreate => html! { <ResidentFormPage /> },
        Route::ResidentEdit(id) => html! { <ResidentFormPage id={Some(id)} /> },
        Route::Houses => html! { <HouseListPage /> },
        Route::HouseCreate => html! { <HouseFormPage /> },
        Route::HouseEdit(id) => html! { <HouseFormPage id={Some(id)} /> },
        Route::HouseDetail(id) => html! { <HouseDetailPage {id} /> },
        Route::Payments => html! { <PaymentListPage /> },
        Route::PaymentCreate => html! { <PaymentFormPage /> },
        Route::PaymentEdit(id) => html! { <PaymentFormPage id={Some(id)} /> },
        Route::Expenses => html! { <ExpenseListPage /> },
        Route::ExpenseCreate => html! { <ExpenseFormPage /> },
        Route::ExpenseEdit(id) => html! { <ExpenseFormPage id={Some(id)} /> },
        Route::PaymentSummary => html! { <PaymentSummaryPage /> },
        Route::MonthlyDetail => html! { <MonthlyDetailPage /> },
    };

    html! {
        <ContextProvider<Rc<AppConfig>> context={config}>
            <ContextProvider<ApiClient> context={(*client).clone()}>
                <ContextProvider<Navigator> context={(*navigator).clone()}>
                    <ToastProvider>
                        <Layout route={*route}>
                            // Keyed on the route so switching between two edit screens remounts the form.
                            <div key={route.path()}>{ content }</div>
                        </Layout>
                    </ToastProvider>
                </ContextProvider<Navigator>>
            </ContextProvider<ApiClient>>
        </ContextProvider<Rc<AppConfig>>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_and_detail_routes_stay_in_their_section() {
        assert_eq!(Route::HouseDetail(3).section(), Section::Houses);
        assert_eq!(Route::PaymentEdit(5).section(), Section::Payments);
        assert_eq!(Route::MonthlyDetail.section(), Section::Reports);
        assert_eq!(Route::ResidentCreate.section(), Section::Residents);
    }

    #[test]
    fn paths_embed_record_ids() {
        assert_eq!(Route::HouseDetail(3).path(), "/houses/3");
        assert_eq!(Route::ExpenseEdit(8).path(), "/expenses/8/edit");
        assert_eq!(Route::Dashboard.path(), "/");
    }
}
