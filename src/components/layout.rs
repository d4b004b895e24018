use yew::prelude::*;

use crate::components::auth::AuthContext;
use crate::components::data::use_data;
use crate::components::modal::{Modal, ModalKind};
use crate::pages::clients::ClientsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::payments::PaymentsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::projects::ProjectsPage;
use crate::paywall::PaywallModal;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Dashboard,
    Clients,
    Projects,
    Payments,
    Profile,
}

impl Tab {
    pub fn all() -> [Tab; 5] {
        [Tab::Dashboard, Tab::Clients, Tab::Projects, Tab::Payments, Tab::Profile]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Clients => "Clients",
            Tab::Projects => "Projects",
            Tab::Payments => "Payments",
            Tab::Profile => "Admin Profile",
        }
    }

    // Header heading for the active tab
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Clients => "Client Management",
            Tab::Projects => "Project Management",
            Tab::Payments => "Payment Details",
            Tab::Profile => "Admin Profile",
        }
    }
}

fn tab_icon(tab: Tab) -> Html {
    let path = match tab {
        Tab::Dashboard => "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
        Tab::Clients => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
        Tab::Projects => "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
        Tab::Payments => "M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z",
        Tab::Profile => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
    };

    html! {
        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path}/>
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarItemProps {
    tab: Tab,
    active: bool,
    expanded: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(SidebarItem)]
fn sidebar_item(props: &SidebarItemProps) -> Html {
    let classes = if props.active {
        "bg-indigo-700 text-white"
    } else {
        "text-indigo-200 hover:bg-indigo-700 hover:text-white"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            class={format!("flex items-center py-3 px-4 w-full {}", classes)}
        >
            <span class="flex-shrink-0">{ tab_icon(props.tab) }</span>
            if props.expanded {
                <span class="ml-3">{ props.tab.label() }</span>
            }
        </button>
    }
}

#[function_component(Layout)]
pub fn layout() -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");
    let data = use_data();

    let active_tab = use_state(|| Tab::Dashboard);
    let sidebar_open = use_state(|| true);
    let modal = use_state(|| None::<ModalKind>);
    let paywall_key = use_state(|| None::<String>);

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(!*sidebar_open))
    };

    let set_tab = {
        let active_tab = active_tab.clone();
        move |tab: Tab| {
            let active_tab = active_tab.clone();
            Callback::from(move |_| active_tab.set(tab))
        }
    };

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |kind: ModalKind| modal.set(Some(kind)))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    // Project saves close the overlay, refetch once, and surface the minted
    // access key when the backend returned one.
    let on_project_saved = {
        let modal = modal.clone();
        let paywall_key = paywall_key.clone();
        let refresh_projects = data.refresh_projects.clone();
        Callback::from(move |access_key: Option<String>| {
            modal.set(None);
            refresh_projects.emit(());
            if let Some(key) = access_key {
                paywall_key.set(Some(key));
            }
        })
    };

    let on_show_snippet = {
        let paywall_key = paywall_key.clone();
        Callback::from(move |key: String| paywall_key.set(Some(key)))
    };

    let close_paywall = {
        let paywall_key = paywall_key.clone();
        Callback::from(move |_: ()| paywall_key.set(None))
    };

    let display_name = auth_ctx
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| "Admin".to_string());
    let initial = display_name.chars().next().map(|c| c.to_string()).unwrap_or_default();

    let sidebar_width = if *sidebar_open { "w-64" } else { "w-20" };

    let content = match *active_tab {
        Tab::Dashboard => html! { <DashboardPage /> },
        Tab::Clients => html! { <ClientsPage on_open_modal={open_modal.clone()} /> },
        Tab::Projects => html! {
            <ProjectsPage
                on_open_modal={open_modal.clone()}
                on_show_snippet={on_show_snippet.clone()}
            />
        },
        Tab::Payments => html! { <PaymentsPage /> },
        Tab::Profile => html! { <ProfilePage /> },
    };

    html! {
        <div class="flex h-screen bg-gray-100">
            <div class={format!("bg-indigo-800 text-white {} transition-all duration-300 flex flex-col", sidebar_width)}>
                <div class="p-4 flex items-center justify-between">
                    if *sidebar_open {
                        <h1 class="text-xl font-bold">{"TechWire Services"}</h1>
                    }
                    <button onclick={toggle_sidebar} class="p-1 rounded-md hover:bg-indigo-700">
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            if *sidebar_open {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            } else {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            }
                        </svg>
                    </button>
                </div>

                <nav class="flex-1 pt-4">
                    { for Tab::all().iter().map(|tab| html! {
                        <>
                            if *tab == Tab::Profile {
                                <div class="border-t border-indigo-700 my-4"></div>
                            }
                            <SidebarItem
                                tab={*tab}
                                active={*active_tab == *tab}
                                expanded={*sidebar_open}
                                onclick={set_tab(*tab)}
                            />
                        </>
                    }) }
                </nav>
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <header class="bg-white border-b border-gray-200 p-4 flex justify-between items-center">
                    <h2 class="text-xl font-semibold text-gray-800">{ active_tab.title() }</h2>
                    <div class="flex items-center space-x-4">
                        <div class="flex items-center cursor-pointer">
                            <div class="h-8 w-8 rounded-full bg-indigo-600 flex items-center justify-center text-white font-medium">
                                { initial }
                            </div>
                            <span class="ml-2 text-gray-700">{ display_name }</span>
                            <svg class="w-4 h-4 text-gray-500 ml-1" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"/>
                            </svg>
                        </div>
                        <button
                            onclick={auth_ctx.logout.reform(|_| ())}
                            class="text-sm text-gray-600 hover:text-gray-800"
                        >
                            {"Logout"}
                        </button>
                    </div>
                </header>

                <main class="flex-1 overflow-y-auto p-4">
                    { content }
                </main>
            </div>

            if let Some(kind) = (*modal).clone() {
                <Modal
                    {kind}
                    on_close={close_modal.clone()}
                    on_project_saved={on_project_saved.clone()}
                />
            }

            if let Some(key) = (*paywall_key).clone() {
                <PaywallModal access_key={key} on_close={close_paywall.clone()} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_a_header_title() {
        assert_eq!(Tab::Dashboard.title(), "Dashboard");
        assert_eq!(Tab::Clients.title(), "Client Management");
        assert_eq!(Tab::Projects.title(), "Project Management");
        assert_eq!(Tab::Payments.title(), "Payment Details");
        assert_eq!(Tab::Profile.title(), "Admin Profile");
    }

    #[test]
    fn sidebar_labels_differ_from_titles_where_the_product_does() {
        assert_eq!(Tab::Clients.label(), "Clients");
        assert_eq!(Tab::Profile.label(), "Admin Profile");
        assert_eq!(Tab::all().len(), 5);
    }
}
