use yew::prelude::*;

use crate::components::data::use_data;
use crate::services::payments::{Payment, PaymentStatus};
use crate::services::projects::{Project, ProjectStatus};
use crate::utils;

fn active_project_count(projects: &[Project]) -> usize {
    projects
        .iter()
        .filter(|p| matches!(p.status, ProjectStatus::Active | ProjectStatus::InProgress))
        .count()
}

fn due_payment_count(payments: &[Payment]) -> usize {
    payments.iter().filter(|p| p.status == PaymentStatus::Due).count()
}

fn recent_projects(projects: &[Project]) -> &[Project] {
    &projects[..projects.len().min(3)]
}

fn upcoming_payments(payments: &[Payment]) -> Vec<&Payment> {
    payments
        .iter()
        .filter(|p| matches!(p.status, PaymentStatus::Due | PaymentStatus::Upcoming))
        .take(3)
        .collect()
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    color_class: &'static str,
    icon: Html,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={format!("rounded-lg shadow p-6 {}", props.color_class)}>
            <div class="flex items-center">
                <div class="flex-shrink-0">{ props.icon.clone() }</div>
                <div class="ml-4">
                    <h3 class="text-sm font-medium">{ props.title }</h3>
                    <p class="text-2xl font-semibold">{ &props.value }</p>
                </div>
            </div>
        </div>
    }
}

fn card_icon(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg class={class} fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path}/>
        </svg>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let data = use_data();

    let first_load = (data.projects.is_none() && data.projects_loading)
        || (data.payments.is_none() && data.payments_loading)
        || (data.clients.is_none() && data.clients_loading);

    if first_load {
        return html! {
            <div class="h-64 flex items-center justify-center text-gray-500">
                <svg class="animate-spin h-6 w-6 text-indigo-600 mr-2" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8v8z"></path>
                </svg>
                {"Loading dashboard..."}
            </div>
        };
    }

    let projects = data.projects.clone().unwrap_or_default();
    let payments = data.payments.clone().unwrap_or_default();
    let clients = data.clients.clone().unwrap_or_default();

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    title="Active Projects"
                    value={active_project_count(&projects).to_string()}
                    color_class="bg-blue-100 text-blue-800"
                    icon={card_icon("M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z", "w-5 h-5 text-blue-500")}
                />
                <StatCard
                    title="Upcoming Payments"
                    value={due_payment_count(&payments).to_string()}
                    color_class="bg-green-100 text-green-800"
                    icon={card_icon("M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z", "w-5 h-5 text-green-500")}
                />
                <StatCard
                    title="Total Clients"
                    value={clients.len().to_string()}
                    color_class="bg-purple-100 text-purple-800"
                    icon={card_icon("M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z", "w-5 h-5 text-purple-500")}
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white rounded-lg shadow p-6">
                    <h3 class="text-lg font-semibold mb-4">{"Recent Projects"}</h3>
                    <div class="space-y-4">
                        { for recent_projects(&projects).iter().map(|project| html! {
                            <div key={project.id} class="flex items-center justify-between p-3 border-b last:border-b-0">
                                <div>
                                    <h4 class="font-medium">{ &project.name }</h4>
                                    <p class="text-sm text-gray-500">{ format!("Client: {}", project.client.name) }</p>
                                </div>
                                <span class={format!("px-2 py-1 text-xs rounded-full {}", project.status.badge_class())}>
                                    { project.status.label() }
                                </span>
                            </div>
                        }) }
                    </div>
                    <button class="mt-4 text-sm text-indigo-600 hover:text-indigo-800 font-medium">
                        {"View all projects \u{2192}"}
                    </button>
                </div>

                <div class="bg-white rounded-lg shadow p-6">
                    <h3 class="text-lg font-semibold mb-4">{"Upcoming Payments"}</h3>
                    <div class="space-y-4">
                        { for upcoming_payments(&payments).iter().map(|payment| html! {
                            <div key={payment.id} class="flex items-center justify-between p-3 border-b last:border-b-0">
                                <div>
                                    <h4 class="font-medium">{ &payment.project }</h4>
                                    <p class="text-sm text-gray-500">
                                        { format!("{} \u{2022} {}", payment.client, utils::format_date(&payment.date)) }
                                    </p>
                                </div>
                                <div class="text-right">
                                    <p class="font-medium">{ &payment.amount }</p>
                                    <span class={format!("px-2 py-1 text-xs rounded-full {}", payment.status.badge_class())}>
                                        { payment.status.label() }
                                    </span>
                                </div>
                            </div>
                        }) }
                    </div>
                    <button class="mt-4 text-sm text-indigo-600 hover:text-indigo-800 font-medium">
                        {"View all payments \u{2192}"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::projects::ClientRef;

    fn project(id: i64, status: ProjectStatus) -> Project {
        Project {
            id,
            name: format!("Project {}", id),
            description: None,
            status,
            due_amount: "$500".to_string(),
            final_payment_date: None,
            client: ClientRef { id: 1, name: "Acme Corp".to_string() },
            access_key: None,
        }
    }

    fn payment(id: i64, status: PaymentStatus) -> Payment {
        Payment {
            id,
            project: format!("Project {}", id),
            client: "Acme Corp".to_string(),
            date: "2025-06-01".to_string(),
            amount: "$1,200".to_string(),
            status,
        }
    }

    #[test]
    fn active_count_includes_both_active_spellings() {
        let projects = vec![
            project(1, ProjectStatus::Active),
            project(2, ProjectStatus::InProgress),
            project(3, ProjectStatus::Pending),
            project(4, ProjectStatus::Completed),
        ];
        assert_eq!(active_project_count(&projects), 2);
    }

    #[test]
    fn due_count_ignores_paid_and_upcoming() {
        let payments = vec![
            payment(1, PaymentStatus::Paid),
            payment(2, PaymentStatus::Due),
            payment(3, PaymentStatus::Upcoming),
            payment(4, PaymentStatus::Due),
        ];
        assert_eq!(due_payment_count(&payments), 2);
    }

    #[test]
    fn recent_projects_caps_at_three() {
        let projects: Vec<Project> =
            (1..=5).map(|id| project(id, ProjectStatus::Active)).collect();
        assert_eq!(recent_projects(&projects).len(), 3);
        assert_eq!(recent_projects(&projects)[0].id, 1);

        let short = vec![project(9, ProjectStatus::Pending)];
        assert_eq!(recent_projects(&short).len(), 1);
    }

    #[test]
    fn upcoming_list_keeps_due_and_upcoming_only() {
        let payments = vec![
            payment(1, PaymentStatus::Paid),
            payment(2, PaymentStatus::Due),
            payment(3, PaymentStatus::Upcoming),
            payment(4, PaymentStatus::Due),
            payment(5, PaymentStatus::Upcoming),
        ];

        let upcoming = upcoming_payments(&payments);
        assert_eq!(upcoming.len(), 3);
        assert!(upcoming.iter().all(|p| p.status != PaymentStatus::Paid));
        assert_eq!(upcoming[0].id, 2);
    }
}
