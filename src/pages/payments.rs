use chrono::{Datelike, NaiveDate};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::data::use_data;
use crate::services::payments::{Payment, PaymentStatus};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeWindow {
    AllTime,
    ThisMonth,
    ThisQuarter,
    ThisYear,
}

impl TimeWindow {
    fn from_value(value: &str) -> TimeWindow {
        match value {
            "month" => TimeWindow::ThisMonth,
            "quarter" => TimeWindow::ThisQuarter,
            "year" => TimeWindow::ThisYear,
            _ => TimeWindow::AllTime,
        }
    }
}

fn status_from_value(value: &str) -> Option<PaymentStatus> {
    match value {
        "paid" => Some(PaymentStatus::Paid),
        "due" => Some(PaymentStatus::Due),
        "upcoming" => Some(PaymentStatus::Upcoming),
        _ => None,
    }
}

// A payment whose date the backend sent in an unrecognized shape only shows
// up under "All Time".
fn in_window(date: Option<NaiveDate>, today: NaiveDate, window: TimeWindow) -> bool {
    if window == TimeWindow::AllTime {
        return true;
    }
    let Some(date) = date else {
        return false;
    };
    if date.year() != today.year() {
        return false;
    }
    match window {
        TimeWindow::AllTime => true,
        TimeWindow::ThisMonth => date.month() == today.month(),
        TimeWindow::ThisQuarter => date.month0() / 3 == today.month0() / 3,
        TimeWindow::ThisYear => true,
    }
}

fn filter_payments<'a>(
    payments: &'a [Payment],
    query: &str,
    status: Option<PaymentStatus>,
    window: TimeWindow,
    today: NaiveDate,
) -> Vec<&'a Payment> {
    let needle = query.trim().to_lowercase();
    payments
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.project.to_lowercase().contains(&needle)
                || p.client.to_lowercase().contains(&needle)
        })
        .filter(|p| status.map_or(true, |wanted| p.status == wanted))
        .filter(|p| in_window(utils::parse_wire_date(&p.date), today, window))
        .collect()
}

fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or(NaiveDate::MIN)
}

#[function_component(PaymentsPage)]
pub fn payments_page() -> Html {
    let data = use_data();
    let query = use_state(String::new);
    let status_filter = use_state(|| None::<PaymentStatus>);
    let window = use_state(|| TimeWindow::AllTime);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status_filter.set(status_from_value(&select.value()));
        })
    };

    let on_window_change = {
        let window = window.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            window.set(TimeWindow::from_value(&select.value()));
        })
    };

    let on_refresh = data.refresh_payments.reform(|_: MouseEvent| ());

    let payments = data.payments.clone().unwrap_or_default();
    let visible = filter_payments(&payments, &query, *status_filter, *window, today());

    html! {
        <div>
            <div class="flex flex-col sm:flex-row sm:justify-between sm:items-center gap-4 mb-6">
                <div class="relative">
                    <svg class="w-5 h-5 text-gray-400 absolute left-3 top-2.5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
                    </svg>
                    <input
                        type="text"
                        placeholder="Search payments..."
                        class="pl-10 pr-4 py-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                        value={(*query).clone()}
                        oninput={oninput}
                    />
                </div>
                <div class="flex space-x-2">
                    <select class="border border-gray-300 rounded-md p-2 text-sm" onchange={on_status_change}>
                        <option value="all" selected={status_filter.is_none()}>{"All Statuses"}</option>
                        <option value="paid" selected={*status_filter == Some(PaymentStatus::Paid)}>{"Paid"}</option>
                        <option value="due" selected={*status_filter == Some(PaymentStatus::Due)}>{"Due"}</option>
                        <option value="upcoming" selected={*status_filter == Some(PaymentStatus::Upcoming)}>{"Upcoming"}</option>
                    </select>
                    <select class="border border-gray-300 rounded-md p-2 text-sm" onchange={on_window_change}>
                        <option value="all" selected={*window == TimeWindow::AllTime}>{"All Time"}</option>
                        <option value="month" selected={*window == TimeWindow::ThisMonth}>{"This Month"}</option>
                        <option value="quarter" selected={*window == TimeWindow::ThisQuarter}>{"This Quarter"}</option>
                        <option value="year" selected={*window == TimeWindow::ThisYear}>{"This Year"}</option>
                    </select>
                    <button
                        onclick={on_refresh}
                        class="border border-gray-300 rounded-md p-2 text-sm text-gray-600 hover:bg-gray-50 flex items-center"
                        title="Refresh payments"
                    >
                        <svg class="w-4 h-4 mr-1" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/>
                        </svg>
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Project"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Client"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Amount"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        if data.payments_loading {
                            <tr>
                                <td colspan="5" class="px-6 py-8 text-center text-gray-500">
                                    <svg class="animate-spin h-5 w-5 text-indigo-600 inline mr-2" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8v8z"></path>
                                    </svg>
                                    {"Loading payments..."}
                                </td>
                            </tr>
                        } else if visible.is_empty() {
                            <tr>
                                <td colspan="5" class="px-6 py-8 text-center text-gray-500">{"No payments found"}</td>
                            </tr>
                        } else {
                            { for visible.iter().map(|payment| html! {
                                <tr key={payment.id} class="hover:bg-gray-50">
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <div class="text-sm font-medium text-gray-900">{ &payment.project }</div>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{ &payment.client }</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{ utils::format_date(&payment.date) }</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ &payment.amount }</td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <span class={format!("px-2 py-1 text-xs rounded-full {}", payment.status.badge_class())}>
                                            { payment.status.label() }
                                        </span>
                                    </td>
                                </tr>
                            }) }
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(project: &str, client: &str, date: &str, status: PaymentStatus) -> Payment {
        Payment {
            id: 1,
            project: project.to_string(),
            client: client.to_string(),
            date: date.to_string(),
            amount: "$500".to_string(),
            status,
        }
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn window_matches_month_quarter_and_year() {
        let today = fixed_today();
        let may = NaiveDate::from_ymd_opt(2025, 5, 2);
        let april = NaiveDate::from_ymd_opt(2025, 4, 28);
        let december = NaiveDate::from_ymd_opt(2025, 12, 31);
        let last_year = NaiveDate::from_ymd_opt(2024, 5, 20);

        assert!(in_window(may, today, TimeWindow::ThisMonth));
        assert!(!in_window(april, today, TimeWindow::ThisMonth));

        assert!(in_window(april, today, TimeWindow::ThisQuarter));
        assert!(!in_window(december, today, TimeWindow::ThisQuarter));

        assert!(in_window(december, today, TimeWindow::ThisYear));
        assert!(!in_window(last_year, today, TimeWindow::ThisYear));

        assert!(in_window(last_year, today, TimeWindow::AllTime));
    }

    #[test]
    fn unparsed_dates_only_appear_under_all_time() {
        let today = fixed_today();
        assert!(in_window(None, today, TimeWindow::AllTime));
        assert!(!in_window(None, today, TimeWindow::ThisMonth));
        assert!(!in_window(None, today, TimeWindow::ThisQuarter));
        assert!(!in_window(None, today, TimeWindow::ThisYear));
    }

    #[test]
    fn filters_compose_over_query_status_and_window() {
        let payments = vec![
            payment("Website Redesign", "Acme Corp", "2025-05-01", PaymentStatus::Paid),
            payment("Mobile App", "Globex", "2025-05-10", PaymentStatus::Due),
            payment("SEO Audit", "Acme Corp", "2024-11-03", PaymentStatus::Due),
            payment("Brand Refresh", "Initech", "TBD", PaymentStatus::Upcoming),
        ];
        let today = fixed_today();

        let all = filter_payments(&payments, "", None, TimeWindow::AllTime, today);
        assert_eq!(all.len(), 4);

        let acme = filter_payments(&payments, "acme", None, TimeWindow::AllTime, today);
        assert_eq!(acme.len(), 2);

        let due = filter_payments(&payments, "", Some(PaymentStatus::Due), TimeWindow::AllTime, today);
        assert_eq!(due.len(), 2);

        let due_this_month =
            filter_payments(&payments, "", Some(PaymentStatus::Due), TimeWindow::ThisMonth, today);
        assert_eq!(due_this_month.len(), 1);
        assert_eq!(due_this_month[0].project, "Mobile App");

        let by_project = filter_payments(&payments, "seo", None, TimeWindow::AllTime, today);
        assert_eq!(by_project.len(), 1);
        assert_eq!(by_project[0].client, "Acme Corp");
    }

    #[test]
    fn select_values_map_to_filters() {
        assert_eq!(status_from_value("paid"), Some(PaymentStatus::Paid));
        assert_eq!(status_from_value("due"), Some(PaymentStatus::Due));
        assert_eq!(status_from_value("upcoming"), Some(PaymentStatus::Upcoming));
        assert_eq!(status_from_value("all"), None);

        assert_eq!(TimeWindow::from_value("month"), TimeWindow::ThisMonth);
        assert_eq!(TimeWindow::from_value("quarter"), TimeWindow::ThisQuarter);
        assert_eq!(TimeWindow::from_value("year"), TimeWindow::ThisYear);
        assert_eq!(TimeWindow::from_value("all"), TimeWindow::AllTime);
        assert_eq!(TimeWindow::from_value("bogus"), TimeWindow::AllTime);
    }
}
