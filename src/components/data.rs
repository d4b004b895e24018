// Shared collections for the dashboard. One provider owns clients, projects
// and payments; views read through context and signal refreshes instead of
// receiving setters. A failed fetch keeps whatever was already loaded.
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::clients::{self, Client};
use crate::services::payments::{self, Payment};
use crate::services::projects::{self, Project};
use crate::services::ApiResult;
use crate::utils;

#[derive(Clone, PartialEq)]
pub struct DataContext {
    pub clients: Option<Vec<Client>>,
    pub clients_loading: bool,
    pub projects: Option<Vec<Project>>,
    pub projects_loading: bool,
    pub payments: Option<Vec<Payment>>,
    pub payments_loading: bool,
    pub refresh_clients: Callback<()>,
    pub refresh_projects: Callback<()>,
    pub refresh_payments: Callback<()>,
    pub delete_project: Callback<i64>,
    pub drop_client: Callback<i64>,
}

impl Default for DataContext {
    fn default() -> Self {
        Self {
            clients: None,
            clients_loading: false,
            projects: None,
            projects_loading: false,
            payments: None,
            payments_loading: false,
            refresh_clients: Callback::noop(),
            refresh_projects: Callback::noop(),
            refresh_payments: Callback::noop(),
            delete_project: Callback::noop(),
            drop_client: Callback::noop(),
        }
    }
}

#[hook]
pub fn use_data() -> DataContext {
    use_context::<DataContext>().expect("DataContext not found")
}

#[derive(Properties, PartialEq)]
pub struct DataProviderProps {
    pub children: Children,
}

fn resolve_fetch<T>(label: &str, prev: Option<Vec<T>>, fetched: ApiResult<Vec<T>>) -> Option<Vec<T>> {
    match fetched {
        Ok(list) => Some(list),
        Err(err) => {
            log::error!("Failed to fetch {}: {}", label, err);
            prev
        }
    }
}

#[function_component(DataProvider)]
pub fn data_provider(props: &DataProviderProps) -> Html {
    let clients = use_state(|| None::<Vec<Client>>);
    let clients_loading = use_state(|| true);
    let clients_epoch = use_state(|| 0u32);

    let projects = use_state(|| None::<Vec<Project>>);
    let projects_loading = use_state(|| true);
    let projects_epoch = use_state(|| 0u32);

    let payments = use_state(|| None::<Vec<Payment>>);
    let payments_loading = use_state(|| true);
    let payments_epoch = use_state(|| 0u32);

    {
        let clients = clients.clone();
        let clients_loading = clients_loading.clone();
        use_effect_with(*clients_epoch, move |_| {
            clients_loading.set(true);
            spawn_local(async move {
                let fetched = clients::list().await;
                clients.set(resolve_fetch("clients", (*clients).clone(), fetched));
                clients_loading.set(false);
            });
            || ()
        });
    }

    {
        let projects = projects.clone();
        let projects_loading = projects_loading.clone();
        use_effect_with(*projects_epoch, move |_| {
            projects_loading.set(true);
            spawn_local(async move {
                let fetched = projects::list().await;
                projects.set(resolve_fetch("projects", (*projects).clone(), fetched));
                projects_loading.set(false);
            });
            || ()
        });
    }

    {
        let payments = payments.clone();
        let payments_loading = payments_loading.clone();
        use_effect_with(*payments_epoch, move |_| {
            payments_loading.set(true);
            spawn_local(async move {
                let fetched = payments::list().await;
                payments.set(resolve_fetch("payments", (*payments).clone(), fetched));
                payments_loading.set(false);
            });
            || ()
        });
    }

    let refresh_clients = {
        let clients_epoch = clients_epoch.clone();
        Callback::from(move |_| clients_epoch.set(*clients_epoch + 1))
    };

    let refresh_projects = {
        let projects_epoch = projects_epoch.clone();
        Callback::from(move |_| projects_epoch.set(*projects_epoch + 1))
    };

    let refresh_payments = {
        let payments_epoch = payments_epoch.clone();
        Callback::from(move |_| payments_epoch.set(*payments_epoch + 1))
    };

    let delete_project = {
        let projects_epoch = projects_epoch.clone();
        Callback::from(move |id: i64| {
            let projects_epoch = projects_epoch.clone();
            spawn_local(async move {
                match projects::delete(id).await {
                    Ok(()) => projects_epoch.set(*projects_epoch + 1),
                    Err(err) => {
                        log::error!("Failed to delete project {}: {}", id, err);
                        utils::alert("Failed to delete project. Please try again.");
                    }
                }
            });
        })
    };

    // No delete endpoint exists for clients; the row is only removed from the
    // loaded collection and comes back on the next refetch.
    let drop_client = {
        let clients = clients.clone();
        Callback::from(move |id: i64| {
            if let Some(list) = (*clients).clone() {
                clients.set(Some(list.into_iter().filter(|client| client.id != id).collect()));
            }
        })
    };

    let context = DataContext {
        clients: (*clients).clone(),
        clients_loading: *clients_loading,
        projects: (*projects).clone(),
        projects_loading: *projects_loading,
        payments: (*payments).clone(),
        payments_loading: *payments_loading,
        refresh_clients,
        refresh_projects,
        refresh_payments,
        delete_project,
        drop_client,
    };

    html! {
        <ContextProvider<DataContext> {context}>
            {props.children.clone()}
        </ContextProvider<DataContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApiError;

    fn fetch_error() -> ApiError {
        ApiError {
            message: "HTTP Error: 500".to_string(),
            code: Some("HTTP_500".to_string()),
        }
    }

    #[test]
    fn successful_fetch_replaces_the_collection() {
        let prev = Some(vec!["stale".to_string()]);
        let next = resolve_fetch("payments", prev, Ok(vec!["fresh".to_string()]));
        assert_eq!(next, Some(vec!["fresh".to_string()]));
    }

    #[test]
    fn failed_fetch_keeps_the_loaded_collection() {
        let prev = Some(vec!["kept".to_string()]);
        assert_eq!(resolve_fetch("projects", prev.clone(), Err(fetch_error())), prev);
    }

    #[test]
    fn failed_first_fetch_stays_empty() {
        let next: Option<Vec<String>> = resolve_fetch("clients", None, Err(fetch_error()));
        assert_eq!(next, None);
    }
}
