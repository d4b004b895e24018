use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::data::use_data;
use crate::components::modal::ModalKind;
use crate::services::clients::Client;

fn filter_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return clients.iter().collect();
    }
    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.email.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ClientsPageProps {
    pub on_open_modal: Callback<ModalKind>,
}

#[function_component(ClientsPage)]
pub fn clients_page(props: &ClientsPageProps) -> Html {
    let data = use_data();
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_add = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(ModalKind::CreateClient))
    };

    let clients = data.clients.clone().unwrap_or_default();
    let visible = filter_clients(&clients, &query);

    html! {
        <div class="bg-white rounded-lg shadow">
            <div class="p-6 border-b border-gray-200 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <div class="relative">
                    <input
                        type="text"
                        placeholder="Search clients..."
                        class="pl-10 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
                        value={(*query).clone()}
                        oninput={oninput}
                    />
                    <svg class="w-5 h-5 text-gray-400 absolute left-3 top-2.5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
                    </svg>
                </div>
                <button
                    onclick={on_add}
                    class="bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 flex items-center"
                >
                    <svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4"/>
                    </svg>
                    {"Add Client"}
                </button>
            </div>

            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Name"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Email"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Projects"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Last Payment"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        if data.clients_loading {
                            <tr>
                                <td colspan="5" class="px-6 py-8 text-center text-gray-500">
                                    <svg class="animate-spin h-5 w-5 text-indigo-600 inline mr-2" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8v8z"></path>
                                    </svg>
                                    {"Loading clients..."}
                                </td>
                            </tr>
                        } else if visible.is_empty() {
                            <tr>
                                <td colspan="5" class="px-6 py-8 text-center text-gray-500">{"No clients found"}</td>
                            </tr>
                        } else {
                            { for visible.iter().map(|client| {
                                let client = (*client).clone();
                                let on_edit = {
                                    let on_open_modal = props.on_open_modal.clone();
                                    let client = client.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_open_modal.emit(ModalKind::EditClient(client.clone()))
                                    })
                                };
                                let on_credentials = {
                                    let on_open_modal = props.on_open_modal.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_open_modal.emit(ModalKind::CreateCredentials)
                                    })
                                };
                                let on_remove = {
                                    let drop_client = data.drop_client.clone();
                                    let id = client.id;
                                    Callback::from(move |_: MouseEvent| drop_client.emit(id))
                                };
                                let initial = client.name.chars().next().unwrap_or('?').to_uppercase().to_string();
                                html! {
                                    <tr key={client.id} class="hover:bg-gray-50">
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="flex items-center">
                                                <div class="h-10 w-10 flex-shrink-0 rounded-full bg-gray-200 flex items-center justify-center text-gray-600 font-medium">
                                                    { initial }
                                                </div>
                                                <div class="ml-4">
                                                    <div class="text-sm font-medium text-gray-900">{ &client.name }</div>
                                                </div>
                                            </div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{ &client.email }</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{ client.counts.projects }</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{"-"}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            <div class="flex space-x-2">
                                                <button onclick={on_edit} class="text-indigo-600 hover:text-indigo-900" title="Edit client">
                                                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"/>
                                                    </svg>
                                                </button>
                                                <button onclick={on_remove} class="text-red-600 hover:text-red-900" title="Remove client">
                                                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"/>
                                                    </svg>
                                                </button>
                                                <button onclick={on_credentials} class="text-gray-600 hover:text-gray-900" title="Create credentials">
                                                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"/>
                                                    </svg>
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
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
    use crate::services::clients::ClientCounts;

    fn client(name: &str, email: &str) -> Client {
        Client {
            id: 1,
            name: name.to_string(),
            email: email.to_string(),
            counts: ClientCounts { projects: 0 },
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let clients = vec![client("Acme Corp", "ops@acme.com"), client("Globex", "it@globex.com")];
        assert_eq!(filter_clients(&clients, "").len(), 2);
        assert_eq!(filter_clients(&clients, "   ").len(), 2);
    }

    #[test]
    fn query_matches_name_or_email_case_insensitively() {
        let clients = vec![
            client("Acme Corp", "ops@acme.com"),
            client("Globex", "it@globex.com"),
            client("Initech", "billing@initech.io"),
        ];

        let by_name = filter_clients(&clients, "ACME");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Acme Corp");

        let by_email = filter_clients(&clients, "globex.com");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Globex");

        assert!(filter_clients(&clients, "umbrella").is_empty());
    }
}
