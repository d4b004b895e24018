use yew::prelude::*;

use crate::components::data::use_data;
use crate::components::modal::ModalKind;
use crate::utils;

#[derive(Properties, PartialEq)]
pub struct ProjectsPageProps {
    pub on_open_modal: Callback<ModalKind>,
    pub on_show_snippet: Callback<String>,
}

#[function_component(ProjectsPage)]
pub fn projects_page(props: &ProjectsPageProps) -> Html {
    let data = use_data();

    let on_add = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(ModalKind::CreateProject))
    };

    let projects = data.projects.clone().unwrap_or_default();

    html! {
        <div class="bg-white rounded-lg shadow">
            <div class="p-6 border-b border-gray-200 flex items-center justify-between">
                <h3 class="text-lg font-semibold">{"All Projects"}</h3>
                <button
                    onclick={on_add}
                    class="bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 flex items-center"
                >
                    <svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4"/>
                    </svg>
                    {"Add Project"}
                </button>
            </div>

            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Project Name"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Client"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Next Payment"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Amount"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        if data.projects_loading {
                            <tr>
                                <td colspan="6" class="px-6 py-8 text-center text-gray-500">
                                    <svg class="animate-spin h-5 w-5 text-indigo-600 inline mr-2" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8v8z"></path>
                                    </svg>
                                    {"Loading projects..."}
                                </td>
                            </tr>
                        } else if projects.is_empty() {
                            <tr>
                                <td colspan="6" class="px-6 py-8 text-center text-gray-500">{"No projects found"}</td>
                            </tr>
                        } else {
                            { for projects.iter().map(|project| {
                                let on_edit = {
                                    let on_open_modal = props.on_open_modal.clone();
                                    let project = project.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_open_modal.emit(ModalKind::EditProject(project.clone()))
                                    })
                                };
                                let snippet_button = project.access_key.clone().map(|key| {
                                    let on_show_snippet = props.on_show_snippet.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        on_show_snippet.emit(key.clone())
                                    });
                                    html! {
                                        <button onclick={onclick} class="text-gray-600 hover:text-gray-800" title="Paywall snippet">
                                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 7a2 2 0 012 2m4 0a6 6 0 01-7.743 5.743L11 17H9v2H7v2H4a1 1 0 01-1-1v-2.586a1 1 0 01.293-.707l5.964-5.964A6 6 0 1121 9z"/>
                                            </svg>
                                        </button>
                                    }
                                });
                                let on_delete = {
                                    let delete_project = data.delete_project.clone();
                                    let id = project.id;
                                    Callback::from(move |_: MouseEvent| {
                                        if utils::confirm("Are you sure you want to delete this project?") {
                                            delete_project.emit(id);
                                        }
                                    })
                                };
                                let next_payment = project
                                    .final_payment_date
                                    .as_deref()
                                    .map(utils::format_date)
                                    .unwrap_or_else(|| "-".to_string());
                                html! {
                                    <tr key={project.id} class="hover:bg-gray-50">
                                        <td class="px-6 py-4 whitespace-nowrap font-medium text-gray-900">{ &project.name }</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-500">{ &project.client.name }</td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <span class={format!("px-2 py-1 text-xs rounded-full {}", project.status.badge_class())}>
                                                { project.status.label() }
                                            </span>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-500">{ next_payment }</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-gray-500">{ &project.due_amount }</td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="flex items-center space-x-3">
                                                <button onclick={on_edit} class="text-indigo-600 hover:text-indigo-800" title="Edit project">
                                                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"/>
                                                    </svg>
                                                </button>
                                                { snippet_button.unwrap_or_default() }
                                                <button onclick={on_delete} class="text-red-600 hover:text-red-800" title="Delete project">
                                                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"/>
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
