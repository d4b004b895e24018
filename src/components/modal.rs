use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::data::use_data;
use crate::services::auth::{self, RegisterRequest};
use crate::services::clients::Client;
use crate::services::projects::{self, Project, ProjectStatus, SaveProjectRequest};
use crate::utils;

// Every overlay form the dashboard can open, with the record it operates on.
#[derive(Clone, PartialEq)]
pub enum ModalKind {
    CreateClient,
    EditClient(Client),
    CreateProject,
    EditProject(Project),
    CreateCredentials,
}

impl ModalKind {
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::CreateClient => "Create New Client",
            ModalKind::EditClient(_) => "Edit Client",
            ModalKind::CreateProject => "Create New Project",
            ModalKind::EditProject(_) => "Edit Project",
            ModalKind::CreateCredentials => "Create User Credentials",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub kind: ModalKind,
    pub on_close: Callback<()>,
    /// Fired after a project create/update succeeds; carries the access key
    /// minted by the backend when one came back on the response.
    pub on_project_saved: Callback<Option<String>>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let body = match &props.kind {
        ModalKind::CreateClient => html! { <ClientForm /> },
        ModalKind::EditClient(client) => html! {
            <ClientForm existing={Some(client.clone())} />
        },
        ModalKind::CreateProject => html! {
            <ProjectForm
                on_close={props.on_close.clone()}
                on_saved={props.on_project_saved.clone()}
            />
        },
        ModalKind::EditProject(project) => html! {
            <ProjectForm
                existing={Some(project.clone())}
                on_close={props.on_close.clone()}
                on_saved={props.on_project_saved.clone()}
            />
        },
        ModalKind::CreateCredentials => html! {
            <CredentialsForm on_close={props.on_close.clone()} />
        },
    };

    html! {
        <div class="fixed inset-0 bg-transparent backdrop-blur-sm flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-lg w-full max-w-md p-6">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-medium">{ props.kind.title() }</h3>
                    <button
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class="text-gray-500 hover:text-gray-700"
                    >
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </button>
                </div>

                <div class="space-y-4">
                    { body }
                </div>
            </div>
        </div>
    }
}

// ============================================
// CLIENT FORM (unwired)
// ============================================

#[derive(Properties, PartialEq)]
pub struct ClientFormProps {
    #[prop_or_default]
    pub existing: Option<Client>,
}

// TODO: the backend has no client update endpoint yet; wire a submit handler
// here once PUT /clients/{id} lands. Until then the form renders but only
// the header close button leaves it.
#[function_component(ClientForm)]
pub fn client_form(props: &ClientFormProps) -> Html {
    let name = use_state(|| {
        props.existing.as_ref().map(|c| c.name.clone()).unwrap_or_default()
    });
    let email = use_state(|| {
        props.existing.as_ref().map(|c| c.email.clone()).unwrap_or_default()
    });

    let name_oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let email_oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    html! {
        <>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Name"}</label>
                <input
                    type="text"
                    class="w-full p-2 border border-gray-300 rounded-md"
                    value={(*name).clone()}
                    oninput={name_oninput}
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                <input
                    type="email"
                    class="w-full p-2 border border-gray-300 rounded-md"
                    value={(*email).clone()}
                    oninput={email_oninput}
                />
            </div>
        </>
    }
}

// ============================================
// PROJECT FORM
// ============================================

#[derive(Properties, PartialEq)]
pub struct ProjectFormProps {
    #[prop_or_default]
    pub existing: Option<Project>,
    pub on_close: Callback<()>,
    pub on_saved: Callback<Option<String>>,
}

// The select only offers the known statuses; a record that arrived with an
// unrecognized wire value seeds as Active, the option the browser shows for it.
fn seeded_status(existing: Option<&Project>) -> ProjectStatus {
    existing
        .map(|p| p.status)
        .filter(|s| *s != ProjectStatus::Unknown)
        .unwrap_or(ProjectStatus::Active)
}

#[function_component(ProjectForm)]
pub fn project_form(props: &ProjectFormProps) -> Html {
    let data = use_data();
    let clients = data.clients.clone().unwrap_or_default();

    let name = use_state(|| {
        props.existing.as_ref().map(|p| p.name.clone()).unwrap_or_default()
    });
    let client_id = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|p| p.client.id.to_string())
            .unwrap_or_default()
    });
    let status = use_state(|| seeded_status(props.existing.as_ref()));
    let payment_date = use_state(|| {
        props
            .existing
            .as_ref()
            .and_then(|p| p.final_payment_date.as_deref())
            .map(utils::date_input_value)
            .unwrap_or_default()
    });
    let due_amount = use_state(|| {
        props.existing.as_ref().map(|p| p.due_amount.clone()).unwrap_or_default()
    });
    let description = use_state(|| {
        props
            .existing
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default()
    });
    let submitting = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let client_id = client_id.clone();
        let status = status.clone();
        let payment_date = payment_date.clone();
        let due_amount = due_amount.clone();
        let description = description.clone();
        let submitting = submitting.clone();
        let existing_id = props.existing.as_ref().map(|p| p.id);
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(client_id) = (*client_id).parse::<i64>() else {
                return;
            };

            let request = SaveProjectRequest {
                name: (*name).clone(),
                client_id,
                status: *status,
                due_amount: (*due_amount).clone(),
                final_payment_date: (*payment_date).clone(),
                description: (*description).clone(),
            };

            submitting.set(true);

            let submitting = submitting.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match existing_id {
                    Some(id) => projects::update(id, &request).await,
                    None => projects::create(&request).await,
                };

                match result {
                    Ok(project) => {
                        // Only a freshly created project gets its key shown
                        let access_key = if existing_id.is_none() {
                            project.access_key
                        } else {
                            None
                        };
                        on_saved.emit(access_key);
                    }
                    Err(err) => {
                        log::error!("Failed to save project: {}", err);
                        utils::alert("Failed to save project. Please try again.");
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let name_oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let client_onchange = {
        let client_id = client_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            client_id.set(select.value());
        })
    };

    let status_onchange = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(ProjectStatus::from_wire(&select.value()));
        })
    };

    let date_oninput = {
        let payment_date = payment_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            payment_date.set(input.value());
        })
    };

    let amount_oninput = {
        let due_amount = due_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            due_amount.set(input.value());
        })
    };

    let description_oninput = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(textarea.value());
        })
    };

    html! {
        <form onsubmit={on_submit}>
            <div class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Project Name"}</label>
                    <input
                        type="text"
                        class="w-full p-2 border border-gray-300 rounded-md"
                        value={(*name).clone()}
                        oninput={name_oninput}
                        required=true
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Client"}</label>
                    <select
                        class="w-full p-2 border border-gray-300 rounded-md"
                        onchange={client_onchange}
                        required=true
                    >
                        <option value="" selected={client_id.is_empty()} disabled=true>
                            {"Select Client"}
                        </option>
                        { for clients.iter().map(|client| html! {
                            <option
                                value={client.id.to_string()}
                                selected={*client_id == client.id.to_string()}
                            >
                                { &client.name }
                            </option>
                        }) }
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Status"}</label>
                    <select
                        class="w-full p-2 border border-gray-300 rounded-md"
                        onchange={status_onchange}
                        required=true
                    >
                        { for ProjectStatus::all().iter().map(|s| html! {
                            <option value={s.as_wire()} selected={*status == *s}>
                                { s.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Next Payment Date"}</label>
                    <input
                        type="date"
                        class="w-full p-2 border border-gray-300 rounded-md"
                        value={(*payment_date).clone()}
                        oninput={date_oninput}
                        required=true
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Amount"}</label>
                    <input
                        type="text"
                        class="w-full p-2 border border-gray-300 rounded-md"
                        value={(*due_amount).clone()}
                        oninput={amount_oninput}
                        required=true
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Description"}</label>
                    <textarea
                        class="w-full p-2 border border-gray-300 rounded-md min-h-44"
                        value={(*description).clone()}
                        oninput={description_oninput}
                    />
                </div>
                <div class="flex justify-end space-x-3 pt-4">
                    <button
                        type="button"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200"
                        disabled={*submitting}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700"
                        disabled={*submitting}
                    >
                        { if *submitting { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </div>
        </form>
    }
}

// ============================================
// CREDENTIALS FORM
// ============================================

#[derive(Properties, PartialEq)]
pub struct CredentialsFormProps {
    pub on_close: Callback<()>,
}

#[function_component(CredentialsForm)]
pub fn credentials_form(props: &CredentialsFormProps) -> Html {
    let data = use_data();
    let clients = data.clients.clone().unwrap_or_default();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| "client".to_string());
    let assigned_client = use_state(String::new);

    let on_save = {
        let username = username.clone();
        let password = password.clone();
        let role = role.clone();
        let assigned_client = assigned_client.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_: MouseEvent| {
            let request = RegisterRequest {
                username: (*username).clone(),
                password: (*password).clone(),
                role: (*role).clone(),
                assigned_client_id: (*assigned_client).parse::<i64>().ok(),
            };

            let on_close = on_close.clone();
            spawn_local(async move {
                match auth::register(&request).await {
                    Ok(()) => {
                        utils::alert("User credentials created successfully!");
                        on_close.emit(());
                    }
                    Err(err) => utils::alert(&err.message),
                }
            });
        })
    };

    let username_oninput = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let password_oninput = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let role_onchange = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            role.set(select.value());
        })
    };

    let assigned_onchange = {
        let assigned_client = assigned_client.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            assigned_client.set(select.value());
        })
    };

    html! {
        <>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Username"}</label>
                <input
                    type="text"
                    class="w-full p-2 border border-gray-300 rounded-md"
                    value={(*username).clone()}
                    oninput={username_oninput}
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                <input
                    type="password"
                    class="w-full p-2 border border-gray-300 rounded-md"
                    value={(*password).clone()}
                    oninput={password_oninput}
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"User Type"}</label>
                <select
                    class="w-full p-2 border border-gray-300 rounded-md"
                    onchange={role_onchange}
                >
                    <option value="client" selected={*role == "client"}>{"Client"}</option>
                    <option value="admin" selected={*role == "admin"}>{"Admin"}</option>
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Assign to Client"}</label>
                <select
                    class="w-full p-2 border border-gray-300 rounded-md"
                    onchange={assigned_onchange}
                >
                    <option value="" selected={assigned_client.is_empty()}>{"Select Client"}</option>
                    { for clients.iter().map(|client| html! {
                        <option
                            value={client.id.to_string()}
                            selected={*assigned_client == client.id.to_string()}
                        >
                            { &client.name }
                        </option>
                    }) }
                </select>
            </div>
            <div class="flex justify-end space-x-3 pt-4">
                <button
                    onclick={props.on_close.reform(|_: MouseEvent| ())}
                    class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_save}
                    class="px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700"
                >
                    {"Save"}
                </button>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clients::ClientCounts;
    use crate::services::projects::ClientRef;

    fn sample_client() -> Client {
        Client {
            id: 1,
            name: "Acme Corp".to_string(),
            email: "ops@acme.test".to_string(),
            counts: ClientCounts { projects: 2 },
        }
    }

    fn sample_project() -> Project {
        Project {
            id: 11,
            name: "Website Redesign".to_string(),
            description: None,
            status: ProjectStatus::Active,
            due_amount: "$2,500".to_string(),
            final_payment_date: Some("2025-10-15".to_string()),
            client: ClientRef { id: 1, name: "Acme Corp".to_string() },
            access_key: None,
        }
    }

    #[test]
    fn modal_titles_follow_the_kind() {
        assert_eq!(ModalKind::CreateClient.title(), "Create New Client");
        assert_eq!(ModalKind::EditClient(sample_client()).title(), "Edit Client");
        assert_eq!(ModalKind::CreateProject.title(), "Create New Project");
        assert_eq!(ModalKind::EditProject(sample_project()).title(), "Edit Project");
        assert_eq!(ModalKind::CreateCredentials.title(), "Create User Credentials");
    }

    #[test]
    fn seeded_status_defaults_to_active_for_new_projects() {
        assert_eq!(seeded_status(None), ProjectStatus::Active);

        let project = sample_project();
        assert_eq!(seeded_status(Some(&project)), ProjectStatus::Active);

        let mut on_hold = sample_project();
        on_hold.status = ProjectStatus::OnHold;
        assert_eq!(seeded_status(Some(&on_hold)), ProjectStatus::OnHold);
    }

    // A status the wire enum does not know decodes as Unknown; editing such a
    // project must submit the status the select displays, never "UNKNOWN".
    #[test]
    fn unrecognized_status_submits_as_the_displayed_active() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 11,
                "name": "Website Redesign",
                "status": "ARCHIVED",
                "client": {"id": 1, "name": "Acme Corp"}
            }"#,
        )
        .unwrap();
        assert_eq!(project.status, ProjectStatus::Unknown);

        let request = SaveProjectRequest {
            name: project.name.clone(),
            client_id: project.client.id,
            status: seeded_status(Some(&project)),
            due_amount: project.due_amount.clone(),
            final_payment_date: String::new(),
            description: String::new(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["status"], "ACTIVE");
    }
}
