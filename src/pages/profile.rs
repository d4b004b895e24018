use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::auth::AuthContext;
use crate::components::data::use_data;
use crate::services::clients::{self, CreateClientRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Profile,
    Clients,
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");
    let data = use_data();

    let active_tab = use_state(|| ProfileTab::Profile);
    let message = use_state(|| None::<(String, bool)>);

    let seeded_name = auth_ctx
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Admin".to_string());
    let seeded_email = auth_ctx
        .user
        .as_ref()
        .and_then(|u| u.email.clone())
        .unwrap_or_else(|| "admin@example.com".to_string());

    let name = use_state(|| seeded_name);
    let email = use_state(|| seeded_email);
    let password = use_state(String::new);

    let client_name = use_state(String::new);
    let client_email = use_state(String::new);
    let client_password = use_state(String::new);

    // Banners clear themselves after a few seconds; switching the dependency
    // drops the previous timer so a newer banner gets its full window.
    {
        let message_handle = message.clone();
        use_effect_with((*message).clone(), move |current| {
            let timer = current.as_ref().map(|_| {
                Timeout::new(4_000, move || message_handle.set(None))
            });
            move || drop(timer)
        });
    }

    let set_tab = |tab: ProfileTab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };

    let text_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    // The backend has no profile update endpoint; the save is acknowledged
    // locally after a short delay, matching the rest of the admin flow.
    let on_save_profile = {
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            let message = message.clone();
            Timeout::new(1_000, move || {
                message.set(Some(("Profile updated successfully!".to_string(), true)));
            })
            .forget();
        })
    };

    let on_create_client = {
        let client_name = client_name.clone();
        let client_email = client_email.clone();
        let client_password = client_password.clone();
        let message = message.clone();
        let refresh_clients = data.refresh_clients.clone();
        Callback::from(move |_: MouseEvent| {
            let request = CreateClientRequest {
                name: (*client_name).clone(),
                email: (*client_email).clone(),
                password: (*client_password).clone(),
                role: "CLIENT".to_string(),
            };
            let client_name = client_name.clone();
            let client_email = client_email.clone();
            let client_password = client_password.clone();
            let message = message.clone();
            let refresh_clients = refresh_clients.clone();
            spawn_local(async move {
                match clients::create(&request).await {
                    Ok(_) => {
                        client_name.set(String::new());
                        client_email.set(String::new());
                        client_password.set(String::new());
                        message.set(Some(("Client created successfully!".to_string(), true)));
                        refresh_clients.emit(());
                    }
                    Err(err) => {
                        log::error!("Error creating client: {}", err);
                        message.set(Some(("Failed to create client.".to_string(), false)));
                    }
                }
            });
        })
    };

    let field_class = "shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline";
    let tab_class = |tab: ProfileTab| {
        if *active_tab == tab {
            "py-2 px-4 font-medium border-b-2 border-blue-500 text-blue-600"
        } else {
            "py-2 px-4 font-medium text-gray-500"
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow p-6 max-w-2xl mx-auto mt-8">
            <div class="mb-6">
                <div class="flex justify-between items-center mb-4">
                    <h1 class="text-2xl font-bold text-gray-800">{"Admin Dashboard"}</h1>
                </div>
                <div class="flex border-b border-gray-200">
                    <button class={tab_class(ProfileTab::Profile)} onclick={set_tab(ProfileTab::Profile)}>
                        {"My Profile"}
                    </button>
                    <button class={tab_class(ProfileTab::Clients)} onclick={set_tab(ProfileTab::Clients)}>
                        {"Create Client"}
                    </button>
                </div>
            </div>

            if let Some((text, success)) = (*message).clone() {
                <div class={if success { "p-3 mb-4 rounded bg-green-100 text-green-700" } else { "p-3 mb-4 rounded bg-red-100 text-red-700" }}>
                    { text }
                </div>
            }

            if *active_tab == ProfileTab::Profile {
                <div>
                    <h2 class="text-lg font-semibold mb-4">{"Update Profile"}</h2>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2" for="name">{"Full Name"}</label>
                        <input
                            type="text"
                            id="name"
                            class={field_class}
                            value={(*name).clone()}
                            oninput={text_input(name.clone())}
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2" for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            class={field_class}
                            value={(*email).clone()}
                            oninput={text_input(email.clone())}
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 text-sm font-bold mb-2" for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            class={field_class}
                            placeholder="Leave blank to keep current password"
                            value={(*password).clone()}
                            oninput={text_input(password.clone())}
                        />
                    </div>
                    <div class="flex justify-end">
                        <button
                            onclick={on_save_profile}
                            class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                        >
                            {"Save Changes"}
                        </button>
                    </div>
                </div>
            } else {
                <div>
                    <h2 class="text-lg font-semibold mb-4">{"Create Client Account"}</h2>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2" for="clientName">{"Client Name"}</label>
                        <input
                            type="text"
                            id="clientName"
                            class={field_class}
                            value={(*client_name).clone()}
                            oninput={text_input(client_name.clone())}
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2" for="clientEmail">{"Client Email"}</label>
                        <input
                            type="email"
                            id="clientEmail"
                            class={field_class}
                            value={(*client_email).clone()}
                            oninput={text_input(client_email.clone())}
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 text-sm font-bold mb-2" for="clientPassword">{"Client Password"}</label>
                        <input
                            type="password"
                            id="clientPassword"
                            class={field_class}
                            value={(*client_password).clone()}
                            oninput={text_input(client_password.clone())}
                        />
                    </div>
                    <div class="flex justify-end">
                        <button
                            onclick={on_create_client}
                            class="bg-green-500 hover:bg-green-700 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                        >
                            {"Create Client"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
