use yew::prelude::*;

mod components;
mod pages;
mod paywall;
mod services;
mod utils;

use components::auth::{AuthContext, AuthProvider, LoginForm};
use components::data::DataProvider;
use components::layout::Layout;

#[function_component(AppShell)]
fn app_shell() -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");

    // Without a token there is nothing worth fetching, so the data provider
    // only mounts once the admin is signed in.
    if auth_ctx.token.is_none() {
        return html! {
            <LoginForm on_login={auth_ctx.login.clone()} />
        };
    }

    html! {
        <DataProvider>
            <Layout />
        </DataProvider>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let document = web_sys::window().unwrap().document().unwrap();
    let head = document.head().unwrap();

    // Load Tailwind CSS
    let tailwind = document.create_element("link").unwrap();
    tailwind.set_attribute("href", "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css").unwrap();
    tailwind.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&tailwind).unwrap();

    // Load Google Fonts (Inter)
    let fonts = document.create_element("link").unwrap();
    fonts.set_attribute("href", "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap").unwrap();
    fonts.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&fonts).unwrap();

    yew::Renderer::<App>::new().render();
}
