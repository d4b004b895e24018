// Paywall embed snippet handed to clients after a project is created
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils;

// One interpolation point: the project's access key. Everything else is
// boilerplate the client pastes into their site unchanged.
pub fn integration_snippet(access_key: &str) -> String {
    format!(
        r#"<!-- TechWire paywall -->
<script>
  (function () {{
    var tw = document.createElement("script");
    tw.src = "https://pay.techwire.dev/embed/v1.js";
    tw.async = true;
    tw.setAttribute("data-access-key", "{access_key}");
    document.head.appendChild(tw);
  }})();
</script>"#
    )
}

#[derive(Properties, PartialEq)]
pub struct PaywallModalProps {
    pub access_key: String,
    pub on_close: Callback<()>,
}

#[function_component(PaywallModal)]
pub fn paywall_modal(props: &PaywallModalProps) -> Html {
    let copied = use_state(|| false);
    let snippet = integration_snippet(&props.access_key);

    let on_copy = {
        let copied = copied.clone();
        let snippet = snippet.clone();
        Callback::from(move |_: MouseEvent| {
            utils::copy_to_clipboard(&snippet);
            copied.set(true);
            let copied = copied.clone();
            Timeout::new(2_000, move || copied.set(false)).forget();
        })
    };

    html! {
        <div class="fixed inset-0 bg-transparent backdrop-blur-sm flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-lg w-full max-w-lg p-6">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-medium">{"Paywall Integration"}</h3>
                    <button
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class="text-gray-500 hover:text-gray-700"
                    >
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </button>
                </div>

                <p class="text-sm text-gray-600 mb-4">
                    {"Add this snippet to the client's site to lock it behind the payment wall until the project is settled."}
                </p>

                <div class="mb-4">
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Access Key"}</label>
                    <code class="block w-full p-2 bg-gray-100 rounded-md text-sm font-mono break-all">
                        { &props.access_key }
                    </code>
                </div>

                <pre class="bg-gray-900 text-gray-100 rounded-md p-4 text-xs overflow-x-auto mb-4">
                    <code>{ snippet.clone() }</code>
                </pre>

                <div class="flex justify-end space-x-3">
                    <button
                        type="button"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200"
                    >
                        {"Close"}
                    </button>
                    <button
                        type="button"
                        onclick={on_copy}
                        class="px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700"
                    >
                        { if *copied { "Copied!" } else { "Copy Snippet" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_interpolates_the_key_exactly_once() {
        let snippet = integration_snippet("pk_live_4f8a21");
        assert_eq!(snippet.matches("pk_live_4f8a21").count(), 1);
        assert!(snippet.contains(r#"data-access-key", "pk_live_4f8a21""#));
    }

    #[test]
    fn snippet_is_deterministic() {
        assert_eq!(
            integration_snippet("pk_live_4f8a21"),
            integration_snippet("pk_live_4f8a21")
        );
    }

    #[test]
    fn snippet_points_at_the_embed_loader() {
        let snippet = integration_snippet("pk_test_1");
        assert!(snippet.contains("https://pay.techwire.dev/embed/v1.js"));
        assert!(snippet.starts_with("<!-- TechWire paywall -->"));
    }
}
