use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct MessageViewerProps {
    /// Where the backend lives. Defaults to same-origin.
    #[prop_or_default]
    pub config: AppConfig,
}

/// One button, one read-only field. Clicking the button asks the backend for
/// its greeting and shows whatever comes back.
#[function_component(MessageViewer)]
pub fn message_viewer(props: &MessageViewerProps) -> Html {
    let message = use_state(String::new);

    let on_fetch = {
        let message = message.clone();
        let url = props.config.message_url();
        Callback::from(move |_e: MouseEvent| {
            let message = message.clone();
            let url = url.clone();
            // Clicks are not guarded against each other; the last response
            // to resolve wins the state write.
            spawn_local(async move {
                match api::fetch_message(&url).await {
                    Ok(m) => message.set(m),
                    // Failures leave the field as-is.
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            });
        })
    };

    html! {
        <div class="app">
            <h1>{ "Universal Starter" }</h1>
            <button onclick={on_fetch}>{ "Get Message from Flask" }</button>
            <div>
                <input type="text" value={(*message).clone()} readonly=true />
            </div>
        </div>
    }
}

/// Entry component: wires the build-time configuration into the viewer.
#[function_component(App)]
pub fn app() -> Html {
    html! { <MessageViewer config={AppConfig::from_build_env()} /> }
}
