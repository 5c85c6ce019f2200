//! Prompt Box Component
//!
//! A prompt shown verbatim with a Copy button.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// How long the button reads "Copied!"
const COPIED_MS: u32 = 2000;

#[component]
pub fn PromptBox(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="prompt-box-wrapper relative">
            <pre class="prompt-box whitespace-pre-wrap bg-gray-50 border border-gray-200 rounded-lg p-4 pr-20 text-sm">
                {text.clone()}
            </pre>
            <CopyButton text=text />
        </div>
    }
}

#[component]
pub fn CopyButton(#[prop(into)] text: String) -> impl IntoView {
    let (copied, set_copied) = create_signal(false);

    let on_click = move |_| {
        let text = text.clone();
        spawn_local(async move {
            if let Err(e) = write_clipboard(&text).await {
                web_sys::console::error_2(&"Clipboard write failed:".into(), &e);
            }
        });

        set_copied.set(true);
        gloo_timers::callback::Timeout::new(COPIED_MS, move || {
            set_copied.set(false);
        })
        .forget();
    };

    view! {
        <button
            on:click=on_click
            class="copy-btn absolute top-2 right-2 px-3 py-1 text-xs rounded-md bg-white border border-gray-300 hover:bg-gray-100"
        >
            {move || if copied.get() { "Copied!" } else { "Copy" }}
        </button>
    }
}

/// `navigator.clipboard.writeText(text)`
async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &"clipboard".into())?;
    let write_text = js_sys::Reflect::get(&clipboard, &"writeText".into())?
        .dyn_into::<js_sys::Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}
