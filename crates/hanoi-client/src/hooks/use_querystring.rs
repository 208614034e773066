use std::ops::Deref;

use yew::prelude::*;

/// State mirrored into the `key` query-string parameter as JSON.
///
/// The initial value comes from the current URL when it parses, otherwise
/// from `init_fn`. Every change replaces the history entry, so reloading the
/// page keeps the value.
#[hook]
pub fn use_querystring<T, F>(key: &'static str, init_fn: F) -> UseStateHandle<T>
where
    T: 'static + Clone + serde::Serialize + serde::de::DeserializeOwned + PartialEq,
    F: Fn() -> T + 'static,
{
    let state = use_state(|| read_param(key).unwrap_or_else(init_fn));

    use_effect_with(state.clone(), move |state| {
        write_param(key, state.deref());
        || ()
    });

    state
}

fn current_params() -> Option<web_sys::UrlSearchParams> {
    let search = web_sys::window()?.location().search().unwrap_or_default();
    web_sys::UrlSearchParams::new_with_str(&search).ok()
}

fn read_param<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let value = current_params()?.get(key)?;
    serde_json::from_str(&value).ok()
}

fn write_param<T: serde::Serialize>(key: &str, value: &T) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(params) = current_params() else {
        return;
    };
    let Ok(serialized) = serde_json::to_string(value) else {
        return;
    };
    params.set(key, &serialized);

    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    let params_str = params.to_string().as_string().unwrap_or_default();
    let new_url = if params_str.is_empty() {
        format!("{pathname}{hash}")
    } else {
        format!("{pathname}?{params_str}{hash}")
    };

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}
