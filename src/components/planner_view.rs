use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::util::clog;

/// Stub planner page. Registers the offline service worker at mount; the
/// background worker and the WebGL/WASM pipeline it will host are not
/// wired up yet.
#[function_component(PlannerView)]
pub fn planner_view() -> Html {
    use_effect_with((), move |_| {
        if let Some(win) = web_sys::window() {
            let container = win.navigator().service_worker();
            let registered = Closure::once(move |_: JsValue| {
                clog("planner service worker registered");
            });
            let _ = container.register("/planner/sw.js").then(&registered);
            registered.forget();
        }
        || ()
    });

    html! {
        <div style="height:100vh; width:100vw; display:flex; flex-direction:row; align-items:center; justify-content:center;">
            <div style="align-self:center; padding:12px 20px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px;">
                {"Hello World!"}
            </div>
        </div>
    }
}
