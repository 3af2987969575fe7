use yew::prelude::*;

use super::{game_view::GameView, planner_view::PlannerView};

#[derive(PartialEq, Clone)]
enum View {
    Game,
    Planner,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Game);
    let run_id = use_state(|| 0u32);

    let to_game = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Game))
    };
    let to_planner = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Planner))
    };

    // A finished run restarts by remounting the game view: the key bump
    // drops the stopped loop driver and builds a fresh game with a fresh
    // one.
    let restart = {
        let run_id = run_id.clone();
        Callback::from(move |()| run_id.set(*run_id + 1))
    };

    let content = match *view {
        View::Game => html! { <GameView key={*run_id} restart={restart} /> },
        View::Planner => html! { <PlannerView /> },
    };

    html! {
        <div id="root">
            <div style="position:absolute; top:12px; right:12px; z-index:10; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:8px;">
                <button onclick={to_game}>{"Pokemario"}</button>
                <button onclick={to_planner}>{"Planner"}</button>
            </div>
            { content }
        </div>
    }
}
