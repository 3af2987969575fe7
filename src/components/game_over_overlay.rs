use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub best: Option<u32>,
    pub time_survived: u64,
    pub restart: Callback<()>,
}

#[function_component(GameOverOverlay)]
pub fn game_over_overlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let best_line = match props.best {
        Some(best) if props.score >= best => html! {
            <p style="margin:4px 0; color:#f8b800;">{"New Best!"}</p>
        },
        Some(best) => html! {
            <p style="margin:4px 0;">{ format!("Best: {}", best) }</p>
        },
        None => html! {},
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Game Over"}</h2>
            <p style="margin:4px 0;">{ format!("Score: {}", props.score) }</p>
            <p style="margin:4px 0;">{ format!("Time Survived: {}", format_time(props.time_survived)) }</p>
            { best_line }
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"Restart"}</button>
            </div>
        </div>
    }
}
