use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudPanelProps {
    pub score: u32,
    pub lives: u32,
    pub time_survived: u64,
    pub best: Option<u32>,
}

#[function_component(HudPanel)]
pub fn hud_panel(props: &HudPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:56px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let best_row = match props.best {
        Some(best) => html! {
            <div style={row_style}>
                <span style={format!("{} color:#8b949e;", label_style)}>{"Best"}</span>
                <span style={format!("{} color:#8b949e;", value_style)}>{ best }</span>
            </div>
        },
        None => html! {},
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:180px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#f8b800;", label_style)}>{"Score"}</span>
                <span style={format!("{} color:#f8b800;", value_style)}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f85149;", label_style)}>{"Lives"}</span>
                <span style={format!("{} color:#f85149;", value_style)}>{ ("❤").repeat(props.lives as usize) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Time"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format_time(props.time_survived) }</span>
            </div>
            { best_row }
        </div>
    }
}
