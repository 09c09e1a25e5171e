use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScorePanelProps {
    pub score: u64,
    pub last_gain: u64,
    pub best_tile: u32,
    pub moves: u32,
    pub on_restart: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ScorePanel(props: &ScorePanelProps) -> Html {
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="margin-bottom:16px; display:flex; align-items:center; gap:24px;">
            <div style="display:flex; flex-direction:column; gap:4px;">
                <div style="font-size:20px; font-weight:600;">
                    {"Score: "}<span style={value_style}>{ props.score }</span>
                    { if props.last_gain > 0 { html!{ <span style="margin-left:8px; font-size:14px; opacity:0.7;">{ format!("+{}", props.last_gain) }</span> } } else { html!{} } }
                </div>
                <div style="font-size:13px; opacity:0.8;">
                    { format!("Best tile: {} · Moves: {}", props.best_tile, props.moves) }
                </div>
            </div>
            <button onclick={restart_cb} style="padding:8px 16px; background:#8f7a66; color:#fff; border:none; border-radius:4px; cursor:pointer;">{"New Game"}</button>
            <button onclick={settings_cb} style="padding:8px 12px;">{"Settings"}</button>
        </div>
    }
}
