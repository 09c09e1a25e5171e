use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u64,
    pub best_tile: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <div style="margin-top:24px; text-align:center;">
            <div style="font-size:24px; font-weight:700; color:#dc2626;">{"Game Over! No more moves possible."}</div>
            <p style="margin:6px 0;">{ format!("Final score: {} · Best tile: {}", props.score, props.best_tile) }</p>
            <button onclick={restart_btn}>{"Play Again"}</button>
        </div>
    }
}
