use crate::config::SpawnPolicy;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub spawn_policy: SpawnPolicy,
    pub on_select_policy: Callback<SpawnPolicy>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.45); z-index:50;">
        <div style="background:#faf8ef; border:1px solid #bbada0; border-radius:12px; padding:16px 20px; min-width:320px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { for SpawnPolicy::ALL.iter().map(|&policy| {
                    let cb = props.on_select_policy.clone();
                    let onclick = Callback::from(move |_| cb.emit(policy));
                    html! {
                        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                            <input type="radio" name="spawn-policy" checked={props.spawn_policy == policy} onclick={onclick} />
                            <span>{ policy.label() }</span>
                        </label>
                    }
                }) }
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Applies to tiles spawned from the next move on."}</div>
        </div>
    </div>}
}
