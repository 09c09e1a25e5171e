use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TileProps {
    pub value: u32,
}

#[function_component]
pub fn Tile(props: &TileProps) -> Html {
    let (bg, fg) = if props.value == 0 {
        ("#cdc1b4", "transparent")
    } else {
        ("#eee4da", "#776e65")
    };
    html! {
        <div style={format!("display:flex; align-items:center; justify-content:center; width:80px; height:80px; margin:4px; border-radius:4px; font-size:24px; font-weight:800; background:{}; color:{};", bg, fg)}>
            { if props.value != 0 { props.value.to_string() } else { String::new() } }
        </div>
    }
}
