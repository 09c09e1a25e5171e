use super::tile::Tile;
use crate::board::Board;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub board: Board,
}

#[function_component]
pub fn BoardView(props: &BoardViewProps) -> Html {
    html! {
        <div style="background:#bbada0; padding:16px; border-radius:6px;">
            { for props.board.iter().enumerate().map(|(r, row)| html! {
                <div key={r} style="display:flex;">
                    { for row.iter().enumerate().map(|(c, &value)| html! {
                        <Tile key={format!("{}-{}", r, c)} value={value} />
                    }) }
                </div>
            }) }
        </div>
    }
}
