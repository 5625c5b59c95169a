use crate::model::Coord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CellProps {
    pub is_lit: bool,
    pub coord: Coord,
    /// Invoked with the cell's identifier (`Coord`'s text form) when clicked.
    pub on_flip: Callback<String>,
}

#[function_component(Cell)]
pub fn cell(props: &CellProps) -> Html {
    let id = props.coord.to_string();
    let onclick = {
        let cb = props.on_flip.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let bg = if props.is_lit { "#f2cc60" } else { "#21262d" };
    html! {
        <td
            class={classes!("Cell", props.is_lit.then_some("Cell-lit"))}
            data-coord={id}
            onclick={onclick}
            style={format!("width:48px; height:48px; background:{}; border:1px solid #30363d; border-radius:4px; cursor:pointer;", bg)}
        />
    }
}
