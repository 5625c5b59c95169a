use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WinMessageProps {
    pub moves: u32,
}

#[function_component]
pub fn WinMessage(props: &WinMessageProps) -> Html {
    let noun = if props.moves == 1 { "move" } else { "moves" };
    html! {
        <div style="text-align:center; padding:24px 32px; border:2px solid #3fb950; border-radius:12px; background:rgba(0,0,0,0.85);">
            <h1 style="margin:0 0 12px 0; color:#3fb950;">{"You Won!!!"}</h1>
            <p style="margin:4px 0;">{ format!("Solved in {} {}", props.moves, noun) }</p>
        </div>
    }
}
