use super::board::BoardView;
use crate::config::BoardConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| BoardConfig::from_document());
    // Bumped to remount the board with a fresh random layout.
    let game_id = use_state(|| 0u32);

    let new_game = {
        let game_id = game_id.clone();
        Callback::from(move |_: MouseEvent| game_id.set(game_id.wrapping_add(1)))
    };

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:16px; padding:24px; color:#e6edf3; font-family:sans-serif;">
            <h2 style="margin:0;">{"Lights Out"}</h2>
            <BoardView
                key={*game_id}
                rows={config.rows}
                cols={config.cols}
                chance_light_starts_on={config.chance_light_starts_on}
            />
            <button onclick={new_game} style="padding:4px 10px;">{"New Game"}</button>
        </div>
    }
}
