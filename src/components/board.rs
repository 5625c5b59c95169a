use yew::prelude::*;

use super::{cell::Cell, win_message::WinMessage};
use crate::model::{Board, Coord, GameAction, GameState};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub rows: usize,
    pub cols: usize,
    pub chance_light_starts_on: f64,
}

/// One game of Lights Out. The layout is drawn once on mount; props changes
/// after that are ignored, remount (e.g. with a new `key`) to start over.
#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let game = {
        let (rows, cols, chance) = (props.rows, props.cols, props.chance_light_starts_on);
        use_reducer(move || GameState::new(Board::random(rows, cols, chance)))
    };

    if game.has_won() {
        return html! { <WinMessage moves={game.moves} /> };
    }

    let on_flip = {
        let game = game.clone();
        Callback::from(move |id: String| match id.parse::<Coord>() {
            Ok(coord) => game.dispatch(GameAction::Flip(coord)),
            Err(e) => clog(&format!("ignoring click on {:?}: {}", id, e)),
        })
    };

    html! {
        <table class="Board" style="border-spacing:4px; margin:0 auto;">
            <tbody>
                { for game.board.iter_rows().map(|row| html! {
                    <tr>
                        { for row.map(|(coord, is_lit)| html! {
                            <Cell key={coord.to_string()} {coord} {is_lit} on_flip={on_flip.clone()} />
                        }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
