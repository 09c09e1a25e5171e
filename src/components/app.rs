use super::{
    board_view::BoardView, game_over_overlay::GameOverOverlay, score_panel::ScorePanel,
    settings_modal::SettingsModal,
};
use crate::board::{Direction, JsRandom};
use crate::config::{GameConfig, SpawnPolicy};
use crate::model::{GameAction, GameState};
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| GameState::new(GameConfig::default(), &mut JsRandom));
    let show_settings = use_state(|| false);
    let last_score = use_mut_ref(|| 0u64);

    {
        // Arrow keys drive the board; everything else falls through to the page
        let game = game.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&e.key()) {
                    e.prevent_default();
                    game.dispatch(GameAction::Move(dir));
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                win.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(key_cb);
            }
        });
    }

    {
        // Log score changes
        let last_score = last_score.clone();
        use_effect_with(game.score, move |score| {
            let mut prev = last_score.borrow_mut();
            if *prev != *score {
                clog(&format!("score: {} -> {}", *prev, score));
            }
            *prev = *score;
            || ()
        });
    }

    {
        use_effect_with(game.config.spawn_policy, move |policy| {
            clog(&format!("spawn policy: {:?}", policy));
            || ()
        });
    }

    {
        let game_for_log = game.clone();
        use_effect_with(game.is_game_over(), move |over| {
            if *over {
                let board = serde_json::to_string(&game_for_log.board).unwrap_or_default();
                clog(&format!(
                    "game over: score {} after {} moves, board {}",
                    game_for_log.score, game_for_log.moves, board
                ));
            }
            || ()
        });
    }

    let restart = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Restart))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let select_policy = {
        let game = game.clone();
        Callback::from(move |policy: SpawnPolicy| game.dispatch(GameAction::SetSpawnPolicy(policy)))
    };

    html! {
        <div id="root" style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100vh; padding:16px;">
            <h1 style="font-size:36px; font-weight:700; margin:0 0 16px 0;">{"2048"}</h1>
            <ScorePanel
                score={game.score}
                last_gain={game.last_gain}
                best_tile={game.best_tile()}
                moves={game.moves}
                on_restart={restart.clone()}
                on_open_settings={open_settings}
            />
            <BoardView board={game.board} />
            <GameOverOverlay
                show={game.is_game_over()}
                score={game.score}
                best_tile={game.best_tile()}
                restart={restart}
            />
            <SettingsModal
                show={*show_settings}
                on_close={close_settings}
                spawn_policy={game.config.spawn_policy}
                on_select_policy={select_policy}
            />
        </div>
    }
}
