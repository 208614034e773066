//! Canvas component that hosts the game.

use std::rc::Rc;

use hanoi_core::{Game, GameConfig, Point, TracingDiagnostics};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::surface::CanvasSurface;

/// Properties for the Board component.
#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub disk_count: usize,
    /// Bumped by the parent to start a new game with the same disk count.
    pub round: u32,
    /// Called once when the current game is solved.
    pub on_victory: Callback<()>,
}

#[function_component(Board)]
pub fn board(props: &BoardProps) -> Html {
    let canvas_ref = use_node_ref();
    let game = use_mut_ref(|| None::<Game<CanvasSurface>>);

    // New game whenever the disk count or round changes
    {
        let canvas_ref = canvas_ref.clone();
        let game = game.clone();
        let on_victory = props.on_victory.clone();
        use_effect_with((props.disk_count, props.round), move |&(disk_count, _)| {
            let config = GameConfig::with_disk_count(disk_count);
            let mut slot = game.borrow_mut();
            match slot.as_mut() {
                Some(game) => {
                    if let Err(err) = game.start_new(&config) {
                        tracing::error!(%err, "[board] failed to start a new game");
                    }
                }
                None => *slot = create_game(&canvas_ref, &config, on_victory),
            }
            || ()
        });
    }

    let on_mouse_down = {
        let game = game.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(game) = game.borrow_mut().as_mut() {
                game.pointer_down(event_point(&e));
            }
        })
    };

    let on_mouse_move = {
        let game = game.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(game) = game.borrow_mut().as_mut() {
                if let Err(err) = game.pointer_move(event_point(&e)) {
                    tracing::error!(%err, "[board] drag failed");
                }
            }
        })
    };

    let on_mouse_up = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(game) = game.borrow_mut().as_mut() {
                if let Err(err) = game.pointer_up() {
                    tracing::error!(%err, "[board] drop failed");
                }
            }
        })
    };

    html! {
        <canvas
            id="board"
            ref={canvas_ref}
            onmousedown={on_mouse_down}
            onmousemove={on_mouse_move}
            onmouseup={on_mouse_up}
        />
    }
}

fn create_game(
    canvas_ref: &NodeRef,
    config: &GameConfig,
    on_victory: Callback<()>,
) -> Option<Game<CanvasSurface>> {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        tracing::error!("[board] canvas element not mounted");
        return None;
    };
    let Some(surface) = CanvasSurface::new(canvas) else {
        tracing::error!("[board] canvas has no 2d context");
        return None;
    };

    match Game::new(
        surface,
        config,
        Rc::new(TracingDiagnostics),
        Box::new(move || on_victory.emit(())),
    ) {
        Ok(game) => Some(game),
        Err(err) => {
            tracing::error!(%err, "[board] failed to create game");
            None
        }
    }
}

/// Pointer position relative to the canvas.
fn event_point(e: &MouseEvent) -> Point {
    Point::new(f64::from(e.offset_x()), f64::from(e.offset_y()))
}
