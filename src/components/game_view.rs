use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};
use yew::prelude::*;

use crate::game::{FrameLoop, Game, GameSnapshot};
use crate::persist::{self, HighScore};
use crate::util::clog;

use super::{game_over_overlay::GameOverOverlay, hud_panel::HudPanel};

type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    /// Remounts the view (the parent bumps this component's key); a fresh
    /// mount builds a fresh game and loop driver.
    pub restart: Callback<()>,
}

/// Sizes the canvas once from its layout bounds, builds the game, wires
/// the keyboard, and starts the frame loop. Returns `None` (loop never
/// started) when the canvas or its 2d context is unavailable.
fn start_loop(
    canvas_ref: &NodeRef,
    game_cell: &Rc<RefCell<Option<Game>>>,
    loop_cell: &Rc<RefCell<Option<FrameLoop>>>,
    keydown_cell: &Rc<RefCell<Option<KeyClosure>>>,
    keyup_cell: &Rc<RefCell<Option<KeyClosure>>>,
) -> Option<()> {
    let window = web_sys::window()?;
    let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    // Surface size is fixed once at mount from the layout bounds; a
    // resize needs a remount.
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width(rect.width().max(0.0) as u32);
    canvas.set_height(rect.height().max(0.0) as u32);

    *game_cell.borrow_mut() = Some(Game::new(canvas.width() as f64, canvas.height() as f64));

    // Key listeners write input flags into the shared game cell; the
    // browser runs them strictly between frame callbacks.
    {
        let game = game_cell.clone();
        let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if let Some(g) = game.borrow_mut().as_mut() {
                if g.input.press(&e.key()) {
                    e.prevent_default();
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        window
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .ok()?;
        *keydown_cell.borrow_mut() = Some(keydown);
    }
    {
        let game = game_cell.clone();
        let keyup = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if let Some(g) = game.borrow_mut().as_mut() {
                g.input.release(&e.key());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        window
            .add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())
            .ok()?;
        *keyup_cell.borrow_mut() = Some(keyup);
    }

    let now0 = window.performance().map(|p| p.now()).unwrap_or(0.0);
    *loop_cell.borrow_mut() = Some(FrameLoop::start(now0));

    // rAF chain. The closure owns a handle to itself so it can schedule
    // the next frame; that cycle also keeps it alive for any frame still
    // queued after teardown, where the stopped driver makes it inert.
    let cb_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let cb_inner = cb_cell.clone();
    let frame_loop = loop_cell.clone();
    let game = game_cell.clone();
    let win = window.clone();
    *cb_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let delta = match frame_loop
            .borrow_mut()
            .as_mut()
            .and_then(|fl| fl.on_frame(now))
        {
            Some(d) => d,
            None => return,
        };
        if let Some(g) = game.borrow_mut().as_mut() {
            g.tick(delta);
            g.render(&canvas, &ctx);
        }
        if let Some(cb) = &*cb_inner.borrow() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = &*cb_cell.borrow() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
    Some(())
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let game = use_mut_ref(|| None::<Game>);
    let frame_loop = use_mut_ref(|| None::<FrameLoop>);
    let keydown = use_mut_ref(|| None::<KeyClosure>);
    let keyup = use_mut_ref(|| None::<KeyClosure>);
    let hud = use_state_eq(GameSnapshot::default);
    let best = use_state(persist::load);
    let reported = use_mut_ref(|| false);

    // Mount effect: start the loop; teardown stops it. A frame already
    // queued when the view unmounts runs as a terminal no-op.
    {
        let canvas_ref = canvas_ref.clone();
        let game = game.clone();
        let frame_loop = frame_loop.clone();
        let keydown = keydown.clone();
        let keyup = keyup.clone();
        use_effect_with((), move |_| {
            let _ = start_loop(&canvas_ref, &game, &frame_loop, &keydown, &keyup);
            move || {
                if let Some(fl) = frame_loop.borrow_mut().as_mut() {
                    fl.stop();
                }
                // The game does not outlive its view.
                drop(game.borrow_mut().take());
                if let Some(win) = web_sys::window() {
                    if let Some(cb) = keydown.borrow_mut().take() {
                        let _ = win.remove_event_listener_with_callback(
                            "keydown",
                            cb.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(cb) = keyup.borrow_mut().take() {
                        let _ = win.remove_event_listener_with_callback(
                            "keyup",
                            cb.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    // HUD poll on a coarse interval, keeping the rAF path free of Yew
    // re-renders. Also writes the high score once when the run ends.
    {
        let game = game.clone();
        let hud = hud.clone();
        let best = best.clone();
        let reported = reported.clone();
        use_effect_with((), move |_| {
            let prior_best = *best;
            let tick = Closure::wrap(Box::new(move || {
                let snap = match game.borrow().as_ref().map(Game::snapshot) {
                    Some(s) => s,
                    None => return,
                };
                if snap.game_over && !*reported.borrow() {
                    *reported.borrow_mut() = true;
                    clog(&format!(
                        "game over: score={} time={}s",
                        snap.score, snap.time_survived_secs
                    ));
                    let record = HighScore {
                        score: snap.score,
                        time_survived_secs: snap.time_survived_secs,
                    };
                    if prior_best.is_none_or(|b| record.score > b.score) {
                        persist::store(&record);
                        best.set(Some(record));
                    }
                }
                hud.set(snap);
            }) as Box<dyn FnMut()>);
            let id = web_sys::window().and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    250,
                )
                .ok()
            });
            move || {
                if let (Some(win), Some(id)) = (web_sys::window(), id) {
                    win.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    let snap = *hud;
    let best_score = (*best).map(|b| b.score);
    let restart_cb: Callback<()> = {
        let cb = props.restart.clone();
        Callback::from(move |()| cb.emit(()))
    };

    html! {<div style="position:relative; width:100vw; height:100vh;">
        <canvas ref={canvas_ref.clone()} id="game-canvas" style="display:block; width:100%; height:100%;"></canvas>
        <HudPanel score={snap.score} lives={snap.lives} time_survived={snap.time_survived_secs} best={best_score} />
        <GameOverOverlay show={snap.game_over} score={snap.score} best={best_score} time_survived={snap.time_survived_secs} restart={restart_cb} />
    </div>}
}
