//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the pixels and the Idle/Drawing machine; this component
//! forwards mouse and touch events to it, blits after every change, and runs
//! the submission flow against `PadState`.

use leptos::prelude::*;

use canvas::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};

use crate::state::pad::PadState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use canvas::input::StrokeEnd;
#[cfg(feature = "csr")]
use predict::ImageUpload;

#[cfg(feature = "csr")]
use crate::config;
#[cfg(feature = "csr")]
use crate::net::predict::{BrowserTransport, run_submission};
#[cfg(feature = "csr")]
use crate::util::pointer::{mouse_input, touch_input};

#[cfg(feature = "csr")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Run `f` against the mounted engine and blit if it changed pixels.
#[cfg(feature = "csr")]
fn with_engine(engine: &SharedEngine, f: impl FnOnce(&mut Engine) -> Action) {
    let mut guard = engine.borrow_mut();
    let Some(engine) = guard.as_mut() else {
        return;
    };
    if f(engine) == Action::RenderNeeded {
        if let Err(e) = engine.render() {
            log::warn!("canvas render failed: {e:?}");
        }
    }
}

/// Drawing pad: 280×280 canvas, "Delete" and "Recognize Digit" controls, and
/// the result line.
#[component]
pub fn DrawPad() -> impl IntoView {
    let pad = expect_context::<RwSignal<PadState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            match Engine::new(canvas) {
                Ok(instance) => *engine.borrow_mut() = Some(instance),
                Err(e) => log::error!("canvas init failed: {e:?}"),
            }
        });
    }

    let on_mouse_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                with_engine(&engine, |e| e.on_pointer_down(&mouse_input(&ev)));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                with_engine(&engine, |e| {
                    if e.is_drawing() {
                        ev.prevent_default();
                    }
                    e.on_pointer_move(&mouse_input(&ev))
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                with_engine(&engine, |e| e.on_stroke_end(StrokeEnd::PointerUp));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_out = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                with_engine(&engine, |e| e.on_stroke_end(StrokeEnd::PointerLeave));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                with_engine(&engine, |e| e.on_pointer_down(&touch_input(&ev)));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::TouchEvent| {
                with_engine(&engine, |e| {
                    if e.is_drawing() {
                        ev.prevent_default();
                    }
                    e.on_pointer_move(&touch_input(&ev))
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::TouchEvent| {
                with_engine(&engine, |e| e.on_stroke_end(StrokeEnd::TouchEnd));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_clear = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                with_engine(&engine, Engine::reset);
                pad.update(PadState::clear);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| pad.update(PadState::clear)
        }
    };

    let on_recognize = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                if !pad.with_untracked(PadState::can_submit) {
                    return;
                }
                let upload = {
                    let guard = engine.borrow();
                    let Some(engine) = guard.as_ref() else {
                        return;
                    };
                    ImageUpload::from_surface(&engine.core.surface)
                };
                pad.update(PadState::begin_submission);
                leptos::task::spawn_local(async move {
                    let prediction = run_submission(&BrowserTransport, config::api_url(), upload).await;
                    pad.update(|p| p.finish_submission(prediction));
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="draw-pad">
            <div class="canvas-container">
                <canvas
                    class="drawing-canvas bg-black"
                    node_ref=canvas_ref
                    width=SURFACE_WIDTH.to_string()
                    height=SURFACE_HEIGHT.to_string()
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move
                    on:mouseup=on_mouse_up
                    on:mouseout=on_mouse_out
                    on:touchstart=on_touch_start
                    on:touchmove=on_touch_move
                    on:touchend=on_touch_end
                >
                    "Your browser does not support canvas."
                </canvas>
            </div>

            <div class="button-group">
                <button class="button clear" on:click=on_clear>
                    "Delete"
                </button>
                <button class="button submit" on:click=on_recognize disabled=move || pad.get().loading>
                    {move || pad.get().submit_label()}
                </button>
            </div>

            {move || {
                pad.get()
                    .result_text()
                    .map(|text| {
                        view! {
                            <div class="prediction-result">
                                <h2>{text}</h2>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
