use leptos::html::Canvas;
use leptos::*;
use once_cell::sync::OnceCell;
use std::rc::Rc;
use strum::IntoEnumIterator;

use crate::application::ChartScreenService;
use crate::domain::{
    chart::ChartScreen,
    logging::{get_logger, LogComponent},
    market_data::Timeframe,
};
use crate::infrastructure::{
    http::AggregatesRestClient,
    rendering::{build_draw_commands, CanvasRenderer},
};

pub const CANVAS_ID: &str = "chart-canvas";
pub const CANVAS_HEIGHT: u32 = 540;
const DEFAULT_CANVAS_WIDTH: u32 = 960;
const WHEEL_ZOOM_STEP: f32 = 0.001;
const API_KEY: &str = "demo";

/// Wheel delta -> multiplicative zoom factor; wheel-up zooms in.
pub fn wheel_zoom_factor(delta_y: f64) -> f32 {
    (1.0 - delta_y as f32 * WHEEL_ZOOM_STEP).clamp(0.5, 2.0)
}

/// Pointer-drag state shared between gesture handlers.
pub struct Globals {
    pub is_dragging: RwSignal<bool>,
    pub last_pointer_x: RwSignal<f64>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        is_dragging: create_rw_signal(false),
        last_pointer_x: create_rw_signal(0.0),
    })
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .chart-screen {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #000000;
                min-height: 100vh;
                padding: 16px;
                color: white;
            }

            .chart-container {
                position: relative;
                display: flex;
                flex-direction: column;
                gap: 12px;
            }

            #chart-canvas {
                border: 1px solid #2e3b4b;
                border-radius: 8px;
                background: #1a1a1a;
                cursor: grab;
                touch-action: none;
                width: 100%;
            }

            .timeframe-row {
                display: flex;
                gap: 4px;
                padding: 0 4px;
            }

            .chip {
                background: black;
                color: white;
                border: 1px solid #4a5d73;
                border-radius: 16px;
                padding: 6px 14px;
                font-size: 13px;
                cursor: pointer;
            }

            .chip.selected {
                background: white;
                color: black;
            }

            .overlay {
                position: absolute;
                inset: 0;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                background: rgba(0, 0, 0, 0.6);
                border-radius: 8px;
            }

            .spinner {
                width: 36px;
                height: 36px;
                border: 3px solid #4a5d73;
                border-top-color: white;
                border-radius: 50%;
                animation: spin 0.8s linear infinite;
            }

            @keyframes spin {
                to { transform: rotate(360deg); }
            }

            .error-message {
                color: #e16c48;
                font-size: 14px;
                max-width: 70%;
                text-align: center;
            }

            .retry-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 8px 18px;
                border-radius: 6px;
                cursor: pointer;
            }
            "#}
        </style>
        <div class="chart-screen">
            <ChartContainer />
        </div>
    }
}

#[component]
fn ChartContainer() -> impl IntoView {
    let service = Rc::new(ChartScreenService::new(AggregatesRestClient::new(API_KEY)));
    let (screen, set_screen) = create_signal(ChartScreen::Initial);
    service.subscribe(move |state| set_screen.set(state.clone()));

    let canvas_ref = create_node_ref::<Canvas>();

    // first load at the default timeframe
    {
        let service = Rc::clone(&service);
        spawn_local(async move {
            service.select_timeframe(Timeframe::default()).await;
        });
    }

    // redraw on every state change; the measured canvas width is folded
    // back into the viewport before the frame is built
    {
        let service = Rc::clone(&service);
        create_effect(move |_| {
            let state = screen.get();
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let width = canvas.width();
            if let ChartScreen::Content(content) = &state {
                if (content.viewport.surface_width - width as f32).abs() > 0.5 {
                    service.on_surface_resized(width as f32);
                    return;
                }
                let renderer = CanvasRenderer::new(CANVAS_ID, width, CANVAS_HEIGHT);
                let commands = build_draw_commands(
                    &content.bars,
                    &content.viewport,
                    content.timeframe,
                    CANVAS_HEIGHT as f32,
                );
                if let Err(error) = renderer.render(&commands) {
                    get_logger().error(
                        LogComponent::Presentation("ChartContainer"),
                        &format!("Render failed: {:?}", error),
                    );
                }
            }
        });
    }

    // host layout pass: track the container width
    {
        let service = Rc::clone(&service);
        let _ = window_event_listener(ev::resize, move |_| {
            if let Some(canvas) = canvas_ref.get_untracked() {
                if let Some(parent) = canvas.parent_element() {
                    let width = parent.client_width().max(0) as u32;
                    if width > 0 {
                        canvas.set_width(width);
                        service.on_surface_resized(width as f32);
                    }
                }
            }
        });
    }

    let on_wheel = {
        let service = Rc::clone(&service);
        move |event: web_sys::WheelEvent| {
            event.prevent_default();
            service.on_gesture(wheel_zoom_factor(event.delta_y()), 0.0);
        }
    };

    let on_pointer_down = move |event: web_sys::PointerEvent| {
        globals().is_dragging.set(true);
        globals().last_pointer_x.set(event.client_x() as f64);
    };

    let on_pointer_move = {
        let service = Rc::clone(&service);
        move |event: web_sys::PointerEvent| {
            if !globals().is_dragging.get_untracked() {
                return;
            }
            let x = event.client_x() as f64;
            let delta_x = x - globals().last_pointer_x.get_untracked();
            globals().last_pointer_x.set(x);
            service.on_gesture(1.0, delta_x as f32);
        }
    };

    let on_pointer_up = move |_event: web_sys::PointerEvent| {
        globals().is_dragging.set(false);
    };

    let overlay_service = Rc::clone(&service);

    view! {
        <div class="chart-container">
            <canvas
                id=CANVAS_ID
                node_ref=canvas_ref
                width=DEFAULT_CANVAS_WIDTH
                height=CANVAS_HEIGHT
                on:wheel=on_wheel
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_up
            />
            <TimeframeChips screen service=Rc::clone(&service) />
            {move || match screen.get() {
                ChartScreen::Loading { .. } => view! {
                    <div class="overlay">
                        <div class="spinner"></div>
                    </div>
                }
                .into_view(),
                ChartScreen::Failed { reason, .. } => {
                    let service = Rc::clone(&overlay_service);
                    view! {
                        <div class="overlay">
                            <div class="error-message">{reason}</div>
                            <button
                                class="retry-btn"
                                on:click=move |_| {
                                    let service = Rc::clone(&service);
                                    spawn_local(async move { service.retry().await });
                                }
                            >
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_view()
                }
                _ => ().into_view(),
            }}
        </div>
    }
}

#[component]
fn TimeframeChips(
    screen: ReadSignal<ChartScreen>,
    service: Rc<ChartScreenService<AggregatesRestClient>>,
) -> impl IntoView {
    view! {
        <div class="timeframe-row">
            {Timeframe::iter()
                .map(|timeframe| {
                    let service = Rc::clone(&service);
                    view! {
                        <button
                            class="chip"
                            class:selected=move || screen.get().timeframe() == Some(timeframe)
                            on:click=move |_| {
                                let service = Rc::clone(&service);
                                spawn_local(async move {
                                    service.select_timeframe(timeframe).await;
                                });
                            }
                        >
                            {timeframe.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
