#![cfg(target_arch = "wasm32")]

use stock_chart_wasm::domain::chart::Viewport;
use stock_chart_wasm::domain::market_data::{Bar, BarSeries, Price, Timeframe, Timestamp};
use stock_chart_wasm::infrastructure::rendering::{build_draw_commands, CanvasRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn replays_a_frame_onto_a_live_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id("test-chart-canvas");
    document.body().unwrap().append_child(&canvas).unwrap();

    let series = BarSeries::new(vec![
        Bar::new(
            Price::from(10.0),
            Price::from(20.0),
            Price::from(5.0),
            Price::from(25.0),
            Timestamp::from_millis(9 * 60_000),
        ),
        Bar::new(
            Price::from(15.0),
            Price::from(10.0),
            Price::from(8.0),
            Price::from(18.0),
            Timestamp::from_millis(4 * 60_000),
        ),
    ]);
    let viewport = Viewport { visible_bar_count: 20, scrolled_by: 0.0, surface_width: 100.0 };
    let commands = build_draw_commands(&series, &viewport, Timeframe::Min5, 100.0);
    assert!(!commands.is_empty());

    let renderer = CanvasRenderer::new("test-chart-canvas", 100, 100);
    renderer.render(&commands).expect("frame should replay cleanly");
}
