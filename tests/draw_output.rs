use stock_chart_wasm::domain::chart::{Color, Viewport};
use stock_chart_wasm::domain::market_data::{Bar, BarSeries, Price, Timeframe, Timestamp};
use stock_chart_wasm::infrastructure::rendering::{
    build_draw_commands, DrawCommand, TextAnchor,
};

const SURFACE_HEIGHT: f32 = 100.0;

fn bar(open: f32, close: f32, low: f32, high: f32, millis: u64) -> Bar {
    Bar::new(
        Price::from(open),
        Price::from(close),
        Price::from(low),
        Price::from(high),
        Timestamp::from_millis(millis),
    )
}

fn viewport(count: usize, scrolled_by: f32, width: f32) -> Viewport {
    Viewport { visible_bar_count: count, scrolled_by, surface_width: width }
}

const MIN_9: u64 = 9 * 60_000;
const MIN_4: u64 = 4 * 60_000;

#[test]
fn empty_batch_renders_nothing() {
    let commands = build_draw_commands(
        &BarSeries::empty(),
        &viewport(20, 0.0, 100.0),
        Timeframe::Min5,
        SURFACE_HEIGHT,
    );
    assert!(commands.is_empty());
}

#[test]
fn flat_price_window_renders_nothing() {
    let series = BarSeries::new(vec![
        bar(50.0, 50.0, 50.0, 50.0, MIN_9),
        bar(50.0, 50.0, 50.0, 50.0, MIN_4),
    ]);
    let commands = build_draw_commands(
        &series,
        &viewport(20, 0.0, 100.0),
        Timeframe::Min5,
        SURFACE_HEIGHT,
    );
    assert!(commands.is_empty());
}

#[test]
fn unmeasured_surface_renders_nothing() {
    let series = BarSeries::new(vec![bar(10.0, 20.0, 0.0, 40.0, MIN_9)]);
    assert!(build_draw_commands(
        &series,
        &viewport(20, 0.0, 0.0),
        Timeframe::Min5,
        SURFACE_HEIGHT
    )
    .is_empty());
    assert!(
        build_draw_commands(&series, &viewport(20, 0.0, 100.0), Timeframe::Min5, 0.0)
            .is_empty()
    );
}

#[test]
fn wick_body_and_price_lines_for_each_visible_bar() {
    // 40-point price range over a 100px surface: 2.5 px per point
    let series = BarSeries::new(vec![
        bar(10.0, 20.0, 0.0, 40.0, MIN_9),
        bar(30.0, 10.0, 5.0, 35.0, MIN_4),
    ]);
    let commands = build_draw_commands(
        &series,
        &viewport(20, 0.0, 100.0),
        Timeframe::Min5,
        SURFACE_HEIGHT,
    );
    // 2 bars * (wick + body) + 3 reference lines + 3 labels
    assert_eq!(commands.len(), 10);

    // newest bar sits at the right edge
    assert_eq!(
        commands[0],
        DrawCommand::Line {
            from: (100.0, 100.0),
            to: (100.0, 0.0),
            width: 1.0,
            color: Color::WHITE,
            dash: None,
        }
    );
    assert_eq!(
        commands[1],
        DrawCommand::Line {
            from: (100.0, 75.0),
            to: (100.0, 50.0),
            width: 2.5,
            color: Color::BULLISH,
            dash: None,
        }
    );

    // the older bar is one bar width to the left and closed down
    let DrawCommand::Line { from, color, .. } = &commands[3] else {
        panic!("expected the older body line");
    };
    assert_eq!(from.0, 95.0);
    assert_eq!(*color, Color::BEARISH);
}

#[test]
fn reference_lines_carry_right_aligned_labels() {
    let series = BarSeries::new(vec![
        bar(10.0, 20.0, 0.0, 40.0, MIN_9),
        bar(30.0, 10.0, 5.0, 35.0, MIN_4),
    ]);
    let commands = build_draw_commands(
        &series,
        &viewport(20, 0.0, 100.0),
        Timeframe::Min5,
        SURFACE_HEIGHT,
    );

    let labels: Vec<_> = commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text { content, anchor: TextAnchor::Right, at, .. } => {
                Some((content.as_str(), *at))
            }
            _ => None,
        })
        .collect();
    // visible max, latest close, visible min - top to bottom
    assert_eq!(
        labels,
        vec![("40.00", (100.0, 0.0)), ("20.00", (100.0, 50.0)), ("0.00", (100.0, 100.0))]
    );

    let dashed_horizontals = commands
        .iter()
        .filter(|command| {
            matches!(
                command,
                DrawCommand::Line { dash: Some(_), from, to, .. } if from.1 == to.1
            )
        })
        .count();
    assert_eq!(dashed_horizontals, 3);
}

#[test]
fn open_equals_close_takes_the_down_color() {
    let series = BarSeries::new(vec![bar(10.0, 10.0, 10.0, 20.0, MIN_9)]);
    let commands = build_draw_commands(
        &series,
        &viewport(20, 0.0, 100.0),
        Timeframe::Min5,
        SURFACE_HEIGHT,
    );
    let body_colors: Vec<_> = commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Line { dash: None, width, color, .. } if *width > 1.0 => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(body_colors, vec![Color::BEARISH]);
}

#[test]
fn top_of_hour_bar_gets_a_delimiter() {
    let series = BarSeries::new(vec![bar(10.0, 15.0, 10.0, 20.0, 3_600_000)]);
    let commands = build_draw_commands(
        &series,
        &viewport(20, 0.0, 100.0),
        Timeframe::Min5,
        SURFACE_HEIGHT,
    );

    assert!(commands.iter().any(|command| matches!(
        command,
        DrawCommand::Line { dash: Some(_), from, to, .. }
            if from.0 == to.0 && from.1 == 0.0 && to.1 == SURFACE_HEIGHT
    )));
    assert!(commands.iter().any(|command| matches!(
        command,
        DrawCommand::Text { content, anchor: TextAnchor::Center, .. } if content == "01:00"
    )));
}

#[test]
fn pan_folds_into_the_x_coordinates() {
    // 30 five-minute bars, window of 20, scrolled 50px back: bars 10..30
    let bars: Vec<Bar> =
        (0..30).map(|i| bar(10.0, 20.0, 0.0, 40.0, 10_000_000_000 - i * 300_000)).collect();
    let series = BarSeries::new(bars);
    let vp = viewport(20, 50.0, 100.0);
    assert_eq!(vp.visible_range(30), (10, 30));

    let commands =
        build_draw_commands(&series, &vp, Timeframe::Min5, SURFACE_HEIGHT);

    // exactly the 20 visible bars emit a wick and a body
    let solid_lines = commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::Line { dash: None, .. }))
        .count();
    assert_eq!(solid_lines, 40);

    // the newest visible bar (global index 10) lands on the right edge:
    // surface - barWidth * 10 + scroll = 100 - 50 + 50
    assert!(commands.iter().any(|command| matches!(
        command,
        DrawCommand::Line { dash: None, width, from, .. }
            if *width == 1.0 && from.0 == 100.0
    )));

    // nothing is placed beyond the surface
    for command in &commands {
        let x = match command {
            DrawCommand::Line { from, .. } => from.0,
            DrawCommand::Text { at, .. } => at.0,
        };
        assert!((0.0..=100.0).contains(&x), "command past the edge: {command:?}");
    }
}
