use crate::core::{ChartScales, format_time_tick};
use crate::render::{
    CanvasLayerKind, LinePrimitive, Scene, TextHAlign, TextPrimitive, TextVAlign,
};

use super::ChartEngineConfig;

/// Bottom time axis and left price axis.
///
/// Each axis is a domain line with outer ticks at both ends, one tick mark per
/// tick value and a label past the tick mark.
pub(super) fn push_axes(scene: &mut Scene, scales: &ChartScales, config: &ChartEngineConfig) {
    push_time_axis(scene, scales, config);
    push_price_axis(scene, scales, config);
}

fn push_time_axis(scene: &mut Scene, scales: &ChartScales, config: &ChartEngineConfig) {
    let style = &config.style;
    let plot = scales.plot;
    let tick = style.axis_tick_size_px;
    let axis_line = |x1, y1, x2, y2| {
        LinePrimitive::new(x1, y1, x2, y2, style.axis_stroke_width, style.axis_color)
    };

    scene.push_line(
        CanvasLayerKind::Axis,
        axis_line(plot.left, plot.bottom, plot.right, plot.bottom),
    );
    for x in [plot.left, plot.right] {
        scene.push_line(
            CanvasLayerKind::Axis,
            axis_line(x, plot.bottom, x, plot.bottom + tick),
        );
    }

    let label_y = plot.bottom + tick + style.axis_label_padding_px;
    for date in scales.time.ticks(config.time_tick_count) {
        let x = scales.time.date_to_pixel(date);
        scene.push_line(
            CanvasLayerKind::Axis,
            axis_line(x, plot.bottom, x, plot.bottom + tick),
        );
        scene.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_time_tick(date),
                x,
                label_y,
                style.axis_label_font_size_px,
                style.axis_color,
                TextHAlign::Center,
                TextVAlign::Top,
            ),
        );
    }
}

fn push_price_axis(scene: &mut Scene, scales: &ChartScales, config: &ChartEngineConfig) {
    let style = &config.style;
    let plot = scales.plot;
    let tick = style.axis_tick_size_px;
    let axis_line = |x1, y1, x2, y2| {
        LinePrimitive::new(x1, y1, x2, y2, style.axis_stroke_width, style.axis_color)
    };

    scene.push_line(
        CanvasLayerKind::Axis,
        axis_line(plot.left, plot.top, plot.left, plot.bottom),
    );
    for y in [plot.top, plot.bottom] {
        scene.push_line(
            CanvasLayerKind::Axis,
            axis_line(plot.left - tick, y, plot.left, y),
        );
    }

    let format = scales.price.tick_format(config.price_tick_count);
    let label_x = plot.left - tick - style.axis_label_padding_px;
    for price in scales.price.ticks(config.price_tick_count) {
        let y = scales.price.price_to_pixel(price);
        scene.push_line(
            CanvasLayerKind::Axis,
            axis_line(plot.left - tick, y, plot.left, y),
        );
        scene.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format.format(price),
                label_x,
                y,
                style.axis_label_font_size_px,
                style.axis_color,
                TextHAlign::Right,
                TextVAlign::Middle,
            ),
        );
    }
}

/// Unlabelled gridlines across the plot at the axis tick positions.
pub(super) fn push_grid(scene: &mut Scene, scales: &ChartScales, config: &ChartEngineConfig) {
    let style = &config.style;
    let plot = scales.plot;

    for date in scales.time.ticks(config.time_tick_count) {
        let x = scales.time.date_to_pixel(date);
        scene.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                x,
                plot.top,
                x,
                plot.bottom,
                style.grid_stroke_width,
                style.grid_color,
            ),
        );
    }
    for price in scales.price.ticks(config.price_tick_count) {
        let y = scales.price.price_to_pixel(price);
        scene.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                plot.left,
                y,
                plot.right,
                y,
                style.grid_stroke_width,
                style.grid_color,
            ),
        );
    }
}
