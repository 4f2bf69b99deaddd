//! GTK4 host for a [`ChartEngine`].
//!
//! The adapter owns the drawing area and the sidebar buttons, forwards
//! pointer motion and leave events to the engine, and paints the tooltip the
//! engine reports on top of the chart.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use pango::FontDescription;
use tracing::warn;

use crate::api::ChartEngine;
use crate::interaction::{SidebarControl, Tooltip};
use crate::render::{CairoContextRenderer, Renderer};

const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_FONT: &str = "Sans 14px";

pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: Rc<RefCell<ChartEngine<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        let viewport = engine.config().viewport;
        let engine = Rc::new(RefCell::new(engine));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        drawing_area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |_area, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut chart) = engine.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(error = %err, "gtk draw callback failed");
                    return;
                }
                if let Some(tooltip) = chart.tooltip() {
                    draw_tooltip(context, &tooltip);
                }
            }
        });

        let motion = gtk::EventControllerMotion::new();
        {
            let engine = Rc::clone(&engine);
            let drawing_area = drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_move(x, y);
                }
                drawing_area.queue_draw();
            });
        }
        {
            let engine = Rc::clone(&engine);
            let drawing_area = drawing_area.clone();
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_leave();
                }
                drawing_area.queue_draw();
            });
        }
        drawing_area.add_controller(motion);

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<ChartEngine<R>>> {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Vertical button column driving the engine's view state.
    ///
    /// The returned label shows the engine's hover label.
    #[must_use]
    pub fn build_sidebar(&self) -> (gtk::Box, gtk::Label) {
        let column = gtk::Box::new(gtk::Orientation::Vertical, 10);
        let hover_label = gtk::Label::new(None);

        for control in SidebarControl::ALL {
            let button = gtk::Button::with_label(control.label());
            {
                let engine = Rc::clone(&self.engine);
                let drawing_area = self.drawing_area.clone();
                button.connect_clicked(move |_| {
                    if let Ok(mut chart) = engine.try_borrow_mut() {
                        chart.click_control(control);
                    }
                    drawing_area.queue_draw();
                });
            }

            let motion = gtk::EventControllerMotion::new();
            {
                let engine = Rc::clone(&self.engine);
                let hover_label = hover_label.clone();
                motion.connect_enter(move |_, _, _| {
                    if let Ok(mut chart) = engine.try_borrow_mut() {
                        chart.control_pointer_enter(control);
                        hover_label.set_text(&chart.view_state().hover_label);
                    }
                });
            }
            {
                let engine = Rc::clone(&self.engine);
                let hover_label = hover_label.clone();
                motion.connect_leave(move |_| {
                    if let Ok(mut chart) = engine.try_borrow_mut() {
                        chart.control_pointer_leave();
                        hover_label.set_text(&chart.view_state().hover_label);
                    }
                });
            }
            button.add_controller(motion);
            column.append(&button);
        }

        (column, hover_label)
    }
}

fn draw_tooltip(context: &cairo::Context, tooltip: &Tooltip) {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&FontDescription::from_string(TOOLTIP_FONT)));
    layout.set_text(&tooltip.text);
    let (text_width, text_height) = layout.pixel_size();

    context.set_source_rgba(0.0, 0.0, 0.0, 0.7);
    context.rectangle(
        tooltip.x,
        tooltip.y,
        f64::from(text_width) + 2.0 * TOOLTIP_PADDING_PX,
        f64::from(text_height) + 2.0 * TOOLTIP_PADDING_PX,
    );
    if let Err(err) = context.fill() {
        warn!(error = %err, "failed to paint tooltip background");
        return;
    }

    context.set_source_rgb(1.0, 1.0, 1.0);
    context.move_to(tooltip.x + TOOLTIP_PADDING_PX, tooltip.y + TOOLTIP_PADDING_PX);
    pangocairo::functions::show_layout(context, &layout);
}
