use crate::app::InventoryOptimizer;
use crate::constants::{chart, colors, layout};
use crate::data::y_axis_bounds;
use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoint, Text};

/// Render inventory level over time with the three thresholds as reference lines
pub fn render_chart(app: &mut InventoryOptimizer, ui: &mut egui::Ui) {
    profiling::scope!("render_chart");

    let analysis = &app.state.analysis;
    let Some(thresholds) = analysis.display_thresholds() else {
        return;
    };
    let levels = analysis.inventory_levels();
    let Some(bounds) = y_axis_bounds(&levels, &thresholds) else {
        return;
    };

    // x is the row position: records are plotted in upload order, never resorted
    let points: Vec<[f64; 2]> = levels
        .iter()
        .enumerate()
        .map(|(i, &level)| [i as f64, level])
        .collect();
    let last_x = points.len().saturating_sub(1) as f64;

    let dates: Vec<String> = analysis.records().iter().map(|r| r.date.clone()).collect();
    let axis_dates = dates.clone();

    // Detect modifier keys for constrained zoom
    let shift_held = ui.input(|i| i.modifiers.shift);
    let ctrl_held = ui.input(|i| i.modifiers.ctrl || i.modifiers.command);

    let view = &mut app.state.view;
    let mut plot = Plot::new("inventory_chart")
        .allow_zoom(view.allow_zoom)
        .allow_drag(view.allow_drag)
        .allow_scroll(view.allow_zoom)
        .show_grid(view.show_grid)
        .height(ui.available_height().max(layout::MIN_CHART_HEIGHT))
        .set_margin_fraction(egui::Vec2::new(0.02, 0.0))
        .include_y(bounds.min)
        .include_y(bounds.max)
        .y_axis_label("Inventory level")
        .x_axis_formatter(move |mark, _range| date_label(&axis_dates, mark.value))
        .label_formatter(move |name, value| {
            let date = date_label(&dates, value.x.round());
            if name.is_empty() {
                format!("{}\n{:.0}", date, value.y)
            } else {
                format!("{}\n{}\n{:.0}", name, date, value.y)
            }
        });

    // Apply axis-locked zoom if modifiers held
    if shift_held && view.allow_zoom {
        plot = plot.allow_zoom([true, false]);
    } else if ctrl_held && view.allow_zoom {
        plot = plot.allow_zoom([false, true]);
    }

    if view.reset_bounds {
        plot = plot.reset();
        view.reset_bounds = false;
    }

    if view.show_legend {
        plot = plot.legend(Legend::default().position(egui_plot::Corner::LeftTop));
    }

    let line_width = view.line_width;
    let references = [
        ("Low", thresholds.low, colors::LOW),
        ("Medium", thresholds.medium, colors::MEDIUM),
        ("High", thresholds.high, colors::HIGH),
    ];

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new("Inventory level", points)
                .color(colors::INVENTORY)
                .width(line_width),
        );

        for (label, value, color) in references {
            plot_ui.hline(
                HLine::new(label, value)
                    .color(color)
                    .style(egui_plot::LineStyle::Dashed {
                        length: chart::REFERENCE_DASH_LENGTH,
                    })
                    .width(1.5),
            );
            plot_ui.text(
                Text::new(
                    label,
                    PlotPoint::new(last_x, value),
                    egui::RichText::new(label).color(color).strong(),
                )
                .anchor(egui::Align2::RIGHT_BOTTOM),
            );
        }
    });
}

/// Axis label for a grid mark: the date text of the record at that row.
/// Marks between rows or outside the data get no label.
pub fn date_label(dates: &[String], x: f64) -> String {
    if x < 0.0 || (x - x.round()).abs() > 1e-6 {
        return String::new();
    }
    dates.get(x.round() as usize).cloned().unwrap_or_default()
}
