// src/gui/components/charts.rs
//
// Paints the chart models from `crate::charts`. Standings only; fixtures get
// a short placeholder line.

use eframe::egui::{
    self, epaint::TextShape, Align2, Color32, FontId, Mesh, Pos2, Rect, Sense, Shape, Stroke, Vec2,
};

use crate::{
    charts::{self, axis_direction, BarChart, RadarChart},
    gui::app::App,
    specs::standings::StandingsRow,
};

const BAR_CHART_H: f32 = 380.0;
const RADAR_H: f32 = 420.0;
const GRID_RINGS: usize = 4;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(rows) = app.table.as_ref().and_then(|t| t.standings()) else {
        ui.add_space(8.0);
        ui.weak("Charts are available for Standings.");
        return;
    };

    ui.add_space(12.0);
    ui.heading("Points Visualization");
    if let Some(bars) = &app.bars {
        paint_bar_chart(ui, bars);
    }

    ui.add_space(12.0);
    ui.heading("Team Comparison");
    let Some((def1, def2)) = charts::default_pair(rows) else {
        ui.weak("At least two teams are needed for a comparison.");
        return;
    };

    let gui = &mut app.state.gui;
    let mut first = gui.compare_first.clone().unwrap_or_else(|| s!(def1));
    let mut second = gui.compare_second.clone().unwrap_or_else(|| s!(def2));

    ui.horizontal(|ui| {
        team_selector(ui, "Select first team", "cmp_first", rows, &mut first);
        ui.add_space(16.0);
        team_selector(ui, "Select second team", "cmp_second", rows, &mut second);
    });

    if gui.compare_first.as_deref() != Some(first.as_str())
        || gui.compare_second.as_deref() != Some(second.as_str())
    {
        logd!("UI: Comparison → {} vs {}", first, second);
        gui.compare_first = Some(first.clone());
        gui.compare_second = Some(second.clone());
    }

    match charts::comparison_chart(rows, &first, &second) {
        Ok(radar) => paint_radar(ui, &radar),
        Err(e) => { ui.weak(e.to_string()); }
    }
}

/// Team combo box over the table's team names (first occurrence of each).
fn team_selector(ui: &mut egui::Ui, label: &str, id: &str, rows: &[StandingsRow], current: &mut String) {
    ui.vertical(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(current.as_str())
            .width(200.0)
            .show_ui(ui, |ui| {
                let mut seen: Vec<&str> = Vec::with_capacity(rows.len());
                for r in rows {
                    if seen.contains(&r.team.as_str()) { continue; }
                    seen.push(&r.team);
                    ui.selectable_value(current, r.team.clone(), r.team.as_str());
                }
            });
    });
}

/* ---------------- Bar chart ---------------- */

/// Round the axis top up to a step of 10 (or 1 for tiny values).
fn nice_top(max: f64) -> f64 {
    if max <= 0.0 { return 1.0; }
    let step = if max > 10.0 { 10.0 } else { 1.0 };
    (max / step).ceil() * step
}

fn paint_bar_chart(ui: &mut egui::Ui, chart: &BarChart) {
    let width = ui.available_width().max(320.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, BAR_CHART_H), Sense::hover());
    let frame = resp.rect;

    let text = ui.visuals().text_color();
    let weak = ui.visuals().weak_text_color();
    let grid = ui.visuals().widgets.noninteractive.bg_stroke.color;
    let bar_fill = Color32::from_rgb(0x63, 0x6E, 0xFA);
    let small = FontId::proportional(11.0);

    painter.text(
        Pos2::new(frame.left() + 8.0, frame.top() + 4.0),
        Align2::LEFT_TOP,
        chart.title,
        FontId::proportional(15.0),
        text,
    );

    // margins: title on top, rotated team names below
    let plot = Rect::from_min_max(
        Pos2::new(frame.left() + 56.0, frame.top() + 30.0),
        Pos2::new(frame.right() - 12.0, frame.bottom() - 120.0),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let top = nice_top(chart.max_value());
    let y_of = |v: f64| plot.bottom() - (v / top) as f32 * plot.height();

    // y grid + ticks
    for i in 0..=5 {
        let v = top * i as f64 / 5.0;
        let y = y_of(v);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], Stroke::new(1.0, grid));
        painter.text(Pos2::new(plot.left() - 6.0, y), Align2::RIGHT_CENTER, format!("{}", v.round()), small.clone(), weak);
    }

    // y label, rotated to read bottom-up
    let galley = painter.layout_no_wrap(s!(chart.y_label), FontId::proportional(12.0), text);
    let pos = Pos2::new(frame.left() + 4.0, plot.center().y + galley.size().x / 2.0);
    painter.add(TextShape::new(pos, galley, text).with_angle(-std::f32::consts::FRAC_PI_2));

    let n = chart.bars.len().max(1);
    let slot = plot.width() / n as f32;
    let angle = chart.tick_angle_deg.to_radians();
    let (dir_x, dir_y) = (angle.cos(), angle.sin());

    for (i, bar) in chart.bars.iter().enumerate() {
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let rect = Rect::from_min_max(
            Pos2::new(cx - slot * 0.4, y_of(bar.value)),
            Pos2::new(cx + slot * 0.4, plot.bottom()),
        );
        painter.rect_filled(rect, 0.0, bar_fill);

        // tick label ends at the tick and runs down-left along the angle
        let galley = painter.layout_no_wrap(bar.label.clone(), small.clone(), text);
        let w = galley.size().x;
        let h = galley.size().y;
        let anchor = Pos2::new(cx - h * 0.5 * dir_y.abs(), plot.bottom() + 6.0);
        let start = Pos2::new(anchor.x - w * dir_x, anchor.y - w * dir_y);
        painter.add(TextShape::new(start, galley, text).with_angle(angle));
    }

    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, weak));
    painter.text(
        Pos2::new(plot.center().x, frame.bottom() - 2.0),
        Align2::CENTER_BOTTOM,
        chart.x_label,
        FontId::proportional(12.0),
        text,
    );
}

/* ---------------- Radar chart ---------------- */

fn paint_radar(ui: &mut egui::Ui, chart: &RadarChart) {
    let width = ui.available_width().max(320.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, RADAR_H), Sense::hover());
    let frame = resp.rect;

    let text = ui.visuals().text_color();
    let weak = ui.visuals().weak_text_color();
    let grid = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    let small = FontId::proportional(11.0);

    painter.text(
        Pos2::new(frame.left() + 8.0, frame.top() + 4.0),
        Align2::LEFT_TOP,
        &chart.title,
        FontId::proportional(15.0),
        text,
    );

    let center = Pos2::new(frame.center().x - 60.0, frame.center().y + 14.0);
    let radius = ((RADAR_H - 90.0) / 2.0).min(width / 2.0 - 140.0).max(40.0);
    let n = chart.axes.len();
    let at = |xy: [f32; 2], scale: f32| center + Vec2::new(xy[0], xy[1]) * radius * scale;

    // rings + radial tick values
    for ring in 1..=GRID_RINGS {
        let f = ring as f32 / GRID_RINGS as f32;
        let pts: Vec<Pos2> = (0..n).map(|i| at(axis_direction(i, n), f)).collect();
        painter.add(Shape::closed_line(pts, grid));
        let v = chart.range.0 + (chart.range.1 - chart.range.0) * f as f64;
        painter.text(at([0.0, -1.0], f) + Vec2::new(4.0, 0.0), Align2::LEFT_CENTER, format!("{:.0}", v), small.clone(), weak);
    }

    // spokes + axis names
    for (i, name) in chart.axes.iter().enumerate() {
        let d = axis_direction(i, n);
        painter.line_segment([center, at(d, 1.0)], grid);
        let align = match (d[0], d[1]) {
            (x, _) if x > 0.2 => Align2::LEFT_CENTER,
            (x, _) if x < -0.2 => Align2::RIGHT_CENTER,
            (_, y) if y < 0.0 => Align2::CENTER_BOTTOM,
            _ => Align2::CENTER_TOP,
        };
        painter.text(at(d, 1.08), align, *name, small.clone(), text);
    }

    // one filled polygon per team, then its outline
    for series in &chart.series {
        let pts: Vec<Pos2> = chart.vertices(series).into_iter().map(|v| at(v, 1.0)).collect();
        painter.add(fan(center, &pts, series.color.gamma_multiply(0.35)));
        painter.add(Shape::closed_line(pts, Stroke::new(2.0, series.color)));
    }

    // legend
    let mut y = frame.top() + 40.0;
    let x = frame.right() - 170.0;
    for series in &chart.series {
        let swatch = Rect::from_min_size(Pos2::new(x, y - 6.0), Vec2::splat(12.0));
        painter.rect_filled(swatch, 2.0, series.color);
        painter.text(Pos2::new(x + 18.0, y), Align2::LEFT_CENTER, &series.team, FontId::proportional(12.0), text);
        y += 20.0;
    }
}

/// Triangle fan from the center; radar polygons are star-shaped around it.
fn fan(center: Pos2, ring: &[Pos2], color: Color32) -> Shape {
    if ring.len() < 3 {
        return Shape::Noop;
    }
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for p in ring {
        mesh.colored_vertex(*p, color);
    }
    let n = ring.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    Shape::mesh(mesh)
}
