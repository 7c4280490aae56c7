use chrono::NaiveDate;
use egui::{Align2, Color32, Id, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use week_lanes::engine::dates;
use week_lanes::{DragOutcome, LaneId, LaneLayout, PointerTarget, Schedule, Task, TaskPlacement};

use crate::ui::theme;
use crate::ui::week_header;

/// Result details from interactions with the lane grid.
#[derive(Debug, Default)]
pub struct GridInteraction {
    /// Set on the frame a gesture was committed.
    pub committed: Option<DragOutcome>,
}

/// Render the week header and every lane, and drive the drag machine from
/// this frame's pointer input.
pub fn show_lane_grid(schedule: &mut Schedule, today: NaiveDate, ui: &mut Ui) -> GridInteraction {
    let mut interaction = GridInteraction::default();
    let metrics = *schedule.metrics();
    let layouts = schedule.layout();

    let grid_width = theme::LABEL_COLUMN_WIDTH + metrics.week_width();
    let lanes_height: f32 = layouts.iter().map(|l| l.height(&metrics)).sum();
    let total = Vec2::new(grid_width, theme::HEADER_HEIGHT + lanes_height);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(total, Sense::hover());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 12.0, theme::BG_GRID);
            week_header::draw_week_header(&painter, origin, schedule.week(), &metrics, today);

            // Lane rows, top to bottom. Kept for hit-testing the pointer.
            let mut lane_rects: Vec<(LaneId, Rect)> = Vec::with_capacity(layouts.len());
            let mut y = origin.y + theme::HEADER_HEIGHT;
            for layout in &layouts {
                let h = layout.height(&metrics);
                let rect = Rect::from_min_size(Pos2::new(origin.x, y), Vec2::new(grid_width, h));
                draw_lane_background(&painter, rect, layout.lane, &metrics);
                lane_rects.push((layout.lane, rect));
                y += h;
            }

            let mut pressed: Option<PointerTarget> = None;
            for (layout, (_, lane_rect)) in layouts.iter().zip(&lane_rects) {
                if let Some(target) = show_lane_tasks(schedule, layout, *lane_rect, ui, &painter) {
                    pressed = Some(target);
                }
            }

            // ── Drive the state machine ─────────────────────────────────
            if let Some(target) = pressed {
                let press_x = ui
                    .input(|i| i.pointer.press_origin())
                    .map(|p| p.x)
                    .unwrap_or_default();
                schedule.pointer_down(&target, press_x);
            }

            if schedule.drag().is_dragging() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
                    schedule.pointer_move(pos.x, pos.y, |x, y| lane_at(&lane_rects, x, y));
                }
                let released = ui.input(|i| i.pointer.any_released() || !i.pointer.primary_down());
                if released {
                    interaction.committed = schedule.pointer_up();
                }
                ui.ctx().request_repaint();
            }
        });

    interaction
}

/// Which lane row contains the point, if any.
fn lane_at(lane_rects: &[(LaneId, Rect)], x: f32, y: f32) -> Option<LaneId> {
    let point = Pos2::new(x, y);
    lane_rects
        .iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(lane, _)| *lane)
}

fn draw_lane_background(
    painter: &egui::Painter,
    rect: Rect,
    lane: LaneId,
    metrics: &week_lanes::LayoutMetrics,
) {
    let label_rect = Rect::from_min_size(rect.min, Vec2::new(theme::LABEL_COLUMN_WIDTH, rect.height()));
    painter.rect_filled(label_rect, 0.0, theme::BG_LANE_LABEL);
    painter.text(
        label_rect.center(),
        Align2::CENTER_CENTER,
        lane.lane().label,
        theme::font_lane_label(),
        theme::TEXT_SECONDARY,
    );

    // Dashed-feel day separators
    let grid_left = rect.left() + theme::LABEL_COLUMN_WIDTH;
    for i in 0..7 {
        let x = grid_left + i as f32 * metrics.day_width;
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, theme::GRID_LINE),
        );
    }

    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER),
    );
}

/// Draw the bars of one lane. Returns the target the pointer went down on.
fn show_lane_tasks(
    schedule: &Schedule,
    layout: &LaneLayout,
    lane_rect: Rect,
    ui: &mut Ui,
    painter: &egui::Painter,
) -> Option<PointerTarget> {
    let metrics = schedule.metrics();
    let drag = schedule.drag();
    let grid_left = lane_rect.left() + theme::LABEL_COLUMN_WIDTH;
    let mut pressed = None;

    for placement in &layout.placements {
        let Some(task) = schedule.task(&placement.task_id) else {
            continue;
        };
        let width = drag.resize_preview_width(&task.id, placement.width(metrics));
        let bar_rect = Rect::from_min_size(
            Pos2::new(
                grid_left + placement.left(metrics),
                lane_rect.top() + placement.top(metrics),
            ),
            Vec2::new(width, metrics.row_height),
        );
        let handle_rect = Rect::from_center_size(
            Pos2::new(bar_rect.right() - theme::HANDLE_WIDTH, bar_rect.center().y),
            Vec2::new(theme::HANDLE_WIDTH, theme::HANDLE_HEIGHT),
        );

        // Handle registered last so it wins over the body underneath.
        let body = ui.interact(bar_rect, bar_id(task, "body"), Sense::drag());
        let handle = ui.interact(handle_rect.expand(3.0), bar_id(task, "resize"), Sense::drag());

        if handle.drag_started() {
            pressed = Some(PointerTarget::ResizeHandle(task.id.clone()));
        } else if body.drag_started() {
            pressed = Some(PointerTarget::TaskBody(task.id.clone()));
        }

        let is_dragging = drag.is_dragging_task(&task.id);
        let show_handle = handle.hovered() || body.hovered() || is_dragging;
        draw_task_bar(painter, task, placement, bar_rect, is_dragging);
        if show_handle {
            painter.rect_filled(handle_rect, Rounding::same(4.0), theme::HANDLE_COLOR);
        }

        if handle.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
        } else if body.hovered() && !drag.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        if (body.hovered() || handle.hovered()) && !drag.is_dragging() {
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                Id::new(("task-tip", task.id.as_str())),
                |ui| {
                    ui.strong(&task.title);
                    ui.label(format!(
                        "{} → {}",
                        dates::format(task.start),
                        dates::format(task.end)
                    ));
                },
            );
        }
    }

    pressed
}

fn bar_id(task: &Task, part: &'static str) -> Id {
    Id::new(("task-bar", part, task.id.as_str()))
}

fn draw_task_bar(
    painter: &egui::Painter,
    task: &Task,
    placement: &TaskPlacement,
    bar_rect: Rect,
    is_dragging: bool,
) {
    let r = theme::BAR_ROUNDING;
    let clipped = theme::CLIPPED_ROUNDING;
    let left = if placement.continues_before { clipped } else { r };
    let right = if placement.continues_after { clipped } else { r };
    let rounding = Rounding {
        nw: left,
        sw: left,
        ne: right,
        se: right,
    };

    let alpha = if is_dragging { theme::DRAGGING_ALPHA } else { 1.0 };
    let fill = theme::lane_color(task.lane).gamma_multiply(alpha);
    let text_color = theme::lane_text_color(task.lane).gamma_multiply(alpha);

    // Soft shadow
    painter.rect_filled(
        bar_rect.translate(Vec2::new(0.0, 3.0)),
        rounding,
        Color32::from_black_alpha(25),
    );
    painter.rect_filled(bar_rect, rounding, fill);

    // Title, clipped to the bar
    let inset = 12.0;
    let galley = painter.layout_no_wrap(task.title.clone(), theme::font_bar(), text_color);
    let text_pos = Pos2::new(
        bar_rect.left() + inset,
        bar_rect.center().y - galley.size().y / 2.0,
    );
    painter
        .with_clip_rect(bar_rect.shrink2(Vec2::new(inset / 2.0, 0.0)))
        .galley(text_pos, galley, Color32::TRANSPARENT);

    // Continuation markers
    let marker_color = Color32::from_white_alpha(180);
    if placement.continues_before {
        painter.text(
            Pos2::new(bar_rect.left() + 3.0, bar_rect.center().y),
            Align2::LEFT_CENTER,
            "◀",
            theme::font_marker(),
            marker_color,
        );
    }
    if placement.continues_after {
        painter.text(
            Pos2::new(bar_rect.right() - 3.0, bar_rect.center().y),
            Align2::RIGHT_CENTER,
            "▶",
            theme::font_marker(),
            marker_color,
        );
    }
}
