use chrono::NaiveDate;
use egui::{Align2, Painter, Pos2, Rect, Stroke, Vec2};
use week_lanes::engine::dates;
use week_lanes::{LayoutMetrics, WeekWindow};

use crate::ui::theme;

/// Paint the "Lane" corner cell and the seven day columns. Column `i`
/// spans exactly `[i * day_width, (i + 1) * day_width)` of the grid area so
/// bars line up with it.
pub fn draw_week_header(
    painter: &Painter,
    origin: Pos2,
    week: &WeekWindow,
    metrics: &LayoutMetrics,
    today: NaiveDate,
) {
    let width = theme::LABEL_COLUMN_WIDTH + metrics.week_width();
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, theme::HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );

    painter.text(
        Pos2::new(origin.x + 16.0, origin.y + theme::HEADER_HEIGHT / 2.0),
        Align2::LEFT_CENTER,
        "LANE",
        theme::font_header(),
        theme::TEXT_DIM,
    );

    let grid_left = origin.x + theme::LABEL_COLUMN_WIDTH;
    let today_index = week.today_index(today);
    for (i, date) in week.days().iter().enumerate() {
        let x = grid_left + i as f32 * metrics.day_width;
        let column = Rect::from_min_size(
            Pos2::new(x, origin.y),
            Vec2::new(metrics.day_width, theme::HEADER_HEIGHT),
        );
        if today_index == Some(i) {
            painter.rect_filled(column, 0.0, theme::BG_TODAY);
        }
        painter.text(
            Pos2::new(column.center().x, origin.y + 16.0),
            Align2::CENTER_CENTER,
            date.format("%a").to_string().to_uppercase(),
            theme::font_header(),
            theme::TEXT_DIM,
        );
        painter.text(
            Pos2::new(column.center().x, origin.y + 32.0),
            Align2::CENTER_CENTER,
            dates::format(*date),
            theme::font_header(),
            theme::TEXT_SECONDARY,
        );
    }

    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + theme::HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + theme::HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER),
    );
}
