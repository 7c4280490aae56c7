use egui::{Color32, FontId, Rounding, Stroke, Visuals};
use week_lanes::LaneId;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_APP: Color32 = Color32::from_rgb(248, 250, 252); // slate-50
pub const BG_GRID: Color32 = Color32::WHITE;
pub const BG_HEADER: Color32 = Color32::from_rgb(241, 245, 249); // slate-100
pub const BG_LANE_LABEL: Color32 = Color32::from_rgb(248, 250, 252);
pub const BG_TODAY: Color32 = Color32::from_rgba_premultiplied(186, 230, 253, 200); // sky-200

pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240); // slate-200
pub const GRID_LINE: Color32 = Color32::from_rgb(226, 232, 240);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42); // slate-900
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(71, 85, 105); // slate-600
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 116, 139); // slate-500
pub const TEXT_ERROR: Color32 = Color32::from_rgb(190, 18, 60); // rose-700

pub const ACCENT: Color32 = Color32::from_rgb(15, 23, 42);
pub const HANDLE_COLOR: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 210);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const LABEL_COLUMN_WIDTH: f32 = 160.0;
pub const HEADER_HEIGHT: f32 = 48.0;
pub const HANDLE_WIDTH: f32 = 8.0;
pub const HANDLE_HEIGHT: f32 = 24.0;
pub const BAR_ROUNDING: f32 = 10.0;
pub const CLIPPED_ROUNDING: f32 = 2.0;
pub const STATUS_BAR_HEIGHT: f32 = 22.0;
pub const DIALOG_WIDTH: f32 = 380.0;

/// Opacity of the bar being dragged.
pub const DRAGGING_ALPHA: f32 = 0.7;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(11.0)
}

pub fn font_lane_label() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_bar() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_marker() -> FontId {
    FontId::proportional(10.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Lane colors ──────────────────────────────────────────────────────────────

pub fn lane_color(lane: LaneId) -> Color32 {
    let [r, g, b] = lane.lane().color;
    Color32::from_rgb(r, g, b)
}

/// Text on amber bars reads better dark.
pub fn lane_text_color(lane: LaneId) -> Color32 {
    match lane {
        LaneId::Qa => TEXT_PRIMARY,
        LaneId::Backend | LaneId::Frontend => Color32::WHITE,
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_APP;
    visuals.window_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::WHITE; // TextEdit bg

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.window_rounding = Rounding::same(14.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    ctx.set_style(style);
}
