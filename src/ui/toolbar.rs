use crate::app::PlannerApp;
use egui::{menu, Button, RichText, Ui};
use egui_phosphor::regular as icons;
use week_lanes::engine::dates;

/// Render the top menu bar and week navigation.
pub fn show_toolbar(app: &mut PlannerApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  Edit  "), |ui| {
            if ui
                .add_enabled(app.schedule.can_undo(), Button::new("  Undo          Ctrl+Z"))
                .clicked()
            {
                app.undo();
                ui.close_menu();
            }
            if ui
                .add_enabled(app.schedule.can_redo(), Button::new("  Redo          Ctrl+Y"))
                .clicked()
            {
                app.redo();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Add Task...").clicked() {
                app.open_add_task();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  "), |ui| {
            if ui.button("  Previous Week").clicked() {
                app.previous_week();
                ui.close_menu();
            }
            if ui.button("  Next Week").clicked() {
                app.next_week();
                ui.close_menu();
            }
            if ui.button("  This Week").clicked() {
                app.this_week();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  "), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button(icons::CARET_LEFT).on_hover_text("Previous week").clicked() {
            app.previous_week();
        }
        ui.label(
            RichText::new(format!(
                "{} – {}",
                dates::format(app.schedule.week().week_start),
                dates::format(app.schedule.week().last_day())
            ))
            .strong(),
        );
        if ui.button(icons::CARET_RIGHT).on_hover_text("Next week").clicked() {
            app.next_week();
        }
        if ui
            .button(format!("{} Today", icons::CALENDAR_BLANK))
            .on_hover_text("Jump to the current week")
            .clicked()
        {
            app.this_week();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Add task", icons::PLUS)).clicked() {
                app.open_add_task();
            }
            if ui
                .add_enabled(app.schedule.can_redo(), Button::new(icons::ARROW_CLOCKWISE))
                .on_hover_text("Redo")
                .clicked()
            {
                app.redo();
            }
            if ui
                .add_enabled(app.schedule.can_undo(), Button::new(icons::ARROW_COUNTER_CLOCKWISE))
                .on_hover_text("Undo")
                .clicked()
            {
                app.undo();
            }
        });
    });
}
