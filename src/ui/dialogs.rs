use crate::app::PlannerApp;
use crate::ui::theme;
use egui::{Color32, Context, RichText, Window};
use week_lanes::engine::dates;
use week_lanes::{LaneId, WEEK_DAYS};

/// Render the "Add new task" dialog.
pub fn show_add_task_dialog(app: &mut PlannerApp, ctx: &Context) {
    let mut submit = false;
    let mut close = false;

    Window::new(RichText::new("Add new task").strong().size(16.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Choose a lane and date range for the task.")
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(8.0);

            let form = &mut app.task_form;
            egui::Grid::new("add_task_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Title").color(theme::TEXT_DIM));
                    let title = ui.add_sized(
                        [240.0, 24.0],
                        egui::TextEdit::singleline(&mut form.title).hint_text("Design review"),
                    );
                    if form.focus_title {
                        title.request_focus();
                        form.focus_title = false;
                    }
                    if title.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    ui.end_row();

                    ui.label(RichText::new("Lane").color(theme::TEXT_DIM));
                    egui::ComboBox::from_id_salt("dlg_lane")
                        .selected_text(form.lane.lane().label)
                        .width(240.0)
                        .show_ui(ui, |ui| {
                            for lane in LaneId::ALL {
                                ui.selectable_value(&mut form.lane, lane, lane.lane().label);
                            }
                        });
                    ui.end_row();

                    ui.label(RichText::new("Start").color(theme::TEXT_DIM));
                    ui.add(egui_extras::DatePickerButton::new(&mut form.start).id_salt("dlg_dp_start"));
                    ui.end_row();

                    ui.label(RichText::new("End").color(theme::TEXT_DIM));
                    ui.add(egui_extras::DatePickerButton::new(&mut form.end).id_salt("dlg_dp_end"));
                    ui.end_row();
                });

            if let Some(error) = &form.error {
                ui.add_space(6.0);
                ui.label(RichText::new(error).color(theme::TEXT_ERROR));
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Default start: {}", dates::format(form.default_start)))
                        .small()
                        .color(theme::TEXT_DIM),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{}-day sprint view", WEEK_DAYS))
                            .small()
                            .color(theme::TEXT_DIM),
                    );
                });
            });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add_btn = egui::Button::new(RichText::new("Add task").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(14.0));
                if ui.add_sized([90.0, 28.0], add_btn).clicked() {
                    submit = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    close = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        close = true;
    }

    if close {
        app.close_add_task();
    } else if submit {
        app.submit_task_form();
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut PlannerApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 170.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Week Lanes").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("Drag bars to move, drag the right edge to resize.");
                ui.label("Ctrl+Z undo · Ctrl+Y redo");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
