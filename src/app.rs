use chrono::NaiveDate;
use week_lanes::model::seed;
use week_lanes::{
    DragMode, LaneId, NewTask, Schedule, ScheduleError, Settings, Task, WeekWindow,
};

use crate::ui;

/// In-progress state of the add-task dialog. Discarded on cancel.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: String,
    pub lane: LaneId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub default_start: NaiveDate,
    pub error: Option<String>,
    pub focus_title: bool,
}

impl TaskForm {
    pub fn new(default_start: NaiveDate) -> Self {
        Self {
            title: String::new(),
            lane: LaneId::Backend,
            start: default_start,
            end: default_start,
            default_start,
            error: None,
            focus_title: true,
        }
    }

    /// Form-level checks; the schedule validates again on insert.
    pub fn validate(&self) -> Result<NewTask, ScheduleError> {
        if self.title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        if self.end < self.start {
            return Err(ScheduleError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(NewTask {
            title: self.title.trim().to_string(),
            lane: self.lane,
            start: self.start,
            end: self.end,
        })
    }
}

/// Main application state.
pub struct PlannerApp {
    pub schedule: Schedule,

    // Dialog state
    pub show_add_task: bool,
    pub show_about: bool,
    pub task_form: TaskForm,

    // Status message
    pub status_message: String,
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let week = WeekWindow::new(settings.initial_week_start());
        let schedule = Schedule::new(seed::sample_tasks(), week, settings.metrics())
            .with_history_limit(settings.history_limit);

        Self {
            schedule,
            show_add_task: false,
            show_about: false,
            task_form: TaskForm::new(week.week_start),
            status_message: "Ready".to_string(),
        }
    }

    // --- History ---

    pub fn undo(&mut self) {
        if self.schedule.undo() {
            self.status_message = "Undo".to_string();
        }
    }

    pub fn redo(&mut self) {
        if self.schedule.redo() {
            self.status_message = "Redo".to_string();
        }
    }

    // --- Week navigation ---

    pub fn next_week(&mut self) {
        self.schedule.next_week();
    }

    pub fn previous_week(&mut self) {
        self.schedule.previous_week();
    }

    pub fn this_week(&mut self) {
        let today = chrono::Local::now().date_naive();
        self.schedule.set_week(WeekWindow::containing(today));
    }

    // --- Add-task dialog ---

    pub fn open_add_task(&mut self) {
        self.task_form = TaskForm::new(self.schedule.week().week_start);
        self.show_add_task = true;
    }

    pub fn close_add_task(&mut self) {
        self.show_add_task = false;
        self.task_form = TaskForm::new(self.schedule.week().week_start);
    }

    pub fn submit_task_form(&mut self) {
        let result = self
            .task_form
            .validate()
            .and_then(|new_task| self.schedule.add_task(new_task));
        match result {
            Ok(_) => {
                self.status_message = "Task added".to_string();
                self.close_add_task();
            }
            Err(e) => {
                self.task_form.error = Some(e.to_string());
            }
        }
    }

    fn describe_commit(task: &Task, mode: DragMode) -> String {
        let verb = match mode {
            DragMode::Move => "Moved",
            DragMode::Resize => "Resized",
        };
        format!(
            "{} '{}' ({} → {}, {})",
            verb,
            task.title,
            task.start.format("%Y-%m-%d"),
            task.end.format("%Y-%m-%d"),
            task.lane.lane().label
        )
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Shortcuts stay off while the dialog owns the keyboard.
        if !self.show_add_task {
            let should_undo = ctx.input(|i| {
                i.modifiers.command && !i.modifiers.shift && i.key_pressed(egui::Key::Z)
            });
            let should_redo = ctx.input(|i| {
                i.modifiers.command
                    && (i.key_pressed(egui::Key::Y) || (i.modifiers.shift && i.key_pressed(egui::Key::Z)))
            });
            if should_undo {
                self.undo();
            }
            if should_redo {
                self.redo();
            }
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.schedule.tasks().len()))
                                .font(ui::theme::font_status())
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: week grid
        let today = chrono::Local::now().date_naive();
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(ui::theme::BG_APP).inner_margin(egui::Margin::same(16.0)))
            .show(ctx, |ui| {
                let interaction = ui::lane_grid::show_lane_grid(&mut self.schedule, today, ui);
                if let Some(outcome) = interaction.committed {
                    if outcome.changed {
                        if let Some(task) = self.schedule.task(&outcome.task_id) {
                            self.status_message = Self::describe_commit(task, outcome.mode);
                        }
                    }
                }
            });

        // Dialogs
        if self.show_add_task {
            ui::dialogs::show_add_task_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
