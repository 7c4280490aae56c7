use week_lanes::engine::dates::parse;
use week_lanes::model::seed;
use week_lanes::{
    LaneId, LayoutMetrics, NewTask, PointerTarget, Schedule, ScheduleError, Task, TaskId,
    WeekWindow,
};

fn seeded() -> Schedule {
    Schedule::new(
        seed::sample_tasks(),
        WeekWindow::new(seed::seed_week_start()),
        LayoutMetrics::default(),
    )
}

fn new_task(title: &str, start: &str, end: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        lane: LaneId::Qa,
        start: parse(start).unwrap(),
        end: parse(end).unwrap(),
    }
}

#[test]
fn add_task_pushes_one_undo_point() {
    let mut schedule = seeded();
    assert!(!schedule.can_undo());

    let id = schedule
        .add_task(new_task("  Smoke tests ", "2026-02-03", "2026-02-04"))
        .unwrap();
    assert_eq!(schedule.tasks().len(), 10);
    assert_eq!(schedule.task(&id).unwrap().title, "Smoke tests");
    assert!(schedule.can_undo());

    assert!(schedule.undo());
    assert_eq!(schedule.tasks().len(), 9);
    assert!(schedule.task(&id).is_none());
    assert!(schedule.can_redo());

    assert!(schedule.redo());
    assert!(schedule.task(&id).is_some());
}

#[test]
fn add_task_rejects_invalid_input_without_touching_history() {
    let mut schedule = seeded();
    let err = schedule
        .add_task(new_task("Backwards", "2026-02-05", "2026-02-04"))
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidDateRange { .. }));
    assert_eq!(
        schedule.add_task(new_task(" ", "2026-02-05", "2026-02-05")),
        Err(ScheduleError::EmptyTitle)
    );
    assert_eq!(schedule.tasks().len(), 9);
    assert!(!schedule.can_undo());
}

#[test]
fn constructor_drops_reversed_tasks() {
    let good = Task::new(
        TaskId::new("ok"),
        "ok",
        LaneId::Backend,
        parse("2026-02-02").unwrap(),
        parse("2026-02-02").unwrap(),
    )
    .unwrap();
    let mut bad = good.clone();
    bad.id = TaskId::new("bad");
    bad.start = parse("2026-02-04").unwrap();

    let schedule = Schedule::new(
        vec![good, bad],
        WeekWindow::new(parse("2026-02-02").unwrap()),
        LayoutMetrics::default(),
    );
    assert_eq!(schedule.tasks().len(), 1);
    assert_eq!(schedule.tasks()[0].id, TaskId::new("ok"));
}

#[test]
fn drag_gesture_round_trips_through_undo() {
    let mut schedule = seeded();
    let id = TaskId::new("task-1");
    let day = schedule.metrics().day_width;

    assert!(schedule.pointer_down(&PointerTarget::TaskBody(id.clone()), 100.0));
    assert!(!schedule.can_undo(), "undo is disabled mid-gesture");
    assert!(!schedule.undo());

    schedule.pointer_move(100.0 + 2.0 * day, 0.0, |_, _| Some(LaneId::Qa));
    let outcome = schedule.pointer_up().unwrap();
    assert!(outcome.changed);

    let moved = schedule.task(&id).unwrap();
    assert_eq!(moved.start, parse("2026-02-04").unwrap());
    assert_eq!(moved.end, parse("2026-02-06").unwrap());
    assert_eq!(moved.lane, LaneId::Qa);

    assert!(schedule.undo());
    let restored = schedule.task(&id).unwrap();
    assert_eq!(restored.start, parse("2026-02-02").unwrap());
    assert_eq!(restored.lane, LaneId::Backend);

    assert!(schedule.redo());
    assert_eq!(schedule.task(&id).unwrap().lane, LaneId::Qa);
}

#[test]
fn layout_follows_live_moves() {
    let mut schedule = seeded();
    let id = TaskId::new("task-1b");
    let day = schedule.metrics().day_width;

    // Backend starts with two rows (task-1 and task-1b overlap).
    assert_eq!(schedule.lane_layout(LaneId::Backend).row_count, 2);
    schedule.pointer_down(&PointerTarget::TaskBody(id.clone()), 0.0);
    schedule.pointer_move(0.0, 0.0, |_, _| Some(LaneId::Frontend));
    assert_eq!(schedule.lane_layout(LaneId::Backend).row_count, 1);
    assert_eq!(schedule.lane_layout(LaneId::Frontend).row_count, 3);

    schedule.pointer_move(-5.0 * day, 0.0, |_, _| None);
    assert!(schedule.lane_layout(LaneId::Frontend).placement(&id).is_none());
    schedule.pointer_up();
}

#[test]
fn resize_through_schedule_clamps() {
    let mut schedule = seeded();
    let id = TaskId::new("task-3");
    let day = schedule.metrics().day_width;
    schedule.pointer_down(&PointerTarget::ResizeHandle(id.clone()), 0.0);
    schedule.pointer_move(-10.0 * day, 0.0, |_, _| None);
    schedule.pointer_up();
    let task = schedule.task(&id).unwrap();
    assert_eq!(task.start, task.end);
    assert_eq!(task.start, parse("2026-02-05").unwrap());
}

#[test]
fn week_navigation_leaves_tasks_and_history_alone() {
    let mut schedule = seeded();
    let before = schedule.tasks().to_vec();

    schedule.next_week();
    assert_eq!(schedule.week().week_start, parse("2026-02-09").unwrap());
    let frontend = schedule.lane_layout(LaneId::Frontend);
    let polish = frontend.placement(&TaskId::new("task-2c")).unwrap();
    assert_eq!((polish.visible_start, polish.visible_end), (0, 3));
    let review = frontend.placement(&TaskId::new("task-2b")).is_none();
    assert!(review);

    schedule.previous_week();
    schedule.previous_week();
    assert_eq!(schedule.week().week_start, parse("2026-01-26").unwrap());

    assert_eq!(schedule.tasks(), before.as_slice());
    assert!(!schedule.can_undo());
}

#[test]
fn jumping_to_a_week_snaps_to_its_monday() {
    let mut schedule = seeded();
    schedule.set_week(WeekWindow::containing(parse("2026-03-12").unwrap()));
    assert_eq!(schedule.week().week_start, parse("2026-03-09").unwrap());
    assert!(schedule.layout().iter().all(|lane| lane.placements.is_empty()));
    assert!(!schedule.can_undo());
}

#[test]
fn history_limit_is_applied() {
    let mut schedule = seeded().with_history_limit(1);
    schedule
        .add_task(new_task("One", "2026-02-02", "2026-02-02"))
        .unwrap();
    schedule
        .add_task(new_task("Two", "2026-02-02", "2026-02-02"))
        .unwrap();
    assert!(schedule.undo());
    assert!(!schedule.undo());
    assert_eq!(schedule.tasks().len(), 10);
}
