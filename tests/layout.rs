use proptest::prelude::*;
use week_lanes::engine::dates::{add_days, parse};
use week_lanes::engine::layout::{layout_lane, layout_week, pack_rows};
use week_lanes::model::seed;
use week_lanes::{LaneId, LayoutMetrics, Task, TaskId, TaskPlacement, WeekWindow};

fn week() -> WeekWindow {
    WeekWindow::new(parse("2026-02-02").unwrap())
}

/// A task spanning day indices `[start, end]` of the test week.
fn task(id: &str, lane: LaneId, start: i64, end: i64) -> Task {
    let base = week().week_start;
    Task::new(
        TaskId::new(id),
        id,
        lane,
        add_days(base, start),
        add_days(base, end),
    )
    .unwrap()
}

fn rows_by_id(tasks: &[Task], lane: LaneId) -> Vec<(String, usize)> {
    let layout = layout_lane(lane, tasks, &week());
    tasks
        .iter()
        .filter_map(|t| layout.placement(&t.id).map(|p| (t.id.to_string(), p.row)))
        .collect()
}

#[test]
fn three_tasks_pack_into_two_rows() {
    let tasks = vec![
        task("a", LaneId::Backend, 0, 2),
        task("b", LaneId::Backend, 1, 3),
        task("c", LaneId::Backend, 4, 5),
    ];
    let layout = layout_lane(LaneId::Backend, &tasks, &week());
    assert_eq!(layout.row_count, 2);
    assert_eq!(
        rows_by_id(&tasks, LaneId::Backend),
        [("a".to_string(), 0), ("b".to_string(), 1), ("c".to_string(), 0)]
    );
}

#[test]
fn clipped_tasks_report_continuation() {
    let tasks = vec![
        task("before", LaneId::Qa, -3, 1),
        task("after", LaneId::Qa, 5, 9),
        task("both", LaneId::Frontend, -1, 8),
    ];
    let qa = layout_lane(LaneId::Qa, &tasks, &week());
    let before = qa.placement(&TaskId::new("before")).unwrap();
    assert_eq!((before.visible_start, before.visible_end), (0, 1));
    assert_eq!((before.start_index, before.end_index), (-3, 1));
    assert!(before.continues_before && !before.continues_after);

    let after = qa.placement(&TaskId::new("after")).unwrap();
    assert_eq!((after.visible_start, after.visible_end), (5, 6));
    assert!(!after.continues_before && after.continues_after);

    let fe = layout_lane(LaneId::Frontend, &tasks, &week());
    let both = fe.placement(&TaskId::new("both")).unwrap();
    assert_eq!((both.visible_start, both.visible_end), (0, 6));
    assert!(both.continues_before && both.continues_after);
}

#[test]
fn tasks_outside_the_window_are_dropped_from_layout() {
    let tasks = vec![
        task("past", LaneId::Backend, -9, -1),
        task("future", LaneId::Backend, 7, 10),
        task("edge", LaneId::Backend, 6, 6),
    ];
    let layout = layout_lane(LaneId::Backend, &tasks, &week());
    assert_eq!(layout.placements.len(), 1);
    assert_eq!(layout.placements[0].task_id, TaskId::new("edge"));
    assert_eq!(layout.row_count, 1);
}

#[test]
fn geometry_uses_inclusive_day_counts() {
    let m = LayoutMetrics::default();
    let tasks = vec![task("a", LaneId::Backend, 2, 4), task("b", LaneId::Backend, 3, 3)];
    let layout = layout_lane(LaneId::Backend, &tasks, &week());
    let a = layout.placement(&TaskId::new("a")).unwrap();
    assert_eq!(a.left(&m), 240.0);
    assert_eq!(a.width(&m), 360.0);
    assert_eq!(a.top(&m), 12.0);
    let b = layout.placement(&TaskId::new("b")).unwrap();
    assert_eq!(b.width(&m), 120.0);
    assert_eq!(b.top(&m), 12.0 + 44.0 + 8.0);
    assert_eq!(layout.height(&m), 2.0 * 44.0 + 8.0 + 24.0);
}

#[test]
fn empty_lane_still_reserves_a_row() {
    let m = LayoutMetrics::default();
    let layout = layout_lane(LaneId::Qa, &[], &week());
    assert_eq!(layout.row_count, 0);
    assert_eq!(layout.height(&m), m.row_height + m.row_offset);
}

#[test]
fn other_lanes_do_not_interfere() {
    let tasks = vec![task("a", LaneId::Backend, 0, 6), task("b", LaneId::Frontend, 0, 6)];
    let layouts = layout_week(&tasks, &week());
    assert_eq!(layouts.len(), 3);
    assert_eq!(layouts[0].lane, LaneId::Backend);
    assert_eq!(layouts[0].row_count, 1);
    assert_eq!(layouts[1].row_count, 1);
    assert_eq!(layouts[2].row_count, 0);
}

#[test]
fn seed_week_layout_matches_expected_rows() {
    let tasks = seed::sample_tasks();
    let layouts = layout_week(&tasks, &week());
    // Backend: [0,2], [1,3], [4,8→6] → rows 0, 1, 0.
    assert_eq!(layouts[0].row_count, 2);
    assert_eq!(rows_by_id(&tasks, LaneId::Backend), [
        ("task-1".to_string(), 0),
        ("task-1b".to_string(), 1),
        ("task-1c".to_string(), 0),
    ]);
    // Frontend: [1,4], [3,6]; task-2c starts on day 7 and is hidden.
    assert_eq!(layouts[1].row_count, 2);
    assert!(layouts[1].placement(&TaskId::new("task-2c")).is_none());
    // QA: [3,5], [6,8→6]; task-3c is hidden.
    assert_eq!(layouts[2].row_count, 1);
    let sweep = layouts[2].placement(&TaskId::new("task-3b")).unwrap();
    assert!(sweep.continues_after);
}

/// Largest number of intervals covering a single day.
fn clique_number(intervals: &[(i64, i64)]) -> usize {
    (0..7)
        .map(|day| intervals.iter().filter(|(s, e)| *s <= day && day <= *e).count())
        .max()
        .unwrap_or(0)
}

fn interval() -> impl Strategy<Value = (i64, i64)> {
    (-3i64..10, 0i64..6).prop_map(|(start, len)| (start, start + len))
}

fn tasks_from(intervals: &[(i64, i64)]) -> Vec<Task> {
    intervals
        .iter()
        .enumerate()
        .map(|(i, (s, e))| task(&format!("t{i}"), LaneId::Backend, *s, *e))
        .collect()
}

proptest! {
    #[test]
    fn row_count_equals_max_overlap(intervals in prop::collection::vec(interval(), 0..24)) {
        let tasks = tasks_from(&intervals);
        let layout = layout_lane(LaneId::Backend, &tasks, &week());
        let visible: Vec<(i64, i64)> = layout
            .placements
            .iter()
            .map(|p| (p.visible_start, p.visible_end))
            .collect();
        prop_assert_eq!(layout.row_count, clique_number(&visible));
    }

    #[test]
    fn rows_never_overlap(intervals in prop::collection::vec(interval(), 0..24)) {
        let tasks = tasks_from(&intervals);
        let layout = layout_lane(LaneId::Backend, &tasks, &week());
        for (i, a) in layout.placements.iter().enumerate() {
            prop_assert!(a.row < layout.row_count.max(1));
            for b in &layout.placements[i + 1..] {
                if a.row == b.row {
                    prop_assert!(a.visible_end < b.visible_start || b.visible_end < a.visible_start);
                }
            }
        }
    }

    #[test]
    fn layout_is_deterministic(intervals in prop::collection::vec(interval(), 0..24)) {
        let tasks = tasks_from(&intervals);
        let first = layout_lane(LaneId::Backend, &tasks, &week());
        let second = layout_lane(LaneId::Backend, &tasks, &week());
        prop_assert_eq!(first, second);
    }
}

#[test]
fn pack_rows_on_raw_placements() {
    let mk = |id: &str, s: i64, e: i64| TaskPlacement {
        task_id: TaskId::new(id),
        row: 0,
        visible_start: s,
        visible_end: e,
        start_index: s,
        end_index: e,
        continues_before: false,
        continues_after: false,
    };
    let mut ps = vec![mk("x", 4, 5), mk("y", 0, 2), mk("z", 1, 3)];
    assert_eq!(pack_rows(&mut ps), 2);
    let order: Vec<(&str, usize)> = ps.iter().map(|p| (p.task_id.as_str(), p.row)).collect();
    assert_eq!(order, [("y", 0), ("z", 1), ("x", 0)]);
}

