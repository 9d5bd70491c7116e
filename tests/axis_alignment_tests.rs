use approx::assert_relative_eq;
use chart_align::api::{
    AlignmentStatus, AxisPair, DEFAULT_MAX_ALIGNMENT_ITERATIONS, SkipReason, TickAmountOutcome,
    adjust_tick_amount, align_to_base, alignment_pair, handled_by_engine,
};
use chart_align::core::{Axis, ChartAxes, TickSet, VisualizationType};
use chart_align::error::ChartError;

fn ticks(positions: &[f64], interval: f64) -> TickSet {
    TickSet::new(positions.iter().copied(), interval).expect("valid ticks")
}

fn span(start: f64, end: f64, interval: f64) -> Vec<f64> {
    let count = ((end - start) / interval).round() as usize + 1;
    (0..count).map(|i| start + i as f64 * interval).collect()
}

fn column_chart(left: Axis, right: Axis) -> ChartAxes {
    ChartAxes::new(VisualizationType::Column)
        .with_axis(Axis::x(ticks(&[0.0, 1.0, 2.0], 1.0)))
        .with_axis(left)
        .with_axis(right)
}

#[test]
fn align_to_base_moves_zero_right() {
    let base = Axis::y(ticks(&[-2.0, -1.0, 0.0, 1.0, 2.0, 3.0], 1.0));
    let mut secondary = Axis::y(ticks(&span(0.0, 500.0, 100.0), 100.0)).opposite();

    let iterations = align_to_base(&mut secondary, &base, DEFAULT_MAX_ALIGNMENT_ITERATIONS)
        .expect("alignment should succeed");

    assert_eq!(iterations, 2);
    assert_eq!(secondary.ticks.positions(), span(-200.0, 300.0, 100.0).as_slice());
    assert_eq!(base.ticks.zero_index(), secondary.ticks.zero_index());
}

#[test]
fn align_to_base_moves_zero_left() {
    let base = Axis::y(ticks(&[-2.0, -1.0, 0.0, 1.0, 2.0, 3.0], 1.0));
    let mut secondary = Axis::y(ticks(&span(-400.0, 100.0, 100.0), 100.0)).opposite();

    let iterations = align_to_base(&mut secondary, &base, DEFAULT_MAX_ALIGNMENT_ITERATIONS)
        .expect("alignment should succeed");

    assert_eq!(iterations, 2);
    assert_eq!(secondary.ticks.positions(), span(-200.0, 300.0, 100.0).as_slice());
}

#[test]
fn aligned_pair_is_untouched() {
    let base = Axis::y(ticks(&[-2.0, -1.0, 0.0, 1.0], 1.0));
    let mut secondary = Axis::y(ticks(&[-20.0, -10.0, 0.0, 10.0], 10.0));

    let iterations = align_to_base(&mut secondary, &base, DEFAULT_MAX_ALIGNMENT_ITERATIONS)
        .expect("alignment should succeed");

    assert_eq!(iterations, 0);
    assert_eq!(secondary.ticks.positions(), &[-20.0, -10.0, 0.0, 10.0]);
}

#[test]
fn losing_the_zero_tick_aborts_and_restores() {
    let base = Axis::y(ticks(&[-3.0, -2.0, -1.0, 0.0], 1.0));
    let mut secondary = Axis::y(ticks(&[-1.0, 0.0], 1.0));

    let err = align_to_base(&mut secondary, &base, DEFAULT_MAX_ALIGNMENT_ITERATIONS)
        .expect_err("zero tick should fall off");

    assert!(matches!(err, ChartError::AlignmentAborted(_)));
    assert!(format!("{err}").contains("zero tick"));
    assert_eq!(secondary.ticks.positions(), &[-1.0, 0.0]);
}

#[test]
fn iteration_cap_aborts_and_restores() {
    let base = Axis::y(ticks(&[-2.0, -1.0, 0.0, 1.0, 2.0], 1.0));
    let mut secondary = Axis::y(ticks(&[0.0, 1.0, 2.0, 3.0, 4.0], 1.0));

    let err = align_to_base(&mut secondary, &base, 1).expect_err("cap should be reached");

    assert!(format!("{err}").contains("after 1 shifts"));
    assert_eq!(secondary.ticks.positions(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn engine_handles_everything_but_visible_dual_y_axes() {
    let left = Axis::y(ticks(&[0.0, 1.0], 1.0)).with_data_range(0.0, 1.0);
    let right = Axis::y(ticks(&[0.0, 1.0], 1.0))
        .with_data_range(0.0, 1.0)
        .opposite();

    let chart = column_chart(left.clone(), right.clone());
    assert!(handled_by_engine(&chart, 0), "x axis");
    assert!(!handled_by_engine(&chart, 1));
    assert!(!handled_by_engine(&chart, 2));
    assert!(handled_by_engine(&chart, 7), "missing axis");

    let single = ChartAxes::new(VisualizationType::Column).with_axis(left.clone());
    assert!(handled_by_engine(&single, 0));

    let hidden = column_chart(left.clone(), right.clone().hidden());
    assert!(handled_by_engine(&hidden, 1));

    let mut line = column_chart(left.clone(), right.clone());
    line.chart_type = VisualizationType::Line;
    assert!(handled_by_engine(&line, 1));

    let combo_of_lines = ChartAxes::new(VisualizationType::Combo)
        .with_axis(left.clone().with_series([VisualizationType::Line]))
        .with_axis(right.clone().with_series([VisualizationType::Line]));
    assert!(handled_by_engine(&combo_of_lines, 0));

    let combo = ChartAxes::new(VisualizationType::Combo)
        .with_axis(left.with_series([VisualizationType::Column]))
        .with_axis(right.with_series([VisualizationType::Line]));
    assert!(!handled_by_engine(&combo, 0));
}

#[test]
fn alignment_pair_prefers_the_primary_axis_on_ties() {
    let left = Axis::y(ticks(&[0.0, 1.0], 1.0)).with_data_range(1.0, 2.0);
    let right = Axis::y(ticks(&[-1.0, 0.0], 1.0))
        .with_data_range(-2.0, -1.0)
        .opposite();

    let chart = ChartAxes::new(VisualizationType::Column)
        .with_axis(right.clone())
        .with_axis(left.clone());
    assert_eq!(
        alignment_pair(&chart),
        Some(AxisPair {
            base: 1,
            secondary: 0
        })
    );

    let mixed_right = right.with_data_range(-2.0, 2.0);
    let chart = ChartAxes::new(VisualizationType::Column)
        .with_axis(left)
        .with_axis(mixed_right);
    assert_eq!(
        alignment_pair(&chart),
        Some(AxisPair {
            base: 1,
            secondary: 0
        })
    );
}

#[test]
fn dual_axis_hook_aligns_opposite_axis() {
    let left = Axis::y(ticks(&span(-1200.0, 1200.0, 300.0), 300.0))
        .with_tick_amount(8)
        .with_range(-986.0, 986.0)
        .with_data_range(137.0, 986.0);
    let right = Axis::y(ticks(&span(-12000.0, 12000.0, 3000.0), 3000.0))
        .with_tick_amount(8)
        .with_range(-8895.0, 8895.0)
        .with_data_range(-8895.0, -1239.0)
        .opposite();
    let mut chart = column_chart(left, right);

    let left_outcome = adjust_tick_amount(&mut chart, 1, DEFAULT_MAX_ALIGNMENT_ITERATIONS);
    assert_eq!(
        left_outcome,
        TickAmountOutcome::Adjusted {
            ticks_changed: true,
            alignment: AlignmentStatus::NotRequired
        }
    );

    let right_outcome = adjust_tick_amount(&mut chart, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS);
    assert_eq!(
        right_outcome,
        TickAmountOutcome::Adjusted {
            ticks_changed: true,
            alignment: AlignmentStatus::Aligned {
                pair: AxisPair {
                    base: 1,
                    secondary: 2
                },
                iterations: 1,
                clip_prevented: false
            }
        }
    );

    let left = chart.axis(1).expect("left axis");
    assert_eq!(left.ticks.positions(), span(-900.0, 1200.0, 300.0).as_slice());
    assert_eq!(left.extremes.min, Some(-900.0));
    assert_eq!(left.extremes.max, Some(1200.0));
    assert_relative_eq!(left.trans_a, 8.0 / 7.0);

    let right = chart.axis(2).expect("right axis");
    assert_eq!(right.ticks.positions(), span(-9000.0, 12000.0, 3000.0).as_slice());
    assert_eq!(right.extremes.min, Some(-9000.0));
    assert_eq!(right.extremes.max, Some(12000.0));
    assert_eq!(left.ticks.zero_index(), right.ticks.zero_index());
    assert_relative_eq!(right.trans_a, 8.0 / 7.0);
}

#[test]
fn dual_axis_hook_with_user_extremes_keeps_bottom_growth() {
    let left = Axis::y(ticks(&span(-90.0, 0.0, 15.0), 15.0))
        .with_tick_amount(8)
        .with_range(-100.0, 0.0)
        .with_data_range(-656.0, 986.0);
    let right = Axis::y(ticks(&span(-4800.0, 0.0, 800.0), 800.0))
        .with_tick_amount(8)
        .with_range(0.0, -4500.0)
        .with_data_range(-8895.0, 7661.0)
        .opposite();
    let mut chart = column_chart(left, right).with_user_min_max(true);

    adjust_tick_amount(&mut chart, 1, DEFAULT_MAX_ALIGNMENT_ITERATIONS);
    let outcome = adjust_tick_amount(&mut chart, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS);

    assert_eq!(
        outcome,
        TickAmountOutcome::Adjusted {
            ticks_changed: true,
            alignment: AlignmentStatus::NotRequired
        }
    );
    let left = chart.axis(1).expect("left axis");
    let right = chart.axis(2).expect("right axis");
    assert_eq!(left.ticks.positions(), span(-105.0, 0.0, 15.0).as_slice());
    assert_eq!(right.ticks.positions(), span(-5600.0, 0.0, 800.0).as_slice());
    assert_eq!(left.extremes.min, Some(-105.0));
    assert_eq!(right.extremes.min, Some(-5600.0));
    assert_eq!(right.extremes.max, Some(0.0));
}

fn clipping_chart() -> ChartAxes {
    let left = Axis::y(ticks(&[-10.0, 0.0, 10.0, 20.0, 30.0], 10.0)).with_data_range(-5.0, 25.0);
    let right = Axis::y(ticks(&[0.0, 5.0, 10.0, 15.0, 20.0], 5.0))
        .with_data_range(-4.0, 18.0)
        .opposite();
    column_chart(left, right)
}

#[test]
fn alignment_that_clips_data_doubles_the_secondary_interval() {
    let mut chart = clipping_chart();

    let outcome = adjust_tick_amount(&mut chart, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS);

    assert_eq!(
        outcome,
        TickAmountOutcome::Adjusted {
            ticks_changed: false,
            alignment: AlignmentStatus::Aligned {
                pair: AxisPair {
                    base: 1,
                    secondary: 2
                },
                iterations: 1,
                clip_prevented: true
            }
        }
    );
    let right = chart.axis(2).expect("right axis");
    assert_eq!(right.ticks.positions(), &[-10.0, 0.0, 10.0, 20.0, 30.0]);
    assert_eq!(right.ticks.interval(), 10.0);
    assert_eq!(right.extremes.max, Some(30.0));
}

#[test]
fn user_extremes_keep_clipped_alignment() {
    let mut chart = clipping_chart().with_user_min_max(true);

    adjust_tick_amount(&mut chart, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS);

    let right = chart.axis(2).expect("right axis");
    assert_eq!(right.ticks.positions(), &[-5.0, 0.0, 5.0, 10.0, 15.0]);
    assert_eq!(right.extremes.max, Some(15.0));
}

#[test]
fn failed_alignment_is_reported_not_raised() {
    let left = Axis::y(ticks(&[-3.0, -2.0, -1.0, 0.0], 1.0)).with_data_range(-3.0, -1.0);
    let right = Axis::y(ticks(&[-1.0, 0.0], 1.0))
        .with_data_range(-1.0, -0.5)
        .opposite();
    let mut chart = column_chart(left, right);

    let outcome = adjust_tick_amount(&mut chart, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS);

    assert_eq!(
        outcome,
        TickAmountOutcome::Adjusted {
            ticks_changed: false,
            alignment: AlignmentStatus::Aborted {
                pair: AxisPair {
                    base: 1,
                    secondary: 2
                }
            }
        }
    );
    assert_eq!(chart.axis(2).expect("right axis").ticks.positions(), &[-1.0, 0.0]);
}

#[test]
fn primary_axis_never_triggers_alignment() {
    let mut chart = clipping_chart();
    let outcome = adjust_tick_amount(&mut chart, 1, DEFAULT_MAX_ALIGNMENT_ITERATIONS);

    assert_eq!(
        outcome,
        TickAmountOutcome::Adjusted {
            ticks_changed: false,
            alignment: AlignmentStatus::NotRequired
        }
    );
    assert_eq!(
        chart.axis(2).expect("right axis").ticks.positions(),
        &[0.0, 5.0, 10.0, 15.0, 20.0]
    );
}

#[test]
fn hook_skips_axes_it_does_not_own() {
    let mut chart = clipping_chart();
    assert_eq!(
        adjust_tick_amount(&mut chart, 9, DEFAULT_MAX_ALIGNMENT_ITERATIONS),
        TickAmountOutcome::Skipped(SkipReason::MissingAxis)
    );

    let mut line = clipping_chart();
    line.chart_type = VisualizationType::Line;
    assert_eq!(
        adjust_tick_amount(&mut line, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS),
        TickAmountOutcome::Skipped(SkipReason::HandledByEngine)
    );

    let empty = Axis::y(ticks(&[0.0, 1.0], 1.0)).opposite();
    let left = Axis::y(ticks(&[0.0, 1.0], 1.0)).with_data_range(0.0, 1.0);
    let mut no_data = column_chart(left, empty);
    assert_eq!(
        adjust_tick_amount(&mut no_data, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS),
        TickAmountOutcome::Skipped(SkipReason::NoData)
    );
}

#[test]
fn running_the_hook_twice_is_stable() {
    let mut chart = clipping_chart();
    adjust_tick_amount(&mut chart, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS);
    let snapshot = chart.clone();

    let outcome = adjust_tick_amount(&mut chart, 2, DEFAULT_MAX_ALIGNMENT_ITERATIONS);

    assert_eq!(
        outcome,
        TickAmountOutcome::Adjusted {
            ticks_changed: false,
            alignment: AlignmentStatus::NotRequired
        }
    );
    assert_eq!(chart, snapshot);
}

#[test]
fn untouched_ticks_keep_their_scale_and_extremes() {
    let right = Axis::y(ticks(&[-10.0, 0.0, 10.0, 20.0, 30.0], 10.0))
        .with_data_range(-4.0, 18.0)
        .opposite();

    for tick_amount in [0, 5] {
        let left = Axis::y(ticks(&[-10.0, 0.0, 10.0, 20.0, 30.0], 10.0))
            .with_tick_amount(tick_amount)
            .with_range(-7.0, 27.0)
            .with_data_range(-5.0, 25.0)
            .with_trans_a(1.0);
        let mut chart = column_chart(left, right.clone());

        let outcome = adjust_tick_amount(&mut chart, 1, DEFAULT_MAX_ALIGNMENT_ITERATIONS);

        assert_eq!(
            outcome,
            TickAmountOutcome::Adjusted {
                ticks_changed: false,
                alignment: AlignmentStatus::NotRequired
            }
        );
        let left = chart.axis(1).expect("left axis");
        assert_eq!(left.trans_a, 1.0, "tick amount {tick_amount}");
        assert_eq!(left.extremes.min, Some(-7.0));
        assert_eq!(left.extremes.max, Some(27.0));
    }
}
