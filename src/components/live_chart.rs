//! Live Chart Demo
//!
//! Rolling line chart fed by a timer. Every tick appends one random sample
//! and evicts the oldest; the timer is cancelled when the chart unmounts.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::lifecycle::MountGuard;
use crate::series::{chart_points, polyline, sample_value, y_ticks, LiveSeries, PlotArea};

const VIEW_WIDTH: f64 = 400.0;
const VIEW_HEIGHT: f64 = 240.0;
const PLOT: PlotArea = PlotArea { left: 36.0, top: 12.0, width: 348.0, height: 196.0 };
const TICK_STEP: u32 = 10;

fn px(v: f64) -> String {
    format!("{v:.1}")
}

#[component]
pub fn LiveChart() -> impl IntoView {
    let config = use_app_context().config.series;
    let series = RwSignal::new(LiveSeries::seeded(config.capacity));
    let (hovered, set_hovered) = signal(None::<usize>);

    let guard = MountGuard::mounted();
    let interval = Interval::new(config.tick_ms, {
        let guard = guard.clone();
        move || {
            guard.run(|| {
                let value = sample_value(js_sys::Math::random(), config.value_ceiling);
                series.try_update(|s| {
                    s.tick(value);
                });
            });
        }
    });
    let interval = StoredValue::new_local(Some(interval));
    log::debug!("[CHART] ticking every {}ms", config.tick_ms);

    on_cleanup(move || {
        guard.unmount();
        interval.try_update_value(|timer| {
            if let Some(timer) = timer.take() {
                timer.cancel();
            }
        });
        log::debug!("[CHART] timer cancelled");
    });

    let points = Memo::new(move |_| series.with(|s| chart_points(s.samples(), PLOT, config.value_ceiling)));
    let ceiling = config.value_ceiling.max(1) as f64;

    let grid = y_ticks(config.value_ceiling, TICK_STEP)
        .into_iter()
        .map(|tick| {
            let y = PLOT.bottom() - tick as f64 / ceiling * PLOT.height;
            view! {
                <g>
                    <line class="chart-grid" x1=px(PLOT.left) y1=px(y) x2=px(PLOT.right()) y2=px(y) />
                    <text class="chart-axis" x=px(PLOT.left - 8.0) y=px(y + 4.0) text-anchor="end">
                        {tick.to_string()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let dots = move || {
        points
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                view! {
                    <g>
                        <circle
                            class="chart-dot"
                            cx=px(p.x)
                            cy=px(p.y)
                            r="5"
                            on:mouseenter=move |_| set_hovered.set(Some(i))
                            on:mouseleave=move |_| set_hovered.set(None)
                        />
                        <text class="chart-axis" x=px(p.x) y=px(PLOT.bottom() + 20.0) text-anchor="middle">
                            {p.label}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    // HTML overlay, positioned in percent of the viewBox
    let tooltip = move || {
        let index = hovered.get()?;
        let point = points.with(|pts| pts.get(index).cloned())?;
        let style = format!(
            "left: {:.2}%; top: {:.2}%;",
            point.x / VIEW_WIDTH * 100.0,
            point.y / VIEW_HEIGHT * 100.0
        );
        Some(view! {
            <div class="chart-tooltip" style=style>
                <span class="chart-tooltip-label">{point.label}</span>
                <span class="chart-tooltip-value">{point.value.to_string()}</span>
            </div>
        })
    };

    view! {
        <div class="live-chart">
            <svg
                class="chart-svg"
                viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
                role="img"
                aria-label="Live data chart"
            >
                {grid}
                <polyline class="chart-line" fill="none" points=move || polyline(&points.get()) />
                {dots}
            </svg>
            {tooltip}
        </div>
    }
}
