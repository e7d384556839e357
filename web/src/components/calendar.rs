use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use thaw::*;

/// Month-grid date selector.
///
/// Reports picks synchronously through `on_select`; every in-month day is
/// clickable. `highlighted_dates` marks days that have known availability —
/// a purely visual hint, selection is never restricted by it.
#[component]
pub fn Calendar(
    #[prop(into)] selected_date: Signal<NaiveDate>,
    #[prop(into)] highlighted_dates: Signal<Vec<NaiveDate>>,
    on_select: impl Fn(NaiveDate) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let initial = selected_date.get_untracked();
    let view_year = RwSignal::new(initial.year());
    let view_month = RwSignal::new(initial.month());

    let navigate_month = move |direction: i32| {
        let (year, month) = shift_month(view_year.get(), view_month.get(), direction);
        view_year.set(year);
        view_month.set(month);
    };

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| navigate_month(-1)
                >
                    "←"
                </Button>

                <div class="month-label">
                    {move || format!("{} {}", month_name(view_month.get()), view_year.get())}
                </div>

                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| navigate_month(1)
                >
                    "→"
                </Button>
            </div>

            <div class="weekday-headers">
                <div class="weekday-header">"Sun"</div>
                <div class="weekday-header">"Mon"</div>
                <div class="weekday-header">"Tue"</div>
                <div class="weekday-header">"Wed"</div>
                <div class="weekday-header">"Thu"</div>
                <div class="weekday-header">"Fri"</div>
                <div class="weekday-header">"Sat"</div>
            </div>

            <div class="calendar-days">
                {move || {
                    let highlighted = highlighted_dates.get();
                    let selected = selected_date.get();

                    month_grid(view_year.get(), view_month.get())
                        .into_iter()
                        .map(|cell| match cell {
                            Some(date) => {
                                let has_availability = highlighted.contains(&date);
                                let is_selected = date == selected;

                                view! {
                                    <button
                                        class="calendar-day"
                                        class:selected=is_selected
                                        class:available=has_availability
                                        on:click=move |_| on_select(date)
                                    >
                                        {date.day()}
                                    </button>
                                }
                                .into_any()
                            }
                            None => view! { <div class="calendar-day empty"></div> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// Cells for one month view: leading `None`s pad to the first weekday
/// (Sunday-based), then one `Some(date)` per day of the month.
fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];

    let mut day = Some(first);
    while let Some(date) = day {
        cells.push(Some(date));
        day = date.succ_opt().filter(|next| next.month() == month);
    }
    cells
}

fn shift_month(year: i32, month: u32, direction: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + direction;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_pads_to_the_first_weekday() {
        // January 2024 starts on a Monday
        let grid = month_grid(2024, 1);
        assert_eq!(grid[0], None);
        assert_eq!(grid[1], NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(grid.iter().filter(|c| c.is_some()).count(), 31);
    }

    #[test]
    fn grid_handles_leap_february() {
        let grid = month_grid(2024, 2);
        assert_eq!(grid.iter().filter(|c| c.is_some()).count(), 29);
        assert_eq!(grid.last().copied().flatten(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn grid_has_no_padding_when_month_starts_on_sunday() {
        // September 2024 starts on a Sunday
        let grid = month_grid(2024, 9);
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2024, 9, 1));
    }

    #[test]
    fn shift_month_wraps_across_years() {
        assert_eq!(shift_month(2024, 12, 1), (2025, 1));
        assert_eq!(shift_month(2024, 1, -1), (2023, 12));
        assert_eq!(shift_month(2024, 6, 0), (2024, 6));
        assert_eq!(shift_month(2024, 1, -13), (2022, 12));
    }

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}
