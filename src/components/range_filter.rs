//! Range Filter Component
//!
//! Min/max number inputs. Blank inputs fall back to the data bounds; when
//! both sides equal the bounds the filter is cleared.

use leptos::prelude::*;

#[component]
pub fn RangeFilter(
    #[prop(into)] label: String,
    /// Bounds derived from the loaded collection
    #[prop(into)] bounds: Signal<Option<(f64, f64)>>,
    #[prop(into)] range: Signal<Option<(f64, f64)>>,
    #[prop(into)] on_change: Callback<Option<(f64, f64)>>,
) -> impl IntoView {
    let shown = move || range.get().or_else(|| bounds.get());

    let apply = move |min: Option<f64>, max: Option<f64>| {
        let Some((low, high)) = bounds.get_untracked() else {
            return;
        };
        let current = range.get_untracked().unwrap_or((low, high));
        let next = (min.unwrap_or(current.0), max.unwrap_or(current.1));
        on_change.run(normalize_range(next, (low, high)));
    };

    view! {
        <Show when=move || bounds.get().is_some()>
            <div class="range-filter">
                <span class="range-label">{label.clone()}</span>
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || shown().map(|(min, _)| min.to_string()).unwrap_or_default()
                    on:change=move |ev| apply(Some(parse_or_nan(&event_target_value(&ev))), None)
                />
                <span>"–"</span>
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || shown().map(|(_, max)| max.to_string()).unwrap_or_default()
                    on:change=move |ev| apply(None, Some(parse_or_nan(&event_target_value(&ev))))
                />
            </div>
        </Show>
    }
}

fn parse_or_nan(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Replace unparsable sides with the bounds, order the pair, and drop the
/// filter entirely when it covers the full bounds.
pub fn normalize_range(requested: (f64, f64), bounds: (f64, f64)) -> Option<(f64, f64)> {
    let min = if requested.0.is_finite() { requested.0 } else { bounds.0 };
    let max = if requested.1.is_finite() { requested.1 } else { bounds.1 };
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if min <= bounds.0 && max >= bounds.1 {
        None
    } else {
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bounds_clear_the_filter() {
        assert_eq!(normalize_range((2.0, 12.0), (2.0, 12.0)), None);
        assert_eq!(normalize_range((0.0, 100.0), (2.0, 12.0)), None);
    }

    #[test]
    fn test_partial_range_is_kept_and_ordered() {
        assert_eq!(normalize_range((5.0, 9.0), (2.0, 12.0)), Some((5.0, 9.0)));
        assert_eq!(normalize_range((9.0, 5.0), (2.0, 12.0)), Some((5.0, 9.0)));
    }

    #[test]
    fn test_blank_side_uses_bound() {
        assert_eq!(normalize_range((f64::NAN, 9.0), (2.0, 12.0)), Some((2.0, 9.0)));
    }
}
