// src/data_analysis/nearest.rs

/// Returns the lowest index minimizing `|value - target|`.
///
/// NaN entries are never selected. Returns `None` for an empty (or all-NaN) sequence.
pub fn closest_index<'a, I>(target: f64, values: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in values.into_iter().enumerate() {
        let distance = (value - target).abs();
        if distance.is_nan() {
            continue;
        }
        // Strict comparison keeps the first occurrence on ties.
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}


// src/data_analysis/nearest.rs
