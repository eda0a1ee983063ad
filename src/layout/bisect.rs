/// A positioned rectangle in the treemap layout.
///
/// `index` is the item's 0-based position in the caller's input slice;
/// `weight` is carried through untouched so callers can map it to a color
/// or label without re-indexing into their own data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub weight: f64,
}

impl LayoutRect {
    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

/// Configuration for treemap layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Container width
    pub width: f64,
    /// Container height
    pub height: f64,
    /// Whether the first split divides the container along its width
    /// (subsequent levels alternate regardless)
    pub horizontal: bool,
    /// Lower edge of the cumulative-weight ratio band preferred when
    /// picking a split point
    pub band_min: f64,
    /// Upper edge of the balance band
    pub band_max: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            horizontal: true,
            band_min: 0.3,
            band_max: 0.7,
        }
    }
}

/// A weight paired with its position in the caller's input.
#[derive(Debug, Clone, Copy)]
struct Item {
    index: usize,
    weight: f64,
}

/// A pending region of the partition: a range of the sorted item list plus
/// the rectangle it must tile and the orientation of its next split.
#[derive(Debug, Clone, Copy)]
struct Frame {
    lo: usize,
    hi: usize,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    horizontal: bool,
}

/// Compute a binary-split treemap layout for `weights` inside a
/// `config.width` x `config.height` container.
///
/// Returns one rectangle per input weight, in input order, with
/// `area / container_area ~= weight / total_weight` for each item.
/// Degenerate inputs (empty slice, or total weight <= 0) yield an empty
/// vec rather than an error: callers treat that as "nothing to render".
///
/// Individual negative weights are not rejected; proportionality is only
/// meaningful when the caller supplies non-negative weights.
pub fn compute_layout(weights: &[f64], config: &LayoutConfig) -> Vec<LayoutRect> {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || total <= 0.0 {
        tracing::debug!(
            "No positive total weight ({} items, total={}), returning empty layout",
            weights.len(),
            total
        );
        return Vec::new();
    }

    // Sort descending by weight so heavy items are placed first and stay
    // contiguous instead of being fragmented across recursion branches.
    // Stable sort keeps ties in input order.
    let mut items: Vec<Item> = weights
        .iter()
        .enumerate()
        .map(|(index, &weight)| Item { index, weight })
        .collect();
    items.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut rects = Vec::with_capacity(items.len());

    // Explicit worklist instead of call recursion: a skewed weight
    // distribution can force O(n) split depth.
    let mut frames = vec![Frame {
        lo: 0,
        hi: items.len(),
        x: 0.0,
        y: 0.0,
        w: config.width,
        h: config.height,
        horizontal: config.horizontal,
    }];

    while let Some(frame) = frames.pop() {
        let len = frame.hi - frame.lo;
        if len == 0 {
            continue;
        }
        if len == 1 {
            let item = items[frame.lo];
            rects.push(LayoutRect {
                index: item.index,
                x: frame.x,
                y: frame.y,
                w: frame.w,
                h: frame.h,
                weight: item.weight,
            });
            continue;
        }

        let (split, ratio) = choose_split(&items[frame.lo..frame.hi], config);
        let mid = frame.lo + split;

        let (first, second) = if frame.horizontal {
            let left_w = frame.w * ratio;
            (
                Frame {
                    lo: frame.lo,
                    hi: mid,
                    x: frame.x,
                    y: frame.y,
                    w: left_w,
                    h: frame.h,
                    horizontal: false,
                },
                Frame {
                    lo: mid,
                    hi: frame.hi,
                    x: frame.x + left_w,
                    y: frame.y,
                    // Remainder, not w * (1 - ratio): keeps the tiling exact.
                    w: frame.w - left_w,
                    h: frame.h,
                    horizontal: false,
                },
            )
        } else {
            let top_h = frame.h * ratio;
            (
                Frame {
                    lo: frame.lo,
                    hi: mid,
                    x: frame.x,
                    y: frame.y,
                    w: frame.w,
                    h: top_h,
                    horizontal: true,
                },
                Frame {
                    lo: mid,
                    hi: frame.hi,
                    x: frame.x,
                    y: frame.y + top_h,
                    w: frame.w,
                    h: frame.h - top_h,
                    horizontal: true,
                },
            )
        };
        frames.push(first);
        frames.push(second);
    }

    // Hand results back in the caller's order, not processing order.
    rects.sort_unstable_by_key(|r| r.index);
    rects
}

/// Pick the split point for a descending-sorted sublist of >= 2 items.
///
/// Scans cumulative weight in sorted order and takes the first split whose
/// ratio lands in the balance band. When no split does (one item dominates,
/// or everything is tiny), falls back to the item-count midpoint and
/// recomputes the true weight ratio there so area proportionality is
/// preserved even when the band is missed.
///
/// The returned split index is always in `1..len`, so both halves are
/// non-empty.
fn choose_split(items: &[Item], config: &LayoutConfig) -> (usize, f64) {
    let len = items.len();
    let total: f64 = items.iter().map(|item| item.weight).sum();
    if total <= 0.0 {
        // All-zero sublist (its region already has zero area). Halve by
        // count so every item still gets a rectangle.
        return ((len / 2).clamp(1, len - 1), 0.5);
    }

    let mut cumsum = 0.0;
    for (i, item) in items[..len - 1].iter().enumerate() {
        cumsum += item.weight;
        let ratio = cumsum / total;
        if ratio >= config.band_min && ratio <= config.band_max {
            return (i + 1, ratio);
        }
    }

    let split = (len / 2).clamp(1, len - 1);
    let ratio = items[..split].iter().map(|item| item.weight).sum::<f64>() / total;
    tracing::trace!(
        "Balance band missed for {} items, count-midpoint split at {} (ratio {:.3})",
        len,
        split,
        ratio
    );
    (split, ratio)
}
