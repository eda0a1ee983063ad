/// Diagnostic tool to verify the weights → layout pipeline
use splitmap::{compute_layout, LayoutConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("splitmap=debug".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let weights: Vec<f64> = if args.is_empty() {
        // Sample distribution: one dominant item plus a mid-weight tail
        vec![7.0, 0.5, 2.0, 1.0, 3.0, 5.0, 1.0, 2.0]
    } else {
        args.iter()
            .map(|a| {
                a.parse::<f64>()
                    .map_err(|e| anyhow::anyhow!("bad weight '{}': {}", a, e))
            })
            .collect::<Result<_, _>>()?
    };

    println!("=== DIAGNOSTIC: Weights → Layout Pipeline ===");
    println!("Weights: {:?}", weights);

    let config = LayoutConfig::default();
    let rects = compute_layout(&weights, &config);
    println!("\n[1] Layout computed: {} rectangles", rects.len());

    let total_weight: f64 = weights.iter().sum();
    println!("\n[2] Rectangles (input order):");
    for r in &rects {
        println!(
            "    [{}] {:.4}x{:.4} at ({:.4}, {:.4}) - area {:.4} (weight {:.2}, share {:.1}%)",
            r.index,
            r.w,
            r.h,
            r.x,
            r.y,
            r.area(),
            r.weight,
            100.0 * r.weight / total_weight
        );
    }

    println!("\n[3] Checking for anomalies:");

    let container_area = config.width * config.height;
    let covered: f64 = rects.iter().map(|r| r.area()).sum();
    println!("    Total rect area: {:.6}", covered);
    println!("    Container area:  {:.6}", container_area);
    println!("    Coverage: {:.2}%", (covered / container_area) * 100.0);

    let mut overlaps = 0usize;
    for (i, a) in rects.iter().enumerate() {
        for b in rects.iter().skip(i + 1) {
            let x_overlap = (a.x + a.w).min(b.x + b.w) - a.x.max(b.x);
            let y_overlap = (a.y + a.h).min(b.y + b.h) - a.y.max(b.y);
            if x_overlap > 1e-9 && y_overlap > 1e-9 {
                overlaps += 1;
            }
        }
    }
    println!("    Overlapping pairs: {}", overlaps);

    let worst_error = rects
        .iter()
        .map(|r| (r.area() / container_area - r.weight / total_weight).abs())
        .fold(0.0, f64::max);
    println!("    Worst proportionality error: {:.2e}", worst_error);

    Ok(())
}
