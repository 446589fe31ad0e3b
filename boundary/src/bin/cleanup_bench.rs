#[cfg(feature = "bench_cleanup")]
use boundary::{clean_polygon, CleanupConfig, Polygon, Vertex};
#[cfg(feature = "bench_cleanup")]
use std::time::Instant;

#[cfg(not(feature = "bench_cleanup"))]
fn main() {
    panic!("cleanup_bench requires --features bench_cleanup");
}

// Long rectangular room with `spikes` excursions on the top wall and `doors`
// door swings on the bottom wall, spaced far enough apart not to interact.
#[cfg(feature = "bench_cleanup")]
fn build_room(spikes: usize, doors: usize) -> Polygon {
    let pitch = 120.0;
    let width = pitch * (spikes.max(doors) as f64 + 1.0);
    let height = 240.0;
    let mut v = Vec::new();
    v.push(Vertex::line(0.0, 0.0));
    for k in 0..doors {
        let x = pitch * (k as f64 + 1.0);
        v.push(Vertex::line(x, 0.0));
        v.push(Vertex::arc(x, -36.0, 0.414_213_562));
        v.push(Vertex::line(x + 36.0, 0.0));
    }
    v.push(Vertex::line(width, 0.0));
    v.push(Vertex::line(width, height));
    for k in (0..spikes).rev() {
        let x = pitch * (k as f64 + 1.0);
        v.push(Vertex::line(x + 8.0, height));
        v.push(Vertex::line(x + 8.0, height + 40.0));
        v.push(Vertex::line(x, height + 40.0));
        v.push(Vertex::line(x, height));
    }
    v.push(Vertex::line(0.0, height));
    Polygon::from_vertices_unchecked(v)
}

#[cfg(feature = "bench_cleanup")]
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut spikes = 40usize;
    let mut doors = 40usize;
    let mut repeats = 10usize;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--spikes=") {
            if let Ok(v) = val.parse() {
                spikes = v;
            }
        } else if let Some(val) = a.strip_prefix("--doors=") {
            if let Ok(v) = val.parse() {
                doors = v;
            }
        } else if let Some(val) = a.strip_prefix("--repeats=") {
            if let Ok(v) = val.parse() {
                repeats = v;
            }
        }
    }

    let cfg = CleanupConfig::default();
    let raw = build_room(spikes, doors);

    let _ = clean_polygon(&raw, &cfg);
    let mut times: Vec<f64> = Vec::with_capacity(repeats);
    let mut out_len = 0;
    for _ in 0..repeats {
        let t0 = Instant::now();
        let res = clean_polygon(&raw, &cfg);
        times.push(t0.elapsed().as_secs_f64() * 1000.0);
        out_len = res.polygon.len();
    }
    times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let med = if times.is_empty() { 0.0 } else { times[times.len() / 2] };

    println!(
        "vertices={} -> {} spikes={} doors={} median_ms={:.3}",
        raw.len(),
        out_len,
        spikes,
        doors,
        med
    );
}
