//! Criterion benchmarks for the active-section tracker.
//!
//! Run with:
//!   cargo bench -p purcell
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use purcell::tracker::{fragment_target, ActiveSectionTracker, NavLinkView, Section};

struct Link {
    href: String,
    active: bool,
}

impl NavLinkView for Link {
    fn target(&self) -> Option<&str> {
        fragment_target(&self.href)
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

fn make_page(sections: usize) -> (Vec<Section>, Vec<Link>) {
    let layout: Vec<Section> = (0..sections)
        .map(|i| Section::new(format!("s{i}"), i as f64 * 900.0, 900.0))
        .collect();
    let links = layout
        .iter()
        .map(|s| Link {
            href: format!("#{}", s.id),
            active: false,
        })
        .collect();
    (layout, links)
}

/// One scroll tick against pages of increasing length.
fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker_update");

    for size in [4usize, 8, 16, 64].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let (layout, links) = make_page(size);
            let mut tracker = ActiveSectionTracker::new(layout, links, 100.0);
            let page_height = size as f64 * 900.0;
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 37.0) % page_height;
                black_box(tracker.update(black_box(y)).is_some())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
