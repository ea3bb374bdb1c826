//! Performance benchmarks for full-frame rendering
//!
//! Measures one `ui::render` pass per screen and terminal size.
//! Run with: cargo bench

use std::sync::Arc;

use agrodash::adapters::mock::{InMemoryStore, ManualClock, RecordingSpeech, ScriptedRandom};
use agrodash::app::{App, Route, Services, StartOptions};
use agrodash::ui::render;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};

fn registered_app(route: Route, offline: bool) -> App {
    let store = InMemoryStore::new().with_value("farmerRegistered", "true");
    let services = Services::new(
        Arc::new(store),
        Arc::new(ManualClock::at_hour(10)),
        Arc::new(ScriptedRandom::constant(0.5)),
        Arc::new(RecordingSpeech::new()),
    );
    App::new(services, StartOptions { route, offline })
}

/// Benchmark each screen at a typical terminal size
fn bench_render_routes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_route");

    for route in Route::ALL {
        let app = registered_app(route, false);
        let mut terminal = match Terminal::new(TestBackend::new(120, 40)) {
            Ok(t) => t,
            Err(_) => return,
        };
        group.bench_with_input(BenchmarkId::from_parameter(route.path()), &app, |b, app| {
            b.iter(|| {
                let _ = terminal.draw(|f| render(f, black_box(app)));
            });
        });
    }

    group.finish();
}

/// Benchmark the dashboard across terminal sizes, with the offline banner
fn bench_render_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_dashboard_size");
    let app = registered_app(Route::Dashboard, true);

    for (w, h) in [(40u16, 20u16), (80, 24), (120, 40), (240, 80)] {
        let mut terminal = match Terminal::new(TestBackend::new(w, h)) {
            Ok(t) => t,
            Err(_) => return,
        };
        group.bench_function(BenchmarkId::from_parameter(format!("{}x{}", w, h)), |b| {
            b.iter(|| {
                let _ = terminal.draw(|f| render(f, black_box(&app)));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_routes, bench_render_sizes);
criterion_main!(benches);
