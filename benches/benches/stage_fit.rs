// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_stage::css::apply_resize_info;
use understory_stage::{
    PollingObserver, ResizeHost, ResizeOptions, ResizeTrigger, Stage, start_resizer,
};

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage/fit");
    let stage = Stage::STANDARD;

    for (name, bounds) in [
        ("pillarbox", Rect::new(0.0, 0.0, 2560.0, 1080.0)),
        ("letterbox", Rect::new(0.0, 0.0, 1080.0, 1920.0)),
        ("exact", Rect::new(0.0, 0.0, 1920.0, 1080.0)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &bounds, |b, bounds| {
            b.iter(|| black_box(stage.fit(black_box(*bounds))));
        });
    }
    group.finish();
}

#[derive(Clone, Default)]
struct BenchHost {
    size: Rc<Cell<(f64, f64)>>,
}

impl ResizeHost for BenchHost {
    type Element = u32;
    type Observer = PollingObserver<u32>;
    type Listener = ();

    fn viewport_rect(&self) -> Rect {
        let (w, h) = self.size.get();
        Rect::new(0.0, 0.0, w, h)
    }

    fn measure(&self, _element: &u32) -> Rect {
        Rect::ZERO
    }

    fn size_observer(&self, trigger: ResizeTrigger) -> PollingObserver<u32> {
        PollingObserver::new(trigger)
    }

    fn add_window_resize_listener(&self, _trigger: ResizeTrigger) -> Self::Listener {}

    fn remove_window_resize_listener(&self, _listener: ()) {}
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage/session");

    let host = BenchHost::default();
    host.size.set((1920.0, 1080.0));
    let style = Rc::new(RefCell::new(BTreeMap::<String, String>::new()));
    let sink = style.clone();
    let session = start_resizer(host.clone(), ResizeOptions::new(), move |info| {
        apply_resize_info(&mut *sink.borrow_mut(), info);
    });

    // Same size every time: measures the no-change path.
    group.bench_function("recompute_unchanged", |b| {
        b.iter(|| session.recompute());
    });

    // Alternate between two sizes so every recompute notifies.
    let mut flip = false;
    group.bench_function("recompute_changed_with_css", |b| {
        b.iter(|| {
            flip = !flip;
            host.size
                .set(if flip { (1280.0, 720.0) } else { (1920.0, 1080.0) });
            session.recompute();
        });
    });

    group.finish();
    session.cancel();
    black_box(style.borrow().len());
}

criterion_group!(benches, bench_fit, bench_session);
criterion_main!(benches);
