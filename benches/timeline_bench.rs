use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;
use vitrine::content::SectionsConfig;
use vitrine::host::{StaticEnvironment, Viewport};
use vitrine::options::Options;
use vitrine::scene::{Channel, ModelManifest, Part, ShowcaseScene};
use vitrine::showcase::Showcase;
use vitrine::timeline::{AxisTargets, AxisValue, Timeline, TweenTarget};
use vitrine::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn seek_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_seek");

    for chapters in [6, 24, 96] {
        let mut timeline = Timeline::new();
        let names: Vec<String> = (0..chapters).map(|i| format!("chapter-{i}")).collect();
        for name in &names {
            let _ = timeline.add_label(name);
        }
        for (i, name) in names.iter().enumerate() {
            let part = Part::ALL[i % Part::ALL.len()];
            let _ = timeline.to(
                TweenTarget::Part(part),
                Channel::Position,
                AxisTargets::default().y(AxisValue::By(0.1)),
                name,
            );
            let _ = timeline.to(
                TweenTarget::Camera,
                Channel::Position,
                AxisTargets::to(Vec3::new(0.0, 0.2, 2.0 - i as f32 * 0.01)),
                name,
            );
        }
        timeline.resolve(|_, _| Vec3::ZERO);

        let _ = group.bench_function(format!("{chapters}_chapters"), |b| {
            let mut sink = Vec3::ZERO;
            b.iter(|| {
                timeline.seek(black_box(0.37), |_, _, v| sink += v);
                black_box(sink)
            });
        });
    }

    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 800.0);
    let options = Options::default();
    let document = SectionsConfig::default().layout_document(&options.markup, viewport);
    let mut manifest = ModelManifest {
        name: "AirPodsMax".to_owned(),
        position: [0.0; 3],
        children: Vec::new(),
    };
    let scene = ShowcaseScene::new(&mut manifest, viewport, &options);
    let mut page = Showcase::new(document, StaticEnvironment::new(viewport), options);
    let _ = page.deliver_scene(scene);

    let mut y = 0.0_f32;
    c.bench_function("showcase_scroll_frame", |b| {
        b.iter(|| {
            y = (y + 37.0) % 5760.0;
            page.scroll_to(black_box(y));
            black_box(page.frame(1.0 / 60.0))
        });
    });
}

criterion_group!(benches, easing_benchmark, seek_benchmark, frame_benchmark);
criterion_main!(benches);
