use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use pandemic_deckbuilder::{AutoplayConfig, Session, SessionConfig};

fn session(seed: u64) -> Session {
    let config = SessionConfig::new().with_seed(seed).with_autoplay(AutoplayConfig {
        await_presentation: false,
        ..AutoplayConfig::default()
    });
    let mut session = Session::new(config).unwrap();
    session.start_autoplay();
    session
}

fn bench_autoplay(c: &mut Criterion) {
    c.bench_function("autoplay_1000_steps", |b| {
        b.iter_batched(
            || session(42),
            |mut session| {
                for _ in 0..1000 {
                    black_box(session.autoplay_tick());
                }
                session.drain_events()
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let mut played = session(7);
    for _ in 0..2000 {
        played.autoplay_tick();
    }
    played.drain_events();

    c.bench_function("state_clone", |b| b.iter(|| black_box(played.state().clone())));
    c.bench_function("view_capture", |b| b.iter(|| black_box(played.view())));
}

criterion_group!(benches, bench_autoplay, bench_state_clone);
criterion_main!(benches);
