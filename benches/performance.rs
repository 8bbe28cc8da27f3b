// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for KEYWHEEL
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Keyboard table generation
//! - Roman numeral inference (the hot path of chord display)
//! - Enharmonic spelling lookups
//! - Beat-position chord lookup during playback

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use keywheel::music::chord::roman_numeral_for;
use keywheel::music::pitch::generate_keyboard;
use keywheel::music::scale::spell;
use keywheel::music::{Mode, Note, SelectedChord};
use keywheel::ProgressionStore;

fn bench_keyboard_generation(c: &mut Criterion) {
    c.bench_function("generate_keyboard", |b| {
        b.iter(|| black_box(generate_keyboard()))
    });
}

fn bench_roman_numeral(c: &mut Criterion) {
    c.bench_function("roman_numeral_for", |b| {
        b.iter(|| {
            // Worst case: seventh chord, scanned after all triads
            black_box(roman_numeral_for(
                black_box(Note::B),
                black_box(&[0, 3, 6, 10]),
                Note::C,
                Mode::Major,
            ))
        })
    });
}

fn bench_spelling(c: &mut Criterion) {
    c.bench_function("spell_all_keys", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for tonic in Note::ALL {
                for mode in [Mode::Major, Mode::Minor] {
                    for note in Note::ALL {
                        count += spell(black_box(note), tonic, mode).len();
                    }
                }
            }
            black_box(count)
        })
    });
}

fn bench_chord_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("chord_at");

    for size in [4, 16, 64].iter() {
        let mut store = ProgressionStore::new();
        for _ in 0..*size {
            store.append(SelectedChord::new(Note::C, vec![0, 4, 7], "I"), 4);
        }
        let last_beat = store.total_beats() as f64 - 0.5;

        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(store.chord_at(black_box(last_beat))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_keyboard_generation,
    bench_roman_numeral,
    bench_spelling,
    bench_chord_at
);
criterion_main!(benches);
