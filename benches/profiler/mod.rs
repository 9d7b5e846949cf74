// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

pub fn criterion() -> Criterion {
    Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}
