//! ML-KEM key generation and encapsulation.
//!
//! Both diagrams share one shape: a source box feeds an ML-KEM stage, which
//! fans out to two stacked outputs.

use plainsight_core::{draw::Scene, geometry::Point, theme::ThemeToken};

use super::{BoxSpec, Canvas, Segment};

/// Layout of a source → stage → two-output diagram.
struct FanOut {
    size: (f32, f32),
    source: BoxSpec,
    feed: Segment,
    stage: BoxSpec,
    branches: [Segment; 2],
    outputs: [BoxSpec; 2],
}

const KEYGEN: FanOut = FanOut {
    size: (480.0, 100.0),
    source: BoxSpec::new(0.0, 27.0, 100.0, 45.0, "RECEIVER", ThemeToken::Aqua),
    feed: (Point::new(100.0, 50.0), Point::new(130.0, 50.0)),
    stage: BoxSpec::new(140.0, 27.0, 130.0, 45.0, "ML-KEM keygen", ThemeToken::Green),
    branches: [
        (Point::new(270.0, 40.0), Point::new(320.0, 20.0)),
        (Point::new(270.0, 60.0), Point::new(320.0, 80.0)),
    ],
    outputs: [
        BoxSpec::new(330.0, 0.0, 110.0, 40.0, "Public Key", ThemeToken::Yellow),
        BoxSpec::new(330.0, 60.0, 110.0, 40.0, "Private Key", ThemeToken::Purple),
    ],
};

const ENCAPSULATION: FanOut = FanOut {
    size: (500.0, 100.0),
    source: BoxSpec::new(0.0, 27.0, 110.0, 45.0, "Public Key", ThemeToken::Yellow),
    feed: (Point::new(110.0, 50.0), Point::new(140.0, 50.0)),
    stage: BoxSpec::new(150.0, 27.0, 125.0, 45.0, "ML-KEM encap", ThemeToken::Green),
    branches: [
        (Point::new(275.0, 40.0), Point::new(320.0, 18.0)),
        (Point::new(275.0, 60.0), Point::new(320.0, 82.0)),
    ],
    outputs: [
        BoxSpec::new(330.0, 0.0, 120.0, 36.0, "Shared Secret", ThemeToken::Aqua),
        BoxSpec::new(330.0, 62.0, 120.0, 36.0, "KEM Ciphertext", ThemeToken::Purple),
    ],
};

/// RECEIVER → ML-KEM keygen → {Public Key, Private Key}.
pub fn keygen() -> Scene {
    fan_out(&KEYGEN)
}

/// Public Key → ML-KEM encap → {Shared Secret, KEM Ciphertext}.
pub fn encapsulation() -> Scene {
    fan_out(&ENCAPSULATION)
}

fn fan_out(layout: &FanOut) -> Scene {
    let (width, height) = layout.size;
    let mut canvas = Canvas::new(width, height);
    canvas
        .boxed(layout.source)
        .arrow(layout.feed)
        .boxed(layout.stage);
    for branch in layout.branches {
        canvas.arrow(branch);
    }
    for output in layout.outputs {
        canvas.boxed(output);
    }
    canvas.finish()
}
