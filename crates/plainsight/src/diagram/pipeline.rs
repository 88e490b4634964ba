//! The five-stage encryption and decryption pipelines.

use plainsight_core::{draw::Scene, geometry::Point, theme::ThemeToken};

use super::{BoxSpec, Canvas, KeyAnnotation, Segment};

const ENCRYPTION_SIZE: (f32, f32) = (660.0, 100.0);
const ENCRYPTION_STAGES: [BoxSpec; 5] = [
    BoxSpec::new(0.0, 25.0, 100.0, 45.0, "Message", ThemeToken::Aqua),
    BoxSpec::new(140.0, 25.0, 90.0, 45.0, "ML-KEM", ThemeToken::Green),
    BoxSpec::new(270.0, 25.0, 90.0, 45.0, "AES-256", ThemeToken::Purple),
    BoxSpec::new(400.0, 25.0, 100.0, 45.0, "LSB Embed", ThemeToken::Yellow),
    BoxSpec::new(540.0, 25.0, 110.0, 45.0, "Stego Image", ThemeToken::Orange),
];
const ENCRYPTION_FEEDS: [Segment; 4] = [
    (Point::new(100.0, 48.0), Point::new(130.0, 48.0)),
    (Point::new(230.0, 48.0), Point::new(260.0, 48.0)),
    (Point::new(360.0, 48.0), Point::new(390.0, 48.0)),
    (Point::new(500.0, 48.0), Point::new(530.0, 48.0)),
];
const PUBLIC_KEY: KeyAnnotation = KeyAnnotation {
    text: "public key",
    label: Point::new(185.0, 15.0),
    arrow: (Point::new(185.0, 18.0), Point::new(185.0, 25.0)),
};

const DECRYPTION_SIZE: (f32, f32) = (660.0, 100.0);
const DECRYPTION_STAGES: [BoxSpec; 5] = [
    BoxSpec::new(0.0, 25.0, 110.0, 45.0, "Stego Image", ThemeToken::Orange),
    BoxSpec::new(150.0, 25.0, 100.0, 45.0, "LSB Extract", ThemeToken::Yellow),
    BoxSpec::new(290.0, 25.0, 90.0, 45.0, "ML-KEM", ThemeToken::Green),
    BoxSpec::new(420.0, 25.0, 90.0, 45.0, "AES-256", ThemeToken::Purple),
    BoxSpec::new(550.0, 25.0, 100.0, 45.0, "Message", ThemeToken::Aqua),
];
const DECRYPTION_FEEDS: [Segment; 4] = [
    (Point::new(110.0, 48.0), Point::new(140.0, 48.0)),
    (Point::new(250.0, 48.0), Point::new(280.0, 48.0)),
    (Point::new(380.0, 48.0), Point::new(410.0, 48.0)),
    (Point::new(510.0, 48.0), Point::new(540.0, 48.0)),
];
const DECRYPTION_PRIVATE_KEY: KeyAnnotation = KeyAnnotation {
    text: "private key",
    label: Point::new(335.0, 15.0),
    arrow: (Point::new(335.0, 18.0), Point::new(335.0, 25.0)),
};

// Tighter spacing than the overview pipeline, sized for the detail page
const FULL_DECRYPTION_SIZE: (f32, f32) = (600.0, 100.0);
const FULL_DECRYPTION_STAGES: [BoxSpec; 5] = [
    BoxSpec::new(0.0, 27.0, 105.0, 45.0, "Stego Image", ThemeToken::Orange),
    BoxSpec::new(140.0, 27.0, 95.0, 45.0, "LSB Extract", ThemeToken::Yellow),
    BoxSpec::new(270.0, 27.0, 85.0, 45.0, "ML-KEM", ThemeToken::Green),
    BoxSpec::new(390.0, 27.0, 105.0, 45.0, "AES-256-GCM", ThemeToken::Purple),
    BoxSpec::new(530.0, 27.0, 85.0, 45.0, "Message", ThemeToken::Aqua),
];
const FULL_DECRYPTION_FEEDS: [Segment; 4] = [
    (Point::new(105.0, 50.0), Point::new(130.0, 50.0)),
    (Point::new(235.0, 50.0), Point::new(260.0, 50.0)),
    (Point::new(355.0, 50.0), Point::new(380.0, 50.0)),
    (Point::new(495.0, 50.0), Point::new(520.0, 50.0)),
];
const FULL_DECRYPTION_PRIVATE_KEY: KeyAnnotation = KeyAnnotation {
    text: "private key",
    label: Point::new(312.0, 15.0),
    arrow: (Point::new(312.0, 18.0), Point::new(312.0, 27.0)),
};

/// Message → ML-KEM → AES-256 → LSB Embed → Stego Image, with the public key
/// feeding the ML-KEM stage from above.
pub fn encryption_flow() -> Scene {
    pipeline(ENCRYPTION_SIZE, &ENCRYPTION_STAGES, &ENCRYPTION_FEEDS, PUBLIC_KEY)
}

/// Stego Image → LSB Extract → ML-KEM → AES-256 → Message, with the private
/// key feeding the ML-KEM stage from above.
pub fn decryption_flow() -> Scene {
    pipeline(
        DECRYPTION_SIZE,
        &DECRYPTION_STAGES,
        &DECRYPTION_FEEDS,
        DECRYPTION_PRIVATE_KEY,
    )
}

/// The decryption pipeline in its compact form, naming AES-256-GCM.
pub fn full_decryption() -> Scene {
    pipeline(
        FULL_DECRYPTION_SIZE,
        &FULL_DECRYPTION_STAGES,
        &FULL_DECRYPTION_FEEDS,
        FULL_DECRYPTION_PRIVATE_KEY,
    )
}

fn pipeline(
    (width, height): (f32, f32),
    stages: &[BoxSpec],
    feeds: &[Segment],
    key: KeyAnnotation,
) -> Scene {
    let mut canvas = Canvas::new(width, height);
    for (i, stage) in stages.iter().enumerate() {
        canvas.boxed(*stage);
        if let Some(feed) = feeds.get(i) {
            canvas.arrow(*feed);
        }
    }
    canvas.annotate(key);
    canvas.finish()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use plainsight_core::draw::Drawable;

    use super::*;

    fn captions(scene: &Scene) -> Vec<&str> {
        scene.boxes().map(|b| b.text()).collect()
    }

    #[test]
    fn test_encryption_flow_topology() {
        let scene = encryption_flow();
        assert_eq!(scene.view_box().to_view_box(), "0 0 660 100");
        assert_eq!(
            captions(&scene),
            ["Message", "ML-KEM", "AES-256", "LSB Embed", "Stego Image"]
        );

        let arrows: Vec<_> = scene.arrows().collect();
        assert_eq!(arrows.len(), 5);
        assert_eq!(arrows.iter().filter(|a| a.is_dashed()).count(), 1);

        let key = arrows[4];
        assert!(key.is_dashed());
        assert_eq!(key.marker_id().as_str(), "arrow5");
        assert_eq!(key.from(), Point::new(185.0, 18.0));
        assert_eq!(key.to(), Point::new(185.0, 25.0));

        let label = scene.labels().next().unwrap();
        assert_eq!(label.text(), "public key");
        assert_eq!(label.position(), Point::new(185.0, 15.0));
    }

    #[test]
    fn test_key_arrow_lands_on_kem_stage() {
        for scene in [encryption_flow(), decryption_flow(), full_decryption()] {
            let kem = scene.boxes().find(|b| b.text() == "ML-KEM").unwrap();
            let key = scene.arrows().find(|a| a.is_dashed()).unwrap();
            assert!(kem.bounds().contains(key.to()));
            assert_approx_eq!(f32, key.to().y(), kem.bounds().min_y());
        }
    }

    #[test]
    fn test_feeds_join_adjacent_stages() {
        for scene in [encryption_flow(), decryption_flow(), full_decryption()] {
            let boxes: Vec<_> = scene.boxes().collect();
            let feeds: Vec<_> = scene.arrows().filter(|a| !a.is_dashed()).collect();
            assert_eq!(feeds.len(), boxes.len() - 1);
            for (i, feed) in feeds.iter().enumerate() {
                assert_approx_eq!(f32, feed.from().x(), boxes[i].bounds().max_x());
                assert!(feed.to().x() < boxes[i + 1].bounds().min_x());
            }
        }
    }

    #[test]
    fn test_decryption_flow_mirrors_encryption() {
        let scene = decryption_flow();
        let mut stages = captions(&scene);
        stages.reverse();
        assert_eq!(stages, ["Message", "AES-256", "ML-KEM", "LSB Extract", "Stego Image"]);
        assert_eq!(scene.labels().next().unwrap().text(), "private key");
    }

    #[test]
    fn test_full_decryption_layout() {
        let scene = full_decryption();
        assert_eq!(scene.view_box().to_view_box(), "0 0 600 100");
        assert_eq!(
            captions(&scene),
            ["Stego Image", "LSB Extract", "ML-KEM", "AES-256-GCM", "Message"]
        );
        assert_eq!(
            scene.labels().next().unwrap().position(),
            Point::new(312.0, 15.0)
        );
    }
}
