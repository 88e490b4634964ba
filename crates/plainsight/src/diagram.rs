//! Diagram composers.
//!
//! Each composer is a parameterless function returning a fresh [`Scene`]. The
//! layouts are fixed illustrations: every coordinate is a named constant in
//! the composer's module, and each call owns a new [`MarkerIdGenerator`], so
//! composing the same diagram twice yields identical scenes.

mod kem;
mod pipeline;
mod stego;
mod symmetric;

pub use kem::{encapsulation, keygen};
pub use pipeline::{decryption_flow, encryption_flow, full_decryption};
pub use stego::{payload_format, steganography};
pub use symmetric::symmetric_encryption;

use plainsight_core::{
    draw::{Arrow, Label, LabeledBox, Scene},
    geometry::{Point, Size},
    identifier::MarkerIdGenerator,
    theme::ThemeToken,
};

/// Position, size, caption and accent of one labeled box.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BoxSpec {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: &'static str,
    accent: ThemeToken,
}

impl BoxSpec {
    const fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: &'static str,
        accent: ThemeToken,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text,
            accent,
        }
    }

    fn build(self) -> LabeledBox {
        LabeledBox::new(self.x, self.y, self.text, self.accent).with_size(self.width, self.height)
    }
}

/// A segment from one point to another.
type Segment = (Point, Point);

/// A faint key label with a dashed arrow pointing down into the stage it feeds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct KeyAnnotation {
    text: &'static str,
    label: Point,
    arrow: Segment,
}

/// A scene under construction together with the marker ids issued for it.
#[derive(Debug)]
struct Canvas {
    scene: Scene,
    ids: MarkerIdGenerator,
}

impl Canvas {
    fn new(width: f32, height: f32) -> Self {
        let mut ids = MarkerIdGenerator::new();
        ids.reset();
        Self {
            scene: Scene::new(Size::new(width, height)),
            ids,
        }
    }

    fn boxed(&mut self, spec: BoxSpec) -> &mut Self {
        self.scene.add(spec.build());
        self
    }

    fn arrow(&mut self, (from, to): Segment) -> &mut Self {
        self.scene.add(Arrow::new(&mut self.ids, from, to));
        self
    }

    fn dashed_arrow(&mut self, (from, to): Segment) -> &mut Self {
        self.scene.add(Arrow::new(&mut self.ids, from, to).dashed());
        self
    }

    fn label(&mut self, at: Point, text: &'static str) -> &mut Self {
        self.scene.add(Label::new(at.x(), at.y(), text));
        self
    }

    fn annotate(&mut self, key: KeyAnnotation) -> &mut Self {
        self.label(key.label, key.text).dashed_arrow(key.arrow)
    }

    fn finish(self) -> Scene {
        self.scene
    }
}

#[cfg(test)]
mod tests {
    use plainsight_core::theme::Theme;

    use super::*;

    fn all() -> Vec<(&'static str, fn() -> Scene)> {
        vec![
            ("encryption_flow", encryption_flow),
            ("decryption_flow", decryption_flow),
            ("keygen", keygen),
            ("encapsulation", encapsulation),
            ("symmetric_encryption", symmetric_encryption),
            ("steganography", steganography),
            ("full_decryption", full_decryption),
            ("payload_format", payload_format),
        ]
    }

    #[test]
    fn test_marker_ids_unique_within_each_diagram() {
        for (name, compose) in all() {
            let scene = compose();
            let ids: Vec<_> = scene.arrows().map(|a| a.marker_id().clone()).collect();
            let mut deduped = ids.clone();
            deduped.sort_by(|a, b| a.as_str().cmp(b.as_str()));
            deduped.dedup();
            assert_eq!(ids.len(), deduped.len(), "{name} reuses a marker id");
            assert_eq!(ids.first().map(|id| id.as_str()), Some("arrow1"), "{name}");
        }
    }

    #[test]
    fn test_composers_are_idempotent() {
        let theme = Theme::gruvbox();
        for (name, compose) in all() {
            assert_eq!(compose(), compose(), "{name}");
            assert_eq!(
                compose().render(theme).unwrap(),
                compose().render(theme).unwrap(),
                "{name}"
            );
        }
    }

    #[test]
    fn test_every_diagram_renders_with_gruvbox() {
        for (name, compose) in all() {
            let markup = compose().render(Theme::gruvbox()).unwrap();
            assert!(markup.contains("viewBox"), "{name}");
            assert!(!markup.is_empty(), "{name}");
        }
    }

    #[test]
    fn test_canvas_annotation_order() {
        let mut canvas = Canvas::new(100.0, 50.0);
        canvas.arrow((Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        canvas.annotate(KeyAnnotation {
            text: "public key",
            label: Point::new(20.0, 15.0),
            arrow: (Point::new(20.0, 18.0), Point::new(20.0, 25.0)),
        });
        let scene = canvas.finish();

        let arrows: Vec<_> = scene.arrows().collect();
        assert_eq!(arrows.len(), 2);
        assert!(!arrows[0].is_dashed());
        assert!(arrows[1].is_dashed());
        assert_eq!(arrows[1].marker_id().as_str(), "arrow2");
        assert_eq!(scene.labels().next().unwrap().text(), "public key");
    }
}
