//! Embedding the combined ciphertexts into an image, and the byte layout of
//! the hidden bitstream.

use plainsight_core::{draw::Scene, geometry::Point, theme::ThemeToken};

use super::{BoxSpec, Canvas, Segment};

const STEGANOGRAPHY_SIZE: (f32, f32) = (500.0, 120.0);

const KEM_CIPHERTEXT: BoxSpec =
    BoxSpec::new(0.0, 0.0, 120.0, 40.0, "KEM Ciphertext", ThemeToken::Purple);
const CIPHERTEXT: BoxSpec = BoxSpec::new(0.0, 75.0, 100.0, 40.0, "Ciphertext", ThemeToken::Orange);
const COMBINE: BoxSpec = BoxSpec::new(170.0, 40.0, 85.0, 40.0, "Combine", ThemeToken::Green);
const LSB_EMBED: BoxSpec = BoxSpec::new(295.0, 40.0, 100.0, 40.0, "LSB Embed", ThemeToken::Yellow);
const STEGO_IMAGE: BoxSpec = BoxSpec::new(435.0, 40.0, 105.0, 40.0, "Stego Image", ThemeToken::Aqua);

const KEM_CIPHERTEXT_TO_COMBINE: Segment = (Point::new(120.0, 20.0), Point::new(160.0, 50.0));
const CIPHERTEXT_TO_COMBINE: Segment = (Point::new(100.0, 95.0), Point::new(160.0, 65.0));
const COMBINE_TO_EMBED: Segment = (Point::new(255.0, 60.0), Point::new(285.0, 60.0));
const EMBED_TO_IMAGE: Segment = (Point::new(395.0, 60.0), Point::new(425.0, 60.0));

/// {KEM Ciphertext, Ciphertext} → Combine → LSB Embed → Stego Image.
pub fn steganography() -> Scene {
    let (width, height) = STEGANOGRAPHY_SIZE;
    let mut canvas = Canvas::new(width, height);
    canvas
        .boxed(KEM_CIPHERTEXT)
        .arrow(KEM_CIPHERTEXT_TO_COMBINE)
        .boxed(CIPHERTEXT)
        .arrow(CIPHERTEXT_TO_COMBINE)
        .boxed(COMBINE)
        .arrow(COMBINE_TO_EMBED)
        .boxed(LSB_EMBED)
        .arrow(EMBED_TO_IMAGE)
        .boxed(STEGO_IMAGE);
    canvas.finish()
}

const PAYLOAD_SIZE: (f32, f32) = (640.0, 120.0);
const FIELD_Y: f32 = 30.0;
const FIELD_HEIGHT: f32 = 45.0;

// Fields in the order they are written, each starting where the previous ends
const PAYLOAD_FIELDS: [BoxSpec; 5] = [
    BoxSpec::new(0.0, FIELD_Y, 110.0, FIELD_HEIGHT, "Length (4 B)", ThemeToken::Orange),
    BoxSpec::new(110.0, FIELD_Y, 180.0, FIELD_HEIGHT, "KEM Ciphertext (1088 B)", ThemeToken::Purple),
    BoxSpec::new(290.0, FIELD_Y, 80.0, FIELD_HEIGHT, "IV (12 B)", ThemeToken::Yellow),
    BoxSpec::new(370.0, FIELD_Y, 125.0, FIELD_HEIGHT, "CT Length (4 B)", ThemeToken::Green),
    BoxSpec::new(495.0, FIELD_Y, 130.0, FIELD_HEIGHT, "Ciphertext", ThemeToken::Aqua),
];
const HEADER_LABEL: Point = Point::new(55.0, 20.0);
const PAYLOAD_LABEL: Point = Point::new(392.5, 20.0);
const EMBED_ORDER: Segment = (Point::new(0.0, 92.0), Point::new(625.0, 92.0));
const EMBED_ORDER_LABEL: Point = Point::new(312.5, 112.0);

/// The hidden bitstream: the stego length header followed by the serialized
/// payload, embedded from left to right.
pub fn payload_format() -> Scene {
    let (width, height) = PAYLOAD_SIZE;
    let mut canvas = Canvas::new(width, height);
    for field in PAYLOAD_FIELDS {
        canvas.boxed(field);
    }
    canvas
        .label(HEADER_LABEL, "stego header")
        .label(PAYLOAD_LABEL, "encrypted payload")
        .arrow(EMBED_ORDER)
        .label(EMBED_ORDER_LABEL, "MSB first into R,G,B LSBs; alpha skipped");
    canvas.finish()
}
