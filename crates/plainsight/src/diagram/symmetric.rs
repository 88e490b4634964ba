//! Shared secret and message converging into AES-256-GCM.

use plainsight_core::{draw::Scene, geometry::Point, theme::ThemeToken};

use super::{BoxSpec, Canvas, Segment};

const SIZE: (f32, f32) = (480.0, 120.0);

const SHARED_SECRET: BoxSpec = BoxSpec::new(0.0, 0.0, 115.0, 40.0, "Shared Secret", ThemeToken::Aqua);
const HKDF: BoxSpec = BoxSpec::new(155.0, 0.0, 70.0, 40.0, "HKDF", ThemeToken::Green);
const MESSAGE: BoxSpec = BoxSpec::new(0.0, 75.0, 90.0, 40.0, "Message", ThemeToken::Yellow);
const CIPHER: BoxSpec = BoxSpec::new(265.0, 40.0, 115.0, 45.0, "AES-256-GCM", ThemeToken::Purple);
const CIPHERTEXT: BoxSpec = BoxSpec::new(420.0, 42.0, 100.0, 40.0, "Ciphertext", ThemeToken::Orange);

const SECRET_TO_HKDF: Segment = (Point::new(115.0, 20.0), Point::new(145.0, 20.0));
// The two inputs enter the cipher at different heights
const HKDF_TO_CIPHER: Segment = (Point::new(225.0, 20.0), Point::new(255.0, 50.0));
const MESSAGE_TO_CIPHER: Segment = (Point::new(90.0, 95.0), Point::new(255.0, 65.0));
const CIPHER_TO_CIPHERTEXT: Segment = (Point::new(380.0, 62.0), Point::new(410.0, 62.0));

/// Shared Secret → HKDF → AES-256-GCM ← Message, then → Ciphertext.
pub fn symmetric_encryption() -> Scene {
    let (width, height) = SIZE;
    let mut canvas = Canvas::new(width, height);
    canvas
        .boxed(SHARED_SECRET)
        .arrow(SECRET_TO_HKDF)
        .boxed(HKDF)
        .arrow(HKDF_TO_CIPHER)
        .boxed(MESSAGE)
        .arrow(MESSAGE_TO_CIPHER)
        .boxed(CIPHER)
        .arrow(CIPHER_TO_CIPHERTEXT)
        .boxed(CIPHERTEXT);
    canvas.finish()
}
