use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path, Title};

use crate::engine::CloudEngine;

/// Renders the placed words of a (possibly still running) layout to an SVG
/// document, one filled path per word. Debug output: the real compositing
/// surface is the caller's business.
pub fn cloud_to_svg(engine: &CloudEngine, title: &str) -> Document {
    let canvas = engine.canvas();

    let mut document = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", canvas.width, canvas.height),
        )
        .add(Title::new(title));

    for placed in engine.placed() {
        let mut data = Data::new();
        for contour in &placed.outline.contours {
            let first = contour.points[0];
            data = data.move_to((first.x(), first.y()));
            for point in &contour.points[1..] {
                data = data.line_to((point.x(), point.y()));
            }
            data = data.close();
        }

        let path = Path::new()
            .set("d", data)
            .set("fill", placed.color.rgb_hex())
            .set("fill-opacity", placed.color.alpha() as f32 / 255.0)
            //holes in glyphs only render correctly under the even-odd rule
            .set("fill-rule", "evenodd");

        document = document.add(path);
    }

    document
}
