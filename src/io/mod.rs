mod svg_export;

pub use svg_export::cloud_to_svg;
