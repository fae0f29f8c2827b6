pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

pub fn parallax_style(scroll_y: f64, speed: f64) -> String {
    format!(
        "transform: translate3d(0, {:.2}px, 0);",
        parallax_offset(scroll_y, speed)
    )
}

/// How far the page has scrolled through a pinned horizontal section, in `[0, 1]`.
pub fn horizontal_progress(
    scroll_y: f64,
    section_top: f64,
    section_height: f64,
    viewport_height: f64,
) -> f64 {
    let travel = section_height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((scroll_y - section_top) / travel).clamp(0.0, 1.0)
}

pub fn horizontal_translate(progress: f64, track_width: f64, viewport_width: f64) -> f64 {
    -progress.clamp(0.0, 1.0) * (track_width - viewport_width).max(0.0)
}

pub fn horizontal_track_style(progress: f64, track_width: f64, viewport_width: f64) -> String {
    format!(
        "transform: translate3d({:.2}px, 0, 0);",
        horizontal_translate(progress, track_width, viewport_width)
    )
}

/// Outer height that gives the track exactly enough vertical travel to slide
/// its full width.
pub fn horizontal_section_height(track_width: f64, viewport_width: f64, viewport_height: f64) -> f64 {
    viewport_height + (track_width - viewport_width).max(0.0)
}

pub fn horizontal_section_style(track_width: f64, viewport_width: f64, viewport_height: f64) -> String {
    format!(
        "height: {:.0}px;",
        horizontal_section_height(track_width, viewport_width, viewport_height)
    )
}

const NOISE_SVG: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='200' height='200'><filter id='n'><feTurbulence type='fractalNoise' baseFrequency='0.8' numOctaves='4' stitchTiles='stitch'/></filter><rect width='100%' height='100%' filter='url(%23n)'/></svg>";

pub fn noise_style(opacity: f64) -> String {
    format!(
        "opacity: {:.3}; background-image: url(\"{NOISE_SVG}\");",
        opacity.clamp(0.0, 1.0)
    )
}
