use ratatui::style::Color;

pub const LAVENDER: Color = Color::Rgb(0xa3, 0x78, 0xff);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const INK: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const FOOTER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Breathing circle fill.
pub const MINT_RGB: (u8, u8, u8) = (0xcc, 0xff, 0xf2);

/// Opacity of the breathing circle over the background.
pub const CIRCLE_ALPHA: f64 = 0.5;

/// Top-to-bottom background gradient as `(location, rgb)` stops.
pub const GRADIENT_STOPS: [(f64, (u8, u8, u8)); 6] = [
    (0.00, (0xff, 0xf7, 0xff)),
    (0.50, (0xf2, 0xf2, 0xff)),
    (0.75, (0xe6, 0xe8, 0xff)),
    (0.88, (0xcc, 0xff, 0xf2)),
    (0.94, (0xe6, 0xfa, 0xe6)),
    (1.00, (0xff, 0xff, 0xff)),
];

/// Background color at vertical position `t ∈ [0, 1]`.
pub fn gradient_at(t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    for pair in GRADIENT_STOPS.windows(2) {
        let (start, from) = pair[0];
        let (end, to) = pair[1];
        if t <= end {
            let span = end - start;
            let local = if span > 0.0 { (t - start) / span } else { 0.0 };
            return mix(from, to, local);
        }
    }
    GRADIENT_STOPS[GRADIENT_STOPS.len() - 1].1
}

/// Linear blend of two colors; `amount = 0` is `a`, `1` is `b`.
pub fn mix(a: (u8, u8, u8), b: (u8, u8, u8), amount: f64) -> (u8, u8, u8) {
    let amount = amount.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| -> u8 {
        (f64::from(x) + (f64::from(y) - f64::from(x)) * amount).round() as u8
    };
    (channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
