use palette::{FromColor, Hsl, Hsv, RgbHue, Srgb};

/// Straight-alpha sRGB color with 8-bit channels.
///
/// HSL and HSV are views computed on demand; nothing but the four channels is
/// stored. Converting to a view and back is lossless up to rounding to the
/// nearest 8-bit value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from red, green and blue.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    #[inline]
    pub const fn with_red(self, r: u8) -> Self {
        Self { r, ..self }
    }

    #[inline]
    pub const fn with_green(self, g: u8) -> Self {
        Self { g, ..self }
    }

    #[inline]
    pub const fn with_blue(self, b: u8) -> Self {
        Self { b, ..self }
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    // ── color space views ─────────────────────────────────────────────────

    fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    fn from_srgb(rgb: Srgb<f32>, a: u8) -> Self {
        let rgb: Srgb<u8> = rgb.into_format();
        Self::new(rgb.red, rgb.green, rgb.blue, a)
    }

    /// HSL projection. Achromatic colors report a hue of 0.
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color(self.to_srgb())
    }

    /// HSV projection. Achromatic colors report a hue of 0.
    pub fn to_hsv(self) -> Hsv {
        Hsv::from_color(self.to_srgb())
    }

    /// Builds a color from an HSL view, rounding each channel to the nearest byte.
    pub fn from_hsl(hsl: Hsl, a: u8) -> Self {
        Self::from_srgb(Srgb::from_color(hsl), a)
    }

    /// Builds a color from an HSV view, rounding each channel to the nearest byte.
    pub fn from_hsv(hsv: Hsv, a: u8) -> Self {
        Self::from_srgb(Srgb::from_color(hsv), a)
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn hue(self) -> f32 {
        self.to_hsl().hue.into_positive_degrees()
    }

    /// HSL saturation in `[0, 1]`.
    pub fn hsl_saturation(self) -> f32 {
        self.to_hsl().saturation
    }

    /// HSV saturation in `[0, 1]`.
    pub fn hsv_saturation(self) -> f32 {
        self.to_hsv().saturation
    }

    /// HSL lightness in `[0, 1]`.
    pub fn lightness(self) -> f32 {
        self.to_hsl().lightness
    }

    /// HSV value in `[0, 1]`.
    pub fn value(self) -> f32 {
        self.to_hsv().value
    }

    // ── color space mutation ──────────────────────────────────────────────
    //
    // Each setter keeps the other two components of its color space and the
    // alpha channel. Out-of-range inputs are clamped; hue wraps around.

    /// Replaces the HSL hue, given in degrees. A non-finite hue leaves the
    /// color unchanged.
    pub fn with_hue(self, degrees: f32) -> Self {
        if !degrees.is_finite() {
            return self;
        }
        let mut hsl = self.to_hsl();
        hsl.hue = RgbHue::from_degrees(degrees.rem_euclid(360.0));
        Self::from_hsl(hsl, self.a)
    }

    /// Replaces the HSL saturation, given in `[0, 1]`.
    pub fn with_hsl_saturation(self, saturation: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.saturation = saturation.clamp(0.0, 1.0);
        Self::from_hsl(hsl, self.a)
    }

    /// Replaces the HSL lightness, given in `[0, 1]`.
    pub fn with_lightness(self, lightness: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.lightness = lightness.clamp(0.0, 1.0);
        Self::from_hsl(hsl, self.a)
    }

    /// Replaces the HSV value, given in `[0, 1]`.
    pub fn with_value(self, value: f32) -> Self {
        let mut hsv = self.to_hsv();
        hsv.value = value.clamp(0.0, 1.0);
        Self::from_hsv(hsv, self.a)
    }
}
