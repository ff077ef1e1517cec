#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hue {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

/// Lightness cycles light -> normal -> dark -> light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lightness {
    Light,
    Normal,
    Dark,
}

/// Chromatic variants are listed a whole lightness level at a time; [`color_delta`] depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,

    LightRed,
    LightYellow,
    LightGreen,
    LightCyan,
    LightBlue,
    LightMagenta,

    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,

    DarkRed,
    DarkYellow,
    DarkGreen,
    DarkCyan,
    DarkBlue,
    DarkMagenta,
}

/// The steps between two chromatic colors which together select an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorDelta {
    /// Always in `0..6`.
    pub hue_step: u8,
    /// Always in `0..3`.
    pub lightness_step: u8,
}

impl Hue {
    pub const ALL: [Hue; 6] = [
        Hue::Red,
        Hue::Yellow,
        Hue::Green,
        Hue::Cyan,
        Hue::Blue,
        Hue::Magenta,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Lightness {
    pub const ALL: [Lightness; 3] = [Lightness::Light, Lightness::Normal, Lightness::Dark];

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Color {
    /// Chromatic colors by position `lightness * 6 + hue`.
    pub const CHROMATIC: [Color; 18] = [
        Color::LightRed,
        Color::LightYellow,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightBlue,
        Color::LightMagenta,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Magenta,
        Color::DarkRed,
        Color::DarkYellow,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkBlue,
        Color::DarkMagenta,
    ];

    pub fn from_components(hue: Hue, lightness: Lightness) -> Color {
        Color::CHROMATIC[(lightness.index() * 6 + hue.index()) as usize]
    }

    pub fn is_chromatic(self) -> bool {
        !matches!(self, Color::Black | Color::White)
    }

    /// Position in [`Color::CHROMATIC`], `None` for black and white.
    pub fn chromatic_index(self) -> Option<u8> {
        Color::CHROMATIC
            .iter()
            .position(|&c| c == self)
            .map(|i| i as u8)
    }

    pub fn hue(self) -> Option<Hue> {
        self.chromatic_index()
            .map(|i| Hue::ALL[(i % 6) as usize])
    }

    pub fn lightness(self) -> Option<Lightness> {
        self.chromatic_index()
            .map(|i| Lightness::ALL[(i / 6) as usize])
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0x00, 0x00, 0x00),
            Color::White => (0xFF, 0xFF, 0xFF),
            Color::LightRed => (0xFF, 0xC0, 0xC0),
            Color::Red => (0xFF, 0x00, 0x00),
            Color::DarkRed => (0xC0, 0x00, 0x00),
            Color::LightYellow => (0xFF, 0xFF, 0xC0),
            Color::Yellow => (0xFF, 0xFF, 0x00),
            Color::DarkYellow => (0xC0, 0xC0, 0x00),
            Color::LightGreen => (0xC0, 0xFF, 0xC0),
            Color::Green => (0x00, 0xFF, 0x00),
            Color::DarkGreen => (0x00, 0xC0, 0x00),
            Color::LightCyan => (0xC0, 0xFF, 0xFF),
            Color::Cyan => (0x00, 0xFF, 0xFF),
            Color::DarkCyan => (0x00, 0xC0, 0xC0),
            Color::LightBlue => (0xC0, 0xC0, 0xFF),
            Color::Blue => (0x00, 0x00, 0xFF),
            Color::DarkBlue => (0x00, 0x00, 0xC0),
            Color::LightMagenta => (0xFF, 0xC0, 0xFF),
            Color::Magenta => (0xFF, 0x00, 0xFF),
            Color::DarkMagenta => (0xC0, 0x00, 0xC0),
        }
    }

    /// Exact match against the canonical palette only.
    pub fn from_rgb(rgb: (u8, u8, u8)) -> Option<Color> {
        [Color::Black, Color::White]
            .into_iter()
            .chain(Color::CHROMATIC)
            .find(|c| c.rgb() == rgb)
    }
}

/// `None` when either side is black or white; those transitions never select an operation.
///
/// Both steps come from the single difference of [`Color::CHROMATIC`] positions, using
/// truncating division. When hue and lightness move in opposite directions this is not the
/// same as stepping each component on its own: red to light yellow is one hue step and no
/// lightness step.
pub fn color_delta(src: Color, dst: Color) -> Option<ColorDelta> {
    let src = src.chromatic_index()? as i8;
    let dst = dst.chromatic_index()? as i8;
    let diff = dst - src;

    Some(ColorDelta {
        hue_step: ((diff % 6 + 6) % 6) as u8,
        lightness_step: ((diff / 6 + 3) % 3) as u8,
    })
}
