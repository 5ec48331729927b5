//! Built-in stroke font
//!
//! Always available, whatever the host has installed. Each glyph is a set of
//! polylines on a 0-100 design grid (x right, y down) that backends stroke at
//! [`STROKE_WEIGHT`] of the pixel size. It covers the drill's symbol set;
//! anything else is drawn as a hollow box.

/// Stroke width as a fraction of the em
pub const STROKE_WEIGHT: f32 = 0.08;

/// Side of the design grid
pub const GRID: f32 = 100.0;

type Polyline = &'static [(u8, u8)];

/// One glyph of the built-in font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeGlyph {
    pub symbol: char,
    pub strokes: &'static [Polyline],
}

impl StrokeGlyph {
    /// Tight box around the stroke centrelines, in grid units:
    /// `(min_x, min_y, max_x, max_y)`
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for &(x, y) in self.strokes.iter().flat_map(|s| s.iter()) {
            min_x = min_x.min(x as f32);
            min_y = min_y.min(y as f32);
            max_x = max_x.max(x as f32);
            max_y = max_y.max(y as f32);
        }
        if min_x > max_x {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (min_x, min_y, max_x, max_y)
    }
}

/// The guaranteed-present fallback font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinFont;

impl BuiltinFont {
    pub const NAME: &'static str = "builtin-strokes";

    /// Whether the symbol has a real glyph (not the box)
    pub fn covers(&self, symbol: char) -> bool {
        GLYPHS.iter().any(|g| g.symbol == symbol)
    }

    /// Glyph for `symbol`, or the hollow box when the font lacks it
    pub fn glyph(&self, symbol: char) -> StrokeGlyph {
        GLYPHS
            .iter()
            .find(|g| g.symbol == symbol)
            .copied()
            .unwrap_or(StrokeGlyph {
                symbol,
                strokes: TOFU,
            })
    }

    /// Symbols with real glyphs, in table order
    pub fn symbols(&self) -> impl Iterator<Item = char> {
        GLYPHS.iter().map(|g| g.symbol)
    }
}

static TOFU: &[Polyline] = &[&[(14, 6), (86, 6), (86, 94), (14, 94), (14, 6)]];

macro_rules! glyph {
    ($symbol:literal, [$($stroke:expr),+ $(,)?]) => {
        StrokeGlyph {
            symbol: $symbol,
            strokes: &[$(&$stroke),+],
        }
    };
}

static GLYPHS: &[StrokeGlyph] = &[
    glyph!('一', [[(10, 50), (90, 50)]]),
    glyph!('二', [[(22, 30), (78, 30)], [(10, 72), (90, 72)]]),
    glyph!('三', [[(20, 18), (80, 18)], [(26, 50), (74, 50)], [(10, 84), (90, 84)]]),
    glyph!(
        '四',
        [
            [(14, 20), (14, 88)],
            [(14, 20), (86, 20), (86, 88)],
            [(14, 84), (86, 84)],
            [(40, 20), (38, 52), (28, 64)],
            [(60, 20), (60, 58), (72, 60)],
        ]
    ),
    glyph!(
        '五',
        [
            [(18, 14), (82, 14)],
            [(46, 14), (38, 84)],
            [(26, 46), (70, 46), (66, 84)],
            [(8, 86), (92, 86)],
        ]
    ),
    glyph!(
        '六',
        [
            [(48, 6), (54, 18)],
            [(10, 32), (90, 32)],
            [(36, 50), (20, 84)],
            [(62, 52), (82, 82)],
        ]
    ),
    glyph!(
        '七',
        [
            [(8, 46), (92, 36)],
            [(42, 8), (42, 80), (50, 88), (88, 88), (90, 72)],
        ]
    ),
    glyph!('八', [[(40, 20), (36, 56), (12, 86)], [(58, 18), (70, 60), (90, 86)]]),
    glyph!(
        '九',
        [
            [(12, 34), (66, 34), (66, 82), (76, 88), (92, 86), (94, 72)],
            [(42, 8), (38, 56), (12, 88)],
        ]
    ),
    glyph!('十', [[(8, 44), (92, 44)], [(50, 6), (50, 94)]]),
    glyph!('人', [[(50, 8), (46, 50), (12, 90)], [(48, 44), (70, 72), (92, 90)]]),
    glyph!(
        '口',
        [
            [(18, 22), (18, 82)],
            [(18, 22), (82, 22), (82, 82)],
            [(18, 78), (82, 78)],
        ]
    ),
    glyph!(
        '日',
        [
            [(24, 10), (24, 92)],
            [(24, 10), (76, 10), (76, 92)],
            [(24, 50), (76, 50)],
            [(24, 88), (76, 88)],
        ]
    ),
    glyph!(
        '月',
        [
            [(28, 10), (26, 62), (12, 92)],
            [(28, 10), (76, 10), (76, 86), (66, 92)],
            [(28, 38), (76, 38)],
            [(28, 62), (76, 62)],
        ]
    ),
    glyph!(
        '水',
        [
            [(50, 6), (50, 88), (40, 92)],
            [(12, 34), (36, 34), (14, 76)],
            [(82, 22), (58, 40)],
            [(56, 44), (90, 88)],
        ]
    ),
    glyph!(
        '火',
        [
            [(26, 28), (32, 48)],
            [(76, 24), (66, 46)],
            [(50, 8), (48, 54), (12, 92)],
            [(50, 58), (90, 90)],
        ]
    ),
    glyph!(
        '木',
        [
            [(8, 34), (92, 34)],
            [(50, 6), (50, 94)],
            [(48, 36), (12, 80)],
            [(52, 36), (90, 80)],
        ]
    ),
    glyph!(
        '金',
        [
            [(50, 6), (8, 46)],
            [(50, 6), (92, 46)],
            [(30, 44), (70, 44)],
            [(20, 62), (80, 62)],
            [(50, 44), (50, 88)],
            [(32, 70), (38, 82)],
            [(68, 70), (62, 82)],
            [(10, 90), (90, 90)],
        ]
    ),
    glyph!('土', [[(20, 42), (80, 42)], [(50, 12), (50, 86)], [(8, 88), (92, 88)]]),
    glyph!(
        '山',
        [
            [(50, 8), (50, 84)],
            [(16, 34), (16, 84), (84, 84)],
            [(84, 34), (84, 90)],
        ]
    ),
    glyph!(
        '大',
        [
            [(8, 38), (92, 38)],
            [(50, 6), (48, 52), (12, 92)],
            [(52, 52), (90, 92)],
        ]
    ),
    glyph!(
        '小',
        [
            [(50, 6), (50, 86), (40, 92)],
            [(28, 34), (12, 72)],
            [(70, 34), (88, 70)],
        ]
    ),
    glyph!(
        '中',
        [
            [(20, 28), (20, 68)],
            [(20, 28), (80, 28), (80, 68)],
            [(20, 64), (80, 64)],
            [(50, 6), (50, 94)],
        ]
    ),
    glyph!('上', [[(44, 8), (44, 88)], [(44, 44), (82, 44)], [(8, 88), (92, 88)]]),
    glyph!('下', [[(8, 14), (92, 14)], [(48, 14), (48, 94)], [(54, 40), (78, 60)]]),
    glyph!(
        '左',
        [
            [(8, 30), (92, 30)],
            [(44, 8), (38, 52), (12, 90)],
            [(40, 56), (82, 56)],
            [(60, 56), (60, 88)],
            [(32, 88), (90, 88)],
        ]
    ),
    glyph!(
        '右',
        [
            [(8, 30), (92, 30)],
            [(44, 8), (36, 56), (10, 90)],
            [(38, 60), (38, 92)],
            [(38, 60), (84, 60), (84, 92)],
            [(38, 88), (84, 88)],
        ]
    ),
    glyph!(
        '天',
        [
            [(18, 16), (82, 16)],
            [(8, 44), (92, 44)],
            [(50, 16), (48, 56), (12, 92)],
            [(52, 56), (90, 92)],
        ]
    ),
    glyph!(
        '地',
        [
            [(4, 40), (32, 40)],
            [(18, 16), (18, 78)],
            [(4, 84), (34, 72)],
            [(40, 34), (88, 26), (86, 62), (78, 66)],
            [(52, 14), (52, 70)],
            [(68, 8), (68, 66)],
            [(40, 40), (40, 84), (60, 92), (94, 92), (96, 80)],
        ]
    ),
    glyph!(
        '心',
        [
            [(12, 52), (8, 76)],
            [(32, 36), (32, 80), (40, 88), (80, 88), (84, 72)],
            [(46, 24), (58, 44)],
            [(76, 38), (92, 66)],
        ]
    ),
];
