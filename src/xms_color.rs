// Terminal color handling for the minefield glyphs
// The classic number palette is defined as RGB and degraded to 256-color
// indices or basic ANSI depending on what the terminal reports

use ratatui::style::Color;
use term_color_support::ColorSupport;

// (truecolor RGB, 256-color index, basic ANSI fallback)
type Swatch = ((u8, u8, u8), u8, Color);

/// Digit colors 1-8 as sampled from the classic game
const DIGIT_SWATCHES: [Swatch; 8] = [
    ((0, 0, 255), 21, Color::Blue),          // 1
    ((0, 128, 0), 28, Color::Green),         // 2
    ((255, 0, 0), 196, Color::Red),          // 3
    ((0, 0, 128), 18, Color::Blue),          // 4
    ((128, 0, 0), 88, Color::Red),           // 5
    ((0, 128, 128), 30, Color::Cyan),        // 6
    ((0, 0, 0), 16, Color::Black),           // 7
    ((128, 128, 128), 244, Color::DarkGray), // 8
];

fn pick(swatch: Swatch) -> Color {
    let support = ColorSupport::stdout();
    let ((r, g, b), index256, basic) = swatch;
    if support.has_16m {
        Color::Rgb(r, g, b)
    } else if support.has_256 {
        Color::Indexed(index256)
    } else {
        basic
    }
}

/// Foreground color for an adjacency digit (1-8)
pub fn digit_color(n: u8) -> Color {
    let idx = (n.clamp(1, 8) - 1) as usize;
    pick(DIGIT_SWATCHES[idx])
}

/// A trait to extend Ratatui's Color with capability-aware degradation
/// for the handful of ANSI colors the widget chrome uses.
pub trait TermMatch {
    fn tmatch(self) -> Color;
}

impl TermMatch for Color {
    fn tmatch(self) -> Color {
        let swatch = match self {
            Color::Black => ((12, 12, 12), 232, self),
            Color::Red => ((197, 15, 31), 160, self),
            Color::Green => ((19, 161, 14), 28, self),
            Color::Yellow => ((193, 156, 0), 178, self),
            Color::Gray => ((204, 204, 204), 250, self),
            Color::DarkGray => ((118, 118, 118), 243, self),
            Color::LightBlue => ((59, 120, 255), 63, self),
            Color::White => ((242, 242, 242), 255, self),
            // Custom RGB or Indexed colors are returned as-is
            _ => return self,
        };
        pick(swatch)
    }
}
