//! Colour palettes for the light and dark themes.

use crate::fb::{CellStyle, Rgb};
use crate::types::Theme;

/// Every colour the game view uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background and plain text.
    pub screen: CellStyle,
    /// Board frame and title.
    pub frame: CellStyle,
    /// Face-down card: border and `?`.
    pub card_back: CellStyle,
    /// Face-up card awaiting evaluation.
    pub card_face: CellStyle,
    /// Matched card.
    pub card_matched: CellStyle,
    /// Border of the card under the keyboard cursor.
    pub cursor: CellStyle,
    /// Side panel headings.
    pub label: CellStyle,
    /// Side panel values.
    pub value: CellStyle,
    /// Win summary box.
    pub overlay: CellStyle,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        let bg = Rgb::new(245, 245, 250);
        Self {
            screen: CellStyle::new(Rgb::new(40, 40, 60), bg),
            frame: CellStyle::new(Rgb::new(102, 126, 234), bg),
            card_back: CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(118, 75, 162)).bold(),
            card_face: CellStyle::new(Rgb::new(30, 30, 50), Rgb::new(255, 255, 255)).bold(),
            card_matched: CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(72, 187, 120)),
            cursor: CellStyle::new(Rgb::new(237, 137, 54), bg).bold(),
            label: CellStyle::new(Rgb::new(102, 126, 234), bg).bold(),
            value: CellStyle::new(Rgb::new(40, 40, 60), bg),
            overlay: CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(102, 126, 234)).bold(),
        }
    }

    pub fn dark() -> Self {
        let bg = Rgb::new(26, 32, 44);
        Self {
            screen: CellStyle::new(Rgb::new(226, 232, 240), bg),
            frame: CellStyle::new(Rgb::new(160, 174, 192), bg),
            card_back: CellStyle::new(Rgb::new(226, 232, 240), Rgb::new(74, 85, 104)).bold(),
            card_face: CellStyle::new(Rgb::new(26, 32, 44), Rgb::new(226, 232, 240)).bold(),
            card_matched: CellStyle::new(Rgb::new(26, 32, 44), Rgb::new(104, 211, 145)),
            cursor: CellStyle::new(Rgb::new(246, 173, 85), bg).bold(),
            label: CellStyle::new(Rgb::new(144, 205, 244), bg).bold(),
            value: CellStyle::new(Rgb::new(226, 232, 240), bg),
            overlay: CellStyle::new(Rgb::new(26, 32, 44), Rgb::new(144, 205, 244)).bold(),
        }
    }
}
