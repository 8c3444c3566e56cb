use std::fmt;
use std::str::FromStr;

use crate::error::ParseBoardSizeError;

/// Board size presets offered on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    /// (height, width) of the preset
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            BoardSize::Small => (4, 5),
            BoardSize::Medium => (6, 8),
            BoardSize::Large => (8, 11),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoardSize::Small => "small",
            BoardSize::Medium => "medium",
            BoardSize::Large => "large",
        }
    }

    /// Next preset down the menu, wrapping around
    pub fn next(self) -> BoardSize {
        match self {
            BoardSize::Small => BoardSize::Medium,
            BoardSize::Medium => BoardSize::Large,
            BoardSize::Large => BoardSize::Small,
        }
    }

    /// Previous preset up the menu, wrapping around
    pub fn prev(self) -> BoardSize {
        match self {
            BoardSize::Small => BoardSize::Large,
            BoardSize::Medium => BoardSize::Small,
            BoardSize::Large => BoardSize::Medium,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBoardSizeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_dimensions() {
        assert_eq!(BoardSize::Small.dimensions(), (4, 5));
        assert_eq!(BoardSize::Medium.dimensions(), (6, 8));
        assert_eq!(BoardSize::Large.dimensions(), (8, 11));
        assert_eq!(BoardSize::default(), BoardSize::Medium);
    }

    #[test]
    fn test_parse() {
        assert_eq!("small".parse::<BoardSize>().unwrap(), BoardSize::Small);
        assert_eq!(" Large ".parse::<BoardSize>().unwrap(), BoardSize::Large);
        assert_eq!(
            "huge".parse::<BoardSize>(),
            Err(ParseBoardSizeError("huge".to_string()))
        );
    }

    #[test]
    fn test_menu_cycling() {
        for size in BoardSize::ALL {
            assert_eq!(size.next().prev(), size);
        }
        assert_eq!(BoardSize::Large.next(), BoardSize::Small);
        assert_eq!(BoardSize::Small.prev(), BoardSize::Large);
    }
}
