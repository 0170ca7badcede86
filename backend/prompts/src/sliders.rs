//! Lyric slider positions and the labels they select.
//!
//! Sliders run 0..=100 and snap to five stops: 0, 25, 50, 75, 100.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Snaps a raw slider value to its stop. Anything past 87, including NaN,
/// lands on 100.
pub fn snap(value: f64) -> u8 {
    if value <= 12.0 {
        0
    } else if value <= 37.0 {
        25
    } else if value <= 62.0 {
        50
    } else if value <= 87.0 {
        75
    } else {
        100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Sad,
    Eerie,
    Nostalgic,
    Hopeful,
    Happy,
}

impl Tone {
    /// Maps a snapped stop to a tone; off-stop values read as `Happy`.
    pub fn from_slider(stop: u8) -> Self {
        match stop {
            0 => Tone::Sad,
            25 => Tone::Eerie,
            50 => Tone::Nostalgic,
            75 => Tone::Hopeful,
            _ => Tone::Happy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Sad => "Sad",
            Tone::Eerie => "Eerie",
            Tone::Nostalgic => "Nostalgic",
            Tone::Hopeful => "Hopeful",
            Tone::Happy => "Happy",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diction {
    Conversational,
    Storytelling,
    Intimate,
    Poetic,
    Abstract,
}

impl Diction {
    /// Maps a snapped stop to a diction; off-stop values read as `Abstract`.
    pub fn from_slider(stop: u8) -> Self {
        match stop {
            0 => Diction::Conversational,
            25 => Diction::Storytelling,
            50 => Diction::Intimate,
            75 => Diction::Poetic,
            _ => Diction::Abstract,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Diction::Conversational => "Conversational",
            Diction::Storytelling => "Storytelling",
            Diction::Intimate => "Intimate",
            Diction::Poetic => "Poetic",
            Diction::Abstract => "Abstract",
        }
    }
}

impl fmt::Display for Diction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_zone_boundaries() {
        assert_eq!(snap(-5.0), 0);
        assert_eq!(snap(12.0), 0);
        assert_eq!(snap(12.5), 25);
        assert_eq!(snap(37.0), 25);
        assert_eq!(snap(50.0), 50);
        assert_eq!(snap(62.0), 50);
        assert_eq!(snap(87.0), 75);
        assert_eq!(snap(88.0), 100);
        assert_eq!(snap(f64::NAN), 100);
    }

    #[test]
    fn maps_stops_to_tone() {
        let tones = [0, 25, 50, 75, 100].map(Tone::from_slider);
        assert_eq!(
            tones,
            [Tone::Sad, Tone::Eerie, Tone::Nostalgic, Tone::Hopeful, Tone::Happy]
        );
        assert_eq!(Tone::from_slider(30), Tone::Happy);
    }

    #[test]
    fn maps_stops_to_diction() {
        assert_eq!(Diction::from_slider(0), Diction::Conversational);
        assert_eq!(Diction::from_slider(snap(40.0)), Diction::Intimate);
        assert_eq!(Diction::from_slider(snap(99.0)).to_string(), "Abstract");
    }

    #[test]
    fn displays_label() {
        assert_eq!(format!("Tone: {}", Tone::from_slider(snap(70.0))), "Tone: Hopeful");
    }
}
