//! Playlist model for the music card.
//!
//! Each track carries the page theme it activates: the card does not just
//! play audio, it re-skins the whole site through CSS custom properties.

/// Page palette as "R G B" component strings, applied to the `--*-rgb`
/// custom properties on the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub secondary: &'static str,
    pub panel: &'static str,
    pub gray: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub file: &'static str,
    pub cover: &'static str,
    pub hero_bg: &'static str,
    pub theme: Theme,
}

pub const TRACKS: &[Track] = &[
    Track {
        title: "The Emptiness Machine",
        artist: "Linkin Park",
        file: "assets/songs/Linkin Park- The Emptiness Machine (2013venjix Edit).mp3",
        cover: "url('assets/albumCovers/linkinCover.jpg')",
        hero_bg: "assets/backgrounds/pink.jpg",
        theme: Theme {
            bg: "0 0 0",
            text: "255 255 255",
            accent: "255 0 255",
            secondary: "255 105 180",
            panel: "20 20 20",
            gray: "128 128 128",
        },
    },
    Track {
        title: "City Walls",
        artist: "Twenty One Pilots",
        file: "assets/songs/twenty one pilots - City Walls.mp3",
        cover: "url('assets/albumCovers/twentyCover.png')",
        hero_bg: "assets/backgrounds/red.jpg",
        theme: Theme {
            bg: "0 0 0",
            text: "255 255 255",
            accent: "255 0 0",
            secondary: "139 0 0",
            panel: "20 20 20",
            gray: "128 128 128",
        },
    },
    Track {
        title: "505",
        artist: "Arctic Monkeys",
        file: "assets/songs/Arctic Monkeys- 505.mp3",
        cover: "url('assets/albumCovers/arcticCover.jpg')",
        hero_bg: "assets/backgrounds/yellow.jpg",
        theme: Theme {
            bg: "0 0 0",
            text: "255 255 255",
            accent: "255 255 0",
            secondary: "255 215 0",
            panel: "20 20 20",
            gray: "128 128 128",
        },
    },
];

/// Cyclic track selection; next/prev wrap around the playlist ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playlist {
    index: usize,
}

impl Playlist {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Track {
        &TRACKS[self.index]
    }

    pub fn next(&mut self) -> &'static Track {
        self.index = (self.index + 1) % TRACKS.len();
        self.current()
    }

    pub fn prev(&mut self) -> &'static Track {
        self.index = (self.index + TRACKS.len() - 1) % TRACKS.len();
        self.current()
    }
}

/// Play/pause intent behind the card's transport controls.
///
/// Playing is entered optimistically: the UI reflects playback as soon as
/// the request is made, and rolls back through [`Self::play_rejected`]
/// when the platform vetoes it (autoplay policy, missing gesture).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    playing: bool,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play_requested(&mut self) {
        self.playing = true;
    }

    /// The platform refused the play request; fall back to paused.
    pub fn play_rejected(&mut self) {
        self.playing = false;
    }

    pub fn paused(&mut self) {
        self.playing = false;
    }
}

/// Fraction of the track played, or `None` while the duration is unknown
/// (the media element reports NaN before metadata arrives).
pub fn playback_fraction(current_time: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some((current_time / duration).clamp(0.0, 1.0))
}

/// Seek target for a click at `click_x` inside a progress bar of `width`.
pub fn seek_time(click_x: f64, width: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || width <= 0.0 {
        return None;
    }
    Some((click_x / width).clamp(0.0, 1.0) * duration)
}
