// Host-side tests for the music card playlist model.

use portfolio_core::player::{playback_fraction, seek_time, PlaybackState, Playlist, TRACKS};

#[test]
fn next_and_prev_wrap_around_the_playlist() {
    let mut playlist = Playlist::default();
    assert_eq!(playlist.index(), 0);

    for expected in [1, 2, 0, 1] {
        playlist.next();
        assert_eq!(playlist.index(), expected);
    }

    let mut playlist = Playlist::default();
    playlist.prev();
    assert_eq!(playlist.index(), TRACKS.len() - 1);
}

#[test]
fn every_track_carries_a_complete_theme() {
    assert_eq!(TRACKS.len(), 3);
    for track in TRACKS {
        assert!(!track.title.is_empty());
        assert!(!track.file.is_empty());
        // Accent drives the favicon tint; "R G B" needs three components.
        assert_eq!(track.theme.accent.split_whitespace().count(), 3);
    }
}

#[test]
fn rejected_play_request_falls_back_to_paused() {
    let mut state = PlaybackState::default();
    assert!(!state.is_playing());

    // Autoplay attempt: optimistic until the platform answers.
    state.play_requested();
    assert!(state.is_playing());

    // Autoplay veto rolls the card back, so the next play request is a
    // fresh start rather than a pause of audio that never ran.
    state.play_rejected();
    assert!(!state.is_playing());

    state.play_requested();
    assert!(state.is_playing());
    state.paused();
    assert!(!state.is_playing());
}

#[test]
fn playback_fraction_guards_unknown_duration() {
    // Media elements report NaN before metadata arrives.
    assert_eq!(playback_fraction(10.0, f64::NAN), None);
    assert_eq!(playback_fraction(10.0, 0.0), None);
    assert_eq!(playback_fraction(10.0, f64::INFINITY), None);

    let f = playback_fraction(30.0, 120.0).unwrap();
    assert!((f - 0.25).abs() < 1e-12);
    // Reported time can momentarily overshoot the duration.
    assert_eq!(playback_fraction(130.0, 120.0), Some(1.0));
}

#[test]
fn seek_time_maps_click_position_onto_the_duration() {
    assert_eq!(seek_time(50.0, 200.0, 120.0), Some(30.0));
    assert_eq!(seek_time(0.0, 200.0, 120.0), Some(0.0));
    assert_eq!(seek_time(250.0, 200.0, 120.0), Some(120.0));
    assert_eq!(seek_time(50.0, 0.0, 120.0), None);
    assert_eq!(seek_time(50.0, 200.0, f64::NAN), None);
}
