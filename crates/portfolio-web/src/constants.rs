// DOM ids, selectors and class hooks the page markup provides.

// Loader splash
pub const LOADER_ID: &str = "loader";
pub const LOADER_BAR_ID: &str = "loader-bar";
pub const LOADER_PERCENT_ID: &str = "progress";

// Project carousel
pub const CAROUSEL_WRAPPER_ID: &str = "projects-wrapper";
pub const CAROUSEL_TRACK_ID: &str = "projects-track";
pub const CAROUSEL_PROGRESS_ID: &str = "project-progress";
pub const CAROUSEL_COUNTER_ID: &str = "project-counter";
pub const PARALLAX_IMG_SELECTOR: &str = ".parallax-img";
pub const GRABBING_CLASS: &str = "active:cursor-grabbing";

// Cursor follower
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_RING_SELECTOR: &str = ".cursor-ring";
pub const HOVER_TRIGGER_SELECTOR: &str = ".hover-trigger, a, button, .project-img";
pub const CURSOR_HOVER_CLASS: &str = "cursor-hover";

// Decorative petals
pub const PETALS_CONTAINER_ID: &str = "petals-container";

// Scroll effects
pub const HERO_BG_ID: &str = "hero-bg";
pub const NAVBAR_ID: &str = "navbar";
pub const NAVBAR_SHADOW_CLASS: &str = "shadow-lg";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const REVEAL_SELECTOR: &str = ".gs-reveal";
pub const FADE_IN_SELECTOR: &str = ".gs-fade-in";
pub const VISIBLE_CLASS: &str = "is-visible";

// Mobile drawer
pub const MENU_BTN_ID: &str = "menu-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_BACKDROP_ID: &str = "mobile-menu-backdrop";
pub const MOBILE_LINK_SELECTOR: &str = ".mobile-link";

// Music card
pub const MUSIC_CARD_ID: &str = "music-card";
pub const ALBUM_ART_ID: &str = "album-art";
pub const SONG_TITLE_ID: &str = "song-title";
pub const ARTIST_NAME_ID: &str = "artist-name";
pub const PLAY_BTN_ID: &str = "play-btn";
pub const PREV_BTN_ID: &str = "prev-btn";
pub const NEXT_BTN_ID: &str = "next-btn";
pub const PLAYBACK_CONTAINER_ID: &str = "progress-container";
pub const PLAYBACK_BAR_ID: &str = "progress-bar";

// Locale switch
pub const LANG_TOGGLE_DESKTOP_ID: &str = "lang-toggle-desktop";
pub const LANG_TOGGLE_MOBILE_ID: &str = "lang-toggle-mobile";
pub const CURRENT_LANG_DESKTOP_ID: &str = "current-lang-desktop";
pub const CURRENT_LANG_MOBILE_ID: &str = "current-lang-mobile";
pub const TRANSLATED_NODE_SELECTOR: &str = "[data-lang]";
pub const CV_LINK_SELECTOR: &str = "a[href*='cv']";
pub const JOURNEY_TOGGLE_SELECTOR: &str = "[data-journey-toggle]";
