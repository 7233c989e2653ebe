//! Music card: three-track playlist with per-track page theming, dynamic
//! favicon and a seekable playback bar.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::player::{playback_fraction, seek_time, PlaybackState, Playlist, Track};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{
    ALBUM_ART_ID, ARTIST_NAME_ID, HERO_BG_ID, MUSIC_CARD_ID, NEXT_BTN_ID, PLAYBACK_BAR_ID,
    PLAYBACK_CONTAINER_ID, PLAY_BTN_ID, PREV_BTN_ID, SONG_TITLE_ID,
};
use crate::dom;

const PLAY_ICON: &str = "<i class=\"fas fa-play\"></i>";
const PAUSE_ICON: &str = "<i class=\"fas fa-pause\"></i>";
const ERROR_ICON: &str = "<i class=\"fas fa-exclamation-triangle text-red-500\"></i>";

struct PlayerDom {
    card: web::HtmlElement,
    album_art: Option<web::HtmlElement>,
    title: Option<web::HtmlElement>,
    artist: Option<web::HtmlElement>,
    play_btn: web::HtmlElement,
    playback_bar: Option<web::HtmlElement>,
}

struct Player {
    audio: web::HtmlAudioElement,
    playlist: Playlist,
    playback: PlaybackState,
    dom: PlayerDom,
}

impl Player {
    /// Point every themed surface at `track`: card text, album art, hero
    /// backdrop, the page-wide CSS palette and the favicon.
    fn load_current(&mut self, document: &web::Document) {
        let track = self.playlist.current();
        if let Some(title) = &self.dom.title {
            title.set_inner_text(track.title);
        }
        if let Some(artist) = &self.dom.artist {
            artist.set_inner_text(track.artist);
        }
        if let Some(art) = &self.dom.album_art {
            // `cover` already carries the url(...) wrapper.
            dom::set_style(art, "background-image", track.cover);
            dom::set_style(art, "background-size", "cover");
        }
        if let Some(hero) = dom::element_by_id(document, HERO_BG_ID) {
            dom::set_style(&hero, "background-image", &format!("url('{}')", track.hero_bg));
        }
        self.audio.set_src(track.file);
        apply_theme(document, track);
        set_favicon(document, track);
        if let Some(bar) = &self.dom.playback_bar {
            dom::set_style(bar, "width", "0%");
        }
    }

    fn reflect_playing(&self) {
        let playing = self.playback.is_playing();
        self.dom
            .play_btn
            .set_inner_html(if playing { PAUSE_ICON } else { PLAY_ICON });
        let list = self.dom.card.class_list();
        let _ = if playing {
            list.remove_1("paused")
        } else {
            list.add_1("paused")
        };
    }

    fn pause(&mut self) {
        self.playback.paused();
        self.reflect_playing();
        let _ = self.audio.pause();
    }
}

/// Start playback, optimistically flipping the card into the playing
/// state. If the platform rejects the play promise (autoplay veto) the
/// card rolls back to paused, so the first real click starts playback
/// instead of "pausing" audio that never ran.
fn play(player: &Rc<RefCell<Player>>) {
    let promise = {
        let mut p = player.borrow_mut();
        p.playback.play_requested();
        p.reflect_playing();
        p.audio.play()
    };
    match promise {
        Ok(promise) => {
            let player = player.clone();
            let rejected = Closure::once(move |_: JsValue| {
                log::info!("[music] play rejected; waiting for a gesture");
                let mut p = player.borrow_mut();
                p.playback.play_rejected();
                p.reflect_playing();
            });
            let _ = promise.catch(&rejected);
            rejected.forget();
        }
        Err(_) => {
            let mut p = player.borrow_mut();
            p.playback.play_rejected();
            p.reflect_playing();
        }
    }
}

fn apply_theme(document: &web::Document, track: &Track) {
    let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let theme = &track.theme;
    for (prop, rgb) in [
        ("--bg-rgb", theme.bg),
        ("--text-rgb", theme.text),
        ("--accent-rgb", theme.accent),
        ("--secondary-rgb", theme.secondary),
        ("--panel-rgb", theme.panel),
        ("--gray-rgb", theme.gray),
    ] {
        dom::set_style(&root, prop, rgb);
    }
}

// Font Awesome "code" glyph, tinted per track.
const FAVICON_GLYPH: &str = "M392.8 1.2c-17-4.9-34.7 5-39.6 22l-128 448c-4.9 17 5 34.7 22 39.6s34.7-5 39.6-22l128-448c4.9-17-5-34.7-22-39.6zm80.6 120.1c-12.5 12.5-12.5 32.8 0 45.3L562.7 256l-89.4 89.4c-12.5 12.5-12.5 32.8 0 45.3s32.8 12.5 45.3 0l112-112c12.5-12.5 12.5-32.8 0-45.3l-112-112c-12.5-12.5-32.8-12.5-45.3 0zm-306.7 0c-12.5-12.5-32.8-12.5-45.3 0l-112 112c-12.5 12.5-12.5 32.8 0 45.3l112 112c12.5 12.5 32.8 12.5 45.3 0s12.5-32.8 0-45.3L77.3 256l89.4-89.4c12.5-12.5 12.5-32.8 0-45.3z";

/// Swap the favicon for the code glyph tinted with the track's accent.
fn set_favicon(document: &web::Document, track: &Track) {
    // Space-separated components are valid inside rgb().
    let rgb = track.theme.accent;
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 640 512\">\
         <path fill=\"rgb({rgb})\" d=\"{FAVICON_GLYPH}\"/></svg>"
    );
    let result = (|| -> Result<(), JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(&svg));
        let opts = web::BlobPropertyBag::new();
        opts.set_type("image/svg+xml");
        let blob = web::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
        let url = web::Url::create_object_url_with_blob(&blob)?;

        let head = document.head().ok_or_else(|| JsValue::from_str("no head"))?;
        let link: web::HtmlLinkElement = document.create_element("link")?.dyn_into()?;
        link.set_rel("icon");
        link.set_type("image/svg+xml");
        link.set_href(&url);
        if let Some(old) = document.query_selector("link[rel='icon']")? {
            old.remove();
        }
        head.append_child(&link)?;
        Ok(())
    })();
    if result.is_err() {
        log::warn!("[music] favicon swap failed");
    }
}

pub fn wire(document: &web::Document) {
    let (Some(card), Some(play_btn)) = (
        dom::element_by_id(document, MUSIC_CARD_ID),
        dom::element_by_id(document, PLAY_BTN_ID),
    ) else {
        log::info!("[music] player markup missing; skipping");
        return;
    };
    let Ok(audio) = web::HtmlAudioElement::new() else {
        log::warn!("[music] audio element unavailable");
        return;
    };
    audio.set_volume(0.5);

    let player = Rc::new(RefCell::new(Player {
        audio: audio.clone(),
        playlist: Playlist::default(),
        playback: PlaybackState::default(),
        dom: PlayerDom {
            card,
            album_art: dom::element_by_id(document, ALBUM_ART_ID),
            title: dom::element_by_id(document, SONG_TITLE_ID),
            artist: dom::element_by_id(document, ARTIST_NAME_ID),
            play_btn: play_btn.clone(),
            playback_bar: dom::element_by_id(document, PLAYBACK_BAR_ID),
        },
    }));
    player.borrow_mut().load_current(document);

    {
        let player = player.clone();
        dom::on_click(&play_btn, move || {
            let playing = player.borrow().playback.is_playing();
            if playing {
                player.borrow_mut().pause();
            } else {
                play(&player);
            }
        });
    }

    // Changing track always starts playback, matching the card's controls.
    if let Some(next_btn) = dom::element_by_id(document, NEXT_BTN_ID) {
        let player = player.clone();
        let document = document.clone();
        dom::on_click(&next_btn, move || {
            {
                let mut p = player.borrow_mut();
                p.playlist.next();
                p.load_current(&document);
            }
            play(&player);
        });
    }
    if let Some(prev_btn) = dom::element_by_id(document, PREV_BTN_ID) {
        let player = player.clone();
        let document = document.clone();
        dom::on_click(&prev_btn, move || {
            {
                let mut p = player.borrow_mut();
                p.playlist.prev();
                p.load_current(&document);
            }
            play(&player);
        });
    }

    // Playback bar follows the media clock.
    {
        let player = player.clone();
        dom::on_event(&audio, "timeupdate", move |_| {
            let p = player.borrow();
            let Some(fraction) = playback_fraction(p.audio.current_time(), p.audio.duration())
            else {
                return;
            };
            if let Some(bar) = &p.dom.playback_bar {
                dom::set_style(bar, "width", &format!("{}%", fraction * 100.0));
            }
        });
    }

    // Track ran out: advance and keep playing.
    {
        let player = player.clone();
        let document = document.clone();
        dom::on_event(&audio, "ended", move |_| {
            {
                let mut p = player.borrow_mut();
                p.playlist.next();
                p.load_current(&document);
            }
            play(&player);
        });
    }

    {
        let player = player.clone();
        dom::on_event(&audio, "error", move |_| {
            log::warn!("[music] media error on current track");
            let mut p = player.borrow_mut();
            p.playback.paused();
            p.dom.play_btn.set_inner_html(ERROR_ICON);
            let _ = p.dom.card.class_list().add_1("paused");
        });
    }

    // Click-to-seek on the playback container.
    if let Some(container) = dom::element_by_id(document, PLAYBACK_CONTAINER_ID) {
        let player = player.clone();
        let container_for_width = container.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let p = player.borrow();
            let width = container_for_width.client_width() as f64;
            if let Some(t) = seek_time(ev.offset_x() as f64, width, p.audio.duration()) {
                p.audio.set_current_time(t);
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Best-effort autoplay; browsers usually veto it until a gesture, in
    // which case the rejection handler leaves the card paused.
    play(&player);
    log::info!("[music] player wired, {} tracks", portfolio_core::player::TRACKS.len());
}
