//! Background Music Toggle
//!
//! The play button flips `#bgMusic` between playing and paused.
//! Pausing is immediate. Playing awaits the browser's play promise and only
//! then swaps the icon; a rejected play leaves the icon as it was.

use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlMediaElement};

use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToggleAction {
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackIcon {
    Play,
    Pause,
}

impl PlaybackIcon {
    pub fn markup(&self) -> &'static str {
        match self {
            PlaybackIcon::Play => r#"<i class="fas fa-play"></i>"#,
            PlaybackIcon::Pause => r#"<i class="fas fa-pause"></i>"#,
        }
    }
}

pub fn toggle_action(paused: bool) -> ToggleAction {
    if paused {
        ToggleAction::Play
    } else {
        ToggleAction::Pause
    }
}

/// Icon to show once `action` has finished with `result`
pub fn icon_after(action: ToggleAction, result: &Result<(), String>) -> Option<PlaybackIcon> {
    match (action, result) {
        (_, Err(_)) => None,
        (ToggleAction::Play, Ok(())) => Some(PlaybackIcon::Pause),
        (ToggleAction::Pause, Ok(())) => Some(PlaybackIcon::Play),
    }
}

async fn play(audio: &HtmlMediaElement) -> Result<(), String> {
    let promise = audio.play().map_err(|e| format!("{:?}", e))?;
    JsFuture::from(promise).await.map_err(|e| format!("{:?}", e))?;
    Ok(())
}

fn finish(button: &HtmlElement, action: ToggleAction, result: Result<(), String>) {
    if let Some(icon) = icon_after(action, &result) {
        button.set_inner_html(icon.markup());
    }
    if let Err(e) = result {
        warn!("Audio play/pause failed: {}", e);
    }
}

/// Wire the play button. `Ok(false)` when either anchor is missing.
pub fn bind(doc: &Document) -> Result<bool, String> {
    let (Some(audio), Some(button)) = (
        dom::by_id::<HtmlMediaElement>(doc, dom::AUDIO_ID),
        dom::by_id::<HtmlElement>(doc, dom::PLAY_BUTTON_ID),
    ) else {
        return Ok(false);
    };

    let target = button.clone();
    dom::on_click(&target, move || match toggle_action(audio.paused()) {
        ToggleAction::Play => {
            let audio = audio.clone();
            let button = button.clone();
            spawn_local(async move {
                let result = play(&audio).await;
                finish(&button, ToggleAction::Play, result);
            });
        }
        ToggleAction::Pause => {
            let result = audio.pause().map_err(|e| format!("{:?}", e));
            finish(&button, ToggleAction::Pause, result);
        }
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_state() {
        assert_eq!(toggle_action(true), ToggleAction::Play);
        assert_eq!(toggle_action(false), ToggleAction::Pause);
    }

    #[test]
    fn test_successful_play_shows_pause() {
        assert_eq!(icon_after(ToggleAction::Play, &Ok(())), Some(PlaybackIcon::Pause));
    }

    #[test]
    fn test_pause_shows_play() {
        assert_eq!(icon_after(ToggleAction::Pause, &Ok(())), Some(PlaybackIcon::Play));
    }

    #[test]
    fn test_blocked_play_keeps_icon() {
        let blocked = Err("NotAllowedError".to_string());
        assert_eq!(icon_after(ToggleAction::Play, &blocked), None);
    }

    #[test]
    fn test_icon_markup() {
        assert_eq!(PlaybackIcon::Pause.markup(), r#"<i class="fas fa-pause"></i>"#);
        assert_eq!(PlaybackIcon::Play.markup(), r#"<i class="fas fa-play"></i>"#);
    }
}
