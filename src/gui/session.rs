//! Per-window view state
//!
//! Everything the user can change during a session lives here: the album
//! carousel and the two section disclosures. Components never touch it
//! directly; they report [`FrameActions`] which are applied after drawing.

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use crate::carousel::{Carousel, CarouselCommand};
use crate::config::ProfileRecord;
use crate::disclosure::Disclosure;

/// What the user asked for during one frame
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameActions {
    /// Applied in order; keyboard presses come before clicks
    pub carousel: Vec<CarouselCommand>,
    pub toggle_basic_info: bool,
    pub toggle_family_details: bool,
    pub view_album: bool,
}

pub struct Session {
    pub carousel: Carousel,
    pub basic_info: Disclosure,
    pub family_details: Disclosure,
    album_requested: bool,
}

impl Session {
    pub fn new(profile: &ProfileRecord) -> Result<Self> {
        let slides = profile
            .slide_count()
            .ok_or_else(|| anyhow!("Profile '{}' has no album slides", profile.name))?;

        info!(
            slides = slides.get(),
            basic_info_rows = profile.basic_info.len(),
            family_rows = profile.family_details.len(),
            basic_info_open = profile.basic_info_open,
            family_details_open = profile.family_details_open,
            "Starting portfolio session"
        );

        Ok(Self {
            carousel: Carousel::new(slides),
            basic_info: Disclosure::new("Basic Info", profile.basic_info_open),
            family_details: Disclosure::new("Family Details", profile.family_details_open),
            album_requested: false,
        })
    }

    /// Apply one frame's actions; returns true if anything visible changed
    pub fn apply(&mut self, actions: FrameActions) -> bool {
        let mut changed = false;

        for command in actions.carousel {
            changed |= self.carousel.apply(command).changed();
        }
        if actions.toggle_basic_info {
            self.basic_info.toggle();
            changed = true;
        }
        if actions.toggle_family_details {
            self.family_details.toggle();
            changed = true;
        }
        if actions.view_album {
            debug!("Album view requested");
            self.album_requested = true;
            changed = true;
        }

        changed
    }

    /// Consume a pending "View Album" request
    pub fn take_album_request(&mut self) -> bool {
        std::mem::take(&mut self.album_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&ProfileRecord::default()).unwrap()
    }

    #[test]
    fn test_new_session_uses_profile_defaults() {
        let s = session();
        assert_eq!(s.carousel.len(), 4);
        assert_eq!(s.carousel.current().get(), 0);
        assert!(s.basic_info.is_open());
        assert!(!s.family_details.is_open());
    }

    #[test]
    fn test_empty_profile_is_rejected() {
        let profile = ProfileRecord {
            slides: Vec::new(),
            ..ProfileRecord::default()
        };
        assert!(Session::new(&profile).is_err());
    }

    #[test]
    fn test_apply_routes_commands() {
        let mut s = session();

        assert!(s.apply(FrameActions {
            carousel: vec![CarouselCommand::Previous],
            ..FrameActions::default()
        }));
        assert_eq!(s.carousel.current().get(), 3);

        assert!(s.apply(FrameActions {
            toggle_family_details: true,
            ..FrameActions::default()
        }));
        assert!(s.family_details.is_open());
        assert!(s.basic_info.is_open());
    }

    #[test]
    fn test_no_actions_means_no_change() {
        let mut s = session();
        assert!(!s.apply(FrameActions::default()));
    }

    #[test]
    fn test_jump_to_current_slide_is_not_a_change() {
        let mut s = session();
        let first = s.carousel.current();
        assert!(!s.apply(FrameActions {
            carousel: vec![CarouselCommand::JumpTo(first)],
            ..FrameActions::default()
        }));
    }

    #[test]
    fn test_every_command_in_a_frame_is_applied() {
        let mut s = session();
        let last = s.carousel.indices().last().unwrap();
        // Two arrow presses followed by an indicator click in the same frame
        assert!(s.apply(FrameActions {
            carousel: vec![CarouselCommand::Next, CarouselCommand::Next],
            ..FrameActions::default()
        }));
        assert_eq!(s.carousel.current().get(), 2);

        s.apply(FrameActions {
            carousel: vec![CarouselCommand::Previous, CarouselCommand::JumpTo(last)],
            ..FrameActions::default()
        });
        assert_eq!(s.carousel.current(), last);

        s.apply(FrameActions {
            carousel: vec![CarouselCommand::JumpTo(last), CarouselCommand::Next],
            ..FrameActions::default()
        });
        assert_eq!(s.carousel.current().get(), 0);
    }

    #[test]
    fn test_album_request_is_consumed_once() {
        let mut s = session();
        s.apply(FrameActions {
            view_album: true,
            ..FrameActions::default()
        });
        assert!(s.take_album_request());
        assert!(!s.take_album_request());
        // View Album never moves the carousel
        assert_eq!(s.carousel.current().get(), 0);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut a = session();
        let b = session();
        a.apply(FrameActions {
            carousel: vec![CarouselCommand::Next],
            toggle_basic_info: true,
            ..FrameActions::default()
        });
        assert_eq!(b.carousel.current().get(), 0);
        assert!(b.basic_info.is_open());
    }
}
