//! Carousel state machine for the album
//!
//! Tracks which of a fixed number of slides is visible. The slide count is set
//! once at construction and never changes, so every index handed out by a
//! carousel stays valid for that carousel's lifetime.

use std::fmt;
use std::num::NonZeroUsize;

use tracing::{debug, warn};

/// Position of a slide inside a carousel (0-based).
///
/// Only a [`Carousel`] can mint these, which keeps raw out-of-range integers
/// away from [`Carousel::jump_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideIndex(usize);

impl SlideIndex {
    /// 0-based position
    pub fn get(self) -> usize {
        self.0
    }

    /// 1-based position used in labels ("Slide 3", "Go to slide 3")
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

/// Commands the view can issue against a carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Previous,
    Next,
    JumpTo(SlideIndex),
}

/// Outcome of a carousel command, reported synchronously to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SlideIndex,
    pub to: SlideIndex,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: NonZeroUsize,
    index: usize,
}

impl Carousel {
    /// Create a carousel over `len` slides, starting at the first one
    pub fn new(len: NonZeroUsize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Currently visible slide
    pub fn current(&self) -> SlideIndex {
        SlideIndex(self.index)
    }

    /// Validated index for `position`, or `None` if it is past the last slide
    pub fn index(&self, position: usize) -> Option<SlideIndex> {
        (position < self.len()).then_some(SlideIndex(position))
    }

    /// Every slide position in order, for building indicator rows
    pub fn indices(&self) -> impl Iterator<Item = SlideIndex> + use<> {
        (0..self.len()).map(SlideIndex)
    }

    pub fn is_current(&self, slide: SlideIndex) -> bool {
        slide.0 == self.index
    }

    /// Step back one slide, wrapping from the first to the last
    pub fn previous(&mut self) -> Transition {
        let len = self.len();
        self.move_to((self.index + len - 1) % len)
    }

    /// Step forward one slide, wrapping from the last to the first
    pub fn next(&mut self) -> Transition {
        self.move_to((self.index + 1) % self.len())
    }

    /// Show `slide` directly.
    ///
    /// An index minted by a longer carousel is ignored and leaves the
    /// current slide unchanged.
    pub fn jump_to(&mut self, slide: SlideIndex) -> Transition {
        if slide.0 >= self.len() {
            warn!(slide = slide.0, len = self.len(), "Ignoring jump to slide outside carousel");
            return Transition {
                from: self.current(),
                to: self.current(),
            };
        }
        self.move_to(slide.0)
    }

    pub fn apply(&mut self, command: CarouselCommand) -> Transition {
        match command {
            CarouselCommand::Previous => self.previous(),
            CarouselCommand::Next => self.next(),
            CarouselCommand::JumpTo(slide) => self.jump_to(slide),
        }
    }

    fn move_to(&mut self, index: usize) -> Transition {
        let from = self.current();
        self.index = index;
        let transition = Transition {
            from,
            to: self.current(),
        };
        debug!(from = %transition.from, to = %transition.to, len = self.len(), "Carousel moved");
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_starts_at_first_slide() {
        let c = carousel(4);
        assert_eq!(c.current().get(), 0);
        assert_eq!(c.current().ordinal(), 1);
    }

    #[test]
    fn test_next_wraps_after_last_slide() {
        let mut c = carousel(4);
        let visited: Vec<usize> = (0..4).map(|_| c.next().to.get()).collect();
        assert_eq!(visited, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_previous_wraps_from_first_slide() {
        let mut c = carousel(4);
        let t = c.previous();
        assert_eq!(t.from.get(), 0);
        assert_eq!(t.to.get(), 3);
        assert!(t.changed());
    }

    #[test]
    fn test_single_slide_never_moves() {
        let mut c = carousel(1);
        assert!(!c.next().changed());
        assert!(!c.previous().changed());
        assert_eq!(c.current().get(), 0);
    }

    #[test]
    fn test_index_matches_net_steps_for_mixed_sequences() {
        // Deterministic pseudo-random walks over several sizes
        for len in 1..=9usize {
            let mut c = carousel(len);
            let mut seed: u32 = 0x2545_F491 ^ len as u32;
            let mut net: i64 = 0;
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 3 == 0 {
                    c.previous();
                    net -= 1;
                } else {
                    c.next();
                    net += 1;
                }
                assert!(c.current().get() < len);
                assert_eq!(c.current().get() as i64, net.rem_euclid(len as i64));
            }
        }
    }

    #[test]
    fn test_previous_undoes_next() {
        for len in 1..=6 {
            let mut c = carousel(len);
            for start in c.indices() {
                c.jump_to(start);
                c.next();
                c.previous();
                assert_eq!(c.current(), start);
                c.previous();
                c.next();
                assert_eq!(c.current(), start);
            }
        }
    }

    #[test]
    fn test_jump_to_is_idempotent() {
        let mut c = carousel(5);
        let target = c.index(3).unwrap();
        let first = c.jump_to(target);
        assert_eq!(first.to, target);
        assert!(first.changed());

        let second = c.jump_to(target);
        assert_eq!(c.current(), target);
        assert!(!second.changed());
    }

    #[test]
    fn test_index_rejects_out_of_range_positions() {
        let c = carousel(4);
        assert!(c.index(3).is_some());
        assert!(c.index(4).is_none());
        assert!(c.index(usize::MAX).is_none());
    }

    #[test]
    fn test_jump_with_index_from_longer_carousel_is_ignored() {
        let long = carousel(10);
        let mut short = carousel(4);
        short.next();

        let foreign = long.index(7).unwrap();
        let t = short.jump_to(foreign);
        assert!(!t.changed());
        assert_eq!(short.current().get(), 1);
    }

    #[test]
    fn test_indices_cover_every_slide_once() {
        let c = carousel(4);
        let all: Vec<usize> = c.indices().map(SlideIndex::get).collect();
        assert_eq!(all, vec![0, 1, 2, 3]);
        assert_eq!(c.indices().filter(|i| c.is_current(*i)).count(), 1);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut c = carousel(4);
        c.apply(CarouselCommand::Next);
        c.apply(CarouselCommand::Next);
        assert_eq!(c.current().get(), 2);
        c.apply(CarouselCommand::Previous);
        assert_eq!(c.current().get(), 1);
        let last = c.index(3).unwrap();
        c.apply(CarouselCommand::JumpTo(last));
        assert_eq!(c.current(), last);
    }

    #[test]
    fn test_slide_index_displays_one_based() {
        let c = carousel(4);
        assert_eq!(c.index(2).unwrap().to_string(), "3");
    }
}
