//! Image Carousel
//!
//! Navigation state for the images of a post. Purely local: nothing here is
//! persisted or sent to the backend.

use crate::models::Post;

/// Current position within an ordered set of images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Carousel over `len` images, starting at the first
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn for_post(post: &Post) -> Self {
        Self::new(post.image_urls.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Previous/next controls only make sense with two or more images
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// Advance one image, wrapping from the last back to the first
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back one image, wrapping from the first to the last
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// "2 / 3" style counter, shown only when there is more than one image
    pub fn position_label(&self) -> Option<String> {
        self.has_controls()
            .then(|| format!("{} / {}", self.index + 1, self.len))
    }

    /// The image at the current position
    pub fn current<'a>(&self, urls: &'a [String]) -> Option<&'a str> {
        urls.get(self.index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::post_with_images;

    #[test]
    fn test_next_wraps_to_start() {
        let post = post_with_images(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut carousel = Carousel::for_post(&post);
        assert_eq!(carousel.current(&post.image_urls), Some("a.jpg"));

        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.current(&post.image_urls), Some("c.jpg"));

        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_origin() {
        for len in 2..8 {
            let mut carousel = Carousel::new(len);
            carousel.next();
            let origin = carousel.index();
            for _ in 0..len {
                carousel.next();
            }
            assert_eq!(carousel.index(), origin);
        }
    }

    #[test]
    fn test_previous_from_start_goes_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.previous();
        assert_eq!(carousel.index(), 3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_controls_and_label() {
        let single = Carousel::new(1);
        assert!(!single.has_controls());
        assert_eq!(single.position_label(), None);

        let mut many = Carousel::new(3);
        assert!(many.has_controls());
        many.next();
        assert_eq!(many.position_label().as_deref(), Some("2 / 3"));
    }

    #[test]
    fn test_empty_and_single_are_stable() {
        let mut empty = Carousel::new(0);
        empty.next();
        empty.previous();
        assert_eq!(empty.index(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.current(&[]), None);

        let mut single = Carousel::new(1);
        single.next();
        single.previous();
        assert_eq!(single.index(), 0);
    }
}
