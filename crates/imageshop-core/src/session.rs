//! Editing session: the current image plus the editor's command table.
//!
//! The session owns at most one current [`PixelBuffer`]. Every [`Action`]
//! either leaves it alone or replaces it wholesale with a freshly built
//! buffer, and the replacement is only installed once the transform has
//! succeeded. Loading images and showing results are delegated to an
//! [`ImageSource`] and an [`ImageDisplay`] supplied by the UI shell.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::grayscale;
use crate::composite::{composite_with_key, ChromaKey};
use crate::error::TransformError;
use crate::histogram::equalize;
use crate::pixel::PixelBuffer;
use crate::transform::{flip_horizontal, flip_vertical, rotate_left, rotate_right};

/// Supplies images, typically by asking the user to pick a file.
pub trait ImageSource {
    /// Returns `None` when the user made no selection.
    fn choose_image(&mut self) -> Option<PixelBuffer>;
}

/// Shows the current image, replacing whatever was shown before.
pub trait ImageDisplay {
    fn show(&mut self, image: &PixelBuffer);
}

/// One editor command, in toolbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Load,
    FlipVertical,
    FlipHorizontal,
    RotateRight,
    RotateLeft,
    Grayscale,
    GreenScreen,
    Equalize,
}

impl Action {
    /// Every action, in the order the toolbar lists them.
    pub const ALL: [Action; 8] = [
        Action::Load,
        Action::FlipVertical,
        Action::FlipHorizontal,
        Action::RotateRight,
        Action::RotateLeft,
        Action::Grayscale,
        Action::GreenScreen,
        Action::Equalize,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Action::Load => "Load",
            Action::FlipVertical => "Flip Vertical",
            Action::FlipHorizontal => "Flip Horizontal",
            Action::RotateRight => "Rotate Right",
            Action::RotateLeft => "Rotate Left",
            Action::Grayscale => "Grayscale",
            Action::GreenScreen => "Green Screen",
            Action::Equalize => "Equalize",
        }
    }

    /// Stable kebab-case identifier, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            Action::Load => "load",
            Action::FlipVertical => "flip-vertical",
            Action::FlipHorizontal => "flip-horizontal",
            Action::RotateRight => "rotate-right",
            Action::RotateLeft => "rotate-left",
            Action::Grayscale => "grayscale",
            Action::GreenScreen => "green-screen",
            Action::Equalize => "equalize",
        }
    }

    /// Whether the action needs a second image from the [`ImageSource`].
    pub fn needs_source(self) -> bool {
        matches!(self, Action::Load | Action::GreenScreen)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse failure for [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    /// Accepts either the button caption or the kebab-case id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.label() == s || a.id() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// Apply a single-image action to `image`.
///
/// Returns `None` for actions that need an [`ImageSource`] (`Load` and
/// `GreenScreen`).
pub fn apply(action: Action, image: &PixelBuffer) -> Option<PixelBuffer> {
    let result = match action {
        Action::FlipVertical => flip_vertical(image),
        Action::FlipHorizontal => flip_horizontal(image),
        Action::RotateRight => rotate_right(image),
        Action::RotateLeft => rotate_left(image),
        Action::Grayscale => grayscale(image),
        Action::Equalize => equalize(image),
        Action::Load | Action::GreenScreen => return None,
    };
    Some(result)
}

/// Errors surfaced by [`ImageSession::perform`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),
}

/// What a call to [`ImageSession::perform`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new current image was installed and displayed.
    Applied { width: u32, height: u32 },
    /// The action needs a current image and none is loaded.
    NoImage,
    /// The image source returned no selection.
    NoSelection,
}

/// Holds the current image and dispatches editor actions against it.
#[derive(Debug, Clone, Default)]
pub struct ImageSession {
    current: Option<PixelBuffer>,
    chroma_key: ChromaKey,
}

impl ImageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `key` for green-screen compositing.
    pub fn with_chroma_key(mut self, key: ChromaKey) -> Self {
        self.chroma_key = key;
        self
    }

    pub fn chroma_key(&self) -> ChromaKey {
        self.chroma_key
    }

    pub fn set_chroma_key(&mut self, key: ChromaKey) {
        self.chroma_key = key;
    }

    /// The current image, if one has been loaded.
    pub fn current(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    /// Give up the current image, leaving the session empty.
    pub fn take_current(&mut self) -> Option<PixelBuffer> {
        self.current.take()
    }

    /// Run `action`, then show the new current image on `display`.
    ///
    /// On error the current image is left exactly as it was.
    pub fn perform(
        &mut self,
        action: Action,
        source: &mut dyn ImageSource,
        display: &mut dyn ImageDisplay,
    ) -> Result<Outcome, SessionError> {
        tracing::debug!("Dispatching action: {}", action);

        let transform: fn(&PixelBuffer) -> PixelBuffer = match action {
            Action::Load => return Ok(self.load(source, display)),
            Action::GreenScreen => return self.composite_from(source, display),
            Action::FlipVertical => flip_vertical,
            Action::FlipHorizontal => flip_horizontal,
            Action::RotateRight => rotate_right,
            Action::RotateLeft => rotate_left,
            Action::Grayscale => grayscale,
            Action::Equalize => equalize,
        };

        let Some(current) = self.current_for(action) else {
            return Ok(Outcome::NoImage);
        };
        let next = transform(current);
        Ok(self.install(next, display))
    }

    /// Perform the action named by a button caption or id.
    pub fn perform_named(
        &mut self,
        name: &str,
        source: &mut dyn ImageSource,
        display: &mut dyn ImageDisplay,
    ) -> Result<Outcome, SessionError> {
        let action = name.parse::<Action>().inspect_err(|e| tracing::warn!("{}", e))?;
        self.perform(action, source, display)
    }

    fn load(&mut self, source: &mut dyn ImageSource, display: &mut dyn ImageDisplay) -> Outcome {
        match source.choose_image() {
            Some(image) => self.install(image, display),
            None => {
                tracing::debug!("Load: no image selected");
                Outcome::NoSelection
            }
        }
    }

    /// Composite a freshly chosen overlay on top of the current image.
    fn composite_from(
        &mut self,
        source: &mut dyn ImageSource,
        display: &mut dyn ImageDisplay,
    ) -> Result<Outcome, SessionError> {
        let Some(current) = self.current_for(Action::GreenScreen) else {
            return Ok(Outcome::NoImage);
        };
        let Some(overlay) = source.choose_image() else {
            tracing::debug!("{}: no overlay selected", Action::GreenScreen);
            return Ok(Outcome::NoSelection);
        };
        let next = composite_with_key(current, &overlay, &self.chroma_key)
            .inspect_err(|e| tracing::warn!("{} failed: {}", Action::GreenScreen, e))?;
        Ok(self.install(next, display))
    }

    fn current_for(&self, action: Action) -> Option<&PixelBuffer> {
        if self.current.is_none() {
            tracing::warn!("{}: no image loaded", action);
        }
        self.current.as_ref()
    }

    fn install(&mut self, image: PixelBuffer, display: &mut dyn ImageDisplay) -> Outcome {
        let (width, height) = image.dimensions();
        tracing::info!("Current image is now {}x{}", width, height);
        display.show(&image);
        self.current = Some(image);
        Outcome::Applied { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;
    use std::collections::VecDeque;

    /// Hands out queued images, then reports no selection.
    #[derive(Default)]
    struct QueuedSource(VecDeque<PixelBuffer>);

    impl QueuedSource {
        fn with(images: impl IntoIterator<Item = PixelBuffer>) -> Self {
            Self(images.into_iter().collect())
        }
    }

    impl ImageSource for QueuedSource {
        fn choose_image(&mut self) -> Option<PixelBuffer> {
            self.0.pop_front()
        }
    }

    /// Remembers everything it was asked to show.
    #[derive(Default)]
    struct RecordingDisplay(Vec<PixelBuffer>);

    impl ImageDisplay for RecordingDisplay {
        fn show(&mut self, image: &PixelBuffer) {
            self.0.push(image.clone());
        }
    }

    fn test_image(width: u32, height: u32) -> PixelBuffer {
        let pixels = (0..width * height)
            .map(|i| Pixel::new(i as u8, (i * 3) as u8, 200))
            .collect();
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_action_labels_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.label().parse::<Action>().unwrap(), action);
            assert_eq!(action.id().parse::<Action>().unwrap(), action);
        }
        assert_eq!(
            "Sharpen".parse::<Action>().unwrap_err(),
            UnknownAction("Sharpen".to_string())
        );
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::RotateLeft.to_string(), "Rotate Left");
    }

    #[test]
    fn test_apply_single_image_actions() {
        let img = test_image(3, 2);
        assert_eq!(apply(Action::RotateRight, &img).unwrap(), rotate_right(&img));
        assert_eq!(apply(Action::Equalize, &img).unwrap(), equalize(&img));
        assert!(apply(Action::Load, &img).is_none());
        assert!(apply(Action::GreenScreen, &img).is_none());

        for action in Action::ALL {
            assert_eq!(apply(action, &img).is_none(), action.needs_source());
        }
    }

    #[test]
    fn test_load_installs_and_displays() {
        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([test_image(4, 3)]);
        let mut display = RecordingDisplay::default();

        let outcome = session
            .perform(Action::Load, &mut source, &mut display)
            .unwrap();
        assert_eq!(outcome, Outcome::Applied { width: 4, height: 3 });
        assert_eq!(session.current(), Some(&test_image(4, 3)));
        assert_eq!(display.0.len(), 1);
    }

    #[test]
    fn test_load_without_selection_keeps_current() {
        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([test_image(2, 2)]);
        let mut display = RecordingDisplay::default();
        session.perform(Action::Load, &mut source, &mut display).unwrap();

        let outcome = session
            .perform(Action::Load, &mut source, &mut display)
            .unwrap();
        assert_eq!(outcome, Outcome::NoSelection);
        assert_eq!(session.current(), Some(&test_image(2, 2)));
        assert_eq!(display.0.len(), 1);
    }

    #[test]
    fn test_actions_before_load_are_ignored() {
        let mut session = ImageSession::new();
        let mut source = QueuedSource::default();
        let mut display = RecordingDisplay::default();

        for action in Action::ALL.into_iter().filter(|a| *a != Action::Load) {
            let outcome = session.perform(action, &mut source, &mut display).unwrap();
            assert_eq!(outcome, Outcome::NoImage);
        }
        assert!(display.0.is_empty());
    }

    #[test]
    fn test_rotate_replaces_current() {
        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([test_image(5, 2)]);
        let mut display = RecordingDisplay::default();
        session.perform(Action::Load, &mut source, &mut display).unwrap();

        let outcome = session
            .perform(Action::RotateRight, &mut source, &mut display)
            .unwrap();
        assert_eq!(outcome, Outcome::Applied { width: 2, height: 5 });
        assert_eq!(session.current(), Some(&rotate_right(&test_image(5, 2))));
        assert_eq!(display.0.last(), session.current());
    }

    #[test]
    fn test_green_screen_uses_current_as_base() {
        let base = PixelBuffer::filled(2, 1, Pixel::gray(50)).unwrap();
        let overlay =
            PixelBuffer::from_rows(vec![vec![Pixel::new(0, 255, 0), Pixel::new(255, 0, 0)]])
                .unwrap();

        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([base, overlay]);
        let mut display = RecordingDisplay::default();
        session.perform(Action::Load, &mut source, &mut display).unwrap();
        session
            .perform(Action::GreenScreen, &mut source, &mut display)
            .unwrap();

        let current = session.current().unwrap();
        assert_eq!(current.get(0, 0).unwrap(), Pixel::gray(50));
        assert_eq!(current.get(0, 1).unwrap(), Pixel::new(255, 0, 0));
    }

    #[test]
    fn test_green_screen_mismatch_keeps_current() {
        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([test_image(2, 2), test_image(2, 3)]);
        let mut display = RecordingDisplay::default();
        session.perform(Action::Load, &mut source, &mut display).unwrap();

        let err = session
            .perform(Action::GreenScreen, &mut source, &mut display)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Transform(TransformError::DimensionMismatch {
                base: (2, 2),
                overlay: (2, 3)
            })
        );
        assert_eq!(session.current(), Some(&test_image(2, 2)));
        assert_eq!(display.0.len(), 1);
    }

    #[test]
    fn test_green_screen_without_overlay() {
        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([test_image(2, 2)]);
        let mut display = RecordingDisplay::default();
        session.perform(Action::Load, &mut source, &mut display).unwrap();

        let outcome = session
            .perform(Action::GreenScreen, &mut source, &mut display)
            .unwrap();
        assert_eq!(outcome, Outcome::NoSelection);
        assert_eq!(session.current(), Some(&test_image(2, 2)));
    }

    #[test]
    fn test_only_source_actions_consult_the_source() {
        let green = PixelBuffer::filled(2, 2, Pixel::new(0, 255, 0)).unwrap();
        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([test_image(2, 2), green.clone(), green]);
        let mut display = RecordingDisplay::default();
        session.perform(Action::Load, &mut source, &mut display).unwrap();

        for action in Action::ALL.into_iter().filter(|a| !a.needs_source()) {
            session.perform(action, &mut source, &mut display).unwrap();
            assert_eq!(source.0.len(), 2, "{} took an image from the source", action);
        }

        // A fully keyed overlay leaves the base untouched
        let before = session.current().cloned();
        session
            .perform(Action::GreenScreen, &mut source, &mut display)
            .unwrap();
        assert_eq!(source.0.len(), 1);
        assert_eq!(session.current().cloned(), before);
    }

    #[test]
    fn test_custom_chroma_key() {
        let base = PixelBuffer::filled(1, 1, Pixel::gray(9)).unwrap();
        // Green is 3x max(r, b): keyed at dominance 2, kept at dominance 4
        let overlay = PixelBuffer::filled(1, 1, Pixel::new(50, 150, 10)).unwrap();

        let mut session = ImageSession::new().with_chroma_key(ChromaKey::new(4));
        let mut source = QueuedSource::with([base, overlay.clone()]);
        let mut display = RecordingDisplay::default();
        session.perform(Action::Load, &mut source, &mut display).unwrap();
        session
            .perform(Action::GreenScreen, &mut source, &mut display)
            .unwrap();

        assert_eq!(session.current(), Some(&overlay));
    }

    #[test]
    fn test_perform_named() {
        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([test_image(3, 1)]);
        let mut display = RecordingDisplay::default();

        session.perform_named("Load", &mut source, &mut display).unwrap();
        session
            .perform_named("flip-horizontal", &mut source, &mut display)
            .unwrap();
        assert_eq!(
            session.current(),
            Some(&flip_horizontal(&test_image(3, 1)))
        );

        let err = session
            .perform_named("Blur", &mut source, &mut display)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownAction(UnknownAction("Blur".to_string()))
        );
    }

    #[test]
    fn test_take_current() {
        let mut session = ImageSession::new();
        let mut source = QueuedSource::with([test_image(1, 1)]);
        let mut display = RecordingDisplay::default();
        session.perform(Action::Load, &mut source, &mut display).unwrap();

        assert!(session.take_current().is_some());
        assert!(session.current().is_none());
    }
}
