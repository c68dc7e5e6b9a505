//! This module contains the six-sided die and the source of randomness it draws its faces from.
//!
//! The die itself keeps no state between rolls. Where the face comes from is decided by a `Faces`
//! implementation handed to it at construction, so that the game can run on fair dice while tests
//! can load them.

use std::fmt::Debug;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::error::SetupError;

/// The faces every die in the game carries.
pub const FACES: RangeInclusive<u8> = 1..=6;

/// This trait is implemented by anything able to pick the face a die lands on.
///
/// Implementations are shared between the threads that roll a round, hence the `Send` and `Sync`
/// bounds; `face()` takes `&self` so that rolling never writes to the die.
pub trait Faces: Debug + Send + Sync {
    /// This function returns the face the die landed on, which must lie within `FACES`.
    fn face(&self) -> u8;
}

/// A fair source that draws every face with the same probability from `fastrand`'s thread-local
/// generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fair;

impl Faces for Fair {
    fn face(&self) -> u8 {
        fastrand::u8(FACES)
    }
}

/// This struct holds a source that lands on the same face every single time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loaded {
    /// This field contains the face the die always shows.
    face: u8,
}

impl Loaded {
    /// This function creates a source stuck on `face`.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::FaceOutOfRange` if `face` is not a face of a six-sided die.
    pub fn new(face: u8) -> Result<Self, SetupError> {
        if FACES.contains(&face) {
            Ok(Self { face })
        } else {
            Err(SetupError::FaceOutOfRange(face))
        }
    }
}

impl Faces for Loaded {
    fn face(&self) -> u8 {
        self.face
    }
}

/// A single six-sided die.
#[derive(Debug, Clone)]
pub struct Die {
    /// This field contains the source the die asks for a face on every roll.
    faces: Arc<dyn Faces>,
}

impl Die {
    /// This function creates a die that rolls with the given source of faces.
    #[must_use]
    pub fn new(faces: Arc<dyn Faces>) -> Self {
        Self { faces }
    }

    /// This function creates a fair die.
    #[must_use]
    pub fn fair() -> Self {
        Self::new(Arc::new(Fair))
    }

    /// This function rolls the die once and returns the face it landed on.
    #[must_use]
    pub fn roll(&self) -> u8 {
        self.faces.face()
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::fair()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn fair_die_stays_on_its_faces() {
        let die = Die::fair();
        let mut seen = [false; 6];

        for _ in 0..10_000 {
            let face = die.roll();
            assert!(FACES.contains(&face), "rolled {face}, which is no face");
            if let Some(slot) = seen.get_mut(usize::from(face - 1)) {
                *slot = true;
            }
        }

        assert!(seen.iter().all(|hit| *hit), "some face never came up: {seen:?}");
    }

    #[test]
    fn loaded_rejects_missing_faces() {
        assert_eq!(Loaded::new(0), Err(SetupError::FaceOutOfRange(0)));
        assert_eq!(Loaded::new(7), Err(SetupError::FaceOutOfRange(7)));
    }

    proptest! {
        #[test]
        fn loaded_die_always_shows_its_face(face in FACES) {
            let die = Die::new(Arc::new(Loaded::new(face).unwrap()));
            for _ in 0..16 {
                prop_assert_eq!(die.roll(), face);
            }
        }
    }
}
