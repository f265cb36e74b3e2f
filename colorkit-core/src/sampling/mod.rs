//! Eye-dropper sampling and the image color picker session.
//!
//! A [`ColorSampler`] hands back the color under the cursor as a single
//! `#rrggbb` string. [`PickerSession`] keeps the last sampled color and drives
//! the copy-confirmation notification.

pub mod notification;
#[cfg(feature = "image")]
pub mod pixel;

use std::time::Instant;

use tracing::{debug, warn};

pub use notification::{CopyNotification, NotificationState, HIDE_DURATION, SHOW_DURATION};
#[cfg(feature = "image")]
pub use pixel::ImagePixelSampler;

use crate::error::SampleError;

/// Color shown before anything has been sampled.
pub const DEFAULT_SAMPLE: &str = "#f2f2f2";

/// Platform capability returning the color under the cursor.
pub trait ColorSampler {
    fn sample(&mut self) -> Result<String, SampleError>;
}

impl<F> ColorSampler for F
where
    F: FnMut() -> Result<String, SampleError>,
{
    fn sample(&mut self) -> Result<String, SampleError> {
        self()
    }
}

/// Stand-in for platforms without an eye-dropper.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSampler;

impl ColorSampler for UnsupportedSampler {
    fn sample(&mut self) -> Result<String, SampleError> {
        Err(SampleError::Unsupported)
    }
}

/// Write-only clipboard. Failures are not reported back.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

impl Clipboard for String {
    fn write_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

#[derive(Debug, Clone)]
pub struct PickerSession {
    color: String,
    image_loaded: bool,
    notification: CopyNotification,
}

impl Default for PickerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerSession {
    pub fn new() -> Self {
        Self {
            color: DEFAULT_SAMPLE.to_string(),
            image_loaded: false,
            notification: CopyNotification::new(),
        }
    }

    /// Last sampled color.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn has_image(&self) -> bool {
        self.image_loaded
    }

    pub fn notification(&self) -> &CopyNotification {
        &self.notification
    }

    pub fn notification_mut(&mut self) -> &mut CopyNotification {
        &mut self.notification
    }

    /// Marks an image as loaded and takes a first sample from it.
    pub fn load_image<S: ColorSampler + ?Sized>(
        &mut self,
        sampler: &mut S,
    ) -> Result<&str, SampleError> {
        self.image_loaded = true;
        self.pick(sampler)
    }

    pub fn remove_image(&mut self) {
        self.image_loaded = false;
    }

    /// Samples a new color. On error the previous color is kept.
    pub fn pick<S: ColorSampler + ?Sized>(&mut self, sampler: &mut S) -> Result<&str, SampleError> {
        match sampler.sample() {
            Ok(color) => {
                debug!(%color, "sampled color");
                self.color = color;
                Ok(&self.color)
            }
            Err(err) => {
                warn!(error = %err, "color sampling failed");
                Err(err)
            }
        }
    }

    /// Copies the current color and (re)starts the confirmation.
    pub fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, now: Instant) {
        clipboard.write_text(&self.color);
        self.notification.show(now);
    }
}
