//! Post-assembly sample transform hook

use image::DynamicImage;

use crate::errors::DatasetResult;

use super::target::DetectionTarget;

/// A transform applied to a finished (image, target) pair
///
/// This is the seam where the enclosing training framework plugs in its own
/// preprocessing (normalization, tensor layout changes, resizing) after the
/// dataset has assembled the sample. Implementations take ownership of both
/// pieces and hand back the reworked pair.
pub trait SampleTransform {
    /// Rework an assembled sample
    ///
    /// # Arguments
    /// * `image` - The sample image
    /// * `target` - The detection target built for it
    ///
    /// # Returns
    /// The transformed pair, or an error to fail the sample access
    fn apply(
        &self,
        image: DynamicImage,
        target: DetectionTarget,
    ) -> DatasetResult<(DynamicImage, DetectionTarget)>;
}
