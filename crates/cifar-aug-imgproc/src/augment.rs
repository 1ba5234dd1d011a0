use cifar_aug_image::{CifarImage, Dataset, Sample};

use crate::crop::random_crop;
use crate::cutout::random_cutout;
use crate::enhance::random_contrast_and_flip;
use crate::error::AugmentError;
use crate::random::{draw_int, RandomSource};
use crate::rotate::random_rotation;

/// The augmentations the dispatcher picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AugmentOp {
    /// Random rotation in `[-180, 180]` degrees.
    Rotation = 0,
    /// Random rectangle erasing.
    Cutout = 1,
    /// Random crop of the zero-padded image.
    Crop = 2,
    /// Random contrast followed by a random horizontal flip.
    ContrastFlip = 3,
}

impl AugmentOp {
    /// All the operations, in index order.
    pub const ALL: [AugmentOp; 4] = [
        AugmentOp::Rotation,
        AugmentOp::Cutout,
        AugmentOp::Crop,
        AugmentOp::ContrastFlip,
    ];

    /// Pick an operation uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns an error if the random source returns a value out of `[0, 3]`.
    pub fn sample(rng: &mut impl RandomSource) -> Result<Self, AugmentError> {
        let index = draw_int(rng, "augment_op", 0, Self::ALL.len() as i64 - 1)?;
        Ok(Self::ALL[index as usize])
    }

    /// Index of the operation in `[0, 3]`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// A short name, suitable for file names and logs.
    pub fn name(self) -> &'static str {
        match self {
            AugmentOp::Rotation => "randomrotation",
            AugmentOp::Cutout => "randomcutout",
            AugmentOp::Crop => "randomcrop",
            AugmentOp::ContrastFlip => "contrastandhorizontalflip",
        }
    }
}

impl std::fmt::Display for AugmentOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An augmented image along with the operation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Augmented {
    /// The transformed image.
    pub image: CifarImage,
    /// The operation applied to the input.
    pub op: AugmentOp,
}

/// Apply the given operation with parameters drawn from `rng`.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32 or the random source misbehaves.
pub fn apply_op(
    op: AugmentOp,
    src: &CifarImage,
    rng: &mut impl RandomSource,
) -> Result<CifarImage, AugmentError> {
    match op {
        AugmentOp::Rotation => random_rotation(src, rng),
        AugmentOp::Cutout => random_cutout(src, rng),
        AugmentOp::Crop => random_crop(src, rng),
        AugmentOp::ContrastFlip => random_contrast_and_flip(src, rng),
    }
}

/// Augment a single image with an operation picked uniformly at random.
///
/// # Example
///
/// ```
/// use cifar_aug_image::{CifarImage, CIFAR_IMAGE_SIZE};
/// use cifar_aug_imgproc::{augment::augment_image, RngSource};
///
/// let image = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 7).unwrap();
/// let mut rng = RngSource::seeded(0);
///
/// let augmented = augment_image(&image, &mut rng).unwrap();
///
/// assert_eq!(augmented.image.shape(), [3, 32, 32]);
/// ```
pub fn augment_image(
    src: &CifarImage,
    rng: &mut impl RandomSource,
) -> Result<Augmented, AugmentError> {
    let op = AugmentOp::sample(rng)?;
    let image = apply_op(op, src, rng)?;
    Ok(Augmented { image, op })
}

/// Draw one operation per sample, independently, before any image is touched.
///
/// # Errors
///
/// Returns an error if the random source returns a value out of `[0, 3]`.
pub fn sample_schedule(
    len: usize,
    rng: &mut impl RandomSource,
) -> Result<Vec<AugmentOp>, AugmentError> {
    (0..len).map(|_| AugmentOp::sample(rng)).collect()
}

/// Augment every sample of a dataset.
///
/// The whole operation schedule is drawn first, then the operations are
/// applied in order. Labels and order are preserved.
///
/// # Errors
///
/// Returns the first error raised by a transform.
pub fn augment_dataset(
    dataset: &Dataset,
    rng: &mut impl RandomSource,
) -> Result<Dataset, AugmentError> {
    let schedule = sample_schedule(dataset.len(), rng)?;

    dataset
        .iter()
        .zip(schedule)
        .map(|(sample, op)| -> Result<Sample, AugmentError> {
            Ok(Sample {
                image: apply_op(op, &sample.image, rng)?,
                label: sample.label,
            })
        })
        .collect()
}
