use crate::image::CifarImage;

/// A labelled CIFAR-10 image.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// The image in planar (C, H, W) layout.
    pub image: CifarImage,
    /// The class index in `[0, 10)`.
    pub label: u8,
}

/// An ordered collection of labelled images.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    /// The samples, in archive order.
    pub samples: Vec<Sample>,
}

impl Dataset {
    /// Create a dataset from a list of samples.
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Number of samples in the dataset.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Append all the samples of `other`, keeping their order.
    pub fn extend(&mut self, other: Dataset) {
        self.samples.extend(other.samples);
    }

    /// Keep only the first `n` samples.
    pub fn truncate(&mut self, n: usize) {
        self.samples.truncate(n);
    }

    /// The labels of the samples, in order.
    pub fn labels(&self) -> Vec<u8> {
        self.samples.iter().map(|s| s.label).collect()
    }
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, Sample};
    use crate::{CifarImage, ImageError, CIFAR_IMAGE_SIZE};

    fn sample(val: u8, label: u8) -> Result<Sample, ImageError> {
        Ok(Sample {
            image: CifarImage::from_size_val(CIFAR_IMAGE_SIZE, val)?,
            label,
        })
    }

    #[test]
    fn dataset_keeps_order() -> Result<(), ImageError> {
        let mut dataset = Dataset::new(vec![sample(0, 3)?, sample(1, 1)?]);
        dataset.extend(Dataset::new(vec![sample(2, 9)?]));

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.labels(), vec![3, 1, 9]);

        dataset.truncate(2);
        assert_eq!(dataset.labels(), vec![3, 1]);
        assert!(!dataset.is_empty());

        Ok(())
    }

    #[test]
    fn dataset_from_iter() -> Result<(), ImageError> {
        let dataset = (0..4u8)
            .map(|i| sample(i, i))
            .collect::<Result<Dataset, _>>()?;

        let values = dataset
            .iter()
            .map(|s| s.image.as_slice()[0])
            .collect::<Vec<_>>();
        assert_eq!(values, vec![0, 1, 2, 3]);

        Ok(())
    }
}
