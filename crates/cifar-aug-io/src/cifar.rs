use std::{
    fs,
    path::{Path, PathBuf},
};

use cifar_aug_image::{CifarImage, Dataset, Sample, CIFAR_CHANNELS, CIFAR_IMAGE_SIZE};

use crate::error::IoError;

/// Number of classes of CIFAR-10.
pub const NUM_CLASSES: usize = 10;

/// Pixel bytes of a single record: three 32x32 planes.
pub const IMAGE_BYTES: usize = CIFAR_CHANNELS * 32 * 32;

/// Bytes of a single record: one label byte followed by the image planes.
pub const RECORD_BYTES: usize = 1 + IMAGE_BYTES;

/// Prefix of the training batch files, `data_batch_1.bin` to `data_batch_5.bin`.
pub const TRAIN_BATCH_PREFIX: &str = "data_batch";

/// Prefix of the test batch file, `test_batch.bin`.
pub const TEST_BATCH_PREFIX: &str = "test_batch";

/// Prefix of the label names file, `batches.meta.txt`.
pub const META_PREFIX: &str = "batches.meta";

/// The content of a CIFAR-10 dataset directory.
#[derive(Debug, Clone, Default)]
pub struct CifarSplits {
    /// All the training batches, concatenated in file name order.
    pub train: Dataset,
    /// The test batch.
    pub test: Dataset,
    /// Human readable class names, indexed by label.
    pub label_names: Vec<String>,
}

impl CifarSplits {
    /// The name of a class, if the label is known.
    pub fn label_name(&self, label: u8) -> Option<&str> {
        self.label_names.get(label as usize).map(String::as_str)
    }
}

/// Decode the records of a binary batch.
///
/// Each record is one label byte followed by the red, green and blue planes,
/// 1024 bytes each, row-major.
///
/// # Errors
///
/// Returns an error if the buffer is not made of whole records or a label is unknown.
pub fn decode_cifar_batch(bytes: &[u8]) -> Result<Dataset, IoError> {
    if bytes.len() % RECORD_BYTES != 0 {
        return Err(IoError::TruncatedRecord(bytes.len(), RECORD_BYTES));
    }

    bytes
        .chunks_exact(RECORD_BYTES)
        .enumerate()
        .map(|(i, record)| -> Result<Sample, IoError> {
            let label = record[0];
            if label as usize >= NUM_CLASSES {
                return Err(IoError::InvalidLabel(i, label, NUM_CLASSES));
            }
            let image = CifarImage::new(CIFAR_IMAGE_SIZE, record[1..].to_vec())?;
            Ok(Sample { image, label })
        })
        .collect()
}

/// Encode a dataset with the binary batch record layout.
pub fn encode_cifar_batch(dataset: &Dataset) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(dataset.len() * RECORD_BYTES);
    for sample in dataset {
        bytes.push(sample.label);
        bytes.extend_from_slice(sample.image.as_slice());
    }
    bytes
}

/// Read a binary batch file.
///
/// # Arguments
///
/// * `file_path` - The path to the batch, e.g. `data_batch_1.bin`.
pub fn read_cifar_batch(file_path: impl AsRef<Path>) -> Result<Dataset, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = fs::read(file_path)?;
    let dataset = decode_cifar_batch(&bytes)?;
    log::debug!("Read {} samples from {}", dataset.len(), file_path.display());

    Ok(dataset)
}

/// Write a dataset as a binary batch file.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `dataset` - The samples to write.
pub fn write_cifar_batch(file_path: impl AsRef<Path>, dataset: &Dataset) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    fs::write(file_path, encode_cifar_batch(dataset))?;
    log::debug!("Wrote {} samples to {}", dataset.len(), file_path.display());
    Ok(())
}

/// Read the class names, one per line, skipping blank lines.
pub fn read_label_names(file_path: impl AsRef<Path>) -> Result<Vec<String>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let names = fs::read_to_string(file_path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(names)
}

/// Load the train batches, the test batch and the class names of a
/// `cifar-10-batches-bin` directory.
///
/// Training batches are concatenated in file name order so the sample order
/// does not depend on the file system.
///
/// # Errors
///
/// Returns an error if the directory does not exist, misses one of the
/// expected files or holds a malformed batch.
pub fn load_cifar10(dir: impl AsRef<Path>) -> Result<CifarSplits, IoError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(IoError::FileDoesNotExist(dir.to_path_buf()));
    }

    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<PathBuf>, _>>()?;
    entries.sort();

    let mut splits = CifarSplits::default();
    let mut found_test = false;
    let mut found_meta = false;

    for path in entries.iter().filter(|p| p.is_file()) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if name.starts_with(TRAIN_BATCH_PREFIX) {
            splits.train.extend(read_cifar_batch(path)?);
        } else if name.starts_with(TEST_BATCH_PREFIX) {
            splits.test = read_cifar_batch(path)?;
            found_test = true;
        } else if name.starts_with(META_PREFIX) {
            splits.label_names = read_label_names(path)?;
            found_meta = true;
        }
    }

    if splits.train.is_empty() {
        return Err(IoError::MissingArchiveEntry(
            "training batches",
            dir.to_path_buf(),
        ));
    }
    if !found_test {
        return Err(IoError::MissingArchiveEntry("test batch", dir.to_path_buf()));
    }
    if !found_meta {
        return Err(IoError::MissingArchiveEntry("label names", dir.to_path_buf()));
    }

    Ok(splits)
}
