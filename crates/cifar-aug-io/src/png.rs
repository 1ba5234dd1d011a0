use std::{fs, fs::File, path::Path};

use cifar_aug_image::{Image, ImageSize};
use png::{BitDepth, ColorType, Decoder, Encoder};

use crate::error::IoError;

/// Read a PNG image with a three channels (rgb8).
///
/// The interleaved pixels of the file are split into planes.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A RGB image with three channels (rgb8).
pub fn read_image_png_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let (buf, size) = read_png_impl(file_path)?;
    Ok(Image::from_interleaved(size.into(), &buf)?)
}

/// Writes the given planar image as an 8-bit RGB PNG file.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The planar image to save.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        &image.to_interleaved(),
        image.size(),
        BitDepth::Eight,
        ColorType::Rgb,
    )
}

// utility function to read the png file
fn read_png_impl(file_path: impl AsRef<Path>) -> Result<(Vec<u8>, [usize; 2]), IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if let Some(extension) = file_path.extension() {
        if extension != "png" {
            return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
        }
    } else {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = fs::File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    Ok((buf, [info.width as usize, info.height as usize]))
}

fn write_png_impl(
    file_path: impl AsRef<Path>,
    image_data: &[u8],
    image_size: ImageSize,
    // Make sure you set `depth` correctly
    depth: BitDepth,
    color_type: ColorType,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(file, image_size.width as u32, image_size.height as u32);
    encoder.set_color(color_type);
    encoder.set_depth(depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cifar_aug_image::{CifarImage, CIFAR_IMAGE_SIZE};
    use std::fs::create_dir_all;

    #[test]
    fn write_read_png_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        create_dir_all(tmp_dir.path())?;

        let file_path = tmp_dir.path().join("example.png");
        let data = (0..3 * 32 * 32).map(|i| (i % 256) as u8).collect();
        let image = CifarImage::new(CIFAR_IMAGE_SIZE, data)?;
        write_image_png_rgb8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_png_rgb8(&file_path)?;
        assert_eq!(image_back.cols(), 32);
        assert_eq!(image_back.rows(), 32);
        assert_eq!(image_back.num_channels(), 3);
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_png_invalid_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("example.jpg");
        fs::write(&file_path, b"not a png")?;

        let res = read_image_png_rgb8(&file_path);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }
}
