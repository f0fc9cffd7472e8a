use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;

/// How the pixels of an image end up in the PDF
pub enum ImageData {
    /// Baseline RGB JPEG data, which PDF readers decode natively
    Jpeg(Vec<u8>),
    /// Anything else, re-encoded as Flate-compressed RGB with an optional
    /// alpha soft mask
    Raster(DynamicImage),
}

/// A decoded image. Images are stored once per document and can be placed on
/// any number of pages. `width` and `height` are the pixel dimensions, which
/// layout uses as the image's natural size in points unless told otherwise.
pub struct Image {
    pub data: ImageData,
    pub width: f32,
    pub height: f32,
}

impl Image {
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, PDFError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Decode an encoded image (PNG, JPEG, ...). JPEGs that PDF can display
    /// as-is keep their original bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Image, PDFError> {
        let format = image::guess_format(&bytes)?;
        let decoded = image::load_from_memory_with_format(&bytes, format)?;
        let (width, height) = decoded.dimensions();

        if format == ImageFormat::Jpeg && decoded.color() == ColorType::Rgb8 {
            return Ok(Image {
                data: ImageData::Jpeg(bytes),
                width: width as f32,
                height: height as f32,
            });
        }
        Ok(Self::new_raster(decoded))
    }

    pub fn new_raster(image: DynamicImage) -> Image {
        let (width, height) = image.dimensions();
        Image {
            data: ImageData::Raster(image),
            width: width as f32,
            height: height as f32,
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.gen(RefType::Image(image_index));
        let level = CompressionLevel::DefaultLevel as u8;

        let (filter, bytes, mask) = match &self.data {
            ImageData::Jpeg(bytes) => (Filter::DctDecode, bytes.clone(), None),
            ImageData::Raster(image) => {
                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });
                let rgb = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);
                (Filter::FlateDecode, rgb, mask)
            }
        };

        let mask_id = mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut xobject = writer.image_xobject(id, &bytes);
        xobject.filter(filter);
        xobject.width(self.width as i32);
        xobject.height(self.height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            xobject.s_mask(mask_id);
        }
        xobject.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, mask) {
            let mut s_mask = writer.image_xobject(mask_id, &mask);
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}
