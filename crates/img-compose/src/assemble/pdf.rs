//! PDF serialization of an assembled document
//!
//! Each artifact page becomes one output page: a MediaBox sized to the
//! configured paper, an image XObject, and a content stream placing the
//! image per its geometry. JPEG pages embed their bytes directly under
//! DCTDecode; PNG pages embed raw RGB under FlateDecode with a DeviceGray
//! SMask when the source carries transparency.

use crate::constants::mm_to_pt;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;
use std::path::Path;

/// Serialize an artifact to PDF bytes
pub fn write_pdf(artifact: &DocumentArtifact) -> Result<Vec<u8>> {
    if artifact.pages.is_empty() {
        return Err(ComposeError::NoInput);
    }

    let page_width_pt = mm_to_pt(artifact.page_width_mm);
    let page_height_pt = mm_to_pt(artifact.page_height_mm);

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for page in &artifact.pages {
        let xobject_id = add_image_xobject(&mut output, page)?;

        // PDF origin is bottom-left; geometry y is measured from the top.
        let g = &page.geometry;
        let content = format!(
            "q {} 0 0 {} {} {} cm /Im0 Do Q\n",
            mm_to_pt(g.width),
            mm_to_pt(g.height),
            mm_to_pt(g.x),
            mm_to_pt(artifact.page_height_mm - g.y - g.height),
        );
        let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut xobjects = Dictionary::new();
        xobjects.set("Im0", Object::Reference(xobject_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let page_id = output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_tree_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page_width_pt),
                    Object::Real(page_height_pt),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    output.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Serialize an artifact and write it to disk
pub async fn save_pdf(artifact: DocumentArtifact, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || write_pdf(&artifact)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

fn add_image_xobject(doc: &mut Document, page: &Page) -> Result<ObjectId> {
    match page.format {
        OutputFormat::Jpeg => {
            let dict = image_dict(page, b"DCTDecode", None);
            Ok(doc.add_object(Stream::new(dict, page.data.clone())))
        }
        OutputFormat::Png => {
            // Lossless path: unpack the PNG and embed the raw channels.
            let decoded = image::load_from_memory(&page.data)
                .map_err(|e| ComposeError::Decode(e.to_string()))?;
            let rgba = decoded.to_rgba8();

            let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
            let mut alpha = Vec::with_capacity(rgba.len() / 4);
            for px in rgba.pixels() {
                rgb.extend_from_slice(&px.0[..3]);
                alpha.push(px.0[3]);
            }

            let smask_id = if alpha.iter().any(|&a| a != 0xFF) {
                let mut dict = Dictionary::new();
                dict.set("Type", Object::Name(b"XObject".to_vec()));
                dict.set("Subtype", Object::Name(b"Image".to_vec()));
                dict.set("Width", Object::Integer(i64::from(page.pixel_width)));
                dict.set("Height", Object::Integer(i64::from(page.pixel_height)));
                dict.set("ColorSpace", Object::Name(b"DeviceGray".to_vec()));
                dict.set("BitsPerComponent", Object::Integer(8));
                dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
                Some(doc.add_object(Stream::new(dict, flate_compress(&alpha)?)))
            } else {
                None
            };

            let dict = image_dict(page, b"FlateDecode", smask_id);
            Ok(doc.add_object(Stream::new(dict, flate_compress(&rgb)?)))
        }
    }
}

fn image_dict(page: &Page, filter: &[u8], smask_id: Option<ObjectId>) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(i64::from(page.pixel_width)));
    dict.set("Height", Object::Integer(i64::from(page.pixel_height)));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(filter.to_vec()));
    if let Some(id) = smask_id {
        dict.set("SMask", Object::Reference(id));
    }
    dict
}

fn flate_compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
