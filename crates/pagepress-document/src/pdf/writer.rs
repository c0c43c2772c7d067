// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// PDF assembly stage, built on the `lopdf` crate. Collects the `.jpg`
// files directly inside a directory, orders them naturally by name,
// and writes a document with one page per image at its native pixel
// size. The JPEG bytes are embedded as-is behind a `DCTDecode` filter;
// nothing is re-encoded.

use std::fs;
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tracing::{debug, info, instrument};

use pagepress_core::error::{PagepressError, Result};
use pagepress_core::natural::natural_key;
use pagepress_core::types::TARGET_EXTENSION;

use crate::image::codec;

/// Assembles every matching image in `input_dir` into `output_pdf`.
///
/// Returns the number of pages written. An existing document at the
/// output path is replaced. A directory with no matching files is an
/// error so an empty document can never be mistaken for a result.
#[instrument(skip_all, fields(input = %input_dir.display(), output = %output_pdf.display()))]
pub fn assemble(input_dir: &Path, output_pdf: &Path) -> Result<usize> {
    let mut names = matching_names(input_dir)?;
    if names.is_empty() {
        return Err(PagepressError::EmptyInput(input_dir.to_path_buf()));
    }
    names.sort_by_cached_key(|name| natural_key(name));
    debug!(pages = names.len(), "collected page images");

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::with_capacity(names.len());
    for name in &names {
        let page_id = append_image_page(&mut doc, pages_id, &input_dir.join(name))?;
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len();
    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(count as i64));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.save(output_pdf).map_err(|err| PagepressError::Encode {
        path: output_pdf.to_path_buf(),
        detail: err.to_string(),
    })?;

    info!(pages = count, output = %output_pdf.display(), "assembled document");
    Ok(count)
}

/// Lists matching file names directly inside `dir`; no recursion.
fn matching_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.ends_with(TARGET_EXTENSION) {
            names.push(name);
        }
    }
    Ok(names)
}

/// Adds one page showing the image at `path` at native resolution.
fn append_image_page(doc: &mut Document, pages_id: ObjectId, path: &Path) -> Result<ObjectId> {
    let data = fs::read(path)?;
    // Decode to validate the file and learn its dimensions; the page
    // embeds the original bytes untouched.
    let probe = codec::decode_bytes(&data, path)?;
    let width = probe.width();
    let height = probe.height();
    let color_space: &[u8] = match probe.color() {
        image::ColorType::L8 => b"DeviceGray",
        _ => b"DeviceRGB",
    };

    let mut image_dict = Dictionary::new();
    image_dict.set("Type", Object::Name(b"XObject".to_vec()));
    image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    image_dict.set("Width", Object::Integer(width as i64));
    image_dict.set("Height", Object::Integer(height as i64));
    image_dict.set("ColorSpace", Object::Name(color_space.to_vec()));
    image_dict.set("BitsPerComponent", Object::Integer(8));
    image_dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
    let image_id = doc.add_object(Stream::new(image_dict, data));

    // One pixel maps to one point, so the image fills the page exactly.
    let content = format!("q\n{width} 0 0 {height} 0 0 cm\n/Im1 Do\nQ");
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im1", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(pages_id));
    page.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width as i64),
            Object::Integer(height as i64),
        ]),
    );
    page.set("Contents", Object::Reference(content_id));
    page.set("Resources", Object::Dictionary(resources));
    Ok(doc.add_object(Object::Dictionary(page)))
}
