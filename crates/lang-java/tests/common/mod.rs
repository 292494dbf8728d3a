use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const ACC_CLASS: u16 = 0x0021;
pub const ACC_INTERFACE: u16 = 0x0601;
pub const ACC_ENUM: u16 = 0x4031;
pub const ACC_ANNOTATION: u16 = 0x2601;

/// Smallest well-formed class file: no fields, methods or attributes
pub fn class_bytes(internal_name: &str, access_flags: u16) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
    bytes.extend_from_slice(&0u16.to_be_bytes());
    bytes.extend_from_slice(&52u16.to_be_bytes());

    // #1 Class -> #2, #3 Class -> #4
    bytes.extend_from_slice(&5u16.to_be_bytes());
    push_class(&mut bytes, 2);
    push_utf8(&mut bytes, internal_name);
    push_class(&mut bytes, 4);
    push_utf8(&mut bytes, "java/lang/Object");

    bytes.extend_from_slice(&access_flags.to_be_bytes());
    bytes.extend_from_slice(&1u16.to_be_bytes());
    bytes.extend_from_slice(&3u16.to_be_bytes());
    // interfaces, fields, methods, attributes
    for _ in 0..4 {
        bytes.extend_from_slice(&0u16.to_be_bytes());
    }
    bytes
}

fn push_class(bytes: &mut Vec<u8>, name_index: u16) {
    bytes.push(7);
    bytes.extend_from_slice(&name_index.to_be_bytes());
}

fn push_utf8(bytes: &mut Vec<u8>, value: &str) {
    bytes.push(1);
    bytes.extend_from_slice(&(value.len() as u16).to_be_bytes());
    bytes.extend_from_slice(value.as_bytes());
}

/// Writes a jar holding one class file per `(entry name, access flags)`
#[allow(dead_code)]
pub fn create_class_jar(path: &Path, classes: &[(&str, u16)]) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (entry, flags) in classes {
        let internal_name = entry.trim_end_matches(".class");
        zip.start_file(*entry, options).unwrap();
        zip.write_all(&class_bytes(internal_name, *flags)).unwrap();
    }
    zip.finish().unwrap();
}

/// Writes class files under a class directory
#[allow(dead_code)]
pub fn create_class_dir(root: &Path, classes: &[(&str, u16)]) {
    for (entry, flags) in classes {
        let path = root.join(entry);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let internal_name = entry.trim_end_matches(".class");
        std::fs::write(path, class_bytes(internal_name, *flags)).unwrap();
    }
}
