mod common;

use common::{ACC_ANNOTATION, ACC_CLASS, ACC_ENUM, ACC_INTERFACE, create_class_dir, create_class_jar};
use pkgscope_api::{ClassKind, LocationKind, ScanError};
use pkgscope_java::{Classpath, java_scanner};
use std::collections::HashSet;
use tempfile::tempdir;

#[test]
fn test_scan_package_in_jar() {
    let dir = tempdir().unwrap();
    let jar = dir.path().join("app.jar");
    create_class_jar(
        &jar,
        &[
            ("com/acme/Foo.class", ACC_CLASS),
            ("com/acme/web/Controller.class", ACC_CLASS),
            ("com/other/Skip.class", ACC_CLASS),
        ],
    );

    let scanner = java_scanner(Classpath::new([jar.clone()]));
    assert_eq!(scanner.resolve("com.acme").unwrap().kind, LocationKind::Archive);

    let names = scanner.scan("com.acme").unwrap();
    assert_eq!(names, vec!["com.acme.Foo", "com.acme.web.Controller"]);
}

#[test]
fn test_scan_package_in_class_directory() {
    let dir = tempdir().unwrap();
    create_class_dir(
        dir.path(),
        &[
            ("com/acme/Foo.class", ACC_CLASS),
            ("com/acme/Foo$Inner.class", ACC_CLASS),
            ("com/acme/api/Service.class", ACC_INTERFACE),
            ("com/acme/api/model/Status.class", ACC_ENUM),
        ],
    );

    let scanner = java_scanner(Classpath::new([dir.path().to_path_buf()]));
    let names: HashSet<String> = scanner.scan("com.acme").unwrap().into_iter().collect();

    let expected: HashSet<String> = [
        "com.acme.Foo",
        "com.acme.Foo$Inner",
        "com.acme.api.Service",
        "com.acme.api.model.Status",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_unknown_package_on_classpath() {
    let dir = tempdir().unwrap();
    let scanner = java_scanner(Classpath::new([dir.path().to_path_buf()]));

    let err = scanner.scan("org.nowhere").unwrap_err();
    assert!(matches!(err, ScanError::ResourceNotFound(_)));
}

#[test]
fn test_scanned_names_load_with_kinds() {
    let dir = tempdir().unwrap();
    let jar = dir.path().join("app.jar");
    create_class_jar(
        &jar,
        &[
            ("com/acme/Foo.class", ACC_CLASS),
            ("com/acme/Service.class", ACC_INTERFACE),
            ("com/acme/Status.class", ACC_ENUM),
            ("com/acme/Marker.class", ACC_ANNOTATION),
        ],
    );

    let scanner = java_scanner(Classpath::new([jar.clone()]));
    let mut kinds = Vec::new();
    for name in scanner.scan("com.acme").unwrap() {
        let handle = scanner.load_class("com.acme", &name).unwrap();
        assert_eq!(handle.origin, jar);
        kinds.push((handle.name, handle.kind));
    }

    assert_eq!(
        kinds,
        vec![
            ("com.acme.Foo".to_string(), ClassKind::Class),
            ("com.acme.Service".to_string(), ClassKind::Interface),
            ("com.acme.Status".to_string(), ClassKind::Enum),
            ("com.acme.Marker".to_string(), ClassKind::Annotation),
        ]
    );
}

#[test]
fn test_load_class_from_directory_classpath() {
    let dir = tempdir().unwrap();
    create_class_dir(dir.path(), &[("com/acme/Foo.class", ACC_CLASS)]);

    let scanner = java_scanner(Classpath::new([dir.path().to_path_buf()]));
    let handle = scanner.load_class("com.acme", "com.acme.Foo").unwrap();

    assert_eq!(handle.kind, ClassKind::Class);
    assert_eq!(handle.origin, dir.path());
}
