use img_compose::*;

fn loaded(name: &str, format: SourceFormat, size: usize) -> LoadedImage {
    LoadedImage {
        file_name: name.to_string(),
        format,
        data: vec![0u8; size],
    }
}

#[test]
fn test_add_preserves_selection_order() {
    let mut set = WorkingSet::new();
    set.add(loaded("a.jpg", SourceFormat::Jpeg, 10));
    set.add(loaded("b.png", SourceFormat::Png, 20));
    set.add(loaded("c.jpg", SourceFormat::Jpeg, 30));

    let names: Vec<&str> = set.images().iter().map(|i| i.file_name.as_str()).collect();
    assert_eq!(names, ["a.jpg", "b.png", "c.jpg"]);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_ids_are_unique_and_stable() {
    let mut set = WorkingSet::new();
    let a = set.add(loaded("a.jpg", SourceFormat::Jpeg, 10));
    let b = set.add(loaded("b.jpg", SourceFormat::Jpeg, 10));
    assert_ne!(a, b);

    set.remove(a).unwrap();
    let c = set.add(loaded("c.jpg", SourceFormat::Jpeg, 10));

    // Ids are never reused within a session.
    assert_ne!(c, a);
    assert_ne!(c, b);
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut set = WorkingSet::new();
    let ids = set.extend([
        loaded("a.jpg", SourceFormat::Jpeg, 10),
        loaded("b.jpg", SourceFormat::Jpeg, 20),
        loaded("c.jpg", SourceFormat::Jpeg, 30),
    ]);

    let removed = set.remove(ids[1]).unwrap();
    assert_eq!(removed.file_name, "b.jpg");

    let names: Vec<&str> = set.images().iter().map(|i| i.file_name.as_str()).collect();
    assert_eq!(names, ["a.jpg", "c.jpg"]);
}

#[test]
fn test_remove_unknown_id() {
    let mut set = WorkingSet::new();
    set.add(loaded("a.jpg", SourceFormat::Jpeg, 10));
    assert!(set.remove(99).is_none());
    assert_eq!(set.len(), 1);
}

#[test]
fn test_totals_track_adds_and_removes() {
    let mut set = WorkingSet::new();
    assert_eq!(set.total_bytes(), 0);

    let a = set.add(loaded("a.jpg", SourceFormat::Jpeg, 1_000_000));
    set.add(loaded("b.jpg", SourceFormat::Jpeg, 2_000_000));
    assert_eq!(set.total_bytes(), 3_000_000);

    set.remove(a);
    assert_eq!(set.total_bytes(), 2_000_000);
}

#[test]
fn test_estimated_bytes_mixes_formats() {
    let mut set = WorkingSet::new();
    set.extend([
        loaded("a.jpg", SourceFormat::Jpeg, 1_000_000),
        loaded("b.jpg", SourceFormat::Jpeg, 2_000_000),
        loaded("c.webp", SourceFormat::WebP, 500_000),
    ]);

    let estimated = set.estimated_bytes(50).unwrap();
    assert!((estimated - 1_925_000.0).abs() < 1.0);
    assert_eq!(format_byte_size(estimated), "1.84 MB");

    // Swapping one member for a PNG raises the estimate via the
    // lossless floor.
    set.clear();
    set.extend([
        loaded("a.png", SourceFormat::Png, 1_000_000),
        loaded("b.jpg", SourceFormat::Jpeg, 2_000_000),
    ]);
    let mixed = set.estimated_bytes(50).unwrap();
    assert!((mixed - (800_000.0 + 1_100_000.0)).abs() < 1.0);
}

#[test]
fn test_clear_empties_the_set() {
    let mut set = WorkingSet::new();
    set.add(loaded("a.jpg", SourceFormat::Jpeg, 10));
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.total_bytes(), 0);
}
