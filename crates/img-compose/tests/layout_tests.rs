use img_compose::*;

#[test]
fn test_wide_image_on_a4_portrait() {
    // 1000x500 pixels, A4 portrait, 10mm margin: printable 190x277.
    // Width-first fit gives 190x95, centered on the page.
    let g = layout_page(1000, 500, 210.0, 297.0, 10.0).unwrap();
    assert!((g.x - 10.0).abs() < 1e-4);
    assert!((g.y - 101.0).abs() < 1e-4);
    assert!((g.width - 190.0).abs() < 1e-4);
    assert!((g.height - 95.0).abs() < 1e-4);
}

#[test]
fn test_fits_printable_bounds_and_keeps_aspect() {
    let cases = [
        (1000u32, 500u32),
        (500, 1000),
        (3000, 3000),
        (1, 10_000),
        (10_000, 1),
        (4032, 3024),
    ];

    for (w, h) in cases {
        let g = layout_page(w, h, 210.0, 297.0, 10.0).unwrap();
        assert!(g.width <= 190.0 + 1e-4, "{}x{} width={}", w, h, g.width);
        assert!(g.height <= 277.0 + 1e-4, "{}x{} height={}", w, h, g.height);

        let input_aspect = w as f32 / h as f32;
        assert!(
            (g.aspect_ratio() - input_aspect).abs() < 1e-3 * input_aspect,
            "{}x{} aspect {} vs {}",
            w,
            h,
            g.aspect_ratio(),
            input_aspect
        );
    }
}

#[test]
fn test_image_is_centered() {
    for (w, h) in [(1000u32, 500u32), (500, 1000), (777, 333)] {
        let g = layout_page(w, h, 210.0, 297.0, 10.0).unwrap();
        assert!((g.center_x() - 105.0).abs() < 1e-3);
        assert!((g.center_y() - 148.5).abs() < 1e-3);
    }
}

#[test]
fn test_portrait_image_on_portrait_page_is_height_constrained() {
    let g = layout_page(2100, 2970, 210.0, 297.0, 10.0).unwrap();
    assert!((g.height - 277.0).abs() < 1e-3);
    assert!(g.width < 190.0);
}

#[test]
fn test_custom_page_and_margin() {
    // Square page, 5mm margin, square image fills the printable area.
    let g = layout_page(200, 200, 100.0, 100.0, 5.0).unwrap();
    assert!((g.x - 5.0).abs() < 1e-4);
    assert!((g.y - 5.0).abs() < 1e-4);
    assert!((g.width - 90.0).abs() < 1e-4);
    assert!((g.height - 90.0).abs() < 1e-4);
}

#[test]
fn test_zero_margin() {
    let g = layout_page(100, 100, 210.0, 297.0, 0.0).unwrap();
    assert!((g.width - 210.0).abs() < 1e-4);
    assert!((g.height - 210.0).abs() < 1e-4);
}

#[test]
fn test_degenerate_inputs_rejected() {
    assert!(matches!(
        layout_page(0, 100, 210.0, 297.0, 10.0),
        Err(ComposeError::InvalidArgument(_))
    ));
    assert!(matches!(
        layout_page(100, 0, 210.0, 297.0, 10.0),
        Err(ComposeError::InvalidArgument(_))
    ));
    assert!(matches!(
        layout_page(100, 100, 210.0, 297.0, 105.0),
        Err(ComposeError::InvalidArgument(_))
    ));
}
