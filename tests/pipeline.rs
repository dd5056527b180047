mod common;

use bmp_filters::filters::{gaussian, grayscale, sobel};
use bmp_filters::{bmp, Rgb};
use common::{uniform_rgb, ScratchFile};

#[test]
fn uniform_bitmap_is_a_fixed_point_of_grayscale_plus_blur() {
    let _ = env_logger::builder().is_test(true).try_init();

    // 4x4 all-gray RGB(128), through the full pipeline. 128 * 0.93 truncates
    // to 119; from there a normalized convolution must not move any pixel.
    let scratch = ScratchFile::new("uniform-blur");
    bmp::save(&scratch.0, &uniform_rgb(4, 4, Rgb::new(128, 128, 128))).expect("save input");

    let decoded = bmp::load(&scratch.0).expect("load input");
    let mut gray = grayscale(&decoded.pixels);
    assert!(
        gray.data.iter().all(|&v| v == 119),
        "uniform 128 must grayscale to 119, got {:?}",
        gray.data
    );

    gaussian(&mut gray, 1).expect("blur");
    assert!(
        gray.data.iter().all(|&v| v == 119),
        "blur of a uniform image must not change it, got {:?}",
        gray.data
    );

    let out = ScratchFile::new("uniform-blur-out");
    bmp::save(&out.0, &gray).expect("save output");
    let reread = bmp::load(&out.0).expect("reload output");
    assert!(reread.pixels.data.iter().all(|&p| p == Rgb::new(119, 119, 119)));
}

#[test]
fn sobel_pipeline_finds_a_vertical_edge_through_the_codec() {
    let _ = env_logger::builder().is_test(true).try_init();

    let width = 8usize;
    let height = 8usize;
    let mut img = bmp_filters::ImageRgb::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { 0 } else { 255 };
            img.set(x, y, Rgb::new(v, v, v));
        }
    }

    let scratch = ScratchFile::new("sobel-step");
    bmp::save(&scratch.0, &img).expect("save input");
    let decoded = bmp::load(&scratch.0).expect("load input");

    let gray = grayscale(&decoded.pixels);
    let out = sobel(&gray);

    assert!(
        out.gy.data.iter().all(|&v| v == 0),
        "a vertical edge must produce no vertical response"
    );
    for y in 0..height {
        assert!(
            out.gx.get(3, y) > 0 && out.gx.get(4, y) > 0,
            "boundary columns must respond at y={y}"
        );
        assert_eq!(out.magnitude.get(0, y), 0, "far field stays flat at y={y}");
    }

    let out_path = ScratchFile::new("sobel-step-out");
    bmp::save(&out_path.0, &out.magnitude).expect("save magnitude");
    let reread = bmp::load(&out_path.0).expect("reload magnitude");
    assert_eq!(reread.info_header.width as usize, width);
    assert_eq!(reread.info_header.height as usize, height);
}

#[test]
fn gaussian_default_style_radius_blurs_a_step_without_overshoot() {
    let width = 12usize;
    let mut img = bmp_filters::ImageGray::new(width, 6);
    for y in 0..6 {
        for x in 0..width {
            img.set(x, y, if x < width / 2 { 0 } else { 255 });
        }
    }
    gaussian(&mut img, 3).expect("blur");

    for y in 0..6 {
        let row = img.row(y);
        assert!(
            row.windows(2).all(|w| w[0] <= w[1]),
            "blurred step must stay monotone at y={y}: {row:?}"
        );
    }
    assert!(img.get(0, 0) < 64, "far left stays dark");
    assert!(img.get(width - 1, 0) > 192, "far right stays bright");
}
