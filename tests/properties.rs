use bmp_filters::codec::{decode, encode};
use bmp_filters::{Color, Filter, FixedSeeds, RasterImage};
use ndarray::Array2;
use proptest::prelude::*;

fn arb_color() -> impl Strategy<Value = Color> {
    any::<[u8; 3]>().prop_map(Color::from_bgr)
}

fn arb_image() -> impl Strategy<Value = RasterImage> {
    (1usize..9, 1usize..9).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(arb_color(), rows * cols).prop_map(move |pixels| {
            let grid = Array2::from_shape_vec((rows, cols), pixels).unwrap();
            RasterImage::from_pixels(grid)
        })
    })
}

fn apply(filter: Filter, image: &RasterImage) -> RasterImage {
    filter.apply(image, &mut FixedSeeds::new(vec![(0, 0)]).unwrap())
}

proptest! {
    #[test]
    fn codec_round_trip(image in arb_image()) {
        let bytes = encode(&image);
        let decoded = decode(&bytes).unwrap();

        prop_assert_eq!(&decoded, &image);
        prop_assert_eq!(encode(&decoded), bytes);
    }

    #[test]
    fn negative_is_an_involution(image in arb_image()) {
        let twice = apply(Filter::Negative, &apply(Filter::Negative, &image));
        prop_assert_eq!(twice, image);
    }

    #[test]
    fn grayscale_is_idempotent(image in arb_image()) {
        let once = apply(Filter::Grayscale, &image);
        let twice = apply(Filter::Grayscale, &once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn full_extent_crop_is_identity(image in arb_image()) {
        let crop = Filter::Crop {
            width: image.width() as i32,
            height: image.height() as i32,
        };
        let result = apply(crop, &image);
        prop_assert_eq!(result.pixels(), image.pixels());
    }

    #[test]
    fn edge_detection_is_binary(image in arb_image(), threshold in -600i32..600) {
        let result = apply(Filter::EdgeDetection { threshold }, &image);
        prop_assert!(result
            .pixels()
            .iter()
            .all(|&c| c == Color::BLACK || c == Color::WHITE));
    }

    #[test]
    fn voronoi_colors_come_from_seeds(
        image in arb_image(),
        raw_seeds in prop::collection::vec((0usize..64, 0usize..64), 1..12),
    ) {
        let (rows, cols) = (image.height(), image.width());
        let seeds: Vec<(usize, usize)> = raw_seeds.iter().map(|&(r, c)| (r % rows, c % cols)).collect();
        let allowed: Vec<Color> = seeds.iter().map(|&(r, c)| image.pixel(r, c)).collect();

        let filter = Filter::VoronoiBlur { cluster_count: seeds.len() as u32 };
        let result = filter.apply(&image, &mut FixedSeeds::new(seeds).unwrap());

        prop_assert!(result.pixels().iter().all(|c| allowed.contains(c)));
    }

    #[test]
    fn uniform_images_survive_blur(value in any::<u8>(), sigma in 0.3f64..3.0) {
        let image = RasterImage::from_pixels(Array2::from_elem((4, 4), Color::gray(value)));
        let result = apply(Filter::GaussianBlur { sigma }, &image);
        prop_assert_eq!(result, image);
    }
}
