//! Sequential filter chain.

use log::debug;

use crate::filters::{Filter, SeedSource};
use crate::image::RasterImage;

/// Ordered list of filters applied as a left fold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPipeline {
    filters: Vec<Filter>,
}

impl FilterPipeline {
    pub fn new(filters: Vec<Filter>) -> Self {
        FilterPipeline { filters }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter in order, each on the previous one's output.
    ///
    /// An empty pipeline hands `image` back untouched. Each intermediate
    /// image is dropped as soon as its successor exists.
    pub fn apply(&self, image: RasterImage, seeds: &mut dyn SeedSource) -> RasterImage {
        self.filters
            .iter()
            .enumerate()
            .fold(image, |current, (step, filter)| {
                debug!(
                    "step {}/{}: {filter} on {}x{}",
                    step + 1,
                    self.filters.len(),
                    current.width(),
                    current.height()
                );
                filter.apply(&current, seeds)
            })
    }
}

impl From<Vec<Filter>> for FilterPipeline {
    fn from(filters: Vec<Filter>) -> Self {
        FilterPipeline::new(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FixedSeeds;
    use crate::image::Color;
    use ndarray::Array2;

    fn sample() -> RasterImage {
        RasterImage::from_pixels(Array2::from_shape_fn((3, 4), |(y, x)| {
            Color::rgb((y * 60) as u8, (x * 50) as u8, 90)
        }))
    }

    #[test]
    fn test_empty_pipeline_returns_input() {
        let img = sample();
        let mut seeds = FixedSeeds::new(vec![(0, 0)]).unwrap();

        let result = FilterPipeline::default().apply(img.clone(), &mut seeds);

        assert_eq!(result, img);
    }

    #[test]
    fn test_filters_run_in_command_order() {
        let img = sample();
        let mut seeds = FixedSeeds::new(vec![(0, 0)]).unwrap();

        // Crop then negate: 2 bottom rows, 3 left columns, inverted
        let pipeline = FilterPipeline::new(vec![
            Filter::Crop { width: 3, height: 2 },
            Filter::Negative,
        ]);
        let result = pipeline.apply(img.clone(), &mut seeds);

        assert_eq!((result.height(), result.width()), (2, 3));
        let src = img.pixel(1, 2);
        assert_eq!(
            result.pixel(0, 2),
            Color::rgb(255 - src.red, 255 - src.green, 255 - src.blue)
        );
    }

    #[test]
    fn test_order_matters() {
        let img = sample();
        let mut seeds = FixedSeeds::new(vec![(0, 0)]).unwrap();

        let a = FilterPipeline::new(vec![Filter::Negative, Filter::EdgeDetection { threshold: 10 }])
            .apply(img.clone(), &mut seeds);
        let b = FilterPipeline::new(vec![Filter::EdgeDetection { threshold: 10 }, Filter::Negative])
            .apply(img, &mut seeds);

        assert_ne!(a, b);
    }
}
