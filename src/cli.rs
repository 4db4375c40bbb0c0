//! Command-line argument parsing.
//!
//! ```text
//! bmp_filters INPUT OUTPUT [-NAME [PARAM...]]...
//! ```
//!
//! | Filter | Parameters |
//! |--------|------------|
//! | `-crop` | `HEIGHT WIDTH` (nonzero integers) |
//! | `-gs` | none |
//! | `-neg` | none |
//! | `-sharp` | none |
//! | `-edge` | `THRESHOLD` (nonzero integer) |
//! | `-blur` | `SIGMA` (positive real, at most [`MAX_SIGMA`]) |
//! | `-voronoi` | `CLUSTER_COUNT` (positive integer, at most [`MAX_CLUSTER_COUNT`]) |
//!
//! Any malformed filter aborts parsing with a [`CliError`].

use std::path::PathBuf;
use std::str::FromStr;

use crate::filters::Filter;
use crate::pipeline::FilterPipeline;

/// Usage line printed after an argument error.
pub const USAGE: &str =
    "usage: bmp_filters INPUT OUTPUT [-crop H W] [-gs] [-neg] [-sharp] [-edge T] [-blur SIGMA] [-voronoi N]...";

/// Largest accepted blur sigma. The kernel has `2 * floor(3 * sigma) + 1` taps.
pub const MAX_SIGMA: f64 = 1000.0;

/// Largest accepted Voronoi cluster count.
pub const MAX_CLUSTER_COUNT: u32 = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("expected input and output paths")]
    MissingPaths,

    #[error("expected a filter starting with '-', found {0:?}")]
    ExpectedFilter(String),

    #[error("unknown filter -{0}")]
    UnknownFilter(String),

    #[error("-{filter} takes {expected} parameter(s), found {found}")]
    WrongArity {
        filter: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("-{filter}: {value:?} is not a valid number")]
    InvalidNumber { filter: &'static str, value: String },

    #[error("-{filter}: {reason}")]
    InvalidParameter {
        filter: &'static str,
        reason: &'static str,
    },
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pipeline: FilterPipeline,
}

/// Parse arguments, excluding the program name.
pub fn parse<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let [input, output, rest @ ..] = args.as_slice() else {
        return Err(CliError::MissingPaths);
    };

    let mut filters = Vec::new();
    let mut i = 0;
    while i < rest.len() {
        let name = rest[i]
            .strip_prefix('-')
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CliError::ExpectedFilter(rest[i].clone()))?;

        let params_len = rest[i + 1..]
            .iter()
            .take_while(|token| !is_filter_token(token))
            .count();
        let params = &rest[i + 1..i + 1 + params_len];

        filters.push(parse_filter(name, params)?);
        i += 1 + params_len;
    }

    Ok(Invocation {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        pipeline: FilterPipeline::new(filters),
    })
}

/// `-name` starts a filter; `-5` or `-0.5` is a negative parameter.
fn is_filter_token(token: &str) -> bool {
    token
        .strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| !c.is_ascii_digit() && c != '.')
}

fn parse_filter(name: &str, params: &[String]) -> Result<Filter, CliError> {
    let filter = match name {
        "crop" => {
            let [height, width] = expect_params::<2>("crop", params)?;
            let height: i32 = number("crop", height)?;
            let width: i32 = number("crop", width)?;
            if height == 0 || width == 0 {
                return Err(invalid("crop", "dimensions must be nonzero"));
            }
            Filter::Crop { width, height }
        }
        "gs" => {
            expect_params::<0>("gs", params)?;
            Filter::Grayscale
        }
        "neg" => {
            expect_params::<0>("neg", params)?;
            Filter::Negative
        }
        "sharp" => {
            expect_params::<0>("sharp", params)?;
            Filter::Sharpening
        }
        "edge" => {
            let [threshold] = expect_params::<1>("edge", params)?;
            let threshold: i32 = number("edge", threshold)?;
            if threshold == 0 {
                return Err(invalid("edge", "threshold must be nonzero"));
            }
            Filter::EdgeDetection { threshold }
        }
        "blur" => {
            let [sigma] = expect_params::<1>("blur", params)?;
            let sigma: f64 = number("blur", sigma)?;
            if !(sigma.is_finite() && sigma > 0.0) {
                return Err(invalid("blur", "sigma must be a positive number"));
            }
            if sigma > MAX_SIGMA {
                return Err(invalid("blur", "sigma is too large"));
            }
            Filter::GaussianBlur { sigma }
        }
        "voronoi" => {
            let [count] = expect_params::<1>("voronoi", params)?;
            let cluster_count: u32 = number("voronoi", count)?;
            if cluster_count == 0 {
                return Err(invalid("voronoi", "cluster count must be positive"));
            }
            if cluster_count > MAX_CLUSTER_COUNT {
                return Err(invalid("voronoi", "cluster count is too large"));
            }
            Filter::VoronoiBlur { cluster_count }
        }
        other => return Err(CliError::UnknownFilter(other.to_string())),
    };
    Ok(filter)
}

fn expect_params<'a, const N: usize>(
    filter: &'static str,
    params: &'a [String],
) -> Result<[&'a str; N], CliError> {
    if params.len() != N {
        return Err(CliError::WrongArity {
            filter,
            expected: N,
            found: params.len(),
        });
    }
    Ok(std::array::from_fn(|i| params[i].as_str()))
}

fn number<T: FromStr>(filter: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        filter,
        value: value.to_string(),
    })
}

fn invalid(filter: &'static str, reason: &'static str) -> CliError {
    CliError::InvalidParameter { filter, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(args: &[&str]) -> Result<Vec<Filter>, CliError> {
        parse(args.iter().copied()).map(|inv| inv.pipeline.filters().to_vec())
    }

    #[test]
    fn test_paths_only() {
        let inv = parse(["in.bmp", "out.bmp"]).unwrap();

        assert_eq!(inv.input, PathBuf::from("in.bmp"));
        assert_eq!(inv.output, PathBuf::from("out.bmp"));
        assert!(inv.pipeline.is_empty());
    }

    #[test]
    fn test_missing_paths() {
        assert_eq!(parse(["in.bmp"]).unwrap_err(), CliError::MissingPaths);
        assert_eq!(parse(Vec::<String>::new()).unwrap_err(), CliError::MissingPaths);
    }

    #[test]
    fn test_all_filters_in_order() {
        let result = filters(&[
            "a", "b", "-crop", "10", "20", "-gs", "-neg", "-sharp", "-edge", "30", "-blur", "1.5",
            "-voronoi", "8",
        ])
        .unwrap();

        assert_eq!(
            result,
            vec![
                Filter::Crop { width: 20, height: 10 },
                Filter::Grayscale,
                Filter::Negative,
                Filter::Sharpening,
                Filter::EdgeDetection { threshold: 30 },
                Filter::GaussianBlur { sigma: 1.5 },
                Filter::VoronoiBlur { cluster_count: 8 },
            ]
        );
    }

    #[test]
    fn test_negative_numbers_are_parameters() {
        let result = filters(&["a", "b", "-crop", "-1", "5", "-edge", "-3"]).unwrap();

        assert_eq!(
            result,
            vec![
                Filter::Crop { width: 5, height: -1 },
                Filter::EdgeDetection { threshold: -3 },
            ]
        );
    }

    #[test]
    fn test_wrong_arity_aborts() {
        assert_eq!(
            filters(&["a", "b", "-crop", "10", "-gs"]).unwrap_err(),
            CliError::WrongArity {
                filter: "crop",
                expected: 2,
                found: 1
            }
        );
        assert!(matches!(
            filters(&["a", "b", "-gs", "1"]).unwrap_err(),
            CliError::WrongArity { filter: "gs", .. }
        ));
    }

    #[test]
    fn test_bad_tokens() {
        assert_eq!(
            filters(&["a", "b", "gs"]).unwrap_err(),
            CliError::ExpectedFilter("gs".into())
        );
        assert_eq!(
            filters(&["a", "b", "-swirl"]).unwrap_err(),
            CliError::UnknownFilter("swirl".into())
        );
        assert!(matches!(
            filters(&["a", "b", "-blur", "soft"]).unwrap_err(),
            CliError::InvalidNumber { filter: "blur", .. }
        ));
    }

    #[test]
    fn test_invalid_parameters() {
        for args in [
            &["a", "b", "-blur", "0"][..],
            &["a", "b", "-blur", "-1.0"][..],
            &["a", "b", "-voronoi", "0"][..],
            &["a", "b", "-edge", "0"][..],
            &["a", "b", "-crop", "0", "4"][..],
            &["a", "b", "-blur", "1e18"][..],
            &["a", "b", "-blur", "1000.5"][..],
            &["a", "b", "-voronoi", "4294967295"][..],
            &["a", "b", "-voronoi", "1048577"][..],
        ] {
            assert!(
                matches!(filters(args).unwrap_err(), CliError::InvalidParameter { .. }),
                "{args:?}"
            );
        }
    }

    #[test]
    fn test_parameter_limits_are_inclusive() {
        let result = filters(&["a", "b", "-blur", "1000", "-voronoi", "1048576"]).unwrap();

        assert_eq!(
            result,
            vec![
                Filter::GaussianBlur { sigma: MAX_SIGMA },
                Filter::VoronoiBlur {
                    cluster_count: MAX_CLUSTER_COUNT
                },
            ]
        );
    }
}
