use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Extract the dominant color palette of an image and draw it beside the image.
#[derive(Parser, Debug)]
#[command(name = "huepick", version, about)]
pub struct Args {
    /// Path to the input image (.jpg, .jpeg or .png)
    pub image: PathBuf,

    /// Write the composite image here instead of <stem>_with_palette.<ext>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read settings from a TOML file; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of palette colors
    #[arg(short = 'n', long = "colors")]
    pub colors: Option<usize>,

    /// Pixel budget of the sample the first color is picked from
    #[arg(long)]
    pub low_budget: Option<usize>,

    /// Pixel budget of the sample every later color is picked from
    #[arg(long)]
    pub high_budget: Option<usize>,

    /// Channel delta below which two colors count as similar
    #[arg(long)]
    pub similar: Option<u8>,

    /// Channel delta above which two colors count as distinct
    #[arg(long)]
    pub distinct: Option<u8>,

    /// Also save the palette strip on its own
    #[arg(long)]
    pub strip: Option<PathBuf>,

    /// Also save the high-budget sample the palette was picked from
    #[arg(long)]
    pub sample: Option<PathBuf>,

    /// Print colored swatches to the terminal
    #[arg(long)]
    pub preview: bool,

    /// Skip writing the composite image
    #[arg(long, conflicts_with = "output")]
    pub no_composite: bool,

    /// Score candidates on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl Args {
    /// Apply command-line overrides on top of `config`.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(n) = self.colors {
            config.selection.palette_size = n;
        }
        if let Some(budget) = self.low_budget {
            config.sampling.low_budget = budget;
        }
        if let Some(budget) = self.high_budget {
            config.sampling.high_budget = budget;
        }
        if let Some(similar) = self.similar {
            config.metric.similar_below = similar;
        }
        if let Some(distinct) = self.distinct {
            config.metric.distinct_above = distinct;
        }
        if self.sequential {
            config.selection.parallel = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "huepick",
            "reef.png",
            "-n",
            "5",
            "--high-budget",
            "4000",
            "--distinct",
            "70",
            "--sequential",
        ]);
        let config = args.apply_overrides(Config::default());
        assert_eq!(config.selection.palette_size, 5);
        assert_eq!(config.sampling.high_budget, 4_000);
        assert_eq!(config.sampling.low_budget, 1_000);
        assert_eq!(config.metric.distinct_above, 70);
        assert!(!config.selection.parallel);
    }

    #[test]
    fn no_flags_keep_config() {
        let args = Args::parse_from(["huepick", "reef.png"]);
        assert_eq!(args.apply_overrides(Config::default()), Config::default());
    }

    #[test]
    fn no_composite_conflicts_with_output() {
        let result =
            Args::try_parse_from(["huepick", "reef.png", "--no-composite", "-o", "out.png"]);
        assert!(result.is_err());
    }
}
