use anyhow::Result;
use clap::Parser;

use huepick::cli::Args;
use huepick::config::Config;
use huepick::output::{
    default_output_path, format_hex_list, format_preview, validate_input_name, write_image,
};
use huepick::pipeline::composite::{composite, render_strip, strip_width};
use huepick::pipeline::extract_palette;
use huepick::pipeline::resample::load_image;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    validate_input_name(&args.image)?;
    let config = args.apply_overrides(Config::load_or_default(args.config.as_deref())?);
    config.validate()?;

    let img = load_image(&args.image)?;
    log::info!(
        "loaded {} ({}x{})",
        args.image.display(),
        img.width(),
        img.height()
    );

    let (palette, tiers) = extract_palette(&img, &config)?;

    print!("{}", format_hex_list(&palette));
    if args.preview {
        eprint!("{}", format_preview(&palette));
    }

    if let Some(path) = &args.sample {
        write_image(&tiers.high, path)?;
    }
    if let Some(path) = &args.strip {
        let strip = render_strip(&palette, strip_width(img.width()), img.height());
        write_image(&strip, path)?;
    }
    if !args.no_composite {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.image));
        write_image(&composite(&palette, &img), &path)?;
    }

    Ok(())
}
