use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "denoyte", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the header of a float map (dimensions and byte order).
    Info(InfoArgs),
    /// Decode a float map and write it as an opaque PNG.
    Convert(ConvertArgs),
    /// Run an external denoiser over a beauty float map and write a PNG.
    Denoise(DenoiseArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input float map.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input float map.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DenoiseArgs {
    /// Beauty float map (the noisy render).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Albedo guide float map.
    #[arg(long)]
    albedo: Option<PathBuf>,

    /// Normal guide float map.
    #[arg(long)]
    normal: Option<PathBuf>,

    /// Path of the OIDN-style denoiser executable.
    #[arg(long)]
    oidn: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Keep the intermediate denoised float map next to the output.
    #[arg(long, default_value_t = false)]
    keep_pfm: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Convert(args) => cmd_convert(args),
        Command::Denoise(args) => cmd_denoise(args),
    }
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open float map '{}'", args.in_path.display()))?;
    let (dims, order) = denoyte::read_pfm_header(&mut BufReader::new(f))?;

    let order = match order {
        denoyte::ByteOrder::LittleEndian => "little-endian",
        denoyte::ByteOrder::BigEndian => "big-endian",
    };
    println!("width:      {}", dims.width);
    println!("height:     {}", dims.height);
    println!("byte order: {order}");
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let img = denoyte::read_pfm_file(&args.in_path)?;
    write_png(&args.out, &img)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_denoise(args: DenoiseArgs) -> anyhow::Result<()> {
    let denoiser = denoyte::OidnDenoiser::new(&args.oidn);
    if !denoiser.is_available() {
        anyhow::bail!(
            "denoiser executable '{}' does not exist",
            denoiser.executable().display()
        );
    }

    let denoised_pfm = args.out.with_extension("pfm");
    denoiser.denoise(
        &args.in_path,
        args.albedo.as_deref(),
        args.normal.as_deref(),
        &denoised_pfm,
    )?;

    let img = denoyte::read_pfm_file(&denoised_pfm)?;
    write_png(&args.out, &img)?;

    if !args.keep_pfm && let Err(e) = std::fs::remove_file(&denoised_pfm) {
        eprintln!(
            "could not remove intermediate '{}': {e}",
            denoised_pfm.display()
        );
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(out: &Path, img: &denoyte::FloatImage) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &img.to_rgba8(),
        img.width,
        img.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}
