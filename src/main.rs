use clap::Parser;
use log::{LevelFilter, info, warn};
use rpool::ascii::{height_im_to_ascii, mask_to_ascii};
use rpool::desc::{PoolDesc, SourceDesc, parse_pool_json};
use rpool::PoolResult;
use rpool::im::MaskIm;
use rpool::water::{LayerReport, estimate_water_volume_with};
use std::path::{Path, PathBuf};

/// Default run: a fresh 6x6 random terrain with heights up to 10, every level printed.
/// `--png` and the random-terrain flags only swap the source; the rest of the demo stays.
const DEMO_JSON: &str = r#"
    {
        "version": 1,
        "source": { "kind": "random", "rows": 6, "cols": 6, "max_height": 10 },
        "print_layers": true
    }
"#;

const DEFAULT_ROWS: usize = 6;
const DEFAULT_COLS: usize = 6;
const DEFAULT_MAX_HEIGHT: u32 = 10;

#[derive(Debug, Parser)]
#[command(name = "rpool", about = "Estimate how much water settles on a height-map")]
struct Args {
    /// JSON run description. Terrain flags are ignored when given.
    #[arg(long)]
    desc: Option<PathBuf>,

    /// Grayscale PNG height-map.
    #[arg(long, conflicts_with = "desc")]
    png: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    #[arg(long)]
    max_height: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Print the terrain and layer mask for every water level.
    #[arg(long)]
    print_layers: bool,

    /// Write per-level mask and water PNGs here.
    #[arg(long)]
    dump_dir: Option<PathBuf>,

    /// error, warn, info, debug or trace. Falls back to RUST_LOG, then info.
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let log_level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
}

fn resolve_desc(args: &Args) -> PoolResult<PoolDesc> {
    let mut desc = match &args.desc {
        Some(path) => parse_pool_json(&std::fs::read_to_string(path)?)?,
        None => {
            let mut desc = parse_pool_json(DEMO_JSON)?;
            if let Some(path) = &args.png {
                desc.source = SourceDesc::Png { path: path.clone() };
            } else if args.rows.is_some()
                || args.cols.is_some()
                || args.max_height.is_some()
                || args.seed.is_some()
            {
                desc.source = SourceDesc::Random {
                    rows: args.rows.unwrap_or(DEFAULT_ROWS),
                    cols: args.cols.unwrap_or(DEFAULT_COLS),
                    max_height: args.max_height.unwrap_or(DEFAULT_MAX_HEIGHT),
                    seed: args.seed,
                };
            }
            desc
        }
    };

    desc.print_layers |= args.print_layers;
    if args.dump_dir.is_some() {
        desc.dump_dir = args.dump_dir.clone();
    }
    Ok(desc)
}

#[cfg(feature = "im-io")]
fn dump_layer(
    dir: &Path,
    height_im: &rpool::im::HeightIm,
    max_height: u32,
    layer_im: &MaskIm,
    report: &LayerReport,
) -> PoolResult<()> {
    use rpool::im::{copy_mask_im_to_rgba_im, height_im_to_rgba_im};

    layer_im.save_png(dir.join(format!("layer_{:04}.png", report.z)))?;

    let mut water_rgba = height_im_to_rgba_im(height_im, max_height);
    copy_mask_im_to_rgba_im(&report.water_im, &mut water_rgba, 40, 90, 220);
    water_rgba.save_png(dir.join(format!("water_{:04}.png", report.z)))?;
    Ok(())
}

#[cfg(not(feature = "im-io"))]
fn dump_layer(
    dir: &Path,
    _height_im: &rpool::im::HeightIm,
    _max_height: u32,
    _layer_im: &MaskIm,
    _report: &LayerReport,
) -> PoolResult<()> {
    Err(rpool::PoolError::Desc(format!(
        "cannot dump to {}: built without im-io",
        dir.display()
    )))
}

fn main() -> PoolResult<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let desc = resolve_desc(&args)?;
    let height_im = desc.source.load_height_im()?;
    let max_height = height_im.min_max().map_or(0, |(_, max_h)| max_h);
    info!("terrain {}x{} from {:?}", height_im.w, height_im.h, desc.source);

    let height_ascii = height_im_to_ascii(&height_im);
    print!("{height_ascii}");
    println!();

    let mut dump_dir = desc.dump_dir.clone();
    if let Some(dir) = &dump_dir {
        if let Err(err) = std::fs::create_dir_all(dir) {
            warn!("not dumping layers, cannot create {}: {err}", dir.display());
            dump_dir = None;
        }
    }

    // Rendering and dumping only read what the estimator hands over; a failed dump is
    // reported and the sweep carries on.
    let mut observer = |layer_im: &MaskIm, report: &LayerReport| {
        if desc.print_layers {
            println!("Z = {}", report.z);
            println!("Matrix:");
            print!("{height_ascii}");
            println!("Layer matrix:");
            print!("{}", mask_to_ascii(layer_im));
            println!("Layer empty area: {}", report.area);
            println!("------------");
        }

        if let Some(dir) = &dump_dir {
            if let Err(err) = dump_layer(dir, &height_im, max_height, layer_im, report) {
                warn!("layer z={} not dumped: {err}", report.z);
            }
        }
    };
    let volume = estimate_water_volume_with(&height_im, &mut observer)?;

    println!("Water volume: {volume}");
    Ok(())
}
