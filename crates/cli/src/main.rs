#![deny(unsafe_code)]
//! CLI binary for pillar.
//!
//! Subcommands:
//! - `render [sketch]`: generate once, write an SVG (plus optional PNG and recipe)
//! - `list`: print available sketches, presets and noise fields
//! - `schema [sketch]`: print the parameter schema as JSON

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use pillar_core::noise_field::list_noise;
use pillar_core::params::merge_params;
use pillar_core::{PresetBook, Recipe, Sketch, Srgb, Viewport, Xorshift64};
use pillar_sketches::svg::{provenance_filename, write_svg, DEFAULT_PREFIX};
use pillar_sketches::SketchKind;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "pillar", about = "Noise-warped line field generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a sketch once and export it as SVG.
    Render(RenderArgs),
    /// List available sketches, presets and noise fields.
    List,
    /// Print the parameter schema of a sketch.
    Schema {
        /// Sketch name.
        #[arg(default_value = "pillar")]
        sketch: String,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Sketch name.
    #[arg(default_value = "pillar")]
    sketch: String,

    /// Canvas width in SVG user units.
    #[arg(short = 'W', long, default_value_t = 1000.0)]
    width: f64,

    /// Canvas height in SVG user units.
    #[arg(short = 'H', long, default_value_t = 1000.0)]
    height: f64,

    /// Noise field (simplex, perlin).
    #[arg(short, long, default_value = "simplex")]
    noise: String,

    /// Seed of the noise field's permutation table.
    #[arg(long, default_value_t = 42)]
    noise_seed: u32,

    /// Start from a named preset (built-in or from --presets).
    #[arg(short, long)]
    preset: Option<String>,

    /// JSON file of extra presets, `{"name": {params}}`.
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Parameter overrides as a JSON object, applied after the preset.
    #[arg(long, default_value = "{}")]
    params: String,

    /// Pick a random seed and noise seed.
    #[arg(long)]
    random: bool,

    /// Stroke color (black, white, #rgb or #rrggbb).
    #[arg(long, default_value = "black")]
    stroke_color: String,

    /// Background color; omitted from the SVG when not given.
    #[arg(long)]
    background: Option<String>,

    /// Directory for provenance-named exports.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Explicit SVG path, overriding the provenance name.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a PNG preview to this path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write a recipe JSON next to the SVG.
    #[arg(long)]
    recipe: bool,

    /// Replay a saved recipe; --params still applies on top.
    #[arg(long, conflicts_with_all = ["preset", "sketch"])]
    from_recipe: Option<PathBuf>,
}

/// Everything needed to build one sketch.
struct Plan {
    sketch: String,
    viewport: Viewport,
    noise: String,
    noise_seed: u32,
    params: Value,
}

fn parse_overrides(raw: &str) -> Result<Value, CliError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    if !value.is_object() {
        return Err(CliError::Input("--params must be a JSON object".into()));
    }
    Ok(value)
}

/// Resolves sketch, viewport, noise and params from flags or a recipe.
fn plan(args: &RenderArgs) -> Result<Plan, CliError> {
    let mut plan = match &args.from_recipe {
        Some(path) => {
            let recipe = Recipe::load(path)?;
            Plan {
                viewport: recipe.viewport()?,
                sketch: recipe.sketch,
                noise: recipe.noise,
                noise_seed: recipe.noise_seed,
                params: recipe.params,
            }
        }
        None => {
            let params = match &args.preset {
                Some(name) => {
                    let mut book = SketchKind::presets(&args.sketch)?;
                    if let Some(file) = &args.presets {
                        book.extend(PresetBook::load(file)?);
                    }
                    book.get(name)?.clone()
                }
                None => json!({}),
            };
            Plan {
                sketch: args.sketch.clone(),
                viewport: Viewport::new(args.width, args.height)?,
                noise: args.noise.clone(),
                noise_seed: args.noise_seed,
                params,
            }
        }
    };
    merge_params(&mut plan.params, &parse_overrides(&args.params)?);

    if args.random {
        let mut rng = Xorshift64::from_time();
        let seed = rng.next_range(0.0, pillar_curves::params::SEED_RANGE);
        merge_params(&mut plan.params, &json!({ "seed": seed }));
        plan.noise_seed = rng.next_u32();
        log::debug!("random seed {seed}, noise seed {}", plan.noise_seed);
    }
    Ok(plan)
}

fn render(args: RenderArgs, json_mode: bool) -> Result<(), CliError> {
    let stroke_color = Srgb::parse(&args.stroke_color)?;
    let background = args.background.as_deref().map(Srgb::parse).transpose()?;
    let plan = plan(&args)?;

    let sketch = SketchKind::from_name(
        &plan.sketch,
        plan.viewport,
        &plan.noise,
        plan.noise_seed,
        &plan.params,
    )?
    .with_stroke_color(stroke_color);
    let params = sketch.params();

    let svg_path = match &args.output {
        Some(path) => path.clone(),
        None => {
            std::fs::create_dir_all(&args.out_dir)?;
            args.out_dir.join(provenance_filename(DEFAULT_PREFIX, &params))
        }
    };
    write_svg(
        &svg_path,
        sketch.curves(),
        &sketch.stroke(),
        sketch.viewport(),
        background,
    )?;

    if let Some(png_path) = &args.png {
        write_preview(&sketch, background.unwrap_or(Srgb::WHITE), png_path)?;
    }

    let recipe_path = if args.recipe {
        let path = svg_path.with_extension("json");
        let mut recipe = Recipe::new(&plan.sketch, plan.viewport, &plan.noise, plan.noise_seed);
        recipe.params = params.clone();
        recipe.save(&path)?;
        Some(path)
    } else {
        None
    };

    if json_mode {
        let info = json!({
            "sketch": plan.sketch,
            "width": plan.viewport.width(),
            "height": plan.viewport.height(),
            "noise": plan.noise,
            "noise_seed": plan.noise_seed,
            "curves": sketch.curves().len(),
            "params": params,
            "output": svg_path.display().to_string(),
            "png": args.png.as_ref().map(|p| p.display().to_string()),
            "recipe": recipe_path.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} ({}x{}, {} noise seed {}, {} curves) -> {}",
            plan.sketch,
            plan.viewport.width(),
            plan.viewport.height(),
            plan.noise,
            plan.noise_seed,
            sketch.curves().len(),
            svg_path.display()
        );
    }
    Ok(())
}

#[cfg(feature = "png")]
fn write_preview(sketch: &SketchKind, background: Srgb, path: &Path) -> Result<(), CliError> {
    pillar_sketches::snapshot::write_sketch_png(sketch, background, path)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_preview(_sketch: &SketchKind, _background: Srgb, _path: &Path) -> Result<(), CliError> {
    Err(CliError::Input(
        "PNG previews need the `png` feature".into(),
    ))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let sketches = SketchKind::list_sketches();
            let mut presets = serde_json::Map::new();
            for name in sketches {
                let book = SketchKind::presets(name)?;
                presets.insert(name.to_string(), json!(book.names()));
            }
            if cli.json {
                let info = json!({
                    "sketches": sketches,
                    "presets": presets,
                    "noise": list_noise(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sketches:");
                for name in sketches {
                    println!("  {name}");
                }
                println!("Presets:");
                for (sketch, names) in &presets {
                    let names: Vec<&str> = names
                        .as_array()
                        .map(|a| a.iter().filter_map(Value::as_str).collect())
                        .unwrap_or_default();
                    println!("  {sketch}: {}", names.join(", "));
                }
                println!("Noise:");
                println!("  {}", list_noise().join(", "));
            }
        }
        Command::Schema { sketch } => {
            let schema = SketchKind::schema(&sketch)?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Render(args) => render(args, cli.json)?,
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
