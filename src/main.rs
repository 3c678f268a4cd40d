use std::path::PathBuf;

use clap::Parser;
use log::info;
use vitrine::content::SectionsConfig;
use vitrine::dom::StaticDocument;
use vitrine::error::VitrineError;
use vitrine::host::{StaticEnvironment, Viewport};
use vitrine::options::Options;
use vitrine::scene::model::ManifestFile;
use vitrine::scene::{ModelManifest, Part, SceneProvider, ShowcaseScene};
use vitrine::showcase::Showcase;
use vitrine::stage::StagePhase;

const FRAME: f32 = 1.0 / 60.0;

/// Scroll a showcase page headlessly and log what the timeline does.
#[derive(Parser, Debug)]
#[command(name = "vitrine", version)]
struct Args {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f32,
    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,
    /// Options preset (TOML).
    #[arg(long)]
    options: Option<PathBuf>,
    /// Section content (TOML).
    #[arg(long)]
    sections: Option<PathBuf>,
    /// Model manifest (JSON). Without one, a built-in headphone model is
    /// used.
    #[arg(long)]
    model: Option<PathBuf>,
    /// Simulate a reduced-motion preference.
    #[arg(long)]
    reduced_motion: bool,
    /// Scroll positions sampled between the top and the end of the pin.
    #[arg(long, default_value_t = 12)]
    steps: u32,
    /// Seconds of frames run after each scroll step.
    #[arg(long, default_value_t = 1.5)]
    settle: f32,
    /// Resize to this width halfway through the walk.
    #[arg(long)]
    resize_to: Option<f32>,
    /// Write the effective options to this TOML file.
    #[arg(long)]
    save_options: Option<PathBuf>,
    /// Write the options JSON Schema to this file.
    #[arg(long)]
    schema: Option<PathBuf>,
    /// List the option presets found in this directory and exit.
    #[arg(long)]
    list_presets: Option<PathBuf>,
}

fn headphones() -> ModelManifest {
    let part = |name: &str, position: [f32; 3]| ModelManifest {
        name: name.to_owned(),
        position,
        children: Vec::new(),
    };
    ModelManifest {
        name: "AirPodsMax".to_owned(),
        position: [0.0; 3],
        children: vec![
            part("Headband", [0.0, 0.45, 0.0]),
            part("Cup_L", [-0.35, 0.0, 0.0]),
            part("Cup_R", [0.35, 0.0, 0.0]),
            part("Frame", [0.0, 0.2, 0.0]),
        ],
    }
}

fn report(page: &Showcase<StaticDocument, StaticEnvironment>, y: f32) {
    let Some(scene) = page.scene() else {
        return;
    };
    match page.phase() {
        StagePhase::Active(variant) => {
            let bundle = page.stage().bundle();
            let progress = bundle
                .and_then(|b| b.scrub())
                .and_then(|id| page.registry().progress(id))
                .unwrap_or(0.0);
            let eye = scene.camera().map(|c| c.eye);
            let parts = scene.model_parts();
            let pose = |part: Part| {
                parts
                    .get(part)
                    .and_then(|node| scene.transform(node))
                    .map(|t| t.position)
            };
            info!(
                "[{variant}] scroll {y:>6.0}  progress {progress:.3}  eye {eye:?}  headband {:?}  cup_l {:?}  frame {:?}",
                pose(Part::Headband),
                pose(Part::LeftCup),
                pose(Part::Frame),
            );
        }
        StagePhase::ReducedMotion => {
            let shown = page
                .stage()
                .chapters()
                .iter()
                .filter(|c| {
                    page.document()
                        .reveal_style(c.element)
                        .is_some_and(|s| s.opacity >= 1.0)
                })
                .count();
            info!(
                "[reduced motion] scroll {y:>6.0}  {shown}/{} chapters shown",
                page.stage().chapters().len()
            );
        }
        phase => info!("[{phase}] scroll {y:>6.0}"),
    }
}

fn main() -> Result<(), VitrineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    let args = Args::parse();

    if let Some(dir) = &args.list_presets {
        let names = Options::list_presets(dir);
        info!("{} preset(s) in {}: {}", names.len(), dir.display(), names.join(", "));
        return Ok(());
    }

    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(path) = &args.save_options {
        options.save(path)?;
        info!("options written to {}", path.display());
    }
    if let Some(path) = &args.schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        std::fs::write(path, schema)?;
        info!("schema written to {}", path.display());
    }
    let sections = match &args.sections {
        Some(path) => SectionsConfig::load(path)?,
        None => SectionsConfig::default(),
    };

    let viewport = Viewport {
        width: args.width,
        height: args.height,
        device_pixel_ratio: args.dpr,
    };
    let document = sections.layout_document(&options.markup, viewport);
    let environment =
        StaticEnvironment::new(viewport).with_reduced_motion(args.reduced_motion);
    let scene = match &args.model {
        Some(path) => ShowcaseScene::new(&mut ManifestFile::new(path), viewport, &options),
        None => ShowcaseScene::new(&mut headphones(), viewport, &options),
    };
    info!("render buffer {:?}", scene.render_size());

    let mut page = Showcase::new(document, environment, options);
    let _ = page.deliver_scene(scene);

    let page_end = args.height * sections.sections.len().saturating_sub(1) as f32;
    let end = page
        .stage()
        .bundle()
        .and_then(|b| b.pin())
        .and_then(|id| page.registry().range(id))
        .map_or(page_end, |range| range.end);
    let steps = args.steps.max(1);
    let settle_frames = (args.settle / FRAME).ceil() as u32;

    for step in 0..=steps {
        if step == steps / 2 {
            if let Some(width) = args.resize_to {
                page.resize(Viewport { width, ..viewport });
            }
        }
        let y = end * step as f32 / steps as f32;
        page.scroll_to(y);
        for _ in 0..settle_frames {
            let _ = page.frame(FRAME);
        }
        report(&page, y);
    }

    let renders = page.scene().map_or(0, ShowcaseScene::renders);
    page.unmount();
    info!("done: {renders} render(s), {} trigger(s) left", page.registry().len());
    Ok(())
}
