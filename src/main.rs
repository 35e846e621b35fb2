use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use whitted::parser::SceneFile;
use whitted::scene::RenderSettings;

mod cli;

use cli::Args;

fn run(args: Args) -> whitted::Result<()> {
    let settings = RenderSettings { shadows: args.shadows, max_reflect: args.max_reflect, ..RenderSettings::default() };

    let file = match &args.scene {
        Some(path) => {
            info!("reading scene from {}", path.display());
            SceneFile::read(File::open(path)?, settings)?
        }
        None => SceneFile::read(io::stdin().lock(), settings)?,
    };

    let image = file.scene.render_image(&file.camera, args.width, args.height);

    match &args.output {
        Some(path) => image.write_ppm(&mut BufWriter::new(File::create(path)?))?,
        None => image.write_ppm(&mut BufWriter::new(io::stdout().lock()))?,
    }

    return Ok(());
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_default_env().filter_level(args.log_level.clone().into()).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
