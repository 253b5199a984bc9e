mod cli;

use tfbox::load;
use tfbox::BoxedValue;

fn main() {
    use clap::Parser;
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("TFBOX_LOG"))
        .with_writer(std::io::stderr)
        .init();

    for new_path in cli.directory.iter() {
        match new_path.canonicalize() {
            Err(e) => {
                eprintln!(
                    "Failed to resolve path for -C/--directory {}\n{}",
                    new_path.display(),
                    e
                );
                std::process::exit(1);
            }
            Ok(cwd) => {
                if let Err(err) = std::env::set_current_dir(&cwd) {
                    eprintln!("Failed to set work directory to {}\n{}", cwd.display(), err,);
                    std::process::exit(1);
                }

                tracing::info!(directory=%cwd.display(), "Changed working directory");
            }
        }
    }

    let command_result = match cli.command {
        cli::Command::Box(box_cli) => box_value(box_cli),
        cli::Command::Paths(paths_cli) => paths(paths_cli),
    };

    if let Err(e) = command_result {
        for error in e.chain() {
            eprintln!("{error}")
        }
        std::process::exit(1);
    }
}

pub fn box_value(cli: cli::BoxCommand) -> anyhow::Result<()> {
    let format = cli.input.input_format.map(Into::into);

    let object = load_object(&cli.input)?;
    let unknown = match &cli.unknown {
        Some(path) => load::load_overlay(path, format)?,
        None => Default::default(),
    };
    let sensitive = match &cli.sensitive {
        Some(path) => load::load_overlay(path, format)?,
        None => Default::default(),
    };

    let boxed = tfbox::box_value(&object, &unknown, &sensitive);

    output(&cli.output, &boxed)?;
    Ok(())
}

pub fn paths(cli: cli::PathsCommand) -> anyhow::Result<()> {
    let object = load_object(&cli.input)?;

    for path in tfbox::boxing::paths(&object) {
        println!("{path}");
    }

    Ok(())
}

fn load_object(input: &cli::InputArgs) -> anyhow::Result<tfbox::NativeValue> {
    let format = input.input_format.map(Into::into);

    let Some(path) = &input.object else {
        let stdin = std::io::read_to_string(std::io::stdin())?;
        let object = load::parse_str(&stdin, format.unwrap_or(load::InputFormat::Json))?;
        return Ok(object);
    };

    Ok(load::load_file(path, format)?)
}

fn output(output: &cli::OutputArgs, value: &BoxedValue) -> anyhow::Result<()> {
    match output.format {
        cli::OutputFormat::Yaml => serde_yaml::to_writer(std::io::stdout(), value)?,
        cli::OutputFormat::Json => serde_json::to_writer_pretty(std::io::stdout(), value)?,
    };

    Ok(())
}
