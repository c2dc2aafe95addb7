use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use nnscope_net::{FeatureSet, Network, file_size, layer_plan};
use nnscope_view::{RenderPass, Style, channel_boards, half_piece_commands, neuron_grid};

mod netgen;
mod term;

#[derive(Parser)]
#[command(name = "nnscope", about = "Inspect NNUE network files on a chess board")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the header and layer shapes of a network file.
    Info {
        /// Network file to inspect.
        file: PathBuf,
    },
    /// Render one FT neuron's channel boards as ANSI cells.
    Board {
        /// Network file to inspect.
        file: PathBuf,
        /// FT neuron to inspect.
        #[arg(short, long, default_value_t = 0)]
        neuron: usize,
        /// Weight magnitude that saturates the tint.
        #[arg(long, default_value_t = 300)]
        saturation: i32,
    },
    /// Dump the draw commands of a full render pass.
    Scene {
        /// Network file to inspect.
        file: PathBuf,
        /// FT neuron to inspect.
        #[arg(short, long, default_value_t = 0)]
        neuron: usize,
    },
    /// Write a test network file.
    Gen {
        /// Output path.
        file: PathBuf,
        /// Feature set tag (half-compact, half-piece, half-king-piece).
        #[arg(long, default_value = "half-piece")]
        feature_set: String,
        /// RNG seed; omitted means an all-zero network.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Info { file } => cmd_info(&file),
        Command::Board {
            file,
            neuron,
            saturation,
        } => cmd_board(&file, neuron, saturation),
        Command::Scene { file, neuron } => cmd_scene(&file, neuron),
        Command::Gen {
            file,
            feature_set,
            seed,
        } => cmd_gen(&file, &feature_set, seed),
    }
}

fn cmd_info(file: &PathBuf) -> Result<()> {
    let network = Network::from_file(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    println!("feature set:  {}", network.feature_set());
    println!("features:     {}", network.num_features());
    println!("file size:    {} bytes", file_size(network.feature_set()));
    println!();
    println!("layer  inputs  outputs  weight  bias");
    for (position, (layer, spec)) in network
        .layers()
        .iter()
        .zip(layer_plan(network.feature_set()))
        .enumerate()
    {
        println!(
            "{:>5}  {:>6}  {:>7}  i{:<5}  i{}",
            position,
            layer.num_inputs(),
            layer.num_outputs(),
            spec.weight_width.bits(),
            spec.bias_width.bits(),
        );
    }
    Ok(())
}

fn cmd_board(file: &PathBuf, neuron: usize, saturation: i32) -> Result<()> {
    let network = Network::from_file(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    let style = Style {
        saturation,
        ..Style::default()
    };

    let boards = channel_boards(network.ft(), neuron, &style)
        .with_context(|| format!("cannot map neuron {neuron}"))?;

    println!("neuron {neuron} of {}", network.ft().num_outputs());
    for board in &boards {
        term::print_board(board);
    }
    Ok(())
}

fn cmd_scene(file: &PathBuf, neuron: usize) -> Result<()> {
    let network = Network::from_file(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    let style = Style::default();

    let mut pass = RenderPass::new();
    let commands = half_piece_commands(&mut pass, network.ft(), neuron, &style)
        .with_context(|| format!("cannot map neuron {neuron}"))?;
    let grid = neuron_grid(
        &pass,
        nnscope_view::Point::new(0.0, 0.0),
        network.ft(),
        neuron,
        &style,
    )?;

    for command in &commands {
        println!("{command:?}");
    }
    for marker in &grid.markers {
        println!("{marker:?}");
    }
    for connection in &grid.connections {
        println!("{connection:?}");
    }
    info!(
        board_commands = commands.len(),
        markers = grid.markers.len(),
        connections = grid.connections.len(),
        "scene dumped"
    );
    Ok(())
}

fn cmd_gen(file: &PathBuf, tag: &str, seed: Option<u64>) -> Result<()> {
    let Some(feature_set) = FeatureSet::from_tag(tag) else {
        bail!("unknown feature set \"{tag}\"");
    };

    let bytes = netgen::generate(feature_set, seed)?;
    std::fs::write(file, &bytes)
        .with_context(|| format!("failed to write {}", file.display()))?;
    info!(
        feature_set = %feature_set,
        bytes = bytes.len(),
        path = %file.display(),
        "wrote network file"
    );
    Ok(())
}
