use anyhow::Result;
use autosnake::game::{ControlMode, GameConfig};
use autosnake::modes::{EvalConfig, EvalMode, PlayMode};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "autosnake")]
#[command(version, about = "Terminal Snake with a pathfinding autopilot")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Side length of the square board
    #[arg(long, default_value = "20")]
    size: usize,

    /// Who controls the snake at startup (Space hands over at runtime)
    #[arg(long, default_value = "human")]
    start: Start,

    /// Milliseconds between moves under keyboard control
    #[arg(long, default_value = "200")]
    human_tick_ms: u64,

    /// Milliseconds between moves under autopilot control
    #[arg(long, default_value = "150")]
    agent_tick_ms: u64,

    /// Episodes to run in eval mode
    #[arg(long, default_value = "20")]
    episodes: usize,

    /// Step cap per eval episode
    #[arg(long, default_value = "10000")]
    max_steps: usize,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play in the terminal, steering by keyboard or watching the autopilot
    Play,
    /// Run headless autopilot episodes and print statistics
    Eval,
}

#[derive(Clone, ValueEnum)]
enum Start {
    /// Keyboard steering
    Human,
    /// Autopilot control
    Auto,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let mut config = GameConfig::new(cli.size);
    config.human_tick_ms = cli.human_tick_ms;
    config.agent_tick_ms = cli.agent_tick_ms;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let start_mode = match cli.start {
                Start::Human => ControlMode::Human,
                Start::Auto => ControlMode::Auto,
            };

            let mut play_mode = PlayMode::new(config, start_mode);
            play_mode.run().await?;
        }
        Mode::Eval => {
            let eval_config = EvalConfig {
                episodes: cli.episodes,
                max_steps: cli.max_steps,
                game_config: config,
            };

            let mut eval_mode = EvalMode::new(eval_config);
            eval_mode.run()?;
        }
    }

    Ok(())
}
