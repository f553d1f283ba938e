//! Hexapod body-pose CLI.
//!
//! Provides two modes of operation:
//! - `solve`: Apply a body rotation and translation and print the resulting
//!   leg angles, or the reason the pose was rejected
//! - `info`: Print the robot configuration and crate versions

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use hexapod_core::prelude::*;
use hexapod_ik::{IkError, LegAngles, PoseSolver};
use hexapod_model::VirtualHexapod;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Hexapod body-pose inverse kinematics.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a body pose and print the leg angles.
    Solve {
        #[command(flatten)]
        robot: RobotArgs,

        /// Rotation about the x-axis (degrees).
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rot_x: f64,

        /// Rotation about the y-axis (degrees).
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rot_y: f64,

        /// Rotation about the z-axis (degrees).
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rot_z: f64,

        /// Translation along x as a fraction of the middle width, in [-1, 1].
        #[arg(short = 'x', long, default_value_t = 0.0, allow_hyphen_values = true)]
        end_x: f64,

        /// Translation along y as a fraction of the side width, in [-1, 1].
        #[arg(short = 'y', long, default_value_t = 0.0, allow_hyphen_values = true)]
        end_y: f64,

        /// Translation along z as a fraction of the tibia length, in [-1, 1].
        #[arg(short = 'z', long, default_value_t = 0.0, allow_hyphen_values = true)]
        end_z: f64,
    },

    /// Print the robot configuration and crate information.
    Info {
        #[command(flatten)]
        robot: RobotArgs,
    },
}

/// Robot selection shared by all subcommands.
#[derive(Args)]
struct RobotArgs {
    /// TOML configuration file. Defaults to the reference robot.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the starting hip stance (degrees).
    #[arg(long, allow_hyphen_values = true)]
    hip_stance: Option<f64>,

    /// Override the starting leg stance (degrees).
    #[arg(long, allow_hyphen_values = true)]
    leg_stance: Option<f64>,
}

impl RobotArgs {
    fn load(&self) -> Result<HexapodConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => HexapodConfig::from_file(path)?,
            None => HexapodConfig::default(),
        };
        if let Some(hip_stance) = self.hip_stance {
            config.stance.hip_stance = hip_stance;
        }
        if let Some(leg_stance) = self.leg_stance {
            config.stance.leg_stance = leg_stance;
        }
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

fn format_info(config: &HexapodConfig, command: &PoseCommand) -> String {
    let [rot_x, rot_y, rot_z] = command.rotation;
    let [end_x, end_y, end_z] = command.offset;
    let d = &config.dimensions;
    let s = &config.stance;
    format!(
        "\
+----------------+------------+--------------+------------+
| rot.x: {rot_x:<+7.2} | x: {end_x:<+5.2}  | coxia: {coxia:>5.0} | fro: {front:>5.0} |
| rot.y: {rot_y:<+7.2} | y: {end_y:<+5.2}  | femur: {femur:>5.0} | sid: {side:>5.0} |
| rot.z: {rot_z:<+7.2} | z: {end_z:<+5.2}  | tibia: {tibia:>5.0} | mid: {middle:>5.0} |
+----------------+------------+--------------+------------+
| hip_stance: {hip:<+6.2} | leg_stance: {leg:<+6.2} |
+---------------------+---------------------+
",
        coxia = d.coxia,
        femur = d.femur,
        tibia = d.tibia,
        front = d.front,
        side = d.side,
        middle = d.middle,
        hip = s.hip_stance,
        leg = s.leg_stance,
    )
}

fn format_angles(angles: &[LegAngles]) -> String {
    let mut table = String::from(
        "\
+----------------+------------+------------+------------+
| leg name       | coxia      | femur      | tibia      |
+----------------+------------+------------+------------+
",
    );
    for (leg, angle) in LegId::ALL.into_iter().zip(angles) {
        let _ = writeln!(
            table,
            "| {:14} | {:<+10.2} | {:<+10.2} | {:<+10.2} |",
            leg.name(),
            angle.coxia,
            angle.femur,
            angle.tibia
        );
    }
    table
}

fn format_alert(error: &IkError) -> String {
    format!("ALERT\n{error}\n")
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_solve(config: &HexapodConfig, command: &PoseCommand) -> Result<(), HexapodError> {
    command.validate()?;
    let body = VirtualHexapod::from_config(config)?;
    let solver = PoseSolver::new(config.solver);
    let outcome = solver.solve(body, command);

    match outcome.leg_angles() {
        Ok(angles) => {
            info!("pose solved");
            print!("{}", format_angles(&angles));
        }
        Err(error) => {
            info!(%error, "pose rejected");
            print!("{}", format_alert(&error));
        }
    }
    print!("{}", format_info(config, command));
    Ok(())
}

fn run_info(config: &HexapodConfig) {
    println!("hexapod v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  hexapod-core  {}", env!("CARGO_PKG_VERSION"));
    println!("  hexapod-model {}", env!("CARGO_PKG_VERSION"));
    println!("  hexapod-ik    {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("rest height: {:.2}", config.rest_height());
    print!("{}", format_info(config, &PoseCommand::neutral()));
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result: Result<(), HexapodError> = match cli.command {
        Some(Commands::Solve {
            robot,
            rot_x,
            rot_y,
            rot_z,
            end_x,
            end_y,
            end_z,
        }) => robot.load().map_err(HexapodError::from).and_then(|config| {
            run_solve(&config, &PoseCommand::new(rot_x, rot_y, rot_z, end_x, end_y, end_z))
        }),
        Some(Commands::Info { robot }) => robot.load().map(|config| run_info(&config)).map_err(HexapodError::from),
        None => run_solve(&HexapodConfig::default(), &PoseCommand::neutral()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_table_has_a_row_per_leg() {
        let angles = [LegAngles {
            coxia: 1.5,
            femur: -2.0,
            tibia: 0.0,
        }; 6];
        let table = format_angles(&angles);
        assert_eq!(table.lines().count(), 3 + LegId::COUNT);
        assert!(table.contains("| right-middle   | +1.50      | -2.00      | +0.00      |"));
    }

    #[test]
    fn alert_carries_error_message() {
        let alert = format_alert(&IkError::TibiaTooLong { leg: LegId::LeftBack });
        assert!(alert.starts_with("ALERT\n"));
        assert!(alert.contains("left-back leg's tibia is too long"));
    }

    #[test]
    fn info_block_shows_dimensions() {
        let text = format_info(&HexapodConfig::default(), &PoseCommand::neutral());
        assert!(text.contains("coxia:    58"));
        assert!(text.contains("mid:    93"));
    }

    #[test]
    fn stance_overrides_apply() {
        let robot = RobotArgs {
            config: None,
            hip_stance: Some(10.0),
            leg_stance: None,
        };
        let config = robot.load().unwrap();
        assert!((config.stance.hip_stance - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_stance_override_rejected() {
        let robot = RobotArgs {
            config: None,
            hip_stance: None,
            leg_stance: Some(200.0),
        };
        assert!(matches!(robot.load(), Err(ConfigError::InvalidStance { .. })));
    }

    #[test]
    fn out_of_range_offset_is_a_command_error() {
        let command = PoseCommand::new(0.0, 0.0, 0.0, 0.0, 0.0, 1.5);
        let err = run_solve(&HexapodConfig::default(), &command).unwrap_err();
        assert!(matches!(err, HexapodError::Command(_)));
    }

    #[test]
    fn cli_parses_negative_values() {
        let cli = Cli::try_parse_from(["hexapod", "solve", "--rot-y", "-12.5", "-z", "-0.3"]).unwrap();
        let Some(Commands::Solve { rot_y, end_z, .. }) = cli.command else {
            panic!("expected solve");
        };
        assert!((rot_y + 12.5).abs() < f64::EPSILON);
        assert!((end_z + 0.3).abs() < f64::EPSILON);
    }
}
