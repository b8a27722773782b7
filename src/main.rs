//! Headless demo: a leader circles the pond and swimmers form a chain behind it.
use std::f32::consts::TAU;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use glam::Vec3;
use log::info;
use serde::Serialize;
use swimmer::{begin_trailing, init_logging, Collider, Pose, Swimmer, SwimmerConfig, SwimmerPlugin};

/// Buoyant swimmers trailing a leader
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Number of fixed 1/60 s steps to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u32,
    /// Number of swimmers in the chain
    #[arg(long, default_value_t = 3)]
    followers: usize,
    /// Step at which the chain starts trailing
    #[arg(long, default_value_t = 60)]
    join_at: u32,
    /// JSON file overriding swimmer tuning
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Moves its entity around a horizontal circle.
#[derive(Component)]
struct Course {
    radius: f32,
    angular_speed: f32,
    angle: f32,
}

fn steer_leader_system(time: Res<Time>, mut query: Query<(&mut Course, &mut Pose)>) {
    for (mut course, mut pose) in &mut query {
        course.angle = (course.angle + course.angular_speed * time.delta_secs()) % TAU;
        pose.position = Vec3::new(
            course.radius * course.angle.cos(),
            0.0,
            course.radius * course.angle.sin(),
        );
    }
}

#[derive(Serialize)]
struct SwimmerReport {
    phase: swimmer::SwimmerPhase,
    position: [f32; 3],
    velocity: f32,
    actively_following: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => SwimmerConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SwimmerConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins(SwimmerPlugin).add_systems(
        Update,
        steer_leader_system.before(swimmer::snapshot_positions_system),
    );

    let leader = app
        .world_mut()
        .spawn((
            Pose::from_position(Vec3::new(8.0, 0.0, 0.0)),
            Course {
                radius: 8.0,
                angular_speed: 0.5,
                angle: 0.0,
            },
        ))
        .id();

    let mut chain = Vec::with_capacity(args.followers);
    for index in 0..args.followers {
        #[expect(clippy::cast_precision_loss, reason = "Follower counts are small.")]
        let offset = index as f32 * 2.0;
        let entity = app
            .world_mut()
            .spawn((
                Swimmer::new(config),
                Pose::from_position(Vec3::new(-offset, -2.0, 4.0)),
                Collider::default(),
                Transform::default(),
            ))
            .id();
        chain.push(entity);
    }

    let step = Duration::from_secs_f32(1.0 / config.tick_rate);
    for tick in 0..args.ticks {
        if tick == args.join_at {
            let mut ahead = leader;
            for &follower in &chain {
                begin_trailing(app.world_mut(), follower, ahead)?;
                ahead = follower;
            }
            info!("chain of {} swimmers started trailing", chain.len());
        }
        app.world_mut().resource_mut::<Time>().advance_by(step);
        app.update();
    }

    let reports: Vec<SwimmerReport> = chain
        .iter()
        .filter_map(|&entity| {
            let world = app.world();
            let swimmer = world.get::<Swimmer>(entity)?;
            let pose = world.get::<Pose>(entity)?;
            Some(SwimmerReport {
                phase: swimmer.phase(),
                position: pose.position.to_array(),
                velocity: swimmer.velocity(),
                actively_following: swimmer.is_actively_following(),
            })
        })
        .collect();
    info!("final state:\n{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
